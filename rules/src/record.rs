//! 棋谱记录格式
//!
//! JSON 格式的对局记录，可重放为对局状态

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, RecordError};
use crate::game::{GameOutcome, GameState};
use crate::mark::{Mark, Move};
use crate::player::Player;

/// 棋谱版本
pub const RECORD_VERSION: &str = "1.0";

/// 对局元数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMetadata {
    /// 执 X 的玩家
    pub x_player: Player,
    /// 执 O 的玩家
    pub o_player: Player,
    /// 棋盘边长
    pub size: u8,
    /// 连子长度
    pub win_length: u8,
    /// 对局日期
    pub date: String,
    /// 对局结果
    pub result: Option<GameOutcome>,
}

/// 走法记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub row: u8,
    pub col: u8,
    pub mark: Mark,
    /// AI 搜索的节点数
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes: Option<u64>,
}

impl MoveRecord {
    /// 创建新的走法记录
    pub fn new(mv: Move, mark: Mark) -> Self {
        Self {
            row: mv.row,
            col: mv.col,
            mark,
            nodes: None,
        }
    }

    /// 带搜索节点数创建
    pub fn with_nodes(mv: Move, mark: Mark, nodes: u64) -> Self {
        Self {
            nodes: Some(nodes),
            ..Self::new(mv, mark)
        }
    }

    /// 落点
    pub fn position(&self) -> Move {
        Move::new(self.row, self.col)
    }
}

/// 完整的棋谱记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// 版本号
    pub version: String,
    /// 元数据
    pub metadata: GameMetadata,
    /// 走法列表
    pub moves: Vec<MoveRecord>,
}

impl GameRecord {
    /// 创建新的棋谱记录
    pub fn new(x_player: Player, o_player: Player, size: u8, win_length: u8) -> Self {
        Self {
            version: RECORD_VERSION.to_string(),
            metadata: GameMetadata {
                x_player,
                o_player,
                size,
                win_length,
                date: Utc::now().format("%Y-%m-%d").to_string(),
                result: None,
            },
            moves: Vec::new(),
        }
    }

    /// 添加走法
    pub fn add_move(&mut self, mv: MoveRecord) {
        self.moves.push(mv);
    }

    /// 设置对局结果
    pub fn set_result(&mut self, result: GameOutcome) {
        self.metadata.result = Some(result);
    }

    /// 转换为 JSON 字符串
    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 从 JSON 字符串解析
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        let record: GameRecord = serde_json::from_str(json)?;
        if record.version != RECORD_VERSION {
            return Err(RecordError::VersionMismatch {
                expected: RECORD_VERSION.to_string(),
                actual: record.version,
            });
        }
        Ok(record)
    }

    /// 重放棋谱，得到最终对局状态
    ///
    /// 每一步必须与当时的走子方一致
    pub fn replay(&self) -> Result<GameState, RecordError> {
        let mut game = GameState::new(self.metadata.size, self.metadata.win_length)?;

        for (index, record) in self.moves.iter().enumerate() {
            if record.mark != game.current_turn() {
                return Err(RecordError::Replay {
                    index,
                    source: GameError::OutOfTurn {
                        expected: game.current_turn(),
                        actual: record.mark,
                    },
                });
            }
            game.apply_move(record.position())
                .map_err(|source| RecordError::Replay { index, source })?;
        }

        Ok(game)
    }
}
