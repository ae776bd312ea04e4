//! AI 引擎
//!
//! 按难度选择落子策略：简单随机，困难搜索，极难排序后搜索

use std::time::Instant;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rules::{Board, GameError, GameState, Mark, Move, WinCondition};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::search::{
    depth_cap_for, CandidateOrder, SearchContext, SearchEngine, DEFAULT_LARGE_BOARD_DEPTH_CAP,
};

// 重导出 Difficulty 以便外部使用
pub use rules::Difficulty;

/// 落子策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// 在空位中均匀随机
    Random,
    /// Minimax 搜索
    Search(CandidateOrder),
}

/// AI 配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AiConfig {
    pub difficulty: Difficulty,
    /// 边长大于 5 时的搜索深度上限
    pub large_board_depth_cap: u32,
}

impl AiConfig {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            large_board_depth_cap: DEFAULT_LARGE_BOARD_DEPTH_CAP,
        }
    }

    /// 指定大棋盘深度上限
    pub fn with_large_board_depth_cap(mut self, cap: u32) -> Self {
        self.large_board_depth_cap = cap;
        self
    }

    /// 该棋盘边长下的深度上限
    pub fn depth_cap(&self, board_size: u8) -> u32 {
        depth_cap_for(board_size, self.large_board_depth_cap)
    }

    pub fn strategy(&self) -> Strategy {
        if !self.difficulty.uses_search() {
            Strategy::Random
        } else if self.difficulty.uses_move_ordering() {
            Strategy::Search(CandidateOrder::Ordered)
        } else {
            Strategy::Search(CandidateOrder::RowMajor)
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::Hard)
    }
}

/// AI 引擎
pub struct AiEngine {
    config: AiConfig,
    rng: ChaCha8Rng,
    search: SearchEngine,
    nodes_searched: u64,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(config: AiConfig) -> Self {
        Self::with_seed(config, rand::random())
    }

    /// 从难度创建
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::new(AiConfig::from_difficulty(difficulty))
    }

    /// 使用固定种子创建（简单难度的随机落子可复现）
    pub fn with_seed(config: AiConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            search: SearchEngine::new(),
            nodes_searched: 0,
        }
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// 为 maximizing 一方选择落点
    ///
    /// 搜索期间在 board 上模拟落子，返回前全部撤销
    pub fn choose_move(
        &mut self,
        board: &mut Board,
        maximizing: Mark,
        win: WinCondition,
    ) -> rules::Result<Move> {
        self.nodes_searched = 0;

        if board.is_full() {
            warn!("棋盘已满，{} 无处落子", maximizing);
            return Err(GameError::NoMovesAvailable);
        }

        let start = Instant::now();
        let mv = match self.config.strategy() {
            Strategy::Random => {
                let empties = board.empty_cells();
                *empties.choose(&mut self.rng).ok_or(GameError::NoMovesAvailable)?
            }
            Strategy::Search(order) => {
                let depth_cap = self.config.depth_cap(board.size());
                let context = SearchContext::new(maximizing, win, depth_cap);
                let result = self
                    .search
                    .best_move(board, &context, order)
                    .ok_or(GameError::NoMovesAvailable)?;
                self.nodes_searched = result.nodes;
                result.best_move
            }
        };

        debug!(
            "AI({}) 执 {} 落子 {}, 节点数: {}, 用时: {:?}",
            self.config.difficulty,
            maximizing,
            mv,
            self.nodes_searched,
            start.elapsed()
        );

        Ok(mv)
    }

    /// 为当前走子方选择落点（不落子）
    pub fn choose_for(&mut self, game: &mut GameState) -> rules::Result<Move> {
        if game.is_over() {
            return Err(GameError::GameOver);
        }
        let win = game.win_condition();
        let mark = game.current_turn();
        self.choose_move(game.board_mut(), mark, win)
    }

    /// 获取上次搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }
}

/// 按难度为 maximizing 一方选择落点
///
/// 参数不一致（双方同子、边长不符、连子长度非法）时返回配置错误，
/// 棋盘已满时返回 NoMovesAvailable
pub fn choose_ai_move(
    board: &mut Board,
    tier: Difficulty,
    maximizing: Mark,
    minimizing: Mark,
    win_length: u8,
    board_size: u8,
) -> rules::Result<Move> {
    if maximizing == minimizing {
        return Err(GameError::MarksNotOpposed(maximizing));
    }
    if board.size() != board_size {
        return Err(GameError::BoardSizeMismatch {
            expected: board_size,
            actual: board.size(),
        });
    }
    let win = WinCondition::new(win_length, board_size)?;

    AiEngine::from_difficulty(tier).choose_move(board, maximizing, win)
}
