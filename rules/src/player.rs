//! 玩家与 AI 难度

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::mark::Mark;

/// AI 难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// 简单：在空位中均匀随机
    Easy,
    /// 困难：Minimax + Alpha-Beta，行优先候选
    Hard,
    /// 极难：同上，候选走法经过排序
    VeryHard,
}

impl Difficulty {
    /// 所有难度
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Hard, Difficulty::VeryHard];

    /// 配置文件中使用的名称
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
            Difficulty::VeryHard => "very_hard",
        }
    }

    /// 是否进行搜索
    pub fn uses_search(&self) -> bool {
        !matches!(self, Difficulty::Easy)
    }

    /// 是否启用走法排序
    pub fn uses_move_ordering(&self) -> bool {
        matches!(self, Difficulty::VeryHard)
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "easy" => Ok(Difficulty::Easy),
            "hard" => Ok(Difficulty::Hard),
            "very_hard" | "veryhard" => Ok(Difficulty::VeryHard),
            _ => Err(GameError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// 玩家类型
///
/// 行为由类型决定，而不是由显示名称推断
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerKind {
    Human,
    Ai(Difficulty),
}

impl PlayerKind {
    pub fn is_ai(&self) -> bool {
        matches!(self, PlayerKind::Ai(_))
    }

    /// AI 难度（人类玩家返回 None）
    pub fn difficulty(&self) -> Option<Difficulty> {
        match self {
            PlayerKind::Human => None,
            PlayerKind::Ai(difficulty) => Some(*difficulty),
        }
    }
}

/// 玩家
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// 显示名称
    pub name: String,
    /// 使用的标记
    pub mark: Mark,
    /// 玩家类型
    pub kind: PlayerKind,
}

impl Player {
    /// 创建人类玩家
    pub fn human(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
            kind: PlayerKind::Human,
        }
    }

    /// 创建 AI 玩家
    pub fn ai(name: impl Into<String>, mark: Mark, difficulty: Difficulty) -> Self {
        Self {
            name: name.into(),
            mark,
            kind: PlayerKind::Ai(difficulty),
        }
    }
}
