//! N 子棋 AI 引擎
//!
//! 包含:
//! - Minimax + Alpha-Beta 搜索（深度限制）
//! - 走法排序（先胜着，再堵截）
//! - 难度策略：随机 / 搜索 / 排序后搜索

mod engine;
mod ordering;
mod search;

pub use engine::{choose_ai_move, AiConfig, AiEngine, Difficulty, Strategy};
pub use ordering::{ClassifiedMoves, MoveClass, MoveOrderer};
pub use search::{
    depth_cap_for, CandidateOrder, SearchContext, SearchEngine, SearchResult,
    DEFAULT_LARGE_BOARD_DEPTH_CAP, DRAW_SCORE, LOSS_SCORE, UNCAPPED_MAX_SIZE, WIN_SCORE,
};
