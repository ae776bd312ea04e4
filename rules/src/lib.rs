//! N 子棋共享规则库
//!
//! 包含:
//! - 棋子标记、落点、棋盘等核心数据结构
//! - 任意棋盘尺寸与连子长度的胜负判定
//! - 对局状态（轮次、历史、结局）
//! - 玩家与难度定义
//! - 棋盘文本表示与 JSON 棋谱

mod board;
mod constants;
mod error;
mod game;
mod mark;
mod notation;
mod player;
mod record;
mod scanner;

pub use board::{Board, Simulation};
pub use constants::*;
pub use error::{GameError, RecordError, Result};
pub use game::{apply_move, check_win, is_draw, new_game, GameOutcome, GameState, PlacedMove};
pub use mark::{Mark, Move};
pub use notation::Notation;
pub use player::{Difficulty, Player, PlayerKind};
pub use record::{GameMetadata, GameRecord, MoveRecord, RECORD_VERSION};
pub use scanner::{LineScanner, WinCondition};
