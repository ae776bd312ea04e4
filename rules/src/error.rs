//! 错误类型定义

use thiserror::Error;

use crate::mark::Mark;

/// 规则错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// 无效的棋盘尺寸
    #[error("Invalid board size: {size} (expected {min}..={max})")]
    InvalidBoardSize { size: u8, min: u8, max: u8 },

    /// 无效的连子长度
    #[error("Invalid win length: {length} (expected {min}..={size})")]
    InvalidWinLength { length: u8, min: u8, size: u8 },

    /// 调用方声明的棋盘尺寸与实际棋盘不符
    #[error("Board size mismatch: expected {expected}, board is {actual}")]
    BoardSizeMismatch { expected: u8, actual: u8 },

    /// 双方使用了同一种标记
    #[error("Maximizing and minimizing marks must differ, got {0} for both")]
    MarksNotOpposed(Mark),

    /// 未知的难度名称
    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    /// 落点超出棋盘
    #[error("Invalid move: ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: u8, col: u8, size: u8 },

    /// 落点已有棋子
    #[error("Invalid move: ({row}, {col}) is already occupied")]
    Occupied { row: u8, col: u8 },

    /// 不是该标记的回合
    #[error("Not {actual}'s turn, {expected} to move")]
    OutOfTurn { expected: Mark, actual: Mark },

    /// 游戏已结束
    #[error("Game is already over")]
    GameOver,

    /// 格子数与棋盘边长不符
    #[error("Board has {actual} cells, expected {expected}")]
    CellCountMismatch { expected: usize, actual: usize },

    /// 棋盘已满，没有可走的位置
    #[error("No moves available")]
    NoMovesAvailable,

    /// 无效的棋盘文本
    #[error("Invalid board notation: {reason}")]
    InvalidNotation { reason: String },
}

impl GameError {
    /// 是否属于配置错误（创建对局前即应拒绝）
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            GameError::InvalidBoardSize { .. }
                | GameError::InvalidWinLength { .. }
                | GameError::BoardSizeMismatch { .. }
                | GameError::MarksNotOpposed(_)
                | GameError::UnknownDifficulty(_)
        )
    }

    /// 是否属于无效走法（可恢复，棋盘保持不变）
    pub fn is_invalid_move(&self) -> bool {
        matches!(
            self,
            GameError::OutOfBounds { .. }
                | GameError::Occupied { .. }
                | GameError::OutOfTurn { .. }
                | GameError::GameOver
        )
    }
}

/// 棋谱错误
#[derive(Error, Debug)]
pub enum RecordError {
    /// JSON 序列化错误
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// 棋谱版本不支持
    #[error("Unsupported record version: expected {expected}, got {actual}")]
    VersionMismatch { expected: String, actual: String },

    /// 重放棋谱时遇到非法走法
    #[error("Replay failed at move {index}: {source}")]
    Replay {
        index: usize,
        #[source]
        source: GameError,
    },

    /// 棋谱配置无效
    #[error("Invalid record configuration: {0}")]
    Game(#[from] GameError),
}

/// 规则操作结果类型
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let err = GameError::InvalidWinLength { length: 5, min: 3, size: 4 };
        assert!(err.is_configuration());
        assert!(!err.is_invalid_move());

        let err = GameError::Occupied { row: 1, col: 1 };
        assert!(err.is_invalid_move());
        assert!(!err.is_configuration());

        assert!(!GameError::NoMovesAvailable.is_configuration());
        assert!(!GameError::NoMovesAvailable.is_invalid_move());
    }

    #[test]
    fn test_error_display() {
        let err = GameError::OutOfBounds { row: 3, col: 0, size: 3 };
        assert_eq!(err.to_string(), "Invalid move: (3, 0) is outside the 3x3 board");

        let err = GameError::MarksNotOpposed(Mark::X);
        assert_eq!(
            err.to_string(),
            "Maximizing and minimizing marks must differ, got X for both"
        );
    }
}
