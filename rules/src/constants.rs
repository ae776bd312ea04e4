//! 规则常量定义

/// 最小棋盘边长
pub const MIN_BOARD_SIZE: u8 = 3;

/// 最大棋盘边长
pub const MAX_BOARD_SIZE: u8 = 8;

/// 最小连子长度
pub const MIN_WIN_LENGTH: u8 = 3;

/// 默认棋盘边长（经典井字棋）
pub const DEFAULT_BOARD_SIZE: u8 = 3;

/// 默认连子长度
pub const DEFAULT_WIN_LENGTH: u8 = 3;

/// 棋盘文本表示中的空格字符
pub const EMPTY_CHAR: char = '.';

/// 棋盘文本表示中的行分隔符
pub const ROW_SEPARATOR: &str = "/";
