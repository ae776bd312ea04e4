//! 棋子标记与落点定义

use serde::{Deserialize, Serialize};

/// 棋子标记
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// 先手
    X,
    /// 后手
    O,
}

impl Mark {
    /// 双方标记
    pub const ALL: [Mark; 2] = [Mark::X, Mark::O];

    /// 获取对方标记
    pub fn opponent(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// 获取显示字符
    pub fn to_char(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    /// 从字符解析（不区分大小写）
    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            'x' | 'X' => Some(Mark::X),
            'o' | 'O' => Some(Mark::O),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// 落点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    /// 行 (0 起)
    pub row: u8,
    /// 列 (0 起)
    pub col: u8,
}

impl Move {
    /// 创建新落点（不检查边界）
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// 检查落点是否在指定尺寸的棋盘内
    pub fn is_within(&self, size: u8) -> bool {
        self.row < size && self.col < size
    }

    /// 转换为行优先的数组索引
    pub fn to_index(&self, size: u8) -> usize {
        self.row as usize * size as usize + self.col as usize
    }

    /// 从行优先的数组索引转换
    pub fn from_index(index: usize, size: u8) -> Option<Self> {
        let size = size as usize;
        if size == 0 || index >= size * size {
            return None;
        }
        Some(Self {
            row: (index / size) as u8,
            col: (index % size) as u8,
        })
    }

    /// 获取偏移后的落点
    pub fn offset(&self, d_row: i8, d_col: i8, size: u8) -> Option<Move> {
        let row = self.row as i16 + d_row as i16;
        let col = self.col as i16 + d_col as i16;
        if row >= 0 && col >= 0 && row < size as i16 && col < size as i16 {
            Some(Move::new(row as u8, col as u8))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
