//! 连线扫描
//!
//! 对任意棋盘尺寸 n 和连子长度 k 判定胜负：
//! - 行、列：逐行逐列累计连续同色计数，遇到其他格子清零
//! - 对角线：枚举所有起点 (i, j)，0 <= i, j <= n - k，两个方向

use serde::Serialize;

use crate::board::Board;
use crate::constants::MIN_WIN_LENGTH;
use crate::error::{GameError, Result};
use crate::mark::{Mark, Move};

/// 胜利条件（连子长度）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WinCondition {
    length: u8,
}

impl WinCondition {
    /// 创建胜利条件，要求 3 <= length <= size
    pub fn new(length: u8, size: u8) -> Result<Self> {
        if length < MIN_WIN_LENGTH || length > size {
            return Err(GameError::InvalidWinLength {
                length,
                min: MIN_WIN_LENGTH,
                size,
            });
        }
        Ok(Self { length })
    }

    /// 连子长度
    pub fn length(&self) -> u8 {
        self.length
    }
}

/// 扫描方向：右、下、右下、左下
const ROW: (i8, i8) = (0, 1);
const COLUMN: (i8, i8) = (1, 0);
const DIAGONAL: (i8, i8) = (1, 1);
const ANTI_DIAGONAL: (i8, i8) = (1, -1);

/// 连线扫描器
pub struct LineScanner;

impl LineScanner {
    /// 指定标记是否已连成 win.length() 子
    pub fn has_win(board: &Board, mark: Mark, win: WinCondition) -> bool {
        Self::find_run(board, mark, win.length()).is_some()
    }

    /// 查找获胜连线
    ///
    /// 按行、列、对角线的扫描顺序返回第一条长度恰为 win.length() 的连线
    pub fn winning_line(board: &Board, mark: Mark, win: WinCondition) -> Option<Vec<Move>> {
        let (start, (d_row, d_col)) = Self::find_run(board, mark, win.length())?;
        let size = board.size();
        let mut line = Vec::with_capacity(win.length() as usize);
        let mut current = Some(start);
        while let Some(mv) = current {
            line.push(mv);
            if line.len() == win.length() as usize {
                break;
            }
            current = mv.offset(d_row, d_col, size);
        }
        Some(line)
    }

    /// 全盘扫描，返回第一条连线的起点和方向
    fn find_run(board: &Board, mark: Mark, length: u8) -> Option<(Move, (i8, i8))> {
        let n = board.size();
        if length == 0 || length > n {
            return None;
        }

        // 行
        for row in 0..n {
            let cells = (0..n).map(|col| board.get(row, col) == Some(mark));
            if let Some(col) = Self::run_end(length, cells) {
                return Some((Move::new(row, col + 1 - length), ROW));
            }
        }

        // 列
        for col in 0..n {
            let cells = (0..n).map(|row| board.get(row, col) == Some(mark));
            if let Some(row) = Self::run_end(length, cells) {
                return Some((Move::new(row + 1 - length, col), COLUMN));
            }
        }

        // 对角线：所有起点，而不只是两条主对角线
        let last = n - length;
        for i in 0..=last {
            for j in 0..=last {
                if (0..length).all(|s| board.get(i + s, j + s) == Some(mark)) {
                    return Some((Move::new(i, j), DIAGONAL));
                }

                let anti_col = n - 1 - j;
                if (0..length).all(|s| board.get(i + s, anti_col - s) == Some(mark)) {
                    return Some((Move::new(i, anti_col), ANTI_DIAGONAL));
                }
            }
        }

        None
    }

    /// 单条线的连续计数，计数达到 length 时返回当前下标
    fn run_end(length: u8, cells: impl Iterator<Item = bool>) -> Option<u8> {
        let mut run = 0u8;
        for (index, matches) in cells.enumerate() {
            if matches {
                run += 1;
                if run == length {
                    return Some(index as u8);
                }
            } else {
                run = 0;
            }
        }
        None
    }
}
