//! 棋盘文本表示
//!
//! 格式：从上到下逐行，行之间用 `/` 分隔，`X`/`O` 表示棋子，`.` 表示空位
//!
//! 示例：
//! `XX./.O./...`

use crate::board::Board;
use crate::constants::{EMPTY_CHAR, ROW_SEPARATOR};
use crate::error::{GameError, Result};
use crate::mark::Mark;

/// 棋盘文本表示处理
pub struct Notation;

impl Notation {
    /// 解析棋盘文本
    pub fn parse_board(text: &str) -> Result<Board> {
        let text = text.trim();
        if text.is_empty() {
            return Err(GameError::InvalidNotation {
                reason: "Empty board string".to_string(),
            });
        }

        let rows: Vec<&str> = text.split(ROW_SEPARATOR).collect();
        let size = u8::try_from(rows.len()).map_err(|_| GameError::InvalidNotation {
            reason: format!("Too many rows: {}", rows.len()),
        })?;
        let mut board = Board::new(size)?;

        for (row_idx, row) in rows.iter().enumerate() {
            let cells: Vec<char> = row.chars().collect();
            if cells.len() != size as usize {
                return Err(GameError::InvalidNotation {
                    reason: format!(
                        "Row {} has {} columns, expected {}",
                        row_idx,
                        cells.len(),
                        size
                    ),
                });
            }

            for (col_idx, c) in cells.into_iter().enumerate() {
                if c == EMPTY_CHAR {
                    continue;
                }
                let mark = Mark::from_char(c).ok_or_else(|| GameError::InvalidNotation {
                    reason: format!("Invalid mark character: {}", c),
                })?;
                board.place(row_idx as u8, col_idx as u8, mark)?;
            }
        }

        Ok(board)
    }

    /// 将棋盘转换为文本
    pub fn board_to_string(board: &Board) -> String {
        let size = board.size();
        (0..size)
            .map(|row| {
                (0..size)
                    .map(|col| board.get(row, col).map_or(EMPTY_CHAR, |mark| mark.to_char()))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join(ROW_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board() {
        let board = Notation::parse_board("XX./.O./...").unwrap();
        assert_eq!(board.size(), 3);
        assert_eq!(board.get(0, 0), Some(Mark::X));
        assert_eq!(board.get(0, 1), Some(Mark::X));
        assert_eq!(board.get(1, 1), Some(Mark::O));
        assert_eq!(board.get(0, 2), None);
        assert_eq!(board.occupied_count(), 3);
    }

    #[test]
    fn test_to_string() {
        let mut board = Board::new(4).unwrap();
        board.place(0, 3, Mark::O).unwrap();
        board.place(3, 0, Mark::X).unwrap();
        assert_eq!(Notation::board_to_string(&board), "...O/..../..../X...");
    }

    #[test]
    fn test_invalid_notation() {
        // 空字符串
        assert!(matches!(
            Notation::parse_board("  "),
            Err(GameError::InvalidNotation { .. })
        ));

        // 列数不对
        assert!(matches!(
            Notation::parse_board("XX./.O/..."),
            Err(GameError::InvalidNotation { .. })
        ));

        // 无效字符
        assert!(matches!(
            Notation::parse_board("XZ./.O./..."),
            Err(GameError::InvalidNotation { .. })
        ));

        // 尺寸越界
        assert!(matches!(
            Notation::parse_board("X./.O"),
            Err(GameError::InvalidBoardSize { size: 2, .. })
        ));
    }
}
