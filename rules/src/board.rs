//! 棋盘状态

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::{GameError, Result};
use crate::mark::{Mark, Move};

/// 棋盘
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardData")]
pub struct Board {
    /// 边长
    size: u8,
    /// size x size 格子，索引为 row * size + col
    cells: Vec<Option<Mark>>,
}

/// 反序列化的原始数据，经 `TryFrom` 校验后才成为 [`Board`]
#[derive(Deserialize)]
struct BoardData {
    size: u8,
    cells: Vec<Option<Mark>>,
}

impl TryFrom<BoardData> for Board {
    type Error = GameError;

    fn try_from(data: BoardData) -> Result<Self> {
        let mut board = Board::new(data.size)?;
        if data.cells.len() != board.cells.len() {
            return Err(GameError::CellCountMismatch {
                expected: board.cells.len(),
                actual: data.cells.len(),
            });
        }
        board.cells = data.cells;
        Ok(board)
    }
}

impl Board {
    /// 创建空棋盘
    pub fn new(size: u8) -> Result<Self> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(GameError::InvalidBoardSize {
                size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            });
        }

        Ok(Self {
            size,
            cells: vec![None; size as usize * size as usize],
        })
    }

    /// 棋盘边长
    pub fn size(&self) -> u8 {
        self.size
    }

    /// 获取指定位置的标记（越界返回 None）
    pub fn get(&self, row: u8, col: u8) -> Option<Mark> {
        self.cell(Move::new(row, col))
    }

    /// 获取指定落点的标记（越界返回 None）
    pub fn cell(&self, mv: Move) -> Option<Mark> {
        if mv.is_within(self.size) {
            self.cells[mv.to_index(self.size)]
        } else {
            None
        }
    }

    /// 落点是否在棋盘内且为空
    pub fn is_empty_at(&self, mv: Move) -> bool {
        mv.is_within(self.size) && self.cells[mv.to_index(self.size)].is_none()
    }

    /// 落子
    ///
    /// 越界或已有棋子时返回错误，棋盘保持不变
    pub fn place(&mut self, row: u8, col: u8, mark: Mark) -> Result<()> {
        let mv = self.check_move(Move::new(row, col))?;
        self.set(mv, Some(mark));
        Ok(())
    }

    /// 所有空位（行优先，顺序稳定）
    pub fn empty_cells(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .filter_map(|(index, _)| Move::from_index(index, self.size))
            .collect()
    }

    /// 棋盘是否已满
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// 指定标记的棋子数
    pub fn mark_count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|cell| **cell == Some(mark)).count()
    }

    /// 已落子数
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// 清空棋盘（重新开局）
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }

    /// 模拟落子
    ///
    /// 返回的 [`Simulation`] 在离开作用域时撤销落子，
    /// 包括剪枝提前跳出和 panic 展开的路径。
    pub fn simulate(&mut self, mv: Move, mark: Mark) -> Result<Simulation<'_>> {
        let mv = self.check_move(mv)?;
        self.set(mv, Some(mark));
        Ok(Simulation { board: self, mv })
    }

    /// 校验落点：在棋盘内且为空
    fn check_move(&self, mv: Move) -> Result<Move> {
        if !mv.is_within(self.size) {
            return Err(GameError::OutOfBounds {
                row: mv.row,
                col: mv.col,
                size: self.size,
            });
        }
        if self.cells[mv.to_index(self.size)].is_some() {
            return Err(GameError::Occupied {
                row: mv.row,
                col: mv.col,
            });
        }
        Ok(mv)
    }

    fn set(&mut self, mv: Move, mark: Option<Mark>) {
        let index = mv.to_index(self.size);
        self.cells[index] = mark;
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            let line: Vec<String> = (0..self.size)
                .map(|col| match self.get(row, col) {
                    Some(mark) => mark.to_char().to_string(),
                    None => " ".to_string(),
                })
                .collect();
            writeln!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}

/// 一次临时落子
///
/// 持有棋盘的独占借用，Drop 时把落点恢复为空。
pub struct Simulation<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl Deref for Simulation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Simulation<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Simulation<'_> {
    fn drop(&mut self) {
        self.board.set(self.mv, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new(4).unwrap();
        assert_eq!(board.size(), 4);
        assert_eq!(board.empty_cells().len(), 16);
        assert!(!board.is_full());

        assert!(matches!(
            Board::new(2),
            Err(GameError::InvalidBoardSize { size: 2, .. })
        ));
        assert!(Board::new(9).is_err());
    }

    #[test]
    fn test_place() {
        let mut board = Board::new(3).unwrap();
        board.place(1, 1, Mark::X).unwrap();
        assert_eq!(board.get(1, 1), Some(Mark::X));

        board.place(2, 2, Mark::O).unwrap();
        assert_eq!(board.get(2, 2), Some(Mark::O));
    }

    #[test]
    fn test_place_rejects_occupied_and_out_of_range() {
        let mut board = Board::new(3).unwrap();
        board.place(0, 0, Mark::X).unwrap();
        let before = board.clone();

        assert_eq!(
            board.place(0, 0, Mark::O),
            Err(GameError::Occupied { row: 0, col: 0 })
        );
        assert_eq!(
            board.place(3, 1, Mark::O),
            Err(GameError::OutOfBounds { row: 3, col: 1, size: 3 })
        );
        // 失败后棋盘不变
        assert_eq!(board, before);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let mut board = Board::new(3).unwrap();
        board.place(0, 0, Mark::X).unwrap();
        board.place(1, 1, Mark::O).unwrap();
        board.place(2, 2, Mark::X).unwrap();

        let expected: Vec<Move> = (0..3u8)
            .flat_map(|row| (0..3u8).map(move |col| Move::new(row, col)))
            .filter(|mv| board.cell(*mv).is_none())
            .collect();
        assert_eq!(board.empty_cells(), expected);
        assert_eq!(board.empty_cells()[0], Move::new(0, 1));
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new(3).unwrap();
        for (i, mv) in board.empty_cells().into_iter().enumerate() {
            let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
            board.place(mv.row, mv.col, mark).unwrap();
        }
        assert!(board.is_full());
        assert!(board.empty_cells().is_empty());
        assert_eq!(board.mark_count(Mark::X), 5);
        assert_eq!(board.mark_count(Mark::O), 4);
    }

    #[test]
    fn test_simulation_restores_cell() {
        let mut board = Board::new(3).unwrap();
        board.place(0, 0, Mark::X).unwrap();
        let before = board.clone();

        {
            let mut sim = board.simulate(Move::new(1, 1), Mark::O).unwrap();
            assert_eq!(sim.get(1, 1), Some(Mark::O));

            // 嵌套模拟
            let nested = sim.simulate(Move::new(2, 2), Mark::X).unwrap();
            assert_eq!(nested.occupied_count(), 3);
        }

        assert_eq!(board, before);
        assert!(board.simulate(Move::new(0, 0), Mark::O).is_err());
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(3).unwrap();
        board.place(0, 0, Mark::X).unwrap();
        board.place(1, 1, Mark::O).unwrap();
        assert_eq!(board.to_string(), "X| | \n |O| \n | | \n");
    }

    #[test]
    fn test_deserialize_checks_dimensions() {
        let mut board = Board::new(3).unwrap();
        board.place(1, 1, Mark::X).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let parsed: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, board);

        let short = serde_json::from_str::<Board>(r#"{"size":3,"cells":[null]}"#);
        assert!(short.is_err());

        let cells = vec!["null"; 81].join(",");
        let json = format!(r#"{{"size":9,"cells":[{}]}}"#, cells);
        let oversized = serde_json::from_str::<Board>(&json);
        assert!(oversized.is_err());
    }

    #[test]
    fn test_reset() {
        let mut board = Board::new(3).unwrap();
        board.place(0, 0, Mark::X).unwrap();
        board.reset();
        assert_eq!(board.occupied_count(), 0);
    }
}
