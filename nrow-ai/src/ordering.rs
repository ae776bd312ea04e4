//! 走法排序
//!
//! 只用于极难难度。排序只影响剪枝发生的早晚，不改变搜索得到的分数。

use rules::{Board, LineScanner, Mark, Move, WinCondition};

/// 走法分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveClass {
    /// 己方落子即获胜
    Winning,
    /// 对方落在此处即获胜
    Blocking,
    /// 其他
    Quiet,
}

/// 分类后的候选走法（每组内部保持行优先顺序）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedMoves {
    pub winning: Vec<Move>,
    pub blocking: Vec<Move>,
    pub quiet: Vec<Move>,
}

impl ClassifiedMoves {
    /// 合并为搜索顺序：胜着、堵截、其余
    pub fn into_ordered(self) -> Vec<Move> {
        let mut moves = self.winning;
        moves.extend(self.blocking);
        moves.extend(self.quiet);
        moves
    }

    pub fn len(&self) -> usize {
        self.winning.len() + self.blocking.len() + self.quiet.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 走法排序器
pub struct MoveOrderer;

impl MoveOrderer {
    /// 排序后的候选走法
    pub fn order_moves(
        board: &mut Board,
        maximizing: Mark,
        minimizing: Mark,
        win: WinCondition,
    ) -> Vec<Move> {
        Self::classify_moves(board, maximizing, minimizing, win).into_ordered()
    }

    /// 对所有空位分类
    pub fn classify_moves(
        board: &mut Board,
        maximizing: Mark,
        minimizing: Mark,
        win: WinCondition,
    ) -> ClassifiedMoves {
        let mut classified = ClassifiedMoves::default();

        for mv in board.empty_cells() {
            match Self::classify(board, mv, maximizing, minimizing, win) {
                MoveClass::Winning => classified.winning.push(mv),
                MoveClass::Blocking => classified.blocking.push(mv),
                MoveClass::Quiet => classified.quiet.push(mv),
            }
        }

        classified
    }

    /// 对单个空位分类，既是胜着又是堵截时算作胜着
    pub fn classify(
        board: &mut Board,
        mv: Move,
        maximizing: Mark,
        minimizing: Mark,
        win: WinCondition,
    ) -> MoveClass {
        if Self::completes_line(board, mv, maximizing, win) {
            MoveClass::Winning
        } else if Self::completes_line(board, mv, minimizing, win) {
            MoveClass::Blocking
        } else {
            MoveClass::Quiet
        }
    }

    /// 在 mv 落下 mark 后是否连成线（落点非空时为 false）
    fn completes_line(board: &mut Board, mv: Move, mark: Mark, win: WinCondition) -> bool {
        board
            .simulate(mv, mark)
            .map(|sim| LineScanner::has_win(&sim, mark, win))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rules::Notation;

    fn win(length: u8, size: u8) -> WinCondition {
        WinCondition::new(length, size).unwrap()
    }

    #[test]
    fn test_blocking_move_first() {
        // X 在第 0 行连了两个，O 要堵 (0, 2)
        let mut board = Notation::parse_board("XX./.../...").unwrap();
        let classified = MoveOrderer::classify_moves(&mut board, Mark::O, Mark::X, win(3, 3));

        assert!(classified.winning.is_empty());
        assert_eq!(classified.blocking, vec![Move::new(0, 2)]);
        assert_eq!(classified.len(), 7);

        let ordered = MoveOrderer::order_moves(&mut board, Mark::O, Mark::X, win(3, 3));
        assert_eq!(ordered[0], Move::new(0, 2));
        assert_eq!(
            MoveOrderer::classify(&mut board, Move::new(0, 2), Mark::O, Mark::X, win(3, 3)),
            MoveClass::Blocking
        );
    }

    #[test]
    fn test_winning_before_blocking() {
        let mut board = Notation::parse_board("XX./OO./X..").unwrap();
        let ordered = MoveOrderer::order_moves(&mut board, Mark::O, Mark::X, win(3, 3));

        assert_eq!(
            ordered,
            vec![
                Move::new(1, 2), // 胜着
                Move::new(0, 2), // 堵截
                Move::new(2, 1),
                Move::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_groups_keep_row_major_order() {
        // O 有两处胜着，X 有两处堵截
        let mut board = Notation::parse_board(".OO./X.../X.../.OO.").unwrap();
        let classified = MoveOrderer::classify_moves(&mut board, Mark::O, Mark::X, win(3, 4));

        assert_eq!(
            classified.winning,
            vec![Move::new(0, 0), Move::new(0, 3), Move::new(3, 0), Move::new(3, 3)]
        );
        assert!(classified.blocking.is_empty());

        let classified = MoveOrderer::classify_moves(&mut board, Mark::X, Mark::O, win(3, 4));
        assert_eq!(classified.winning, vec![Move::new(0, 0), Move::new(3, 0)]);
        assert_eq!(classified.blocking, vec![Move::new(0, 3), Move::new(3, 3)]);

        let ordered = classified.clone().into_ordered();
        assert_eq!(
            &ordered[..4],
            &[Move::new(0, 0), Move::new(3, 0), Move::new(0, 3), Move::new(3, 3)]
        );
        assert_eq!(ordered.len(), classified.len());
    }

    #[test]
    fn test_ordering_leaves_board_unchanged() {
        let mut board = Notation::parse_board("XO../.X../..O./....").unwrap();
        let before = board.clone();
        let ordered = MoveOrderer::order_moves(&mut board, Mark::X, Mark::O, win(3, 4));

        assert_eq!(board, before);
        let mut sorted = ordered.clone();
        sorted.sort();
        assert_eq!(sorted, board.empty_cells());
    }

    #[test]
    fn test_full_board() {
        let mut board = Notation::parse_board("XOX/XOO/OXX").unwrap();
        let classified = MoveOrderer::classify_moves(&mut board, Mark::X, Mark::O, win(3, 3));
        assert!(classified.is_empty());
    }
}
