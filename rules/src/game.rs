//! 对局状态
//!
//! 包含外部调用方使用的入口：开局、落子、胜负与和棋判定

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::board::Board;
use crate::error::{GameError, Result};
use crate::mark::{Mark, Move};
use crate::scanner::{LineScanner, WinCondition};

/// 对局结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    /// 一方连成线
    Win { mark: Mark, line: Vec<Move> },
    /// 棋盘已满且无人获胜
    Draw,
}

impl GameOutcome {
    /// 获胜方（和棋返回 None）
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameOutcome::Win { mark, .. } => Some(*mark),
            GameOutcome::Draw => None,
        }
    }
}

/// 已落下的一步
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedMove {
    pub mv: Move,
    pub mark: Mark,
}

/// 完整的对局状态（包含走子方、历史等）
///
/// 只序列化不反序列化；从外部恢复对局请重放 [`GameRecord`](crate::GameRecord)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// 棋盘
    board: Board,
    /// 胜利条件
    win: WinCondition,
    /// 当前走子方
    current_turn: Mark,
    /// 落子历史
    history: Vec<PlacedMove>,
}

impl GameState {
    /// 创建新对局，X 先手
    ///
    /// 尺寸或连子长度无效时返回配置错误，不会创建棋盘
    pub fn new(size: u8, win_length: u8) -> Result<Self> {
        let win = WinCondition::new(win_length, size)?;
        let board = Board::new(size)?;
        Ok(Self {
            board,
            win,
            current_turn: Mark::X,
            history: Vec::new(),
        })
    }

    /// 棋盘
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 棋盘的可变借用
    ///
    /// 供 AI 搜索模拟落子使用；搜索返回时棋盘与调用前一致
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// 棋盘边长
    pub fn size(&self) -> u8 {
        self.board.size()
    }

    /// 胜利条件
    pub fn win_condition(&self) -> WinCondition {
        self.win
    }

    /// 当前走子方
    pub fn current_turn(&self) -> Mark {
        self.current_turn
    }

    /// 落子历史
    pub fn history(&self) -> &[PlacedMove] {
        &self.history
    }

    /// 当前走子方落子，并切换走子方
    ///
    /// 返回落子后的对局结果（未结束为 None）
    pub fn apply_move(&mut self, mv: Move) -> Result<Option<GameOutcome>> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let mark = self.current_turn;
        self.board.place(mv.row, mv.col, mark)?;
        self.history.push(PlacedMove { mv, mark });
        self.current_turn = mark.opponent();

        let outcome = self.outcome();
        if let Some(ref outcome) = outcome {
            info!("对局结束: {:?}，共 {} 手", outcome, self.history.len());
        }
        Ok(outcome)
    }

    /// 指定标记是否获胜
    pub fn check_win(&self, mark: Mark) -> bool {
        LineScanner::has_win(&self.board, mark, self.win)
    }

    /// 是否和棋
    pub fn is_draw(&self) -> bool {
        self.board.is_full() && !self.check_win(Mark::X) && !self.check_win(Mark::O)
    }

    /// 对局结果
    pub fn outcome(&self) -> Option<GameOutcome> {
        for mark in Mark::ALL {
            if let Some(line) = LineScanner::winning_line(&self.board, mark, self.win) {
                return Some(GameOutcome::Win { mark, line });
            }
        }
        if self.board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    /// 对局是否结束
    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// 重新开局（保持尺寸与胜利条件）
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_turn = Mark::X;
        self.history.clear();
    }
}

/// 开局
pub fn new_game(size: u8, win_length: u8) -> Result<GameState> {
    GameState::new(size, win_length)
}

/// 在棋盘上落子
pub fn apply_move(board: &mut Board, row: u8, col: u8, mark: Mark) -> Result<()> {
    board.place(row, col, mark)
}

/// 指定标记是否连成 win_length 子
///
/// win_length 超出 [3, size] 时不存在合法的连线，返回 false
pub fn check_win(board: &Board, mark: Mark, win_length: u8) -> bool {
    match WinCondition::new(win_length, board.size()) {
        Ok(win) => LineScanner::has_win(board, mark, win),
        Err(_) => false,
    }
}

/// 是否和棋：没有空位且双方都未获胜
pub fn is_draw(board: &Board, win_length: u8) -> bool {
    board.is_full()
        && !check_win(board, Mark::X, win_length)
        && !check_win(board, Mark::O, win_length)
}
