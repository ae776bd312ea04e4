//! 搜索引擎
//!
//! 实现 Minimax + Alpha-Beta 剪枝 + 深度限制
//!
//! 分数只有三档：己方连成线 +1，对方连成线 -1，和棋或到达深度上限 0。
//! 到达深度上限时返回 0 只是近似，不代表完美对弈；
//! 棋盘边长不超过 5 时深度不设上限，搜索到终局。

use rules::{Board, LineScanner, Mark, Move, WinCondition};
use tracing::trace;

use crate::ordering::MoveOrderer;

/// 己方获胜
pub const WIN_SCORE: i32 = 1;

/// 对方获胜
pub const LOSS_SCORE: i32 = -1;

/// 和棋 / 深度截断
pub const DRAW_SCORE: i32 = 0;

/// 不限制搜索深度的最大棋盘边长
pub const UNCAPPED_MAX_SIZE: u8 = 5;

/// 大棋盘（6..=8）默认深度上限
pub const DEFAULT_LARGE_BOARD_DEPTH_CAP: u32 = 2;

/// 根据棋盘边长计算深度上限
///
/// 边长 <= 5 时返回 size²，等于不设上限；
/// 更大的棋盘使用 large_board_cap，结果不保证最优
pub fn depth_cap_for(size: u8, large_board_cap: u32) -> u32 {
    if size <= UNCAPPED_MAX_SIZE {
        size as u32 * size as u32
    } else {
        large_board_cap
    }
}

/// 候选走法顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateOrder {
    /// 行优先
    RowMajor,
    /// 经 MoveOrderer 排序（以当前走子方为己方）
    Ordered,
}

/// 单次搜索的上下文
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchContext {
    /// 取最大值的一方（AI）
    pub maximizing: Mark,
    /// 取最小值的一方
    pub minimizing: Mark,
    /// 胜利条件
    pub win: WinCondition,
    /// 深度上限
    pub depth_cap: u32,
}

impl SearchContext {
    pub fn new(maximizing: Mark, win: WinCondition, depth_cap: u32) -> Self {
        Self {
            maximizing,
            minimizing: maximizing.opponent(),
            win,
            depth_cap,
        }
    }

    /// 按棋盘边长选择深度上限
    pub fn for_board(
        maximizing: Mark,
        win: WinCondition,
        board_size: u8,
        large_board_cap: u32,
    ) -> Self {
        Self::new(maximizing, win, depth_cap_for(board_size, large_board_cap))
    }
}

/// 搜索结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// 最佳落点（同分时取最先找到的）
    pub best_move: Move,
    /// 最佳落点的 Minimax 分数
    pub score: i32,
    /// 搜索的节点数
    pub nodes: u64,
    /// 剪枝次数
    pub cutoffs: u64,
}

/// 搜索引擎
///
/// 直接在调用方的棋盘上模拟落子，每一步都在返回前撤销。
/// `&mut Board` 的独占借用保证搜索期间没有其他读写。
#[derive(Debug, Default)]
pub struct SearchEngine {
    nodes_searched: u64,
    cutoffs: u64,
}

impl SearchEngine {
    /// 创建新的搜索引擎
    pub fn new() -> Self {
        Self::default()
    }

    /// 搜索最佳落点
    ///
    /// 棋盘已满时返回 None
    pub fn best_move(
        &mut self,
        board: &mut Board,
        context: &SearchContext,
        order: CandidateOrder,
    ) -> Option<SearchResult> {
        self.nodes_searched = 0;
        self.cutoffs = 0;

        let candidates = Self::candidates(
            board,
            context.maximizing,
            context.minimizing,
            context.win,
            order,
        );
        let mut best: Option<(Move, i32)> = None;
        let mut alpha = i32::MIN;

        for mv in candidates {
            let Ok(mut child) = board.simulate(mv, context.maximizing) else {
                continue;
            };
            let score = self.value(&mut child, context, order, 0, alpha, i32::MAX, false);
            drop(child);

            trace!("候选 {} 分数 {}", mv, score);

            // 严格大于才替换，同分保留先找到的
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
                alpha = alpha.max(score);
            }

            if score >= WIN_SCORE {
                break;
            }
        }

        best.map(|(best_move, score)| SearchResult {
            best_move,
            score,
            nodes: self.nodes_searched,
            cutoffs: self.cutoffs,
        })
    }

    /// Minimax 递归求值
    #[allow(clippy::too_many_arguments)]
    fn value(
        &mut self,
        board: &mut Board,
        context: &SearchContext,
        order: CandidateOrder,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes_searched += 1;

        if LineScanner::has_win(board, context.maximizing, context.win) {
            return WIN_SCORE;
        }
        if LineScanner::has_win(board, context.minimizing, context.win) {
            return LOSS_SCORE;
        }
        if depth >= context.depth_cap {
            return DRAW_SCORE;
        }

        let (mover, waiting) = if maximizing {
            (context.maximizing, context.minimizing)
        } else {
            (context.minimizing, context.maximizing)
        };

        let candidates = Self::candidates(board, mover, waiting, context.win, order);
        if candidates.is_empty() {
            return DRAW_SCORE;
        }

        if maximizing {
            let mut best_score = i32::MIN;
            for mv in candidates {
                let Ok(mut child) = board.simulate(mv, mover) else {
                    continue;
                };
                let score = self.value(&mut child, context, order, depth + 1, alpha, beta, false);
                drop(child);

                best_score = best_score.max(score);
                alpha = alpha.max(best_score);
                if beta <= alpha {
                    self.cutoffs += 1;
                    break; // Beta 剪枝
                }
            }
            best_score
        } else {
            let mut best_score = i32::MAX;
            for mv in candidates {
                let Ok(mut child) = board.simulate(mv, mover) else {
                    continue;
                };
                let score = self.value(&mut child, context, order, depth + 1, alpha, beta, true);
                drop(child);

                best_score = best_score.min(score);
                beta = beta.min(best_score);
                if beta <= alpha {
                    self.cutoffs += 1;
                    break; // Alpha 剪枝
                }
            }
            best_score
        }
    }

    /// 生成候选走法
    fn candidates(
        board: &mut Board,
        mover: Mark,
        waiting: Mark,
        win: WinCondition,
        order: CandidateOrder,
    ) -> Vec<Move> {
        match order {
            CandidateOrder::RowMajor => board.empty_cells(),
            CandidateOrder::Ordered => MoveOrderer::order_moves(board, mover, waiting, win),
        }
    }

    /// 获取上次搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    /// 获取上次搜索的剪枝次数
    pub fn cutoffs(&self) -> u64 {
        self.cutoffs
    }
}
