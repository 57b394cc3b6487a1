//! 搜索引擎
//!
//! 全深度 Minimax。棋盘原地试走、回溯复原，不做拷贝。

use serde::{Deserialize, Serialize};
use tictactoe_core::{Board, Mark, Position};
use tracing::debug;

use crate::evaluate::Evaluator;

/// 根节点候选走法所在深度
const ROOT_CHILD_DEPTH: i32 = 1;

/// AI 配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    /// AI 执的标记，即极大方
    pub mark: Mark,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self { mark: Mark::X }
    }
}

/// AI 引擎
pub struct AiEngine {
    config: AiConfig,
    nodes_searched: u64,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(config: AiConfig) -> Self {
        Self {
            config,
            nodes_searched: 0,
        }
    }

    /// 为指定标记创建
    pub fn for_mark(mark: Mark) -> Self {
        Self::new(AiConfig { mark })
    }

    /// AI 执的标记
    pub fn mark(&self) -> Mark {
        self.config.mark
    }

    /// 搜索最佳走法，满盘时返回 `None`
    ///
    /// 按行优先顺序试走每个空格，取分数严格更高者；同分时保留先遇到的走法。
    /// 候选深度恒为 1，深度比较条件永不触发。
    pub fn best_move(&mut self, board: &mut Board) -> Option<Position> {
        self.nodes_searched = 0;
        let me = self.config.mark;

        let mut best_score = i32::MIN;
        let mut min_depth = i32::MAX;
        let mut best_move = None;

        for pos in board.empty_positions() {
            let score = {
                let mut next = board.speculate(pos, me);
                self.score(&mut next, me.opponent(), ROOT_CHILD_DEPTH)
            };

            if score > best_score || (score == best_score && ROOT_CHILD_DEPTH < min_depth) {
                best_score = score;
                min_depth = ROOT_CHILD_DEPTH;
                best_move = Some(pos);
            }
        }

        debug!(
            mark = %me,
            cell = ?best_move.map(|p| p.to_index()),
            score = best_score,
            nodes = self.nodes_searched,
            "搜索完成"
        );
        best_move
    }

    /// Minimax 评分（AI 视角）
    ///
    /// `to_move` 为本层走子方，`depth` 为自搜索起点以来的步数。
    pub fn score(&mut self, board: &mut Board, to_move: Mark, depth: i32) -> i32 {
        self.nodes_searched += 1;

        let maximizer = self.config.mark;
        if let Some(score) = Evaluator::terminal_score(board, maximizer, depth) {
            return score;
        }

        let mut best = if to_move == maximizer {
            i32::MIN
        } else {
            i32::MAX
        };

        for pos in board.empty_positions() {
            let mut next = board.speculate(pos, to_move);
            let score = self.score(&mut next, to_move.opponent(), depth + 1);

            best = if to_move == maximizer {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }

    /// 获取最近一次搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }
}
