//! 终局评估函数

use tictactoe_core::{Board, Mark};

/// 胜局基础分，按深度扣减以偏好更快的胜利
pub const WIN_SCORE: i32 = 10;

/// 评估器
pub struct Evaluator;

impl Evaluator {
    /// 终局评分（极大方视角），非终局返回 `None`
    ///
    /// 判定顺序固定：极大方胜 `10 - depth`，极小方胜 `depth - 10`，满盘 `0`。
    pub fn terminal_score(board: &Board, maximizer: Mark, depth: i32) -> Option<i32> {
        if board.has_won(maximizer) {
            Some(WIN_SCORE - depth)
        } else if board.has_won(maximizer.opponent()) {
            Some(depth - WIN_SCORE)
        } else if board.is_full() {
            Some(0)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(layout: &str) -> Board {
        Board::from_layout(layout).unwrap()
    }

    #[test]
    fn test_win_and_loss() {
        let b = board("XXX/OO_/___");
        assert_eq!(Evaluator::terminal_score(&b, Mark::X, 1), Some(9));
        assert_eq!(Evaluator::terminal_score(&b, Mark::X, 5), Some(5));
        assert_eq!(Evaluator::terminal_score(&b, Mark::O, 3), Some(-7));
    }

    #[test]
    fn test_draw_and_open() {
        assert_eq!(
            Evaluator::terminal_score(&board("XOX/XOO/OXX"), Mark::X, 9),
            Some(0)
        );
        assert_eq!(Evaluator::terminal_score(&Board::empty(), Mark::X, 0), None);
        assert_eq!(
            Evaluator::terminal_score(&board("XO_/___/___"), Mark::O, 2),
            None
        );
    }
}
