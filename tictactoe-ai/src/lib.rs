//! 井字棋 AI 引擎
//!
//! 包含:
//! - 终局评分
//! - 全深度 Minimax 搜索（偏好更快的胜利、更慢的失败）

mod evaluate;
mod search;

pub use evaluate::{Evaluator, WIN_SCORE};
pub use search::{AiConfig, AiEngine};
