//! 井字棋共享库
//!
//! 包含:
//! - 棋子标记、格子位置、棋盘等核心数据结构
//! - 胜负与满盘判定
//! - 对局状态机（轮次判定、落子校验）
//! - 控制台输入解析 (Notation)

mod board;
mod constants;
mod error;
mod game;
mod mark;
mod notation;

pub use board::{Board, Outcome, Speculation};
pub use constants::*;
pub use error::{GameError, InputError, Result};
pub use game::{Game, GameStatus};
pub use mark::{Mark, Position};
pub use notation::Notation;
