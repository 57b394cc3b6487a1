//! 错误类型定义

use thiserror::Error;

/// 对局规则错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// 格子已被占用
    #[error("Cell {index} is already occupied")]
    Occupied { index: usize },

    /// 游戏已结束
    #[error("Game is already over")]
    GameOver,
}

/// 控制台输入错误（一律重新提示，不会终止程序）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// 先后手选择无效
    #[error("Invalid choice: {input:?} (expected O or X)")]
    InvalidMarkChoice { input: String },

    /// 不是数字
    #[error("Not a number: {input:?}")]
    NotANumber { input: String },

    /// 格子编号超出 0-8
    #[error("Cell index out of range: {index}")]
    OutOfRange { index: u64 },
}

/// 对局操作结果类型
pub type Result<T> = std::result::Result<T, GameError>;
