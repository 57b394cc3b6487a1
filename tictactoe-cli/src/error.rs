//! 客户端错误类型

use std::path::PathBuf;

use thiserror::Error;
use tictactoe_core::GameError;

/// 客户端错误
#[derive(Error, Debug)]
pub enum CliError {
    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 输入流已关闭
    #[error("Input closed")]
    InputClosed,

    /// 用户中断
    #[error("Interrupted by user")]
    Interrupted,

    /// 设置文件读取失败
    #[error("Failed to read settings {path:?}: {source}")]
    SettingsRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// 设置文件格式无效
    #[error("Invalid settings {path:?}: {source}")]
    SettingsFormat {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// 对局规则错误
    #[error("Game error: {0}")]
    Game(#[from] GameError),
}
