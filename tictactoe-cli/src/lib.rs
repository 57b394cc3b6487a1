//! 井字棋控制台客户端
//!
//! 包含:
//! - 设置加载
//! - 控制台提示与输入校验
//! - 人机对局循环

pub mod console;
pub mod error;
pub mod session;
pub mod settings;

pub use console::Console;
pub use error::CliError;
pub use session::{Session, SessionOutcome, FAREWELL};
pub use settings::{CliSettings, LogLevel};
