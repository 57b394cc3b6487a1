//! 客户端设置
//!
//! 以 JSON 保存在 `<配置目录>/tictactoe/settings.json`，
//! 可用环境变量 `TICTACTOE_SETTINGS` 指定其他路径。

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tictactoe_core::Mark;

use crate::error::CliError;

/// 覆盖设置文件路径的环境变量
pub const SETTINGS_ENV: &str = "TICTACTOE_SETTINGS";

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// `EnvFilter` 指令，覆盖本项目各 crate
    pub fn directive(&self) -> String {
        let level = self.as_str();
        format!("tictactoe={level},tictactoe_cli={level},tictactoe_ai={level},tictactoe_core={level}")
    }
}

/// 客户端设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliSettings {
    /// 日志级别（`RUST_LOG` 优先）
    pub log_level: LogLevel,
    /// 预设人类标记，设置后跳过先后手提示
    pub preferred_mark: Option<Mark>,
    /// 空格是否显示编号
    pub show_cell_indices: bool,
}

impl Default for CliSettings {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            preferred_mark: None,
            show_cell_indices: true,
        }
    }
}

impl CliSettings {
    /// 获取设置文件路径
    pub fn settings_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(SETTINGS_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|mut path| {
            path.push("tictactoe");
            path.push("settings.json");
            path
        })
    }

    /// 从默认路径加载，无配置目录或文件不存在时使用默认设置
    pub fn load() -> Result<Self, CliError> {
        match Self::settings_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// 从指定文件加载，文件不存在时使用默认设置
    pub fn load_from(path: &Path) -> Result<Self, CliError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| CliError::SettingsRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| CliError::SettingsFormat {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = CliSettings::load_from(&temp_dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, CliSettings::default());
        assert!(settings.show_cell_indices);
        assert_eq!(settings.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "preferred_mark": "X", "log_level": "Debug" }"#).unwrap();

        let settings = CliSettings::load_from(&path).unwrap();
        assert_eq!(settings.preferred_mark, Some(Mark::X));
        assert_eq!(settings.log_level, LogLevel::Debug);
        assert!(settings.show_cell_indices);
    }

    #[test]
    fn test_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, "{ preferred_mark = X").unwrap();

        assert!(matches!(
            CliSettings::load_from(&path),
            Err(CliError::SettingsFormat { .. })
        ));
    }

    #[test]
    fn test_log_directive() {
        let directive = LogLevel::Debug.directive();
        assert!(directive.contains("tictactoe_ai=debug"));
        assert!(directive.contains("tictactoe_core=debug"));
    }
}
