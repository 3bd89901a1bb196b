use serde::{Deserialize, Serialize};

/// Формат вывода событий.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Конфигурация логирования.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Уровень для событий крейта (`trace`, `debug`, `info`, ...).
    pub level: String,
    /// Уровень для всех остальных целей.
    pub default_level: String,
    pub format: LogFormat,
    pub with_target: bool,
    pub with_ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            default_level: "warn".to_string(),
            format: LogFormat::Compact,
            with_target: true,
            with_ansi: true,
        }
    }
}

impl LoggingConfig {
    /// Директива фильтра, например `"warn,skipmap=debug"`.
    pub fn build_filter_directive(&self) -> String {
        format!(
            "{},{}={}",
            self.default_level,
            env!("CARGO_CRATE_NAME"),
            self.level
        )
    }
}
