use tracing_subscriber::EnvFilter;

use crate::logging::config::LoggingConfig;

/// Строит фильтр: `RUST_LOG`, если задан, иначе директива из конфигурации.
pub fn build_filter_from_config(config: &LoggingConfig) -> EnvFilter {
    if let Ok(env_filter) = EnvFilter::try_from_default_env() {
        return env_filter;
    }

    let directive = config.build_filter_directive();
    match EnvFilter::try_new(&directive) {
        Ok(filter) => filter,
        Err(e) => {
            // Некорректная директива в конфигурации не должна ронять процесс.
            eprintln!("Invalid log filter directive '{directive}': {e}; falling back to 'info'");
            EnvFilter::new("info")
        }
    }
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::filter::LevelFilter;

    use super::*;

    #[test]
    fn test_invalid_directive_falls_back() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }

        let cfg = LoggingConfig {
            level: "not-a-level!!".to_string(),
            ..Default::default()
        };

        let filter = build_filter_from_config(&cfg);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }
}
