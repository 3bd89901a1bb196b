use std::any::Any;

use thiserror::Error;

use crate::{ErrorExt, StatusCode};

/// Ошибки построения и настройки пропускного списка.
///
/// Операции над уже построенным списком не возвращают ошибок: отсутствие
/// ключа выражается через `Option`, а нарушение инвариантов является
/// ошибкой реализации и проверяется отдельно.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SkipListError {
    /// Недопустимый аргумент конструктора или генератора уровней.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
    /// Не удалось загрузить конфигурацию.
    #[error("configuration error: {0}")]
    Config(String),
}

impl SkipListError {
    pub fn invalid_argument(
        name: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

impl ErrorExt for SkipListError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidArgument { .. } => StatusCode::InvalidArgs,
            Self::Config(_) => StatusCode::InvalidConfig,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn metrics_tags(&self) -> Vec<(&'static str, String)> {
        let mut tags = vec![
            ("error_type", "skiplist".to_string()),
            ("status_code", self.status_code().to_string()),
        ];

        if let Self::InvalidArgument { name, .. } = self {
            tags.push(("argument", name.to_string()));
        }

        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = SkipListError::invalid_argument("growth_probability", "must be in (0, 1)");

        assert_eq!(
            err.to_string(),
            "invalid argument `growth_probability`: must be in (0, 1)"
        );
        assert_eq!(err.status_code(), StatusCode::InvalidArgs);
    }

    #[test]
    fn test_config_error_status() {
        let err = SkipListError::Config("missing field".into());

        assert_eq!(err.status_code(), StatusCode::InvalidConfig);
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn test_metrics_tags_include_argument_name() {
        let err = SkipListError::invalid_argument("initial_height", "must be at least 1");
        let tags = err.metrics_tags();

        assert!(tags.contains(&("argument", "initial_height".to_string())));
        assert!(tags.contains(&("error_type", "skiplist".to_string())));
    }
}
