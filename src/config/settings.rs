use config::{Config, Environment};
use serde::{Deserialize, Serialize};
use skipmap_error::{SkipListError, SkipResult};

use crate::{
    database::{
        skiplist::level::check_params, DEFAULT_GROWTH_PROBABILITY, DEFAULT_INITIAL_HEIGHT,
        DEFAULT_MAX_LEVEL,
    },
    logging::log_error,
};

/// Префикс переменных окружения по умолчанию (`SKIPMAP_GROWTH_PROBABILITY`
/// и т.д.).
pub const ENV_PREFIX: &str = "SKIPMAP";

/// Параметры пропускного списка.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkipListConfig {
    /// Вероятность перехода узла на следующий уровень, строго в (0, 1).
    pub growth_probability: f64,
    /// Начальная высота массива `front`.
    pub initial_height: usize,
    /// Предельный уровень нового узла.
    pub max_level: usize,
    /// Зерно генератора уровней. `None` — случайное зерно.
    pub seed: Option<u64>,
}

impl Default for SkipListConfig {
    fn default() -> Self {
        Self {
            growth_probability: DEFAULT_GROWTH_PROBABILITY,
            initial_height: DEFAULT_INITIAL_HEIGHT,
            max_level: DEFAULT_MAX_LEVEL,
            seed: None,
        }
    }
}

impl SkipListConfig {
    /// Загружает конфигурацию из переменных окружения с префиксом
    /// [`ENV_PREFIX`].
    pub fn load() -> SkipResult<Self> {
        Self::load_with_prefix(ENV_PREFIX)
    }

    /// Загружает конфигурацию из переменных окружения с префиксом `prefix`.
    /// Ошибка загрузки или проверки записывается в лог.
    pub fn load_with_prefix(prefix: &str) -> SkipResult<Self> {
        Self::read_env(prefix).inspect_err(log_error)
    }

    fn read_env(prefix: &str) -> SkipResult<Self> {
        let cfg = Config::builder()
            // Adding default values
            .set_default("growth_probability", DEFAULT_GROWTH_PROBABILITY)
            .and_then(|b| b.set_default("initial_height", DEFAULT_INITIAL_HEIGHT as i64))
            .and_then(|b| b.set_default("max_level", DEFAULT_MAX_LEVEL as i64))
            .map_err(config_error)?
            .add_source(Environment::with_prefix(prefix).try_parsing(true))
            .build()
            .map_err(config_error)?;

        let settings: Self = cfg.try_deserialize().map_err(config_error)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Проверяет значения до построения списка.
    pub fn validate(&self) -> SkipResult<()> {
        check_params(
            self.growth_probability,
            self.initial_height,
            self.max_level,
        )
    }
}

fn config_error(err: config::ConfigError) -> SkipListError {
    SkipListError::Config(err.to_string())
}
