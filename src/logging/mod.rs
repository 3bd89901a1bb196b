//! Логирование поверх `tracing-subscriber`.
//!
//! Ядро пишет события через макросы `tracing`; подписчик устанавливает
//! вызывающая сторона (бенчмарки, тесты) с помощью [`init_logging`].

pub mod config;
mod filters;

pub use config::{LogFormat, LoggingConfig};
use skipmap_error::{ErrorExt, LogLevel};
use tracing::{Level, Subscriber};
use tracing_subscriber::{
    fmt::MakeWriter, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt, Layer,
};

/// Форматирующий слой для заданного writer.
pub fn fmt_layer<S, W>(
    config: &LoggingConfig,
    writer: W,
) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_target(config.with_target)
        .with_ansi(config.with_ansi);

    match config.format {
        LogFormat::Compact => layer.compact().boxed(),
        LogFormat::Json => layer.json().boxed(),
    }
}

/// Устанавливает глобальный подписчик с выводом в stderr.
///
/// Повторный вызов возвращает ошибку, а не паникует.
pub fn init_logging(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = filters::build_filter_from_config(config);

    tracing_subscriber::registry()
        .with(fmt_layer(config, std::io::stderr))
        .with(env_filter)
        .try_init()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        directive = %config.build_filter_directive(),
        format = ?config.format,
        "Logging system initialized"
    );

    Ok(())
}

/// Записывает ошибку на уровне, который задаёт её код статуса.
pub fn log_error<E: ErrorExt>(err: &E) {
    let status = err.status_code();
    let details = err.log_message();
    let tags = err.metrics_tags();

    macro_rules! emit {
        ($level:expr) => {
            tracing::event!(
                $level,
                status = %status,
                details = %details,
                tags = ?tags,
                "{}",
                err
            )
        };
    }

    match status.log_level() {
        LogLevel::Warn => emit!(Level::WARN),
        LogLevel::Error => emit!(Level::ERROR),
    }
}
