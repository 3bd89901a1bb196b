/// Configuration of the list: growth probability, heights, seed.
pub mod config;
/// Ordered map data structures (SkipList and its building blocks).
pub mod database;
/// Logging setup on top of `tracing-subscriber`.
pub mod logging;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// Configuration loading.
pub use config::SkipListConfig;
/// SkipList, its builder, comparators, iterators and diagnostics.
pub use database::{
    Comparator, DisplayOrder, Iter, Keys, LevelGenerator, NaturalOrder, SkipList,
    SkipListBuilder, SkipListStatistics, ValidationError, Values,
};
/// Logging initialization.
pub use logging::{init_logging, LogFormat, LoggingConfig};
/// Error types and status codes.
pub use skipmap_error::{ErrorExt, LogLevel, SkipListError, SkipResult, StatusCode};
