//! Core logger types and traits

pub mod config;
pub mod entry;
pub mod error;
pub mod fields;
pub mod formatter;
pub mod hooks;
pub mod level;
pub mod logger;
pub mod message;
pub mod metrics;
pub(crate) mod pool;
pub mod sink;
pub mod timestamp;
pub mod writer;

pub use config::{LoggerConfig, OutputFormat};
pub use entry::Entry;
pub use error::{LoggerError, Result};
pub use fields::{FieldValue, Fields, ERROR_KEY};
pub use formatter::{Formatter, LEVEL_KEY, MESSAGE_KEY, TIME_KEY};
pub use hooks::{Hook, LevelHooks};
pub use level::Level;
pub use logger::{ExitHandler, Logger, LoggerBuilder, PanicHandler};
pub use message::Spaced;
pub use metrics::LoggerMetrics;
pub use sink::Sink;
pub use timestamp::TimestampFormat;
pub use writer::LogWriter;
