//! # Rust Structured Logger
//!
//! Leveled, structured logging: entries are built by chaining fields onto
//! a logger, gated by a runtime-adjustable level, passed through hooks,
//! rendered by a pluggable formatter and written to a sink.
//!
//! ## Features
//!
//! - **Structured fields**: immutable, shareable entries; deriving an entry
//!   never modifies its parent
//! - **Six levels**: panic, fatal, error, warning, info, debug
//! - **Hooks**: per-level callbacks that may rewrite an entry before output
//! - **Formatters**: `key=value` text (optionally colored) and JSON
//! - **Thread safe**: one logger can be shared by any number of threads
//!
//! ```
//! use rust_structured_logger::prelude::*;
//!
//! let sink = MemorySink::new();
//! let log = Logger::builder()
//!     .level(Level::Debug)
//!     .output(sink.clone())
//!     .formatter(TextFormatter::new().with_timestamp(false))
//!     .build();
//!
//! log.as_info()
//!     .with_fields(fields! { "animal" => "walrus", "size" => 10 })
//!     .write("A group of walrus emerges from the ocean");
//!
//! assert_eq!(
//!     sink.contents_string(),
//!     "level=info msg=\"A group of walrus emerges from the ocean\" animal=walrus size=10\n"
//! );
//! ```

pub mod core;
pub mod formatters;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Entry, FieldValue, Fields, Formatter, Hook, Level, LevelHooks, LogWriter, Logger,
        LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, OutputFormat, Result, Sink,
        Spaced, TimestampFormat,
    };
    pub use crate::fields;
    pub use crate::formatters::{FieldMap, JsonFormatter, TextFormatter};
    pub use crate::sinks::{FileSink, MemorySink, StderrSink, StdoutSink, WriterSink};
}

pub use crate::core::{
    Entry, ExitHandler, FieldValue, Fields, Formatter, Hook, Level, LevelHooks, LogWriter, Logger,
    LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, OutputFormat, PanicHandler, Result,
    Sink, Spaced, TimestampFormat, ERROR_KEY, LEVEL_KEY, MESSAGE_KEY, TIME_KEY,
};
pub use crate::formatters::{FieldMap, JsonFormatter, TextFormatter};
pub use crate::sinks::{FileSink, MemorySink, StderrSink, StdoutSink, WriterSink};
pub use crate::global::standard_logger;
