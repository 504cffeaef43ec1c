//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. The message is
//! only rendered when the level is enabled.
//!
//! # Examples
//!
//! ```
//! use rust_structured_logger::prelude::*;
//! use rust_structured_logger::info;
//!
//! let logger = Logger::new(Level::Info);
//! logger.set_output(MemorySink::new());
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use rust_structured_logger::prelude::*;
/// # let logger = Logger::new(Level::Info);
/// # logger.set_output(MemorySink::new());
/// use rust_structured_logger::log;
/// log!(logger, Level::Info, "Simple message");
/// log!(logger, Level::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.logf($level, ::std::format_args!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// ```
/// # use rust_structured_logger::prelude::*;
/// # let logger = Logger::new(Level::Debug);
/// # logger.set_output(MemorySink::new());
/// use rust_structured_logger::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// ```
/// # use rust_structured_logger::prelude::*;
/// # let logger = Logger::new(Level::Info);
/// # logger.set_output(MemorySink::new());
/// use rust_structured_logger::warning;
/// warning!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Log a fatal-level message, then run the logger's exit handler.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Fatal, $($arg)+)
    };
}

/// Build a [`Fields`](crate::Fields) map.
///
/// ```
/// use rust_structured_logger::{fields, FieldValue};
///
/// let fields = fields! { "animal" => "walrus", "size" => 10 };
/// assert_eq!(fields["size"], FieldValue::Int(10));
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::Fields::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut fields = $crate::Fields::new();
        $(
            fields.insert(
                ::std::convert::Into::<::std::string::String>::into($key),
                $crate::FieldValue::from($value),
            );
        )+
        fields
    }};
}

#[cfg(test)]
mod tests {
    use crate::core::{Level, Logger};
    use crate::sinks::MemorySink;
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Arc;

    fn logger(level: Level) -> (Logger, MemorySink) {
        let sink = MemorySink::new();
        let logger = Logger::builder()
            .level(level)
            .output(sink.clone())
            .build();
        (logger, sink)
    }

    #[test]
    fn test_log_macro() {
        let (logger, sink) = logger(Level::Info);
        log!(logger, Level::Info, "Formatted: {}", 42);
        assert!(sink.contents_string().contains("msg=\"Formatted: 42\""));
    }

    #[test]
    fn test_level_macros() {
        let (logger, sink) = logger(Level::Debug);
        debug!(logger, "Count: {}", 5);
        info!(logger, "Items: {}", 100);
        warning!(logger, "Retry {} of {}", 1, 3);
        error!(logger, "Code: {}", 500);

        let lines = sink.lines();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].contains("level=warning"));
    }

    #[test]
    fn test_disabled_macro_does_not_render() {
        struct Loud;
        impl std::fmt::Display for Loud {
            fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                panic!("rendered a disabled message");
            }
        }

        let (logger, sink) = logger(Level::Error);
        debug!(logger, "{}", Loud);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_fatal_macro_calls_exit_handler() {
        let (logger, _) = logger(Level::Info);
        let code = Arc::new(AtomicI32::new(0));
        let seen = Arc::clone(&code);
        logger.set_exit_handler(move |c| seen.store(c, Ordering::SeqCst));

        fatal!(logger, "Critical failure: {}", "system");
        assert_eq!(code.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_fields_macro() {
        let empty = fields! {};
        assert!(empty.is_empty());

        let fields = fields! { "a" => 1, String::from("b") => "two", };
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["b"], crate::FieldValue::from("two"));
    }
}
