//! Process-wide default logger
//!
//! The free functions here forward to [`standard_logger`], a [`Logger`]
//! created on first use at info level, writing text to stderr.
//!
//! ```
//! use rust_structured_logger::{global, Level, MemorySink};
//!
//! global::set_output(MemorySink::new());
//! global::set_level(Level::Debug);
//! global::with_field("component", "startup").as_debug().write("ready");
//! ```

use crate::core::{
    Entry, FieldValue, Formatter, Hook, Level, LogWriter, Logger, Result, Sink,
};
use crate::formatters::{JsonFormatter, TextFormatter};
use std::error::Error as StdError;
use std::fmt;
use std::sync::OnceLock;

static STANDARD: OnceLock<Logger> = OnceLock::new();

/// The shared default logger
pub fn standard_logger() -> &'static Logger {
    STANDARD.get_or_init(|| Logger::new(Level::Info))
}

pub fn set_output<S: Sink + 'static>(sink: S) {
    standard_logger().set_output(sink);
}

pub fn set_formatter<F: Formatter + 'static>(formatter: F) {
    standard_logger().set_formatter(formatter);
}

/// Switch the default logger to [`JsonFormatter`] with default settings
pub fn use_json_formatter() {
    set_formatter(JsonFormatter::new());
}

/// Switch the default logger to unsorted, uncolored [`TextFormatter`] output
pub fn use_text_formatter() {
    set_formatter(TextFormatter::new().with_sorting(false).with_colors(false));
}

pub fn set_level(level: Level) {
    standard_logger().set_level(level);
}

pub fn level() -> Level {
    standard_logger().level()
}

pub fn add_hook<H: Hook + 'static>(hook: H) {
    standard_logger().add_hook(hook);
}

pub fn as_level(level: Level) -> Entry {
    standard_logger().as_level(level)
}

pub fn as_debug() -> Entry {
    standard_logger().as_debug()
}

pub fn as_info() -> Entry {
    standard_logger().as_info()
}

pub fn as_warning() -> Entry {
    standard_logger().as_warning()
}

pub fn as_error() -> Entry {
    standard_logger().as_error()
}

pub fn as_fatal() -> Entry {
    standard_logger().as_fatal()
}

pub fn as_panic() -> Entry {
    standard_logger().as_panic()
}

pub fn with_field<K, V>(key: K, value: V) -> Entry
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    standard_logger().with_field(key, value)
}

pub fn with_fields<I, K, V>(fields: I) -> Entry
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<FieldValue>,
{
    standard_logger().with_fields(fields)
}

pub fn with_error<E>(err: E) -> Entry
where
    E: StdError + Send + Sync + 'static,
{
    standard_logger().with_error(err)
}

pub fn writer() -> Result<LogWriter> {
    standard_logger().writer()
}

pub fn debug<M: fmt::Display>(msg: M) {
    standard_logger().debug(msg);
}

pub fn info<M: fmt::Display>(msg: M) {
    standard_logger().info(msg);
}

pub fn warning<M: fmt::Display>(msg: M) {
    standard_logger().warning(msg);
}

pub fn error<M: fmt::Display>(msg: M) {
    standard_logger().error(msg);
}

pub fn fatal<M: fmt::Display>(msg: M) {
    standard_logger().fatal(msg);
}

pub fn panic<M: fmt::Display>(msg: M) {
    standard_logger().panic(msg);
}

pub fn debugf(args: fmt::Arguments<'_>) {
    standard_logger().debugf(args);
}

pub fn infof(args: fmt::Arguments<'_>) {
    standard_logger().infof(args);
}

pub fn warningf(args: fmt::Arguments<'_>) {
    standard_logger().warningf(args);
}

pub fn errorf(args: fmt::Arguments<'_>) {
    standard_logger().errorf(args);
}

pub fn fatalf(args: fmt::Arguments<'_>) {
    standard_logger().fatalf(args);
}

pub fn panicf(args: fmt::Arguments<'_>) {
    standard_logger().panicf(args);
}

pub fn debugln<M: fmt::Display>(msg: M) {
    standard_logger().debugln(msg);
}

pub fn infoln<M: fmt::Display>(msg: M) {
    standard_logger().infoln(msg);
}

pub fn warningln<M: fmt::Display>(msg: M) {
    standard_logger().warningln(msg);
}

pub fn errorln<M: fmt::Display>(msg: M) {
    standard_logger().errorln(msg);
}

pub fn fatalln<M: fmt::Display>(msg: M) {
    standard_logger().fatalln(msg);
}

pub fn panicln<M: fmt::Display>(msg: M) {
    standard_logger().panicln(msg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemorySink;

    // Every test in this module shares the one standard logger.
    #[test]
    fn test_standard_logger_round_trip() {
        let sink = MemorySink::new();
        set_output(sink.clone());
        use_json_formatter();
        set_level(Level::Debug);

        assert!(std::ptr::eq(standard_logger(), standard_logger()));
        assert_eq!(level(), Level::Debug);

        with_fields(crate::fields! { "animal" => "walrus" })
            .as_debug()
            .write("from the default logger");
        infof(format_args!("{} + {}", 1, 2));

        let lines = sink.lines();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(first["animal"], "walrus");
        let second: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
        assert_eq!(second["msg"], "1 + 2");

        use_text_formatter();
        sink.clear();
        warning("back to text");
        assert!(sink.contents_string().starts_with("time="));
    }
}
