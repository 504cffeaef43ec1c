//! Main logger implementation

use super::{
    config::LoggerConfig,
    entry::Entry,
    error::{LoggerError, Result},
    fields::FieldValue,
    formatter::Formatter,
    hooks::{Hook, LevelHooks},
    level::Level,
    message::trim_line_end,
    metrics::LoggerMetrics,
    pool::{EntryPool, DEFAULT_POOL_CAPACITY},
    sink::Sink,
    writer::LogWriter,
};
use crate::formatters::TextFormatter;
use crate::sinks::StderrSink;
use parking_lot::{Mutex, MutexGuard, RwLock};
use std::error::Error as StdError;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;

/// Called with the exit status after a fatal entry has been written
pub type ExitHandler = Arc<dyn Fn(i32) + Send + Sync>;

/// Receives `LoggerError::PanicLevelReached` after a panic entry has been
/// written. Without one, the error is raised with `std::panic::panic_any`.
pub type PanicHandler = Arc<dyn Fn(LoggerError) + Send + Sync>;

/// Pipeline lock that can be switched off
struct MutexWrap {
    lock: Mutex<()>,
    disabled: AtomicBool,
}

impl MutexWrap {
    fn new(disabled: bool) -> Self {
        Self {
            lock: Mutex::new(()),
            disabled: AtomicBool::new(disabled),
        }
    }

    fn lock(&self) -> Option<MutexGuard<'_, ()>> {
        if self.disabled.load(Ordering::Acquire) {
            None
        } else {
            Some(self.lock.lock())
        }
    }

    fn disable(&self) {
        self.disabled.store(true, Ordering::Release);
    }
}

struct LoggerInner {
    level: AtomicU8,
    out: RwLock<Arc<dyn Sink>>,
    formatter: RwLock<Arc<dyn Formatter>>,
    hooks: RwLock<LevelHooks>,
    mu: MutexWrap,
    exit_handler: RwLock<ExitHandler>,
    panic_handler: RwLock<Option<PanicHandler>>,
    metrics: LoggerMetrics,
    pool: EntryPool,
}

/// Leveled, structured logger.
///
/// `Logger` is a cheap handle: clones share the same output, formatter,
/// hooks and level. All methods take `&self` and are safe to call from
/// many threads at once.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<LoggerInner>,
}

impl Logger {
    /// Logger writing text to stderr at `level`
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self::builder().level(level).build()
    }

    /// Logger configured from a [`LoggerConfig`]
    #[must_use]
    pub fn from_config(config: &LoggerConfig) -> Self {
        let mut builder = Self::builder()
            .level(config.level)
            .shared_formatter(config.formatter());
        if config.no_lock {
            builder = builder.no_lock();
        }
        builder.build()
    }

    pub fn level(&self) -> Level {
        Level::from_u8(self.inner.level.load(Ordering::Relaxed))
    }

    /// Change the threshold. Other threads observe the new value eventually;
    /// calls already past the level check are not affected.
    pub fn set_level(&self, level: Level) {
        self.inner.level.store(level.as_u8(), Ordering::Relaxed);
    }

    pub fn set_output<S: Sink + 'static>(&self, sink: S) {
        let _guard = self.inner.mu.lock();
        *self.inner.out.write() = Arc::new(sink);
    }

    pub fn set_formatter<F: Formatter + 'static>(&self, formatter: F) {
        self.set_shared_formatter(Arc::new(formatter));
    }

    pub fn set_shared_formatter(&self, formatter: Arc<dyn Formatter>) {
        let _guard = self.inner.mu.lock();
        *self.inner.formatter.write() = formatter;
    }

    /// Register a hook for the levels it declares.
    /// The hook runs before the entry is formatted.
    pub fn add_hook<H: Hook + 'static>(&self, hook: H) {
        let _guard = self.inner.mu.lock();
        self.inner.hooks.write().add(Arc::new(hook));
    }

    /// Swap the whole hook registry, returning the previous one
    pub fn replace_hooks(&self, hooks: LevelHooks) -> LevelHooks {
        let _guard = self.inner.mu.lock();
        std::mem::replace(&mut *self.inner.hooks.write(), hooks)
    }

    /// Stop serializing hook firing and sink writes.
    ///
    /// Only safe in the sense of output integrity when the sink tolerates
    /// concurrent writes, e.g. a file opened in append mode with entries
    /// smaller than the OS's atomic write size.
    pub fn set_no_lock(&self) {
        self.inner.mu.disable();
    }

    pub fn set_exit_handler<F>(&self, handler: F)
    where
        F: Fn(i32) + Send + Sync + 'static,
    {
        *self.inner.exit_handler.write() = Arc::new(handler);
    }

    pub fn set_panic_handler<F>(&self, handler: F)
    where
        F: Fn(LoggerError) + Send + Sync + 'static,
    {
        *self.inner.panic_handler.write() = Some(Arc::new(handler));
    }

    pub fn flush(&self) -> Result<()> {
        let _guard = self.inner.mu.lock();
        self.inner.out.read().flush()?;
        Ok(())
    }

    /// Counters for written entries and pipeline failures
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.inner.metrics
    }

    pub(crate) fn formatter(&self) -> Arc<dyn Formatter> {
        Arc::clone(&*self.inner.formatter.read())
    }

    #[cfg(test)]
    pub(crate) fn pooled_entries(&self) -> usize {
        self.inner.pool.available()
    }

    /// Fresh entry at `level`; add fields after choosing the level
    pub fn as_level(&self, level: Level) -> Entry {
        Entry::new(self).with_level(level)
    }

    pub fn as_debug(&self) -> Entry {
        self.as_level(Level::Debug)
    }

    pub fn as_info(&self) -> Entry {
        self.as_level(Level::Info)
    }

    pub fn as_warning(&self) -> Entry {
        self.as_level(Level::Warning)
    }

    pub fn as_error(&self) -> Entry {
        self.as_level(Level::Error)
    }

    pub fn as_fatal(&self) -> Entry {
        self.as_level(Level::Fatal)
    }

    pub fn as_panic(&self) -> Entry {
        self.as_level(Level::Panic)
    }

    /// Entry at the current level carrying one field
    pub fn with_field<K, V>(&self, key: K, value: V) -> Entry
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.with_scratch(|root| root.with_field(key, value))
    }

    /// Entry at the current level carrying `fields`
    pub fn with_fields<I, K, V>(&self, fields: I) -> Entry
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.with_scratch(|root| root.with_fields(fields))
    }

    /// Entry at the current level carrying `err` under the `error` key
    pub fn with_error<E>(&self, err: E) -> Entry
    where
        E: StdError + Send + Sync + 'static,
    {
        self.with_scratch(|root| root.with_error(err))
    }

    fn with_scratch(&self, derive: impl FnOnce(&Entry) -> Entry) -> Entry {
        let scratch = self.inner.pool.get(self, self.level());
        let entry = derive(scratch.entry());
        self.inner.pool.put(scratch);
        entry
    }

    /// Log `msg` at `level`
    pub fn log<M: fmt::Display>(&self, level: Level, msg: M) {
        self.log_with(level, || msg.to_string());
    }

    /// Log a `format_args!` message at `level`
    pub fn logf(&self, level: Level, args: fmt::Arguments<'_>) {
        self.log_with(level, || fmt::format(args));
    }

    /// Log `msg` at `level` with every trailing line break removed, as
    /// [`Entry::writeln`] does
    pub fn logln<M: fmt::Display>(&self, level: Level, msg: M) {
        self.log_with(level, || trim_line_end(msg.to_string()));
    }

    fn log_with(&self, level: Level, render: impl FnOnce() -> String) {
        if !level.enabled(self.level()) {
            return;
        }
        let mut scratch = self.inner.pool.get(self, level);
        scratch.entry_mut().log(render());
        self.inner.pool.put(scratch);
    }

    #[inline]
    pub fn debug<M: fmt::Display>(&self, msg: M) {
        self.log(Level::Debug, msg);
    }

    #[inline]
    pub fn info<M: fmt::Display>(&self, msg: M) {
        self.log(Level::Info, msg);
    }

    #[inline]
    pub fn warning<M: fmt::Display>(&self, msg: M) {
        self.log(Level::Warning, msg);
    }

    #[inline]
    pub fn error<M: fmt::Display>(&self, msg: M) {
        self.log(Level::Error, msg);
    }

    /// Log at fatal level, then call the exit handler with status 1
    #[inline]
    pub fn fatal<M: fmt::Display>(&self, msg: M) {
        self.log(Level::Fatal, msg);
    }

    /// Log at panic level, then raise the panic directive
    #[inline]
    pub fn panic<M: fmt::Display>(&self, msg: M) {
        self.log(Level::Panic, msg);
    }

    #[inline]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Debug, args);
    }

    #[inline]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Info, args);
    }

    #[inline]
    pub fn warningf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Warning, args);
    }

    #[inline]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Error, args);
    }

    #[inline]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Fatal, args);
    }

    #[inline]
    pub fn panicf(&self, args: fmt::Arguments<'_>) {
        self.logf(Level::Panic, args);
    }

    #[inline]
    pub fn debugln<M: fmt::Display>(&self, msg: M) {
        self.logln(Level::Debug, msg);
    }

    #[inline]
    pub fn infoln<M: fmt::Display>(&self, msg: M) {
        self.logln(Level::Info, msg);
    }

    #[inline]
    pub fn warningln<M: fmt::Display>(&self, msg: M) {
        self.logln(Level::Warning, msg);
    }

    #[inline]
    pub fn errorln<M: fmt::Display>(&self, msg: M) {
        self.logln(Level::Error, msg);
    }

    #[inline]
    pub fn fatalln<M: fmt::Display>(&self, msg: M) {
        self.logln(Level::Fatal, msg);
    }

    #[inline]
    pub fn panicln<M: fmt::Display>(&self, msg: M) {
        self.logln(Level::Panic, msg);
    }

    /// Line-oriented writer logging each line at info level
    pub fn writer(&self) -> Result<LogWriter> {
        self.writer_level(Level::Info)
    }

    /// Line-oriented writer logging each line at `level`
    pub fn writer_level(&self, level: Level) -> Result<LogWriter> {
        Entry::new(self).writer_level(level)
    }

    /// Hooks, formatter, sink, then the fatal/panic directives.
    ///
    /// Failures are reported on stderr and counted; none of them stops
    /// the directives for terminal levels.
    pub(crate) fn dispatch(&self, entry: &mut Entry) {
        let inner = &*self.inner;
        let level = entry.level();

        let fired = {
            let _guard = inner.mu.lock();
            inner.hooks.read().fire(level, entry)
        };
        if let Err(e) = fired {
            inner.metrics.record_hook_failure();
            let _guard = inner.mu.lock();
            eprintln!("[LOGGER ERROR] Failed to fire hook: {}", e);
        }

        let formatter = self.formatter();
        match formatter.format(entry) {
            Ok(serialized) => {
                let _guard = inner.mu.lock();
                match inner.out.read().write_all(&serialized) {
                    Ok(()) => {
                        inner.metrics.record_written();
                    }
                    Err(e) => {
                        inner.metrics.record_sink_failure();
                        eprintln!("[LOGGER ERROR] Failed to write to log: {}", e);
                    }
                }
            }
            Err(e) => {
                inner.metrics.record_format_failure();
                let _guard = inner.mu.lock();
                eprintln!("[LOGGER ERROR] Failed to format entry: {}", e);
            }
        }

        match level {
            Level::Fatal => {
                if let Err(e) = self.flush() {
                    eprintln!("[LOGGER ERROR] Failed to flush before exit: {}", e);
                }
                let exit = Arc::clone(&*inner.exit_handler.read());
                exit(1);
            }
            Level::Panic => {
                let directive = LoggerError::panic_level(entry.clone());
                let handler = inner.panic_handler.read().clone();
                match handler {
                    Some(handler) => handler(directive),
                    None => std::panic::panic_any(directive),
                }
            }
            _ => {}
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("hooks", &*self.inner.hooks.read())
            .finish_non_exhaustive()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_structured_logger::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder()
///     .level(Level::Debug)
///     .output(sink.clone())
///     .formatter(JsonFormatter::new())
///     .build();
///
/// logger.with_field("port", 8080).write("listening");
/// assert!(sink.contents_string().contains("\"port\":8080"));
/// ```
pub struct LoggerBuilder {
    level: Level,
    output: Option<Arc<dyn Sink>>,
    formatter: Option<Arc<dyn Formatter>>,
    hooks: LevelHooks,
    no_lock: bool,
    exit_handler: Option<ExitHandler>,
    panic_handler: Option<PanicHandler>,
    pool_capacity: usize,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            level: Level::Info,
            output: None,
            formatter: None,
            hooks: LevelHooks::new(),
            no_lock: false,
            exit_handler: None,
            panic_handler: None,
            pool_capacity: DEFAULT_POOL_CAPACITY,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Defaults to stderr
    #[must_use = "builder methods return a new value"]
    pub fn output<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.output = Some(Arc::new(sink));
        self
    }

    /// Defaults to a [`TextFormatter`] with field sorting disabled
    #[must_use = "builder methods return a new value"]
    pub fn formatter<F: Formatter + 'static>(self, formatter: F) -> Self {
        self.shared_formatter(Arc::new(formatter))
    }

    #[must_use = "builder methods return a new value"]
    pub fn shared_formatter(mut self, formatter: Arc<dyn Formatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn hook<H: Hook + 'static>(mut self, hook: H) -> Self {
        self.hooks.add(Arc::new(hook));
        self
    }

    /// See [`Logger::set_no_lock`]
    #[must_use = "builder methods return a new value"]
    pub fn no_lock(mut self) -> Self {
        self.no_lock = true;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn exit_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(i32) + Send + Sync + 'static,
    {
        self.exit_handler = Some(Arc::new(handler));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn panic_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(LoggerError) + Send + Sync + 'static,
    {
        self.panic_handler = Some(Arc::new(handler));
        self
    }

    /// Number of recycled field maps kept for chaining roots; 0 disables reuse
    #[must_use = "builder methods return a new value"]
    pub fn pool_capacity(mut self, capacity: usize) -> Self {
        self.pool_capacity = capacity;
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let output = self.output.unwrap_or_else(|| Arc::new(StderrSink));
        let formatter = self
            .formatter
            .unwrap_or_else(|| Arc::new(TextFormatter::new().with_sorting(false)));
        let exit_handler = self
            .exit_handler
            .unwrap_or_else(|| Arc::new(|code: i32| std::process::exit(code)));

        Logger {
            inner: Arc::new(LoggerInner {
                level: AtomicU8::new(self.level.as_u8()),
                out: RwLock::new(output),
                formatter: RwLock::new(formatter),
                hooks: RwLock::new(self.hooks),
                mu: MutexWrap::new(self.no_lock),
                exit_handler: RwLock::new(exit_handler),
                panic_handler: RwLock::new(self.panic_handler),
                metrics: LoggerMetrics::new(),
                pool: EntryPool::new(self.pool_capacity),
            }),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{OutputFormat, TimestampFormat};
    use crate::formatters::JsonFormatter;
    use crate::sinks::MemorySink;
    use std::io;
    use std::sync::atomic::AtomicI32;

    fn json_logger(level: Level) -> (Logger, MemorySink) {
        let sink = MemorySink::new();
        let logger = Logger::builder()
            .level(level)
            .output(sink.clone())
            .formatter(JsonFormatter::new())
            .build();
        (logger, sink)
    }

    struct BrokenSink;

    impl Sink for BrokenSink {
        fn write_all(&self, _buf: &[u8]) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed pipe"))
        }
    }

    struct BrokenFormatter;

    impl Formatter for BrokenFormatter {
        fn format(&self, _entry: &Entry) -> Result<Vec<u8>> {
            Err(LoggerError::formatter("broken", "always fails"))
        }
    }

    struct RejectingHook;

    impl Hook for RejectingHook {
        fn levels(&self) -> Vec<Level> {
            Level::ALL.to_vec()
        }

        fn fire(&self, _entry: &mut Entry) -> Result<()> {
            Err(LoggerError::hook("rejecting", "no"))
        }
    }

    #[test]
    fn test_builder_defaults() {
        let logger = Logger::builder().build();
        assert_eq!(logger.level(), Level::Info);
        assert_eq!(logger.metrics().entries_written(), 0);
    }

    #[test]
    fn test_level_gating_matrix() {
        for threshold in Level::ALL {
            for requested in [Level::Error, Level::Warning, Level::Info, Level::Debug] {
                let (logger, sink) = json_logger(threshold);
                logger.log(requested, "gated");
                assert_eq!(
                    !sink.is_empty(),
                    requested <= threshold,
                    "threshold={} requested={}",
                    threshold,
                    requested
                );
            }
        }
    }

    #[test]
    fn test_set_level_is_observed() {
        let (logger, sink) = json_logger(Level::Info);
        logger.debug("hidden");
        logger.set_level(Level::Debug);
        logger.debug("shown");
        assert_eq!(logger.level(), Level::Debug);
        assert_eq!(sink.lines().len(), 1);
    }

    #[test]
    fn test_with_field_uses_current_level() {
        let (logger, sink) = json_logger(Level::Warning);
        let entry = logger.with_field("sample", "nah");
        assert_eq!(entry.level(), Level::Warning);
        entry.write("logged at warning");

        let out: serde_json::Value = serde_json::from_slice(&sink.contents()).unwrap();
        assert_eq!(out["level"], "warning");
        assert_eq!(out["sample"], "nah");
    }

    #[test]
    fn test_hook_failure_still_writes() {
        let (logger, sink) = json_logger(Level::Info);
        logger.add_hook(RejectingHook);
        logger.info("still here");

        assert_eq!(sink.lines().len(), 1);
        assert_eq!(logger.metrics().hook_failures(), 1);
        assert_eq!(logger.metrics().entries_written(), 1);
    }

    #[test]
    fn test_format_failure_skips_write() {
        let (logger, sink) = json_logger(Level::Info);
        logger.set_formatter(BrokenFormatter);
        logger.info("never written");

        assert!(sink.is_empty());
        assert_eq!(logger.metrics().format_failures(), 1);
        assert_eq!(logger.metrics().entries_written(), 0);
    }

    #[test]
    fn test_bad_timestamp_format_is_a_format_failure() {
        let bad = || TimestampFormat::Custom("%Y %Q".to_string());
        let formatters: Vec<Arc<dyn Formatter>> = vec![
            Arc::new(TextFormatter::new().with_timestamp_format(bad())),
            Arc::new(JsonFormatter::new().with_timestamp_format(bad())),
            LoggerConfig {
                format: OutputFormat::Json,
                timestamp_format: bad(),
                ..LoggerConfig::default()
            }
            .formatter(),
        ];

        for formatter in formatters {
            let (logger, sink) = json_logger(Level::Info);
            logger.set_shared_formatter(formatter);
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                logger.info("hello");
            }));

            assert!(result.is_ok());
            assert!(sink.is_empty());
            assert_eq!(logger.metrics().format_failures(), 1);
            assert_eq!(logger.metrics().entries_written(), 0);
        }
    }

    #[test]
    fn test_sink_failure_is_counted() {
        let (logger, _) = json_logger(Level::Info);
        logger.set_output(BrokenSink);
        logger.error("lost");
        assert_eq!(logger.metrics().sink_failures(), 1);
    }

    #[test]
    fn test_fatal_calls_exit_handler_after_writing() {
        let code = Arc::new(AtomicI32::new(-1));
        let seen = Arc::clone(&code);
        let (logger, sink) = json_logger(Level::Info);
        logger.set_exit_handler(move |status| seen.store(status, Ordering::SeqCst));

        logger.fatalf(format_args!("disk {}", "full"));

        assert_eq!(code.load(Ordering::SeqCst), 1);
        let out: serde_json::Value = serde_json::from_slice(&sink.contents()).unwrap();
        assert_eq!(out["level"], "fatal");
        assert_eq!(out["msg"], "disk full");
    }

    #[test]
    fn test_fatal_exits_even_when_sink_fails() {
        let code = Arc::new(AtomicI32::new(-1));
        let seen = Arc::clone(&code);
        let logger = Logger::builder()
            .output(BrokenSink)
            .exit_handler(move |status| seen.store(status, Ordering::SeqCst))
            .build();

        logger.as_fatal().write("boom");
        assert_eq!(code.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_panic_without_handler_unwinds_with_entry() {
        let (logger, sink) = json_logger(Level::Info);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            logger
                .as_panic()
                .with_field("size", 9009)
                .write("It's over 9000!");
        }));

        let payload = result.expect_err("panic level unwinds");
        let directive = payload
            .downcast_ref::<LoggerError>()
            .expect("payload is the logger error");
        let entry = directive.panic_entry().expect("entry attached");
        assert_eq!(entry.message(), "It's over 9000!");
        assert_eq!(entry.data().get("size"), Some(&FieldValue::Int(9009)));
        assert!(entry.time().is_some());
        assert_eq!(sink.lines().len(), 1);
    }

    #[test]
    fn test_panic_handler_receives_directive() {
        let received = Arc::new(Mutex::new(None));
        let slot = Arc::clone(&received);
        let (logger, _) = json_logger(Level::Info);
        logger.set_panic_handler(move |err| {
            if let LoggerError::PanicLevelReached { message, .. } = err {
                *slot.lock() = Some(message);
            }
        });

        logger.panic("recovered");
        assert_eq!(received.lock().as_deref(), Some("recovered"));
    }

    #[test]
    fn test_scratch_entries_are_recycled() {
        let (logger, _) = json_logger(Level::Info);
        assert_eq!(logger.pooled_entries(), 0);
        logger.info("direct");
        assert_eq!(logger.pooled_entries(), 1);
        let _entry = logger.with_field("a", 1);
        assert_eq!(logger.pooled_entries(), 1);
    }

    #[test]
    fn test_pool_reuse_does_not_leak_fields() {
        struct Tagger;
        impl Hook for Tagger {
            fn levels(&self) -> Vec<Level> {
                vec![Level::Info]
            }
            fn fire(&self, entry: &mut Entry) -> Result<()> {
                entry.data_mut().insert("tag".into(), "scratch".into());
                Ok(())
            }
        }

        let (logger, sink) = json_logger(Level::Debug);
        logger.add_hook(Tagger);
        logger.info("tagged by hook");
        let entry = logger.with_field("b", 2);

        assert_eq!(entry.data().len(), 1);
        assert!(entry.data().get("tag").is_none());
        entry.as_debug().write("untagged");

        let lines = sink.lines();
        let second: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
        assert!(second.get("tag").is_none());
        assert_eq!(second["b"], 2);
    }

    #[test]
    fn test_replace_hooks_returns_previous() {
        let (logger, _) = json_logger(Level::Info);
        logger.add_hook(RejectingHook);
        let previous = logger.replace_hooks(LevelHooks::new());
        assert_eq!(previous.len_for(Level::Info), 1);

        logger.info("no hooks now");
        assert_eq!(logger.metrics().hook_failures(), 0);
    }

    #[test]
    fn test_no_lock_still_writes() {
        let sink = MemorySink::new();
        let logger = Logger::builder()
            .output(sink.clone())
            .formatter(JsonFormatter::new())
            .no_lock()
            .build();
        logger.set_no_lock();
        logger.info("unlocked");
        assert_eq!(sink.lines().len(), 1);
    }

    #[test]
    fn test_from_config() {
        let config = LoggerConfig::from_json(r#"{"level":"debug","format":"json"}"#).unwrap();
        let logger = Logger::from_config(&config);
        let sink = MemorySink::new();
        logger.set_output(sink.clone());

        logger.debug("configured");
        let out: serde_json::Value = serde_json::from_slice(&sink.contents()).unwrap();
        assert_eq!(out["msg"], "configured");
    }
}
