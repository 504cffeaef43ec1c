//! Log entry: one log event under construction
//!
//! An entry carries a level and a set of fields, and is emitted with one
//! of the write methods. Deriving a new entry (`with_field`, `with_fields`,
//! `with_error`) never touches the parent, so a base entry can be kept and
//! reused across calls and threads:
//!
//! ```
//! use rust_structured_logger::prelude::*;
//!
//! let logger = Logger::new(Level::Debug);
//! logger.set_output(MemorySink::new());
//!
//! let request = logger.with_field("request_id", "abc-123");
//! request.as_debug().with_field("step", 1).write("parsing body");
//! request.as_error().with_field("step", 2).write("validation failed");
//!
//! assert_eq!(request.data().len(), 1);
//! ```

use super::{
    error::{LoggerError, Result},
    fields::{FieldValue, Fields, ERROR_KEY},
    level::Level,
    logger::Logger,
    message::trim_line_end,
    writer::LogWriter,
};
use chrono::{DateTime, Utc};
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

#[derive(Clone)]
pub struct Entry {
    logger: Logger,
    data: Arc<Fields>,
    level: Level,
    time: Option<DateTime<Utc>>,
    message: String,
}

impl Entry {
    /// Empty entry at the logger's current level
    pub fn new(logger: &Logger) -> Self {
        Self::from_parts(logger.clone(), logger.level(), Arc::new(Fields::new()))
    }

    /// Entry at the logger's current level carrying `data`
    pub fn with_data(logger: &Logger, data: Fields) -> Self {
        Self::from_parts(logger.clone(), logger.level(), Arc::new(data))
    }

    pub(crate) fn from_parts(logger: Logger, level: Level, data: Arc<Fields>) -> Self {
        Self {
            logger,
            data,
            level,
            time: None,
            message: String::new(),
        }
    }

    pub(crate) fn into_data(self) -> Arc<Fields> {
        self.data
    }

    /// Same fields, different level.
    ///
    /// Call this before adding fields: `logger.as_debug().with_field(..)`
    /// reads better than re-leveling an entry after the fact.
    pub fn with_level(&self, level: Level) -> Entry {
        Self::from_parts(self.logger.clone(), level, Arc::clone(&self.data))
    }

    pub fn as_debug(&self) -> Entry {
        self.with_level(Level::Debug)
    }

    pub fn as_info(&self) -> Entry {
        self.with_level(Level::Info)
    }

    pub fn as_warning(&self) -> Entry {
        self.with_level(Level::Warning)
    }

    pub fn as_error(&self) -> Entry {
        self.with_level(Level::Error)
    }

    pub fn as_fatal(&self) -> Entry {
        self.with_level(Level::Fatal)
    }

    pub fn as_panic(&self) -> Entry {
        self.with_level(Level::Panic)
    }

    /// New entry with this entry's fields plus `key`
    pub fn with_field<K, V>(&self, key: K, value: V) -> Entry
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.with_fields(std::iter::once((key, value)))
    }

    /// New entry with this entry's fields plus `fields`; new keys win
    pub fn with_fields<I, K, V>(&self, fields: I) -> Entry
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let fields = fields.into_iter();
        let mut data = Fields::with_capacity(self.data.len() + fields.size_hint().0);
        data.extend(self.data.iter().map(|(k, v)| (k.clone(), v.clone())));
        data.extend(fields.map(|(k, v)| (k.into(), v.into())));
        Self::from_parts(self.logger.clone(), self.level, Arc::new(data))
    }

    /// Shorthand for `with_field("error", err)`
    pub fn with_error<E>(&self, err: E) -> Entry
    where
        E: StdError + Send + Sync + 'static,
    {
        self.with_field(ERROR_KEY, FieldValue::error(err))
    }

    /// Log `msg` at this entry's level
    pub fn write<M: fmt::Display>(&self, msg: M) {
        self.emit(|| msg.to_string());
    }

    /// Log a `format_args!` message at this entry's level
    pub fn writef(&self, args: fmt::Arguments<'_>) {
        self.emit(|| fmt::format(args));
    }

    /// Log `msg` with trailing line breaks removed, so the output ends in
    /// exactly one newline.
    ///
    /// Every trailing `\n` and `\r` is dropped, including ones that are
    /// part of `msg` itself: `writeln("a\n\n")` logs the message `a`.
    /// Line breaks inside the message are kept.
    pub fn writeln<M: fmt::Display>(&self, msg: M) {
        self.emit(|| trim_line_end(msg.to_string()));
    }

    fn emit(&self, render: impl FnOnce() -> String) {
        if !self.level.enabled(self.logger.level()) {
            return;
        }
        // Stamp and hook a copy; the caller's entry stays reusable.
        let mut working = self.clone();
        working.log(render());
    }

    /// Stamp the entry and run it through the logger's pipeline.
    /// The level gate has already been checked.
    pub(crate) fn log(&mut self, message: String) {
        self.time = Some(Utc::now());
        self.message = message;
        let logger = self.logger.clone();
        logger.dispatch(self);
    }

    /// Render the entry with the logger's formatter without writing it
    pub fn as_string(&self) -> Result<String> {
        let serialized = self.logger.formatter().format(self)?;
        String::from_utf8(serialized).map_err(|e| LoggerError::formatter("utf-8", e.to_string()))
    }

    /// Line-oriented writer logging each line at info level
    pub fn writer(&self) -> Result<LogWriter> {
        self.writer_level(Level::Info)
    }

    /// Line-oriented writer logging each line at `level`
    pub fn writer_level(&self, level: Level) -> Result<LogWriter> {
        LogWriter::spawn(self.with_level(level))
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn data(&self) -> &Fields {
        &self.data
    }

    /// Mutable fields. Copies the map first if another entry shares it.
    pub fn data_mut(&mut self) -> &mut Fields {
        Arc::make_mut(&mut self.data)
    }

    /// Set when the entry is written
    pub fn time(&self) -> Option<DateTime<Utc>> {
        self.time
    }

    /// Set when the entry is written
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("level", &self.level)
            .field("data", &self.data)
            .field("time", &self.time)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
