//! JSON object-per-line formatter

use crate::core::{
    formatter::{prefix_field_clashes, Formatter, LEVEL_KEY, MESSAGE_KEY, TIME_KEY},
    Entry, Result, TimestampFormat,
};
use serde_json::{Map, Value};

/// Output names for the reserved keys
///
/// ```
/// use rust_structured_logger::formatters::FieldMap;
///
/// let map = FieldMap::new().time("@timestamp").message("message");
/// assert_eq!(map.time_key(), "@timestamp");
/// assert_eq!(map.level_key(), "level");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMap {
    time: String,
    level: String,
    message: String,
}

impl FieldMap {
    pub fn new() -> Self {
        Self {
            time: TIME_KEY.to_string(),
            level: LEVEL_KEY.to_string(),
            message: MESSAGE_KEY.to_string(),
        }
    }

    #[must_use]
    pub fn time(mut self, key: impl Into<String>) -> Self {
        self.time = key.into();
        self
    }

    #[must_use]
    pub fn level(mut self, key: impl Into<String>) -> Self {
        self.level = key.into();
        self
    }

    #[must_use]
    pub fn message(mut self, key: impl Into<String>) -> Self {
        self.message = key.into();
        self
    }

    pub fn time_key(&self) -> &str {
        &self.time
    }

    pub fn level_key(&self) -> &str {
        &self.level
    }

    pub fn message_key(&self) -> &str {
        &self.message
    }
}

impl Default for FieldMap {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders each entry as one JSON object followed by a newline.
///
/// User fields sit next to the reserved keys; a user field named like a
/// reserved key is moved to `fields.<key>`. Errors are rendered as their
/// message.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    timestamp_format: TimestampFormat,
    disable_timestamp: bool,
    field_map: FieldMap,
    pretty_print: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, enabled: bool) -> Self {
        self.disable_timestamp = !enabled;
        self
    }

    #[must_use]
    pub fn with_field_map(mut self, field_map: FieldMap) -> Self {
        self.field_map = field_map;
        self
    }

    /// Indent the object. Output then spans several lines.
    #[must_use]
    pub fn with_pretty_print(mut self, enabled: bool) -> Self {
        self.pretty_print = enabled;
        self
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, entry: &Entry) -> Result<Vec<u8>> {
        let map = &self.field_map;
        let mut data = entry.data().clone();
        prefix_field_clashes(&mut data, &[map.time_key(), map.message_key(), map.level_key()]);

        let mut object = Map::with_capacity(data.len() + 3);
        for (key, value) in data {
            object.insert(key, value.to_json_value());
        }

        if !self.disable_timestamp {
            if let Some(time) = entry.time() {
                object.insert(
                    map.time_key().to_string(),
                    self.timestamp_format.to_json_value(&time)?,
                );
            }
        }
        object.insert(map.message_key().to_string(), Value::from(entry.message()));
        object.insert(map.level_key().to_string(), Value::from(entry.level().to_str()));

        let value = Value::Object(object);
        let mut out = if self.pretty_print {
            serde_json::to_vec_pretty(&value)?
        } else {
            serde_json::to_vec(&value)?
        };
        out.push(b'\n');
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Level, Logger};
    use crate::sinks::MemorySink;
    use std::io;

    fn parse(bytes: &[u8]) -> Value {
        serde_json::from_slice(bytes).expect("valid JSON")
    }

    fn entry_with(key: &str, value: &str) -> Entry {
        Logger::new(Level::Debug).with_field(key.to_string(), value)
    }

    #[test]
    fn test_error_not_lost() {
        let err = io::Error::new(io::ErrorKind::Other, "wild walrus");
        let entry = Logger::new(Level::Debug).with_field("omg", crate::FieldValue::error(err));
        let out = parse(&JsonFormatter::new().format(&entry).unwrap());
        assert_eq!(out["omg"], "wild walrus");
    }

    #[test]
    fn test_field_clash_with_reserved_keys() {
        let formatter = JsonFormatter::new();
        for key in ["time", "msg", "level"] {
            let out = parse(&formatter.format(&entry_with(key, "something")).unwrap());
            assert_eq!(out[format!("fields.{}", key)], "something");
        }
    }

    #[test]
    fn test_time_key_set_when_written() {
        let sink = MemorySink::new();
        let logger = Logger::builder()
            .output(sink.clone())
            .formatter(JsonFormatter::new())
            .build();
        logger.with_field("time", "right now!").write("stamped");

        let out = parse(&sink.contents());
        assert_eq!(out["fields.time"], "right now!");
        let time = out["time"].as_str().expect("time is a string");
        assert!(chrono::DateTime::parse_from_rfc3339(time).is_ok());
    }

    #[test]
    fn test_unix_timestamp_is_number() {
        let sink = MemorySink::new();
        let logger = Logger::builder()
            .output(sink.clone())
            .formatter(JsonFormatter::new().with_timestamp_format(TimestampFormat::Unix))
            .build();
        logger.info("numeric");
        assert!(parse(&sink.contents())["time"].is_i64());
    }

    #[test]
    fn test_ends_with_single_newline() {
        let out = JsonFormatter::new()
            .format(&entry_with("level", "something"))
            .unwrap();
        assert_eq!(out.last(), Some(&b'\n'));
        assert_eq!(out.iter().filter(|&&b| b == b'\n').count(), 1);
    }

    #[test]
    fn test_field_map_renames_reserved_keys() {
        let formatter = JsonFormatter::new().with_field_map(
            FieldMap::new()
                .message("Message")
                .level("somelevel")
                .time("@timestamp"),
        );
        let out = parse(&formatter.format(&entry_with("level", "something")).unwrap());

        assert_eq!(out["somelevel"], "debug");
        assert_eq!(out["Message"], "");
        // "level" is no longer reserved, so the user field keeps its name
        assert_eq!(out["level"], "something");
        assert!(out.get("msg").is_none());
    }

    #[test]
    fn test_disable_timestamp() {
        let sink = MemorySink::new();
        let logger = Logger::builder()
            .output(sink.clone())
            .formatter(JsonFormatter::new().with_timestamp(false))
            .build();
        logger.info("timeless");
        assert!(parse(&sink.contents()).get("time").is_none());
    }

    #[test]
    fn test_non_finite_float_is_described() {
        let entry = Logger::new(Level::Debug).with_field("ratio", f64::NAN);
        let out = parse(&JsonFormatter::new().format(&entry).unwrap());
        assert_eq!(out["ratio"], "json: unsupported value: NaN");
    }

    #[test]
    fn test_pretty_print() {
        let entry = entry_with("animal", "walrus");
        let out = JsonFormatter::new().with_pretty_print(true).format(&entry).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\n  \"animal\": \"walrus\""));
        assert!(text.ends_with("}\n"));
    }
}
