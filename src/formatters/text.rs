//! `key=value` text formatter

use crate::core::{
    formatter::{prefix_field_clashes, Formatter, LEVEL_KEY, MESSAGE_KEY, TIME_KEY},
    Entry, FieldValue, Result, TimestampFormat,
};
use colored::Colorize;
use std::fmt::Write as _;

/// Width the message is padded to in colored output when fields follow
const COLORED_MESSAGE_WIDTH: usize = 44;

/// Renders `time="…" level=info msg="…" key=value …`.
///
/// With colors enabled the layout switches to a terminal-friendly
/// `INFO[time] message        key=value` with the level tag and keys
/// colorized.
///
/// ```
/// use rust_structured_logger::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder()
///     .output(sink.clone())
///     .formatter(TextFormatter::new().with_timestamp(false))
///     .build();
///
/// logger.with_fields(fields! { "animal" => "walrus", "size" => 10 })
///     .write("A group of walrus emerges from the ocean");
///
/// assert_eq!(
///     sink.contents_string(),
///     "level=info msg=\"A group of walrus emerges from the ocean\" animal=walrus size=10\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct TextFormatter {
    use_colors: bool,
    disable_timestamp: bool,
    disable_sorting: bool,
    quote_empty_fields: bool,
    timestamp_format: TimestampFormat,
}

type FieldRef<'a> = (&'a String, &'a FieldValue);

impl TextFormatter {
    pub fn new() -> Self {
        Self {
            use_colors: false,
            disable_timestamp: false,
            disable_sorting: false,
            quote_empty_fields: false,
            timestamp_format: TimestampFormat::default(),
        }
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, enabled: bool) -> Self {
        self.disable_timestamp = !enabled;
        self
    }

    /// Sort user fields by key (on by default)
    #[must_use]
    pub fn with_sorting(mut self, enabled: bool) -> Self {
        self.disable_sorting = !enabled;
        self
    }

    /// Render empty values as `""` instead of nothing
    #[must_use]
    pub fn with_quote_empty_fields(mut self, enabled: bool) -> Self {
        self.quote_empty_fields = enabled;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    fn needs_quoting(&self, text: &str) -> bool {
        if text.is_empty() {
            return self.quote_empty_fields;
        }
        !text.chars().all(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '/' | '@' | '^' | '+')
        })
    }

    fn append_value(&self, out: &mut String, text: &str) {
        if self.needs_quoting(text) {
            let _ = write!(out, "{:?}", text);
        } else {
            out.push_str(text);
        }
    }

    fn append_key_value(&self, out: &mut String, key: &str, text: &str) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(key);
        out.push('=');
        self.append_value(out, text);
    }

    fn format_plain(
        &self,
        out: &mut String,
        entry: &Entry,
        timestamp: Option<String>,
        fields: &[FieldRef<'_>],
    ) {
        if let Some(ts) = timestamp {
            self.append_key_value(out, TIME_KEY, &ts);
        }
        self.append_key_value(out, LEVEL_KEY, entry.level().to_str());
        if !entry.message().is_empty() {
            self.append_key_value(out, MESSAGE_KEY, entry.message());
        }
        for (key, value) in fields {
            self.append_key_value(out, key, &value.to_string());
        }
    }

    fn format_colored(
        &self,
        out: &mut String,
        entry: &Entry,
        timestamp: Option<String>,
        fields: &[FieldRef<'_>],
    ) {
        let level = entry.level();
        let color = level.color_code();
        let tag: String = level.to_str().to_uppercase().chars().take(4).collect();

        let _ = write!(out, "{}", tag.color(color));
        if let Some(ts) = timestamp {
            let _ = write!(out, "[{}]", ts);
        }
        out.push(' ');
        if fields.is_empty() {
            out.push_str(entry.message());
        } else {
            let _ = write!(out, "{:<width$}", entry.message(), width = COLORED_MESSAGE_WIDTH);
        }
        for (key, value) in fields {
            let _ = write!(out, " {}=", key.color(color));
            self.append_value(out, &value.to_string());
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for TextFormatter {
    fn format(&self, entry: &Entry) -> Result<Vec<u8>> {
        let mut data = entry.data().clone();
        prefix_field_clashes(&mut data, &[TIME_KEY, LEVEL_KEY, MESSAGE_KEY]);

        let mut fields: Vec<FieldRef<'_>> = data.iter().collect();
        if !self.disable_sorting {
            fields.sort_by(|a, b| a.0.cmp(b.0));
        }

        let timestamp = if self.disable_timestamp {
            None
        } else {
            entry
                .time()
                .map(|t| self.timestamp_format.format(&t))
                .transpose()?
        };

        let mut out = String::with_capacity(64 + fields.len() * 16);
        if self.use_colors {
            self.format_colored(&mut out, entry, timestamp, &fields);
        } else {
            self.format_plain(&mut out, entry, timestamp, &fields);
        }
        out.push('\n');
        Ok(out.into_bytes())
    }
}
