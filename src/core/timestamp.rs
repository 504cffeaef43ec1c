//! Timestamp formatting for the `time` field
//!
//! Supports ISO 8601, RFC 3339, Unix timestamps and custom strftime formats.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// How formatters render an entry's time
///
/// # Examples
///
/// ```
/// use rust_structured_logger::TimestampFormat;
/// use chrono::Utc;
///
/// let rendered = TimestampFormat::Iso8601.format(&Utc::now()).unwrap();
/// assert!(rendered.ends_with('Z'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFormat {
    /// `2025-01-08T10:30:45Z`, the default for both formatters
    #[default]
    Rfc3339,

    /// `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// `2025-01-08T10:30:45.123456Z`
    Iso8601Micros,

    /// Seconds since the epoch: `1736332245`
    Unix,

    /// `1736332245123`
    UnixMillis,

    /// `1736332245123456`
    UnixMicros,

    /// Any strftime-compatible format string, e.g. `"%d/%b/%Y:%H:%M:%S %z"`
    Custom(String),
}

impl TimestampFormat {
    /// Render `datetime`. Fails only for a custom format string chrono
    /// cannot interpret.
    pub fn format(&self, datetime: &DateTime<Utc>) -> Result<String> {
        let rendered = match self {
            TimestampFormat::Rfc3339 => datetime.to_rfc3339_opts(SecondsFormat::Secs, true),
            TimestampFormat::Iso8601 => datetime.to_rfc3339_opts(SecondsFormat::Millis, true),
            TimestampFormat::Iso8601Micros => {
                datetime.to_rfc3339_opts(SecondsFormat::Micros, true)
            }
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::UnixMicros => datetime.timestamp_micros().to_string(),
            TimestampFormat::Custom(format_str) => {
                let mut out = String::new();
                write!(out, "{}", datetime.format(format_str)).map_err(|_| {
                    LoggerError::formatter(
                        "timestamp",
                        format!("invalid strftime format {:?}", format_str),
                    )
                })?;
                out
            }
        };
        Ok(rendered)
    }

    /// Reject a custom format string chrono cannot interpret
    pub fn validate(&self) -> Result<()> {
        if let TimestampFormat::Custom(format_str) = self {
            if StrftimeItems::new(format_str).any(|item| matches!(item, Item::Error)) {
                return Err(LoggerError::config(
                    "timestamp_format",
                    format!("invalid strftime format {:?}", format_str),
                ));
            }
        }
        Ok(())
    }

    /// Unix variants render as numbers in JSON output
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            TimestampFormat::Unix | TimestampFormat::UnixMillis | TimestampFormat::UnixMicros
        )
    }

    pub(crate) fn to_json_value(&self, datetime: &DateTime<Utc>) -> Result<serde_json::Value> {
        Ok(match self {
            TimestampFormat::Unix => datetime.timestamp().into(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().into(),
            TimestampFormat::UnixMicros => datetime.timestamp_micros().into(),
            _ => self.format(datetime)?.into(),
        })
    }
}
