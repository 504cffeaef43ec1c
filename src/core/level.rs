//! Log level definitions
//!
//! Levels are ordered from most severe (`Panic`) to most verbose (`Debug`).
//! A request is emitted when its level is less than or equal to the
//! logger's threshold, so `Level::Info` lets through info, warning, error,
//! fatal and panic entries.

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Logged, then raised as a panic directive
    Panic = 0,
    /// Logged, then the process exits with status 1
    Fatal = 1,
    Error = 2,
    Warning = 3,
    #[default]
    Info = 4,
    Debug = 5,
}

impl Level {
    /// Every level, most severe first
    pub const ALL: [Level; 6] = [
        Level::Panic,
        Level::Fatal,
        Level::Error,
        Level::Warning,
        Level::Info,
        Level::Debug,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Level::Panic => "panic",
            Level::Fatal => "fatal",
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Info => "info",
            Level::Debug => "debug",
        }
    }

    /// Whether an entry at this level passes a logger set to `threshold`
    #[inline]
    pub fn enabled(self, threshold: Level) -> bool {
        self <= threshold
    }

    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Level::as_u8`]. Out-of-range values clamp to `Debug`.
    #[inline]
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => Level::Panic,
            1 => Level::Fatal,
            2 => Level::Error,
            3 => Level::Warning,
            4 => Level::Info,
            _ => Level::Debug,
        }
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Level::Debug => BrightBlack,
            Level::Info => Blue,
            Level::Warning => Yellow,
            Level::Error | Level::Fatal | Level::Panic => Red,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "panic" => Ok(Level::Panic),
            "fatal" => Ok(Level::Fatal),
            "error" => Ok(Level::Error),
            "warn" | "warning" => Ok(Level::Warning),
            "info" => Ok(Level::Info),
            "debug" => Ok(Level::Debug),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}
