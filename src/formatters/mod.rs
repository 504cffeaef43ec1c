//! Built-in formatters

pub mod json;
pub mod text;

pub use crate::core::formatter::Formatter;
pub use json::{FieldMap, JsonFormatter};
pub use text::TextFormatter;
