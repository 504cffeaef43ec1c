//! Formatter trait: turns an entry into the bytes written to the sink

use super::{entry::Entry, error::Result, fields::Fields};

/// Reserved key for the timestamp
pub const TIME_KEY: &str = "time";
/// Reserved key for the level
pub const LEVEL_KEY: &str = "level";
/// Reserved key for the message
pub const MESSAGE_KEY: &str = "msg";

/// Serializes an entry. Output must end with exactly one newline.
pub trait Formatter: Send + Sync {
    fn format(&self, entry: &Entry) -> Result<Vec<u8>>;
}

/// Move user fields named like one of `reserved` to `fields.<key>`
/// so they can never shadow the timestamp, level or message.
pub fn prefix_field_clashes(data: &mut Fields, reserved: &[&str]) {
    for key in reserved {
        if let Some(value) = data.remove(*key) {
            data.insert(format!("fields.{}", key), value);
        }
    }
}
