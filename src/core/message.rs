//! Message rendering helpers for the write family

use std::fmt;

/// Renders its operands separated by single spaces.
///
/// ```
/// use rust_structured_logger::Spaced;
///
/// let rendered = Spaced(&[&"answer", &42, &true]).to_string();
/// assert_eq!(rendered, "answer 42 true");
/// ```
#[derive(Clone, Copy)]
pub struct Spaced<'a>(pub &'a [&'a dyn fmt::Display]);

impl fmt::Display for Spaced<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arg) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", arg)?;
        }
        Ok(())
    }
}

/// Strip trailing line breaks; formatters terminate every entry themselves.
pub(crate) fn trim_line_end(mut message: String) -> String {
    while message.ends_with('\n') || message.ends_with('\r') {
        message.pop();
    }
    message
}
