//! Sink trait for log output destinations

use std::io;
use std::sync::Arc;

/// Byte destination for formatted entries.
///
/// Writes take `&self`: a sink that is safe for concurrent appends (an
/// append-mode file, a locked stream) keeps working when the logger's own
/// lock is disabled with `Logger::set_no_lock`.
pub trait Sink: Send + Sync {
    fn write_all(&self, buf: &[u8]) -> io::Result<()>;

    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn write_all(&self, buf: &[u8]) -> io::Result<()> {
        (**self).write_all(buf)
    }

    fn flush(&self) -> io::Result<()> {
        (**self).flush()
    }
}
