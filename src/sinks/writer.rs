//! Adapter for arbitrary `std::io::Write` values

use crate::core::Sink;
use parking_lot::Mutex;
use std::io::{self, Write};

/// Wraps any writer behind its own mutex so it can serve as a sink.
#[derive(Debug)]
pub struct WriterSink<W: Write + Send> {
    inner: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.inner.into_inner()
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write_all(&self, buf: &[u8]) -> io::Result<()> {
        self.inner.lock().write_all(buf)
    }

    fn flush(&self) -> io::Result<()> {
        self.inner.lock().flush()
    }
}
