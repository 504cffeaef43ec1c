//! `std::io::Write` adapter that logs each line it receives
//!
//! Useful for pointing a child process's output or another library's
//! writer-based logging at a [`Logger`](super::logger::Logger):
//!
//! ```
//! use rust_structured_logger::prelude::*;
//! use std::io::Write;
//!
//! let sink = MemorySink::new();
//! let logger = Logger::builder().output(sink.clone()).build();
//!
//! let mut writer = logger.writer_level(Level::Warning).unwrap();
//! writeln!(writer, "disk almost full").unwrap();
//! writer.close().unwrap();
//!
//! assert!(sink.contents_string().contains("level=warning"));
//! ```

use super::{
    entry::Entry,
    error::{LoggerError, Result},
};
use crossbeam_channel::{bounded, Receiver, Sender};
use std::io::{self, Write};
use std::thread::{self, JoinHandle};

/// Chunks queued ahead of the worker before `write` blocks
pub(crate) const WRITER_QUEUE_CAPACITY: usize = 64;

/// Line-splitting writer backed by a background thread.
///
/// Bytes are handed to the worker as written; each complete line is
/// logged through the entry the writer was created from. A trailing
/// partial line is logged when the writer is closed or dropped. `write`
/// blocks once the worker falls `WRITER_QUEUE_CAPACITY` chunks behind.
pub struct LogWriter {
    sender: Option<Sender<Vec<u8>>>,
    handle: Option<JoinHandle<()>>,
}

impl LogWriter {
    pub(crate) fn spawn(entry: Entry) -> Result<Self> {
        let (sender, receiver) = bounded(WRITER_QUEUE_CAPACITY);
        let handle = thread::Builder::new()
            .name("log-writer".to_string())
            .spawn(move || Self::run(&entry, &receiver))
            .map_err(|e| {
                LoggerError::io_operation("spawning writer thread", e.to_string(), e)
            })?;

        Ok(Self {
            sender: Some(sender),
            handle: Some(handle),
        })
    }

    fn run(entry: &Entry, receiver: &Receiver<Vec<u8>>) {
        let mut pending: Vec<u8> = Vec::new();
        for chunk in receiver.iter() {
            // `pending` never holds a newline between chunks
            let mut scan_from = pending.len();
            pending.extend_from_slice(&chunk);

            let mut line_start = 0;
            while let Some(offset) = pending[scan_from..].iter().position(|&b| b == b'\n') {
                let end = scan_from + offset;
                Self::emit_line(entry, &pending[line_start..end]);
                line_start = end + 1;
                scan_from = line_start;
            }
            pending.drain(..line_start);
        }
        if !pending.is_empty() {
            Self::emit_line(entry, &pending);
        }
    }

    fn emit_line(entry: &Entry, line: &[u8]) {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        entry.write(String::from_utf8_lossy(line));
    }

    /// Flush the trailing partial line and wait for the worker to finish
    pub fn close(mut self) -> Result<()> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> Result<()> {
        drop(self.sender.take());
        if let Some(handle) = self.handle.take() {
            handle
                .join()
                .map_err(|_| LoggerError::writer("log writer thread panicked"))?;
        }
        Ok(())
    }
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let sender = self
            .sender
            .as_ref()
            .ok_or_else(|| io::Error::new(io::ErrorKind::BrokenPipe, "log writer closed"))?;
        sender
            .send(buf.to_vec())
            .map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, "log writer thread exited"))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for LogWriter {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            eprintln!("[LOGGER ERROR] Failed to close log writer: {}", e);
        }
    }
}

impl std::fmt::Debug for LogWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogWriter")
            .field("open", &self.sender.is_some())
            .finish()
    }
}
