//! Append-mode file sink

use crate::core::{LoggerError, Result, Sink};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// File opened in append mode.
///
/// Each entry is handed to the OS in one `write_all` on a shared `&File`,
/// so several threads may write without the logger's lock as long as
/// entries stay below the platform's atomic append size.
#[derive(Debug)]
pub struct FileSink {
    file: File,
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;

        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write_all(&self, buf: &[u8]) -> io::Result<()> {
        (&self.file).write_all(buf)
    }

    fn flush(&self) -> io::Result<()> {
        (&self.file).flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_file_sink_appends() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("app.log");
        fs::write(&log_path, "existing\n")?;

        let sink = FileSink::new(&log_path)?;
        sink.write_all(b"first\n")?;
        sink.write_all(b"second\n")?;
        sink.flush()?;

        let content = fs::read_to_string(&log_path)?;
        assert_eq!(content, "existing\nfirst\nsecond\n");
        assert_eq!(sink.path(), log_path.as_path());
        Ok(())
    }

    #[test]
    fn test_file_sink_open_failure_has_context() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("no/such/dir/app.log");
        let err = FileSink::new(&missing).unwrap_err();
        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("opening log file"));
    }
}
