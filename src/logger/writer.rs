//! File sink for `tracing-subscriber` fmt layers

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing_subscriber::fmt::MakeWriter;

use crate::logger::config::FileConfig;
use crate::logger::error::LoggerError;

/// Shared handle to the log file, cloned into every fmt layer that writes to it.
#[derive(Debug, Clone)]
pub struct FileWriter {
    file: Arc<Mutex<File>>,
}

impl FileWriter {
    /// Open (or create) the configured log file, creating parent directories.
    pub fn new(config: &FileConfig) -> Result<Self, LoggerError> {
        if let Some(parent) = config.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut options = OpenOptions::new();
        options.create(true);
        if config.append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }

        let file = options.open(&config.path)?;
        Ok(Self {
            file: Arc::new(Mutex::new(file)),
        })
    }
}

/// Writer handed out per event; holds the file lock for one log line.
pub struct FileWriterGuard<'a> {
    file: MutexGuard<'a, File>,
}

impl Write for FileWriterGuard<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

impl<'a> MakeWriter<'a> for FileWriter {
    type Writer = FileWriterGuard<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        // A panic while logging must not silence every later line.
        let file = self.file.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        FileWriterGuard { file }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::config::LogFormat;
    use tempfile::TempDir;

    fn file_config(dir: &TempDir, append: bool) -> FileConfig {
        FileConfig {
            enabled: true,
            path: dir.path().join("nested").join("pager.log"),
            append,
            format: LogFormat::Json,
        }
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let config = file_config(&dir, true);

        let writer = FileWriter::new(&config).unwrap();
        writer.make_writer().write_all(b"first\n").unwrap();

        assert_eq!(std::fs::read_to_string(&config.path).unwrap(), "first\n");
    }

    #[test]
    fn test_append_keeps_existing_lines() {
        let dir = TempDir::new().unwrap();
        let config = file_config(&dir, true);

        FileWriter::new(&config).unwrap().make_writer().write_all(b"one\n").unwrap();
        FileWriter::new(&config).unwrap().make_writer().write_all(b"two\n").unwrap();

        assert_eq!(std::fs::read_to_string(&config.path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_truncate_when_not_appending() {
        let dir = TempDir::new().unwrap();
        let config = file_config(&dir, true);
        FileWriter::new(&config).unwrap().make_writer().write_all(b"old\n").unwrap();

        let config = file_config(&dir, false);
        FileWriter::new(&config).unwrap().make_writer().write_all(b"new\n").unwrap();

        assert_eq!(std::fs::read_to_string(&config.path).unwrap(), "new\n");
    }
}
