//! File sink implementation

use crate::core::{Result, Sink};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

pub struct FileSink {
    writer: BufWriter<File>,
}

impl FileSink {
    /// Open (or create) `path` in append mode.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl Sink for FileSink {
    fn write_str(&mut self, s: &str) -> Result<()> {
        self.writer.write_all(s.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writes_append_to_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("out.log");

        let mut sink = FileSink::new(&path).expect("Failed to open sink");
        sink.write_str("INFO\t[FS]\tfirst\n").unwrap();
        sink.flush().unwrap();
        sink.write_str("INFO\t[FS]\tsecond\n").unwrap();
        drop(sink);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "INFO\t[FS]\tfirst\nINFO\t[FS]\tsecond\n");
    }

    #[test]
    fn test_reopen_appends() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("out.log");

        {
            let mut sink = FileSink::new(&path).unwrap();
            sink.write_str("one\n").unwrap();
        }
        {
            let mut sink = FileSink::new(&path).unwrap();
            sink.write_str("two\n").unwrap();
        }

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "one\ntwo\n");
    }
}
