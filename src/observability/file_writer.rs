//! Trace file writer with size-based rotation.
//!
//! Appends OTLP JSON lines to the trace file, rotating to a single `.old`
//! backup once the file passes the size threshold. One backup keeps disk usage
//! bounded without a cleanup scan.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Thread-safe rotating trace file writer.
///
/// The file handle is opened lazily on first write and dropped on rotation.
/// An internal `Mutex` serializes writes from concurrent exporters.
pub struct FileWriter {
    /// Path to the trace file.
    file_path: PathBuf,
    /// Lazily-initialized file handle.
    handle: Mutex<Option<fs::File>>,
}

impl FileWriter {
    /// Creates a writer for the given path.
    ///
    /// The file is not opened until the first write, so construction succeeds
    /// even when the path is not writable yet.
    pub const fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            handle: Mutex::new(None),
        }
    }

    /// Appends one line to the trace file, rotating first if it grew too big.
    ///
    /// # Errors
    ///
    /// Fails on filesystem errors (permissions, disk space) or when the mutex
    /// was poisoned by a panicking writer.
    pub fn write_line(&self, json: &str) -> std::io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, format!("writer mutex poisoned: {e}")))?;

        if self.needs_rotation() {
            *handle = None;
            self.rotate()?;
        }

        if handle.is_none() {
            *handle = Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.file_path)?,
            );
        }

        let file = handle
            .as_mut()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "trace file unavailable"))?;

        writeln!(file, "{json}")?;
        file.flush()
    }

    /// Whether the current file exceeds the rotation threshold.
    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|m| m.len() > MAX_FILE_SIZE_BYTES)
    }

    /// Renames the current file to `<name>.old`, replacing any prior backup.
    fn rotate(&self) -> std::io::Result<()> {
        let backup = self.file_path.with_extension("json.old");
        if self.file_path.exists() {
            fs::rename(&self.file_path, backup)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_append_to_the_trace_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traces.json");
        let writer = FileWriter::new(path.clone());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }
}
