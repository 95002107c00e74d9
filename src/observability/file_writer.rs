//! Append-only trace file with numbered size-based rotation.
//!
//! When the live file grows past its size limit it becomes `<name>.1`, the
//! previous `<name>.1` becomes `<name>.2`, and so on. The backup past the
//! retention count is deleted.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Size at which the live file is rotated (5 MiB).
pub const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024;

/// Rotated files kept next to the live one.
pub const DEFAULT_BACKUPS: usize = 2;

/// Line-oriented writer shared between exporter calls.
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, DEFAULT_MAX_BYTES, DEFAULT_BACKUPS)
    }

    pub const fn with_limits(path: PathBuf, max_bytes: u64, backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            backups,
            handle: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Returns an error if rotation, opening or writing fails, or if a previous
    /// writer panicked while holding the lock.
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("trace file lock poisoned: {e}")))?;

        if self.is_full() {
            *handle = None;
            self.rotate()?;
        }

        let file = match handle.take() {
            Some(file) => file,
            None => OpenOptions::new().create(true).append(true).open(&self.path)?,
        };
        let file = handle.insert(file);

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn is_full(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|meta| meta.len() >= self.max_bytes)
    }

    fn rotate(&self) -> io::Result<()> {
        if self.backups == 0 {
            return remove_if_present(&self.path);
        }

        remove_if_present(&self.backup_path(self.backups))?;
        for n in (1..self.backups).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }
        if self.path.exists() {
            fs::rename(&self.path, self.backup_path(1))?;
        }
        Ok(())
    }

    fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }
}

fn remove_if_present(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("backups", &self.backups)
            .finish_non_exhaustive()
    }
}
