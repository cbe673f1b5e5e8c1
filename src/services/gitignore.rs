//! Confirmed, idempotent `.gitignore` appends.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::{AppError, messages};
use crate::ports::PrompterPort;

#[derive(Debug, Clone)]
pub struct GitignoreGuard {
    path: PathBuf,
}

impl GitignoreGuard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when some line of the file equals `entry` exactly.
    ///
    /// Lines are compared as bytes, so non-UTF-8 content never fails the check.
    pub fn contains(&self, entry: &str) -> Result<bool, AppError> {
        if !self.path.exists() {
            return Ok(false);
        }
        let mut reader = BufReader::new(File::open(&self.path)?);
        let mut line = Vec::new();
        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(false);
            }
            let trimmed = line.strip_suffix(b"\n").unwrap_or(line.as_slice());
            let trimmed = trimmed.strip_suffix(b"\r").unwrap_or(trimmed);
            if trimmed == entry.as_bytes() {
                return Ok(true);
            }
        }
    }

    /// Append `entry` after the user confirms, unless it is already present.
    ///
    /// Returns whether the file was written.
    pub fn add_entry(
        &self,
        prompter: &(impl PrompterPort + ?Sized),
        entry: &str,
    ) -> Result<bool, AppError> {
        if self.contains(entry)? {
            return Ok(false);
        }
        if !prompter.confirm(&messages::confirm_add_to_gitignore(entry))? {
            return Ok(false);
        }

        let leading = if self.needs_leading_newline()? { "\n" } else { "" };
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        writeln!(file, "{leading}{entry}")?;
        info!("Added {} to {}", entry, self.path.display());
        Ok(true)
    }

    fn needs_leading_newline(&self) -> Result<bool, AppError> {
        if !self.path.exists() {
            return Ok(false);
        }
        let content = fs::read(&self.path)?;
        Ok(content.last().is_some_and(|last| *last != b'\n'))
    }
}
