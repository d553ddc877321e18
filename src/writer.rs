//! File writer for generated model files.
//!
//! Writes are blocking and direct, with parent directories created on
//! demand. Dry-run mode returns the content without touching disk.

use crate::error::{CliResult, WriteError};
use std::path::{Path, PathBuf};

/// Result of a write operation.
#[derive(Debug)]
pub enum WriteResult {
    /// File was written successfully.
    Written { path: PathBuf, bytes: usize },
    /// Dry run, content was not written.
    DryRun { path: PathBuf, content: String },
}

/// File writer with dry-run support.
#[derive(Debug)]
pub struct FileWriter {
    dry_run: bool,
}

impl FileWriter {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Write ordered lines to a file, newline-terminated, UTF-8.
    pub fn write_lines(&self, path: &Path, lines: &[String]) -> CliResult<WriteResult> {
        let mut content = lines.join("\n");
        content.push('\n');
        self.write(path, &content)
    }

    /// Write content to a file, creating parent directories as needed.
    pub fn write(&self, path: &Path, content: &str) -> CliResult<WriteResult> {
        if self.dry_run {
            return Ok(WriteResult::DryRun {
                path: path.to_path_buf(),
                content: content.to_string(),
            });
        }

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| WriteError::CreateDir {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        std::fs::write(path, content).map_err(|e| WriteError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(WriteResult::Written {
            path: path.to_path_buf(),
            bytes: content.len(),
        })
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path, .. } => path,
            WriteResult::DryRun { path, .. } => path,
        }
    }

    pub fn was_written(&self) -> bool {
        matches!(self, WriteResult::Written { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_lines_creates_nested_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app/models/User.js");
        let lines = vec!["class User {".to_string(), "}".to_string()];

        let writer = FileWriter::new(false);
        let result = writer.write_lines(&path, &lines).unwrap();

        assert!(result.was_written());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "class User {\n}\n"
        );
    }

    #[test]
    fn test_dry_run_does_not_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("User.js");

        let writer = FileWriter::new(true);
        let result = writer
            .write_lines(&path, &["class User {}".to_string()])
            .unwrap();

        assert!(!result.was_written());
        assert!(!path.exists());

        if let WriteResult::DryRun { content, .. } = result {
            assert_eq!(content, "class User {}\n");
        }
    }
}
