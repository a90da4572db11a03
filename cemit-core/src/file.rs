use std::path::{Path, PathBuf};

use crate::{Error, Result};

fn write_file(path: &Path, content: &str) -> Result<()> {
    let io_err = |source: std::io::Error| Error::WriteFile {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, content).map_err(io_err)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// A rendered C file to be written to disk
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (default rules: always overwrite)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Replace the write rules
    pub fn rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content, without any banner
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file according to its rules
    pub fn write(&self) -> Result<WriteResult> {
        if self.rules.overwrite == Overwrite::IfMissing && self.exists() {
            return Ok(WriteResult::Skipped);
        }
        write_file(&self.path, &self.rendered())?;
        Ok(WriteResult::Written)
    }

    fn rendered(&self) -> String {
        match &self.rules.header {
            Some(header) => format!("/* {} */\n\n{}", header, self.content),
            None => self.content.clone(),
        }
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone)]
pub struct FileRules {
    pub overwrite: Overwrite,
    /// Banner written as a block comment above the content.
    pub header: Option<String>,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    Always,
    /// Only create if file doesn't exist
    IfMissing,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            overwrite: Overwrite::Always,
            header: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("include").join("gen").join("api.h");

        write_file(&path, "int x;\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "int x;\n");
    }

    #[test]
    fn test_file_write_always_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("api.h");

        fs::write(&path, "original").unwrap();

        let result = File::new(&path, "updated").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_file_write_if_missing_creates_new() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("new.h");

        let file = File::new(&path, "new content").rules(FileRules {
            overwrite: Overwrite::IfMissing,
            header: None,
        });

        assert_eq!(file.write().unwrap(), WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new content");
    }

    #[test]
    fn test_file_write_if_missing_skips_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("existing.h");

        fs::write(&path, "original").unwrap();

        let file = File::new(&path, "should not write").rules(FileRules {
            overwrite: Overwrite::IfMissing,
            header: None,
        });

        assert_eq!(file.write().unwrap(), WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_file_write_with_header() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("api.h");

        let file = File::new(&path, "int x;\n").rules(FileRules {
            overwrite: Overwrite::Always,
            header: Some("generated by cemit, do not edit".to_string()),
        });
        file.write().unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "/* generated by cemit, do not edit */\n\nint x;\n"
        );
        assert_eq!(file.content(), "int x;\n");
    }

    #[test]
    fn test_write_into_file_path_fails() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let err = File::new(blocker.join("api.h"), "").write().unwrap_err();
        assert!(matches!(err, Error::WriteFile { .. }));
    }
}
