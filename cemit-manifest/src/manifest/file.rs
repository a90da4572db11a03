use std::path::{Path, PathBuf};

use super::{Format, Manifest};
use crate::Result;

/// A manifest file on disk, with both raw content and the parsed manifest.
#[derive(Debug)]
pub struct HeaderFile {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl HeaderFile {
    /// Open and parse a manifest file; `.json` files are read as JSON.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest =
            Manifest::from_str_with_filename(&content, &filename, Format::from_path(&path))?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Where the rendered file goes by default: `header.name` next to the manifest.
    pub fn output_path(&self) -> PathBuf {
        let dir = self.path.parent().unwrap_or_else(|| Path::new(""));
        dir.join(&self.manifest.header.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_output_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cemit.toml");
        std::fs::write(&path, "[header]\nname = \"api.h\"\n").unwrap();

        let file = HeaderFile::open(&path).unwrap();
        assert_eq!(file.path(), path);
        assert!(file.content().contains("api.h"));
        assert_eq!(file.manifest().header.name, "api.h");
        assert_eq!(file.output_path(), dir.path().join("api.h"));
    }

    #[test]
    fn test_open_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api.json");
        std::fs::write(&path, r#"{ "header": { "name": "api.h" } }"#).unwrap();

        let file = HeaderFile::open(&path).unwrap();
        assert_eq!(file.manifest().header.name, "api.h");
    }

    #[test]
    fn test_open_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = HeaderFile::open(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(*err, crate::Error::Io { .. }));
    }
}
