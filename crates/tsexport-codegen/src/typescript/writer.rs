//! Destinations for rendered interface files.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Receives one rendered file per exported entity.
///
/// `target` is relative to the output root, e.g. `shop/Order.ts`.
pub trait OutputWriter {
    fn write(&mut self, target: &Path, contents: &str) -> io::Result<()>;
}

/// Writes files below a root directory, creating namespace directories.
#[derive(Debug, Clone)]
pub struct FileWriter {
    root: PathBuf,
}

impl FileWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl OutputWriter for FileWriter {
    fn write(&mut self, target: &Path, contents: &str) -> io::Result<()> {
        let path = self.root.join(target);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)
    }
}

/// Keeps rendered files in memory, keyed by target path.
#[derive(Debug, Default, Clone)]
pub struct MemoryWriter {
    files: BTreeMap<PathBuf, String>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents written to `target`, if any.
    pub fn get(&self, target: impl AsRef<Path>) -> Option<&str> {
        self.files.get(target.as_ref()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl OutputWriter for MemoryWriter {
    fn write(&mut self, target: &Path, contents: &str) -> io::Result<()> {
        self.files.insert(target.to_path_buf(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_writer_creates_namespace_dir() {
        let dir = tempdir().unwrap();
        let mut writer = FileWriter::new(dir.path());

        writer
            .write(Path::new("shop/Order.ts"), "export interface Order {\n}\n")
            .unwrap();

        let written = fs::read_to_string(dir.path().join("shop/Order.ts")).unwrap();
        assert_eq!(written, "export interface Order {\n}\n");
    }

    #[test]
    fn test_file_writer_overwrites() {
        let dir = tempdir().unwrap();
        let mut writer = FileWriter::new(dir.path());

        writer.write(Path::new("a/A.ts"), "old").unwrap();
        writer.write(Path::new("a/A.ts"), "new").unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("a/A.ts")).unwrap(), "new");
    }

    #[test]
    fn test_memory_writer() {
        let mut writer = MemoryWriter::new();
        writer.write(Path::new("a/A.ts"), "content").unwrap();

        assert_eq!(writer.len(), 1);
        assert_eq!(writer.get("a/A.ts"), Some("content"));
        assert_eq!(writer.get("a/B.ts"), None);
    }
}
