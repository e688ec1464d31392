//! Destinations for generated pack files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Persists `(pack-relative path, content)` pairs.
pub trait ArtifactSink {
    fn write(&mut self, path: &Path, content: &str) -> io::Result<()>;
}

impl<S: ArtifactSink + ?Sized> ArtifactSink for &mut S {
    fn write(&mut self, path: &Path, content: &str) -> io::Result<()> {
        (**self).write(path, content)
    }
}

// ---------------------------------------------------------------------------
// Directory sink
// ---------------------------------------------------------------------------

/// Writes files below a root directory, creating parents as needed.
#[derive(Debug, Clone)]
pub struct DirSink {
    root: PathBuf,
}

impl DirSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ArtifactSink for DirSink {
    fn write(&mut self, path: &Path, content: &str) -> io::Result<()> {
        let full = self.root.join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(full, content)
    }
}

// ---------------------------------------------------------------------------
// Memory sink
// ---------------------------------------------------------------------------

/// Records writes in order. Later writes to the same path replace the
/// content but keep the original position.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: Vec<(PathBuf, String)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        let path = path.as_ref();
        self.files
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, c)| c.as_str())
    }

    /// Paths in first-write order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(|(p, _)| p.as_path())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl ArtifactSink for MemorySink {
    fn write(&mut self, path: &Path, content: &str) -> io::Result<()> {
        match self.files.iter_mut().find(|(p, _)| p == path) {
            Some((_, existing)) => *existing = content.to_string(),
            None => self.files.push((path.to_path_buf(), content.to_string())),
        }
        Ok(())
    }
}
