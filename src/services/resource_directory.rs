use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::{AppError, ResourceKind};
use crate::ports::ResourceSink;

/// Writes generated resources into a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectoryResourceSink {
    root: PathBuf,
}

impl DirectoryResourceSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ResourceSink for DirectoryResourceSink {
    fn store(&self, kind: ResourceKind, content: &str) -> Result<PathBuf, AppError> {
        fs::create_dir_all(&self.root)
            .map_err(|source| AppError::Export { path: self.root.clone(), source })?;
        let path = self.root.join(kind.file_name());
        fs::write(&path, content.as_bytes())
            .map_err(|source| AppError::Export { path: path.clone(), source })?;
        info!(resource = kind.slug(), path = %path.display(), bytes = content.len(), "stored resource");
        Ok(path)
    }
}
