//! Export port for generated resources.

use std::path::PathBuf;

use crate::domain::{AppError, ResourceKind};

/// Port for persisting generated resources under their fixed file names.
pub trait ResourceSink {
    /// Store the content for a resource, returning where it was written.
    fn store(&self, kind: ResourceKind, content: &str) -> Result<PathBuf, AppError>;
}
