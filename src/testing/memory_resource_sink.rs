use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::domain::{AppError, ResourceKind};
use crate::ports::ResourceSink;

/// In-memory resource sink for testing.
#[derive(Default)]
pub struct MemoryResourceSink {
    pub stored: RefCell<BTreeMap<ResourceKind, String>>,
    pub should_fail: bool,
}

impl MemoryResourceSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { should_fail: true, ..Self::default() }
    }

    pub fn get(&self, kind: ResourceKind) -> Option<String> {
        self.stored.borrow().get(&kind).cloned()
    }
}

impl ResourceSink for MemoryResourceSink {
    fn store(&self, kind: ResourceKind, content: &str) -> Result<PathBuf, AppError> {
        if self.should_fail {
            return Err(AppError::Export {
                path: PathBuf::from("memory").join(kind.file_name()),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "mock sink refused write"),
            });
        }
        self.stored.borrow_mut().insert(kind, content.to_string());
        Ok(PathBuf::from("memory").join(kind.file_name()))
    }
}
