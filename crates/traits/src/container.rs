//! ContainerStore trait for abstracting the document container.
//!
//! The layout pipeline never touches the container format itself. It reads and writes
//! resource lists and copies resource files through this trait, so the same resource
//! manager works against an in-memory container in tests and a directory tree on disk.

use folio_types::{ResourceList, ResourceLoc};
use std::collections::HashMap;
use std::fmt::Debug;
use std::path::Path;
use std::sync::RwLock;
use thiserror::Error;

/// Error type for container operations.
#[derive(Error, Debug, Clone)]
pub enum ContainerError {
    #[error("Container entry not found: {0}")]
    NotFound(String),

    #[error("Failed to parse '{path}': {message}")]
    Parse { path: String, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ContainerError {
    fn from(err: std::io::Error) -> Self {
        ContainerError::Io(err.to_string())
    }
}

/// The two named resource list slots of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceSlot {
    /// Resources reusable outside the current page tree (fonts, color spaces).
    Public,
    /// Resources scoped to the document's pages (images, draw params, vector shapes).
    Document,
}

impl ResourceSlot {
    pub fn file_name(self) -> &'static str {
        match self {
            ResourceSlot::Public => "PublicRes.xml",
            ResourceSlot::Document => "DocumentRes.xml",
        }
    }
}

/// A trait for the storage that holds a document's resource lists and resource files.
///
/// # Implementations
///
/// - `InMemoryContainer`: keeps everything in memory (always available)
/// - `FilesystemContainer` (folio-resource): a directory tree on disk
pub trait ContainerStore: Send + Sync + Debug {
    /// Check whether an entry exists at `path` (relative to the document directory).
    fn exists(&self, path: &str) -> bool;

    /// Read and parse the resource list stored at `path`.
    fn read(&self, path: &str) -> Result<ResourceList, ContainerError>;

    /// Store a resource list at `path`, replacing any previous content.
    fn write(&self, path: &str, list: &ResourceList) -> Result<(), ContainerError>;

    /// Copy a local file into the document's resource directory.
    ///
    /// Returns the absolute container location of the copy.
    fn add_resource_file(&self, local_path: &Path) -> Result<ResourceLoc, ContainerError>;

    /// Absolute container location of the document directory, e.g. `/Doc_0`.
    fn doc_root(&self) -> ResourceLoc;

    /// Returns a human-readable name for this container (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// An in-memory container.
///
/// Resource files are not read; `add_resource_file` only records the mapping from the
/// local path to its container location. Each distinct local path is treated as distinct
/// content.
#[derive(Debug)]
pub struct InMemoryContainer {
    doc_root: ResourceLoc,
    lists: RwLock<HashMap<String, ResourceList>>,
    files: RwLock<HashMap<String, ResourceLoc>>,
}

impl Default for InMemoryContainer {
    fn default() -> Self {
        Self::new("/Doc_0")
    }
}

impl InMemoryContainer {
    pub fn new(doc_root: impl Into<ResourceLoc>) -> Self {
        Self {
            doc_root: doc_root.into(),
            lists: RwLock::new(HashMap::new()),
            files: RwLock::new(HashMap::new()),
        }
    }

    /// Pre-populate a resource list, as if the document already existed.
    pub fn insert(&self, path: impl Into<String>, list: ResourceList) -> Result<(), ContainerError> {
        let path = path.into();
        let mut lists = self
            .lists
            .write()
            .map_err(|_| ContainerError::Io(format!("container lock poisoned writing '{}'", path)))?;
        lists.insert(path, list);
        Ok(())
    }

    /// Container locations of every copied resource file, sorted.
    pub fn resource_files(&self) -> Vec<ResourceLoc> {
        let mut files: Vec<ResourceLoc> = self
            .files
            .read()
            .map(|f| f.values().cloned().collect())
            .unwrap_or_default();
        files.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        files
    }

    /// Get the number of stored resource lists.
    ///
    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.lists.read().map(|l| l.len()).unwrap_or(0)
    }

    /// Returns `true` if the lock is poisoned (safe default).
    pub fn is_empty(&self) -> bool {
        self.lists.read().map(|l| l.is_empty()).unwrap_or(true)
    }
}

impl ContainerStore for InMemoryContainer {
    fn exists(&self, path: &str) -> bool {
        self.lists
            .read()
            .map(|l| l.contains_key(path))
            .unwrap_or(false)
    }

    fn read(&self, path: &str) -> Result<ResourceList, ContainerError> {
        let lists = self
            .lists
            .read()
            .map_err(|_| ContainerError::Io(format!("container lock poisoned reading '{}'", path)))?;
        lists
            .get(path)
            .cloned()
            .ok_or_else(|| ContainerError::NotFound(path.to_string()))
    }

    fn write(&self, path: &str, list: &ResourceList) -> Result<(), ContainerError> {
        self.insert(path, list.clone())
    }

    fn add_resource_file(&self, local_path: &Path) -> Result<ResourceLoc, ContainerError> {
        let key = local_path.to_string_lossy().to_string();
        let file_name = local_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ContainerError::NotFound(key.clone()))?;

        let mut files = self
            .files
            .write()
            .map_err(|_| ContainerError::Io(format!("container lock poisoned copying '{}'", key)))?;
        if let Some(existing) = files.get(&key) {
            return Ok(existing.clone());
        }
        // Different local files sharing a name get the next free `<n>_<name>`.
        let res = self.doc_root.cat("Res");
        let mut loc = res.cat(file_name);
        let mut attempt = 0u32;
        while files.values().any(|taken| *taken == loc) {
            attempt += 1;
            loc = res.cat(&format!("{}_{}", attempt, file_name));
        }
        log::debug!("Recorded resource file '{}' as '{}'", key, loc);
        files.insert(key, loc.clone());
        Ok(loc)
    }

    fn doc_root(&self) -> ResourceLoc {
        self.doc_root.clone()
    }

    fn name(&self) -> &'static str {
        "InMemoryContainer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::FontDescriptor;

    #[test]
    fn test_in_memory_container_write_and_read() {
        let container = InMemoryContainer::default();
        let mut list = ResourceList::default();
        list.fonts.push(FontDescriptor {
            font_name: "Serif".to_string(),
            ..Default::default()
        });
        container.write("PublicRes.xml", &list).unwrap();

        assert!(container.exists("PublicRes.xml"));
        let loaded = container.read("PublicRes.xml").unwrap();
        assert_eq!(loaded, list);
        assert_eq!(container.len(), 1);
    }

    #[test]
    fn test_in_memory_container_not_found() {
        let container = InMemoryContainer::default();
        assert!(container.is_empty());
        let result = container.read("DocumentRes.xml");
        assert!(matches!(result, Err(ContainerError::NotFound(_))));
        assert!(!container.exists("DocumentRes.xml"));
    }

    #[test]
    fn test_add_resource_file_locations() {
        let container = InMemoryContainer::new("/Doc_1");
        let loc = container
            .add_resource_file(Path::new("/tmp/images/logo.png"))
            .unwrap();
        assert_eq!(loc.as_str(), "/Doc_1/Res/logo.png");

        // Copying the same local file twice yields the same location.
        let again = container
            .add_resource_file(Path::new("/tmp/images/logo.png"))
            .unwrap();
        assert_eq!(loc, again);
        assert_eq!(container.resource_files().len(), 1);
    }

    #[test]
    fn test_same_file_name_from_other_directory_gets_own_location() {
        let container = InMemoryContainer::default();
        let a = container.add_resource_file(Path::new("/a/logo.png")).unwrap();
        let b = container.add_resource_file(Path::new("/b/logo.png")).unwrap();
        let c = container.add_resource_file(Path::new("/c/logo.png")).unwrap();
        assert_eq!(a.as_str(), "/Doc_0/Res/logo.png");
        assert_eq!(b.as_str(), "/Doc_0/Res/1_logo.png");
        assert_eq!(c.as_str(), "/Doc_0/Res/2_logo.png");
        assert_eq!(
            container.add_resource_file(Path::new("/b/logo.png")).unwrap(),
            b
        );
        assert_eq!(container.resource_files().len(), 3);
    }

    #[test]
    fn test_add_resource_file_without_file_name() {
        let container = InMemoryContainer::default();
        let result = container.add_resource_file(Path::new("/"));
        assert!(matches!(result, Err(ContainerError::NotFound(_))));
    }

    #[test]
    fn test_slot_file_names() {
        assert_eq!(ResourceSlot::Public.file_name(), "PublicRes.xml");
        assert_eq!(ResourceSlot::Document.file_name(), "DocumentRes.xml");
    }

    #[test]
    fn test_container_error_display() {
        let err = ContainerError::Parse {
            path: "PublicRes.xml".to_string(),
            message: "unexpected token".to_string(),
        };
        assert!(err.to_string().contains("PublicRes.xml"));
        assert!(err.to_string().contains("unexpected token"));

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ContainerError = io_err.into();
        assert!(matches!(err, ContainerError::Io(_)));
    }
}
