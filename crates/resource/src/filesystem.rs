//! Directory-backed document container.
//!
//! A document lives in `<root>/<doc name>/`. Resource lists are stored there as JSON files
//! named after their slot, and resource files are copied into its `Res/` subdirectory.
//!
//! # Security
//!
//! All list paths are resolved inside the document directory; absolute paths and paths
//! that climb out of it with `..` are rejected.

use folio_traits::{ContainerError, ContainerStore};
use folio_types::{ResourceList, ResourceLoc};
use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Length and SHA-256 digest of a file, streamed rather than read whole.
struct FileFingerprint {
    len: u64,
    digest: [u8; 32],
}

impl FileFingerprint {
    fn of(path: &Path) -> Result<Self, ContainerError> {
        let mut file = fs::File::open(path)?;
        let mut hasher = Sha256::new();
        let len = io::copy(&mut file, &mut hasher)?;
        let mut digest = [0u8; 32];
        digest.copy_from_slice(&hasher.finalize());
        Ok(Self { len, digest })
    }

    /// Compares lengths first and only hashes `other` when they agree.
    fn matches(&self, other: &Path) -> Result<bool, ContainerError> {
        if fs::metadata(other)?.len() != self.len {
            return Ok(false);
        }
        Ok(Self::of(other)?.digest == self.digest)
    }
}

#[derive(Debug)]
pub struct FilesystemContainer {
    doc_dir: PathBuf,
    doc_name: String,
    /// Canonicalized document directory for containment checks
    canonical_base: Option<PathBuf>,
}

impl FilesystemContainer {
    /// Opens (creating if needed) the document directory `doc_name` under `root`.
    pub fn new<P: AsRef<Path>>(root: P, doc_name: &str) -> Result<Self, ContainerError> {
        let doc_dir = root.as_ref().join(doc_name);
        fs::create_dir_all(&doc_dir)?;
        let canonical_base = doc_dir.canonicalize().ok();
        Ok(Self {
            doc_dir,
            doc_name: doc_name.to_string(),
            canonical_base,
        })
    }

    pub fn doc_dir(&self) -> &Path {
        &self.doc_dir
    }

    /// Directory that copied resource files land in.
    pub fn res_dir(&self) -> PathBuf {
        self.doc_dir.join("Res")
    }

    /// Resolves `path` inside the document directory.
    ///
    /// Returns `None` if the path would escape it.
    fn resolve_path_safe(&self, path: &str) -> Option<PathBuf> {
        if Path::new(path).is_absolute() {
            return None;
        }

        let full_path = self.doc_dir.join(path);

        if let Ok(canonical) = full_path.canonicalize()
            && let Some(ref base) = self.canonical_base
        {
            return canonical.starts_with(base).then_some(canonical);
        }

        // Not on disk yet: reject any parent component outright.
        if Path::new(path)
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return None;
        }

        Some(full_path)
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, ContainerError> {
        self.resolve_path_safe(path)
            .ok_or_else(|| ContainerError::NotFound(format!("{} (path traversal blocked)", path)))
    }
}

impl ContainerStore for FilesystemContainer {
    fn exists(&self, path: &str) -> bool {
        self.resolve_path_safe(path)
            .map(|p| p.is_file())
            .unwrap_or(false)
    }

    fn read(&self, path: &str) -> Result<ResourceList, ContainerError> {
        let full_path = self.resolve(path)?;
        let text = fs::read_to_string(&full_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ContainerError::NotFound(path.to_string())
            } else {
                ContainerError::from(e)
            }
        })?;
        serde_json::from_str(&text).map_err(|e| ContainerError::Parse {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    fn write(&self, path: &str, list: &ResourceList) -> Result<(), ContainerError> {
        let full_path = self.resolve(path)?;
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(list)
            .map_err(|e| ContainerError::Io(format!("encoding '{}': {}", path, e)))?;
        fs::write(&full_path, json)?;
        log::debug!("Wrote resource list {}", full_path.display());
        Ok(())
    }

    fn add_resource_file(&self, local_path: &Path) -> Result<ResourceLoc, ContainerError> {
        let file_name = local_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ContainerError::NotFound(local_path.display().to_string()))?;
        if !local_path.is_file() {
            return Err(ContainerError::NotFound(local_path.display().to_string()));
        }

        let res_dir = self.res_dir();
        fs::create_dir_all(&res_dir)?;
        let source = FileFingerprint::of(local_path)?;

        // A different file already holding the name gets the next free `<n>_<name>`.
        let mut target_name = file_name.to_string();
        let mut attempt = 0u32;
        loop {
            let target = res_dir.join(&target_name);
            if !target.exists() {
                fs::copy(local_path, &target)?;
                log::debug!("Copied {} into {}", local_path.display(), target.display());
                break;
            }
            if target.canonicalize().ok() == local_path.canonicalize().ok()
                || source.matches(&target)?
            {
                break;
            }
            attempt += 1;
            log::debug!(
                "Resource name '{}' is taken by different content, trying a prefixed name",
                target_name
            );
            target_name = format!("{}_{}", attempt, file_name);
        }
        Ok(self.doc_root().cat("Res").cat(&target_name))
    }

    fn doc_root(&self) -> ResourceLoc {
        ResourceLoc::new(format!("/{}", self.doc_name))
    }

    fn name(&self) -> &'static str {
        "FilesystemContainer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::{FontDescriptor, ObjectId};
    use tempfile::tempdir;

    #[test]
    fn test_write_then_read_list() {
        let dir = tempdir().unwrap();
        let container = FilesystemContainer::new(dir.path(), "Doc_0").unwrap();
        let mut list = ResourceList::default();
        list.fonts.push(FontDescriptor {
            id: Some(ObjectId::new(1)),
            font_name: "Serif".to_string(),
            ..Default::default()
        });

        container.write("PublicRes.xml", &list).unwrap();
        assert!(container.exists("PublicRes.xml"));
        assert!(dir.path().join("Doc_0/PublicRes.xml").is_file());
        assert_eq!(container.read("PublicRes.xml").unwrap(), list);
    }

    #[test]
    fn test_read_missing_is_not_found() {
        let dir = tempdir().unwrap();
        let container = FilesystemContainer::new(dir.path(), "Doc_0").unwrap();
        assert!(!container.exists("DocumentRes.xml"));
        assert!(matches!(
            container.read("DocumentRes.xml"),
            Err(ContainerError::NotFound(_))
        ));
    }

    #[test]
    fn test_malformed_list_reports_path() {
        let dir = tempdir().unwrap();
        let container = FilesystemContainer::new(dir.path(), "Doc_0").unwrap();
        fs::write(container.doc_dir().join("PublicRes.xml"), "{ not json").unwrap();
        match container.read("PublicRes.xml") {
            Err(ContainerError::Parse { path, .. }) => assert_eq!(path, "PublicRes.xml"),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_add_resource_file_copies_into_res() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("logo.png");
        fs::write(&source, b"png bytes").unwrap();
        let container = FilesystemContainer::new(dir.path(), "Doc_2").unwrap();

        let loc = container.add_resource_file(&source).unwrap();
        assert_eq!(loc.as_str(), "/Doc_2/Res/logo.png");
        assert_eq!(
            fs::read(dir.path().join("Doc_2/Res/logo.png")).unwrap(),
            b"png bytes"
        );
        // Copying again is harmless.
        assert_eq!(container.add_resource_file(&source).unwrap(), loc);
    }

    #[test]
    fn test_same_name_different_content_is_kept_apart() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a")).unwrap();
        fs::create_dir_all(dir.path().join("b")).unwrap();
        let first = dir.path().join("a/logo.png");
        let second = dir.path().join("b/logo.png");
        fs::write(&first, b"AAAA").unwrap();
        fs::write(&second, b"BBBB").unwrap();
        let container = FilesystemContainer::new(dir.path(), "Doc_0").unwrap();

        let loc_a = container.add_resource_file(&first).unwrap();
        let loc_b = container.add_resource_file(&second).unwrap();
        assert_eq!(loc_a.as_str(), "/Doc_0/Res/logo.png");
        assert_eq!(loc_b.as_str(), "/Doc_0/Res/1_logo.png");

        let res = container.res_dir();
        assert_eq!(fs::read(res.join("logo.png")).unwrap(), b"AAAA");
        assert_eq!(fs::read(res.join("1_logo.png")).unwrap(), b"BBBB");

        // Both copies are found again by content, in either order.
        assert_eq!(container.add_resource_file(&second).unwrap(), loc_b);
        assert_eq!(container.add_resource_file(&first).unwrap(), loc_a);
    }

    #[test]
    fn test_same_content_under_new_path_reuses_copy() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a")).unwrap();
        fs::create_dir_all(dir.path().join("b")).unwrap();
        fs::write(dir.path().join("a/font.ttf"), b"glyphs").unwrap();
        fs::write(dir.path().join("b/font.ttf"), b"glyphs").unwrap();
        let container = FilesystemContainer::new(dir.path(), "Doc_0").unwrap();

        let loc_a = container
            .add_resource_file(&dir.path().join("a/font.ttf"))
            .unwrap();
        let loc_b = container
            .add_resource_file(&dir.path().join("b/font.ttf"))
            .unwrap();
        assert_eq!(loc_a, loc_b);
        assert_eq!(fs::read_dir(container.res_dir()).unwrap().count(), 1);
    }

    #[test]
    fn test_add_missing_resource_file() {
        let dir = tempdir().unwrap();
        let container = FilesystemContainer::new(dir.path(), "Doc_0").unwrap();
        let result = container.add_resource_file(&dir.path().join("nope.ttf"));
        assert!(matches!(result, Err(ContainerError::NotFound(_))));
    }

    #[test]
    fn test_blocks_path_traversal() {
        let dir = tempdir().unwrap();
        let container = FilesystemContainer::new(dir.path(), "Doc_0").unwrap();
        let list = ResourceList::default();

        assert!(container.write("../escape.json", &list).is_err());
        assert!(container.write("/etc/escape.json", &list).is_err());
        assert!(!container.exists("../../../etc/passwd"));
        assert!(!container.exists("./../../secret"));
        assert!(container.read("foo/../../bar").is_err());
    }

    #[test]
    fn test_allows_nested_paths() {
        let dir = tempdir().unwrap();
        let container = FilesystemContainer::new(dir.path(), "Doc_0").unwrap();
        container
            .write("Pages/Page_0/PageRes.xml", &ResourceList::default())
            .unwrap();
        assert!(container.exists("Pages/Page_0/PageRes.xml"));
    }
}
