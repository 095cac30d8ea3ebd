//! Newtype wrappers for object identifiers and container locations
//!
//! These types keep numeric object ids and container paths from being mixed up with
//! plain integers and strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A document-wide object identifier. Resources, pages and page objects all draw from the
/// same id space.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(u32);

impl ObjectId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for ObjectId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A location inside the document container, e.g. `Res/font_1.ttf` or `/Doc_0/Res/a.png`.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceLoc(Arc<str>);

impl ResourceLoc {
    pub fn new(loc: impl Into<Arc<str>>) -> Self {
        Self(loc.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Absolute container paths start at the container root.
    pub fn is_root_path(&self) -> bool {
        self.0.starts_with('/')
    }

    /// Joins a child segment onto this location.
    pub fn cat(&self, child: &str) -> ResourceLoc {
        let child = child.trim_start_matches('/');
        if self.0.is_empty() {
            return ResourceLoc::new(child);
        }
        let parent = self.0.trim_end_matches('/');
        ResourceLoc::new(format!("{}/{}", parent, child))
    }

    /// The last path segment.
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// Compares two locations ignoring a leading `./` and trailing slashes.
    pub fn same_as(&self, other: &str) -> bool {
        fn norm(s: &str) -> &str {
            s.trim_start_matches("./").trim_end_matches('/')
        }
        norm(&self.0) == norm(other)
    }
}

impl From<String> for ResourceLoc {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for ResourceLoc {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for ResourceLoc {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceLoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
