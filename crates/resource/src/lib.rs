//! Resource registry for folio documents.
//!
//! - [`ResourceManager`]: deduplicates fonts, color spaces, draw parameters, images and
//!   vector shapes by content and assigns document-unique ids
//! - [`IdAllocator`]: the shared id sequence
//! - [`FilesystemContainer`]: a [`ContainerStore`] backed by a directory tree
//!
//! ## Re-exports
//!
//! For convenience, we also re-export the in-memory container from folio-traits:
//! - [`InMemoryContainer`]

mod error;
mod filesystem;
mod ids;
mod key;
mod manager;

pub use error::ResourceError;
pub use filesystem::FilesystemContainer;
pub use ids::IdAllocator;
pub use key::ContentKey;
pub use manager::{ExistingFont, Font, ResourceManager};

pub use folio_traits::{ContainerStore, InMemoryContainer, ResourceSlot};
