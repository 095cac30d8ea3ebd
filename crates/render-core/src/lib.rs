//! Page assembly for folio documents.
//!
//! This crate turns paginated [`folio_layout::VirtualPage`]s into [`SerializablePage`]s:
//! - [`PageAssembler`] walks each page's layers and dispatches every box
//! - [`ProcessorRegistry`] maps box kinds to [`BoxProcessor`]s
//! - The built-in processors in [`processors`] register shared resources through
//!   [`folio_resource::ResourceManager`]

mod assembler;
mod error;
pub mod processors;
mod registry;
mod traits;
mod types;

pub use assembler::{PageAssembler, PageHook};
pub use error::RenderError;
pub use registry::ProcessorRegistry;
pub use traits::{AssemblyContext, BoxProcessor};
pub use types::{
    BlockObject, CompositeObject, ImageObject, PageLayer, PageObject, PathObject,
    SerializablePage, TextObject,
};
