//! Document pipeline orchestration.
//!
//! This module wires the layout, resource and assembly crates together:
//!
//! - [`DocumentBuilder`]: Fluent builder that opens a document in a container
//! - [`Document`]: Collects flow content and fixed pages, then lays out and assembles them
//! - [`DocumentConfig`]: Document index, default page style and starting id
//!
//! # Example
//!
//! ```ignore
//! use folio::{ContentBox, DocumentBuilder};
//!
//! let mut doc = DocumentBuilder::new()
//!     .with_output_dir("out")
//!     .build()?;
//!
//! doc.add(ContentBox::paragraph("Hello"));
//! let rendered = doc.finish()?;
//! ```

mod builder;
pub mod config;
mod document;

pub use builder::DocumentBuilder;
pub use config::DocumentConfig;
pub use document::{Document, RenderedDocument};
