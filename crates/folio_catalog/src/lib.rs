//! Folio project catalog
//!
//! The catalog is an external, read-only data source: it is parsed once and
//! handed out as [`ProjectCard`]s. Each card tracks its preview image so a
//! failed load can fall back to a placeholder.

mod catalog;
mod error;
mod image;
mod project;

pub use catalog::{Catalog, ProjectCard};
pub use error::{CatalogError, Result};
pub use image::{ImageState, PreviewImage, DEFAULT_PLACEHOLDER_URL};
pub use project::{Project, Tag};
