//! Catalog loading
//!
//! The catalog is a TOML document with one `[[projects]]` table per card:
//!
//! ```toml
//! [[projects]]
//! title = "Task Manager (SaaS)"
//! description = "Real-time project and task tracking."
//! link_text = "Live demo"
//! image = "https://placehold.co/600x400/34d399/ffffff?text=SaaS"
//! tags = [{ name = "React", tone = "red" }]
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{CatalogError, Result};
use crate::image::PreviewImage;
use crate::project::Project;

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    projects: Vec<Project>,
}

/// Read-only list of projects
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// Parse a catalog from TOML source
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(src)?;
        for (index, project) in file.projects.iter().enumerate() {
            if project.title.trim().is_empty() {
                return Err(CatalogError::InvalidProject {
                    index,
                    reason: "empty title".to_string(),
                });
            }
            if project.image.trim().is_empty() {
                return Err(CatalogError::InvalidProject {
                    index,
                    reason: format!("'{}' has no preview image", project.title),
                });
            }
        }
        Ok(Self::new(file.projects))
    }

    /// Read and parse a catalog file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&src)?;
        tracing::debug!(
            "Catalog::load - {} projects from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Fresh cards for a page session, one per project, images pending
    pub fn cards(&self) -> Vec<ProjectCard> {
        self.projects.iter().cloned().map(ProjectCard::new).collect()
    }
}

/// A project as shown on the page, with its image load state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectCard {
    pub project: Project,
    pub image: PreviewImage,
}

impl ProjectCard {
    pub fn new(project: Project) -> Self {
        Self {
            image: PreviewImage::new(project.image.clone()),
            project,
        }
    }
}
