//! Project entries

use serde::{Deserialize, Serialize};

/// A labelled tag on a project card
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Tag {
    pub name: String,
    /// Color family used to tint the tag chip (e.g. `yellow`, `indigo`)
    #[serde(default = "default_tone")]
    pub tone: String,
}

fn default_tone() -> String {
    "gray".to_string()
}

/// One project shown in the grid
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub link_text: String,
    #[serde(default = "default_link_url")]
    pub link_url: String,
    /// Preview image URL
    pub image: String,
}

fn default_link_url() -> String {
    "#".to_string()
}

impl Project {
    /// Alt text for the preview image
    pub fn image_alt(&self) -> String {
        format!("Preview of {}", self.title)
    }
}
