//! Flattening of catalog records into display rows.

use crate::catalog::RawSpace;
use crate::config::NetworkConfig;
use crate::criteria::{FormOption, Visibility};
use serde::Serialize;

/// Column headers in display order.
pub const COLUMNS: [&str; 11] = [
    "Name",
    "Author",
    "Library",
    "SDK",
    "Tags",
    "Hardware",
    "Visibility",
    "Likes",
    "Runs",
    "Last Modified",
    "URL",
];

/// One result table row. Serializes with the column headers as keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpaceRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "Library")]
    pub library: String,
    #[serde(rename = "SDK")]
    pub sdk: String,
    #[serde(rename = "Tags")]
    pub tags: String,
    #[serde(rename = "Hardware")]
    pub hardware: String,
    #[serde(rename = "Visibility")]
    pub visibility: String,
    #[serde(rename = "Likes")]
    pub likes: u64,
    #[serde(rename = "Runs")]
    pub runs: u64,
    #[serde(rename = "Last Modified")]
    pub last_modified: String,
    #[serde(rename = "URL")]
    pub url: String,
}

impl SpaceRow {
    /// Cell values in [`COLUMNS`] order.
    pub fn cells(&self) -> [String; 11] {
        [
            self.name.clone(),
            self.author.clone(),
            self.library.clone(),
            self.sdk.clone(),
            self.tags.clone(),
            self.hardware.clone(),
            self.visibility.clone(),
            self.likes.to_string(),
            self.runs.to_string(),
            self.last_modified.clone(),
            self.url.clone(),
        ]
    }
}

/// Page URL of a space.
pub fn space_url(name: &str) -> String {
    format!("{}/{}", NetworkConfig::SPACE_PAGE_BASE, name)
}

/// Map a catalog record to a row. Absent fields become `""` or `0`.
pub fn map_row(space: &RawSpace) -> SpaceRow {
    let name = space.id.clone().unwrap_or_default();
    let url = space_url(&name);

    SpaceRow {
        author: space.author.clone().unwrap_or_default(),
        library: space.space_type.clone().unwrap_or_default(),
        sdk: space.sdk.clone().unwrap_or_default(),
        tags: space
            .tags
            .as_ref()
            .map(|tags| tags.join(", "))
            .unwrap_or_default(),
        hardware: space.hardware_label().unwrap_or_default().to_string(),
        visibility: Visibility::from_private(space.private.unwrap_or(false))
            .label()
            .to_string(),
        likes: space.likes.unwrap_or(0),
        runs: space.runs.unwrap_or(0),
        last_modified: space.last_modified.clone().unwrap_or_default(),
        name,
        url,
    }
}
