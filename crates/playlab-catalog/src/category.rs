use serde::{Deserialize, Serialize};

use crate::lab::LabCategory;

/// A catalog section grouping related labs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// The section identifier labs reference.
    pub id: LabCategory,
    /// Display title.
    pub title: String,
    /// One-line description shown on the category card.
    pub description: String,
    /// Icon name for the category card.
    pub icon: String,
}
