use std::fmt;

use serde::{Deserialize, Serialize};

/// The catalog section a lab belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabCategory {
    /// State management patterns.
    State,
    /// Device API demos.
    Expo,
    /// Persistence patterns.
    Storage,
    /// UI and styling patterns.
    Ui,
}

impl fmt::Display for LabCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabCategory::State => write!(f, "state"),
            LabCategory::Expo => write!(f, "expo"),
            LabCategory::Storage => write!(f, "storage"),
            LabCategory::Ui => write!(f, "ui"),
        }
    }
}

/// How demanding a lab is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[allow(missing_docs)]
    Beginner,
    #[allow(missing_docs)]
    Intermediate,
    #[allow(missing_docs)]
    Advanced,
}

/// One entry in the demo catalog: a screen showcasing a single library
/// pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lab {
    /// Stable identifier, used in routes and lookups.
    pub id: String,
    /// Display title.
    pub title: String,
    /// One-line description shown on the lab card.
    pub description: String,
    /// The catalog section the lab belongs to.
    pub category: LabCategory,
    /// Icon name for the lab card.
    pub icon: String,
    /// How demanding the lab is.
    pub difficulty: Difficulty,
    /// Free-form search tags.
    pub tags: Vec<String>,
    /// Whether the lab is implemented.
    pub available: bool,
}
