use std::collections::HashMap;

use crate::{
    category::Category,
    content,
    explanation::Explanation,
    lab::{Difficulty, Lab, LabCategory},
};

/// The registry of labs, categories and explanation content.
///
/// Built once at process start and never mutated; every accessor is pure and
/// O(n) over the fixed list. "Not found" surfaces as `None` or an empty list.
#[derive(Debug, Clone)]
pub struct Catalog {
    labs: Vec<Lab>,
    categories: Vec<Category>,
    explanations: HashMap<String, Explanation>,
}

impl Catalog {
    /// The registry that ships with the SDK.
    pub fn builtin() -> Self {
        Self {
            labs: builtin_labs(),
            categories: builtin_categories(),
            explanations: content::builtin_explanations(),
        }
    }

    /// A registry with caller-supplied contents. Used by hosts that extend
    /// the catalog and by tests.
    pub fn new(
        labs: Vec<Lab>,
        categories: Vec<Category>,
        explanations: HashMap<String, Explanation>,
    ) -> Self {
        Self {
            labs,
            categories,
            explanations,
        }
    }

    /// Every lab, implemented or not, in display order.
    pub fn all_labs(&self) -> &[Lab] {
        &self.labs
    }

    /// The labs that are actually implemented.
    pub fn available_labs(&self) -> Vec<&Lab> {
        self.labs.iter().filter(|lab| lab.available).collect()
    }

    /// Looks a lab up by id.
    pub fn lab(&self, id: &str) -> Option<&Lab> {
        self.labs.iter().find(|lab| lab.id == id)
    }

    /// The labs in one catalog section.
    pub fn labs_in(&self, category: LabCategory) -> Vec<&Lab> {
        self.labs
            .iter()
            .filter(|lab| lab.category == category)
            .collect()
    }

    /// Every category, in display order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Looks a category up by id.
    pub fn category(&self, id: LabCategory) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// How many labs a section holds.
    pub fn lab_count(&self, category: LabCategory) -> usize {
        self.labs_in(category).len()
    }

    /// How many implemented labs a section holds.
    pub fn available_lab_count(&self, category: LabCategory) -> usize {
        self.labs_in(category)
            .iter()
            .filter(|lab| lab.available)
            .count()
    }

    /// Case-insensitive match over title, description and tags. An empty or
    /// blank query yields every lab.
    pub fn search(&self, query: &str) -> Vec<&Lab> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.labs.iter().collect();
        }
        self.labs
            .iter()
            .filter(|lab| {
                lab.title.to_lowercase().contains(&needle)
                    || lab.description.to_lowercase().contains(&needle)
                    || lab
                        .tags
                        .iter()
                        .any(|tag| tag.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// The explanation content for a lab, if it ships with one.
    pub fn explanation(&self, lab_id: &str) -> Option<&Explanation> {
        self.explanations.get(lab_id)
    }
}

fn lab(
    id: &str,
    title: &str,
    description: &str,
    category: LabCategory,
    icon: &str,
    difficulty: Difficulty,
    tags: &[&str],
    available: bool,
) -> Lab {
    Lab {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        category,
        icon: icon.into(),
        difficulty,
        tags: tags.iter().map(|tag| (*tag).into()).collect(),
        available,
    }
}

fn category(id: LabCategory, title: &str, description: &str, icon: &str) -> Category {
    Category {
        id,
        title: title.into(),
        description: description.into(),
        icon: icon.into(),
    }
}

fn builtin_categories() -> Vec<Category> {
    vec![
        category(
            LabCategory::State,
            "State Management",
            "Context API, Redux Toolkit, Zustand",
            "git-branch",
        ),
        category(
            LabCategory::Expo,
            "Expo APIs",
            "Camera, Audio, Haptics, Sensors",
            "smartphone",
        ),
        category(
            LabCategory::Storage,
            "Storage",
            "AsyncStorage, SecureStore, MMKV",
            "hard-drive",
        ),
        category(
            LabCategory::Ui,
            "UI & Styling",
            "NativeWind, Animations, Gestures",
            "layout",
        ),
    ]
}

fn builtin_labs() -> Vec<Lab> {
    vec![
        lab(
            "context",
            "Context API",
            "React's built-in state management for prop drilling",
            LabCategory::State,
            "share-2",
            Difficulty::Beginner,
            &["React", "Built-in", "Simple"],
            true,
        ),
        lab(
            "redux",
            "Redux Toolkit",
            "Predictable state container with DevTools support",
            LabCategory::State,
            "layers",
            Difficulty::Intermediate,
            &["Redux", "Global", "DevTools"],
            true,
        ),
        lab(
            "zustand",
            "Zustand",
            "Lightweight state management with hooks",
            LabCategory::State,
            "box",
            Difficulty::Beginner,
            &["Hooks", "Simple", "Lightweight"],
            true,
        ),
        lab(
            "camera",
            "Camera",
            "Photo and video capture with expo-camera",
            LabCategory::Expo,
            "camera",
            Difficulty::Intermediate,
            &["Media", "Device", "Permissions"],
            false,
        ),
        lab(
            "audio",
            "Audio",
            "Record and play audio with expo-av",
            LabCategory::Expo,
            "mic",
            Difficulty::Intermediate,
            &["Media", "Recording", "Playback"],
            false,
        ),
        lab(
            "haptics",
            "Haptics",
            "Vibration and tactile feedback",
            LabCategory::Expo,
            "activity",
            Difficulty::Beginner,
            &["Device", "Feedback", "UX"],
            false,
        ),
        lab(
            "async-storage",
            "AsyncStorage",
            "Persistent key-value storage",
            LabCategory::Storage,
            "database",
            Difficulty::Beginner,
            &["Persistence", "Key-Value", "Simple"],
            true,
        ),
        lab(
            "secure-store",
            "SecureStore",
            "Encrypted storage for sensitive data",
            LabCategory::Storage,
            "lock",
            Difficulty::Beginner,
            &["Encryption", "Secure", "Credentials"],
            true,
        ),
        lab(
            "nativewind",
            "NativeWind",
            "Tailwind CSS for React Native",
            LabCategory::Ui,
            "feather",
            Difficulty::Beginner,
            &["Styling", "Tailwind", "CSS"],
            true,
        ),
        lab(
            "animations",
            "Reanimated",
            "Smooth animations with react-native-reanimated",
            LabCategory::Ui,
            "play",
            Difficulty::Intermediate,
            &["Animation", "Gestures", "Performance"],
            false,
        ),
    ]
}
