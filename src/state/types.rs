use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ============================================================================
// Catalog Types
// ============================================================================

/// A recommended story belonging to one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub title: String,
    pub url: String,
    pub category: String,
    /// Number of times this story was reported as shown on screen.
    #[serde(default)]
    pub times_shown: u64,
}

impl Story {
    pub fn new(title: &str, url: &str, category: &str) -> Self {
        Self {
            title: title.to_owned(),
            url: url.to_owned(),
            category: category.to_owned(),
            times_shown: 0,
        }
    }
}

/// A topic available for filtering the stories feed.
///
/// Identified by `name`; carries no selection state itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub stories: Vec<Story>,
}

impl Category {
    pub fn new(name: &str, stories: Vec<Story>) -> Self {
        Self {
            name: name.to_owned(),
            stories,
        }
    }
}

/// Records that `name` is selected and when (epoch milliseconds).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedCategory {
    pub name: String,
    pub selection_timestamp: i64,
}

impl SelectedCategory {
    pub fn new(name: &str, selection_timestamp: i64) -> Self {
        Self {
            name: name.to_owned(),
            selection_timestamp,
        }
    }
}

// ============================================================================
// Home State
// ============================================================================

/// Immutable snapshot of the home screen stories state.
///
/// PERF: collections are behind `Arc` so a snapshot clone is a handful of
/// reference count increments, not a deep copy. Reducers replace whole
/// collections instead of mutating them in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeState {
    pub categories: Arc<Vec<Category>>,
    pub categories_selections: Arc<Vec<SelectedCategory>>,
    /// The last batch of stories reported as shown, kept verbatim.
    pub stories_shown: Arc<Vec<Story>>,
}

impl HomeState {
    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            categories: Arc::new(categories),
            ..Self::default()
        }
    }

    pub fn with_selections(selections: Vec<SelectedCategory>) -> Self {
        Self {
            categories_selections: Arc::new(selections),
            ..Self::default()
        }
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.categories_selections.iter().any(|s| s.name == name)
    }

    /// Names of the selected categories, in the order they were stored.
    pub fn selected_names(&self) -> Vec<&str> {
        self.categories_selections
            .iter()
            .map(|s| s.name.as_str())
            .collect()
    }
}
