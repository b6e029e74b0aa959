use std::sync::Arc;

use super::types::{Category, Story};

/// Declarative state changes dispatched to a [`Store`](super::Store).
///
/// These are plain values; applying them is the store's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeAction {
    /// Mark a category as selected, stamped with the store's clock.
    SelectCategory(String),
    /// Remove a category from the selections.
    DeselectCategory(String),
    /// Stories reported as shown on screen, passed through unmodified.
    StoriesShown(Arc<Vec<Story>>),
    /// Replace the available categories catalog.
    CategoriesChanged(Vec<Category>),
}

impl HomeAction {
    /// Short action name for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            HomeAction::SelectCategory(_) => "select_category",
            HomeAction::DeselectCategory(_) => "deselect_category",
            HomeAction::StoriesShown(_) => "stories_shown",
            HomeAction::CategoriesChanged(_) => "categories_changed",
        }
    }
}
