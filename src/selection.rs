//! Bounded category selection.
//!
//! At most [`MAX_SELECTED`] categories can be selected at once. Selecting
//! another one while at the cap first deselects the entry with the oldest
//! `selection_timestamp`.
use crate::state::{HomeAction, SelectedCategory};

/// Default cap on simultaneously selected categories.
pub const MAX_SELECTED: usize = 8;

/// Outcome of clicking a category chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickDecision {
    /// The category was selected: toggle it off.
    Deselect(String),
    /// Select the category, first evicting `evict` when the cap is reached.
    Select { name: String, evict: Option<String> },
}

impl ClickDecision {
    /// Actions to dispatch, in order. An eviction always precedes the select
    /// so a store applying them one by one never holds more than the cap.
    pub fn into_actions(self) -> Vec<HomeAction> {
        match self {
            ClickDecision::Deselect(name) => vec![HomeAction::DeselectCategory(name)],
            ClickDecision::Select { name, evict } => evict
                .map(HomeAction::DeselectCategory)
                .into_iter()
                .chain(std::iter::once(HomeAction::SelectCategory(name)))
                .collect(),
        }
    }
}

/// Decides what a category click does given the current selections.
///
/// Holds no state between calls; every decision is computed from the
/// snapshot it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionPolicy {
    max_selected: usize,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            max_selected: MAX_SELECTED,
        }
    }
}

impl SelectionPolicy {
    /// Policy with a custom cap. A cap of 0 is treated as 1.
    pub fn new(max_selected: usize) -> Self {
        Self {
            max_selected: max_selected.max(1),
        }
    }

    /// Maximum number of simultaneously selected categories.
    pub fn max_selected(&self) -> usize {
        self.max_selected
    }

    /// Decide what clicking `clicked` does given the current `selections`.
    ///
    /// - `clicked` already selected → [`ClickDecision::Deselect`]
    /// - below the cap → [`ClickDecision::Select`] with no eviction
    /// - at (or above) the cap → [`ClickDecision::Select`] evicting the entry
    ///   with the smallest `selection_timestamp`; on ties the first one in
    ///   `selections` order
    ///
    /// Total over its inputs: an empty snapshot simply selects `clicked`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pocket_stories::state::SelectedCategory;
    /// use pocket_stories::{ClickDecision, SelectionPolicy};
    ///
    /// let selections = vec![
    ///     SelectedCategory::new("tech", 200),
    ///     SelectedCategory::new("food", 100),
    /// ];
    /// let decision = SelectionPolicy::new(2).decide_click(&selections, "travel");
    /// assert_eq!(
    ///     decision,
    ///     ClickDecision::Select {
    ///         name: "travel".to_string(),
    ///         evict: Some("food".to_string()),
    ///     }
    /// );
    /// ```
    pub fn decide_click(&self, selections: &[SelectedCategory], clicked: &str) -> ClickDecision {
        if selections.iter().any(|s| s.name == clicked) {
            return ClickDecision::Deselect(clicked.to_owned());
        }

        let evict = if selections.len() >= self.max_selected {
            oldest(selections).map(|s| s.name.clone())
        } else {
            None
        };

        ClickDecision::Select {
            name: clicked.to_owned(),
            evict,
        }
    }

    /// Shorthand for `decide_click(..).into_actions()`.
    pub fn actions_for_click(
        &self,
        selections: &[SelectedCategory],
        clicked: &str,
    ) -> Vec<HomeAction> {
        self.decide_click(selections, clicked).into_actions()
    }
}

/// Entry with the smallest timestamp. On ties the first one in slice order wins.
fn oldest(selections: &[SelectedCategory]) -> Option<&SelectedCategory> {
    selections.iter().min_by_key(|s| s.selection_timestamp)
}
