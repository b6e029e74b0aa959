//! Selection and link handling for the recommended stories topic picker.
//!
//! - [`selection`]: bounded category selection with oldest-first eviction
//! - [`controller`]: maps surface interactions to store actions and navigation
//! - [`state`]: state model, actions and an in-memory store
//! - [`navigation`]: browser and navigator collaborators

pub mod config;
pub mod controller;
pub mod navigation;
pub mod selection;
pub mod state;
pub mod util;

pub use controller::{DefaultStoriesController, StoriesController};
pub use selection::{ClickDecision, SelectionPolicy, MAX_SELECTED};
