mod action;
mod store;
mod types;

pub use action::HomeAction;
pub use store::{reduce, HomeStore, Store, SubscriptionId};
pub use types::{Category, HomeState, SelectedCategory, Story};
