//! Turns stories surface interactions into store actions and navigation.
use std::sync::Arc;

use crate::navigation::{BrowserDirection, BrowserOpener, Navigator, ScreenId};
use crate::selection::SelectionPolicy;
use crate::state::{Category, HomeAction, Store, Story};

/// Interactions coming from the stories surface.
pub trait StoriesController {
    /// A category chip was tapped.
    fn handle_category_click(&self, category: &Category);

    /// Stories became visible on screen.
    fn handle_stories_shown(&self, stories_shown: Arc<Vec<Story>>);

    /// A link outside the stories list was tapped (e.g. "Learn more").
    fn handle_external_link_click(&self, link: &str);
}

/// Default [`StoriesController`] over a store, a browser opener and a navigator.
///
/// External links always open in a new tab attributed to the home screen.
pub struct DefaultStoriesController<S, B, N> {
    browser: B,
    store: S,
    navigator: N,
    policy: SelectionPolicy,
}

impl<S, B, N> DefaultStoriesController<S, B, N>
where
    S: Store,
    B: BrowserOpener,
    N: Navigator,
{
    /// Controller using the default [`SelectionPolicy`].
    pub fn new(browser: B, store: S, navigator: N) -> Self {
        Self {
            browser,
            store,
            navigator,
            policy: SelectionPolicy::default(),
        }
    }

    /// Replace the default [`SelectionPolicy`] (cap of [`crate::MAX_SELECTED`]).
    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The store actions are dispatched to.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S, B, N> StoriesController for DefaultStoriesController<S, B, N>
where
    S: Store,
    B: BrowserOpener,
    N: Navigator,
{
    fn handle_category_click(&self, category: &Category) {
        // Read fresh on every click: a stale snapshot would evict the wrong entry.
        let state = self.store.state();
        let decision = self
            .policy
            .decide_click(&state.categories_selections, &category.name);
        tracing::debug!(
            category = %category.name,
            selected = state.categories_selections.len(),
            decision = ?decision,
            "Category clicked"
        );

        for action in decision.into_actions() {
            self.store.dispatch(action);
        }
    }

    fn handle_stories_shown(&self, stories_shown: Arc<Vec<Story>>) {
        tracing::trace!(count = stories_shown.len(), "Stories shown");
        self.store.dispatch(HomeAction::StoriesShown(stories_shown));
    }

    fn handle_external_link_click(&self, link: &str) {
        self.browser
            .open_to_browser_and_load(link, true, BrowserDirection::FromHome);

        if self.navigator.current_screen() == Some(ScreenId::SearchDialog) {
            tracing::debug!("Dismissing search dialog after external link click");
            self.navigator.pop_current_screen();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::NavStack;
    use crate::state::{HomeState, HomeStore, SelectedCategory};
    use std::cell::RefCell;

    #[derive(Default)]
    struct NoopBrowser {
        opened: RefCell<Vec<String>>,
    }

    impl BrowserOpener for NoopBrowser {
        fn open_to_browser_and_load(&self, url: &str, _new_tab: bool, _from: BrowserDirection) {
            self.opened.borrow_mut().push(url.to_owned());
        }
    }

    #[test]
    fn test_click_twice_restores_selection_names() {
        let initial = HomeState::with_selections(vec![SelectedCategory::new("cat1", 1)]);
        let store = HomeStore::with_clock(initial.clone(), || 50);
        let nav = NavStack::default();
        let controller = DefaultStoriesController::new(NoopBrowser::default(), &store, &nav);
        let category = Category::new("cat2", Vec::new());

        controller.handle_category_click(&category);
        assert_eq!(store.state().selected_names(), vec!["cat1", "cat2"]);

        controller.handle_category_click(&category);
        assert_eq!(store.state(), initial);
    }

    #[test]
    fn test_custom_policy_cap_applies() {
        let initial = HomeState::with_selections(vec![
            SelectedCategory::new("a", 2),
            SelectedCategory::new("b", 1),
        ]);
        let store = HomeStore::with_clock(initial, || 10);
        let nav = NavStack::default();
        let controller = DefaultStoriesController::new(NoopBrowser::default(), &store, &nav)
            .with_policy(SelectionPolicy::new(2));

        controller.handle_category_click(&Category::new("c", Vec::new()));
        assert_eq!(controller.store().state().selected_names(), vec!["a", "c"]);
    }

    #[test]
    fn test_link_click_with_unavailable_navigation_only_opens() {
        let store = HomeStore::new(HomeState::default());
        let nav = NavStack::default();
        let browser = NoopBrowser::default();
        let controller = DefaultStoriesController::new(&browser, &store, &nav);

        controller.handle_external_link_click("https://example.com/");
        assert_eq!(*browser.opened.borrow(), vec!["https://example.com/".to_string()]);
        assert!(nav.screens().is_empty());
    }
}
