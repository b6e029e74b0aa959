//! Unidirectional store for the home stories state.
//!
//! Actions go in through [`Store::dispatch`], the pure [`reduce`] function
//! produces the next immutable [`HomeState`], and observers are notified with
//! the new snapshot. Everything runs on the caller's thread: a dispatch is
//! fully applied before it returns, so the next [`Store::state`] call sees it.
//!
//! The one exception is an observer dispatching while it is being notified.
//! That action is queued and applied once the current notification pass has
//! reached every observer, so all observers see states in the same order and
//! the last state each one sees is the store's current state.
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;

use super::action::HomeAction;
use super::types::{Category, HomeState, SelectedCategory, Story};

// ============================================================================
// Store Contract
// ============================================================================

/// Read/dispatch contract consumed by the stories controller.
pub trait Store {
    /// Current state snapshot.
    fn state(&self) -> HomeState;

    /// Apply `action`. Actions are applied in the order they are dispatched.
    fn dispatch(&self, action: HomeAction);
}

impl<T: Store + ?Sized> Store for &T {
    fn state(&self) -> HomeState {
        (**self).state()
    }

    fn dispatch(&self, action: HomeAction) {
        (**self).dispatch(action)
    }
}

// ============================================================================
// Reducer
// ============================================================================

/// Compute the state that results from applying `action` to `state`.
///
/// `now_ms` stamps new selections. Selecting an already-selected name leaves
/// the state untouched so names stay unique. The reducer never evicts: the
/// selection cap is the policy's responsibility.
pub fn reduce(state: &HomeState, action: &HomeAction, now_ms: i64) -> HomeState {
    match action {
        HomeAction::SelectCategory(name) => {
            if state.is_selected(name) {
                return state.clone();
            }
            let mut selections = Vec::with_capacity(state.categories_selections.len() + 1);
            selections.extend(state.categories_selections.iter().cloned());
            selections.push(SelectedCategory::new(name, now_ms));
            HomeState {
                categories_selections: Arc::new(selections),
                ..state.clone()
            }
        }
        HomeAction::DeselectCategory(name) => {
            if !state.is_selected(name) {
                return state.clone();
            }
            let selections = state
                .categories_selections
                .iter()
                .filter(|s| &s.name != name)
                .cloned()
                .collect();
            HomeState {
                categories_selections: Arc::new(selections),
                ..state.clone()
            }
        }
        HomeAction::StoriesShown(shown) => HomeState {
            categories: Arc::new(count_impressions(state, shown)),
            stories_shown: Arc::clone(shown),
            ..state.clone()
        },
        HomeAction::CategoriesChanged(categories) => {
            let selections = state
                .categories_selections
                .iter()
                .filter(|s| categories.iter().any(|c| c.name == s.name))
                .cloned()
                .collect();
            HomeState {
                categories: Arc::new(categories.clone()),
                categories_selections: Arc::new(selections),
                stories_shown: Arc::clone(&state.stories_shown),
            }
        }
    }
}

/// Catalog with `times_shown` bumped for every story present in `shown`.
fn count_impressions(state: &HomeState, shown: &[Story]) -> Vec<Category> {
    state
        .categories
        .iter()
        .map(|category| {
            let mut category = category.clone();
            for story in &mut category.stories {
                if shown.iter().any(|s| s.url == story.url) {
                    story.times_shown = story.times_shown.saturating_add(1);
                }
            }
            category
        })
        .collect()
}

// ============================================================================
// HomeStore
// ============================================================================

/// Handle returned by [`HomeStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Rc<dyn Fn(&HomeState)>;

/// Single-threaded in-memory [`Store`].
pub struct HomeStore {
    state: RefCell<HomeState>,
    observers: RefCell<Vec<(SubscriptionId, Observer)>>,
    next_subscription: Cell<u64>,
    clock: Box<dyn Fn() -> i64>,
    /// Actions dispatched by observers during notification.
    pending: RefCell<VecDeque<HomeAction>>,
    dispatching: Cell<bool>,
}

impl HomeStore {
    /// Store stamping selections with the wall clock (epoch milliseconds).
    pub fn new(initial: HomeState) -> Self {
        Self::with_clock(initial, || chrono::Utc::now().timestamp_millis())
    }

    /// Store stamping selections with `clock`.
    pub fn with_clock(initial: HomeState, clock: impl Fn() -> i64 + 'static) -> Self {
        Self {
            state: RefCell::new(initial),
            observers: RefCell::new(Vec::new()),
            next_subscription: Cell::new(0),
            clock: Box::new(clock),
            pending: RefCell::new(VecDeque::new()),
            dispatching: Cell::new(false),
        }
    }

    /// Register an observer called with every new state after a dispatch.
    pub fn subscribe(&self, observer: impl Fn(&HomeState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);
        self.observers.borrow_mut().push((id, Rc::new(observer)));
        id
    }

    /// Remove an observer. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.borrow_mut();
        let before = observers.len();
        observers.retain(|(sub, _)| *sub != id);
        observers.len() != before
    }
}

impl Store for HomeStore {
    fn state(&self) -> HomeState {
        self.state.borrow().clone()
    }

    fn dispatch(&self, action: HomeAction) {
        self.pending.borrow_mut().push_back(action);
        if self.dispatching.replace(true) {
            tracing::trace!("Queued action dispatched during notification");
            return;
        }

        loop {
            let Some(action) = self.pending.borrow_mut().pop_front() else {
                break;
            };
            self.apply(action);
        }
        self.dispatching.set(false);
    }
}

impl HomeStore {
    /// Reduce one action and notify every observer of the result.
    fn apply(&self, action: HomeAction) {
        let now_ms = (self.clock)();
        let next = reduce(&self.state.borrow(), &action, now_ms);
        tracing::trace!(
            action = action.kind(),
            selections = next.categories_selections.len(),
            "Applied action"
        );
        *self.state.borrow_mut() = next.clone();

        // Observers may dispatch or (un)subscribe, so no borrow is held while they run.
        let observers: Vec<Observer> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        for observer in observers {
            observer(&next);
        }
    }
}
