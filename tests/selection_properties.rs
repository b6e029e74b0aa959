//! Property tests for the bounded selection policy.
//!
//! Snapshots are generated with unique names and arbitrary timestamps; the
//! in-memory store is used to apply decisions where a follow-up state matters.

use proptest::collection::hash_map;
use proptest::prelude::*;

use pocket_stories::state::{reduce, HomeAction, HomeState, SelectedCategory};
use pocket_stories::{ClickDecision, SelectionPolicy, MAX_SELECTED};

/// Unique-name selection snapshots of `size` entries.
fn snapshot(size: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = Vec<SelectedCategory>> {
    hash_map("[a-z]{1,8}", 0i64..1_000_000, size).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(name, ts)| SelectedCategory::new(&name, ts))
            .collect()
    })
}

/// A name that cannot collide with generated ones (those are lowercase only).
const NEW_NAME: &str = "New-Category";

fn apply(state: HomeState, actions: &[HomeAction], now_ms: i64) -> HomeState {
    actions
        .iter()
        .fold(state, |state, action| reduce(&state, action, now_ms))
}

proptest! {
    #[test]
    fn below_cap_selects_only(selections in snapshot(0..=MAX_SELECTED - 1)) {
        let actions = SelectionPolicy::default().actions_for_click(&selections, NEW_NAME);
        prop_assert_eq!(actions, vec![HomeAction::SelectCategory(NEW_NAME.to_string())]);
    }

    #[test]
    fn at_cap_evicts_minimum_timestamp_first(selections in snapshot(MAX_SELECTED..=MAX_SELECTED)) {
        let min_ts = selections.iter().map(|s| s.selection_timestamp).min().unwrap();

        let decision = SelectionPolicy::default().decide_click(&selections, NEW_NAME);
        let evicted = match &decision {
            ClickDecision::Select { evict: Some(name), .. } => name.clone(),
            other => return Err(TestCaseError::fail(format!("expected eviction, got {:?}", other))),
        };
        let evicted_entry = selections.iter().find(|s| s.name == evicted).unwrap();
        prop_assert_eq!(evicted_entry.selection_timestamp, min_ts);

        prop_assert_eq!(
            decision.into_actions(),
            vec![
                HomeAction::DeselectCategory(evicted),
                HomeAction::SelectCategory(NEW_NAME.to_string()),
            ]
        );
    }

    #[test]
    fn clicking_selected_name_only_deselects(
        selections in snapshot(1..=MAX_SELECTED),
        pick in any::<prop::sample::Index>(),
    ) {
        let name = selections[pick.index(selections.len())].name.clone();
        let actions = SelectionPolicy::default().actions_for_click(&selections, &name);
        prop_assert_eq!(actions, vec![HomeAction::DeselectCategory(name)]);
    }

    #[test]
    fn applying_decisions_never_exceeds_cap(
        selections in snapshot(0..=MAX_SELECTED),
        clicks in prop::collection::vec("[a-z]{1,3}", 1..40),
    ) {
        let policy = SelectionPolicy::default();
        let mut state = HomeState::with_selections(selections);
        for (i, clicked) in clicks.iter().enumerate() {
            let actions = policy.actions_for_click(&state.categories_selections, clicked);
            for action in &actions {
                state = reduce(&state, action, 1_000_000 + i as i64);
                prop_assert!(state.categories_selections.len() <= MAX_SELECTED);
            }
        }
    }

    #[test]
    fn select_then_click_again_restores_names(selections in snapshot(0..=MAX_SELECTED - 1)) {
        let policy = SelectionPolicy::default();
        let original = HomeState::with_selections(selections);

        let selected = apply(
            original.clone(),
            &policy.actions_for_click(&original.categories_selections, NEW_NAME),
            2_000_000,
        );
        prop_assert!(selected.is_selected(NEW_NAME));

        let restored = apply(
            selected.clone(),
            &policy.actions_for_click(&selected.categories_selections, NEW_NAME),
            2_000_001,
        );
        prop_assert_eq!(restored.selected_names(), original.selected_names());
    }
}
