use crate::app::{
    action::{Action, UpdateResult},
    state::{AppState, ChipFocus},
};
use crate::domain::models::Item;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::CommitActive => {
            if state.suggestions.visible {
                if let Some(item) = state.active_candidate().cloned() {
                    commit(state, item);
                }
            }
            UpdateResult::Handled
        }
        Action::CommitIndex(idx) => {
            if state.suggestions.visible {
                if let Some(item) = state.candidates.get(*idx).cloned() {
                    commit(state, item);
                }
            }
            UpdateResult::Handled
        }
        Action::RemoveChip(id) => {
            if let Some(item) = state.selection.remove(*id) {
                tracing::debug!(id = %item.id, name = item.label(), "chip removed");
                state.refresh_candidates();
            }
            UpdateResult::Handled
        }
        // Reached only with an empty query
        Action::Backspace => {
            match state.chip_focus {
                ChipFocus::Armed(idx) => {
                    if let Some(item) = state.selection.remove_at(idx) {
                        tracing::debug!(id = %item.id, name = item.label(), "armed chip removed");
                    }
                    state.chip_focus = ChipFocus::None;
                    state.refresh_candidates();
                }
                ChipFocus::None => {
                    if let Some(last) = state.selection.last_index() {
                        state.chip_focus = ChipFocus::Armed(last);
                    }
                }
            }
            UpdateResult::Handled
        }
        _ => UpdateResult::NotHandled,
    }
}

fn commit(state: &mut AppState, item: Item) {
    let id = item.id;
    if state.selection.add(item) {
        tracing::debug!(%id, selected = state.selection.len(), "candidate committed");
    }
    state.query.clear();
    state.suggestions.visible = false;
    state.recompute_candidates("");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ItemId;

    fn state() -> AppState<'static> {
        let mut state = AppState::with_catalog(vec![
            Item::new(1, "Alice", "a@x"),
            Item::new(2, "Bob", "b@x"),
        ]);
        state.suggestions.visible = true;
        state
    }

    #[test]
    fn test_commit_active() {
        let mut state = state();
        state.suggestions.active_index = 1;

        update(&mut state, &Action::CommitActive);
        assert_eq!(state.selection.items()[0].id, ItemId(2));
        assert!(!state.suggestions.visible);
        assert_eq!(state.candidates.len(), 1);
        assert_eq!(state.suggestions.active_index, 0);
    }

    #[test]
    fn test_commit_with_no_candidates_is_noop() {
        let mut state = AppState::with_catalog(Vec::new());
        state.suggestions.visible = true;

        update(&mut state, &Action::CommitActive);
        assert!(state.selection.is_empty());
        assert!(state.suggestions.visible);
    }

    #[test]
    fn test_commit_index_out_of_range_is_noop() {
        let mut state = state();
        update(&mut state, &Action::CommitIndex(9));
        assert!(state.selection.is_empty());
        assert!(state.suggestions.visible);
    }

    #[test]
    fn test_remove_chip_by_id() {
        let mut state = state();
        update(&mut state, &Action::CommitIndex(0));
        assert_eq!(state.candidates.len(), 1);

        update(&mut state, &Action::RemoveChip(ItemId(1)));
        assert!(state.selection.is_empty());
        assert_eq!(state.candidates.len(), 2);

        // Removing an absent chip changes nothing
        update(&mut state, &Action::RemoveChip(ItemId(1)));
        assert!(state.selection.is_empty());
    }

    #[test]
    fn test_backspace_arms_then_removes() {
        let mut state = state();
        update(&mut state, &Action::CommitIndex(0));
        state.suggestions.visible = true;
        update(&mut state, &Action::CommitIndex(0));
        assert_eq!(state.selection.len(), 2);

        update(&mut state, &Action::Backspace);
        assert_eq!(state.chip_focus, ChipFocus::Armed(1));
        assert_eq!(state.selection.len(), 2);

        update(&mut state, &Action::Backspace);
        assert_eq!(state.chip_focus, ChipFocus::None);
        assert_eq!(state.selection.len(), 1);
        assert_eq!(state.candidates.len(), 1);
        assert_eq!(state.candidates[0].id, ItemId(2));
    }

    #[test]
    fn test_backspace_without_chips_does_not_arm() {
        let mut state = state();
        update(&mut state, &Action::Backspace);
        assert_eq!(state.chip_focus, ChipFocus::None);
    }
}
