use crate::app::{
    action::{Action, UpdateResult},
    state::AppState,
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::SelectNext => {
            move_active(state, 1);
            UpdateResult::Handled
        }
        Action::SelectPrev => {
            move_active(state, -1);
            UpdateResult::Handled
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Moves the highlighted row; a hidden dropdown ignores navigation.
fn move_active(state: &mut AppState, delta: isize) {
    if !state.suggestions.visible {
        return;
    }
    state.suggestions.active_index = calculate_new_index(
        state.suggestions.active_index,
        delta,
        state.candidates.len(),
    );
}

/// Clamps at both ends of the list instead of wrapping.
fn calculate_new_index(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    current.saturating_add_signed(delta).min(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Item;

    fn visible_state(n: u64) -> AppState<'static> {
        let catalog = (1..=n)
            .map(|i| Item::new(i, &format!("User {i}"), "u@x"))
            .collect();
        let mut state = AppState::with_catalog(catalog);
        state.suggestions.visible = true;
        state
    }

    #[test]
    fn test_calculate_new_index_clamps() {
        assert_eq!(calculate_new_index(2, 1, 3), 2);
        assert_eq!(calculate_new_index(0, -1, 3), 0);
        assert_eq!(calculate_new_index(1, 1, 3), 2);
        assert_eq!(calculate_new_index(0, 1, 0), 0);
    }

    #[test]
    fn test_arrow_down_clamps_at_last_row() {
        let mut state = visible_state(3);
        state.suggestions.active_index = 2;

        update(&mut state, &Action::SelectNext);
        assert_eq!(state.suggestions.active_index, 2);
    }

    #[test]
    fn test_arrow_up_clamps_at_first_row() {
        let mut state = visible_state(3);
        update(&mut state, &Action::SelectNext);
        update(&mut state, &Action::SelectPrev);
        update(&mut state, &Action::SelectPrev);
        assert_eq!(state.suggestions.active_index, 0);
    }

    #[test]
    fn test_hidden_dropdown_ignores_navigation() {
        let mut state = visible_state(3);
        state.suggestions.visible = false;
        update(&mut state, &Action::SelectNext);
        assert_eq!(state.suggestions.active_index, 0);
    }
}
