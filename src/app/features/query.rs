use crate::app::{
    action::{Action, UpdateResult},
    state::AppState,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::QueryInput(key) => {
            apply_key(state, *key);
            UpdateResult::Handled
        }
        // With an empty query Backspace belongs to the chip row
        Action::Backspace if !state.query.is_empty() => {
            apply_key(state, KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
            UpdateResult::Handled
        }
        Action::ShowSuggestions => {
            state.recompute_candidates("");
            state.suggestions.visible = true;
            UpdateResult::Handled
        }
        Action::Cancel => {
            if state.suggestions.visible || state.chip_focus.is_armed() {
                state.suggestions.visible = false;
            } else {
                state.should_quit = true;
            }
            UpdateResult::Handled
        }
        _ => UpdateResult::NotHandled,
    }
}

fn apply_key(state: &mut AppState, key: KeyEvent) {
    if state.query.handle_key(key) {
        let query = state.query.text();
        state.recompute_candidates(&query);
        state.suggestions.visible = true;
    }
}
