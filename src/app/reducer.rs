use super::{
    action::{Action, UpdateResult},
    features,
    state::{AppState, ChipFocus},
};

type Feature = fn(&mut AppState, &Action) -> UpdateResult;

const FEATURES: [Feature; 3] = [
    features::query::update,
    features::navigation::update,
    features::selection::update,
];

pub fn update(state: &mut AppState, action: Action) {
    let handled = FEATURES
        .iter()
        .any(|feature| feature(state, &action) == UpdateResult::Handled);

    if !handled {
        match action {
            Action::Quit => state.should_quit = true,
            Action::Tick => state.frame_count = state.frame_count.wrapping_add(1),
            _ => {}
        }
    }

    // Only a repeated Backspace may act on an armed chip
    if !matches!(action, Action::Backspace | Action::Tick | Action::Resize(..)) {
        state.chip_focus = ChipFocus::None;
    }
}
