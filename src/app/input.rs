use crate::app::{action::Action, state::AppState, ui};
use crate::components::chip_row::layout_chips;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Position, Rect, Size};

/// Index of the candidate under a click in the dropdown, if any.
pub fn resolve_clicked_row(app_state: &AppState<'_>, rows: Rect, pos: Position) -> Option<usize> {
    if !rows.contains(pos) {
        return None;
    }
    let idx = app_state.suggestions.list_state.offset() + usize::from(pos.y - rows.y);
    (idx < app_state.candidates.len()).then_some(idx)
}

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Release => None,
        Event::Key(key) => Some(map_key(key, app_state)),
        Event::Mouse(mouse) => map_mouse(mouse, app_state, terminal_size),
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        _ => None,
    }
}

fn map_key(key: KeyEvent, app_state: &AppState<'_>) -> Action {
    if let Some(action) = app_state.keymap.get_action(key) {
        return action;
    }
    if key.code == KeyCode::Backspace && key.modifiers == KeyModifiers::NONE {
        return Action::Backspace;
    }
    Action::QueryInput(key)
}

fn map_mouse(mouse: MouseEvent, app_state: &AppState<'_>, terminal_size: Size) -> Option<Action> {
    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
    let layout = ui::get_layout(area, app_state);
    let pos = Position::new(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::ScrollDown if layout.dropdown.contains(pos) => Some(Action::SelectNext),
        MouseEventKind::ScrollUp if layout.dropdown.contains(pos) => Some(Action::SelectPrev),
        MouseEventKind::Down(MouseButton::Left) => {
            // The dropdown is drawn over everything else
            if layout.dropdown.contains(pos) {
                return resolve_clicked_row(app_state, layout.dropdown_rows, pos)
                    .map(Action::CommitIndex);
            }

            let items = app_state.selection.items();
            if let Some(slot) = layout_chips(items, layout.chips)
                .into_iter()
                .find(|slot| slot.remove_area.contains(pos))
            {
                return Some(Action::RemoveChip(items[slot.index].id));
            }

            layout
                .search_box
                .contains(pos)
                .then_some(Action::ShowSuggestions)
        }
        _ => None,
    }
}
