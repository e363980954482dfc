use crate::domain::models::ItemId;
use crossterm::event::KeyEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateResult {
    Handled,
    NotHandled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Query Field ---
    QueryInput(KeyEvent), // Text editing key forwarded to the query field
    Backspace,            // Edits the query, or arms/removes the last chip
    ShowSuggestions,      // Click on the query field
    Cancel,               // Esc: close the dropdown, or quit when already closed

    // --- Suggestion Dropdown ---
    SelectNext,         // ArrowDown
    SelectPrev,         // ArrowUp
    CommitActive,       // Enter
    CommitIndex(usize), // Click on a suggestion row

    // --- Chips ---
    RemoveChip(ItemId), // Click on a chip's remove glyph
}

impl Action {
    /// Parses the action names accepted in custom key bindings.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "quit" => Some(Action::Quit),
            "cancel" => Some(Action::Cancel),
            "select_next" => Some(Action::SelectNext),
            "select_prev" => Some(Action::SelectPrev),
            "commit" => Some(Action::CommitActive),
            "show_suggestions" => Some(Action::ShowSuggestions),
            _ => None,
        }
    }
}
