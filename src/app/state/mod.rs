use super::config::Config;
use super::keymap::{KeyConfig, KeyMap};
use crate::domain::filter::filter_candidates;
use crate::domain::models::Item;
use crate::domain::selection::Selection;
use crate::theme::Theme;
use ratatui::widgets::ListState;
use std::sync::Arc;

pub mod chips;
pub mod input;

// Re-exports
pub use chips::ChipFocus;
pub use input::QueryField;

/// Interaction phase, derived from the rest of the state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,      // Dropdown hidden, nothing armed
    Typing,    // Dropdown visible
    ChipArmed, // Trailing chip waits for a second Backspace
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SuggestionState {
    pub visible: bool,
    pub active_index: usize,
    /// Render-side scroll state; `selected` mirrors `active_index` at draw time.
    pub list_state: ListState,
}

#[derive(Debug, Clone)]
pub struct AppState<'a> {
    pub should_quit: bool,

    // --- Data ---
    pub catalog: Arc<[Item]>,
    pub selection: Selection,

    // --- Derived ---
    pub candidates: Vec<Item>,
    /// Query the candidate list was last derived from. Opening the dropdown
    /// by click derives it from the empty query.
    pub candidate_query: String,

    // --- Interaction ---
    pub query: QueryField<'a>,
    pub suggestions: SuggestionState,
    pub chip_focus: ChipFocus,

    // --- Animation ---
    pub frame_count: u64,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub theme: Theme,
    pub dropdown_height: u16,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(config: &Config, catalog: Vec<Item>) -> Self {
        let theme = Theme::from_palette_type(config.theme);
        Self {
            keymap: Arc::new(KeyMap::from_config(&config.keymap)),
            query: QueryField::new(theme.query_text, theme.placeholder),
            theme,
            dropdown_height: config.dropdown_height,
            ..Self::with_catalog(catalog)
        }
    }

    #[must_use]
    pub fn with_catalog(catalog: Vec<Item>) -> Self {
        let mut state = Self {
            catalog: catalog.into(),
            ..Default::default()
        };
        state.recompute_candidates("");
        state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.chip_focus.is_armed() {
            Phase::ChipArmed
        } else if self.suggestions.visible {
            Phase::Typing
        } else {
            Phase::Idle
        }
    }

    /// The single place the candidate list is derived. Resets the active row.
    pub fn recompute_candidates(&mut self, query: &str) {
        self.candidates = filter_candidates(query, &self.selection, &self.catalog);
        self.candidate_query = query.to_string();
        self.suggestions.active_index = 0;
        self.suggestions.list_state = ListState::default();
    }

    /// Re-derives the candidates after a selection change, keeping the query
    /// they were derived from.
    pub fn refresh_candidates(&mut self) {
        let query = std::mem::take(&mut self.candidate_query);
        self.recompute_candidates(&query);
    }

    #[must_use]
    pub fn active_candidate(&self) -> Option<&Item> {
        self.candidates.get(self.suggestions.active_index)
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        let theme = Theme::default();
        Self {
            should_quit: false,
            catalog: Arc::from(Vec::new()),
            selection: Selection::default(),
            candidates: Vec::new(),
            candidate_query: String::new(),
            query: QueryField::new(theme.query_text, theme.placeholder),
            suggestions: SuggestionState::default(),
            chip_focus: ChipFocus::None,
            frame_count: 0,
            keymap: Arc::new(KeyMap::from_config(&KeyConfig::default())),
            theme,
            dropdown_height: Config::default().dropdown_height,
        }
    }
}
