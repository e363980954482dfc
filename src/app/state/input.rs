use crossterm::event::KeyEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use std::ops::{Deref, DerefMut};
use tui_textarea::{CursorMove, TextArea};

pub const PLACEHOLDER: &str = "Search users...";

/// Single-line query field backed by a `TextArea`.
#[derive(Default)]
pub struct QueryField<'a>(pub TextArea<'a>);

impl QueryField<'_> {
    #[must_use]
    pub fn new(text_style: Style, placeholder_style: Style) -> Self {
        let mut area = TextArea::default();
        area.set_cursor_line_style(Style::default());
        area.set_style(text_style);
        area.set_placeholder_text(PLACEHOLDER);
        area.set_placeholder_style(placeholder_style);
        Self(area)
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.0.lines().concat()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.lines().iter().all(String::is_empty)
    }

    /// Feeds a key to the text area. Returns `true` when the text changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let modified = self.0.input(key);
        if self.0.lines().len() > 1 {
            // Newline shortcuts (Ctrl+M, Ctrl+J) must not split the query
            let joined = self.text();
            self.replace(&joined);
        }
        modified
    }

    pub fn clear(&mut self) {
        self.replace("");
    }

    fn replace(&mut self, text: &str) {
        self.0.select_all();
        self.0.cut();
        self.0.insert_str(text);
        self.0.move_cursor(CursorMove::End);
    }
}

impl Clone for QueryField<'_> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl std::fmt::Debug for QueryField<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryField")
            .field("text", &self.text())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl PartialEq for QueryField<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.lines() == other.0.lines() && self.0.cursor() == other.0.cursor()
    }
}

impl<'a> Deref for QueryField<'a> {
    type Target = TextArea<'a>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for QueryField<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Widget for &QueryField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self.0, area, buf);
    }
}
