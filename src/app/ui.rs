use crate::app::state::{AppState, Phase};
use crate::components::chip_row::{chip_rows, ChipRow};
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::suggestion_list::{rows_area, SuggestionList};
use crate::theme::glyphs;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::{Block, BorderType, Borders},
    Frame,
};

pub const TITLE: &str = "Dynamic Search";

/// Columns taken by the prompt in front of the query field.
const PROMPT_WIDTH: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppLayout {
    pub header: Rect,
    pub search_box: Rect,
    pub chips: Rect,
    pub query: Rect,
    /// Zero-sized while the dropdown is hidden.
    pub dropdown: Rect,
    pub dropdown_rows: Rect,
    pub footer: Rect,
}

#[must_use]
pub fn get_layout(area: Rect, state: &AppState) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let body = Rect {
        x: main[1].x.saturating_add(1),
        width: main[1].width.saturating_sub(2),
        ..main[1]
    };

    let inner_width = body.width.saturating_sub(2);
    let rows = chip_rows(state.selection.items(), inner_width);
    let box_height = (rows + 1 + 2).min(body.height);
    let search_box = Rect {
        height: box_height,
        ..body
    };

    let inner = Block::default().borders(Borders::ALL).inner(search_box);
    let chips = Rect {
        height: rows.min(inner.height),
        ..inner
    };
    let query = Rect {
        y: chips.bottom(),
        height: inner.height.saturating_sub(chips.height).min(1),
        ..inner
    };

    let dropdown = if state.suggestions.visible {
        let wanted = u16::try_from(state.candidates.len().max(1))
            .unwrap_or(u16::MAX)
            .min(state.dropdown_height)
            .saturating_add(2);
        Rect {
            y: search_box.bottom(),
            height: wanted.min(body.bottom().saturating_sub(search_box.bottom())),
            ..body
        }
    } else {
        Rect::default()
    };

    AppLayout {
        header: main[0],
        search_box,
        chips,
        query,
        dropdown,
        dropdown_rows: rows_area(dropdown),
        footer: main[2],
    }
}

pub fn draw(f: &mut Frame, state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let layout = get_layout(f.area(), state);
    let theme = &state.theme;

    f.render_widget(
        Header {
            title: TITLE,
            catalog_size: state.catalog.len(),
            theme,
        },
        layout.header,
    );

    let border_style = if state.phase() == Phase::Idle {
        theme.border
    } else {
        theme.border_focus
    };
    let search_block = Block::default()
        .title(Span::styled(" To ", theme.dimmed))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);
    f.render_widget(search_block, layout.search_box);

    f.render_widget(
        ChipRow {
            items: state.selection.items(),
            armed: state.chip_focus.armed_index(),
            blink_on: (state.frame_count / 2) % 2 == 0,
            theme,
        },
        layout.chips,
    );

    if layout.query.height > 0 {
        f.render_widget(
            Span::styled(glyphs::PROMPT, theme.query_prompt),
            layout.query,
        );
        let field = Rect {
            x: layout.query.x.saturating_add(PROMPT_WIDTH),
            width: layout.query.width.saturating_sub(PROMPT_WIDTH),
            ..layout.query
        };
        f.render_widget(&state.query, field);
    }

    f.render_widget(Footer { state, theme }, layout.footer);

    // Dropdown last so it overlays the body
    if layout.dropdown.height > 0 {
        let suggestions = &mut state.suggestions;
        suggestions.list_state.select(Some(suggestions.active_index));
        f.render_stateful_widget(
            SuggestionList {
                items: &state.candidates,
                theme: &state.theme,
            },
            layout.dropdown,
            &mut suggestions.list_state,
        );
    }
}
