use crate::domain::models::Item;
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, StatefulWidget, Widget},
};

/// Dropdown of candidates. Rendering through `ListState` keeps the
/// highlighted row scrolled into view.
pub struct SuggestionList<'a> {
    pub items: &'a [Item],
    pub theme: &'a Theme,
}

fn block(theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_focus)
}

/// Area the rows are drawn in, used for mouse hit-testing.
#[must_use]
pub fn rows_area(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

impl StatefulWidget for SuggestionList<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        Clear.render(area, buf);

        let title = match self.items.len() {
            1 => " 1 match ".to_string(),
            n => format!(" {n} matches "),
        };
        let block = block(self.theme).title(Span::styled(title, self.theme.dimmed));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.items.is_empty() {
            let empty = Line::from(Span::styled("  No matching users.", self.theme.dimmed));
            buf.set_line(inner.x, inner.y, &empty, inner.width);
            return;
        }

        let name_width = self
            .items
            .iter()
            .map(|item| Span::raw(item.label()).width())
            .max()
            .unwrap_or(0);

        let rows: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!(" {:<2} ", item.initials()), self.theme.avatar),
                    Span::raw(" "),
                    Span::raw(format!("{:<name_width$}", item.label())),
                    Span::raw("  "),
                    Span::styled(item.email.clone(), self.theme.suggestion_email),
                ]))
                .style(self.theme.suggestion)
            })
            .collect();

        let list = List::new(rows)
            .highlight_style(self.theme.suggestion_active)
            .highlight_symbol(glyphs::ACTIVE_ROW);

        StatefulWidget::render(list, inner, buf, state);
    }
}
