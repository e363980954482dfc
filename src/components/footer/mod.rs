mod groups;
mod types;

use crate::app::state::{AppState, Phase};
use crate::theme::Theme;
pub use types::{FooterGroup, FooterItem};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Footer<'a, 'b> {
    pub state: &'a AppState<'b>,
    pub theme: &'a Theme,
}

impl Widget for Footer<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        let phase_span = match state.phase() {
            Phase::Idle => Span::styled("  IDLE  ", theme.status_idle),
            Phase::Typing => Span::styled("  TYPING  ", theme.status_typing),
            Phase::ChipArmed => Span::styled("  CHIP ARMED  ", theme.status_armed),
        };

        let mut spans = vec![
            phase_span,
            Span::raw(" "),
            Span::styled(
                format!(" {} selected ", state.selection.len()),
                theme.footer_val,
            ),
            Span::raw("  "),
        ];

        let available_width = usize::from(area.width.saturating_sub(4));
        let mut current_width = spans.iter().map(Span::width).sum::<usize>();

        for group in groups::get_groups(state) {
            let Some(first) = group.items.first() else {
                continue;
            };
            let first_width = Span::raw(first.key).width() + Span::raw(first.desc).width() + 4;
            if current_width + first_width > available_width {
                break;
            }

            if area.width > 100 {
                let label = Span::styled(format!("{}: ", group.name), theme.dimmed);
                if current_width + label.width() + first_width < available_width {
                    current_width += label.width();
                    spans.push(label);
                }
            }

            for item in group.items {
                let key = Span::raw(format!(" {} ", item.key));
                let desc = Span::raw(format!(" {} ", item.desc));
                let item_width = key.width() + desc.width();
                if current_width + item_width + 1 > available_width {
                    break;
                }

                let (key_style, val_style) = if item.highlighted {
                    (
                        theme.status_armed,
                        theme.status_armed.add_modifier(Modifier::DIM),
                    )
                } else {
                    (theme.footer_key, theme.footer_val)
                };

                spans.push(key.style(key_style));
                spans.push(desc.style(val_style));
                spans.push(Span::raw(" "));
                current_width += item_width + 1;
            }
            spans.push(Span::raw("  "));
            current_width += 2;
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::ChipFocus;
    use crate::domain::models::Item;

    fn render(state: &AppState, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        Footer {
            state,
            theme: &state.theme,
        }
        .render(area, &mut buf);
        (0..width).map(|x| buf[(x, 0)].symbol().to_string()).collect()
    }

    #[test]
    fn test_footer_shows_phase_and_count() {
        let mut state = AppState::with_catalog(vec![Item::new(1, "Alice", "a@x")]);
        let text = render(&state, 80);
        assert!(text.contains("IDLE"));
        assert!(text.contains("0 selected"));

        state.selection.add(Item::new(1, "Alice", "a@x"));
        state.chip_focus = ChipFocus::Armed(0);
        let text = render(&state, 80);
        assert!(text.contains("CHIP ARMED"));
        assert!(text.contains("1 selected"));
        assert!(text.contains("remove"));
    }

    #[test]
    fn test_hints_dropped_when_narrow() {
        let state = AppState::with_catalog(Vec::new());
        let text = render(&state, 24);
        assert!(text.contains("IDLE"));
        assert!(!text.contains("search"));
    }
}
