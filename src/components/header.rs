use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub title: &'a str,
    pub catalog_size: usize,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let logo_bg = self.theme.header_logo.bg.unwrap_or(Color::Reset);
        let title_bg = self.theme.header_title.bg.unwrap_or(Color::Reset);
        let base_bg = self.theme.header.bg.unwrap_or(Color::Reset);

        // Separator styles: fg = current segment bg, bg = next segment bg
        let sep_logo_title = Style::default().fg(logo_bg).bg(title_bg);
        let sep_title_base = Style::default().fg(title_bg).bg(base_bg);

        let spans = vec![
            Span::styled(" CHIPSEARCH ", self.theme.header_logo),
            Span::styled(glyphs::SEP_RIGHT, sep_logo_title),
            Span::styled(format!(" {} ", self.title), self.theme.header_title),
            Span::styled(glyphs::SEP_RIGHT, sep_title_base),
            Span::styled(format!(" {} users ", self.catalog_size), self.theme.header),
        ];

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
