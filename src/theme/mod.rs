use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod catppuccin;
pub mod glyphs;
pub mod gruvbox;
pub mod nord;
pub mod palette;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header_logo: Style,
    pub header_title: Style,
    pub header: Style,

    pub chip: Style,
    pub chip_remove: Style,
    pub chip_armed: Style,

    pub query_prompt: Style,
    pub query_text: Style,
    pub placeholder: Style,

    pub avatar: Style,
    pub suggestion: Style,
    pub suggestion_active: Style,
    pub suggestion_email: Style,

    pub status_idle: Style,
    pub status_typing: Style,
    pub status_armed: Style,

    pub footer_key: Style,
    pub footer_val: Style,
    pub footer: Style,

    pub dimmed: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    #[default]
    CatppuccinMocha,
    Nord,
    Gruvbox,
}

impl PaletteType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteType::CatppuccinMocha => "Catppuccin (Mocha)",
            PaletteType::Nord => "Nord",
            PaletteType::Gruvbox => "Gruvbox",
        }
    }
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::CatppuccinMocha => Self::from_palette(&catppuccin::CATPPUCCIN_MOCHA),
            PaletteType::Nord => Self::from_palette(&nord::NORD),
            PaletteType::Gruvbox => Self::from_palette(&gruvbox::GRUVBOX),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.blue),

            header_logo: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_title: Style::default()
                .bg(p.surface1)
                .fg(p.text)
                .add_modifier(Modifier::BOLD),
            header: Style::default().bg(p.base).fg(p.text),

            chip: Style::default().bg(p.surface0).fg(p.text),
            chip_remove: Style::default().bg(p.surface0).fg(p.red),
            // Armed chips stand out in the warm accent
            chip_armed: Style::default()
                .bg(dim_color(p.peach, 0.35))
                .fg(p.peach)
                .add_modifier(Modifier::BOLD),

            query_prompt: Style::default().fg(p.mauve).add_modifier(Modifier::BOLD),
            query_text: Style::default().fg(p.text),
            placeholder: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),

            avatar: Style::default()
                .bg(p.teal)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            suggestion: Style::default().fg(p.subtext0),
            suggestion_active: Style::default()
                .bg(p.surface1)
                .fg(p.text)
                .add_modifier(Modifier::BOLD),
            suggestion_email: Style::default().fg(p.overlay0),

            status_idle: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_typing: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_armed: Style::default()
                .bg(p.yellow)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            footer_key: Style::default()
                .bg(p.surface0)
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),
            footer_val: Style::default().bg(p.crust).fg(p.subtext0),
            footer: Style::default().bg(p.crust).fg(p.subtext0),

            dimmed: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::CatppuccinMocha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_produce_distinct_themes() {
        let mocha = Theme::from_palette_type(PaletteType::CatppuccinMocha);
        let nord = Theme::from_palette_type(PaletteType::Nord);
        let gruvbox = Theme::from_palette_type(PaletteType::Gruvbox);
        assert_ne!(mocha, nord);
        assert_ne!(nord, gruvbox);
        assert_eq!(Theme::default(), mocha);
    }

    #[test]
    fn test_palette_type_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            theme: PaletteType,
        }
        let w: Wrapper = toml::from_str("theme = \"nord\"").unwrap();
        assert_eq!(w.theme, PaletteType::Nord);
        assert_eq!(w.theme.label(), "Nord");
    }
}
