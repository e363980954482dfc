use crate::domain::models::Item;
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::Span,
    widgets::Widget,
};

/// Columns between two chips.
const CHIP_GAP: u16 = 1;

/// Screen placement of one chip, shared by rendering and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipSlot {
    pub index: usize,
    pub area: Rect,
    pub remove_area: Rect,
}

fn chip_label(item: &Item) -> String {
    format!(" {} ", item.label())
}

fn chip_width(item: &Item) -> u16 {
    let label = Span::raw(chip_label(item)).width();
    let glyph = Span::raw(glyphs::CHIP_REMOVE).width();
    u16::try_from(label + glyph + 1).unwrap_or(u16::MAX)
}

/// Places chips left to right, wrapping onto new rows. Rows past the bottom
/// of `area` are dropped.
#[must_use]
pub fn layout_chips(items: &[Item], area: Rect) -> Vec<ChipSlot> {
    place_chips(items, area.x, area.y, area.width)
        .into_iter()
        .filter(|slot| slot.area.y < area.bottom())
        .collect()
}

/// Number of rows the chips need at the given width.
#[must_use]
pub fn chip_rows(items: &[Item], width: u16) -> u16 {
    place_chips(items, 0, 0, width)
        .last()
        .map_or(0, |slot| slot.area.y + 1)
}

fn place_chips(items: &[Item], x0: u16, y0: u16, width: u16) -> Vec<ChipSlot> {
    let right = x0.saturating_add(width);
    let mut x = x0;
    let mut y = y0;
    let mut slots = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let w = chip_width(item).min(width);
        if x > x0 && x.saturating_add(w) > right {
            x = x0;
            y = y.saturating_add(1);
        }
        let area = Rect::new(x, y, w, 1);
        let remove_area = Rect::new(x + w.saturating_sub(2), y, w.min(1), 1);
        slots.push(ChipSlot {
            index,
            area,
            remove_area,
        });
        x = x.saturating_add(w + CHIP_GAP);
    }

    slots
}

pub struct ChipRow<'a> {
    pub items: &'a [Item],
    pub armed: Option<usize>,
    pub blink_on: bool,
    pub theme: &'a Theme,
}

impl Widget for ChipRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for slot in layout_chips(self.items, area) {
            let item = &self.items[slot.index];
            let is_armed = self.armed == Some(slot.index);

            let (label_style, glyph_style) = if is_armed {
                let style = if self.blink_on {
                    self.theme.chip_armed.add_modifier(Modifier::REVERSED)
                } else {
                    self.theme.chip_armed
                };
                (style, style)
            } else {
                (self.theme.chip, self.theme.chip_remove)
            };

            let width = usize::from(slot.area.width);
            buf.set_stringn(slot.area.x, slot.area.y, " ".repeat(width), width, label_style);
            buf.set_stringn(
                slot.area.x,
                slot.area.y,
                chip_label(item),
                width.saturating_sub(2),
                label_style,
            );
            if slot.remove_area.width > 0 {
                buf.set_stringn(
                    slot.remove_area.x,
                    slot.remove_area.y,
                    glyphs::CHIP_REMOVE,
                    1,
                    glyph_style,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<Item> {
        vec![
            Item::new(1, "Alice", "a@x"),
            Item::new(2, "Bob", "b@x"),
            Item::new(3, "Carol", "c@x"),
        ]
    }

    #[test]
    fn test_chips_flow_on_one_row() {
        // " Alice " + "✕" + " " = 9 columns
        let slots = layout_chips(&items(), Rect::new(2, 5, 80, 3));
        assert_eq!(slots.len(), 3);
        assert_eq!(slots[0].area, Rect::new(2, 5, 9, 1));
        assert_eq!(slots[0].remove_area, Rect::new(9, 5, 1, 1));
        assert_eq!(slots[1].area.x, 12);
        assert!(slots.iter().all(|s| s.area.y == 5));
        assert_eq!(chip_rows(&items(), 80), 1);
    }

    #[test]
    fn test_chips_wrap() {
        let slots = layout_chips(&items(), Rect::new(0, 0, 20, 5));
        assert_eq!(slots[0].area.y, 0);
        assert_eq!(slots[1].area.y, 0);
        assert_eq!(slots[2].area.y, 1);
        assert_eq!(slots[2].area.x, 0);
        assert_eq!(chip_rows(&items(), 20), 2);
    }

    #[test]
    fn test_rows_beyond_area_are_dropped() {
        let slots = layout_chips(&items(), Rect::new(0, 0, 10, 1));
        assert_eq!(slots.len(), 1);
    }

    #[test]
    fn test_no_chips() {
        assert_eq!(chip_rows(&[], 40), 0);
        assert!(layout_chips(&[], Rect::new(0, 0, 40, 2)).is_empty());
    }

    #[test]
    fn test_render_marks_remove_glyph() {
        let items = items();
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        ChipRow {
            items: &items,
            armed: Some(2),
            blink_on: false,
            theme: &theme,
        }
        .render(area, &mut buf);

        assert_eq!(buf[(7, 0)].symbol(), glyphs::CHIP_REMOVE);
        assert_eq!(buf[(1, 0)].symbol(), "A");
        assert_eq!(buf[(1, 0)].style().bg, theme.chip.bg);
        let carol = layout_chips(&items, area)[2];
        assert_eq!(buf[(carol.area.x, 0)].style().fg, theme.chip_armed.fg);
    }
}
