use std::ops::Range;

use ratatui::prelude::*;
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use crate::content::{profile, Section};

use super::Palette;

const GAP: u16 = 2;

/// Fixed top bar: brand initials plus one entry per anchored section.
/// Entry positions are deterministic, so clicks resolve through [`NavBar::hit`]
/// with the same math used for rendering.
#[derive(Clone)]
pub struct NavBar {
    active: Option<Section>,
    palette: Palette,
    items: Vec<(Range<u16>, Section)>,
}

impl NavBar {
    pub fn new(active: Option<Section>, palette: Palette) -> Self {
        let mut items = Vec::new();
        let mut x = profile::INITIALS.width() as u16 + 2 * GAP;
        for section in Section::ALL {
            if section.anchor().is_none() {
                continue;
            }
            let w = section.title_short().width() as u16;
            items.push((x..x + w, section));
            x += w + GAP;
        }
        Self {
            active,
            palette,
            items,
        }
    }

    /// The section whose entry covers column `x`, if any.
    pub fn hit(&self, x: u16) -> Option<Section> {
        self.items
            .iter()
            .find(|(range, _)| range.contains(&x))
            .map(|(_, section)| *section)
    }
}

impl Widget for NavBar {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        if area.height == 0 {
            return;
        }

        let mut spans = vec![
            Span::styled(profile::INITIALS, self.palette.nav_brand),
            Span::raw(" ".repeat(2 * GAP as usize)),
        ];
        for (i, (_, section)) in self.items.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" ".repeat(GAP as usize)));
            }
            let style = if Some(*section) == self.active {
                self.palette.accent_bold
            } else {
                self.palette.muted
            };
            spans.push(Span::styled(section.title_short(), style));
        }

        Line::from(spans).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn render_to_string(nav: NavBar, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buffer = Buffer::empty(area);
        nav.render(area, &mut buffer);
        (0..width)
            .map(|x| {
                buffer
                    .cell((x, 0))
                    .map(|c| c.symbol().to_string())
                    .unwrap_or_default()
            })
            .collect()
    }

    #[test]
    fn test_renders_all_anchored_sections() {
        let content = render_to_string(NavBar::new(None, Palette::default()), 80);
        for label in ["About", "Research", "Experience", "Skills", "Contact"] {
            assert!(content.contains(label), "missing {label} in {content:?}");
        }
        assert!(!content.contains("Education"));
    }

    #[test]
    fn test_hit_resolves_each_entry() {
        let nav = NavBar::new(None, Palette::default());
        for (range, section) in nav.items.clone() {
            assert_eq!(nav.hit(range.start), Some(section));
            assert_eq!(nav.hit(range.end - 1), Some(section));
        }
    }

    #[test]
    fn test_hit_misses_brand_and_gaps() {
        let nav = NavBar::new(None, Palette::default());
        assert_eq!(nav.hit(0), None);
        let first_start = nav.items[0].0.start;
        assert_eq!(nav.hit(first_start - 1), None);
    }

    #[test]
    fn test_render_zero_height() {
        let nav = NavBar::new(Some(Section::About), Palette::default());
        let area = Rect::new(0, 0, 80, 0);
        let mut buffer = Buffer::empty(area);
        nav.render(area, &mut buffer);
    }
}
