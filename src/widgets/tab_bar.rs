use std::ops::Range;

use ratatui::prelude::*;
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use crate::content::SKILL_CATEGORIES;

use super::Palette;

const GAP: u16 = 2;

/// Skill category tabs. Each tab is rendered as a padded button; the active
/// tab gets the highlight style. Button positions are deterministic so a
/// click column maps back to a tab index via [`TabBar::hit`].
#[derive(Clone)]
pub struct TabBar {
    active: usize,
    palette: Palette,
    items: Vec<Range<u16>>,
}

impl TabBar {
    pub fn new(active: usize, palette: Palette) -> Self {
        let mut items = Vec::new();
        let mut x = 0u16;
        for category in SKILL_CATEGORIES {
            // button text is " name " (one column of padding each side)
            let w = category.name.width() as u16 + 2;
            items.push(x..x + w);
            x += w + GAP;
        }
        Self {
            active,
            palette,
            items,
        }
    }

    /// Total width of the rendered bar.
    pub fn width(&self) -> u16 {
        self.items.last().map(|r| r.end).unwrap_or_default()
    }

    /// The tab index whose button covers column `x`, if any.
    pub fn hit(&self, x: u16) -> Option<usize> {
        self.items.iter().position(|range| range.contains(&x))
    }
}

impl Widget for TabBar {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        if area.height == 0 {
            return;
        }

        let mut spans = Vec::new();
        for (i, category) in SKILL_CATEGORIES.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" ".repeat(GAP as usize)));
            }
            let style = if i == self.active {
                self.palette.tab_active
            } else {
                self.palette.tab_inactive
            };
            spans.push(Span::styled(format!(" {} ", category.name), style));
        }

        Line::from(spans).render(area, buf);
    }
}
