use std::ops::Range;

use ratatui::prelude::*;
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use crate::content::LinkTarget;

use super::Palette;

const GAP: u16 = 2;

/// The outbound link buttons (mail, GitHub, LinkedIn) as one row.
/// Button positions are deterministic for click resolution.
#[derive(Clone)]
pub struct LinkRow {
    palette: Palette,
    items: Vec<(Range<u16>, LinkTarget)>,
}

impl LinkRow {
    pub fn new(palette: Palette) -> Self {
        let mut items = Vec::new();
        let mut x = 0u16;
        for target in LinkTarget::ALL {
            let w = Self::button(target).width() as u16;
            items.push((x..x + w, target));
            x += w + GAP;
        }
        Self { palette, items }
    }

    fn button(target: LinkTarget) -> String {
        format!("[ {} ]", target.label())
    }

    pub fn hit(&self, x: u16) -> Option<LinkTarget> {
        self.items
            .iter()
            .find(|(range, _)| range.contains(&x))
            .map(|(_, target)| *target)
    }
}

impl Widget for LinkRow {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        if area.height == 0 {
            return;
        }

        let mut spans = Vec::new();
        for (i, (_, target)) in self.items.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" ".repeat(GAP as usize)));
            }
            spans.push(Span::styled(Self::button(*target), self.palette.accent));
        }

        Line::from(spans).render(area, buf);
    }
}
