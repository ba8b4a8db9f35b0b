use ratatui::prelude::*;
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use super::Palette;

const GAP: usize = 2;

/// Flow layout of label chips, wrapping to as many rows as `width` demands.
#[derive(Clone)]
pub struct SkillTags {
    labels: &'static [&'static str],
    palette: Palette,
}

impl SkillTags {
    pub fn new(labels: &'static [&'static str], palette: Palette) -> Self {
        Self { labels, palette }
    }

    fn chip(label: &str) -> String {
        format!("[ {label} ]")
    }

    /// Chips grouped into rows that fit `width` columns.
    fn rows(&self, width: usize) -> Vec<Vec<&'static str>> {
        let mut rows: Vec<Vec<&'static str>> = Vec::new();
        let mut current: Vec<&'static str> = Vec::new();
        let mut used = 0usize;

        for label in self.labels {
            let w = Self::chip(label).width();
            let sep = if current.is_empty() { 0 } else { GAP };
            if !current.is_empty() && used + sep + w > width {
                rows.push(std::mem::take(&mut current));
                used = 0;
            }
            let sep = if current.is_empty() { 0 } else { GAP };
            used += sep + w;
            current.push(label);
        }
        if !current.is_empty() {
            rows.push(current);
        }

        rows
    }

    pub fn height(&self, width: u16) -> u16 {
        self.rows(width.max(1) as usize).len() as u16
    }
}

impl Widget for SkillTags {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        for (y, row) in self.rows(area.width.max(1) as usize).into_iter().enumerate() {
            if y as u16 >= area.height {
                break;
            }
            let mut spans = Vec::new();
            for (i, label) in row.into_iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" ".repeat(GAP)));
                }
                spans.push(Span::styled(Self::chip(label), self.palette.tag));
            }
            Line::from(spans).render(
                Rect::new(area.x, area.y + y as u16, area.width, 1),
                buf,
            );
        }
    }
}
