use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Padding, Widget};
use unicode_width::UnicodeWidthStr;

use crate::content::ExperienceEntry;
use crate::text::wrap_words;

use super::Palette;

/// One position on the experience timeline, rendered as a bordered card.
/// Hover only swaps the border style; the content never changes.
#[derive(Clone)]
pub struct ExperienceCard {
    entry: ExperienceEntry,
    hovered: bool,
    palette: Palette,
}

impl ExperienceCard {
    pub fn new(entry: ExperienceEntry, hovered: bool, palette: Palette) -> Self {
        Self {
            entry,
            hovered,
            palette,
        }
    }

    /// Rows the card occupies at `width`, borders included. Must stay in
    /// lockstep with `lines`, which the inner-content build guarantees.
    pub fn height(&self, width: u16) -> u16 {
        self.lines(Self::inner_width(width)).len() as u16 + 2
    }

    fn inner_width(width: u16) -> usize {
        // two border columns, one column of padding each side
        width.saturating_sub(4) as usize
    }

    fn lines(&self, inner: usize) -> Vec<Line<'static>> {
        let entry = &self.entry;
        let mut lines = Vec::new();

        // header: title left, period right when both fit on one row
        let title_w = entry.title.width();
        let period_w = entry.period.width();
        if title_w + 1 + period_w <= inner {
            let pad = inner - title_w - period_w;
            lines.push(Line::from(vec![
                Span::styled(entry.title, self.palette.text.bold()),
                Span::raw(" ".repeat(pad)),
                Span::styled(entry.period, self.palette.muted),
            ]));
        } else {
            lines.push(Line::from(Span::styled(
                entry.title,
                self.palette.text.bold(),
            )));
            lines.push(Line::from(Span::styled(entry.period, self.palette.muted)));
        }

        let company_w = entry.company.width();
        let location_w = entry.location.width();
        if company_w + 1 + location_w <= inner {
            let pad = inner - company_w - location_w;
            lines.push(Line::from(vec![
                Span::styled(entry.company, self.palette.accent_bold),
                Span::raw(" ".repeat(pad)),
                Span::styled(entry.location, self.palette.muted),
            ]));
        } else {
            lines.push(Line::from(Span::styled(
                entry.company,
                self.palette.accent_bold,
            )));
            lines.push(Line::from(Span::styled(entry.location, self.palette.muted)));
        }

        lines.push(Line::from(Span::styled(
            format!("[{}]", entry.tag.label()),
            self.palette.dim,
        )));
        lines.push(Line::default());

        for highlight in entry.highlights {
            let wrapped = wrap_words(highlight, inner.saturating_sub(2));
            for (i, row) in wrapped.into_iter().enumerate() {
                let prefix = if i == 0 { "→ " } else { "  " };
                let prefix_style = if i == 0 {
                    self.palette.accent
                } else {
                    self.palette.text
                };
                lines.push(Line::from(vec![
                    Span::styled(prefix, prefix_style),
                    Span::styled(row, self.palette.text),
                ]));
            }
        }

        lines
    }
}

impl Widget for ExperienceCard {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let border_style = if self.hovered {
            self.palette.card_border_hover
        } else {
            self.palette.card_border
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);

        for (i, line) in self.lines(inner.width as usize).into_iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.y + inner.height {
                break;
            }
            line.render(Rect::new(inner.x, y, inner.width, 1), buf);
        }
    }
}
