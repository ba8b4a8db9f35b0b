use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Padding, Widget};

use crate::content::PipelineStage;
use crate::text::wrap_words;

use super::Palette;

/// One pipeline stage as a bordered card: icon, name, one-line summary and
/// the longer detail text. Hover swaps the border and icon styles.
#[derive(Clone)]
pub struct StageCard {
    stage: PipelineStage,
    hovered: bool,
    palette: Palette,
}

impl StageCard {
    pub fn new(stage: PipelineStage, hovered: bool, palette: Palette) -> Self {
        Self {
            stage,
            hovered,
            palette,
        }
    }

    pub fn height(&self, width: u16) -> u16 {
        self.lines(Self::inner_width(width)).len() as u16 + 2
    }

    fn inner_width(width: u16) -> usize {
        width.saturating_sub(4) as usize
    }

    fn lines(&self, inner: usize) -> Vec<Line<'static>> {
        let stage = &self.stage;
        let icon_style = if self.hovered {
            self.palette.accent
        } else {
            self.palette.muted
        };

        let mut lines = vec![Line::from(vec![
            Span::styled(format!("{} ", stage.icon), icon_style),
            Span::styled(stage.name, self.palette.text.bold()),
        ])];
        for row in wrap_words(stage.summary, inner) {
            lines.push(Line::from(Span::styled(row, self.palette.muted)));
        }
        lines.push(Line::default());
        for row in wrap_words(stage.details, inner) {
            lines.push(Line::from(Span::styled(row, self.palette.text)));
        }

        lines
    }
}

impl Widget for StageCard {
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
