use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};

use super::Component;
use crate::{
    action::Action,
    config::Config,
    content::profile,
    mode::Mode,
    tui::Frame,
    widgets::Palette,
};

const HINTS: &str = "q quit · j/k scroll · a/e/r/s/c jump · 1-5 tabs · m/o/l links · d diagram";

/// Bottom bar: identity line plus a transient message line.
#[derive(Default)]
pub struct StatusBar {
    config: Config,
    message: Option<String>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Component for StatusBar {
    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.config = config;
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::SystemMessage(message) => self.message = Some(message),
            Action::Error(message) => self.message = Some(format!("Error: {message}")),
            _ => {}
        };

        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let palette = Palette::from_config(&self.config, Mode::Home);
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ],
        )
        .split(area);
        f.render_widget(Clear, layout[1]);
        f.render_widget(Clear, layout[2]);

        let status_line = Paragraph::new(Line::from(vec![
            Span::styled(profile::NAME, palette.status_name),
            Span::raw("  "),
            Span::styled(HINTS, palette.dim),
        ]));
        f.render_widget(status_line, layout[1]);

        let message_line = Paragraph::new(self.message.clone().unwrap_or_default());
        f.render_widget(message_line, layout[2]);

        Ok(())
    }
}
