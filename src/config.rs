pub mod keybindings;
pub mod styles;

use std::path::PathBuf;

use color_eyre::eyre::Result;
use ratatui::style::Style;
use serde::Deserialize;

use crate::{mode::Mode, utils};

pub use keybindings::KeyBindings;
pub use styles::Styles;

const CONFIG: &str = include_str!("../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub styles: Styles,
}

impl Config {
    /// Load the embedded defaults, then layer any user config file found in
    /// the config directory on top. The page is fully usable without a user
    /// config; every binding and style ships as a default.
    pub fn new() -> Result<Self, config::ConfigError> {
        let default_config: Config = json5::from_str(CONFIG)
            .map_err(|e| config::ConfigError::Message(format!("bad embedded config: {e}")))?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_str().unwrap_or_default())?
            .set_default("_config_dir", config_dir.to_str().unwrap_or_default())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        for (mode, default_bindings) in default_config.keybindings.iter() {
            let user_bindings = cfg.keybindings.entry(*mode).or_default();
            for (key, cmd) in default_bindings.iter() {
                user_bindings
                    .entry(key.clone())
                    .or_insert_with(|| cmd.clone());
            }
        }
        for (mode, default_styles) in default_config.styles.iter() {
            let user_styles = cfg.styles.entry(*mode).or_default();
            for (style_key, style) in default_styles.iter() {
                user_styles.entry(style_key.clone()).or_insert(*style);
            }
        }

        Ok(cfg)
    }

    /// Style lookup with a plain default for keys a user config removed.
    pub fn style(&self, mode: Mode, key: &str) -> Style {
        self.styles
            .get(&mode)
            .and_then(|styles| styles.get(key))
            .copied()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{action::Action, content::Section};

    #[test]
    fn test_embedded_defaults_parse() {
        let c: Config = json5::from_str(CONFIG).expect("embedded config must parse");
        let keymap = c.keybindings.get(&Mode::Home).expect("Home keymap");
        assert_eq!(
            keymap.get(&vec![KeyEvent::new(
                KeyCode::Char('q'),
                KeyModifiers::empty()
            )]),
            Some(&Action::Quit)
        );
    }

    #[test]
    fn test_embedded_defaults_cover_navigation() {
        let c: Config = json5::from_str(CONFIG).expect("embedded config must parse");
        let keymap = c.keybindings.get(&Mode::Home).expect("Home keymap");
        let bound: Vec<&Action> = keymap.values().collect();
        assert!(bound
            .iter()
            .any(|a| matches!(a, Action::GoToSection(Section::Contact))));
        assert!(bound.iter().any(|a| matches!(a, Action::SelectSkillsTab(4))));
    }

    #[test]
    fn test_embedded_styles_parse() {
        let c: Config = json5::from_str(CONFIG).expect("embedded config must parse");
        let styles = c.styles.get(&Mode::Home).expect("Home styles");
        assert!(styles.contains_key("accent"));
        assert!(styles.contains_key("card_border_hover"));
    }
}
