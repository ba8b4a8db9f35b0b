//! Stateless presentation widgets
//!
//! Each widget renders one region of the page from borrowed content and a
//! [`Palette`]. Layout math (heights, hit ranges) is exposed as plain
//! functions so the page can position and hit-test without rendering.

pub mod experience_card;
pub mod link_row;
pub mod nav_bar;
pub mod skill_tags;
pub mod stage_card;
pub mod tab_bar;

use ratatui::style::Style;

use crate::{config::Config, mode::Mode};

pub use experience_card::ExperienceCard;
pub use link_row::LinkRow;
pub use nav_bar::NavBar;
pub use skill_tags::SkillTags;
pub use stage_card::StageCard;
pub use tab_bar::TabBar;

/// Resolved styles for the current mode, passed to every widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct Palette {
    pub accent: Style,
    pub accent_bold: Style,
    pub text: Style,
    pub muted: Style,
    pub dim: Style,
    pub card_border: Style,
    pub card_border_hover: Style,
    pub tag: Style,
    pub tab_active: Style,
    pub tab_inactive: Style,
    pub nav_brand: Style,
    pub status_name: Style,
}

impl Palette {
    pub fn from_config(config: &Config, mode: Mode) -> Self {
        Self {
            accent: config.style(mode, "accent"),
            accent_bold: config.style(mode, "accent_bold"),
            text: config.style(mode, "text"),
            muted: config.style(mode, "muted"),
            dim: config.style(mode, "dim"),
            card_border: config.style(mode, "card_border"),
            card_border_hover: config.style(mode, "card_border_hover"),
            tag: config.style(mode, "tag"),
            tab_active: config.style(mode, "tab_active"),
            tab_inactive: config.style(mode, "tab_inactive"),
            nav_brand: config.style(mode, "nav_brand"),
            status_name: config.style(mode, "status_name"),
        }
    }
}
