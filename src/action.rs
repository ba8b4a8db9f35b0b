use serde::{Deserialize, Serialize};
use strum::Display;

use crate::content::{LinkTarget, Section};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    Refresh,
    Error(String),
    SystemMessage(String),
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
    GoToSection(Section),
    SelectSkillsTab(usize),
    NextSkillsTab,
    PrevSkillsTab,
    HoverExperience(Option<usize>),
    HoverStage(Option<usize>),
    OpenLink(LinkTarget),
    OpenPipelineDiagram,
}
