//! Static page content
//!
//! Everything the page displays lives here as fixed tables, defined at
//! compile time and never mutated. The render layer reads these tables
//! directly; there is no loading step and no mutation path.

pub mod education;
pub mod experience;
pub mod pipeline;
pub mod profile;
pub mod skills;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

pub use education::{EducationEntry, EDUCATION};
pub use experience::{ExperienceEntry, ExperienceTag, EXPERIENCE};
pub use pipeline::{PipelineStage, PIPELINE_STAGES};
pub use profile::LinkTarget;
pub use skills::{SkillCategory, SKILL_CATEGORIES};

/// The page sections, in render order.
///
/// A subset of these carries a navigation anchor; the rest are reachable
/// only by scrolling past their neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Section {
    Hero,
    About,
    Research,
    Experience,
    Skills,
    Education,
    Contact,
}

impl Section {
    /// All sections in the order they appear on the page.
    pub const ALL: [Section; 7] = [
        Section::Hero,
        Section::About,
        Section::Research,
        Section::Experience,
        Section::Skills,
        Section::Education,
        Section::Contact,
    ];

    /// The navigation anchor for this section, if it has one.
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            Section::About => Some("about"),
            Section::Experience => Some("experience"),
            Section::Research => Some("research"),
            Section::Skills => Some("skills"),
            Section::Contact => Some("contact"),
            Section::Hero | Section::Education => None,
        }
    }

    /// Resolve an anchor identifier back to its section.
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Section::ALL
            .into_iter()
            .find(|s| s.anchor() == Some(anchor))
    }

    /// One-word label used in the navigation bar.
    pub fn title_short(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Research => "Research",
            Section::Experience => "Experience",
            Section::Skills => "Skills",
            Section::Education => "Education",
            Section::Contact => "Contact",
        }
    }

    /// Heading shown at the top of the section body.
    pub fn title(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About Me",
            Section::Research => "Research & ML Pipeline",
            Section::Experience => "Experience",
            Section::Skills => "Skills & Technologies",
            Section::Education => "Education",
            Section::Contact => "Get In Touch",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_anchor_set_is_fixed() {
        let anchors: Vec<&str> = Section::ALL.iter().filter_map(|s| s.anchor()).collect();
        assert_eq!(
            anchors,
            vec!["about", "research", "experience", "skills", "contact"]
        );
    }

    #[test]
    fn test_from_anchor_roundtrip() {
        for section in Section::ALL {
            if let Some(anchor) = section.anchor() {
                assert_eq!(Section::from_anchor(anchor), Some(section));
            }
        }
    }

    #[test]
    fn test_from_anchor_unknown() {
        assert_eq!(Section::from_anchor("blog"), None);
        assert_eq!(Section::from_anchor(""), None);
    }

    #[test]
    fn test_section_order_matches_page() {
        assert_eq!(Section::ALL[0], Section::Hero);
        assert_eq!(Section::ALL[6], Section::Contact);
    }
}
