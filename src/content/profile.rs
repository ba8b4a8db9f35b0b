use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use strum::Display;

pub const NAME: &str = "Brijesh Nanda B Y";
pub const INITIALS: &str = "BN";
pub const TAGLINE: &str = "Full Stack Developer → ML/AI Engineer";
pub const SUBTITLE: &str =
    "Building intelligent systems at the intersection of Software Engineering and Computer Vision";

pub const EMAIL: &str = "brijeshnandaby@protonmail.com";
pub const MAIL_SUBJECT: &str = "Hello from your portfolio";
pub const GITHUB_URL: &str = "https://github.com/brijesh-nanda-by";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/brijesh-nanda-b-y";

pub const ABOUT: [&str; 2] = [
    "I'm a Full Stack Developer transitioning into ML/AI with nearly 4 years \
     of software engineering experience. My journey began with building \
     scalable enterprise systems using Java, Spring, and AWS, where I reduced \
     API development time by 40% through innovative data streaming solutions.",
    "Now, I'm channeling that engineering expertise into computer vision and \
     machine learning at Ohio State University's ICICLE project, where I'm \
     developing end-to-end ML pipelines for object detection in animal \
     ecology and digital agriculture. My unique background in both software \
     engineering and mechanical engineering gives me a systems-thinking \
     approach to solving complex problems.",
];

/// The "Current Focus" cards on the hero panel.
pub const FOCUS: [(&str, &str); 3] = [
    ("Computer Vision", "Object Detection & Recognition"),
    ("Digital Agriculture", "Animal Ecology Applications"),
    ("ML Pipeline Development", "End-to-End Automation"),
];

pub const RESEARCH_TITLE: &str = "ICICLE Object Detection Pipeline";
pub const RESEARCH_SUBTITLE: &str =
    "No-code ML platform for researchers in Animal Ecology and Digital Agriculture";
pub const RESEARCH_BLURB: &str =
    "An end-to-end automated pipeline that democratizes object detection \
     research through intuitive drag-and-drop interfaces, eliminating the \
     need for programming expertise or manual job scheduling.";

pub const TECH_STACK: [&str; 9] = [
    "PyTorch",
    "SAM3",
    "OWL-v2",
    "DINO-v3",
    "OpenCV",
    "AWS",
    "Docker",
    "Singularity containers",
    "Kubernetes",
];

pub const CONTACT_BLURB: &str =
    "I'm currently open to research opportunities and collaborations in ML/AI \
     and Computer Vision. Whether you want to discuss projects or just say \
     hi, feel free to reach out!";

/// A fixed outbound link. Opening one hands the URL to the platform handler
/// (mail client or browser); nothing else leaves the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum LinkTarget {
    Email,
    GitHub,
    LinkedIn,
}

impl LinkTarget {
    pub const ALL: [LinkTarget; 3] = [LinkTarget::Email, LinkTarget::GitHub, LinkTarget::LinkedIn];

    pub fn label(self) -> &'static str {
        match self {
            LinkTarget::Email => "Email",
            LinkTarget::GitHub => "GitHub",
            LinkTarget::LinkedIn => "LinkedIn",
        }
    }

    pub fn url(self) -> String {
        match self {
            LinkTarget::Email => {
                let subject = utf8_percent_encode(MAIL_SUBJECT, NON_ALPHANUMERIC);
                format!("mailto:{EMAIL}?subject={subject}")
            }
            LinkTarget::GitHub => GITHUB_URL.to_string(),
            LinkTarget::LinkedIn => LINKEDIN_URL.to_string(),
        }
    }
}
