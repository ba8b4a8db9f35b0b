/// One degree shown in the Education section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EducationEntry {
    pub degree: &'static str,
    pub school: &'static str,
    pub period: &'static str,
    pub detail: &'static str,
}

pub const EDUCATION: [EducationEntry; 2] = [
    EducationEntry {
        degree: "MS in Computer Science",
        school: "Ohio State University",
        period: "Aug 2024 - May 2026",
        detail: "Focus: Machine Learning, AI, Computer Vision, Advanced \
                 Algorithms, Data Mining",
    },
    EducationEntry {
        degree: "BE in Mechanical Engineering",
        school: "National Institute of Engineering",
        period: "Aug 2016 - May 2020",
        detail: "CGPA: 9.52/10.0 | Systems Thinking | Engineering Fundamentals",
    },
];
