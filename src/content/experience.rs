/// Rough category of a position, shown as a small tag on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceTag {
    Research,
    Industry,
}

impl ExperienceTag {
    pub fn label(self) -> &'static str {
        match self {
            ExperienceTag::Research => "research",
            ExperienceTag::Industry => "industry",
        }
    }
}

/// One position on the experience timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub tag: ExperienceTag,
    pub highlights: &'static [&'static str],
}

/// Positions in display order, most recent first.
pub const EXPERIENCE: [ExperienceEntry; 3] = [
    ExperienceEntry {
        title: "Graduate Research Assistant",
        company: "ICICLE (OSU)",
        period: "Jun 2025 - Present",
        location: "Columbus, OH",
        tag: ExperienceTag::Research,
        highlights: &[
            "Architected an end-to-end ML/AI pipeline democratizing object \
             detection for researchers, eliminating the need for programming \
             expertise through an intuitive drag-and-drop interface",
            "Integrated SAM3 (Segment Anything Model) for intelligent \
             annotation assistance, reducing annotation time by enabling \
             one-click object segmentation that automatically generates \
             bounding boxes",
            "Implemented few-shot and zero-shot learning capabilities using \
             Google's OWL-v2 and DINO-v3 models, enabling rapid annotation of \
             new object classes with minimal training data",
            "Developed advanced visualization tools for threshold optimization \
             (objectness, similarity, NMS) with real-time IOU score analysis \
             and graphical comparison of predicted vs. ground truth boxes",
            "Built intelligent job orchestration system with automatic \
             resource allocation and deployment optimization, handling complex \
             ML workflows without manual job scheduling",
            "Applied computer vision techniques to animal ecology and digital \
             agriculture domains, enabling researchers to conduct experiments \
             through clicks rather than code",
        ],
    },
    ExperienceEntry {
        title: "Software Development Engineer",
        company: "Avis Budget Group",
        period: "Jun 2023 - Jul 2024",
        location: "Bangalore, India",
        tag: ExperienceTag::Industry,
        highlights: &[
            "Engineered a comprehensive web-based platform serving 500+ rental \
             agents, digitizing the complete car rental lifecycle from \
             reservation to return and damage assessment",
            "Designed and implemented RESTful microservices handling 10,000+ \
             daily transactions for fleet management, insurance processing, \
             payment workflows, and vehicle tracking",
            "Built automated data pipeline delivering real-time vehicle and \
             billing information to SiriusXM and toll authorities, enabling \
             seamless toll passage for 50,000+ fleet vehicles",
            "Developed intelligent billing system automatically routing \
             traffic violations and toll charges to appropriate customers, \
             reducing manual billing errors by 85%",
            "Integrated with third-party APIs for insurance verification, \
             payment processing, and DMV systems, creating a unified ecosystem \
             for rental operations",
            "Reduced average rental processing time from 45 minutes to 12 \
             minutes through workflow automation and optimized database \
             queries",
        ],
    },
    ExperienceEntry {
        title: "Software Engineering Specialist",
        company: "Dassault Systemes",
        period: "Oct 2020 - Jun 2023",
        location: "Bangalore, India",
        tag: ExperienceTag::Industry,
        highlights: &[
            "Architected Enterprise Message Bus, a distributed data streaming \
             platform using AWS (Kinesis, SQS, S3, DynamoDB) processing 1M+ \
             messages daily across 50+ microservices",
            "Eliminated the need for coordinated API calls between services by \
             implementing event-driven architecture, reducing API development \
             time by 40% and improving system reliability with automatic retry \
             mechanisms",
            "Designed and built a configurable workflow engine enabling \
             non-technical users to create complex business workflows through \
             drag-and-drop interface, eliminating the need for custom \
             development",
            "Reduced client onboarding time by 60%, from 6 months to 2.5 \
             months, by providing reusable workflow templates that companies \
             could customize without programming",
            "Orchestrated cluster of 15+ microservices handling 500,000+ \
             workflow executions monthly with 99.9% uptime, serving 5 Fortune \
             500 companies",
            "Developed Donor Management System for plasma donation centers \
             managing 10,000+ donor records, payment tracking, equipment \
             management, and clinical data with HIPAA compliance",
            "Implemented real-time payment tracking and automated \
             reconciliation reducing financial discrepancies by 95% and \
             ensuring compliance with health and safety standards",
        ],
    },
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_display_order_most_recent_first() {
        assert_eq!(EXPERIENCE[0].company, "ICICLE (OSU)");
        assert_eq!(EXPERIENCE[1].company, "Avis Budget Group");
        assert_eq!(EXPERIENCE[2].company, "Dassault Systemes");
    }

    #[test]
    fn test_every_entry_has_highlights() {
        for entry in EXPERIENCE {
            assert!(!entry.highlights.is_empty(), "{} is empty", entry.company);
        }
    }
}
