/// One of the five fixed skill groupings shown under the Skills tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

/// Skill categories in tab order. The first category is the default tab.
pub const SKILL_CATEGORIES: [SkillCategory; 5] = [
    SkillCategory {
        name: "ML/AI",
        skills: &[
            "Computer Vision",
            "Object Detection",
            "ML Pipelines",
            "PyTorch",
            "TensorFlow",
            "OpenCV",
            "MLflow",
        ],
    },
    SkillCategory {
        name: "Backend",
        skills: &[
            "Java",
            "Spring",
            "Python",
            "RESTful APIs",
            "Microservices",
            "Multithreading",
        ],
    },
    SkillCategory {
        name: "Frontend",
        skills: &["React", "Angular", "TypeScript", "JavaScript", "HTML/CSS"],
    },
    SkillCategory {
        name: "Cloud & DevOps",
        skills: &[
            "AWS EC2",
            "Lambda",
            "ECS",
            "S3",
            "Kinesis",
            "SQS",
            "DynamoDB",
        ],
    },
    SkillCategory {
        name: "Tools",
        skills: &["Docker", "Kubernetes", "Jenkins", "Git", "Terraform", "Redis"],
    },
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_five_categories() {
        assert_eq!(SKILL_CATEGORIES.len(), 5);
        assert_eq!(SKILL_CATEGORIES[0].name, "ML/AI");
        assert_eq!(SKILL_CATEGORIES[4].name, "Tools");
    }

    #[test]
    fn test_no_empty_categories() {
        for category in SKILL_CATEGORIES {
            assert!(!category.skills.is_empty(), "{} is empty", category.name);
        }
    }

    #[test]
    fn test_no_duplicate_labels_within_category() {
        for category in SKILL_CATEGORIES {
            let mut seen = std::collections::HashSet::new();
            for skill in category.skills {
                assert!(seen.insert(skill), "duplicate {skill} in {}", category.name);
            }
        }
    }

    #[test]
    fn test_labels_unique_across_categories() {
        // Tab switching is asserted on label presence, which requires the
        // label sets to be disjoint.
        let mut seen = std::collections::HashSet::new();
        for category in SKILL_CATEGORIES {
            for skill in category.skills {
                assert!(seen.insert(skill), "{skill} appears in two categories");
            }
        }
    }
}
