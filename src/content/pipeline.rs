/// One step of the research workflow, shown as descriptive content only.
/// The pipeline itself runs elsewhere; the page just presents it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineStage {
    pub id: u8,
    pub name: &'static str,
    pub icon: &'static str,
    pub summary: &'static str,
    pub details: &'static str,
}

/// Pipeline stages in workflow order.
pub const PIPELINE_STAGES: [PipelineStage; 5] = [
    PipelineStage {
        id: 1,
        name: "Data Ingestion",
        icon: "◫",
        summary: "Multi-source data collection",
        details: "Automated ingestion from diverse data sources with support \
                  for various formats and protocols",
    },
    PipelineStage {
        id: 2,
        name: "Ground Truth Creation",
        icon: "▣",
        summary: "Intelligent annotation system",
        details: "SAM3-assisted bounding box annotation with one-click \
                  segmentation. Few-shot and zero-shot annotation using \
                  Google OWL-v2 and DINO-v3",
    },
    PipelineStage {
        id: 3,
        name: "Class Support Generation",
        icon: "▤",
        summary: "Patch optimization",
        details: "Automated patch size optimization with visual comparison of \
                  predicted vs. actual boxes and IOU score analysis",
    },
    PipelineStage {
        id: 4,
        name: "Threshold Optimization",
        icon: "▥",
        summary: "Parameter tuning",
        details: "Interactive visualization and optimization of objectness, \
                  similarity, and NMS thresholds with real-time feedback",
    },
    PipelineStage {
        id: 5,
        name: "Automated Deployment",
        icon: "▶",
        summary: "Smart orchestration",
        details: "Intelligent job scheduling with automatic resource \
                  allocation or user-defined system requirements",
    },
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_stages_in_workflow_order() {
        let ids: Vec<u8> = PIPELINE_STAGES.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_stage_names_unique() {
        let mut seen = std::collections::HashSet::new();
        for stage in PIPELINE_STAGES {
            assert!(seen.insert(stage.name));
        }
    }
}
