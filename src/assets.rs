//! Bundled static assets

use std::fs;
use std::path::PathBuf;

use color_eyre::eyre::Result;

use crate::utils::get_data_dir;

/// The research pipeline diagram, shipped inside the binary.
pub const PIPELINE_DIAGRAM: &[u8] = include_bytes!("../assets/pipeline.png");

const PIPELINE_DIAGRAM_FILE: &str = "pipeline.png";

/// Materialize the bundled diagram into the data directory and return its
/// path. Nothing touches the disk until the diagram is first requested;
/// subsequent requests reuse the written file.
pub fn pipeline_diagram_path() -> Result<PathBuf> {
    let directory = get_data_dir();
    fs::create_dir_all(&directory)?;
    let path = directory.join(PIPELINE_DIAGRAM_FILE);
    if !path.exists() {
        fs::write(&path, PIPELINE_DIAGRAM)?;
    }
    Ok(path)
}
