//! Analysis settings for the imaging-host half of the pipeline.
//!
//! The host script used to read these from a global dictionary; here every
//! option is an explicit field so an invocation is fully reproducible.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::convention::AnalysisLayout;
use crate::error::{LysoError, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Flat directory holding the input TIFF stacks.
    pub tiff_input_dir: PathBuf,
    pub threshold_low: u32,
    pub threshold_high: u32,
    /// Slice range handed to the host's crop when extracting the T0 image.
    #[serde(default = "default_t0_slice_range")]
    pub t0_slice_range: String,
    /// Z-projection mode handed to the host.
    #[serde(default = "default_projection")]
    pub projection: String,
}

fn default_t0_slice_range() -> String {
    "1-1".to_string()
}

fn default_projection() -> String {
    "max".to_string()
}

impl AnalysisSettings {
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        toml::from_str(&text)
            .map_err(|e| LysoError::Config(format!("{}: {e}", path.display())))
    }

    /// Output tree the host writes under the input directory.
    pub fn layout(&self) -> AnalysisLayout {
        AnalysisLayout::new(&self.tiff_input_dir)
    }
}
