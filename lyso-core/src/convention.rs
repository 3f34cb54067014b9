//! File-naming convention shared with the imaging host.
//!
//! The host writes everything under one analysis directory next to the input
//! TIFFs; this module is the single source of truth for those names.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

pub const ANALYSIS_DIR: &str = "automated_lysosome_transport_analysis";
pub const MIP_TIF_DIR: &str = "auto_mip_tifs";
pub const T0_TIF_DIR: &str = "auto_t0_tifs";
pub const MIP_TABLES_DIR: &str = "auto_mip_results_tables";
pub const T0_TABLES_DIR: &str = "auto_t0_results_tables";
pub const FINAL_RESULTS_FILE: &str = "auto_final_results.csv";

const MIP_RESULTS_SUFFIX: &str = "_mip_results.csv";
const T0_RESULTS_SUFFIX: &str = "_t0_results.csv";

/// The output tree rooted inside the TIFF input directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisLayout {
    pub root: PathBuf,
    pub mip_tifs: PathBuf,
    pub t0_tifs: PathBuf,
    pub mip_tables: PathBuf,
    pub t0_tables: PathBuf,
    pub final_csv: PathBuf,
}

impl AnalysisLayout {
    pub fn new(tiff_input_dir: &Path) -> Self {
        let root = tiff_input_dir.join(ANALYSIS_DIR);
        Self {
            mip_tifs: root.join(MIP_TIF_DIR),
            t0_tifs: root.join(T0_TIF_DIR),
            mip_tables: root.join(MIP_TABLES_DIR),
            t0_tables: root.join(T0_TABLES_DIR),
            final_csv: root.join(FINAL_RESULTS_FILE),
            root,
        }
    }

    /// Create the whole directory tree (idempotent).
    pub fn create_dirs(&self) -> Result<()> {
        for dir in [
            &self.root,
            &self.mip_tifs,
            &self.t0_tifs,
            &self.mip_tables,
            &self.t0_tables,
        ] {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    pub fn mip_tif(&self, image_stem: &str) -> PathBuf {
        self.mip_tifs.join(format!("{image_stem}_auto_mip.tif"))
    }

    pub fn t0_tif(&self, image_stem: &str) -> PathBuf {
        self.t0_tifs.join(format!("{image_stem}_auto_t0.tif"))
    }

    pub fn mip_results(&self, image_stem: &str) -> PathBuf {
        self.mip_tables.join(format!("{image_stem}_auto{MIP_RESULTS_SUFFIX}"))
    }

    pub fn t0_results(&self, image_stem: &str) -> PathBuf {
        self.t0_tables.join(format!("{image_stem}_auto{T0_RESULTS_SUFFIX}"))
    }
}

/// Image stem: file name up to the first `.`.
pub fn image_stem(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.split('.').next().unwrap_or("").to_string()
}

/// File name of the T0 results CSV corresponding to a MIP results file name.
pub fn t0_results_for_mip(mip_file_name: &str) -> String {
    mip_file_name.replace(MIP_RESULTS_SUFFIX, T0_RESULTS_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_matches_host_convention() {
        let layout = AnalysisLayout::new(Path::new("/data/images"));
        let base = Path::new("/data/images/automated_lysosome_transport_analysis");
        assert_eq!(layout.root, base);
        assert_eq!(layout.mip_tifs, base.join("auto_mip_tifs"));
        assert_eq!(layout.final_csv, base.join("auto_final_results.csv"));
        assert_eq!(
            layout.mip_results("img1"),
            base.join("auto_mip_results_tables/img1_auto_mip_results.csv")
        );
        assert_eq!(
            layout.t0_tif("img1"),
            base.join("auto_t0_tifs/img1_auto_t0.tif")
        );
    }

    #[test]
    fn create_dirs_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = AnalysisLayout::new(tmp.path());
        layout.create_dirs().unwrap();
        layout.create_dirs().unwrap();
        assert!(layout.t0_tables.is_dir());
    }

    #[test]
    fn stem_stops_at_first_dot() {
        assert_eq!(image_stem(Path::new("/a/b/stack.ome.tif")), "stack");
        assert_eq!(image_stem(Path::new("plain")), "plain");
    }

    #[test]
    fn t0_name_derives_from_mip_name() {
        assert_eq!(
            t0_results_for_mip("img1_auto_mip_results.csv"),
            "img1_auto_t0_results.csv"
        );
        // Names outside the convention come back unchanged.
        assert_eq!(t0_results_for_mip("odd.csv"), "odd.csv");
    }
}
