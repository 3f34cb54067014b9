use std::path::{Path, PathBuf};

use crate::convention::t0_results_for_mip;
use crate::discover::find_files;
use crate::error::{LysoError, MissingPair, Result};

/// One MIP results file and its existing T0 counterpart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultPair {
    pub mip: PathBuf,
    pub t0: PathBuf,
}

/// Discover MIP results CSVs and resolve each one's T0 counterpart by naming
/// convention.
///
/// Runs before any load or join. If any counterpart is missing, fails with a
/// single error listing every missing correspondence, not just the first.
pub fn pair_results(mip_dir: &Path, t0_dir: &Path) -> Result<Vec<ResultPair>> {
    let mip_files = find_files(mip_dir, ".csv")?;
    if !t0_dir.is_dir() {
        return Err(LysoError::DirNotFound(t0_dir.to_path_buf()));
    }

    let mut pairs = Vec::with_capacity(mip_files.len());
    let mut missing = Vec::new();
    for mip in mip_files {
        let name = mip
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let t0 = t0_dir.join(t0_results_for_mip(&name));
        if t0.is_file() {
            pairs.push(ResultPair { mip, t0 });
        } else {
            missing.push(MissingPair {
                mip,
                expected_t0: t0,
            });
        }
    }

    if missing.is_empty() {
        Ok(pairs)
    } else {
        Err(LysoError::MissingT0(missing))
    }
}
