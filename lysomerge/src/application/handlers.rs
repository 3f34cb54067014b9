use std::path::PathBuf;

use lyso_core::error::Result;
use lyso_core::{MergeJob, merge_results};

use crate::presentation::cli::JoinStrategyArg;

pub fn handle_merge(
    output_path: PathBuf,
    mip_folder: PathBuf,
    t0_folder: PathBuf,
    strategy: JoinStrategyArg,
) -> Result<()> {
    println!("MIP folder: {}", mip_folder.display());
    println!("T0 folder: {}", t0_folder.display());
    println!("Output path: {}", output_path.display());

    let job = MergeJob {
        mip_folder,
        t0_folder,
        output_path: output_path.clone(),
        strategy: strategy.into(),
    };
    merge_results(&job)?;

    println!("Final CSV saved to: {}", output_path.display());
    Ok(())
}
