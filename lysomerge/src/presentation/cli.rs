use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use lyso_core::JoinStrategy;

/// Join-key strategy used to pair MIP and T0 rows.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum JoinStrategyArg {
    /// Join on Slice with MAX_/DUP_ prefixes removed
    #[default]
    SliceKey,
    /// Join on the crude second-underscore-token well ID
    WellId,
}

impl From<JoinStrategyArg> for JoinStrategy {
    fn from(arg: JoinStrategyArg) -> Self {
        match arg {
            JoinStrategyArg::SliceKey => JoinStrategy::SliceKey,
            JoinStrategyArg::WellId => JoinStrategy::WellId,
        }
    }
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Merge MIP and T0 particle-analysis CSVs into one transport-density table",
    long_about = None
)]
pub struct Cli {
    /// Output .csv filepath
    #[arg(long = "outputPath")]
    pub output_path: PathBuf,

    /// Folder with per-image max-intensity-projection results CSVs
    #[arg(long = "MIPfolder")]
    pub mip_folder: PathBuf,

    /// Folder with per-image T0-slice results CSVs
    #[arg(long = "T0folder")]
    pub t0_folder: PathBuf,

    /// Join-key strategy for pairing MIP and T0 rows
    #[arg(long = "join-strategy", value_enum, default_value = "slice-key")]
    pub join_strategy: JoinStrategyArg,
}
