pub mod handlers;

use crate::presentation::cli::Cli;
use clap::Parser;
use lyso_core::error::Result;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    handlers::handle_merge(
        cli.output_path,
        cli.mip_folder,
        cli.t0_folder,
        cli.join_strategy,
    )
}
