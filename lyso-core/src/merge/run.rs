use std::path::PathBuf;

use crate::error::Result;
use crate::merge::density::add_transport_density;
use crate::merge::join::{JoinStrategy, outer_join, strip_projection_prefix};
use crate::merge::pairing::pair_results;
use crate::table::load::concat_results;
use crate::table::model::{COL_SLICE, COL_SLICE_KEY, COL_WELL_ID, COL_WELL_TOKEN, Table};
use crate::table::write::write_csv;
use crate::well::extract_well_id;

/// One merge invocation, fully explicit; nothing is picked up from ambient
/// state.
#[derive(Clone, Debug)]
pub struct MergeJob {
    pub mip_folder: PathBuf,
    pub t0_folder: PathBuf,
    pub output_path: PathBuf,
    pub strategy: JoinStrategy,
}

/// Whole merge pipeline: pair -> load -> join -> density -> well IDs -> write.
///
/// The pairing check runs first and every fatal error happens before the
/// output file is created, so a failed invocation leaves no partial output.
pub fn merge_results(job: &MergeJob) -> Result<()> {
    let pairs = pair_results(&job.mip_folder, &job.t0_folder)?;
    let mip_paths: Vec<PathBuf> = pairs.iter().map(|p| p.mip.clone()).collect();
    let t0_paths: Vec<PathBuf> = pairs.iter().map(|p| p.t0.clone()).collect();

    let mut mip = concat_results(&mip_paths)?;
    let mut t0 = concat_results(&t0_paths)?;

    let mut joined = match job.strategy {
        JoinStrategy::SliceKey => {
            for table in [&mut mip, &mut t0] {
                table.derive_column(COL_SLICE_KEY, |row| {
                    row.get(COL_SLICE).map(|s| strip_projection_prefix(s))
                });
            }
            let mut joined = outer_join(&mip, &t0, COL_SLICE_KEY);
            // The per-side crude tokens are superseded by the WellID column.
            joined.drop_column(&format!("{COL_WELL_TOKEN}_x"));
            joined.drop_column(&format!("{COL_WELL_TOKEN}_y"));
            joined
        }
        JoinStrategy::WellId => outer_join(&mip, &t0, COL_WELL_TOKEN),
    };

    add_transport_density(&mut joined);
    add_well_ids(&mut joined);

    write_csv(&joined, &job.output_path)
}

/// Extract the canonical `WellID` from the MIP-side `Slice` of each merged
/// row. T0-only rows have no MIP-side slice and keep the field undefined.
fn add_well_ids(table: &mut Table) {
    let slice_x = format!("{COL_SLICE}_x");
    table.derive_column(COL_WELL_ID, |row| {
        row.get(&slice_x).and_then(|s| extract_well_id(s))
    });
}
