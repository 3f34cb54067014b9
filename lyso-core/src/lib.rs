#![forbid(unsafe_code)]

pub mod error;
pub mod settings;

pub mod convention;
pub mod discover;
pub mod well;

pub mod table {
    pub mod load;
    pub mod model;
    pub mod write;
}

pub mod merge {
    pub mod density;
    pub mod join;
    pub mod pairing;
    pub mod run;
}

// Re-exports: stable API surface
pub use discover::find_files;
pub use merge::join::JoinStrategy;
pub use merge::run::{MergeJob, merge_results};
pub use well::{PlateFormat, extract_well_id};
