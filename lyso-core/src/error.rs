use std::path::PathBuf;
use thiserror::Error;

/// One MIP results file whose T0 counterpart is absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingPair {
    pub mip: PathBuf,
    pub expected_t0: PathBuf,
}

#[derive(Error, Debug)]
pub enum LysoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("directory not found: {}", .0.display())]
    DirNotFound(PathBuf),

    #[error("{}: CSV parse error: {}", .path.display(), .source)]
    Csv { path: PathBuf, source: csv::Error },

    #[error("{}: missing required column \"{}\"", .path.display(), .column)]
    MissingColumn { path: PathBuf, column: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("{}", format_missing_pairs(.0))]
    MissingT0(Vec<MissingPair>),
}

fn format_missing_pairs(pairs: &[MissingPair]) -> String {
    let mut msg = format!("no matching T0 results for {} MIP file(s):", pairs.len());
    for p in pairs {
        msg.push_str(&format!(
            "\n  {} (looked for {})",
            p.mip.display(),
            p.expected_t0.display()
        ));
    }
    msg.push_str("\nfiles must be named \"*_mip_results.csv\" / \"*_t0_results.csv\"");
    msg
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, LysoError>;
