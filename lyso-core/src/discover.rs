use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{LysoError, Result};

/// List files directly inside `dir` whose name ends with `suffix`
/// (case-sensitive, no recursion).
///
/// Results are sorted lexicographically by path so downstream table order is
/// stable across platforms; raw directory-listing order is not.
pub fn find_files(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(LysoError::DirNotFound(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().ends_with(suffix) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}
