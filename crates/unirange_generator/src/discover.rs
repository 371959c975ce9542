//! Input discovery: which data files to process, and in what order.

use std::fs;
use std::path::{Path, PathBuf};
use unirange_diagnostics::GenError;

/// List the data files for `target`.
///
/// A file is returned as-is. A directory yields every regular file whose
/// name matches `pattern`, sorted by file name so the output order never
/// depends on the file system's listing order.
pub fn discover_data_files(target: &Path, pattern: &str) -> Result<Vec<PathBuf>, GenError> {
    let metadata = fs::metadata(target).map_err(|e| GenError::read(target, e))?;
    if !metadata.is_dir() {
        return Ok(vec![target.to_path_buf()]);
    }

    let entries = fs::read_dir(target).map_err(|e| GenError::read(target, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| GenError::read(target, e))?.path();
        if path.is_file() && matches_simple_glob(&path, pattern) {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(GenError::NoDataFiles {
            dir: target.to_path_buf(),
            pattern: pattern.to_string(),
        });
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Match a file name against a glob with at most one `*`.
pub fn matches_simple_glob(path: &Path, pattern: &str) -> bool {
    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    if let Some(star_pos) = pattern.find('*') {
        let prefix = &pattern[..star_pos];
        let suffix = &pattern[star_pos + 1..];
        file_name.len() >= prefix.len() + suffix.len()
            && file_name.starts_with(prefix)
            && file_name.ends_with(suffix)
    } else {
        file_name == pattern
    }
}

/// The category name of a data file: its base name without extension.
pub fn category_name(path: &Path) -> Result<String, GenError> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
        .ok_or_else(|| GenError::NoCategoryName {
            path: path.to_path_buf(),
        })
}
