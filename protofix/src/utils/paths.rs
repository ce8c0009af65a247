//! Path utilities for protofix.
//!
//! This module consolidates the path-related logic for:
//! - Cross-platform path normalization
//! - Generated stub discovery under a root directory

use crate::constants::DEFAULT_EXCLUDE_FOLDERS;
use crate::index::StubKind;
use std::path::{Component, Path, PathBuf};

/// Normalizes a path for CLI display.
///
/// - Converts backslashes to forward slashes (for cross-platform consistency)
/// - Strips leading "./" or ".\" prefix (for cleaner output)
///
/// # Examples
/// ```
/// use std::path::Path;
/// use protofix::utils::normalize_display_path;
///
/// assert_eq!(normalize_display_path(Path::new(".\\proto\\foo_pb2.py")), "proto/foo_pb2.py");
/// assert_eq!(normalize_display_path(Path::new("./a/b_pb2.py")), "a/b_pb2.py");
/// ```
#[must_use]
pub fn normalize_display_path(path: &Path) -> String {
    let s = path.to_string_lossy();
    // Strip Windows extended path prefix if present
    let clean = s.trim_start_matches(r"\\?\");
    let normalized = clean.replace('\\', "/");
    normalized
        .strip_prefix("./")
        .unwrap_or(&normalized)
        .to_owned()
}

/// Joins the normal components of a relative path with `/`.
///
/// `.` components are dropped so `./a/b` and `a/b` compare equal.
#[must_use]
pub fn slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Checks if a name matches any exclusion pattern.
/// Supports exact matching and wildcard patterns starting with `*.`.
#[must_use]
pub fn is_excluded(name: &str, excludes: &[String]) -> bool {
    for exclude in excludes {
        if exclude.starts_with("*.") {
            if name.ends_with(&exclude[1..]) {
                return true;
            }
        } else if name == exclude {
            return true;
        }
    }
    false
}

/// Collects generated stub files below `root`.
///
/// Walks with the `ignore` crate but with every ignore-file filter disabled:
/// generated trees are usually listed in `.gitignore` and still need fixing.
/// Directories matching `exclude` or the default exclusions are pruned.
///
/// # Returns
/// Every file whose name ends in one of the stub suffixes, paired with its kind.
#[must_use]
pub fn collect_stub_files(
    root: &Path,
    exclude: &[String],
    verbose: bool,
) -> Vec<(StubKind, PathBuf)> {
    use ignore::WalkBuilder;

    let mut all_excludes: Vec<String> = exclude.to_vec();
    all_excludes.extend(DEFAULT_EXCLUDE_FOLDERS().iter().map(|&s| s.to_owned()));

    let root_for_filter = root.to_path_buf();

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| {
            if entry.path() == root_for_filter {
                return true;
            }
            if !entry.file_type().is_some_and(|ft| ft.is_dir()) {
                return true;
            }
            if let Some(name) = entry.file_name().to_str() {
                if is_excluded(name, &all_excludes) {
                    return false;
                }
            }
            true
        })
        .build();

    let mut files = Vec::new();

    for result in walker {
        match result {
            Ok(entry) => {
                if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                    continue;
                }
                let Some(name) = entry.file_name().to_str() else {
                    continue;
                };
                if let Some(kind) = StubKind::from_file_name(name) {
                    files.push((kind, entry.into_path()));
                }
            }
            Err(e) => {
                if verbose {
                    eprintln!("[VERBOSE] Walk error: {e}");
                }
            }
        }
    }

    files
}
