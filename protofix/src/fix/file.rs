//! Whole-file processing: read, rewrite line by line, replace atomically.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use super::rewriter::{LineRewriter, Rewrite};
use crate::error::{FixError, FixResult};
use crate::index::ModuleLocation;
use crate::utils::{split_lines_inclusive, split_terminator};

/// Outcome of processing one file.
#[derive(Debug, Clone)]
pub struct FileReport {
    /// Rewritten lines, in file order.
    pub rewrites: Vec<Rewrite>,
    /// Whether the file on disk was replaced.
    pub written: bool,
}

impl FileReport {
    /// Number of rewritten imports.
    #[must_use]
    pub fn rewrite_count(&self) -> usize {
        self.rewrites.len()
    }
}

/// Rewrites every import line of `location`.
///
/// Outside dry-run mode, a file whose content changed is replaced with the new
/// content; lines keep their original terminators. A diagnostic line is
/// written to `writer` for each rewrite once the whole file has been handled,
/// so a file that fails part way reports nothing.
///
/// # Errors
///
/// Returns [`FixError::FileAccess`] if the file cannot be read or replaced,
/// [`FixError::UnresolvedModule`] for an import that cannot be resolved (the
/// file is then left untouched) and [`FixError::Output`] if `writer` fails.
pub fn process_file<W: Write>(
    rewriter: &LineRewriter<'_>,
    location: &ModuleLocation,
    type_stub: bool,
    dry_run: bool,
    writer: &mut W,
) -> FixResult<FileReport> {
    let path = &location.absolute_path;
    let source = fs::read_to_string(path).map_err(|e| FixError::file_access(path, e))?;

    let mut output = String::with_capacity(source.len());
    let mut rewrites = Vec::new();

    for (i, raw) in split_lines_inclusive(&source).into_iter().enumerate() {
        let (line, terminator) = split_terminator(raw);
        match rewriter.rewrite_line(location, type_stub, i + 1, line)? {
            Some(rewrite) => {
                output.push_str(&rewrite.replacement);
                output.push_str(terminator);
                rewrites.push(rewrite);
            }
            None => output.push_str(raw),
        }
    }

    let written = !dry_run && output != source;
    if written {
        replace_contents(path, &output)?;
    }

    for rewrite in &rewrites {
        writeln!(writer, "{}", rewrite.diagnostic(&location.relative_path))?;
    }

    Ok(FileReport { rewrites, written })
}

/// Replaces the contents of `path` with `contents`.
///
/// The data goes to a temporary file next to `path` which is then renamed
/// over it, so a failure never leaves a half-written file behind.
fn replace_contents(path: &Path, contents: &str) -> FixResult<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let permissions = fs::metadata(path)
        .map_err(|e| FixError::file_access(path, e))?
        .permissions();

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| FixError::file_access(path, e))?;
    tmp.write_all(contents.as_bytes())
        .and_then(|()| tmp.as_file().sync_all())
        .and_then(|()| tmp.as_file().set_permissions(permissions))
        .map_err(|e| FixError::file_access(path, e))?;
    tmp.persist(path)
        .map_err(|e| FixError::file_access(path, e.error))?;
    Ok(())
}
