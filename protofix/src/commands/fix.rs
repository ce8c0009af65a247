//! The fix command: index the root, then rewrite every generated file.

use crate::error::FixResult;
use crate::fix::{process_file, FileReport, LineRewriter};
use crate::index::{IndexOptions, ModuleIndex, StubKind};

use colored::Colorize;
use std::io::Write;
use std::path::Path;

/// Options for a fix run
#[derive(Debug, Default, Clone)]
pub struct FixOptions {
    /// Print diagnostics only, do not modify files
    pub dry_run: bool,
    /// Extra folders skipped while indexing
    pub exclude_folders: Vec<String>,
    /// Verbose output on stderr
    pub verbose: bool,
}

/// Totals for a completed run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FixSummary {
    /// Generated files that were processed
    pub files_scanned: usize,
    /// Files that contained at least one rewritable import
    pub files_changed: usize,
    /// Files actually replaced on disk
    pub files_written: usize,
    /// Import lines rewritten
    pub imports_rewritten: usize,
    /// Whether this was a dry run
    pub dry_run: bool,
}

impl FixSummary {
    fn record(&mut self, report: &FileReport) {
        self.files_scanned += 1;
        if report.rewrite_count() > 0 {
            self.files_changed += 1;
        }
        if report.written {
            self.files_written += 1;
        }
        self.imports_rewritten += report.rewrite_count();
    }
}

/// Rewrite the imports of every generated file under `root`.
///
/// Message stubs are processed first, then type stubs, then service stubs,
/// each in logical-name order. One diagnostic line per rewrite goes to
/// `writer`; everything else goes to stderr. The first error aborts the run,
/// files already rewritten stay rewritten.
///
/// # Errors
///
/// Returns the [`FixError`](crate::error::FixError) that aborted the run.
pub fn run_fix<W: Write>(
    root: &Path,
    options: &FixOptions,
    writer: &mut W,
) -> FixResult<FixSummary> {
    let index = ModuleIndex::build(
        root,
        &IndexOptions {
            exclude_folders: options.exclude_folders.clone(),
            verbose: options.verbose,
        },
    )?;

    if options.verbose {
        eprintln!(
            "[VERBOSE] Indexed {} files: {} message, {} type and {} service stubs",
            index.total(),
            index.len(StubKind::Message),
            index.len(StubKind::TypeStub),
            index.len(StubKind::Service)
        );
    }

    let rewriter = LineRewriter::new(root, &index);
    let mut summary = FixSummary {
        dry_run: options.dry_run,
        ..FixSummary::default()
    };

    for kind in StubKind::ALL {
        for location in index.modules(kind) {
            if options.verbose {
                eprintln!("[VERBOSE] Processing {}", location.relative_path.display());
            }
            let report = process_file(
                &rewriter,
                location,
                kind.is_type_stub(),
                options.dry_run,
                &mut *writer,
            )?;
            summary.record(&report);
        }
    }

    writer.flush()?;
    Ok(summary)
}

/// Print the end-of-run summary.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_summary<W: Write>(writer: &mut W, summary: &FixSummary) -> std::io::Result<()> {
    if summary.files_scanned == 0 {
        writeln!(writer, "{}", "No generated *_pb2 files found.".yellow())?;
        return Ok(());
    }

    writeln!(
        writer,
        "{} {} import(s) in {} of {} file(s)",
        if summary.dry_run {
            "Would rewrite".cyan().bold()
        } else {
            "Rewrote".green().bold()
        },
        summary.imports_rewritten,
        summary.files_changed,
        summary.files_scanned
    )?;

    if summary.dry_run && summary.imports_rewritten > 0 {
        writeln!(writer, "{}", "[DRY-RUN] No files were modified.".yellow())?;
    }
    Ok(())
}
