use crate::cli::Cli;
use crate::commands::{print_summary, run_fix, FixOptions};
use crate::config::Config;
use anyhow::Result;
use clap::Parser;

/// Run protofix with the given arguments, writing diagnostics to stdout.
///
/// Returns the process exit code.
///
/// # Errors
///
/// Returns an error if writing to stdout or stderr fails.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Run protofix with the given arguments, writing diagnostics to the specified writer.
///
/// This is the testable version of `run_with_args` that allows output capture.
/// Only the `path: "old" -> "new"` diagnostics (and help/version text) go to
/// `writer`; errors, verbose lines and the summary go to stderr.
///
/// # Errors
///
/// Returns an error if writing help text to `writer` fails.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["protofix".to_owned()];
    program_args.extend(args);
    let cli_var = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                write!(writer, "{e}")?;
                writer.flush()?;
                return Ok(0);
            }
            _ => {
                eprint!("{e}");
                return Ok(1);
            }
        },
    };

    if !cli_var.root_dir.exists() {
        eprintln!(
            "Error: The directory '{}' does not exist.",
            cli_var.root_dir.display()
        );
        return Ok(1);
    }
    if !cli_var.root_dir.is_dir() {
        eprintln!(
            "Error: '{}' is not a directory.",
            cli_var.root_dir.display()
        );
        return Ok(1);
    }

    let config = Config::load_from_path(&cli_var.root_dir);
    let settings = config.protofix;

    let mut exclude_folders = settings.exclude_folders.unwrap_or_default();
    exclude_folders.extend(cli_var.exclude_folders);

    let options = FixOptions {
        dry_run: cli_var.dry || settings.dry.unwrap_or(false),
        exclude_folders,
        verbose: cli_var.verbose || settings.verbose.unwrap_or(false),
    };

    if options.verbose {
        eprintln!("[VERBOSE] protofix v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("[VERBOSE] Root: {}", cli_var.root_dir.display());
        if let Some(ref path) = config.config_file_path {
            eprintln!("[VERBOSE] Config: {}", path.display());
        }
        eprintln!("[VERBOSE] Excludes: {:?}", options.exclude_folders);
        eprintln!("[VERBOSE] Dry run: {}", options.dry_run);
        eprintln!();
    }

    match run_fix(&cli_var.root_dir, &options, writer) {
        Ok(summary) => {
            print_summary(&mut std::io::stderr(), &summary)?;
            Ok(0)
        }
        Err(e) => {
            eprintln!("Error: {e}");
            Ok(1)
        }
    }
}
