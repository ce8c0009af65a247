use clap::Parser;
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.protofix.toml):
  Looked up from ROOT_DIR upwards. A [tool.protofix] table in
  pyproject.toml is used when no .protofix.toml is found.

  [protofix]
  exclude_folders = [\"legacy\"]  # Skipped while indexing
  dry = false                   # Same as --dry
  verbose = false               # Same as --verbose
";

/// Fix relative imports (from and to nested sub-directories) within compiled
/// `*_pb2.py`, `*_pb2.pyi` and `*_pb2_grpc.py` Protobuf files.
#[derive(Parser, Debug)]
#[command(name = "protofix", version, about, after_help = CONFIG_HELP)]
pub struct Cli {
    /// Root directory of the generated code.
    pub root_dir: PathBuf,

    /// Do not write out the changes to the files.
    #[arg(long)]
    pub dry: bool,

    /// Enable verbose output on stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Folder names to skip while indexing (repeatable).
    #[arg(long = "exclude-folder", value_name = "NAME")]
    pub exclude_folders: Vec<String>,
}
