use regex::Regex;
use rustc_hash::FxHashSet;
use std::sync::OnceLock;

/// Name of the project-level configuration file.
pub const CONFIG_FILENAME: &str = ".protofix.toml";

/// Name of the Python project file that may carry a `[tool.protofix]` table.
pub const PYPROJECT_FILENAME: &str = "pyproject.toml";

/// File suffix of generated message modules.
pub const MESSAGE_STUB_SUFFIX: &str = "_pb2.py";

/// File suffix of generated type stubs.
pub const TYPE_STUB_SUFFIX: &str = "_pb2.pyi";

/// File suffix of generated gRPC service modules.
pub const SERVICE_STUB_SUFFIX: &str = "_pb2_grpc.py";

/// Regex for `import foo_pb2 as foo` in `.py` files.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_aliased_import_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"^import\s([^\s\.]*_pb2)\sas\s(.*)$").expect("Invalid aliased import regex pattern")
    })
}

/// Regex for bare `import foo_pb2` in `.pyi` files.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_type_stub_import_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"^import\s([^\s\.]*_pb2)$").expect("Invalid type stub import regex pattern")
    })
}

/// Regex for `from a.b import foo_pb2`. Relative packages (leading dot) never match.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_scoped_import_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"^from\s([^\s\.]+\S*)\simport\s(.*_pb2)$")
            .expect("Invalid scoped import regex pattern")
    })
}

/// Set of folders skipped while indexing.
pub fn get_default_exclude_folders() -> &'static FxHashSet<&'static str> {
    static SET: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| {
        let mut s = FxHashSet::default();
        s.insert(".git");
        s.insert("__pycache__");
        s.insert(".mypy_cache");
        s.insert(".tox");
        s.insert("venv");
        s.insert(".venv");
        s.insert("node_modules");
        s
    })
}

pub use get_aliased_import_re as ALIASED_IMPORT_RE;
pub use get_default_exclude_folders as DEFAULT_EXCLUDE_FOLDERS;
pub use get_scoped_import_re as SCOPED_IMPORT_RE;
pub use get_type_stub_import_re as TYPE_STUB_IMPORT_RE;
