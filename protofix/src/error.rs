//! Error type shared by indexing, rewriting and file processing.

use std::path::PathBuf;

use crate::index::StubKind;

/// Errors that abort a fix run.
#[derive(Debug, thiserror::Error)]
pub enum FixError {
    /// The root directory does not exist or is not a directory.
    #[error("'{}' is not an existing directory.", .0.display())]
    InvalidRoot(PathBuf),

    /// An import names a module that is not a generated message stub under the root.
    #[error("{file}:{line_number}: cannot resolve module '{module}' in \"{line}\"")]
    UnresolvedModule {
        /// File containing the import, relative to the root.
        file: String,
        /// 1-based line number of the import.
        line_number: usize,
        /// The import line as it appears in the file.
        line: String,
        /// The module name that was looked up.
        module: String,
    },

    /// Reading or writing a stub file failed.
    #[error("Failed to access {}: {source}", path.display())]
    FileAccess {
        /// Path of the file that could not be accessed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Writing a diagnostic line to the output failed.
    #[error("Failed to write diagnostics: {0}")]
    Output(#[from] std::io::Error),

    /// Two files map to the same logical name within one category.
    #[error("Duplicate {kind} module '{name}': {} and {}", first.display(), second.display())]
    DuplicateModuleName {
        /// Category in which the collision happened.
        kind: StubKind,
        /// The colliding logical name.
        name: String,
        /// Path indexed first.
        first: PathBuf,
        /// Path that collided with it.
        second: PathBuf,
    },
}

impl FixError {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for fix operations.
pub type FixResult<T> = Result<T, FixError>;
