//! Relative import paths between directories under the root.

use std::path::Path;

use crate::utils::slash_path;

/// Relative location of one package directory as seen from another.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RelativeImport {
    /// Number of parent directories to climb.
    pub up_levels: usize,
    /// Dotted path to descend after climbing; empty when none.
    pub down_path: String,
}

impl RelativeImport {
    /// Renders the `from` target: one dot, one more per level climbed, then the descent.
    ///
    /// ```
    /// use protofix::resolve::RelativeImport;
    ///
    /// let rel = RelativeImport { up_levels: 1, down_path: "x.y".to_owned() };
    /// assert_eq!(rel.module_path(), "..x.y");
    /// ```
    #[must_use]
    pub fn module_path(&self) -> String {
        let mut out = ".".repeat(self.up_levels + 1);
        out.push_str(&self.down_path);
        out
    }
}

/// Computes how to reach `to_dir` from `from_dir`. Both are relative to the root.
///
/// Purely lexical: the common leading components are dropped, each remaining
/// component of `from_dir` costs one level up, and what is left of `to_dir`
/// becomes the dotted descent.
#[must_use]
pub fn relative_import(from_dir: &Path, to_dir: &Path) -> RelativeImport {
    let from = slash_path(from_dir);
    let to = slash_path(to_dir);
    let from_parts: Vec<&str> = from.split('/').filter(|s| !s.is_empty()).collect();
    let to_parts: Vec<&str> = to.split('/').filter(|s| !s.is_empty()).collect();

    let common = from_parts
        .iter()
        .zip(&to_parts)
        .take_while(|(a, b)| a == b)
        .count();

    RelativeImport {
        up_levels: from_parts.len() - common,
        down_path: to_parts[common..].join("."),
    }
}

/// Number of levels between `dir` and the root.
#[must_use]
pub fn depth_below_root(dir: &Path) -> usize {
    relative_import(dir, Path::new("")).up_levels
}
