//! Line-level import rewriting.
//!
//! Combines [`classify_line`] with [`relative_import`] to turn the absolute
//! imports emitted by the generator into package-relative ones:
//!
//! ```text
//! import foo_pb2 as foo        ->  from ..b import foo_pb2 as foo
//! from a.b import foo_pb2      ->  from ..a.b import foo_pb2
//! ```

use std::path::Path;

use crate::classify::{classify_line, ImportStatement};
use crate::error::{FixError, FixResult};
use crate::index::{ModuleIndex, ModuleLocation};
use crate::resolve::{depth_below_root, relative_import, RelativeImport};
use crate::utils::normalize_display_path;

/// A single rewritten line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// 1-based line number in the file.
    pub line_number: usize,
    /// Line before rewriting, without terminator.
    pub original: String,
    /// Line after rewriting, without terminator.
    pub replacement: String,
}

impl Rewrite {
    /// Formats the diagnostic printed for this rewrite.
    #[must_use]
    pub fn diagnostic(&self, rel_path: &Path) -> String {
        format!(
            "{}: \"{}\" -> \"{}\"",
            normalize_display_path(rel_path),
            self.original,
            self.replacement
        )
    }
}

/// Rewrites import lines of files under one root against a built index.
#[derive(Debug, Clone, Copy)]
pub struct LineRewriter<'a> {
    root: &'a Path,
    index: &'a ModuleIndex,
}

impl<'a> LineRewriter<'a> {
    /// Create a rewriter for files under `root`.
    #[must_use]
    pub fn new(root: &'a Path, index: &'a ModuleIndex) -> Self {
        Self { root, index }
    }

    /// Rewrites one line of `importer`, given without its terminator.
    ///
    /// Returns `Ok(None)` when the line stays as it is. Flat imports in both
    /// `.py` and `.pyi` files resolve against the message stubs.
    ///
    /// # Errors
    ///
    /// Returns [`FixError::UnresolvedModule`] when a flat import names a module
    /// that is not indexed.
    pub fn rewrite_line(
        &self,
        importer: &ModuleLocation,
        type_stub: bool,
        line_number: usize,
        line: &str,
    ) -> FixResult<Option<Rewrite>> {
        let replacement = match classify_line(line, type_stub) {
            ImportStatement::NoMatch => return Ok(None),
            ImportStatement::FlatImport { module, alias } => {
                let target = self
                    .index
                    .resolve_message(module)
                    .ok_or_else(|| FixError::UnresolvedModule {
                        file: normalize_display_path(&importer.relative_path),
                        line_number,
                        line: line.to_owned(),
                        module: module.to_owned(),
                    })?;
                let rel = relative_import(&importer.directory, &target.directory);
                match alias {
                    Some(alias) => {
                        format!("from {} import {module} as {alias}", rel.module_path())
                    }
                    None => format!("from {} import {module}", rel.module_path()),
                }
            }
            ImportStatement::ScopedImport { package, module } => {
                let package_dir = self.root.join(package.replace('.', "/"));
                if !package_dir.is_dir() {
                    return Ok(None);
                }
                // The package path is kept verbatim; only the climb to the root is added.
                let rel = RelativeImport {
                    up_levels: depth_below_root(&importer.directory),
                    down_path: package.to_owned(),
                };
                format!("from {} import {module}", rel.module_path())
            }
        };

        Ok(Some(Rewrite {
            line_number,
            original: line.to_owned(),
            replacement,
        }))
    }
}
