//! Recognition of the import shapes emitted by the protobuf Python generator.

use crate::constants::{ALIASED_IMPORT_RE, SCOPED_IMPORT_RE, TYPE_STUB_IMPORT_RE};

/// A classified source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportStatement<'a> {
    /// Not an import that needs rewriting.
    NoMatch,
    /// `import foo_pb2 as foo`, or `import foo_pb2` in a type stub.
    FlatImport {
        /// Imported module name.
        module: &'a str,
        /// Alias after `as`, absent in type stubs.
        alias: Option<&'a str>,
    },
    /// `from a.b import foo_pb2`.
    ScopedImport {
        /// Dotted package path before `import`.
        package: &'a str,
        /// Imported module name.
        module: &'a str,
    },
}

/// Classifies one line, given without its line terminator.
///
/// Matching is purely syntactic; whether `module` exists is decided later.
/// Type stubs use the bare `import foo_pb2` form instead of the aliased one.
#[must_use]
pub fn classify_line(line: &str, type_stub: bool) -> ImportStatement<'_> {
    let flat = if type_stub {
        TYPE_STUB_IMPORT_RE().captures(line).and_then(|caps| {
            Some(ImportStatement::FlatImport {
                module: caps.get(1)?.as_str(),
                alias: None,
            })
        })
    } else {
        ALIASED_IMPORT_RE().captures(line).and_then(|caps| {
            Some(ImportStatement::FlatImport {
                module: caps.get(1)?.as_str(),
                alias: Some(caps.get(2)?.as_str()),
            })
        })
    };
    if let Some(statement) = flat {
        return statement;
    }

    SCOPED_IMPORT_RE()
        .captures(line)
        .and_then(|caps| {
            Some(ImportStatement::ScopedImport {
                package: caps.get(1)?.as_str(),
                module: caps.get(2)?.as_str(),
            })
        })
        .unwrap_or(ImportStatement::NoMatch)
}
