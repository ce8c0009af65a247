//! Index of generated modules under a root directory.
//!
//! Every generated file is keyed by its logical name: the path relative to the
//! root, cut at the first `.` and with separators turned into dots. So
//! `api/v1/user_pb2.py` becomes `api.v1.user_pb2`.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::constants::{MESSAGE_STUB_SUFFIX, SERVICE_STUB_SUFFIX, TYPE_STUB_SUFFIX};
use crate::error::{FixError, FixResult};
use crate::utils::{collect_stub_files, slash_path};

/// The three categories of generated files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StubKind {
    /// `*_pb2.py`: message definitions.
    Message,
    /// `*_pb2.pyi`: type declarations for a message module.
    TypeStub,
    /// `*_pb2_grpc.py`: gRPC client/server bindings.
    Service,
}

impl StubKind {
    /// All kinds, in processing order.
    pub const ALL: [Self; 3] = [Self::Message, Self::TypeStub, Self::Service];

    /// Classifies a file name by its suffix.
    #[must_use]
    pub fn from_file_name(name: &str) -> Option<Self> {
        if name.ends_with(SERVICE_STUB_SUFFIX) {
            Some(Self::Service)
        } else if name.ends_with(TYPE_STUB_SUFFIX) {
            Some(Self::TypeStub)
        } else if name.ends_with(MESSAGE_STUB_SUFFIX) {
            Some(Self::Message)
        } else {
            None
        }
    }

    /// Whether files of this kind are type stubs (different import shapes apply).
    #[must_use]
    pub const fn is_type_stub(self) -> bool {
        matches!(self, Self::TypeStub)
    }
}

impl fmt::Display for StubKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message => write!(f, "message stub"),
            Self::TypeStub => write!(f, "type stub"),
            Self::Service => write!(f, "service stub"),
        }
    }
}

/// One discovered generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleLocation {
    /// Dotted module identifier, e.g. `api.v1.user_pb2`.
    pub logical_name: String,
    /// Containing directory, relative to the root.
    pub directory: PathBuf,
    /// Full filesystem path.
    pub absolute_path: PathBuf,
    /// Path relative to the root, used in diagnostics.
    pub relative_path: PathBuf,
}

impl ModuleLocation {
    /// Builds the location of `path`, which must lie under `root`.
    ///
    /// Returns `None` when `path` is not below `root`.
    #[must_use]
    pub fn new(root: &Path, path: &Path) -> Option<Self> {
        let relative_path = path.strip_prefix(root).ok()?.to_path_buf();
        let directory = relative_path
            .parent()
            .map_or_else(PathBuf::new, Path::to_path_buf);
        Some(Self {
            logical_name: logical_name(&relative_path),
            directory,
            absolute_path: path.to_path_buf(),
            relative_path,
        })
    }
}

/// Derives the logical name from a root-relative path.
///
/// Everything from the first `.` on is dropped, so a dotted directory name
/// also cuts the name short.
#[must_use]
pub fn logical_name(relative_path: &Path) -> String {
    let joined = slash_path(relative_path);
    let stem = joined.split('.').next().unwrap_or_default();
    stem.replace('/', ".")
}

/// Options controlling index construction.
#[derive(Debug, Default, Clone)]
pub struct IndexOptions {
    /// Extra directory names (or `*.suffix` patterns) to skip.
    pub exclude_folders: Vec<String>,
    /// Report walk errors on stderr.
    pub verbose: bool,
}

/// Logical name to location, one map per stub kind.
///
/// Built once per run and only read afterwards.
#[derive(Debug, Default, Clone)]
pub struct ModuleIndex {
    messages: BTreeMap<String, ModuleLocation>,
    type_stubs: BTreeMap<String, ModuleLocation>,
    services: BTreeMap<String, ModuleLocation>,
}

impl ModuleIndex {
    /// Scans `root` and indexes every generated file.
    ///
    /// # Errors
    ///
    /// Returns [`FixError::InvalidRoot`] if `root` is not a directory and
    /// [`FixError::DuplicateModuleName`] if two files share a logical name
    /// within one kind.
    pub fn build(root: &Path, options: &IndexOptions) -> FixResult<Self> {
        if !root.is_dir() {
            return Err(FixError::InvalidRoot(root.to_path_buf()));
        }

        let mut index = Self::default();
        for (kind, path) in collect_stub_files(root, &options.exclude_folders, options.verbose) {
            if let Some(location) = ModuleLocation::new(root, &path) {
                index.insert(kind, location)?;
            }
        }
        Ok(index)
    }

    /// Adds a location, rejecting a second file with the same logical name.
    ///
    /// # Errors
    ///
    /// Returns [`FixError::DuplicateModuleName`] on a collision.
    pub fn insert(&mut self, kind: StubKind, location: ModuleLocation) -> FixResult<()> {
        match self.map_mut(kind).entry(location.logical_name.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(location);
                Ok(())
            }
            Entry::Occupied(existing) => Err(FixError::DuplicateModuleName {
                kind,
                name: location.logical_name,
                first: existing.get().absolute_path.clone(),
                second: location.absolute_path,
            }),
        }
    }

    /// Looks up a module of the given kind by logical name.
    #[must_use]
    pub fn get(&self, kind: StubKind, logical_name: &str) -> Option<&ModuleLocation> {
        self.map(kind).get(logical_name)
    }

    /// Resolves the module named by a flat `import NAME` against the message stubs.
    ///
    /// An exact logical-name match wins. Otherwise a nested module whose last
    /// name segment equals `name` is used, provided exactly one such module
    /// exists; an ambiguous base name resolves to nothing.
    #[must_use]
    pub fn resolve_message(&self, name: &str) -> Option<&ModuleLocation> {
        if let Some(location) = self.messages.get(name) {
            return Some(location);
        }
        let mut candidates = self
            .messages
            .values()
            .filter(|location| location.logical_name.rsplit('.').next() == Some(name));
        match (candidates.next(), candidates.next()) {
            (Some(only), None) => Some(only),
            _ => None,
        }
    }

    /// Iterates the modules of one kind in logical-name order.
    pub fn modules(&self, kind: StubKind) -> impl Iterator<Item = &ModuleLocation> {
        self.map(kind).values()
    }

    /// Number of indexed modules of one kind.
    #[must_use]
    pub fn len(&self, kind: StubKind) -> usize {
        self.map(kind).len()
    }

    /// Total number of indexed files.
    #[must_use]
    pub fn total(&self) -> usize {
        StubKind::ALL.iter().map(|&kind| self.len(kind)).sum()
    }

    fn map(&self, kind: StubKind) -> &BTreeMap<String, ModuleLocation> {
        match kind {
            StubKind::Message => &self.messages,
            StubKind::TypeStub => &self.type_stubs,
            StubKind::Service => &self.services,
        }
    }

    fn map_mut(&mut self, kind: StubKind) -> &mut BTreeMap<String, ModuleLocation> {
        match kind {
            StubKind::Message => &mut self.messages,
            StubKind::TypeStub => &mut self.type_stubs,
            StubKind::Service => &mut self.services,
        }
    }
}
