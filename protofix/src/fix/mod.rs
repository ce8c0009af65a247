//! Import fixing.
//!
//! `LineRewriter` turns one absolute `_pb2` import into a package-relative
//! one; `process_file` applies it to a whole file and replaces the file
//! atomically.

mod file;
mod rewriter;

pub use file::{process_file, FileReport};
pub use rewriter::{LineRewriter, Rewrite};
