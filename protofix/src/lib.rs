//! Core library for protofix.
//!
//! protoc's Python generator writes imports that assume every `*_pb2` module
//! sits in one flat directory. Once the output is arranged into packages those
//! imports break. This library indexes the generated files under a root and
//! rewrites their imports into package-relative form.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

/// Module containing shared constants and regex patterns.
pub mod constants;

/// Module defining the error type for fix runs.
pub mod error;

/// Module for discovering generated files and indexing them by logical name.
pub mod index;

/// Module classifying source lines into import shapes.
pub mod classify;

/// Module computing relative import paths between package directories.
pub mod resolve;

/// Module containing the line rewriter and file processor.
pub mod fix;

/// Module containing utility functions.
pub mod utils;

/// Module for loading configuration.
pub mod config;

/// Module defining the command-line interface arguments.
pub mod cli;

/// Module for handling CLI commands and their execution logic.
pub mod commands;

/// Module defining the entry point logic shared by the binary and tests.
pub mod entry_point;
