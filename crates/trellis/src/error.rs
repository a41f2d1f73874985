//! Error types for Trellis operations.
//!
//! This module provides the main error type [`TrellisError`] which wraps
//! the error conditions that can occur while loading schemas, computing
//! layouts, and writing reports.

use std::io;

use thiserror::Error;

/// The main error type for Trellis operations.
///
/// The layout computation itself degrades softly (dangling relationship
/// endpoints are dropped, disconnected domains fall back to input-order
/// placement), so `Schema` is only produced for input the type system
/// cannot rule out, such as a table claimed by two domains.
#[derive(Debug, Error)]
pub enum TrellisError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}
