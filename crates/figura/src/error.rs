//! Error types for Figura operations.
//!
//! This module provides the main error type [`FiguraError`] which wraps
//! the error conditions that can occur while reading a request, resolving
//! its geometry and exporting the result.

use std::{io, ops::Range};

use thiserror::Error;

/// The main error type for Figura operations.
///
/// Invalid shape/orientation combinations are not errors; they resolve to
/// sentinel geometry instead.
///
/// # Diagnostic Variants
///
/// The `Request` variant keeps the request source and the byte span of the
/// problem, when the underlying parser reports one, for rich error reporting.
#[derive(Debug, Error)]
pub enum FiguraError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{message}")]
    Request {
        message: String,
        span: Option<Range<usize>>,
        src: String,
    },

    #[error("Invalid {name}: {value} (must be a finite positive number)")]
    InvalidDimension { name: &'static str, value: f32 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for FiguraError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl FiguraError {
    /// Create a new `Request` error from a TOML parse failure and its source.
    pub fn new_request_error(err: &toml::de::Error, src: impl Into<String>) -> Self {
        Self::Request {
            message: err.message().to_string(),
            span: err.span(),
            src: src.into(),
        }
    }
}
