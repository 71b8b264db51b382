//! Figura CLI library
//!
//! This module contains the core CLI logic for the Figura diagram tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use figura::{DiagramBuilder, FiguraError};

/// Run the Figura CLI application
///
/// Reads a TOML request, resolves its geometry and writes the rendered
/// document in the requested format.
///
/// # Errors
///
/// Returns `FiguraError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Request parsing errors
/// - Invalid dimensions
/// - Export errors
pub fn run(args: &Args) -> Result<(), FiguraError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing diagram request"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = DiagramBuilder::new(app_config);
    let request = builder.parse(&source)?;
    builder.write_output(&request, args.format, &args.output)?;

    info!(output_file = args.output, format:% = args.format; "Diagram exported successfully");

    Ok(())
}
