//! CLI logic for the Trellis layout tool.
//!
//! This module contains the core CLI logic for the Trellis layout tool.

pub mod error_adapter;

mod args;
mod config;
mod report;

pub use args::Args;
pub use error_adapter::ErrorAdapter;

use std::fs;

use log::info;

use trellis::{LayoutBuilder, TrellisError};

use report::{LayoutReport, SchemaFile};

/// Run the Trellis CLI application
///
/// This function reads a declarative schema file, computes the grid layout,
/// and writes the resulting report to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `TrellisError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Schema parsing or validation errors
/// - Report serialization errors
pub fn run(args: &Args) -> Result<(), TrellisError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing schema"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read and parse the schema file
    let source = fs::read_to_string(&args.input)?;
    let schema: SchemaFile = toml::from_str(&source)
        .map_err(|err| TrellisError::Schema(format!("failed to parse schema file: {err}")))?;
    let SchemaFile {
        mut domains,
        relationships,
    } = schema;

    // Compute the layout
    let builder = LayoutBuilder::new(app_config.layout().clone());
    let grid = builder.compute(&mut domains, &relationships)?;

    // Write the report
    let report = LayoutReport::new(grid, &domains, app_config.output());
    let rendered =
        toml::to_string_pretty(&report).map_err(|err| TrellisError::Export(Box::new(err)))?;
    fs::write(&args.output, rendered)?;

    info!(output_file = args.output; "Layout report written");

    Ok(())
}
