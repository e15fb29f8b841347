//! CLI logic for the Asterism layout tool.
//!
//! This module contains the core CLI logic for the Asterism layout tool.

pub mod error_adapter;

mod args;
mod config;
mod output;

pub use args::Args;

use std::fs;

use log::info;

use asterism::{AsterismError, LayoutBuilder, SkillRecord};

use crate::output::LayoutArtifact;

/// Run the Asterism CLI application
///
/// This function reads skill records from the input file, lays the skill
/// graph out in space, and writes the resulting JSON artifact to the output
/// file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `AsterismError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Record parsing errors
/// - Layout errors
/// - Export errors
pub fn run(args: &Args) -> Result<(), AsterismError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing records"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read and parse the input records
    let source = fs::read_to_string(&args.input)?;
    let records: Vec<SkillRecord> = serde_json::from_str(&source)
        .map_err(|err| AsterismError::Records(format!("invalid records file: {err}")))?;

    // Lay the graph out using the LayoutBuilder API
    let builder = LayoutBuilder::new(app_config);
    let mut arena = builder.build_graph(&records)?;
    let outcome = builder.layout(&mut arena)?;

    // Write output file
    let artifact = LayoutArtifact::from_arena(&arena);
    fs::write(&args.output, artifact.to_json()?)?;

    info!(
        output_file = args.output,
        iterations = outcome.iterations(),
        converged = outcome.converged();
        "Layout exported successfully"
    );

    Ok(())
}
