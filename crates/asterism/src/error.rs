use thiserror::Error;

use crate::geometry::GeometryError;

/// Errors that can occur while building or laying out a graph
#[derive(Debug, Error)]
pub enum AsterismError {
    /// IO error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Vector arithmetic combined positions of different dimensions
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// Invalid graph structure or node reference
    #[error("Graph error: {0}")]
    Graph(String),

    /// Invalid layout parameters or an impossible layout request
    #[error("Layout error: {0}")]
    Layout(String),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed input records
    #[error("Record error: {0}")]
    Records(String),

    /// Failure while serializing layout results
    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}
