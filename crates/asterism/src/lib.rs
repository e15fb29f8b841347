//! Asterism - A force-directed 3D layout engine for small undirected graphs.
//!
//! Asterism builds a graph out of skill records, relaxes it in three
//! dimensions with a spring embedder, and hands the resulting positions to
//! whatever renderer draws the constellation. The solver and the force model
//! are separate pieces, so either can be used on its own.

pub mod config;
pub mod records;

mod error;
mod geometry;
mod graph;
mod layout;

pub use config::{AppConfig, ForceConfig, LayoutConfig, Model};
pub use error::AsterismError;
pub use geometry::{GeometryError, Vector};
pub use graph::{DEFAULT_NODE_SIZE, GraphNode, NodeArena, NodeId, POSITION_DIMENSIONS};
pub use layout::eades::Eades;
pub use layout::{ForceModel, LayoutOutcome, SpringLayout};
pub use records::SkillRecord;

use log::{debug, info};

/// Builder for assembling and laying out skill graphs.
///
/// This provides an API for turning a list of [`SkillRecord`]s into a
/// positioned [`NodeArena`], with the solver and force model assembled from
/// an [`AppConfig`].
///
/// # Examples
///
/// ```rust
/// use asterism::{LayoutBuilder, SkillRecord};
///
/// let records = vec![
///     SkillRecord::new("Rust", ["Systems", "CLI"]),
///     SkillRecord::new("Systems", ["CLI"]),
/// ];
///
/// let builder = LayoutBuilder::default();
/// let mut arena = builder.build_graph(&records)?;
/// let outcome = builder.layout(&mut arena)?;
///
/// assert_eq!(arena.len(), 3);
/// assert!(outcome.iterations() > 0);
/// # Ok::<(), asterism::AsterismError>(())
/// ```
#[derive(Default)]
pub struct LayoutBuilder {
    config: AppConfig,
}

impl LayoutBuilder {
    /// Create a new layout builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including solver and force settings
    ///
    /// # Examples
    ///
    /// ```rust
    /// use asterism::{LayoutBuilder, config::AppConfig};
    ///
    /// let config = AppConfig::default();
    /// let builder = LayoutBuilder::new(config);
    /// ```
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Build a node arena from skill records.
    ///
    /// Every distinct label becomes one node sized per the force
    /// configuration, and every relation becomes one undirected edge.
    ///
    /// # Arguments
    ///
    /// * `records` - Skill records as described in [`records`]
    ///
    /// # Errors
    ///
    /// Returns [`AsterismError::Config`] for a non-positive configured node
    /// size, or [`AsterismError::Records`] for an empty list or blank
    /// labels.
    pub fn build_graph(&self, records: &[SkillRecord]) -> Result<NodeArena<String>, AsterismError> {
        let node_size = self.config.force().node_size();
        if node_size <= 0.0 {
            return Err(AsterismError::Config(format!(
                "node_size must be positive, got {node_size}"
            )));
        }

        info!(record_count = records.len(); "Building skill graph");
        let arena = records::build_graph(records, node_size)?;
        debug!(
            node_count = arena.len(),
            edge_count = arena.edges().count();
            "Graph built"
        );
        Ok(arena)
    }

    /// Relax an arena with the configured solver and force model.
    ///
    /// When the configuration names a ring radius, nodes are first spread
    /// over a horizontal ring of that radius; otherwise their current
    /// positions are kept as the starting state. Positions are updated in
    /// place.
    ///
    /// # Errors
    ///
    /// Returns [`AsterismError::Config`] or [`AsterismError::Layout`] for
    /// invalid configuration values, and [`AsterismError::Layout`] for an
    /// empty arena. A rejected configuration leaves the arena untouched.
    pub fn layout<T>(&self, arena: &mut NodeArena<T>) -> Result<LayoutOutcome, AsterismError> {
        // Reject invalid configuration before seeding moves any node.
        let engine = SpringLayout::from_config(self.config.layout())?;
        let mut model = match self.config.force().model() {
            Model::Eades => Eades::from_config(self.config.force())?,
        };

        if let Some(radius) = self.config.layout().ring_radius() {
            if radius <= 0.0 {
                return Err(AsterismError::Config(format!(
                    "ring_radius must be positive, got {radius}"
                )));
            }
            debug!(ring_radius = radius; "Seeding starting positions on a ring");
            arena.seed_ring(radius);
        }

        let outcome = engine.layout(arena, &mut model)?;

        info!(
            iterations = outcome.iterations(),
            error = outcome.error(),
            converged = outcome.converged();
            "Layout finished"
        );
        Ok(outcome)
    }
}
