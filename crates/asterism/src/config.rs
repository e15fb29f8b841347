//! Configuration types for layout runs.
//!
//! This module provides configuration structures that control how graphs are
//! relaxed and which force model drives them. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources; fields
//! left out of a configuration file fall back to the documented defaults.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining relaxation and force settings.
//! - [`LayoutConfig`] - Controls the relaxation loop: cooling, convergence, iteration cap.
//! - [`ForceConfig`] - Selects a force [`Model`] and sets its constants.
//!
//! # Example
//!
//! ```
//! # use asterism::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.layout().max_iterations(), 100);
//! assert_eq!(config.force().ideal_length(), 1.0);
//! ```

use serde::Deserialize;

use crate::graph::DEFAULT_NODE_SIZE;

/// Top-level configuration combining relaxation and force settings.
///
/// Groups [`LayoutConfig`] and [`ForceConfig`] into a single configuration
/// root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Relaxation loop configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Force model configuration section.
    #[serde(default)]
    force: ForceConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified relaxation and force configurations.
    ///
    /// # Arguments
    ///
    /// * `layout` - Relaxation loop settings.
    /// * `force` - Force model selection and constants.
    pub fn new(layout: LayoutConfig, force: ForceConfig) -> Self {
        Self { layout, force }
    }

    /// Returns the relaxation loop configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the force model configuration.
    pub fn force(&self) -> &ForceConfig {
        &self.force
    }
}

/// Relaxation loop configuration.
///
/// Controls how the iterative solver cools down, when it considers a layout
/// converged, and how many iterations it may spend.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Factor applied to the cooling multiplier after every iteration.
    #[serde(default = "default_cool_down")]
    cool_down: f32,

    /// Per-node force budget below which the layout counts as converged.
    #[serde(default = "default_error_threshold")]
    error_threshold: f32,

    /// Hard cap on the number of iterations.
    #[serde(default = "default_max_iterations")]
    max_iterations: u32,

    /// Radius of the starting ring nodes are seeded on, if any.
    #[serde(default)]
    ring_radius: Option<f32>,
}

fn default_cool_down() -> f32 {
    0.99
}

fn default_error_threshold() -> f32 {
    0.1
}

fn default_max_iterations() -> u32 {
    100
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            cool_down: default_cool_down(),
            error_threshold: default_error_threshold(),
            max_iterations: default_max_iterations(),
            ring_radius: None,
        }
    }
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`] with the specified solver settings.
    ///
    /// # Arguments
    ///
    /// * `cool_down` - Factor applied to the cooling multiplier each iteration.
    /// * `error_threshold` - Per-node force budget for convergence.
    /// * `max_iterations` - Hard cap on iterations.
    /// * `ring_radius` - Optional radius for seeding starting positions.
    pub fn new(
        cool_down: f32,
        error_threshold: f32,
        max_iterations: u32,
        ring_radius: Option<f32>,
    ) -> Self {
        Self {
            cool_down,
            error_threshold,
            max_iterations,
            ring_radius,
        }
    }

    /// Returns the cooling factor applied after every iteration.
    pub fn cool_down(&self) -> f32 {
        self.cool_down
    }

    /// Returns the per-node force budget for convergence.
    pub fn error_threshold(&self) -> f32 {
        self.error_threshold
    }

    /// Returns the iteration cap.
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Returns the seeding ring radius, or `None` to keep starting positions.
    pub fn ring_radius(&self) -> Option<f32> {
        self.ring_radius
    }
}

/// Force model configuration.
///
/// Selects the force [`Model`] and carries the constants it is built from.
#[derive(Debug, Clone, Deserialize)]
pub struct ForceConfig {
    /// Which force model to run.
    #[serde(default)]
    model: Model,

    /// Repulsion constant between every pair of nodes.
    #[serde(default = "default_repulsion")]
    repulsion: f32,

    /// Attraction constant along every edge.
    #[serde(default = "default_attraction")]
    attraction: f32,

    /// Edge length at which the spring force is zero.
    #[serde(default = "default_ideal_length")]
    ideal_length: f32,

    /// Render size assigned to nodes built from input records.
    #[serde(default = "default_node_size")]
    node_size: f32,
}

fn default_repulsion() -> f32 {
    0.25
}

fn default_attraction() -> f32 {
    0.25
}

fn default_ideal_length() -> f32 {
    1.0
}

fn default_node_size() -> f32 {
    DEFAULT_NODE_SIZE
}

impl Default for ForceConfig {
    fn default() -> Self {
        Self {
            model: Model::default(),
            repulsion: default_repulsion(),
            attraction: default_attraction(),
            ideal_length: default_ideal_length(),
            node_size: default_node_size(),
        }
    }
}

impl ForceConfig {
    /// Creates a new [`ForceConfig`] with the specified model and constants.
    ///
    /// # Arguments
    ///
    /// * `model` - Force model variant to run.
    /// * `repulsion` - Repulsion constant between node pairs.
    /// * `attraction` - Attraction constant along edges.
    /// * `ideal_length` - Edge length at which the spring force is zero.
    /// * `node_size` - Render size for nodes built from input records.
    pub fn new(
        model: Model,
        repulsion: f32,
        attraction: f32,
        ideal_length: f32,
        node_size: f32,
    ) -> Self {
        Self {
            model,
            repulsion,
            attraction,
            ideal_length,
            node_size,
        }
    }

    /// Returns the configured force model variant.
    pub fn model(&self) -> Model {
        self.model
    }

    /// Returns the repulsion constant.
    pub fn repulsion(&self) -> f32 {
        self.repulsion
    }

    /// Returns the attraction constant.
    pub fn attraction(&self) -> f32 {
        self.attraction
    }

    /// Returns the ideal edge length.
    pub fn ideal_length(&self) -> f32 {
        self.ideal_length
    }

    /// Returns the render size for nodes built from input records.
    pub fn node_size(&self) -> f32 {
        self.node_size
    }
}

/// Force model variants understood by the configuration layer.
///
/// Every configuration names a concrete model, so a layout can never be
/// requested without one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Model {
    /// The spring embedder after Eades: logarithmic springs along edges,
    /// inverse-square repulsion between all pairs.
    #[default]
    Eades,
}
