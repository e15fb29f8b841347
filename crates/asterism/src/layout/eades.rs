//! Spring embedder force model after Eades.
//!
//! Linked nodes attract along a logarithmic spring law while every node
//! pair repels with an inverse-square law, so a relaxed edge settles at a
//! configurable ideal length.

use rand::Rng;
use rand::RngExt;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::ForceConfig;
use crate::error::AsterismError;
use crate::geometry::Vector;
use crate::graph::{GraphNode, NodeArena, NodeId, POSITION_DIMENSIONS};
use crate::layout::ForceModel;

/// Eades force model.
///
/// Holds the force constants and a random source used to break ties between
/// coincident nodes. The random source only advances when two nodes occupy
/// the same position, so layouts over non-degenerate inputs are fully
/// deterministic.
#[derive(Debug)]
pub struct Eades<R = StdRng> {
    repulsion: f32,
    attraction: f32,
    ideal_length: f32,
    rng: R,
}

impl Eades<StdRng> {
    /// Creates a model with the default constants and a freshly seeded
    /// random source.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_rng(&mut rand::rng()))
    }

    /// Creates a model from a configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`AsterismError::Config`] if any force constant is not
    /// positive.
    pub fn from_config(config: &ForceConfig) -> Result<Self, AsterismError> {
        if config.repulsion() <= 0.0 {
            return Err(AsterismError::Config(format!(
                "repulsion must be positive, got {}",
                config.repulsion()
            )));
        }
        if config.attraction() <= 0.0 {
            return Err(AsterismError::Config(format!(
                "attraction must be positive, got {}",
                config.attraction()
            )));
        }
        if config.ideal_length() <= 0.0 {
            return Err(AsterismError::Config(format!(
                "ideal_length must be positive, got {}",
                config.ideal_length()
            )));
        }

        let mut model = Self::new();
        model
            .set_repulsion(config.repulsion())
            .set_attraction(config.attraction())
            .set_ideal_length(config.ideal_length());
        Ok(model)
    }
}

impl Default for Eades {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Eades<R> {
    /// Creates a model with the default constants and the given random
    /// source.
    ///
    /// Injecting a seeded source makes tie-breaking reproducible in tests.
    pub fn with_rng(rng: R) -> Self {
        Self {
            repulsion: 0.25,
            attraction: 0.25,
            ideal_length: 1.0,
            rng,
        }
    }

    /// Set the repulsion constant between node pairs
    pub fn set_repulsion(&mut self, repulsion: f32) -> &mut Self {
        self.repulsion = repulsion;
        self
    }

    /// Set the attraction constant along edges
    pub fn set_attraction(&mut self, attraction: f32) -> &mut Self {
        self.attraction = attraction;
        self
    }

    /// Set the edge length at which the spring force is zero
    pub fn set_ideal_length(&mut self, ideal_length: f32) -> &mut Self {
        self.ideal_length = ideal_length;
        self
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

    /// Draws a random unit vector to stand in for an undefined direction.
    fn jitter(&mut self) -> Vector {
        loop {
            let components: Vec<f32> = (0..POSITION_DIMENSIONS)
                .map(|_| self.rng.random::<f32>())
                .collect();
            let candidate = Vector::from(components);
            // An all-zero draw has no direction to offer; draw again.
            if !candidate.is_zero() {
                return candidate.normalized();
            }
        }
    }

    /// Inverse-square repulsion pushing `node` away from `other`.
    fn pair_repulsion<T>(
        &mut self,
        node: &GraphNode<T>,
        other: &GraphNode<T>,
    ) -> Result<Vector, AsterismError> {
        let distance = node.distance_or(other, 1.0)?;
        let magnitude = self.repulsion / (distance * distance);
        let direction = other.direction_to_or_else(node, || self.jitter())?;
        Ok(direction.scale(magnitude))
    }
}

impl<T, R: Rng> ForceModel<T> for Eades<R> {
    fn attractive_force(
        &mut self,
        node: NodeId,
        arena: &NodeArena<T>,
    ) -> Result<Vector, AsterismError> {
        let subject = arena.node(node).ok_or_else(|| {
            AsterismError::Graph(format!("node {node:?} does not exist in this arena"))
        })?;

        let mut total = Vector::zero(subject.position().dimensions());
        for neighbor_id in subject.links() {
            let neighbor = arena.node_unchecked(*neighbor_id);

            let distance = subject.distance_or(neighbor, self.ideal_length)?;
            let magnitude = self.attraction * (distance / self.ideal_length).log10();
            let direction = subject.direction_to_or_else(neighbor, || self.jitter())?;
            let spring = direction.scale(magnitude);

            // The pairwise repulsion between the endpoints is folded into the
            // spring term here, so an edge is not counted by both force sums.
            let counteracted = spring.sub(&self.pair_repulsion(subject, neighbor)?)?;
            total = total.add(&counteracted)?;
        }
        Ok(total)
    }

    fn repulsive_force(
        &mut self,
        node: NodeId,
        arena: &NodeArena<T>,
    ) -> Result<Vector, AsterismError> {
        let subject = arena.node(node).ok_or_else(|| {
            AsterismError::Graph(format!("node {node:?} does not exist in this arena"))
        })?;

        let mut total = Vector::zero(subject.position().dimensions());
        for (other_id, other) in arena.nodes() {
            // A node exerts no force on itself.
            if other_id == node {
                continue;
            }
            total = total.add(&self.pair_repulsion(subject, other)?)?;
        }
        Ok(total)
    }
}
