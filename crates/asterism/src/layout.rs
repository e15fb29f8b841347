//! Force-directed relaxation of node positions.
//!
//! This module implements the iterative solver that moves nodes of a
//! [`NodeArena`] until the forces acting on them fall under a convergence
//! budget. The solver is generic over a [`ForceModel`]: it only sums, cools,
//! and applies the force vectors the model reports and never implements a
//! force law itself.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, trace};

use crate::config::LayoutConfig;
use crate::error::AsterismError;
use crate::geometry::Vector;
use crate::graph::{NodeArena, NodeId, POSITION_DIMENSIONS};

pub mod eades;

/// Axis pinned to zero at the lowest node during normalization.
const VERTICAL_AXIS: usize = 1;

/// Axes centered on the origin during normalization.
const HORIZONTAL_AXES: [usize; 2] = [0, 2];

/// A source of attractive and repulsive forces for a layout run.
///
/// The solver calls both operations once per node per iteration, passing the
/// arena as it stood at the start of the iteration. Implementations must not
/// move nodes themselves; they may advance internal state such as a random
/// source, which is why both operations take `&mut self`.
pub trait ForceModel<T> {
    /// Total spring force pulling `node` along its links.
    ///
    /// # Errors
    ///
    /// Returns an error if positions of mismatched dimensions are combined.
    fn attractive_force(
        &mut self,
        node: NodeId,
        arena: &NodeArena<T>,
    ) -> Result<Vector, AsterismError>;

    /// Total force pushing `node` away from every other node.
    ///
    /// # Errors
    ///
    /// Returns an error if positions of mismatched dimensions are combined.
    fn repulsive_force(
        &mut self,
        node: NodeId,
        arena: &NodeArena<T>,
    ) -> Result<Vector, AsterismError>;
}

/// Summary of a finished layout run.
#[derive(Debug, Clone, Copy)]
pub struct LayoutOutcome {
    iterations: u32,
    error: f32,
    converged: bool,
    cancelled: bool,
}

impl LayoutOutcome {
    /// Returns the number of iterations the solver executed.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Returns the aggregate force error after the last iteration.
    ///
    /// The error is the sum of the Euclidean norms of the raw per-node force
    /// vectors, before cooling. It is infinite if no iteration ran.
    pub fn error(&self) -> f32 {
        self.error
    }

    /// Checks if the run ended because the error fell under the budget.
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Checks if the run was stopped through the cancellation flag.
    pub fn cancelled(&self) -> bool {
        self.cancelled
    }
}

/// Iterative spring relaxation engine.
///
/// Runs a force model over an arena until the layout converges, the
/// iteration cap is reached, or the run is cancelled. Forces are cooled by a
/// multiplicative factor each iteration to damp oscillation. After the loop
/// the layout is normalized so its lowest point sits at zero height and its
/// horizontal center of mass sits on the origin.
#[derive(Debug)]
pub struct SpringLayout {
    cool_down: f32,
    error_threshold: f32,
    max_iterations: u32,
    cancel_flag: Option<Arc<AtomicBool>>,
}

impl Default for SpringLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl SpringLayout {
    /// Creates a new engine with the default solver constants.
    pub fn new() -> Self {
        Self {
            cool_down: 0.99,
            error_threshold: 0.1,
            max_iterations: 100,
            cancel_flag: None,
        }
    }

    /// Creates an engine from a configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`AsterismError::Layout`] if `cool_down` lies outside the open
    /// interval (0, 1) or `error_threshold` is not positive.
    pub fn from_config(config: &LayoutConfig) -> Result<Self, AsterismError> {
        let cool_down = config.cool_down();
        if cool_down <= 0.0 || cool_down >= 1.0 {
            return Err(AsterismError::Layout(format!(
                "cool_down must lie strictly between 0 and 1, got {cool_down}"
            )));
        }
        let error_threshold = config.error_threshold();
        if error_threshold <= 0.0 {
            return Err(AsterismError::Layout(format!(
                "error_threshold must be positive, got {error_threshold}"
            )));
        }

        let mut engine = Self::new();
        engine
            .set_cool_down(cool_down)
            .set_error_threshold(error_threshold)
            .set_max_iterations(config.max_iterations());
        Ok(engine)
    }

    /// Set the per-iteration force decay factor
    pub fn set_cool_down(&mut self, cool_down: f32) -> &mut Self {
        self.cool_down = cool_down;
        self
    }

    /// Set the per-node force budget under which the layout converges
    pub fn set_error_threshold(&mut self, threshold: f32) -> &mut Self {
        self.error_threshold = threshold;
        self
    }

    /// Set the hard cap on solver iterations
    pub fn set_max_iterations(&mut self, iterations: u32) -> &mut Self {
        self.max_iterations = iterations;
        self
    }

    /// Set a shared flag that stops the run when raised
    ///
    /// The flag is checked between iterations, so a raised flag never
    /// interrupts a half-applied update.
    pub fn set_cancel_flag(&mut self, flag: Arc<AtomicBool>) -> &mut Self {
        self.cancel_flag = Some(flag);
        self
    }

    /// Relaxes the arena under the given force model.
    ///
    /// Each iteration computes every node's force from the positions as they
    /// stood at the start of the iteration, then applies all moves at once,
    /// scaled by the current cooling factor. The aggregate error compares the
    /// raw forces against `error_threshold * node_count`. Normalization runs
    /// whether or not the loop converged.
    ///
    /// # Errors
    ///
    /// Returns [`AsterismError::Layout`] for an empty arena, or a propagated
    /// geometry error if the force model yields vectors of the wrong
    /// dimension.
    pub fn layout<T, F>(
        &self,
        arena: &mut NodeArena<T>,
        model: &mut F,
    ) -> Result<LayoutOutcome, AsterismError>
    where
        F: ForceModel<T>,
    {
        if arena.is_empty() {
            return Err(AsterismError::Layout(
                "cannot lay out an empty arena".to_string(),
            ));
        }

        let node_count = arena.len();
        let error_budget = self.error_threshold * node_count as f32;
        let ids: Vec<NodeId> = arena.ids().collect();

        debug!(
            node_count = node_count,
            edge_count = arena.edges().count(),
            error_budget = error_budget,
            max_iterations = self.max_iterations;
            "Starting spring relaxation"
        );

        let mut iteration: u32 = 0;
        let mut error = f32::INFINITY;
        let mut cooling_factor: f32 = 1.0;
        let mut cancelled = false;

        while error > error_budget && iteration < self.max_iterations {
            if let Some(flag) = &self.cancel_flag {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            // All forces are computed against the positions from the start of
            // this iteration before any node moves.
            let mut forces = Vec::with_capacity(ids.len());
            for id in &ids {
                let force = model
                    .attractive_force(*id, arena)?
                    .add(&model.repulsive_force(*id, arena)?)?;
                forces.push(force);
            }

            error = 0.0;
            for (id, force) in ids.iter().zip(&forces) {
                arena.translate(*id, &force.scale(cooling_factor))?;
                error += force.norm();
            }

            trace!(
                iteration = iteration,
                error = error,
                cooling_factor = cooling_factor;
                "Relaxation step"
            );

            cooling_factor *= self.cool_down;
            iteration += 1;
        }

        let converged = error <= error_budget;
        self.normalize(arena, &ids)?;

        debug!(
            iterations = iteration,
            error = error,
            converged = converged,
            cancelled = cancelled;
            "Spring relaxation finished"
        );

        Ok(LayoutOutcome {
            iterations: iteration,
            error,
            converged,
            cancelled,
        })
    }

    /// Grounds and centers the layout in place.
    fn normalize<T>(&self, arena: &mut NodeArena<T>, ids: &[NodeId]) -> Result<(), AsterismError> {
        let node_count = arena.len() as f32;
        let mut offset = vec![0.0; POSITION_DIMENSIONS];

        let min_height = arena
            .nodes()
            .map(|(_, node)| node.position().component(VERTICAL_AXIS))
            .fold(f32::INFINITY, f32::min);
        offset[VERTICAL_AXIS] = -min_height;

        for axis in HORIZONTAL_AXES {
            let mean = arena
                .nodes()
                .map(|(_, node)| node.position().component(axis))
                .sum::<f32>()
                / node_count;
            offset[axis] = -mean;
        }

        let offset = Vector::from(offset);
        for id in ids {
            arena.translate(*id, &offset)?;
        }
        Ok(())
    }
}
