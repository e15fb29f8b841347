//! Graph data structures used by the layout engine.
//!
//! This module provides the arena that owns every node of an undirected
//! graph. Nodes carry a generic payload, a position in space, a render size,
//! and the list of neighbors they are linked to. Links are stored on both
//! endpoints so force models can walk a node's neighborhood directly.
//!
//! # Architecture
//!
//! The module provides:
//! - [`NodeId`]: Opaque, copyable handle for nodes in an arena
//! - [`GraphNode`]: Node payload plus position, size, and neighbor list
//! - [`NodeArena`]: Owner of all nodes, with link and position bookkeeping
//!
//! An id is only meaningful for the arena that issued it. The arena never
//! removes nodes, so ids stay valid for its whole lifetime.

use std::f32::consts::TAU;

use crate::error::AsterismError;
use crate::geometry::{GeometryError, Vector};

/// Number of components in a node position.
pub const POSITION_DIMENSIONS: usize = 3;

/// Render size given to nodes inserted without an explicit size.
pub const DEFAULT_NODE_SIZE: f32 = 0.25;

/// Handle for a node stored in a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A node in the graph.
///
/// Nodes are created through [`NodeArena::insert`] and own their payload,
/// their current position, and the set of linked neighbors.
#[derive(Debug, Clone)]
pub struct GraphNode<T> {
    payload: T,
    position: Vector,
    size: f32,
    links: Vec<NodeId>,
}

impl<T> GraphNode<T> {
    fn new(payload: T, size: f32) -> Self {
        GraphNode {
            payload,
            position: Vector::zero(POSITION_DIMENSIONS),
            size,
            links: Vec::new(),
        }
    }

    /// Returns a reference to the node's payload.
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Returns the node's current position.
    pub fn position(&self) -> &Vector {
        &self.position
    }

    /// Returns the node's render size.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Returns the ids of all nodes linked to this one.
    pub fn links(&self) -> &[NodeId] {
        &self.links
    }

    /// Returns the offset from another node's position to this one.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the positions have a
    /// different number of components.
    pub fn delta(&self, other: &GraphNode<T>) -> Result<Vector, GeometryError> {
        self.position.sub(&other.position)
    }

    /// Calculates the Euclidean distance to another node.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the positions have a
    /// different number of components.
    pub fn distance(&self, other: &GraphNode<T>) -> Result<f32, GeometryError> {
        Ok(self.delta(other)?.norm())
    }

    /// Calculates the distance to another node, substituting `fallback` when
    /// the nodes coincide.
    ///
    /// Force laws divide by this distance or feed it to a logarithm, so a
    /// zero would poison the whole layout with non-finite values.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the positions have a
    /// different number of components.
    pub fn distance_or(&self, other: &GraphNode<T>, fallback: f32) -> Result<f32, GeometryError> {
        let distance = self.distance(other)?;
        if distance == 0.0 {
            Ok(fallback)
        } else {
            Ok(distance)
        }
    }

    /// Returns the unit vector pointing from this node toward another.
    ///
    /// Coincident nodes have no defined direction; the zero vector is
    /// returned in that case.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the positions have a
    /// different number of components.
    pub fn direction_to(&self, other: &GraphNode<T>) -> Result<Vector, GeometryError> {
        Ok(other.position.sub(&self.position)?.normalized())
    }

    /// Returns the unit vector toward another node, substituting `fallback`
    /// when the nodes coincide.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the positions have a
    /// different number of components.
    pub fn direction_to_or(
        &self,
        other: &GraphNode<T>,
        fallback: Vector,
    ) -> Result<Vector, GeometryError> {
        self.direction_to_or_else(other, || fallback)
    }

    /// Returns the unit vector toward another node, computing a fallback
    /// direction only when the nodes coincide.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DimensionMismatch`] if the positions have a
    /// different number of components.
    pub fn direction_to_or_else(
        &self,
        other: &GraphNode<T>,
        fallback: impl FnOnce() -> Vector,
    ) -> Result<Vector, GeometryError> {
        let delta = other.position.sub(&self.position)?;
        if delta.is_zero() {
            Ok(fallback())
        } else {
            Ok(delta.normalized())
        }
    }
}

/// Owner of every node in an undirected graph.
///
/// The arena issues a [`NodeId`] per inserted node and keeps links symmetric:
/// linking `a` to `b` records the edge on both nodes. Iteration order over
/// nodes and edges follows insertion order, which keeps layout runs
/// reproducible.
#[derive(Debug, Clone, Default)]
pub struct NodeArena<T> {
    nodes: Vec<GraphNode<T>>,
}

impl<T> NodeArena<T> {
    /// Creates a new empty arena.
    pub fn new() -> Self {
        NodeArena { nodes: Vec::new() }
    }

    /// Creates a new empty arena with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        NodeArena {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Inserts a node with the default render size and returns its id.
    pub fn insert(&mut self, payload: T) -> NodeId {
        self.insert_sized(payload, DEFAULT_NODE_SIZE)
    }

    /// Inserts a node with the given render size and returns its id.
    pub fn insert_sized(&mut self, payload: T, size: f32) -> NodeId {
        self.nodes.push(GraphNode::new(payload, size));
        NodeId(self.nodes.len() - 1)
    }

    /// Links two nodes with an undirected edge.
    ///
    /// Linking is idempotent: an edge that already exists is not recorded
    /// again, in either direction.
    ///
    /// # Errors
    ///
    /// Returns [`AsterismError::Graph`] if either id is unknown or if both
    /// ids name the same node.
    pub fn link(&mut self, a: NodeId, b: NodeId) -> Result<(), AsterismError> {
        if a == b {
            return Err(AsterismError::Graph(format!(
                "cannot link node {} to itself",
                a.0
            )));
        }
        self.check_id(a)?;
        self.check_id(b)?;

        if !self.nodes[a.0].links.contains(&b) {
            self.nodes[a.0].links.push(b);
        }
        if !self.nodes[b.0].links.contains(&a) {
            self.nodes[b.0].links.push(a);
        }
        Ok(())
    }

    /// Returns the node with the given id, if it exists.
    pub fn node(&self, id: NodeId) -> Option<&GraphNode<T>> {
        self.nodes.get(id.0)
    }

    /// Returns the node with the given id without checking existence.
    ///
    /// # Panics
    /// Panics if the id was not issued by this arena.
    pub fn node_unchecked(&self, id: NodeId) -> &GraphNode<T> {
        &self.nodes[id.0]
    }

    /// Returns the total number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Checks if the arena holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Checks if the given id was issued by this arena.
    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    /// Returns an iterator over all node ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Returns an iterator over all nodes with their ids, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &GraphNode<T>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }

    /// Returns an iterator over all undirected edges, each reported once.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> {
        self.nodes.iter().enumerate().flat_map(|(index, node)| {
            let source = NodeId(index);
            node.links
                .iter()
                .filter(move |target| source < **target)
                .map(move |target| (source, *target))
        })
    }

    /// Returns the id of the first node with the given payload.
    pub fn find(&self, payload: &T) -> Option<NodeId>
    where
        T: PartialEq,
    {
        self.nodes
            .iter()
            .position(|node| node.payload == *payload)
            .map(NodeId)
    }

    /// Replaces a node's position.
    ///
    /// # Errors
    ///
    /// Returns [`AsterismError::Graph`] if the id is unknown, or a
    /// [`GeometryError::DimensionMismatch`] wrapped in
    /// [`AsterismError::Geometry`] if the new position does not have
    /// [`POSITION_DIMENSIONS`] components.
    pub fn set_position(&mut self, id: NodeId, position: Vector) -> Result<(), AsterismError> {
        self.check_id(id)?;
        if position.dimensions() != POSITION_DIMENSIONS {
            return Err(GeometryError::DimensionMismatch {
                left: POSITION_DIMENSIONS,
                right: position.dimensions(),
            }
            .into());
        }
        self.nodes[id.0].position = position;
        Ok(())
    }

    /// Moves a node by adding an offset to its position.
    ///
    /// # Errors
    ///
    /// Returns [`AsterismError::Graph`] if the id is unknown, or an
    /// [`AsterismError::Geometry`] if the offset dimensions do not match.
    pub fn translate(&mut self, id: NodeId, offset: &Vector) -> Result<(), AsterismError> {
        self.check_id(id)?;
        self.nodes[id.0].position = self.nodes[id.0].position.add(offset)?;
        Ok(())
    }

    /// Spreads all nodes evenly over a ring of the given radius.
    ///
    /// The ring lies in the horizontal plane: the vertical component of
    /// every seeded position is zero. Seeding distinct starting positions
    /// keeps coincident nodes from relying on the force model's fallback
    /// directions.
    pub fn seed_ring(&mut self, radius: f32) {
        let count = self.nodes.len();
        for (index, node) in self.nodes.iter_mut().enumerate() {
            let angle = TAU * index as f32 / count as f32;
            node.position = Vector::from([radius * angle.cos(), 0.0, radius * angle.sin()]);
        }
    }

    fn check_id(&self, id: NodeId) -> Result<(), AsterismError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(AsterismError::Graph(format!(
                "node {} does not exist in this arena",
                id.0
            )))
        }
    }
}
