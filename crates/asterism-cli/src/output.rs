//! Layout artifact written for the renderer
//!
//! The artifact carries everything a renderer needs to draw the
//! constellation: one entry per node with its label, final position, and
//! size, plus each undirected edge exactly once as a pair of labels.

use serde::Serialize;

use asterism::{AsterismError, NodeArena};

/// Serialized layout: positioned nodes plus deduplicated edges.
#[derive(Debug, Serialize)]
pub struct LayoutArtifact {
    nodes: Vec<NodeEntry>,
    edges: Vec<[String; 2]>,
}

/// One positioned node in the artifact.
#[derive(Debug, Serialize)]
struct NodeEntry {
    label: String,
    position: [f32; 3],
    size: f32,
}

impl LayoutArtifact {
    /// Collects a laid-out arena into the renderer contract.
    pub fn from_arena(arena: &NodeArena<String>) -> Self {
        let nodes = arena
            .nodes()
            .map(|(_, node)| {
                let components = node.position().components();
                NodeEntry {
                    label: node.payload().clone(),
                    position: [components[0], components[1], components[2]],
                    size: node.size(),
                }
            })
            .collect();

        let edges = arena
            .edges()
            .map(|(a, b)| {
                [
                    arena.node_unchecked(a).payload().clone(),
                    arena.node_unchecked(b).payload().clone(),
                ]
            })
            .collect();

        Self { nodes, edges }
    }

    /// Serializes the artifact as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`AsterismError::Export`] if serialization fails.
    pub fn to_json(&self) -> Result<String, AsterismError> {
        serde_json::to_string_pretty(self).map_err(|err| AsterismError::Export(Box::new(err)))
    }
}
