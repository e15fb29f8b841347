//! Building graphs from skill records.
//!
//! The input format is a flat list of records, each naming a primary skill
//! and the skills it relates to. Every distinct label becomes exactly one
//! node and every relation becomes one undirected edge, so the engine stays
//! agnostic to where the records came from.

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::AsterismError;
use crate::graph::{NodeArena, NodeId};

/// One input record: a skill and the skills it relates to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRecord {
    primary_item: String,
    #[serde(default)]
    related_items: Vec<String>,
}

impl SkillRecord {
    /// Creates a record relating a primary skill to zero or more others.
    pub fn new(
        primary_item: impl Into<String>,
        related_items: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            primary_item: primary_item.into(),
            related_items: related_items.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the label of the primary skill.
    pub fn primary_item(&self) -> &str {
        &self.primary_item
    }

    /// Returns the labels of the related skills.
    pub fn related_items(&self) -> &[String] {
        &self.related_items
    }
}

/// Builds a linked node arena from a list of skill records.
///
/// Labels are trimmed of surrounding whitespace and deduplicated, so a skill
/// mentioned by several records maps to a single node. Related skills that
/// never appear as a primary item still become nodes. Nodes are created in
/// first-appearance order and every node gets the given render size.
///
/// A record relating a skill to itself contributes no edge; the arena
/// rejects self-links, and such input is not worth failing the whole build
/// over.
///
/// # Errors
///
/// Returns [`AsterismError::Records`] if the list is empty or any label
/// trims to the empty string.
pub fn build_graph(
    records: &[SkillRecord],
    node_size: f32,
) -> Result<NodeArena<String>, AsterismError> {
    if records.is_empty() {
        return Err(AsterismError::Records(
            "no records to build a graph from".to_string(),
        ));
    }

    let mut arena = NodeArena::new();
    let mut ids_by_label: HashMap<String, NodeId> = HashMap::new();

    for record in records {
        let primary = resolve(&mut arena, &mut ids_by_label, &record.primary_item, node_size)?;
        for related in &record.related_items {
            let related = resolve(&mut arena, &mut ids_by_label, related, node_size)?;
            if related == primary {
                debug!(label = record.primary_item(); "Skipping self-referential relation");
                continue;
            }
            arena.link(primary, related)?;
        }
    }

    Ok(arena)
}

/// Returns the node for a label, inserting it on first appearance.
fn resolve(
    arena: &mut NodeArena<String>,
    ids_by_label: &mut HashMap<String, NodeId>,
    label: &str,
    node_size: f32,
) -> Result<NodeId, AsterismError> {
    let label = label.trim();
    if label.is_empty() {
        return Err(AsterismError::Records(
            "record labels must not be blank".to_string(),
        ));
    }

    if let Some(id) = ids_by_label.get(label) {
        return Ok(*id);
    }
    let id = arena.insert_sized(label.to_string(), node_size);
    ids_by_label.insert(label.to_string(), id);
    Ok(id)
}
