//! Traversal trees and the queries answered from them.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::types::{Label, WalkError, WalkResult};

/// Vertices grouped by their predecessor in a traversal tree.
///
/// The `None` key holds the root; `Some(v)` holds the direct children of `v`.
pub type Groups = BTreeMap<Option<Label>, BTreeSet<Label>>;

/// Where a vertex sits in a traversal tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeEntry {
    /// The vertex this one was discovered from. `None` for the root.
    pub predecessor: Option<Label>,
    /// Hops from the root.
    pub cost: u32,
}

/// Spanning tree produced by one traversal: predecessor and cost per visited
/// vertex, plus the order in which vertices were discovered.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TraversalTree {
    entries: BTreeMap<Label, TreeEntry>,
    order: Vec<Label>,
}

impl TraversalTree {
    /// Record a newly discovered vertex.
    pub(crate) fn discover(&mut self, vertex: Label, predecessor: Option<Label>, cost: u32) {
        self.order.push(vertex.clone());
        self.entries.insert(vertex, TreeEntry { predecessor, cost });
    }

    /// Number of visited vertices.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing was visited.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The start vertex of the traversal.
    pub fn root(&self) -> Option<&Label> {
        self.order.first()
    }

    /// Visited vertices in discovery order.
    pub fn order(&self) -> &[Label] {
        &self.order
    }

    /// Whether the vertex was visited.
    pub fn contains(&self, vertex: &str) -> bool {
        self.entries.contains_key(vertex)
    }

    /// Predecessor and cost of a visited vertex.
    pub fn entry(&self, vertex: &str) -> Option<&TreeEntry> {
        self.entries.get(vertex)
    }

    /// Entries in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&Label, &TreeEntry)> + '_ {
        self.order
            .iter()
            .filter_map(|vertex| self.entries.get_key_value(vertex.as_str()))
    }

    fn require(&self, vertex: &str) -> WalkResult<(&Label, &TreeEntry)> {
        self.entries
            .get_key_value(vertex)
            .ok_or_else(|| WalkError::VertexNotInTree(Label::from(vertex)))
    }

    /// The vertex a visited vertex was discovered from (`None` for the root).
    pub fn predecessor(&self, vertex: &str) -> WalkResult<Option<&Label>> {
        self.require(vertex)
            .map(|(_, entry)| entry.predecessor.as_ref())
    }

    /// Hops from the root to a visited vertex.
    pub fn cost(&self, vertex: &str) -> WalkResult<u32> {
        self.require(vertex).map(|(_, entry)| entry.cost)
    }

    /// Vertices from the root down to `vertex`, both included.
    pub fn path_to_origin(&self, vertex: &str) -> WalkResult<Vec<Label>> {
        let (label, entry) = self.require(vertex)?;
        let mut path = vec![label.clone()];
        let mut next = entry.predecessor.as_ref();
        while let Some(predecessor) = next {
            let (label, entry) = self.require(predecessor.as_str())?;
            path.push(label.clone());
            next = entry.predecessor.as_ref();
        }
        path.reverse();
        Ok(path)
    }

    /// The root reached by following predecessors from `vertex`.
    pub fn origin(&self, vertex: &str) -> WalkResult<&Label> {
        let (mut current, entry) = self.require(vertex)?;
        let mut next = entry.predecessor.as_ref();
        while let Some(predecessor) = next {
            let (label, entry) = self.require(predecessor.as_str())?;
            current = label;
            next = entry.predecessor.as_ref();
        }
        Ok(current)
    }

    /// Partition visited vertices by predecessor.
    pub fn groups(&self) -> Groups {
        let mut groups = Groups::new();
        for (vertex, entry) in &self.entries {
            groups
                .entry(entry.predecessor.clone())
                .or_default()
                .insert(vertex.clone());
        }
        groups
    }
}
