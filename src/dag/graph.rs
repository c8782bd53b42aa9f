// src/dag/graph.rs

use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::CourseId;

/// Directed "needs" graph between course identifiers.
///
/// An edge `from -> to` means course `from` requires course `to`. A node is
/// only stored as a key while it has at least one outgoing edge; removing its
/// last edge drops the key. All mutation goes through [`DependencyGraph::add_edge`]
/// and [`DependencyGraph::remove`] so that invariant cannot be broken from outside.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    edges: BTreeMap<CourseId, BTreeSet<CourseId>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff `node` still has at least one outgoing edge.
    pub fn contains(&self, node: CourseId) -> bool {
        self.edges.contains_key(&node)
    }

    /// Record `from -> to`. Adding an edge that already exists is a no-op.
    pub fn add_edge(&mut self, from: CourseId, to: CourseId) {
        self.edges.entry(from).or_default().insert(to);
    }

    /// Remove `node` as a target from every edge set.
    ///
    /// Sources left with no outgoing edges are dropped. Edges going *out* of
    /// `node` are not touched.
    pub fn remove(&mut self, node: CourseId) {
        self.edges.retain(|_, targets| {
            targets.remove(&node);
            !targets.is_empty()
        });
    }

    /// Outstanding prerequisites of `node`, in identifier order.
    pub fn prerequisites_of(&self, node: CourseId) -> impl Iterator<Item = CourseId> + '_ {
        self.edges.get(&node).into_iter().flatten().copied()
    }

    /// Number of nodes with at least one outgoing edge.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }
}
