//! The immutable process-graph snapshot and its iterators.

use rustc_hash::FxHashMap;

use crate::graph::edge::{EdgeTarget, SequenceEdge};
use crate::graph::node::FlowNode;

/// Read-only view of one version of a process definition.
///
/// Owns every [`FlowNode`] keyed by id. Once built the snapshot never
/// changes, so any number of concurrent resolutions may borrow it without
/// coordination.
///
/// Invariant (enforced by [`GraphBuilder::build`](crate::graph::GraphBuilder::build)):
/// every [`EdgeTarget::Node`] in the snapshot names a node present in the
/// map.
#[derive(Debug)]
pub struct ProcessGraph {
    nodes: FxHashMap<String, FlowNode>,
}

impl ProcessGraph {
    pub(crate) fn from_nodes(nodes: FxHashMap<String, FlowNode>) -> Self {
        Self { nodes }
    }

    /// Looks a node up by id.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.get(id)
    }

    /// Resolves an edge's target to a node, or `None` for an implicit step.
    #[must_use]
    pub fn target_of(&self, edge: &SequenceEdge) -> Option<&FlowNode> {
        match edge.target() {
            EdgeTarget::Node(id) => self.nodes.get(id.as_str()),
            EdgeTarget::ImplicitStep => None,
        }
    }

    /// Iterates over all nodes, in no particular order.
    #[must_use]
    pub fn nodes(&self) -> NodesIter<'_> {
        NodesIter {
            inner: self.nodes.values(),
        }
    }

    /// Iterates over every edge in the snapshot, in no particular node
    /// order; edges of one node keep their definition order.
    #[must_use]
    pub fn edges(&self) -> EdgesIter<'_> {
        EdgesIter {
            outer: self.nodes.values(),
            current: [].iter(),
        }
    }

    /// Number of nodes in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the snapshot holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Iterator over the nodes of a [`ProcessGraph`].
pub struct NodesIter<'a> {
    inner: std::collections::hash_map::Values<'a, String, FlowNode>,
}

impl<'a> Iterator for NodesIter<'a> {
    type Item = &'a FlowNode;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> ExactSizeIterator for NodesIter<'a> {}

/// Iterator over every [`SequenceEdge`] of a [`ProcessGraph`].
pub struct EdgesIter<'a> {
    outer: std::collections::hash_map::Values<'a, String, FlowNode>,
    current: std::slice::Iter<'a, SequenceEdge>,
}

impl<'a> Iterator for EdgesIter<'a> {
    type Item = &'a SequenceEdge;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(edge) = self.current.next() {
                return Some(edge);
            }
            match self.outer.next() {
                Some(node) => self.current = node.outgoing().iter(),
                None => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{FlowNode, GraphBuilder, SequenceEdge};
    use crate::types::{NodeKind, TaskKind};

    fn task(id: &str) -> FlowNode {
        FlowNode::new(id, NodeKind::Task(TaskKind::User))
    }

    #[test]
    fn test_target_resolution() {
        let graph = GraphBuilder::new()
            .add_node(task("a"))
            .add_node(task("b"))
            .add_edge(SequenceEdge::new("e1", "a", "b"))
            .add_edge(SequenceEdge::implicit("e2", "b"))
            .build()
            .unwrap();

        let a = graph.node("a").unwrap();
        assert_eq!(graph.target_of(&a.outgoing()[0]).unwrap().id(), "b");

        let b = graph.node("b").unwrap();
        assert!(graph.target_of(&b.outgoing()[0]).is_none());
    }

    #[test]
    fn test_edge_iterator_covers_all_edges() {
        let graph = GraphBuilder::new()
            .add_node(task("a"))
            .add_node(task("b"))
            .add_node(task("c"))
            .add_edge(SequenceEdge::new("e1", "a", "b"))
            .add_edge(SequenceEdge::new("e2", "a", "c"))
            .add_edge(SequenceEdge::new("e3", "b", "c"))
            .build()
            .unwrap();

        let mut ids: Vec<&str> = graph.edges().map(|e| e.id()).collect();
        ids.sort_unstable();
        assert_eq!(ids, ["e1", "e2", "e3"]);
        assert_eq!(graph.nodes().len(), 3);
    }
}
