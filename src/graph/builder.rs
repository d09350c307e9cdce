//! Builder and boundary validation for process-graph snapshots.

use miette::Diagnostic;
use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use crate::graph::edge::{EdgeTarget, SequenceEdge};
use crate::graph::node::FlowNode;
use crate::graph::snapshot::ProcessGraph;

/// Errors raised when a graph definition violates the provider contract.
///
/// The resolver assumes every edge target is either a registered node or an
/// explicit [`EdgeTarget::ImplicitStep`]; this is where that assumption is
/// enforced, before any traversal can run against the snapshot.
#[derive(Debug, Error, Diagnostic)]
pub enum GraphDefinitionError {
    /// Two nodes were registered under the same identifier.
    #[error("duplicate node id: {id}")]
    #[diagnostic(
        code(flowreach::graph::duplicate_node),
        help("Node ids must be unique within one process definition.")
    )]
    DuplicateNode { id: String },

    /// Two edges were registered under the same identifier.
    #[error("duplicate edge id: {id}")]
    #[diagnostic(
        code(flowreach::graph::duplicate_edge),
        help("Transition anchors are keyed by edge id, so edge ids must be unique.")
    )]
    DuplicateEdge { id: String },

    /// An edge names a source node that was never registered.
    #[error("edge {edge} starts at unknown node {source}")]
    #[diagnostic(
        code(flowreach::graph::unknown_source),
        help("Register the source node before building, or drop the edge.")
    )]
    UnknownSource { edge: String, source: String },

    /// An edge names a target node that was never registered.
    #[error("edge {edge} dangles: target node {target} does not exist")]
    #[diagnostic(
        code(flowreach::graph::dangling_target),
        help(
            "Register the target node, or use an implicit-step edge if the \
             target is an automatic step with no node of its own."
        )
    )]
    DanglingTarget { edge: String, target: String },
}

/// Builder for immutable process-graph snapshots.
///
/// Nodes and edges are registered through the fluent API and wired together
/// by [`build`](Self::build), which validates the definition and hands back
/// a read-only [`ProcessGraph`]. A snapshot is built once per
/// process-definition version and shared freely afterwards.
///
/// # Examples
///
/// ```rust
/// use flowreach::graph::{FlowNode, GraphBuilder, SequenceEdge};
/// use flowreach::types::{NodeKind, TaskKind};
///
/// let graph = GraphBuilder::new()
///     .add_node(FlowNode::new("review", NodeKind::Task(TaskKind::User)))
///     .add_node(FlowNode::new("publish", NodeKind::Task(TaskKind::Service)))
///     .add_edge(SequenceEdge::new("approve", "review", "publish"))
///     .build()
///     .unwrap();
///
/// assert_eq!(graph.len(), 2);
/// assert_eq!(graph.node("review").unwrap().outgoing().len(), 1);
/// ```
pub struct GraphBuilder {
    nodes: Vec<FlowNode>,
    edges: Vec<SequenceEdge>,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Registers a node.
    #[must_use]
    pub fn add_node(mut self, node: FlowNode) -> Self {
        self.nodes.push(node);
        self
    }

    /// Registers an edge. Edges keep registration order, which becomes the
    /// outgoing-edge order on their source node.
    #[must_use]
    pub fn add_edge(mut self, edge: SequenceEdge) -> Self {
        self.edges.push(edge);
        self
    }

    /// Validates the definition and wires edges onto their source nodes.
    ///
    /// # Errors
    ///
    /// Returns a [`GraphDefinitionError`] for duplicate node or edge ids,
    /// edges starting at unregistered nodes, or edges dangling towards
    /// unregistered targets.
    pub fn build(self) -> Result<ProcessGraph, GraphDefinitionError> {
        let mut nodes: FxHashMap<String, FlowNode> = FxHashMap::default();
        for node in self.nodes {
            if nodes.contains_key(node.id()) {
                return Err(GraphDefinitionError::DuplicateNode {
                    id: node.id().to_owned(),
                });
            }
            nodes.insert(node.id().to_owned(), node);
        }

        let mut edge_ids: FxHashSet<&str> = FxHashSet::default();
        for edge in &self.edges {
            if !edge_ids.insert(edge.id()) {
                return Err(GraphDefinitionError::DuplicateEdge {
                    id: edge.id().to_owned(),
                });
            }
            if !nodes.contains_key(edge.source()) {
                return Err(GraphDefinitionError::UnknownSource {
                    edge: edge.id().to_owned(),
                    source: edge.source().to_owned(),
                });
            }
            if let EdgeTarget::Node(target) = edge.target()
                && !nodes.contains_key(target.as_str())
            {
                return Err(GraphDefinitionError::DanglingTarget {
                    edge: edge.id().to_owned(),
                    target: target.clone(),
                });
            }
        }

        let edge_count = self.edges.len();
        for edge in self.edges {
            if let Some(source) = nodes.get_mut(edge.source()) {
                source.attach_outgoing(edge);
            }
        }

        tracing::debug!(
            nodes = nodes.len(),
            edges = edge_count,
            "built process graph snapshot"
        );
        Ok(ProcessGraph::from_nodes(nodes))
    }
}
