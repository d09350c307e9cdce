//! Inbound collaborator contract: supplying graph snapshots.
//!
//! The resolver is agnostic to where process definitions live. Whatever
//! parses the persisted definition format implements [`GraphProvider`] and
//! hands the resolver an execution point; [`GraphRegistry`] is the
//! in-memory implementation used by tests and simple embeddings.

use rustc_hash::FxHashMap;

use crate::graph::{FlowNode, ProcessGraph};

/// Supplies the graph snapshot and flow node for an execution point.
///
/// Implementations own one immutable [`ProcessGraph`] per
/// process-definition version and are responsible for having validated the
/// definition (via [`GraphBuilder::build`](crate::graph::GraphBuilder::build))
/// before exposing it here.
pub trait GraphProvider {
    /// Resolves an execution point to its graph and node, or `None` when no
    /// registered definition contains the node.
    fn execution_point(&self, node_id: &str) -> Option<(&ProcessGraph, &FlowNode)>;
}

/// In-memory [`GraphProvider`] keyed by process-definition id.
///
/// # Examples
///
/// ```rust
/// use flowreach::graph::{FlowNode, GraphBuilder, SequenceEdge};
/// use flowreach::provider::{GraphProvider, GraphRegistry};
/// use flowreach::types::{NodeKind, TaskKind};
///
/// let graph = GraphBuilder::new()
///     .add_node(FlowNode::new("review", NodeKind::Task(TaskKind::User)))
///     .add_node(FlowNode::new("publish", NodeKind::Task(TaskKind::Service)))
///     .add_edge(SequenceEdge::new("approve", "review", "publish"))
///     .build()
///     .unwrap();
///
/// let mut registry = GraphRegistry::new();
/// registry.register("publishing:v1", graph);
///
/// let (_, node) = registry.execution_point("review").unwrap();
/// assert_eq!(node.id(), "review");
/// ```
#[derive(Default)]
pub struct GraphRegistry {
    definitions: FxHashMap<String, ProcessGraph>,
}

impl GraphRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the snapshot for a definition id.
    pub fn register(&mut self, definition: impl Into<String>, graph: ProcessGraph) {
        let definition = definition.into();
        if self.definitions.insert(definition.clone(), graph).is_some() {
            tracing::warn!(%definition, "replaced an already-registered process definition");
        }
    }

    /// The snapshot registered for a definition id.
    #[must_use]
    pub fn graph(&self, definition: &str) -> Option<&ProcessGraph> {
        self.definitions.get(definition)
    }

    /// Number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// True when no definitions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl GraphProvider for GraphRegistry {
    fn execution_point(&self, node_id: &str) -> Option<(&ProcessGraph, &FlowNode)> {
        self.definitions
            .values()
            .find_map(|graph| graph.node(node_id).map(|node| (graph, node)))
    }
}
