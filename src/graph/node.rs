//! Flow nodes: the vertices of a process graph.

use crate::graph::edge::SequenceEdge;
use crate::types::NodeKind;

/// A vertex in the process graph: a task, gateway, or event.
///
/// Nodes are immutable snapshots of a process definition. They are owned by
/// the [`ProcessGraph`](crate::graph::ProcessGraph) that
/// [`build`](crate::graph::GraphBuilder::build) produced and are only ever
/// borrowed by the resolver, never copied.
///
/// # Examples
///
/// ```rust
/// use flowreach::graph::FlowNode;
/// use flowreach::types::{NodeKind, TaskKind};
///
/// let review = FlowNode::new("review", NodeKind::Task(TaskKind::User))
///     .with_multi_instance()
///     .with_enter_hook("assign-reviewers");
///
/// assert!(review.is_multi_instance());
/// assert_eq!(review.hooks().on_enter(), ["assign-reviewers"]);
/// ```
#[derive(Clone, Debug)]
pub struct FlowNode {
    id: String,
    kind: NodeKind,
    outgoing: Vec<SequenceEdge>,
    multi_instance: bool,
    hooks: ExecutionHooks,
}

impl FlowNode {
    /// Creates a node with no outgoing edges. Edges are attached by
    /// [`GraphBuilder::build`](crate::graph::GraphBuilder::build) from the
    /// edges registered on the builder.
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            kind,
            outgoing: Vec::new(),
            multi_instance: false,
            hooks: ExecutionHooks::default(),
        }
    }

    /// Marks this node as a multi-instance (repeating) activity.
    #[must_use]
    pub fn with_multi_instance(mut self) -> Self {
        self.multi_instance = true;
        self
    }

    /// Appends an on-enter hook identifier to this node's decoration.
    #[must_use]
    pub fn with_enter_hook(mut self, hook: impl Into<String>) -> Self {
        self.hooks.on_enter.push(hook.into());
        self
    }

    /// Appends an on-exit hook identifier to this node's decoration.
    #[must_use]
    pub fn with_exit_hook(mut self, hook: impl Into<String>) -> Self {
        self.hooks.on_exit.push(hook.into());
        self
    }

    /// Stable identifier of this node within its process definition.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The node's shape in the process taxonomy.
    #[must_use]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Outgoing edges in definition order.
    #[must_use]
    pub fn outgoing(&self) -> &[SequenceEdge] {
        &self.outgoing
    }

    /// Whether this node declares multi-instance (repeating) execution.
    #[must_use]
    pub fn is_multi_instance(&self) -> bool {
        self.multi_instance
    }

    /// The hook decoration attached at build time.
    #[must_use]
    pub fn hooks(&self) -> &ExecutionHooks {
        &self.hooks
    }

    pub(crate) fn attach_outgoing(&mut self, edge: SequenceEdge) {
        self.outgoing.push(edge);
    }
}

/// Immutable on-enter/on-exit hook identifiers decorating a node.
///
/// Hooks are resolved and fired by an external executor; the resolver never
/// reads them. They exist so that a process definition can carry its
/// listener wiring through the same immutable snapshot as its topology.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecutionHooks {
    on_enter: Vec<String>,
    on_exit: Vec<String>,
}

impl ExecutionHooks {
    /// Hook identifiers fired when the node is entered.
    #[must_use]
    pub fn on_enter(&self) -> &[String] {
        &self.on_enter
    }

    /// Hook identifiers fired when the node is left.
    #[must_use]
    pub fn on_exit(&self) -> &[String] {
        &self.on_exit
    }

    /// True when no hooks are attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.on_enter.is_empty() && self.on_exit.is_empty()
    }
}
