//! Sequence edges: the directed connections between flow nodes.

use crate::condition::Condition;

/// Where a sequence edge leads.
///
/// An explicit sum type instead of a nullable node reference: an
/// [`ImplicitStep`](Self::ImplicitStep) target models an automatic step the
/// definition never materialized as a node. It is always non-blocking and
/// always chain-terminal — there is no node to hang further edges from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EdgeTarget {
    /// The edge leads to the node with this identifier.
    Node(String),
    /// The edge leads to an implicit automatic step.
    ImplicitStep,
}

impl EdgeTarget {
    /// The target node id, unless the target is implicit.
    #[must_use]
    pub fn node_id(&self) -> Option<&str> {
        match self {
            Self::Node(id) => Some(id),
            Self::ImplicitStep => None,
        }
    }
}

/// A directed edge between two flow nodes.
///
/// Edges carry the metadata the transition model is keyed and filtered by: a
/// stable id, an optional display name, an optional guard [`Condition`], and
/// the `skip` marker. A skip-marked edge is never promoted to an anchor —
/// checkpoints discovered through it attach to the previous anchor instead.
///
/// # Examples
///
/// ```rust
/// use flowreach::condition::Condition;
/// use flowreach::graph::SequenceEdge;
///
/// let approve = SequenceEdge::new("approve", "review", "publish")
///     .with_name("Approve")
///     .with_condition(Condition::expression("${outcome == 'approve'}"));
/// assert!(!approve.is_skipped());
///
/// let connector = SequenceEdge::new("join-in", "gw1", "gw2").skipped();
/// assert!(connector.is_skipped());
/// ```
#[derive(Clone, Debug)]
pub struct SequenceEdge {
    id: String,
    name: Option<String>,
    source: String,
    target: EdgeTarget,
    condition: Option<Condition>,
    skipped: bool,
}

impl SequenceEdge {
    /// Creates an edge between two named nodes.
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: None,
            source: source.into(),
            target: EdgeTarget::Node(target.into()),
            condition: None,
            skipped: false,
        }
    }

    /// Creates an edge whose target is an implicit automatic step.
    pub fn implicit(id: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            source: source.into(),
            target: EdgeTarget::ImplicitStep,
            condition: None,
            skipped: false,
        }
    }

    /// Sets the display name shown to users choosing this transition.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attaches the guard condition governing this edge at run time.
    #[must_use]
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Flags this edge to be absorbed into the previous anchor during
    /// traversal instead of becoming an anchor itself.
    #[must_use]
    pub fn skipped(mut self) -> Self {
        self.skipped = true;
        self
    }

    /// Stable identifier; transition-model anchors are keyed by it.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Optional display name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Identifier of the source node.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Where this edge leads.
    #[must_use]
    pub fn target(&self) -> &EdgeTarget {
        &self.target
    }

    /// The guard condition, carried through resolution unexamined.
    #[must_use]
    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    /// Whether this edge carries the skip marker.
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        self.skipped
    }
}
