//! The transition model: the resolver's output.
//!
//! A [`TransitionModel`] maps each anchor edge to the ordered,
//! duplicate-free checkpoints reachable through it, plus a flag recording
//! whether the originating node repeats (multi-instance). It is created
//! fresh for every resolution, populated only by the resolver, and treated
//! as immutable by consumers.
//!
//! # JSON Serialization Format
//!
//! The model serializes to JSON so platforms can persist it alongside the
//! process instance and look transitions up later by the operation a user
//! chose:
//!
//! ```json
//! {
//!   "multi_instance": false,
//!   "entries": [
//!     {
//!       "id": "approve",
//!       "name": "Approve",
//!       "condition": {"type": "expression", "value": "${outcome == 'approve'}"},
//!       "checkpoints": [
//!         {"type": "activity", "id": "sign", "kind": {"family": "task", "kind": "user"}},
//!         {"type": "path_end"}
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! # Condition filtering
//!
//! Guard conditions ride along unexamined. A consumer evaluates each entry's
//! condition with its own expression or scripting engine and narrows the
//! model with [`TransitionModel::filtered`]:
//!
//! ```rust
//! # use flowreach::graph::{FlowNode, GraphBuilder, SequenceEdge};
//! # use flowreach::resolver::ReachabilityResolver;
//! # use flowreach::types::{NodeKind, TaskKind};
//! # use flowreach::condition::Condition;
//! # let graph = GraphBuilder::new()
//! #     .add_node(FlowNode::new("a", NodeKind::Task(TaskKind::User)))
//! #     .add_node(FlowNode::new("b", NodeKind::Task(TaskKind::User)))
//! #     .add_edge(SequenceEdge::new("go", "a", "b")
//! #         .with_condition(Condition::expression("${ok}")))
//! #     .build()
//! #     .unwrap();
//! # let model = ReachabilityResolver::new(&graph)
//! #     .resolve(graph.node("a").unwrap())
//! #     .unwrap();
//! let allowed = model.filtered(|entry| {
//!     // evaluate entry.condition() against process variables here
//!     entry.condition().is_some()
//! });
//! assert_eq!(allowed.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::condition::Condition;
use crate::graph::SequenceEdge;
use crate::resolver::GraphIntegrityError;
use crate::types::NodeKind;

/// One reachable stop recorded under an anchor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Checkpoint {
    /// A user- or system-visible activity, identified by node id and kind.
    Activity { id: String, kind: NodeKind },
    /// The path terminates at an end event: no further visible activity.
    PathEnd,
}

impl Checkpoint {
    /// Creates an activity checkpoint.
    pub fn activity(id: impl Into<String>, kind: NodeKind) -> Self {
        Self::Activity {
            id: id.into(),
            kind,
        }
    }

    /// The activity's node id, or `None` for an end-of-path marker.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Activity { id, .. } => Some(id),
            Self::PathEnd => None,
        }
    }

    /// True for the end-of-path marker.
    #[must_use]
    pub fn is_path_end(&self) -> bool {
        matches!(self, Self::PathEnd)
    }
}

/// Checkpoints grouped under one anchor edge, with the anchor's metadata.
///
/// The id, name, and condition are copied from the anchor
/// [`SequenceEdge`](crate::graph::SequenceEdge) when the first checkpoint is
/// recorded; the condition is never evaluated here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionEntry {
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    condition: Option<Condition>,
    checkpoints: Vec<Checkpoint>,
}

impl TransitionEntry {
    /// Id of the anchor edge.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name of the anchor edge, when the definition names it.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Guard condition of the anchor edge, carried through unexamined.
    #[must_use]
    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    /// Checkpoints in discovery order, free of duplicate activity ids.
    #[must_use]
    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.checkpoints
    }
}

/// Mapping from anchor edges to reachable checkpoints.
///
/// Entries keep insertion order, which (together with the resolver's
/// deterministic walk) makes repeated resolutions of the same graph produce
/// byte-identical serialized models.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionModel {
    #[serde(default)]
    multi_instance: bool,
    entries: Vec<TransitionEntry>,
}

impl TransitionModel {
    pub(crate) fn new(multi_instance: bool) -> Self {
        Self {
            multi_instance,
            entries: Vec::new(),
        }
    }

    /// Records a checkpoint under an anchor, creating the entry on first
    /// use and enforcing the duplicate invariant.
    ///
    /// A repeated activity id under one anchor is a malformed graph and
    /// fails loudly; a repeated end-of-path marker identifies no node and is
    /// collapsed as an idempotent insert.
    pub(crate) fn add(
        &mut self,
        anchor: &SequenceEdge,
        checkpoint: Checkpoint,
    ) -> Result<(), GraphIntegrityError> {
        let idx = match self.entries.iter().position(|e| e.id == anchor.id()) {
            Some(idx) => idx,
            None => {
                self.entries.push(TransitionEntry {
                    id: anchor.id().to_owned(),
                    name: anchor.name().map(str::to_owned),
                    condition: anchor.condition().cloned(),
                    checkpoints: Vec::new(),
                });
                self.entries.len() - 1
            }
        };
        let entry = &mut self.entries[idx];

        match &checkpoint {
            Checkpoint::Activity { id, .. } => {
                if entry.checkpoints.iter().any(|c| c.id() == Some(id.as_str())) {
                    return Err(GraphIntegrityError::DuplicateCheckpoint {
                        anchor: entry.id.clone(),
                        node: id.clone(),
                    });
                }
            }
            // A second end-of-path marker identifies no node; collapse it.
            Checkpoint::PathEnd => {
                if entry.checkpoints.iter().any(Checkpoint::is_path_end) {
                    return Ok(());
                }
            }
        }
        entry.checkpoints.push(checkpoint);
        Ok(())
    }

    /// Whether the originating node declares multi-instance execution.
    #[must_use]
    pub fn has_multi_instance(&self) -> bool {
        self.multi_instance
    }

    /// Looks an entry up by anchor edge id.
    #[must_use]
    pub fn transition(&self, anchor_id: &str) -> Option<&TransitionEntry> {
        self.entries.iter().find(|e| e.id == anchor_id)
    }

    /// The checkpoints recorded under an anchor, if any were.
    #[must_use]
    pub fn checkpoints_for(&self, anchor_id: &str) -> Option<&[Checkpoint]> {
        self.transition(anchor_id).map(TransitionEntry::checkpoints)
    }

    /// Iterates entries in discovery order.
    pub fn transitions(&self) -> std::slice::Iter<'_, TransitionEntry> {
        self.entries.iter()
    }

    /// Number of anchors with at least one checkpoint.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no checkpoints were discovered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a copy keeping only entries the predicate accepts.
    ///
    /// This is the seam for external condition evaluation: the caller's
    /// predicate typically evaluates [`TransitionEntry::condition`] against
    /// the current process variables and drops entries whose guard fails.
    #[must_use]
    pub fn filtered<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&TransitionEntry) -> bool,
    {
        let entries = self
            .entries
            .iter()
            .filter(|entry| {
                let keep = predicate(entry);
                if !keep {
                    tracing::debug!(transition = %entry.id, "transition rejected by condition filter");
                }
                keep
            })
            .cloned()
            .collect();
        Self {
            multi_instance: self.multi_instance,
            entries,
        }
    }

    /// Serializes the model to JSON for persistence on a process instance.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Restores a model previously serialized with [`to_json`](Self::to_json).
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
