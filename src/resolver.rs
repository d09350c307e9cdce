//! Reachability resolution over process-graph snapshots.
//!
//! This is the core traversal: starting from a node's outgoing edges, walk
//! the graph depth-first, absorb chains of non-blocking nodes into their
//! anchor edge, and fan out through parallel/inclusive gateways while
//! keeping the original anchor as the attachment point. The result is a
//! [`TransitionModel`] mapping each anchor edge to the checkpoints reachable
//! through it.
//!
//! # Anchors
//!
//! Every checkpoint is attached to an *anchor* edge. Each outgoing edge of
//! the start node anchors itself. While chasing through a pass-through node,
//! a continuation edge becomes the new anchor unless it carries the skip
//! marker, in which case the current anchor is kept; an anchor, once chosen
//! for a checkpoint, is never re-derived. Fan-out walks never change the
//! anchor at all: every branch of a parallel or inclusive gateway reports
//! its checkpoints under the edge that led into the gateway.
//!
//! # Failure
//!
//! The traversal is pure and bounded. A repeated checkpoint under one anchor
//! means the graph cycles through non-blocking nodes and fails immediately;
//! a cycle that never reaches a checkpoint is cut off by the traversal
//! limit. Both surface as [`GraphIntegrityError`] naming the anchor and the
//! offending node, and both are fatal to the single `resolve` call — the
//! same immutable input would fail identically on retry.
//!
//! # Examples
//!
//! ```rust
//! use flowreach::graph::{FlowNode, GraphBuilder, SequenceEdge};
//! use flowreach::resolver::ReachabilityResolver;
//! use flowreach::types::{GatewayKind, NodeKind, TaskKind};
//!
//! let graph = GraphBuilder::new()
//!     .add_node(FlowNode::new("review", NodeKind::Task(TaskKind::User)))
//!     .add_node(FlowNode::new("fork", NodeKind::Gateway(GatewayKind::Parallel)))
//!     .add_node(FlowNode::new("sign", NodeKind::Task(TaskKind::User)))
//!     .add_node(FlowNode::new("archive", NodeKind::Task(TaskKind::Service)))
//!     .add_edge(SequenceEdge::new("approve", "review", "fork"))
//!     .add_edge(SequenceEdge::new("fork-sign", "fork", "sign"))
//!     .add_edge(SequenceEdge::new("fork-archive", "fork", "archive"))
//!     .build()
//!     .unwrap();
//!
//! let start = graph.node("review").unwrap();
//! let model = ReachabilityResolver::new(&graph).resolve(start).unwrap();
//!
//! // Both branches land under the single outgoing edge of the start node.
//! let checkpoints = model.checkpoints_for("approve").unwrap();
//! assert_eq!(checkpoints.len(), 2);
//! ```

use miette::Diagnostic;
use thiserror::Error;

use crate::classify;
use crate::graph::{EdgeTarget, FlowNode, ProcessGraph, SequenceEdge};
use crate::model::{Checkpoint, TransitionModel};

/// Default bound on traversal steps along any chain of non-blocking nodes.
///
/// Well-formed graphs stay far below this (chain length is bounded by the
/// number of edges in the definition); the limit exists to turn cycles of
/// non-blocking nodes into an error instead of an endless walk.
pub const DEFAULT_TRAVERSAL_LIMIT: usize = 2048;

/// A malformed process graph was detected during resolution.
///
/// Always fatal to the current [`ReachabilityResolver::resolve`] call and
/// never worth retrying: the input graph is immutable, so the same call
/// would fail the same way.
#[derive(Debug, Error, Diagnostic)]
pub enum GraphIntegrityError {
    /// The same checkpoint was reached twice from one anchor edge without
    /// crossing a blocking node.
    #[error("duplicate checkpoint {node} under transition {anchor}")]
    #[diagnostic(
        code(flowreach::resolver::duplicate_checkpoint),
        help(
            "The definition cycles through automatic elements, or two \
             automatic paths from one anchor converge on the same activity. \
             Break the cycle with a blocking activity or anchor the paths \
             separately."
        )
    )]
    DuplicateCheckpoint { anchor: String, node: String },

    /// The walk ran past the configured traversal limit.
    #[error("traversal limit of {limit} steps exceeded at {node} under transition {anchor}")]
    #[diagnostic(
        code(flowreach::resolver::traversal_limit),
        help(
            "A chain of non-blocking elements longer than the limit almost \
             always means the definition cycles without ever reaching an \
             activity."
        )
    )]
    TraversalLimitExceeded {
        anchor: String,
        node: String,
        limit: usize,
    },
}

/// Work item for the explicit traversal stack.
///
/// `Entry` corresponds to examining one edge with a current anchor; `FanOut`
/// is the branch-enumeration walk below a parallel/inclusive gateway, which
/// keeps one anchor for everything it finds.
enum Walk<'a> {
    Entry {
        edge: &'a SequenceEdge,
        anchor: &'a SequenceEdge,
        depth: usize,
    },
    FanOut {
        edge: &'a SequenceEdge,
        anchor: &'a SequenceEdge,
        depth: usize,
    },
}

/// Resolves the checkpoints reachable from a node of a [`ProcessGraph`].
///
/// The resolver is pure and single-threaded per call: it performs no I/O,
/// holds no shared mutable state, and allocates only the request-scoped
/// [`TransitionModel`] and its work list. Any number of resolvers (or calls
/// on one resolver) may run concurrently against the same snapshot.
pub struct ReachabilityResolver<'g> {
    graph: &'g ProcessGraph,
    traversal_limit: usize,
}

impl<'g> ReachabilityResolver<'g> {
    /// Creates a resolver over a graph snapshot with the default traversal
    /// limit.
    #[must_use]
    pub fn new(graph: &'g ProcessGraph) -> Self {
        Self {
            graph,
            traversal_limit: DEFAULT_TRAVERSAL_LIMIT,
        }
    }

    /// Overrides the traversal limit. Useful for definitions known to carry
    /// unusually long automatic chains, or to tighten the bound in tests.
    #[must_use]
    pub fn with_traversal_limit(mut self, limit: usize) -> Self {
        self.traversal_limit = limit;
        self
    }

    /// Computes the transition model for `start`.
    ///
    /// Never returns an empty error: a node with no outgoing edges yields an
    /// empty model. The start node's multi-instance characteristic is
    /// recorded on the model before any traversal happens.
    ///
    /// # Errors
    ///
    /// [`GraphIntegrityError`] when the walk detects a duplicate checkpoint
    /// under one anchor or overruns the traversal limit.
    pub fn resolve(&self, start: &FlowNode) -> Result<TransitionModel, GraphIntegrityError> {
        let mut model = TransitionModel::new(start.is_multi_instance());
        let mut work: Vec<Walk<'_>> = Vec::new();

        // Reverse push keeps LIFO popping in definition order, so the walk
        // reproduces depth-first, edge-by-edge recursion deterministically.
        for edge in start.outgoing().iter().rev() {
            work.push(Walk::Entry {
                edge,
                anchor: edge,
                depth: 0,
            });
        }

        while let Some(item) = work.pop() {
            match item {
                Walk::Entry {
                    edge,
                    anchor,
                    depth,
                } => {
                    self.check_depth(edge, anchor, depth)?;
                    match self.graph.target_of(edge) {
                        // Implicit step: non-blocking and chain-terminal.
                        None => {}
                        Some(node) if classify::is_fan_out_gateway(node) => {
                            work.push(Walk::FanOut {
                                edge,
                                anchor,
                                depth,
                            });
                        }
                        Some(node) if classify::is_pass_through(node) => {
                            for next in node.outgoing().iter().rev() {
                                let next_anchor = if next.is_skipped() { anchor } else { next };
                                work.push(Walk::Entry {
                                    edge: next,
                                    anchor: next_anchor,
                                    depth: depth + 1,
                                });
                            }
                        }
                        Some(node) => {
                            model.add(anchor, checkpoint_for(node))?;
                        }
                    }
                }
                Walk::FanOut {
                    edge,
                    anchor,
                    depth,
                } => {
                    self.check_depth(edge, anchor, depth)?;
                    let target = self.graph.target_of(edge);
                    match target {
                        // Implicit step: the fan-out branch ends here.
                        None => {}
                        // Still inside the fan-out: keep walking every
                        // branch under the original anchor. A node with no
                        // outgoing edges is a legal dead end in partial
                        // models and contributes nothing.
                        Some(node) if classify::is_non_blocking(target) => {
                            for next in node.outgoing().iter().rev() {
                                work.push(Walk::FanOut {
                                    edge: next,
                                    anchor,
                                    depth: depth + 1,
                                });
                            }
                        }
                        Some(node) => {
                            model.add(anchor, checkpoint_for(node))?;
                        }
                    }
                }
            }
        }

        Ok(model)
    }

    fn check_depth(
        &self,
        edge: &SequenceEdge,
        anchor: &SequenceEdge,
        depth: usize,
    ) -> Result<(), GraphIntegrityError> {
        if depth > self.traversal_limit {
            return Err(GraphIntegrityError::TraversalLimitExceeded {
                anchor: anchor.id().to_owned(),
                node: offending_id(edge),
                limit: self.traversal_limit,
            });
        }
        Ok(())
    }
}

fn checkpoint_for(node: &FlowNode) -> Checkpoint {
    if node.kind().is_end_event() {
        // End of path is represented, not omitted: the anchor stays visible
        // with an explicit no-further-activity marker.
        Checkpoint::PathEnd
    } else {
        Checkpoint::activity(node.id(), node.kind().clone())
    }
}

fn offending_id(edge: &SequenceEdge) -> String {
    match edge.target() {
        EdgeTarget::Node(id) => id.clone(),
        EdgeTarget::ImplicitStep => edge.id().to_owned(),
    }
}
