//! # Flowreach: Process-Transition Reachability Resolution
//!
//! Flowreach computes, for a node in a business-process graph, the set of
//! *checkpoints* — the next user-meaningful activities — reachable from each
//! of its outgoing edges. Automatic elements (exclusive and event-based
//! gateways, non-terminal events, implicit steps) are traversed
//! transparently; parallel and inclusive gateways fan the walk out while
//! every branch keeps reporting under the edge that led in.
//!
//! ## Core Concepts
//!
//! - **Graph model**: immutable [`ProcessGraph`](graph::ProcessGraph)
//!   snapshots of typed nodes and conditioned edges
//! - **Classification**: pure predicates deciding blocking vs. non-blocking
//!   at every step ([`classify`])
//! - **Resolution**: deterministic depth-first traversal with branch-merge
//!   semantics and cycle diagnostics ([`resolver`])
//! - **Transition model**: the request-scoped result, serializable and
//!   filterable by externally evaluated guard conditions ([`model`])
//!
//! ## Quick Start
//!
//! ```rust
//! use flowreach::graph::{FlowNode, GraphBuilder, SequenceEdge};
//! use flowreach::resolver::ReachabilityResolver;
//! use flowreach::types::{EventKind, GatewayKind, NodeKind, TaskKind};
//!
//! // review --approve--> [exclusive gw] --publish--> publish (service task)
//! //                                   \--reject---> done (end event)
//! let graph = GraphBuilder::new()
//!     .add_node(FlowNode::new("review", NodeKind::Task(TaskKind::User)))
//!     .add_node(FlowNode::new("route", NodeKind::Gateway(GatewayKind::Exclusive)))
//!     .add_node(FlowNode::new("publish", NodeKind::Task(TaskKind::Service)))
//!     .add_node(FlowNode::new("done", NodeKind::Event(EventKind::End)))
//!     .add_edge(SequenceEdge::new("approve", "review", "route"))
//!     .add_edge(SequenceEdge::new("go-publish", "route", "publish"))
//!     .add_edge(SequenceEdge::new("go-done", "route", "done"))
//!     .build()
//!     .unwrap();
//!
//! let start = graph.node("review").unwrap();
//! let model = ReachabilityResolver::new(&graph).resolve(start).unwrap();
//!
//! // The gateway is transparent; each of its edges anchors its own path.
//! assert!(model.checkpoints_for("go-publish").is_some());
//! assert!(model.checkpoints_for("go-done").is_some());
//! ```
//!
//! ## Purity and Concurrency
//!
//! Resolution is pure: no I/O, no logging from the core, no shared mutable
//! state. A [`ProcessGraph`](graph::ProcessGraph) never changes after
//! [`build`](graph::GraphBuilder::build), so concurrent resolutions against
//! one snapshot need no coordination; each call owns its work list and its
//! [`TransitionModel`](model::TransitionModel).
//!
//! ## Module Guide
//!
//! - [`types`] - Node taxonomy (tasks, gateways, events)
//! - [`graph`] - Graph model, builder, and boundary validation
//! - [`condition`] - Guard metadata carried on edges
//! - [`classify`] - Blocking/non-blocking predicates
//! - [`resolver`] - The reachability traversal and its integrity errors
//! - [`model`] - The transition model, serialization, condition filtering
//! - [`provider`] - Inbound contract for supplying graph snapshots

pub mod classify;
pub mod condition;
pub mod graph;
pub mod model;
pub mod provider;
pub mod resolver;
pub mod types;
