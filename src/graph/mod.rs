//! Process-graph model: nodes, edges, and the immutable snapshot.
//!
//! A process definition is expressed as [`FlowNode`]s connected by
//! [`SequenceEdge`]s and frozen into a [`ProcessGraph`] by the
//! [`GraphBuilder`]. The snapshot is read-only for the lifetime of a
//! process-definition version; the resolver only ever borrows from it.
//!
//! # Core Concepts
//!
//! - **Nodes**: typed vertices (tasks, gateways, events) with ordered
//!   outgoing edges and an immutable hook decoration
//! - **Edges**: directed connections carrying guard conditions and the
//!   anchor-skip marker
//! - **Implicit steps**: [`EdgeTarget::ImplicitStep`] models an automatic
//!   step the definition never materialized as a node
//! - **Validation**: [`GraphBuilder::build`] rejects dangling references so
//!   the traversal can assume a well-formed snapshot
//!
//! # Quick Start
//!
//! ```rust
//! use flowreach::graph::{FlowNode, GraphBuilder, SequenceEdge};
//! use flowreach::types::{EventKind, GatewayKind, NodeKind, TaskKind};
//!
//! let graph = GraphBuilder::new()
//!     .add_node(FlowNode::new("submit", NodeKind::Task(TaskKind::User)))
//!     .add_node(FlowNode::new("route", NodeKind::Gateway(GatewayKind::Exclusive)))
//!     .add_node(FlowNode::new("review", NodeKind::Task(TaskKind::User)))
//!     .add_node(FlowNode::new("done", NodeKind::Event(EventKind::End)))
//!     .add_edge(SequenceEdge::new("complete", "submit", "route"))
//!     .add_edge(SequenceEdge::new("needs-review", "route", "review"))
//!     .add_edge(SequenceEdge::new("auto-close", "route", "done"))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(graph.node("route").unwrap().outgoing().len(), 2);
//! ```

mod builder;
mod edge;
mod node;
mod snapshot;

pub use builder::{GraphBuilder, GraphDefinitionError};
pub use edge::{EdgeTarget, SequenceEdge};
pub use node::{ExecutionHooks, FlowNode};
pub use snapshot::{EdgesIter, NodesIter, ProcessGraph};
