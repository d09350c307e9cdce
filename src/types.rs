//! Core node taxonomy for process graphs.
//!
//! This module defines the kinds a [`FlowNode`](crate::graph::FlowNode) can
//! take. The taxonomy is the closed set of shapes a process definition is
//! made of: tasks, gateways, events, and the two composite activities
//! (sub-process and call-activity). The resolver dispatches on these kinds
//! at every traversal step, so the variants are deliberately flat and cheap
//! to match on.
//!
//! # Key Types
//!
//! - [`NodeKind`]: top-level tagged union over the taxonomy
//! - [`TaskKind`], [`GatewayKind`], [`EventKind`]: the per-family refinements
//!
//! # Examples
//!
//! ```rust
//! use flowreach::types::{EventKind, GatewayKind, NodeKind, TaskKind};
//!
//! let approve = NodeKind::Task(TaskKind::User);
//! let split = NodeKind::Gateway(GatewayKind::Parallel);
//! let done = NodeKind::Event(EventKind::End);
//!
//! assert!(approve.is_task());
//! assert!(split.is_gateway());
//! assert!(done.is_end_event());
//! assert_eq!(done.to_string(), "end event");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies the shape of a node within a process graph.
///
/// `NodeKind` is carried by every [`FlowNode`](crate::graph::FlowNode) and
/// echoed into resolved [`Checkpoint`](crate::model::Checkpoint)s so that
/// consumers know what each reachable activity is without a second graph
/// lookup.
///
/// # Persistence
///
/// `NodeKind` supports serialization because the transition model it ends up
/// in is persisted as JSON between resolution and consumption.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "family", content = "kind", rename_all = "snake_case")]
pub enum NodeKind {
    /// An atomic unit of work carried out by a user or the system.
    Task(TaskKind),
    /// A routing element; parallel and inclusive gateways fan the traversal
    /// out, all others are passed through transparently.
    Gateway(GatewayKind),
    /// Something that happens during the process. Only end events terminate
    /// a path; every other event is passed through.
    Event(EventKind),
    /// An embedded process fragment, opaque to the resolver.
    SubProcess,
    /// An invocation of another process definition, opaque to the resolver.
    CallActivity,
}

/// Refinement of [`NodeKind::Task`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    User,
    Service,
    Manual,
    Script,
    BusinessRule,
    Send,
    Receive,
}

/// Refinement of [`NodeKind::Gateway`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatewayKind {
    Exclusive,
    Inclusive,
    Parallel,
    EventBased,
}

/// Refinement of [`NodeKind::Event`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Start,
    Intermediate,
    Boundary,
    End,
}

impl NodeKind {
    /// Returns `true` if this is any [`Task`](Self::Task) variant.
    #[must_use]
    pub fn is_task(&self) -> bool {
        matches!(self, Self::Task(_))
    }

    /// Returns `true` if this is any [`Gateway`](Self::Gateway) variant.
    #[must_use]
    pub fn is_gateway(&self) -> bool {
        matches!(self, Self::Gateway(_))
    }

    /// Returns `true` if this is any [`Event`](Self::Event) variant.
    #[must_use]
    pub fn is_event(&self) -> bool {
        matches!(self, Self::Event(_))
    }

    /// Returns `true` only for end events, the one event kind that
    /// terminates a path instead of being traversed.
    #[must_use]
    pub fn is_end_event(&self) -> bool {
        matches!(self, Self::Event(EventKind::End))
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Task(t) => write!(f, "{t} task"),
            Self::Gateway(g) => write!(f, "{g} gateway"),
            Self::Event(e) => write!(f, "{e} event"),
            Self::SubProcess => write!(f, "sub-process"),
            Self::CallActivity => write!(f, "call activity"),
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Service => write!(f, "service"),
            Self::Manual => write!(f, "manual"),
            Self::Script => write!(f, "script"),
            Self::BusinessRule => write!(f, "business rule"),
            Self::Send => write!(f, "send"),
            Self::Receive => write!(f, "receive"),
        }
    }
}

impl fmt::Display for GatewayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exclusive => write!(f, "exclusive"),
            Self::Inclusive => write!(f, "inclusive"),
            Self::Parallel => write!(f, "parallel"),
            Self::EventBased => write!(f, "event-based"),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Intermediate => write!(f, "intermediate"),
            Self::Boundary => write!(f, "boundary"),
            Self::End => write!(f, "end"),
        }
    }
}
