//! Blocking/non-blocking classification of flow nodes.
//!
//! These predicates decide, at every traversal step, whether a node is a
//! real checkpoint or is traversed transparently. They are pure and
//! stateless; the resolver calls them on resolved edge targets.

use crate::graph::FlowNode;
use crate::types::{GatewayKind, NodeKind};

/// True only for parallel and inclusive gateways, the two shapes that fan
/// the traversal out into independent branch walks instead of being passed
/// through linearly.
#[must_use]
pub fn is_fan_out_gateway(node: &FlowNode) -> bool {
    matches!(
        node.kind(),
        NodeKind::Gateway(GatewayKind::Parallel | GatewayKind::Inclusive)
    )
}

/// True for nodes the traversal walks straight through: exclusive and
/// event-based gateways, and every event except an end event.
#[must_use]
pub fn is_pass_through(node: &FlowNode) -> bool {
    match node.kind() {
        NodeKind::Gateway(GatewayKind::Exclusive | GatewayKind::EventBased) => true,
        NodeKind::Event(_) => !node.kind().is_end_event(),
        _ => false,
    }
}

/// True when the resolved edge target does not constitute a checkpoint.
///
/// Absent targets (implicit steps) are always non-blocking; so are fan-out
/// gateways and pass-through nodes. End events, tasks, sub-processes, and
/// call-activities block: they are the checkpoints the traversal exists to
/// find.
#[must_use]
pub fn is_non_blocking(target: Option<&FlowNode>) -> bool {
    match target {
        None => true,
        Some(node) => is_fan_out_gateway(node) || is_pass_through(node),
    }
}
