#![allow(dead_code)]

use flowreach::graph::FlowNode;
use flowreach::types::{EventKind, GatewayKind, NodeKind, TaskKind};

pub fn user_task(id: &str) -> FlowNode {
    FlowNode::new(id, NodeKind::Task(TaskKind::User))
}

pub fn service_task(id: &str) -> FlowNode {
    FlowNode::new(id, NodeKind::Task(TaskKind::Service))
}

pub fn gateway(id: &str, kind: GatewayKind) -> FlowNode {
    FlowNode::new(id, NodeKind::Gateway(kind))
}

pub fn event(id: &str, kind: EventKind) -> FlowNode {
    FlowNode::new(id, NodeKind::Event(kind))
}

/// Installs a fmt subscriber honoring `RUST_LOG`; repeated calls are no-ops.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
