//! Benchmarks for reachability resolution.
//!
//! These benchmarks measure the traversal over the two shapes that dominate
//! real definitions: long chains of pass-through gateways and wide
//! parallel fan-out.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use flowreach::graph::{FlowNode, GraphBuilder, ProcessGraph, SequenceEdge};
use flowreach::resolver::ReachabilityResolver;
use flowreach::types::{GatewayKind, NodeKind, TaskKind};

/// Build `start -> g0 -> g1 -> … -> g{n-1} -> final` with skip-marked
/// continuations, so the whole chain collapses into one anchor.
fn build_chain_graph(length: usize) -> ProcessGraph {
    let mut builder = GraphBuilder::new()
        .add_node(FlowNode::new("start", NodeKind::Task(TaskKind::User)))
        .add_node(FlowNode::new("final", NodeKind::Task(TaskKind::User)));
    for i in 0..length {
        builder = builder.add_node(FlowNode::new(
            format!("g{i}"),
            NodeKind::Gateway(GatewayKind::Exclusive),
        ));
    }

    builder = builder.add_edge(SequenceEdge::new("e0", "start", "g0"));
    for i in 1..length {
        builder = builder.add_edge(
            SequenceEdge::new(format!("e{i}"), format!("g{}", i - 1), format!("g{i}")).skipped(),
        );
    }
    builder = builder.add_edge(
        SequenceEdge::new("tail", format!("g{}", length - 1), "final").skipped(),
    );

    builder.build().unwrap()
}

/// Build a parallel gateway fanning out into `n` tasks.
fn build_fan_out_graph(branches: usize) -> ProcessGraph {
    let mut builder = GraphBuilder::new()
        .add_node(FlowNode::new("start", NodeKind::Task(TaskKind::User)))
        .add_node(FlowNode::new(
            "fork",
            NodeKind::Gateway(GatewayKind::Parallel),
        ))
        .add_edge(SequenceEdge::new("a", "start", "fork"));
    for i in 0..branches {
        builder = builder
            .add_node(FlowNode::new(
                format!("t{i}"),
                NodeKind::Task(TaskKind::Service),
            ))
            .add_edge(SequenceEdge::new(format!("b{i}"), "fork", format!("t{i}")));
    }
    builder.build().unwrap()
}

fn bench_chain_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_chain");
    for length in [8, 64, 512] {
        let graph = build_chain_graph(length);
        group.bench_with_input(BenchmarkId::from_parameter(length), &graph, |b, graph| {
            let resolver = ReachabilityResolver::new(graph);
            let start = graph.node("start").unwrap();
            b.iter(|| black_box(resolver.resolve(start).unwrap()));
        });
    }
    group.finish();
}

fn bench_fan_out_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_fan_out");
    for branches in [4, 32, 256] {
        let graph = build_fan_out_graph(branches);
        group.bench_with_input(BenchmarkId::from_parameter(branches), &graph, |b, graph| {
            let resolver = ReachabilityResolver::new(graph);
            let start = graph.node("start").unwrap();
            b.iter(|| black_box(resolver.resolve(start).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_chain_resolution, bench_fan_out_resolution);
criterion_main!(benches);
