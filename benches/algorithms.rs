#![allow(unused)]
extern crate graphstep;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use graphstep::prelude::*;
use std::hint::black_box;

/// Builds a `side` x `side` grid with bidirectional edges and deterministic weights.
fn grid(side: usize) -> AnnotatedGraph {
    let mut graph = AnnotatedGraph::new();
    let mut ids = Vec::with_capacity(side * side);
    for row in 0..side {
        for col in 0..side {
            let id = graph
                .add_node_at(format!("{row}:{col}"), col as f64, row as f64)
                .unwrap();
            ids.push(id);
        }
    }
    for row in 0..side {
        for col in 0..side {
            let here = ids[row * side + col];
            let weight = ((row * 7 + col * 3) % 5 + 1) as f64;
            if col + 1 < side {
                graph
                    .add_edge(here, ids[row * side + col + 1], Some(weight), true)
                    .unwrap();
            }
            if row + 1 < side {
                graph
                    .add_edge(here, ids[(row + 1) * side + col], Some(weight + 1.0), true)
                    .unwrap();
            }
        }
    }
    graph
}

/// Creates every catalogue algorithm with its node arguments pointing at opposite corners.
fn configured(graph: &AnnotatedGraph) -> Vec<Box<dyn Algorithm>> {
    let start = NodeId::new(0);
    let end = NodeId::new(graph.node_count() - 1);
    let mut algorithms = catalog(&HeuristicRegistry::with_presets());
    for algorithm in &mut algorithms {
        let _ = algorithm.set_argument("Start", ArgumentValue::Node(start));
        let _ = algorithm.set_argument("End", ArgumentValue::Node(end));
    }
    algorithms
}

/// Benchmark running each algorithm to completion on a 12x12 grid
///
/// Every suspension point formats one event, so this measures the sequencing and event
/// rendering overhead together with the algorithm itself.
fn bench_run_to_completion(c: &mut Criterion) {
    let template = grid(12);
    let algorithms = configured(&template);

    let mut group = c.benchmark_group("run_to_completion");
    group.throughput(Throughput::Elements(template.node_count() as u64));
    for algorithm in &algorithms {
        group.bench_with_input(
            BenchmarkId::from_parameter(algorithm.name()),
            algorithm,
            |b, algorithm| {
                let mut graph = template.clone();
                b.iter(|| {
                    let mut run = Run::start(&mut graph, &**algorithm).unwrap();
                    black_box(run.run_to_completion())
                });
            },
        );
    }
    group.finish();
}

/// Benchmark checkpoint-by-checkpoint driving against plain stepping for Dijkstra
fn bench_driving_modes(c: &mut Criterion) {
    let template = grid(12);
    let mut dijkstra = Dijkstra::new();
    dijkstra
        .set_argument(Dijkstra::START, ArgumentValue::Node(NodeId::new(0)))
        .unwrap();

    let mut group = c.benchmark_group("dijkstra_driving");
    group.bench_function("step", |b| {
        let mut graph = template.clone();
        b.iter(|| {
            let mut run = Run::start(&mut graph, &dijkstra).unwrap();
            while run.step().is_some() {}
            black_box(run.events().len())
        });
    });
    group.bench_function("skip_to_checkpoint", |b| {
        let mut graph = template.clone();
        b.iter(|| {
            let mut run = Run::start(&mut graph, &dijkstra).unwrap();
            while run.skip_to_checkpoint().is_some() {}
            black_box(run.events().len())
        });
    });
    group.finish();
}

/// Benchmark the priority queue snapshot rendered after every queue change
fn bench_queue_snapshot(c: &mut Criterion) {
    let mut queue = PriorityQueue::new();
    for i in 0..64u32 {
        queue.push(i, f64::from((i * 37) % 101));
    }

    c.bench_function("priority_queue_render", |b| {
        b.iter(|| black_box(queue.render_with(|i| i.to_string(), |p| p.to_string())));
    });
}

criterion_group!(
    benches,
    bench_run_to_completion,
    bench_driving_modes,
    bench_queue_snapshot
);
criterion_main!(benches);
