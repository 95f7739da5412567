use chart_core::{ForceSimulation, GraphLink, GraphNode};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn gen_graph(n: usize) -> (Vec<GraphNode>, Vec<GraphLink>) {
    let nodes: Vec<GraphNode> = (0..n)
        .map(|i| GraphNode::new(format!("n{i}"), 10.0 + (i % 40) as f64, (i % 3) as u32))
        .collect();
    // ring plus a few chords
    let mut links: Vec<GraphLink> = (0..n)
        .map(|i| GraphLink::new(format!("n{i}"), format!("n{}", (i + 1) % n)))
        .collect();
    for i in (0..n).step_by(7) {
        links.push(GraphLink::new(format!("n{i}"), format!("n{}", (i + n / 2) % n)));
    }
    (nodes, links)
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("force_step");
    for &n in &[50usize, 200usize] {
        let (nodes, links) = gen_graph(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter_batched(
                || ForceSimulation::new(&nodes, &links, (800.0, 400.0)).unwrap(),
                |mut sim| {
                    for _ in 0..30 {
                        black_box(sim.step());
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
