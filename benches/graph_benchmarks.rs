use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use incidence::{GraphStore, Slot};

/// Benchmark endpoint attach throughput around a hub vertex
fn bench_attach(c: &mut Criterion) {
    let mut group = c.benchmark_group("attach");

    for size in [100, 1000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut store = GraphStore::new();
                let hub = store.create_vertex();
                store.set_payload(hub, 0i64).unwrap();
                for i in 0..size {
                    let v = store.create_vertex();
                    store.set_payload(v, i as i64).unwrap();
                    let e = store.create_edge();
                    store.add_endpoint(e, hub).unwrap();
                    store.add_endpoint(e, v).unwrap();
                }
                criterion::black_box(store.edge_count());
            });
        });
    }
    group.finish();
}

/// Benchmark endpoint reassignment churn on a fixed topology
fn bench_reassignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("reassignment");

    for size in [100, 1000].iter() {
        // Setup: a chain of edges off one hub
        let mut store: GraphStore<i64> = GraphStore::new();
        let hub = store.create_vertex();
        let spare = store.create_vertex();
        let mut edges = Vec::new();
        for _ in 0..*size {
            let v = store.create_vertex();
            let e = store.create_edge();
            store.add_endpoint(e, hub).unwrap();
            store.add_endpoint(e, v).unwrap();
            edges.push(e);
        }

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                for &e in &edges {
                    store.change_endpoint(e, hub, spare).unwrap();
                    store.change_endpoint(e, spare, hub).unwrap();
                }
            });
        });
    }
    group.finish();
}

/// Benchmark incident-edge snapshot reads on a dense vertex
fn bench_incidence_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("incidence_snapshot");

    for size in [100, 1000, 10_000].iter() {
        let mut store: GraphStore<i64> = GraphStore::new();
        let hub = store.create_vertex();
        for _ in 0..*size {
            let v = store.create_vertex();
            let e = store.create_edge();
            store.add_endpoint(e, hub).unwrap();
            store.add_endpoint(e, v).unwrap();
        }

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let snapshot = store.incident_edges(hub).unwrap();
                criterion::black_box(snapshot.len());
            });
        });
    }
    group.finish();
}

/// Benchmark slot clearing, which walks the remove-then-add notification path
fn bench_detach(c: &mut Criterion) {
    let mut group = c.benchmark_group("detach");

    for size in [100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut store: GraphStore<i64> = GraphStore::new();
                let hub = store.create_vertex();
                let mut edges = Vec::new();
                for _ in 0..size {
                    let e = store.create_edge();
                    store.add_endpoint(e, hub).unwrap();
                    edges.push(e);
                }
                for &e in &edges {
                    store.clear_endpoint(e, Slot::One).unwrap();
                }
                criterion::black_box(store.incident_edges(hub).unwrap().len());
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_attach,
    bench_reassignment,
    bench_incidence_snapshot,
    bench_detach
);
criterion_main!(benches);
