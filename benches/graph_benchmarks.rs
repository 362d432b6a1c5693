use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use minigraph::algo::{bfs_shortest_path, dfs_traversal};
use minigraph::graph::{GraphStore, PropertyMap, PropertyValue};
use minigraph::{props, Traversal};

/// Chain n0 -> n1 -> ... -> n{size-1} with a shortcut every tenth node
fn chain_store(size: usize) -> GraphStore {
    let store = GraphStore::new();
    for i in 0..size {
        store
            .add_node(format!("n{}", i), "Person", props! { "name" => format!("Person{}", i), "depth" => i as i64 })
            .unwrap();
    }
    for i in 0..size - 1 {
        store
            .add_edge(format!("e{}", i), "KNOWS", format!("n{}", i), format!("n{}", i + 1), PropertyMap::new())
            .unwrap();
        if i % 10 == 0 && i + 10 < size {
            store
                .add_edge(format!("s{}", i), "SKIP", format!("n{}", i), format!("n{}", i + 10), PropertyMap::new())
                .unwrap();
        }
    }
    store
}

/// Benchmark node insertion throughput
fn bench_node_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("node_insertion");

    for size in [100, 1000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let store = GraphStore::new();
                for i in 0..size {
                    store
                        .add_node(format!("p{}", i), "Person", props! { "name" => format!("Person{}", i), "age" => (i % 100) as i64 })
                        .unwrap();
                }
            });
        });
    }
    group.finish();
}

/// Benchmark index lookup against a full traversal filter
fn bench_find_nodes(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_nodes");

    for size in [100, 1000, 10_000].iter() {
        let store = GraphStore::new();
        for i in 0..*size {
            store
                .add_node(format!("p{}", i), "Person", props! { "age" => (i % 100) as i64 })
                .unwrap();
        }
        let age = PropertyValue::Integer(25);

        group.bench_with_input(BenchmarkId::new("index", size), size, |b, _| {
            b.iter(|| criterion::black_box(store.find_nodes("Person", "age", &age).len()));
        });
        group.bench_with_input(BenchmarkId::new("scan", size), size, |b, _| {
            b.iter(|| criterion::black_box(Traversal::new(&store).v().has("age", 25).count()));
        });
    }
    group.finish();
}

/// Benchmark multi-hop traversal latency
fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");
    let store = chain_store(100);

    group.bench_function("1_hop", |b| {
        b.iter(|| criterion::black_box(Traversal::new(&store).v().out("KNOWS").values("name").len()));
    });

    group.bench_function("2_hop", |b| {
        b.iter(|| criterion::black_box(Traversal::new(&store).v().out("KNOWS").out("KNOWS").count()));
    });

    group.finish();
}

/// Benchmark the path algorithms on a chain with shortcuts
fn bench_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("algorithms");
    let store = chain_store(1000);

    group.bench_function("bfs_end_to_end", |b| {
        b.iter(|| criterion::black_box(bfs_shortest_path(&store, "n0", "n999").unwrap().hops()));
    });

    group.bench_function("dfs_full", |b| {
        b.iter(|| criterion::black_box(dfs_traversal(&store, "n0", |_| {}).unwrap()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_node_insertion,
    bench_find_nodes,
    bench_traversal,
    bench_algorithms,
);
criterion_main!(benches);
