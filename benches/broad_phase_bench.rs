use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use collision2d::{BroadPhase, CollisionConfig, CollisionWorld};

// --- Helper for filling a world with a scattered field of rectangles ---
fn populate<B: BroadPhase>(world: &mut CollisionWorld<B>, num_shapes: i32) {
    for id in 0..num_shapes {
        let x = ((id * 7919) % 1820) as f64;
        let y = ((id * 104_729) % 980) as f64;
        let coords = [x, y, x + 40.0, y, x + 40.0, y + 40.0, x, y + 40.0];
        world
            .register_or_update_shape(id, &coords, false)
            .expect("benchmark shapes are valid");
    }
}

// --- One frame: rebuild the index, then query and resolve every shape ---
fn run_frame<B: BroadPhase>(world: &mut CollisionWorld<B>) -> usize {
    world.rebuild_broad_phase();
    let mut hits = 0;
    for id in world.ids() {
        for other in world.query_neighbors(id).expect("registered id") {
            if other != id && world.resolve_collision(id, other).expect("registered id").is_colliding() {
                hits += 1;
            }
        }
    }
    hits
}

// Benchmark for the quadtree-backed pipeline
fn bench_quadtree_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_frame");

    for num_shapes in [100, 1000, 5000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_shapes), num_shapes, |b, &n| {
            let mut world = CollisionWorld::new();
            populate(&mut world, n);
            b.iter(|| black_box(run_frame(&mut world)));
        });
    }
    group.finish();
}

// Benchmark for the same pipeline over a uniform grid
fn bench_grid_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_frame");

    for num_shapes in [100, 1000, 5000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_shapes), num_shapes, |b, &n| {
            let mut world = CollisionWorld::with_grid_config(CollisionConfig::default());
            populate(&mut world, n);
            b.iter(|| black_box(run_frame(&mut world)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_quadtree_frame, bench_grid_frame);
criterion_main!(benches);
