//! Criterion benchmarks for the patrol step and tick driver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use patrol_bench::{reference_profile, stress_profile};
use patrol_engine::{patrol_step, select, PatrolWorld, WeightField};
use patrol_test_utils::{reference_grid, REFERENCE_START};

fn bench_step_reference(c: &mut Criterion) {
    let grid = reference_grid();
    let mut field = WeightField::new(&grid);

    c.bench_function("patrol_step_10x10", |b| {
        b.iter(|| {
            let sel = patrol_step(&grid, &mut field, black_box(REFERENCE_START));
            black_box(sel);
        });
    });
}

fn bench_select_only(c: &mut Criterion) {
    let grid = reference_grid();
    let field = WeightField::new(&grid);

    c.bench_function("select_10x10", |b| {
        b.iter(|| black_box(select(&grid, &field, black_box(REFERENCE_START))));
    });
}

fn bench_frames_reference(c: &mut Criterion) {
    let mut world = PatrolWorld::new(reference_profile(5)).unwrap();

    c.bench_function("1000_frames_10x10", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                black_box(world.advance_tick());
                black_box(world.interpolated_position());
            }
        });
    });
}

fn bench_steps_stress(c: &mut Criterion) {
    let mut world = PatrolWorld::new(stress_profile(256)).unwrap();

    // Warm up so the field is no longer uniform.
    world.run(1000);

    c.bench_function("step_256x256", |b| {
        b.iter(|| black_box(world.advance_tick()));
    });
}

criterion_group!(
    benches,
    bench_step_reference,
    bench_select_only,
    bench_frames_reference,
    bench_steps_stress
);
criterion_main!(benches);
