/*
 * Star Field Benchmark
 *
 * Measures the per-frame cost of the two hot paths: advancing every star and
 * finding the pairwise connection lines, which is quadratic in the star
 * count.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use starfield::budget::FrameBudget;
use starfield::population;
use starfield::renderer::connections;
use starfield::simulation::step_particles;
use starfield::{Particle, SimulationParams, Theme, Viewport};

const STAR_COUNTS: [usize; 4] = [100, 500, 1000, 2000];

fn populate(count: usize, viewport: &Viewport, params: &SimulationParams) -> Vec<Particle> {
    let mut rng = StdRng::seed_from_u64(1);
    let mut particles = Vec::new();
    population::regenerate(&mut particles, count, &mut rng, viewport, params, Theme::Dark);
    particles
}

// Benchmark one simulation step with the pointer in the middle of the field
fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_particles");
    let viewport = Viewport::default();
    let params = SimulationParams::default();
    let pointer = Some(pt2(viewport.width / 2.0, viewport.height / 2.0));

    for count in STAR_COUNTS.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &n| {
            let mut particles = populate(n, &viewport, &params);
            let budget = FrameBudget::for_population(&params, n);
            let mut rng = StdRng::seed_from_u64(2);

            b.iter(|| {
                step_particles(&mut particles, &params, &budget, pointer, &viewport, &mut rng);
                black_box(&particles);
            });
        });
    }

    group.finish();
}

// Benchmark the O(n^2) connection pass
fn bench_connections(c: &mut Criterion) {
    let mut group = c.benchmark_group("connections");
    let viewport = Viewport::default();
    let params = SimulationParams::default();

    for count in STAR_COUNTS.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &n| {
            let particles = populate(n, &viewport, &params);
            let budget = FrameBudget::for_population(&params, n);

            b.iter(|| black_box(connections(&particles, &budget, params.max_line_thickness).count()));
        });
    }

    group.finish();
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_step, bench_connections
}

criterion_main!(benches);
