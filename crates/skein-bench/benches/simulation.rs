//! End-to-end benchmark: pad, knit, trace and link a chart.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use skein::{SimConfig, Simulation};
use skein_bench::motif;

/// Benchmark: full simulation of motif charts of growing size.
fn bench_simulation(c: &mut Criterion) {
    let config = SimConfig::default();
    let mut group = c.benchmark_group("simulation");
    for size in [16u32, 64, 100] {
        let chart = motif(size, size).unwrap();
        group.bench_function(format!("motif_{size}x{size}"), |b| {
            b.iter(|| black_box(Simulation::run(black_box(&chart), &config).unwrap()));
        });
    }
    group.finish();
}

/// Benchmark: fingerprint of a finished 100x100 run.
fn bench_fingerprint(c: &mut Criterion) {
    let sim = Simulation::run(&motif(100, 100).unwrap(), &SimConfig::default()).unwrap();

    c.bench_function("fingerprint_reference_10k", |b| {
        b.iter(|| black_box(sim.fingerprint()));
    });
}

criterion_group!(benches, bench_simulation, bench_fingerprint);
criterion_main!(benches);
