//! Criterion micro-benchmarks for the yarn-path tracer.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use skein_automaton::ContactAutomaton;
use skein_bench::reference_chart;
use skein_trace::{derive_links, YarnPathTracer};

/// Benchmark: trace the 100x100 reference motif.
fn bench_trace_reference(c: &mut Criterion) {
    let grid = ContactAutomaton::new().run(&reference_chart().unwrap()).grid;
    let tracer = YarnPathTracer::new();

    c.bench_function("trace_reference_10k", |b| {
        b.iter(|| black_box(tracer.trace(black_box(&grid))));
    });
}

/// Benchmark: classify the links of a traced reference path.
fn bench_links_reference(c: &mut Criterion) {
    let grid = ContactAutomaton::new().run(&reference_chart().unwrap()).grid;
    let path = YarnPathTracer::new().trace(&grid);

    c.bench_function("links_reference_10k", |b| {
        b.iter(|| black_box(derive_links(black_box(path.points()), path.grid())));
    });
}

criterion_group!(benches, bench_trace_reference, bench_links_reference);
criterion_main!(benches);
