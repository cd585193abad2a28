//! Interner benchmarks.
//!
//! Programs intern a few hundred distinct names and look each up many
//! times, so the duplicate path matters more than first insertion.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use numera_mem::StringInterner;

fn bench_intern_fresh(c: &mut Criterion) {
    let mut group = c.benchmark_group("intern_fresh");

    for size in [10, 100, 1_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let names: Vec<String> = (0..size).map(|i| format!("x{i}")).collect();
            b.iter(|| {
                let mut interner = StringInterner::new();
                for name in &names {
                    black_box(interner.intern(name));
                }
            });
        });
    }

    group.finish();
}

fn bench_intern_repeat(c: &mut Criterion) {
    let mut interner = StringInterner::new();
    let names: Vec<String> = (0..256).map(|i| format!("binder_{i}")).collect();
    for name in &names {
        interner.intern(name);
    }

    c.bench_function("intern_repeat_256", |b| {
        b.iter(|| {
            for name in &names {
                black_box(interner.intern(name));
            }
        });
    });
}

fn bench_resolve(c: &mut Criterion) {
    let mut interner = StringInterner::new();
    let symbols: Vec<_> = (0..256).map(|i| interner.intern(&format!("v{i}"))).collect();

    c.bench_function("resolve_256", |b| {
        b.iter(|| {
            for &sym in &symbols {
                black_box(interner.resolve(sym));
            }
        });
    });
}

criterion_group!(benches, bench_intern_fresh, bench_intern_repeat, bench_resolve);
criterion_main!(benches);
