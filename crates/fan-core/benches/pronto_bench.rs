//! Criterion benchmarks for the Pronto decoder.
//!
//! Decoding happens once per button press, right before the IR transmit call,
//! so it sits directly on the press-to-emit path.
//!
//! Run with:
//! ```bash
//! cargo bench --package fan-core --bench pronto_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fan_core::{decode_pronto, CommandCatalog, FanCommand};

// ── Benchmark groups ──────────────────────────────────────────────────────────

/// Benchmarks `decode_pronto` for every built-in command.
fn bench_decode_builtin(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_pronto");
    for cmd in FanCommand::ALL {
        group.bench_with_input(BenchmarkId::new("cmd", cmd), cmd.pronto(), |b, code| {
            b.iter(|| decode_pronto(black_box(code)).expect("decode must succeed"))
        });
    }
    group.finish();
}

/// Benchmarks catalog lookup followed by decoding, as the transmitter does it.
fn bench_lookup_and_decode(c: &mut Criterion) {
    let catalog = CommandCatalog::builtin();
    c.bench_function("lookup_and_decode/off", |b| {
        b.iter(|| {
            let code = catalog.get(black_box("off")).expect("off must exist");
            decode_pronto(code).expect("decode must succeed")
        })
    });
}

/// Benchmarks rejection of a malformed code (fails on the last group).
fn bench_decode_malformed(c: &mut Criterion) {
    let mut code = FanCommand::Off.pronto().to_string();
    code.push_str(" ZZZZ");
    c.bench_function("decode_pronto/malformed_tail", |b| {
        b.iter(|| decode_pronto(black_box(&code)).expect_err("must be rejected"))
    });
}

criterion_group!(
    benches,
    bench_decode_builtin,
    bench_lookup_and_decode,
    bench_decode_malformed
);
criterion_main!(benches);
