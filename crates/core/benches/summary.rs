//! Criterion benchmarks for order summary recomputation.
//!
//! Run with:
//!   cargo bench -p estate
//!
//! Results are saved to target/criterion/

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use estate::order::{OrderState, QuantityInput};
use estate::pricing::{compute_summary, PricingConfig};

/// Clamp + recompute + format, as done after every quantity change.
fn bench_recompute(c: &mut Criterion) {
    let cfg = PricingConfig::default();
    let mut group = c.benchmark_group("recompute");

    for raw in ["5", "2000", "abc", "12.5"].iter() {
        group.bench_with_input(BenchmarkId::new("text", raw), raw, |b, &raw| {
            b.iter(|| {
                let order = OrderState::default().set_quantity(QuantityInput::Text(raw.to_string()));
                let summary = compute_summary(order.quantity(), &cfg);
                black_box(summary.formatted(cfg.currency))
            });
        });
    }

    group.finish();
}

fn bench_full_range(c: &mut Criterion) {
    let cfg = PricingConfig::default();
    c.bench_function("summary_1_to_1000", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for q in 1..=1000u32 {
                acc += compute_summary(black_box(q), &cfg).total;
            }
            black_box(acc)
        });
    });
}

criterion_group!(benches, bench_recompute, bench_full_range);
criterion_main!(benches);
