//! Raw kernel benchmarks over a single segment and across segments.
//!
//! Run: `cargo bench -p isocksum --bench kernels`

use core::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use isocksum::{
  IsoFn, MODX, Sums,
  __internal::{bytewise, segmented, unroll4},
  reference,
};

const CASES: &[(&str, usize)] = &[("xs", 64), ("s", 256), ("seg", MODX), ("m", 64 * 1024), ("l", 1024 * 1024)];

const KERNELS: &[(&str, IsoFn)] = &[
  ("portable/bytewise", bytewise),
  ("portable/unroll4", unroll4),
  ("reference", reference::sums),
];

fn make_data(size: usize) -> Vec<u8> {
  (0..size).map(|i| (i as u8).wrapping_mul(151) ^ 0xA5).collect()
}

fn bench_kernels(c: &mut Criterion) {
  let mut group = c.benchmark_group("kernels/iso8473");
  for &(label, size) in CASES {
    let data = make_data(size);
    group.throughput(Throughput::Bytes(size as u64));

    for &(name, func) in KERNELS {
      group.bench_with_input(BenchmarkId::new(name, label), &data, |b, data| {
        b.iter(|| black_box(segmented(func, black_box(Sums::ZERO), black_box(data))));
      });
    }
  }
  group.finish();
}

criterion_group!(benches, bench_kernels);
criterion_main!(benches);
