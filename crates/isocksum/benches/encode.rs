//! One-shot encode/verify benchmarks through the dispatch path.
//!
//! Run: `cargo bench -p isocksum --bench encode`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use isocksum::Iso8473;

/// Standard benchmark sizes, including one-past segment lengths.
const SIZES: [usize; 7] = [64, 256, 1492, 4102, 4103, 65536, 1048576];

fn make_data(size: usize) -> Vec<u8> {
  (0..size).map(|i| (i as u8).wrapping_mul(17).wrapping_add(1)).collect()
}

fn bench_encode(c: &mut Criterion) {
  let mut group = c.benchmark_group("iso8473/encode");
  eprintln!("iso8473 backend: {}", isocksum::backend_name());

  for size in SIZES {
    let data = make_data(size);
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      let mut buf = data.clone();
      b.iter(|| core::hint::black_box(isocksum::encode(&mut buf, size, size / 2)));
    });
  }

  group.finish();
}

fn bench_verify(c: &mut Criterion) {
  let mut group = c.benchmark_group("iso8473/verify");

  for size in SIZES {
    let mut data = make_data(size);
    if isocksum::encode(&mut data, size, size / 2).is_err() {
      panic!("encode failed for size={size}");
    }
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      b.iter(|| core::hint::black_box(isocksum::verify(data, size, size / 2)));
    });
  }

  group.finish();
}

fn bench_streaming(c: &mut Criterion) {
  let mut group = c.benchmark_group("iso8473/streaming-1500");

  for size in [65536usize, 1048576] {
    let data = make_data(size);
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      b.iter(|| {
        let mut h = Iso8473::new();
        for chunk in data.chunks(1500) {
          h.update(chunk);
        }
        core::hint::black_box(h.finalize())
      });
    });
  }

  group.finish();
}

criterion_group!(benches, bench_encode, bench_verify, bench_streaming,);
criterion_main!(benches);
