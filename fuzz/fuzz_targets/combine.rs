//! Fuzz target for combine.
//!
//! Folding per-chunk values with combine must reproduce the one-shot value.

#![no_main]

use arbitrary::Arbitrary;
use isocksum::{ChecksumCombine, Iso8473};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  splits: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  if data.is_empty() {
    return;
  }

  // Normalize splits to valid range and sort
  let mut splits: Vec<usize> = input.splits.iter().map(|s| s % (data.len() + 1)).collect();
  splits.push(data.len());
  splits.sort();
  splits.dedup();

  let mut acc = 0u16;
  let mut prev = 0;
  for &split in &splits {
    let chunk = &data[prev..split];
    acc = <Iso8473 as ChecksumCombine>::combine(acc, Iso8473::checksum(chunk), chunk.len());
    prev = split;
  }

  assert_eq!(acc, Iso8473::checksum(data), "combine chain mismatch");
});
