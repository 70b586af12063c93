//! Fuzz target for the streaming API.
//!
//! Arbitrary sequences of update calls must match the one-shot value,
//! including chunks that straddle segment boundaries.

#![no_main]

use arbitrary::Arbitrary;
use isocksum::{Iso8473, MODX};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
  /// Repeat the data to reach past a segment boundary.
  repeat: u8,
}

fuzz_target!(|input: Input| {
  let mut data = input.data;
  if !data.is_empty() {
    let target = MODX + usize::from(input.repeat);
    while usize::from(input.repeat) % 4 == 0 && data.len() < target {
      data.extend_from_within(..data.len().min(target - data.len()));
    }
  }

  let expected = Iso8473::checksum(&data);
  assert_eq!(expected, isocksum::reference::combined(&data), "one-shot mismatch");

  let mut hasher = Iso8473::new();
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if input.chunk_sizes.is_empty() {
      1
    } else {
      (input.chunk_sizes[chunk_idx % input.chunk_sizes.len()] % (2 * MODX)).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    hasher.update(&data[offset..end]);
    offset = end;
    chunk_idx += 1;
  }

  assert_eq!(hasher.finalize(), expected, "streaming mismatch");
});
