//! Closed-form reference implementation.
//!
//! This module is the "source of truth" the segmented kernels are checked
//! against. For a message `b[0..n]` the running sums are
//!
//! ```text
//! c0 = Σ b[i]          mod 255
//! c1 = Σ b[i]·(n − i)  mod 255
//! ```
//!
//! computed here in 128-bit arithmetic with a single reduction at the end, so
//! no segmentation is involved at all. It is:
//!
//! - **Obviously correct**: mirrors the definition, not the RFC loop
//! - **Const-evaluable**: golden values are asserted at compile time
//!
//! Use for test oracles and auditing; the portable kernels are faster.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts.
#![allow(clippy::indexing_slicing)]

use crate::{constants::MODULUS, kernels::Sums};

/// Fold `data` into `init` and return the reduced sums.
///
/// Continuing from `init` adds `len(data)·c0` to `c1`, because every partial
/// sum over `data` still carries the previous `c0`.
#[must_use]
pub const fn sums(init: Sums, data: &[u8]) -> Sums {
  let n = data.len() as u128;
  let mut c0 = init.c0 as u128;
  let mut c1 = init.c1 as u128 + n * c0;

  let mut i: usize = 0;
  while i < data.len() {
    let b = data[i] as u128;
    c0 += b;
    c1 += b * (n - i as u128);
    i += 1;
  }

  Sums {
    c0: (c0 % MODULUS as u128) as u32,
    c1: (c1 % MODULUS as u128) as u32,
  }
}

/// Combined value `(c1 << 8) | c0` of `data`.
#[must_use]
pub const fn combined(data: &[u8]) -> u16 {
  sums(Sums::ZERO, data).combined()
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

/// Hand-run example: checksum field at 1-based position 3, zeroed.
const GOLDEN_INPUT: &[u8] = &[0x01, 0x02, 0x00, 0x00, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A];
/// The same message after encoding (iq = 0xA8, ir = 0x27).
const GOLDEN_SEALED: &[u8] = &[0x01, 0x02, 0xA8, 0x27, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A];

// c0 = 48, c1 = 168
const _: () = assert!(combined(GOLDEN_INPUT) == 0xA830);
const _: () = assert!(sums(Sums::ZERO, GOLDEN_SEALED).is_zero());
const _: () = assert!(combined(&[]) == 0);

#[cfg(test)]
mod tests {
  use super::*;

  fn loop_sums(data: &[u8]) -> Sums {
    let mut c0 = 0u64;
    let mut c1 = 0u64;
    for &b in data {
      c0 += u64::from(b);
      c1 += c0;
    }
    Sums {
      c0: (c0 % 255) as u32,
      c1: (c1 % 255) as u32,
    }
  }

  #[test]
  fn matches_running_loop() {
    let data: [u8; 1024] = core::array::from_fn(|i| (i as u8).wrapping_mul(31).wrapping_add(7));
    for len in [0usize, 1, 2, 3, 17, 255, 256, 1024] {
      assert_eq!(sums(Sums::ZERO, &data[..len]), loop_sums(&data[..len]), "len={len}");
    }
  }

  #[test]
  fn incremental_equals_oneshot() {
    let data = b"The quick brown fox jumps over the lazy dog";
    let oneshot = sums(Sums::ZERO, data);

    for split in 0..=data.len() {
      let first = sums(Sums::ZERO, &data[..split]);
      let second = sums(first, &data[split..]);
      assert_eq!(second, oneshot, "Incremental mismatch at split {split}");
    }
  }

  #[test]
  fn single_octets() {
    for byte in 0u8..=255 {
      let s = sums(Sums::ZERO, &[byte]);
      let expected = u32::from(byte) % 255;
      assert_eq!(s, Sums { c0: expected, c1: expected });
    }
  }

  #[test]
  fn all_ff_is_zero() {
    // 0xFF ≡ 0 (mod 255): all-ones messages are indistinguishable from zeros.
    assert!(sums(Sums::ZERO, &[0xFF; 300]).is_zero());
  }
}
