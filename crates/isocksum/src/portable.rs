//! Portable accumulation kernels and the segment driver.

use crate::{
  constants::MODX,
  kernels::{IsoFn, Sums},
};

/// RFC 1008 inner loop: `c0 += b; c1 += c0` for each octet, no reduction.
#[inline]
pub fn bytewise(mut s: Sums, data: &[u8]) -> Sums {
  for &b in data {
    s.c0 += u32::from(b);
    s.c1 += s.c0;
  }
  s
}

/// Four octets per step.
///
/// Expanding four iterations of the inner loop gives
/// `c1 += 4·c0 + 4·b0 + 3·b1 + 2·b2 + b3` and `c0 += b0 + b1 + b2 + b3`, so
/// the state equals the bytewise state at every 4-octet checkpoint and the
/// same overflow bound applies.
#[inline]
pub fn unroll4(mut s: Sums, data: &[u8]) -> Sums {
  let mut chunks = data.chunks_exact(4);
  for chunk in &mut chunks {
    let &[b0, b1, b2, b3] = chunk else {
      continue;
    };
    let (b0, b1, b2, b3) = (u32::from(b0), u32::from(b1), u32::from(b2), u32::from(b3));
    s.c1 += 4 * s.c0 + 4 * b0 + 3 * b1 + 2 * b2 + b3;
    s.c0 += b0 + b1 + b2 + b3;
  }
  bytewise(s, chunks.remainder())
}

/// Drive `kernel` over consecutive segments of at most [`MODX`] octets,
/// reducing mod 255 at the end of each one.
///
/// `init` must be reduced. Boundaries fall at multiples of `MODX` from the
/// start of `data`.
#[inline]
pub fn segmented(kernel: IsoFn, init: Sums, data: &[u8]) -> Sums {
  data
    .chunks(MODX)
    .fold(init, |sums, segment| kernel(sums, segment).reduce())
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::vec::Vec;

  use super::*;
  use crate::reference;

  fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i as u8).wrapping_mul(151).wrapping_add(3)).collect()
  }

  #[test]
  fn unroll4_matches_bytewise_unreduced() {
    // Both kernels must agree on the raw in-segment state, not just mod 255.
    let data = pattern(MODX);
    for len in [0usize, 1, 3, 4, 5, 8, 63, 64, 65, 1000, MODX] {
      assert_eq!(unroll4(Sums::ZERO, &data[..len]), bytewise(Sums::ZERO, &data[..len]), "len={len}");
    }
  }

  #[test]
  fn worst_case_segment_does_not_overflow() {
    let data = [0xFFu8; MODX];
    let start = Sums { c0: 254, c1: 254 };
    let raw = bytewise(start, &data);
    assert!(raw.c1 <= i32::MAX as u32);
    assert_eq!(unroll4(start, &data), raw);
  }

  #[test]
  fn segmented_matches_reference_across_boundaries() {
    let data = pattern(3 * MODX + 17);
    for len in [0usize, 1, MODX - 1, MODX, MODX + 1, 2 * MODX, 2 * MODX + 1, data.len()] {
      let expected = reference::sums(Sums::ZERO, &data[..len]);
      assert_eq!(segmented(bytewise, Sums::ZERO, &data[..len]), expected, "bytewise len={len}");
      assert_eq!(segmented(unroll4, Sums::ZERO, &data[..len]), expected, "unroll4 len={len}");
    }
  }

  #[test]
  fn segmented_result_is_reduced() {
    let s = segmented(bytewise, Sums::ZERO, &[0x80; 10]);
    assert!(s.c0 < 255 && s.c1 < 255);
  }
}
