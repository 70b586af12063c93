//! Running-sum state, kernel signature and kernel names.
//!
//! # Kernel Tiers
//!
//! - Tier 0 (Reference): closed-form weighted sum, no segmentation
//! - Tier 1 (Portable): literal RFC 1008 loop, one octet per step
//! - Tier 2 (Portable): four octets per step
//!
//! Every kernel returns sums congruent (mod 255) to the octet-by-octet loop
//! and must not overflow on up to [`MODX`](crate::MODX) octets starting from
//! reduced sums. Reduction at segment boundaries is done by the caller.

use crate::constants::MODULUS;

/// The two running sums of the ISO 8473 checksum.
///
/// `c0` is the plain sum of the octets, `c1` the sum of the partial sums of
/// `c0`. Both are in `[0, 255)` whenever a segment boundary has just been
/// crossed; inside a segment they hold unreduced values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sums {
  pub c0: u32,
  pub c1: u32,
}

impl Sums {
  /// Sums of the empty message.
  pub const ZERO: Self = Self { c0: 0, c1: 0 };

  /// Reduce both sums mod 255.
  #[inline]
  #[must_use]
  pub const fn reduce(self) -> Self {
    Self {
      c0: self.c0 % MODULUS,
      c1: self.c1 % MODULUS,
    }
  }

  /// Pack reduced sums as `(c1 << 8) | c0`.
  #[inline]
  #[must_use]
  pub const fn combined(self) -> u16 {
    let s = self.reduce();
    ((s.c1 as u16) << 8) | (s.c0 as u16)
  }

  /// Unpack a combined value produced by [`combined`](Self::combined).
  #[inline]
  #[must_use]
  pub const fn from_combined(value: u16) -> Self {
    Self {
      c0: (value & 0xFF) as u32,
      c1: (value >> 8) as u32,
    }
    .reduce()
  }

  /// True when both reduced sums are zero, i.e. the message checks.
  #[inline]
  #[must_use]
  pub const fn is_zero(self) -> bool {
    let s = self.reduce();
    s.c0 == 0 && s.c1 == 0
  }
}

/// Kernel signature: fold `data` into the running sums.
pub type IsoFn = fn(Sums, &[u8]) -> Sums;

/// Reference (closed-form) kernel name.
pub const REFERENCE: &str = "reference";
/// Portable octet-at-a-time kernel name.
pub const PORTABLE_BYTEWISE: &str = "portable/bytewise";
/// Portable four-octets-per-step kernel name.
pub const PORTABLE_UNROLL4: &str = "portable/unroll4";

/// Portable kernel name for a buffer of `len` octets.
#[inline]
#[must_use]
pub const fn portable_name_for_len(len: usize, bytewise_to_unroll4: usize) -> &'static str {
  if len < bytewise_to_unroll4 {
    PORTABLE_BYTEWISE
  } else {
    PORTABLE_UNROLL4
  }
}

/// The result of kernel selection.
#[derive(Clone, Copy, Debug)]
pub struct Selected {
  /// Human-readable name of the selected kernel.
  pub name: &'static str,
  /// The selected kernel function.
  pub func: IsoFn,
}

impl Selected {
  /// Pair a kernel with its reported name.
  #[inline]
  #[must_use]
  pub const fn new(name: &'static str, func: IsoFn) -> Self {
    Self { name, func }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn combined_packs_c1_high() {
    let s = Sums { c0: 0x30, c1: 0xA8 };
    assert_eq!(s.combined(), 0xA830);
    assert_eq!(Sums::from_combined(0xA830), s);
  }

  #[test]
  fn combined_reduces_first() {
    let s = Sums { c0: 255 + 7, c1: 3 * 255 };
    assert_eq!(s.combined(), 0x0007);
    assert!(Sums { c0: 510, c1: 255 }.is_zero());
  }

  #[test]
  fn from_combined_folds_ff() {
    // 0xFF is congruent to zero.
    assert!(Sums::from_combined(0xFFFF).is_zero());
  }

  #[test]
  fn portable_name_threshold() {
    assert_eq!(portable_name_for_len(63, 64), PORTABLE_BYTEWISE);
    assert_eq!(portable_name_for_len(64, 64), PORTABLE_UNROLL4);
  }
}
