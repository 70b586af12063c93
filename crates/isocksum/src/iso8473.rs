//! Streaming ISO 8473 (RFC 1008 §7.2.1) checksum.
//!
//! # Usage
//!
//! ```
//! use isocksum::{Checksum, Iso8473};
//!
//! let pdu = [0x01, 0x02, 0xA8, 0x27, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A];
//!
//! let mut hasher = Iso8473::new();
//! hasher.update(&pdu[..4]);
//! hasher.update(&pdu[4..]);
//! assert_eq!(hasher.finalize(), Iso8473::checksum(&pdu));
//! assert!(hasher.is_self_checking());
//! ```

use traits::{Checksum, ChecksumCombine, EmbeddedChecksum, FieldError};

use crate::{
  config,
  constants::{FIELD_SIZE, MODULUS, MODX},
  dispatch, engine,
  introspect::KernelIntrospect,
  kernels::Sums,
};

/// Streaming ISO 8473 checksum.
///
/// Segment boundaries are tracked across [`update`](Self::update) calls, so
/// reductions happen at the same absolute offsets as in the one-shot
/// computation however the input is split.
///
/// [`finalize`](Self::finalize) returns the combined value
/// `(c1 << 8) | c0`. A message that carries a correctly encoded checksum
/// field finalizes to zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Iso8473 {
  /// Running sums; reduced whenever `fill == 0`.
  sums: Sums,
  /// Octets consumed in the current segment.
  fill: usize,
  /// Initial value for reset.
  initial: Sums,
}

impl Iso8473 {
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self {
      sums: Sums::ZERO,
      fill: 0,
      initial: Sums::ZERO,
    }
  }

  /// Create a hasher that continues after data whose combined value was
  /// `combined`.
  #[inline]
  #[must_use]
  pub const fn resume(combined: u16) -> Self {
    let sums = Sums::from_combined(combined);
    Self {
      sums,
      fill: 0,
      initial: sums,
    }
  }

  /// Compute the combined value of `data` in one shot.
  #[inline]
  #[must_use]
  pub fn checksum(data: &[u8]) -> u16 {
    engine::checksum(data)
  }

  pub fn update(&mut self, data: &[u8]) {
    let kernel = dispatch::select(&config::get(), data.len()).func;
    let mut rest = data;
    while !rest.is_empty() {
      let room = MODX - self.fill;
      let (segment, tail) = rest.split_at(room.min(rest.len()));
      self.sums = kernel(self.sums, segment);
      self.fill += segment.len();
      if self.fill == MODX {
        self.sums = self.sums.reduce();
        self.fill = 0;
      }
      rest = tail;
    }
  }

  /// Reduced running sums.
  #[inline]
  #[must_use]
  pub const fn sums(&self) -> Sums {
    self.sums.reduce()
  }

  #[inline]
  #[must_use]
  pub const fn finalize(&self) -> u16 {
    self.sums.combined()
  }

  /// True when everything hashed so far checks to zero.
  #[inline]
  #[must_use]
  pub const fn is_self_checking(&self) -> bool {
    self.sums.is_zero()
  }

  #[inline]
  pub fn reset(&mut self) {
    self.sums = self.initial;
    self.fill = 0;
  }

  /// Combine two combined values: `checksum(A || B)` from `checksum(A)`,
  /// `checksum(B)` and `len(B)`.
  ///
  /// Every partial sum over `B` also carries `c0(A)`, hence
  /// `c1 = c1(A) + len(B)·c0(A) + c1(B)`.
  #[inline]
  #[must_use]
  pub const fn combine(sum_a: u16, sum_b: u16, len_b: usize) -> u16 {
    let a = Sums::from_combined(sum_a);
    let b = Sums::from_combined(sum_b);
    let len_b = (len_b % MODULUS as usize) as u32;
    Sums {
      c0: a.c0 + b.c0,
      c1: a.c1 + len_b * a.c0 + b.c1,
    }
    .combined()
  }
}

impl Default for Iso8473 {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl Checksum for Iso8473 {
  const OUTPUT_SIZE: usize = 2;
  type Output = u16;

  #[inline]
  fn new() -> Self {
    Iso8473::new()
  }

  #[inline]
  fn with_initial(initial: Self::Output) -> Self {
    Iso8473::resume(initial)
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    Iso8473::update(self, data);
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    Iso8473::finalize(self)
  }

  #[inline]
  fn reset(&mut self) {
    Iso8473::reset(self);
  }

  #[inline]
  fn checksum(data: &[u8]) -> Self::Output {
    Iso8473::checksum(data)
  }
}

impl ChecksumCombine for Iso8473 {
  #[inline]
  fn combine(sum_a: Self::Output, sum_b: Self::Output, len_b: usize) -> Self::Output {
    Iso8473::combine(sum_a, sum_b, len_b)
  }
}

impl EmbeddedChecksum for Iso8473 {
  const FIELD_SIZE: usize = FIELD_SIZE;
  type Output = u16;

  #[inline]
  fn encode(buf: &mut [u8], len: usize, position: usize) -> Result<u16, FieldError> {
    engine::encode(buf, len, position)
  }

  #[inline]
  fn verify(buf: &[u8], len: usize, position: usize) -> Result<bool, FieldError> {
    engine::verify(buf, len, position)
  }

  #[inline]
  fn field_value(buf: &[u8], len: usize, position: usize) -> Result<u16, FieldError> {
    engine::checksum_field(buf, len, position)
  }
}

impl KernelIntrospect for Iso8473 {
  fn kernel_name_for_len(len: usize) -> &'static str {
    dispatch::kernel_name_for_len(len)
  }

  fn backend_name() -> &'static str {
    dispatch::backend_name()
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::vec::Vec;

  use super::*;
  use crate::reference;

  fn pattern(len: usize, seed: u8) -> Vec<u8> {
    (0..len)
      .map(|i| (i as u8).wrapping_mul(97).wrapping_add(seed))
      .collect()
  }

  #[test]
  fn streaming_matches_oneshot_across_segments() {
    let data = pattern(2 * MODX + 333, 11);
    let oneshot = reference::combined(&data);
    for chunk in [1usize, 3, 4, 64, 1000, MODX - 1, MODX, MODX + 1] {
      let mut h = Iso8473::new();
      for piece in data.chunks(chunk) {
        h.update(piece);
      }
      assert_eq!(h.finalize(), oneshot, "chunk={chunk}");
    }
  }

  #[test]
  fn finalize_is_idempotent_and_non_consuming() {
    let mut h = Iso8473::new();
    h.update(b"abc");
    let first = h.finalize();
    assert_eq!(h.finalize(), first);
    h.update(b"def");
    assert_eq!(h.finalize(), Iso8473::checksum(b"abcdef"));
  }

  #[test]
  fn reset_restores_initial() {
    let mut h = Iso8473::resume(0x1234);
    h.update(&[9; 5000]);
    h.reset();
    assert_eq!(h, Iso8473::resume(0x1234));
  }

  #[test]
  fn resume_continues() {
    let data = pattern(9000, 3);
    let (a, b) = data.split_at(4321);
    let mut h = Iso8473::resume(Iso8473::checksum(a));
    h.update(b);
    assert_eq!(h.finalize(), Iso8473::checksum(&data));
  }

  #[test]
  fn combine_matches_oneshot() {
    let data = pattern(700, 42);
    for split in [0usize, 1, 255, 256, 699, 700] {
      let (a, b) = data.split_at(split);
      let combined = Iso8473::combine(Iso8473::checksum(a), Iso8473::checksum(b), b.len());
      assert_eq!(combined, Iso8473::checksum(&data), "split={split}");
    }
  }

  #[test]
  fn embedded_trait_round_trip() {
    let mut buf = pattern(64, 5);
    let value = <Iso8473 as EmbeddedChecksum>::seal(&mut buf, 20).unwrap();
    assert_eq!(value, reference::combined(&{
      let mut z = buf.clone();
      z[19] = 0;
      z[20] = 0;
      z
    }));
    assert!(<Iso8473 as EmbeddedChecksum>::verify(&buf, 64, 20).unwrap());
    let field = <Iso8473 as EmbeddedChecksum>::field_value(&buf, 64, 20).unwrap();
    assert_eq!(field.to_be_bytes(), [buf[19], buf[20]]);
  }
}
