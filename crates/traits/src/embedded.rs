//! Checksums stored inside the buffer they protect.

use core::fmt::Debug;

use crate::FieldError;

/// A checksum whose value lives in a fixed-size field inside the protected
/// buffer, chosen so the whole buffer checks to a known constant.
///
/// Positions are 1-based: `position = k` addresses the field occupying
/// zero-based indices `k - 1 .. k - 1 + FIELD_SIZE`. `position = 0` means the
/// buffer carries no field.
///
/// Only the first `len` octets of the buffer are covered. Arguments are
/// validated before the buffer is touched; see [`FieldError`].
pub trait EmbeddedChecksum {
  /// Width of the embedded field in octets.
  const FIELD_SIZE: usize;

  /// Value returned by [`encode`](Self::encode) and
  /// [`field_value`](Self::field_value).
  type Output: Copy + Eq + Debug;

  /// Insert the checksum field so that `buf[..len]` becomes self-checking.
  ///
  /// Returns the running checksum computed with the field zeroed.
  fn encode(buf: &mut [u8], len: usize, position: usize) -> Result<Self::Output, FieldError>;

  /// Report whether `buf[..len]` checks, as received.
  ///
  /// A mismatch is `Ok(false)`, never an error.
  fn verify(buf: &[u8], len: usize, position: usize) -> Result<bool, FieldError>;

  /// Compute the field contents [`encode`](Self::encode) would insert,
  /// without writing them.
  fn field_value(buf: &[u8], len: usize, position: usize) -> Result<Self::Output, FieldError>;

  /// [`encode`](Self::encode) over the whole slice.
  #[inline]
  fn seal(buf: &mut [u8], position: usize) -> Result<Self::Output, FieldError> {
    let len = buf.len();
    Self::encode(buf, len, position)
  }
}
