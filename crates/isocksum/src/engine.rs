//! The checksum engine: encode, verify and field derivation.
//!
//! Positions follow RFC 1008: `k` is 1-based and names the first of the two
//! checksum octets, which sit at zero-based indices `k - 1` and `k`. `k = 0`
//! means the message has no checksum field.
//!
//! ```
//! let mut pdu = [0x01, 0x02, 0xEE, 0xEE, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A];
//!
//! // The field is zeroed before accumulation; its old contents do not matter.
//! let running = isocksum::encode(&mut pdu, 10, 3)?;
//! assert_eq!(running, 0xA830);
//! assert_eq!(&pdu[2..4], &[0xA8, 0x27]);
//!
//! assert!(isocksum::verify(&pdu, 10, 3)?);
//! pdu[7] ^= 0x10;
//! assert!(!isocksum::verify(&pdu, 10, 3)?);
//! # Ok::<(), isocksum::FieldError>(())
//! ```

use traits::FieldError;

use crate::{
  constants::{FIELD_SIZE, MODULUS},
  dispatch,
  iso8473::Iso8473,
  kernels::Sums,
};

/// The covered prefix `buf[..len]`.
#[inline]
fn covered(buf: &[u8], len: usize) -> Result<&[u8], FieldError> {
  buf.get(..len).ok_or(FieldError::LengthExceedsBuffer {
    len,
    capacity: buf.len(),
  })
}

/// Zero-based index of the first checksum octet, `None` for `k = 0`.
#[inline]
fn field_start(len: usize, k: usize) -> Result<Option<usize>, FieldError> {
  if k == 0 {
    return Ok(None);
  }
  match k.checked_add(FIELD_SIZE - 1) {
    Some(end) if end <= len => Ok(Some(k - 1)),
    _ => Err(FieldError::PositionOutOfRange { position: k, len }),
  }
}

/// Derive the two checksum octets from the sums of the message with its
/// field zeroed.
///
/// `iq` is computed with a truncating remainder and lifted into `1..=255`
/// when non-positive; `ir` is folded back below 256. Neither octet can come
/// out zero.
#[must_use]
pub(crate) fn derive_octets(sums: Sums, len: usize, k: usize) -> [u8; 2] {
  let m = i128::from(MODULUS);
  let c0 = i128::from(sums.c0);
  let c1 = i128::from(sums.c1);
  let tail = (len - k) as i128;

  let mut iq = (tail * c0 - c1) % m;
  if iq <= 0 {
    iq += m;
  }

  let mut ir = 2 * m - c0 - iq;
  if ir > m {
    ir -= m;
  }

  [iq as u8, ir as u8]
}

/// Encode the checksum field of `buf[..len]` in place.
///
/// When `k > 0` the two field octets are zeroed, the message is accumulated
/// and the octets are replaced by values that make the whole message check
/// to zero. When `k = 0` nothing is written.
///
/// Returns the combined value `(c1 << 8) | c0` of the message with its field
/// zeroed.
///
/// # Errors
///
/// [`FieldError::LengthExceedsBuffer`] if `len > buf.len()`;
/// [`FieldError::PositionOutOfRange`] if `k > 0` and `k + 1 > len`. The
/// buffer is untouched on error.
pub fn encode(buf: &mut [u8], len: usize, k: usize) -> Result<u16, FieldError> {
  let capacity = buf.len();
  let message = buf
    .get_mut(..len)
    .ok_or(FieldError::LengthExceedsBuffer { len, capacity })?;
  let start = field_start(len, k)?;

  if let Some(start) = start
    && let Some([q, r]) = message.get_mut(start..start + FIELD_SIZE)
  {
    *q = 0;
    *r = 0;
  }

  let sums = dispatch::accumulate(message);

  if let Some(start) = start
    && let Some([q, r]) = message.get_mut(start..start + FIELD_SIZE)
  {
    [*q, *r] = derive_octets(sums, len, k);
  }

  Ok(sums.combined())
}

/// Report whether `buf[..len]` checks, exactly as received.
///
/// Runs the same accumulation as [`encode`] without zeroing or inserting
/// anything; the message checks when both sums are zero. `k` is validated
/// but does not change the computation, since the field takes part in the
/// sums as ordinary data.
///
/// # Errors
///
/// Same contract violations as [`encode`]. A message that does not check is
/// `Ok(false)`.
pub fn verify(buf: &[u8], len: usize, k: usize) -> Result<bool, FieldError> {
  let message = covered(buf, len)?;
  field_start(len, k)?;
  Ok(dispatch::accumulate(message).is_zero())
}

/// Compute the checksum field [`encode`] would insert, without writing it.
///
/// The field octets are treated as zero whatever they currently hold. The
/// result is the two octets packed big-endian, i.e. the value of a 16-bit
/// checksum field in a network-order header.
///
/// # Errors
///
/// [`FieldError::MissingPosition`] if `k = 0`, plus the contract
/// violations of [`encode`].
pub fn checksum_field(buf: &[u8], len: usize, k: usize) -> Result<u16, FieldError> {
  let message = covered(buf, len)?;
  let start = field_start(len, k)?.ok_or(FieldError::MissingPosition)?;

  let (head, rest) = message
    .split_at_checked(start)
    .ok_or(FieldError::PositionOutOfRange { position: k, len })?;
  let tail = rest
    .get(FIELD_SIZE..)
    .ok_or(FieldError::PositionOutOfRange { position: k, len })?;

  let mut hasher = Iso8473::new();
  hasher.update(head);
  hasher.update(&[0; FIELD_SIZE]);
  hasher.update(tail);

  Ok(u16::from_be_bytes(derive_octets(hasher.sums(), len, k)))
}

/// Combined value `(c1 << 8) | c0` of the whole slice.
///
/// Equivalent to `encode(buf, buf.len(), 0)` without the mutable borrow.
#[inline]
#[must_use]
pub fn checksum(data: &[u8]) -> u16 {
  dispatch::accumulate(data).combined()
}
