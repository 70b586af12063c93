//! Error types for checksum operations.
//!
//! Checksum arithmetic is total over its inputs; the only failures are
//! caller contract violations when describing where a buffer and its
//! embedded checksum field are.

use core::fmt;

/// Invalid buffer length or checksum field position.
///
/// Returned before the buffer is read or written, so a failed call never
/// leaves a partially updated buffer behind.
///
/// # Examples
///
/// ```
/// use traits::FieldError;
///
/// fn check(len: usize, capacity: usize) -> Result<(), FieldError> {
///   if len > capacity {
///     return Err(FieldError::LengthExceedsBuffer { len, capacity });
///   }
///   Ok(())
/// }
///
/// assert!(check(10, 8).is_err());
/// assert!(check(8, 8).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum FieldError {
  /// The covered length is larger than the buffer.
  LengthExceedsBuffer {
    /// Requested covered length.
    len: usize,
    /// Actual buffer length.
    capacity: usize,
  },
  /// The checksum field does not fit inside the covered length.
  PositionOutOfRange {
    /// 1-based field position.
    position: usize,
    /// Covered length.
    len: usize,
  },
  /// The operation needs a checksum field but position `0` was given.
  MissingPosition,
  /// The buffer is too short to hold the structure being addressed.
  Truncated {
    /// Octets required.
    needed: usize,
    /// Octets available.
    available: usize,
  },
}

impl fmt::Display for FieldError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::LengthExceedsBuffer { len, capacity } => {
        write!(f, "length {len} exceeds buffer of {capacity} octets")
      }
      Self::PositionOutOfRange { position, len } => {
        write!(f, "checksum field at position {position} does not fit in {len} octets")
      }
      Self::MissingPosition => f.write_str("checksum field position required"),
      Self::Truncated { needed, available } => {
        write!(f, "truncated: need {needed} octets, have {available}")
      }
    }
  }
}

impl core::error::Error for FieldError {}
