//! IS-IS link-state PDU checksum helpers (ISO 10589).
//!
//! The LSP checksum covers everything from the LSP ID to the end of the PDU
//! as declared in its header. Remaining lifetime and the common header are
//! excluded so routers can age an LSP without recomputing it.
//!
//! ```
//! use isocksum::lsp::{self, LspIntegrity};
//!
//! let mut pdu = [0u8; 40];
//! pdu[lsp::PDU_LENGTH_OFFSET..][..2].copy_from_slice(&40u16.to_be_bytes());
//! pdu[lsp::REMAINING_LIFETIME_OFFSET..][..2].copy_from_slice(&1200u16.to_be_bytes());
//! pdu[lsp::LSP_ID_OFFSET] = 0x19;
//!
//! lsp::seal(&mut pdu)?;
//! assert_eq!(lsp::check(&pdu)?, LspIntegrity::Valid);
//! # Ok::<(), isocksum::FieldError>(())
//! ```

use traits::FieldError;

use crate::{constants::FIELD_SIZE, engine};

/// Length of the CLNS common header.
pub const COMMON_HEADER_LEN: usize = 8;
/// Offset of the 16-bit PDU length.
pub const PDU_LENGTH_OFFSET: usize = 8;
/// Offset of the 16-bit remaining lifetime.
pub const REMAINING_LIFETIME_OFFSET: usize = 10;
/// Offset of the LSP ID; checksum coverage starts here.
pub const LSP_ID_OFFSET: usize = 12;
/// System ID, pseudonode ID and fragment number.
pub const LSP_ID_LEN: usize = 8;
/// Offset of the 32-bit sequence number.
pub const SEQUENCE_NUMBER_OFFSET: usize = 20;
/// Offset of the 16-bit checksum field.
pub const CHECKSUM_OFFSET: usize = 24;
/// Fixed LSP header length, up to and including the flags octet.
pub const HEADER_LEN: usize = 27;
/// Largest LSP a router is required to accept.
pub const RECEIVE_LSP_BUFFER_SIZE: usize = 1492;

/// 1-based checksum position relative to the covered region.
pub const CHECKSUM_POSITION: usize = CHECKSUM_OFFSET - LSP_ID_OFFSET + 1;

/// Outcome of [`check`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LspIntegrity {
  /// The checksum verifies.
  Valid,
  /// The checksum does not verify, or the PDU is larger than
  /// [`RECEIVE_LSP_BUFFER_SIZE`].
  Corrupt,
  /// Zero remaining lifetime; the checksum is not evaluated.
  Purge,
}

impl LspIntegrity {
  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Valid => "valid",
      Self::Corrupt => "corrupt",
      Self::Purge => "purge",
    }
  }
}

fn read_u16(pdu: &[u8], offset: usize) -> Result<u16, FieldError> {
  match pdu.get(offset..offset + 2) {
    Some(&[hi, lo]) => Ok(u16::from_be_bytes([hi, lo])),
    _ => Err(FieldError::Truncated {
      needed: offset + 2,
      available: pdu.len(),
    }),
  }
}

/// Declared PDU length, checked against the header and the buffer.
pub fn pdu_length(pdu: &[u8]) -> Result<usize, FieldError> {
  if pdu.len() < HEADER_LEN {
    return Err(FieldError::Truncated {
      needed: HEADER_LEN,
      available: pdu.len(),
    });
  }
  let declared = usize::from(read_u16(pdu, PDU_LENGTH_OFFSET)?);
  if declared < HEADER_LEN || declared > pdu.len() {
    return Err(FieldError::Truncated {
      needed: declared.max(HEADER_LEN),
      available: pdu.len(),
    });
  }
  Ok(declared)
}

/// Remaining lifetime in seconds.
pub fn remaining_lifetime(pdu: &[u8]) -> Result<u16, FieldError> {
  read_u16(pdu, REMAINING_LIFETIME_OFFSET)
}

/// The region the checksum covers: LSP ID through the declared PDU length.
fn covered_mut(pdu: &mut [u8]) -> Result<&mut [u8], FieldError> {
  let len = pdu_length(pdu)?;
  let available = pdu.len();
  pdu
    .get_mut(LSP_ID_OFFSET..len)
    .ok_or(FieldError::Truncated { needed: len, available })
}

fn covered(pdu: &[u8]) -> Result<&[u8], FieldError> {
  let len = pdu_length(pdu)?;
  pdu.get(LSP_ID_OFFSET..len).ok_or(FieldError::Truncated {
    needed: len,
    available: pdu.len(),
  })
}

/// Write the LSP checksum in place and return the 16-bit field value.
///
/// Octets past the declared PDU length are left alone.
///
/// # Errors
///
/// [`FieldError::Truncated`] if the buffer is shorter than the fixed header
/// or the declared PDU length does not fit the buffer.
pub fn seal(pdu: &mut [u8]) -> Result<u16, FieldError> {
  let region = covered_mut(pdu)?;
  let len = region.len();
  engine::encode(region, len, CHECKSUM_POSITION)?;
  let start = CHECKSUM_POSITION - 1;
  match region.get(start..start + FIELD_SIZE) {
    Some(&[q, r]) => Ok(u16::from_be_bytes([q, r])),
    _ => Err(FieldError::PositionOutOfRange {
      position: CHECKSUM_POSITION,
      len,
    }),
  }
}

/// Checksum field value [`seal`] would write, without touching the PDU.
pub fn expected_checksum(pdu: &[u8]) -> Result<u16, FieldError> {
  let region = covered(pdu)?;
  engine::checksum_field(region, region.len(), CHECKSUM_POSITION)
}

/// Classify a received LSP.
///
/// Oversized PDUs are corrupt regardless of contents. A purge (zero remaining
/// lifetime) is reported before the checksum is looked at, since purges may
/// carry a stale or zeroed checksum.
///
/// # Errors
///
/// [`FieldError::Truncated`] for PDUs shorter than the fixed header or whose
/// declared length exceeds the buffer.
pub fn check(pdu: &[u8]) -> Result<LspIntegrity, FieldError> {
  let len = pdu_length(pdu)?;
  if len > RECEIVE_LSP_BUFFER_SIZE {
    return Ok(LspIntegrity::Corrupt);
  }
  if remaining_lifetime(pdu)? == 0 {
    return Ok(LspIntegrity::Purge);
  }
  let region = covered(pdu)?;
  if engine::verify(region, region.len(), CHECKSUM_POSITION)? {
    Ok(LspIntegrity::Valid)
  } else {
    Ok(LspIntegrity::Corrupt)
  }
}
