//! ISO 8473 / RFC 1008 §7.2.1 checksum.
//!
//! The Fletcher-style position-sensitive checksum used by CLNP, ES-IS and
//! IS-IS. Two octets inside the message are chosen so that the whole message
//! checks to zero: both running sums `c0` and `c1` vanish mod 255.
//!
//! # Operations
//!
//! | Function | Mutates | Result |
//! |----------|---------|--------|
//! | [`encode`] | yes | running value `(c1 << 8) \| c0`, field inserted at `k` |
//! | [`verify`] | no | `true` when the message checks |
//! | [`checksum_field`] | no | the field `encode` would insert |
//! | [`checksum`] | no | running value of the whole slice |
//!
//! Positions are 1-based; `k = 0` means "no field".
//!
//! # Example
//!
//! ```rust
//! use isocksum::Iso8473;
//!
//! let mut pdu = [0x01, 0x02, 0x00, 0x00, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A];
//! assert_eq!(isocksum::encode(&mut pdu, 10, 3)?, 0xA830);
//! assert_eq!(&pdu[2..4], &[0xA8, 0x27]);
//! assert!(isocksum::verify(&pdu, 10, 3)?);
//!
//! // Streaming and combine agree with the one-shot value.
//! let (a, b) = pdu.split_at(6);
//! let mut hasher = Iso8473::new();
//! hasher.update(a);
//! hasher.update(b);
//! assert_eq!(hasher.finalize(), 0);
//! assert_eq!(Iso8473::combine(Iso8473::checksum(a), Iso8473::checksum(b), b.len()), 0);
//! # Ok::<(), isocksum::FieldError>(())
//! ```
//!
//! # Kernels
//!
//! Accumulation runs in segments of at most [`MODX`] octets with 32-bit sums,
//! reduced mod 255 at each boundary. Small inputs use an octet-at-a-time loop,
//! larger ones a four-octet step; see [`config`] for overrides and
//! [`KernelIntrospect`] for what was selected.
//!
//! # no_std Support
//!
//! ```toml
//! [dependencies]
//! isocksum = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod constants;
mod kernels;
mod portable;

pub mod config;
pub mod reference;

mod dispatch;
mod engine;
mod introspect;
mod iso8473;
pub mod lsp;

#[cfg(feature = "diag")]
pub mod diag;

#[doc(hidden)]
pub mod __internal {
  pub use crate::portable::{bytewise, segmented, unroll4};
}

pub use config::{IsoConfig, IsoForce, IsoTunables};
pub use constants::{FIELD_SIZE, MODX};
pub use engine::{checksum, checksum_field, encode, verify};
pub use introspect::{KernelIntrospect, kernel_for};
pub use iso8473::Iso8473;
pub use kernels::{IsoFn, Sums};
#[cfg(feature = "std")]
pub use traits::io::{ChecksumReader, ChecksumWriter};
pub use traits::{Checksum, ChecksumCombine, EmbeddedChecksum, FieldError};

/// Kernel selected for a representative (1 KiB) buffer.
#[inline]
#[must_use]
pub fn backend_name() -> &'static str {
  dispatch::backend_name()
}

/// Kernel selected for a buffer of `len` octets.
#[inline]
#[must_use]
pub fn kernel_name_for_len(len: usize) -> &'static str {
  dispatch::kernel_name_for_len(len)
}
