//! Core checksum traits for isocksum.
//!
//! This crate provides the trait seams that checksum implementations conform
//! to. It is `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Checksum`] | Streaming checksum over a byte sequence | ISO 8473 (RFC 1008) |
//! | [`ChecksumCombine`] | Combine checksums of adjacent chunks | ISO 8473 running sums |
//! | [`EmbeddedChecksum`] | Checksum stored inside the buffer it protects | CLNP, IS-IS LSPs |
//!
//! # Error Types
//!
//! - [`FieldError`] - Caller contract violation when addressing an embedded checksum field
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;
mod embedded;
pub mod error;
pub mod io;

pub use checksum::{Checksum, ChecksumCombine};
pub use embedded::EmbeddedChecksum;
pub use error::FieldError;
