//! Optional diagnostics for kernel selection.
//!
//! This module is behind `cfg(feature = "diag")` and is intended for
//! explainable/debuggable kernel selection without affecting normal builds.

use crate::config::{self, IsoForce};

/// High-level reason for a selection outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionReason {
  /// A forced mode was active (length threshold bypassed).
  Forced,
  /// Below the bytewise→unroll4 transition threshold.
  BelowUnrollThreshold,
  /// Normal auto selection.
  Auto,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionDiag {
  pub len: usize,
  pub reason: SelectionReason,
  pub requested_force: IsoForce,
  pub effective_force: IsoForce,
  pub selected_kernel: &'static str,
  pub bytewise_to_unroll4: usize,
}

/// Diagnose kernel selection for a buffer of `len` octets.
#[inline]
#[must_use]
pub fn selection(len: usize) -> SelectionDiag {
  crate::dispatch::diagnose(&config::get(), len)
}
