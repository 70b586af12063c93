//! Kernel selection and the shared accumulation entry point.
//!
//! Every operation that runs the forward accumulation (encode, verify, the
//! streaming hasher) goes through [`select`] so forced modes and thresholds
//! apply uniformly.

use crate::{
  config::{self, IsoConfig, IsoForce},
  kernels::{self, Selected, Sums},
  portable, reference,
};

/// Representative length used to report the backend name.
const BACKEND_PROBE_LEN: usize = 1024;

/// Select the kernel for a buffer of `len` octets under `cfg`.
#[inline]
#[must_use]
pub fn select(cfg: &IsoConfig, len: usize) -> Selected {
  match cfg.effective_force {
    IsoForce::Reference => Selected::new(kernels::REFERENCE, reference::sums),
    IsoForce::Bytewise => Selected::new(kernels::PORTABLE_BYTEWISE, portable::bytewise),
    IsoForce::Unroll4 => Selected::new(kernels::PORTABLE_UNROLL4, portable::unroll4),
    IsoForce::Auto => match kernels::portable_name_for_len(len, cfg.tunables.bytewise_to_unroll4) {
      kernels::PORTABLE_BYTEWISE => Selected::new(kernels::PORTABLE_BYTEWISE, portable::bytewise),
      _ => Selected::new(kernels::PORTABLE_UNROLL4, portable::unroll4),
    },
  }
}

/// Segmented accumulation of `data` from zero, reduced.
#[inline]
#[must_use]
pub fn accumulate(data: &[u8]) -> Sums {
  let kernel = select(&config::get(), data.len());
  portable::segmented(kernel.func, Sums::ZERO, data)
}

/// Kernel name selected for a buffer of `len` octets.
#[inline]
#[must_use]
pub fn kernel_name_for_len(len: usize) -> &'static str {
  select(&config::get(), len).name
}

/// Kernel name selected for a representative (1 KiB) buffer.
#[inline]
#[must_use]
pub fn backend_name() -> &'static str {
  kernel_name_for_len(BACKEND_PROBE_LEN)
}

#[cfg(feature = "diag")]
pub(crate) fn diagnose(cfg: &IsoConfig, len: usize) -> crate::diag::SelectionDiag {
  use crate::diag::{SelectionDiag, SelectionReason};

  let reason = match cfg.effective_force {
    IsoForce::Auto if len < cfg.tunables.bytewise_to_unroll4 => SelectionReason::BelowUnrollThreshold,
    IsoForce::Auto => SelectionReason::Auto,
    _ => SelectionReason::Forced,
  };

  SelectionDiag {
    len,
    reason,
    requested_force: cfg.requested_force,
    effective_force: cfg.effective_force,
    selected_kernel: select(cfg, len).name,
    bytewise_to_unroll4: cfg.tunables.bytewise_to_unroll4,
  }
}
