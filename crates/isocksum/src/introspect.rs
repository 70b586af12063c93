//! Kernel dispatch introspection.
//!
//! # Examples
//!
//! ```
//! use isocksum::{Iso8473, KernelIntrospect, kernel_for};
//!
//! println!("backend: {}", Iso8473::backend_name());
//! println!("@ 16 B: {}", kernel_for::<Iso8473>(16));
//! println!("@ 4 KiB: {}", kernel_for::<Iso8473>(4096));
//! ```

/// Returns the kernel name selected for a specific algorithm and buffer size.
#[inline]
#[must_use]
pub fn kernel_for<T: KernelIntrospect>(len: usize) -> &'static str {
  T::kernel_name_for_len(len)
}

/// Types that report which accumulation kernel they run.
pub trait KernelIntrospect {
  /// Kernel that would be selected for a buffer of `len` bytes, e.g.
  /// `"portable/bytewise"` or `"portable/unroll4"`.
  fn kernel_name_for_len(len: usize) -> &'static str;

  /// Currently selected backend, for a representative 1 KiB buffer unless a
  /// force mode is active.
  fn backend_name() -> &'static str;
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{Iso8473, config, kernels};

  #[test]
  fn kernel_for_follows_threshold() {
    let cfg = config::get();
    if cfg.effective_force != config::IsoForce::Auto {
      return;
    }
    let threshold = cfg.tunables.bytewise_to_unroll4;
    assert_eq!(
      kernel_for::<Iso8473>(threshold.saturating_sub(1)),
      kernels::portable_name_for_len(threshold.saturating_sub(1), threshold)
    );
    assert_eq!(kernel_for::<Iso8473>(threshold), kernels::PORTABLE_UNROLL4);
  }

  #[test]
  fn backend_name_not_empty() {
    assert!(!Iso8473::backend_name().is_empty());
  }
}
