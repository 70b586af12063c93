//! Streaming checksum traits.
//!
//! - **Streaming**: Incremental updates for data that arrives in pieces
//! - **Combine**: Merge checksums of adjacent chunks without re-reading them

use core::fmt::Debug;

/// Streaming checksum algorithm.
///
/// # Usage
///
/// ```rust,ignore
/// use isocksum::{Checksum, Iso8473};
///
/// // One-shot
/// let sum = Iso8473::checksum(b"hello world");
///
/// // Streaming
/// let mut hasher = Iso8473::new();
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// assert_eq!(hasher.finalize(), sum);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent (calling multiple times returns same value)
/// - `reset()` must restore the hasher to its initial state
/// - Splitting the input across `update` calls must not change the result
pub trait Checksum: Clone + Default {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// The checksum output type.
  type Output: Copy + Eq + Debug + Default;

  /// Create a new hasher with the default initial value.
  #[must_use]
  fn new() -> Self;

  /// Create a new hasher that resumes from a previously finalized value.
  #[must_use]
  fn with_initial(initial: Self::Output) -> Self;

  /// Update the hasher with additional data.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize and return the checksum.
  ///
  /// Does not consume the hasher; further updates continue from the
  /// current state.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  fn reset(&mut self);

  /// Compute the checksum of data in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the checksum of multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }

  /// Wrap a reader to compute the checksum transparently during I/O.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::ChecksumReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumReader::new(inner)
  }

  /// Wrap a writer to compute the checksum transparently during I/O.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::ChecksumWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumWriter::new(inner)
  }
}

/// Checksums whose values for adjacent chunks can be merged.
///
/// Given `sum_a = checksum(A)`, `sum_b = checksum(B)` and `len(B)`,
/// [`combine`](Self::combine) yields `checksum(A || B)` without touching the
/// data again. Chunks can then be summed independently (in parallel or as
/// they arrive out of order) and merged at the end.
///
/// ```rust,ignore
/// use isocksum::{Checksum, ChecksumCombine, Iso8473};
///
/// let data = b"hello world";
/// let (a, b) = data.split_at(6);
/// let combined = Iso8473::combine(Iso8473::checksum(a), Iso8473::checksum(b), b.len());
/// assert_eq!(combined, Iso8473::checksum(data));
/// ```
pub trait ChecksumCombine: Checksum {
  /// Combine the checksums of two adjacent chunks.
  ///
  /// * `sum_a` - Checksum of the first part (A)
  /// * `sum_b` - Checksum of the second part (B)
  /// * `len_b` - Length of the second part in bytes
  #[must_use]
  fn combine(sum_a: Self::Output, sum_b: Self::Output, len_b: usize) -> Self::Output;
}
