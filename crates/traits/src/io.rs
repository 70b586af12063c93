//! I/O adapters for checksum computation.
//!
//! [`ChecksumReader`] and [`ChecksumWriter`] wrap [`std::io::Read`] and
//! [`std::io::Write`] and feed every byte actually transferred into a
//! [`Checksum`](crate::Checksum), handling short reads and writes.
//!
//! # Example
//!
//! ```rust
//! # use traits::Checksum;
//! # #[derive(Clone, Default)]
//! # struct Sum(u16);
//! # impl Checksum for Sum {
//! #   const OUTPUT_SIZE: usize = 2;
//! #   type Output = u16;
//! #   fn new() -> Self { Self(0) }
//! #   fn with_initial(initial: Self::Output) -> Self { Self(initial) }
//! #   fn update(&mut self, data: &[u8]) {
//! #     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u16::from(b)));
//! #   }
//! #   fn finalize(&self) -> Self::Output { self.0 }
//! #   fn reset(&mut self) { self.0 = 0; }
//! # }
//! # use std::io::Cursor;
//! let mut reader = Sum::reader(Cursor::new(b"abc".to_vec()));
//! std::io::copy(&mut reader, &mut std::io::sink())?;
//! assert_eq!(reader.checksum(), u16::from(b'a') + u16::from(b'b') + u16::from(b'c'));
//! # Ok::<(), std::io::Error>(())
//! ```

#[cfg(feature = "std")]
use crate::Checksum;

/// Wraps a [`Read`](std::io::Read) and checksums the bytes read.
#[cfg(feature = "std")]
#[derive(Clone, Debug)]
pub struct ChecksumReader<R, C> {
  inner: R,
  hasher: C,
}

#[cfg(feature = "std")]
impl<R, C: Checksum> ChecksumReader<R, C> {
  #[inline]
  #[must_use]
  pub fn new(inner: R) -> Self {
    Self { inner, hasher: C::new() }
  }

  /// Resume from a previously finalized checksum.
  #[inline]
  #[must_use]
  pub fn with_initial(inner: R, initial: C::Output) -> Self {
    Self {
      inner,
      hasher: C::with_initial(initial),
    }
  }

  /// Checksum of everything read so far.
  #[inline]
  #[must_use]
  pub fn checksum(&self) -> C::Output {
    self.hasher.finalize()
  }

  #[inline]
  pub fn into_parts(self) -> (R, C::Output) {
    let sum = self.hasher.finalize();
    (self.inner, sum)
  }

  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }

  #[inline]
  pub fn get_ref(&self) -> &R {
    &self.inner
  }

  #[inline]
  pub fn get_mut(&mut self) -> &mut R {
    &mut self.inner
  }
}

#[cfg(feature = "std")]
impl<R: std::io::Read, C: Checksum> std::io::Read for ChecksumReader<R, C> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
    let n = self.inner.read(buf)?;
    if let Some(data) = buf.get(..n) {
      self.hasher.update(data);
    }
    Ok(n)
  }

  fn read_vectored(&mut self, bufs: &mut [std::io::IoSliceMut<'_>]) -> std::io::Result<usize> {
    let n = self.inner.read_vectored(bufs)?;
    let mut remaining = n;
    for buf in bufs.iter() {
      if remaining == 0 {
        break;
      }
      let take = remaining.min(buf.len());
      if let Some(data) = buf.get(..take) {
        self.hasher.update(data);
      }
      remaining -= take;
    }
    Ok(n)
  }
}

/// Wraps a [`Write`](std::io::Write) and checksums the bytes accepted by the
/// inner writer.
///
/// Only the prefix the inner writer reports as written is checksummed, so a
/// short write followed by a retry of the remainder still yields the
/// checksum of exactly the bytes on the wire.
#[cfg(feature = "std")]
#[derive(Clone, Debug)]
pub struct ChecksumWriter<W, C> {
  inner: W,
  hasher: C,
}

#[cfg(feature = "std")]
impl<W, C: Checksum> ChecksumWriter<W, C> {
  #[inline]
  #[must_use]
  pub fn new(inner: W) -> Self {
    Self { inner, hasher: C::new() }
  }

  /// Resume from a previously finalized checksum.
  #[inline]
  #[must_use]
  pub fn with_initial(inner: W, initial: C::Output) -> Self {
    Self {
      inner,
      hasher: C::with_initial(initial),
    }
  }

  /// Checksum of everything written so far.
  #[inline]
  #[must_use]
  pub fn checksum(&self) -> C::Output {
    self.hasher.finalize()
  }

  #[inline]
  pub fn into_parts(self) -> (W, C::Output) {
    let sum = self.hasher.finalize();
    (self.inner, sum)
  }

  #[inline]
  pub fn into_inner(self) -> W {
    self.inner
  }

  #[inline]
  pub fn get_ref(&self) -> &W {
    &self.inner
  }

  #[inline]
  pub fn get_mut(&mut self) -> &mut W {
    &mut self.inner
  }
}

#[cfg(feature = "std")]
impl<W: std::io::Write, C: Checksum> std::io::Write for ChecksumWriter<W, C> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    let n = self.inner.write(buf)?;
    if let Some(data) = buf.get(..n) {
      self.hasher.update(data);
    }
    Ok(n)
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    self.inner.flush()
  }
}

#[cfg(all(test, feature = "std"))]
mod tests {
  use std::{
    io::{Cursor, Read, Write},
    vec::Vec,
  };

  use super::*;

  #[derive(Clone, Default, Debug)]
  struct Sum(u16);

  impl Checksum for Sum {
    const OUTPUT_SIZE: usize = 2;
    type Output = u16;

    fn new() -> Self {
      Self(0)
    }
    fn with_initial(initial: Self::Output) -> Self {
      Self(initial)
    }
    fn update(&mut self, data: &[u8]) {
      self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u16::from(b)));
    }
    fn finalize(&self) -> Self::Output {
      self.0
    }
    fn reset(&mut self) {
      self.0 = 0;
    }
  }

  /// Accepts at most `limit` bytes per call.
  struct Trickle {
    out: Vec<u8>,
    limit: usize,
  }

  impl Write for Trickle {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
      let n = buf.len().min(self.limit);
      self.out.extend_from_slice(&buf[..n]);
      Ok(n)
    }
    fn flush(&mut self) -> std::io::Result<()> {
      Ok(())
    }
  }

  #[test]
  fn reader_sums_bytes_read() {
    let mut reader: ChecksumReader<_, Sum> = ChecksumReader::new(Cursor::new(std::vec![1u8, 2, 3, 4]));
    let mut buf = [0u8; 3];
    let n = reader.read(&mut buf).unwrap();
    assert_eq!(n, 3);
    assert_eq!(reader.checksum(), 6);
    let mut rest = Vec::new();
    reader.read_to_end(&mut rest).unwrap();
    assert_eq!(reader.checksum(), 10);
  }

  #[test]
  fn writer_sums_only_accepted_prefix() {
    let mut writer: ChecksumWriter<_, Sum> = ChecksumWriter::new(Trickle { out: Vec::new(), limit: 2 });
    assert_eq!(writer.write(&[5, 6, 7]).unwrap(), 2);
    assert_eq!(writer.checksum(), 11);
    writer.write_all(&[7]).unwrap();
    let (inner, sum) = writer.into_parts();
    assert_eq!(inner.out, std::vec![5, 6, 7]);
    assert_eq!(sum, 18);
  }

  #[test]
  fn with_initial_resumes() {
    let reader: ChecksumReader<_, Sum> = ChecksumReader::with_initial(Cursor::new(Vec::<u8>::new()), 42);
    assert_eq!(reader.checksum(), 42);
  }
}
