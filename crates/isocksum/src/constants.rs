//! Fixed parameters of the RFC 1008 §7.2.1 checksum.

/// Maximum number of octets accumulated before the running sums are reduced.
pub const MODX: usize = 4102;

/// Modulus both running sums are reduced by.
pub const MODULUS: u32 = 255;

/// Size of the embedded checksum field in octets.
pub const FIELD_SIZE: usize = 2;

/// Worst-case `c1` after `n` octets of `0xFF`, starting from reduced sums.
const fn segment_c1_bound(n: u64) -> u64 {
  let start = (MODULUS - 1) as u64;
  start + n * start + (MODULUS as u64) * n * (n + 1) / 2
}

// MODX is the longest segment whose unreduced sums fit a signed 32-bit
// accumulator. Kernels accumulate in u32, which leaves headroom.
const _: () = assert!(segment_c1_bound(MODX as u64) <= i32::MAX as u64);
const _: () = assert!(segment_c1_bound(MODX as u64 + 1) > i32::MAX as u64);
