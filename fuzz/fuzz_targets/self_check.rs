//! Fuzz target for encode/verify.
//!
//! Any valid position must produce a self-checking message, leave every other
//! octet alone, and agree with the reference and with `checksum_field`.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  position: usize,
  flip: Option<(usize, u8)>,
}

fuzz_target!(|input: Input| {
  let data = input.data;
  let len = data.len();

  let mut untouched = data.clone();
  let running = isocksum::encode(&mut untouched, len, 0).expect("k = 0 is always valid");
  assert_eq!(untouched, data, "k = 0 mutated the buffer");
  assert_eq!(running, isocksum::reference::combined(&data), "running value mismatch");

  if len < 2 {
    assert!(isocksum::encode(&mut data.clone(), len, 1).is_err());
    return;
  }
  let k = input.position % (len - 1) + 1;

  let field = isocksum::checksum_field(&data, len, k).expect("valid position");
  let mut buf = data.clone();
  isocksum::encode(&mut buf, len, k).expect("valid position");
  assert!(isocksum::verify(&buf, len, k).expect("valid position"), "not self-checking");
  assert_eq!(field, u16::from_be_bytes([buf[k - 1], buf[k]]));
  for (i, (a, b)) in data.iter().zip(&buf).enumerate() {
    if i != k - 1 && i != k {
      assert_eq!(a, b, "octet {i} changed");
    }
  }

  if let Some((at, bit)) = input.flip {
    buf[at % len] ^= 1 << (bit % 8);
    assert!(!isocksum::verify(&buf, len, k).expect("valid position"), "bit flip missed");
  }
});
