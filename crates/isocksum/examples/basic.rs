//! Basic checksum usage: encode, verify, streaming and LSPs.
//!
//! Run with: `cargo run --example basic -p isocksum`

use isocksum::{
  Checksum, ChecksumCombine, Iso8473, KernelIntrospect, kernel_for,
  lsp::{self, LspIntegrity},
};

fn main() -> Result<(), isocksum::FieldError> {
  println!("=== ISO 8473 Checksum Examples ===\n");

  encode_and_verify()?;
  streaming();
  lsp_example()?;
  introspection();
  Ok(())
}

/// Insert a checksum field and check the result.
fn encode_and_verify() -> Result<(), isocksum::FieldError> {
  println!("--- Encode / Verify ---\n");

  let mut pdu = [0x01, 0x02, 0x00, 0x00, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A];
  let len = pdu.len();
  let running = isocksum::encode(&mut pdu, len, 3)?;
  println!("running value:   0x{running:04X}");
  println!("field octets:    {:02X} {:02X}", pdu[2], pdu[3]);
  assert_eq!(running, 0xA830);
  assert_eq!(&pdu[2..4], &[0xA8, 0x27]);

  println!("verify:          {}", isocksum::verify(&pdu, len, 3)?);

  pdu[6] ^= 0x40;
  println!("after bit flip:  {}", isocksum::verify(&pdu, len, 3)?);

  // Compute the field without writing it.
  pdu[6] ^= 0x40;
  let field = isocksum::checksum_field(&pdu, len, 3)?;
  println!("checksum_field:  0x{field:04X}");
  println!();
  Ok(())
}

/// Process data in chunks; results match one-shot.
fn streaming() {
  println!("--- Streaming ---\n");

  let data: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
  let oneshot = Iso8473::checksum(&data);

  let mut hasher = Iso8473::new();
  for chunk in data.chunks(1500) {
    hasher.update(chunk);
  }
  println!("one-shot:        0x{oneshot:04X}");
  println!("streamed:        0x{:04X}", hasher.finalize());
  assert_eq!(hasher.finalize(), oneshot);

  let (a, b) = data.split_at(4000);
  let combined = <Iso8473 as ChecksumCombine>::combine(Iso8473::checksum(a), Iso8473::checksum(b), b.len());
  println!("combined:        0x{combined:04X}");
  assert_eq!(combined, oneshot);

  let mut resumed = <Iso8473 as Checksum>::with_initial(Iso8473::checksum(a));
  resumed.update(b);
  assert_eq!(resumed.finalize(), oneshot);
  println!();
}

/// Seal and classify an IS-IS link-state PDU.
fn lsp_example() -> Result<(), isocksum::FieldError> {
  println!("--- IS-IS LSP ---\n");

  let len = 64usize;
  let mut pdu = vec![0u8; len];
  pdu[0] = 0x83;
  pdu[1] = lsp::HEADER_LEN as u8;
  pdu[4] = 18;
  pdu[lsp::PDU_LENGTH_OFFSET..][..2].copy_from_slice(&(len as u16).to_be_bytes());
  pdu[lsp::REMAINING_LIFETIME_OFFSET..][..2].copy_from_slice(&1200u16.to_be_bytes());
  pdu[lsp::LSP_ID_OFFSET..][..6].copy_from_slice(&[0x19, 0x21, 0x68, 0x00, 0x10, 0x01]);
  pdu[lsp::SEQUENCE_NUMBER_OFFSET + 3] = 1;

  let value = lsp::seal(&mut pdu)?;
  println!("LSP checksum:    0x{value:04X}");
  println!("integrity:       {}", lsp::check(&pdu)?.as_str());
  assert_eq!(lsp::check(&pdu)?, LspIntegrity::Valid);

  pdu[lsp::REMAINING_LIFETIME_OFFSET..][..2].copy_from_slice(&0u16.to_be_bytes());
  println!("after purge:     {}", lsp::check(&pdu)?.as_str());
  println!();
  Ok(())
}

fn introspection() {
  println!("--- Kernel Selection ---\n");

  println!("backend:         {}", Iso8473::backend_name());
  for len in [16usize, 64, 1492, 65536] {
    println!("{len:>7} octets:   {}", kernel_for::<Iso8473>(len));
  }
}
