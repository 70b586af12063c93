//! Fuzz target for the LSP helpers.
//!
//! Arbitrary buffers must never panic; anything `seal` accepts must then
//! check as valid unless it is a purge or oversized.

#![no_main]

use isocksum::lsp::{self, LspIntegrity};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  let _ = lsp::check(data);

  let mut pdu = data.to_vec();
  let Ok(value) = lsp::seal(&mut pdu) else {
    return;
  };
  assert_eq!(lsp::expected_checksum(&pdu), Ok(value));

  let expected = match lsp::pdu_length(&pdu) {
    Ok(len) if len > lsp::RECEIVE_LSP_BUFFER_SIZE => LspIntegrity::Corrupt,
    Ok(_) if lsp::remaining_lifetime(&pdu) == Ok(0) => LspIntegrity::Purge,
    Ok(_) => LspIntegrity::Valid,
    Err(e) => panic!("seal accepted a PDU with a bad length: {e}"),
  };
  assert_eq!(lsp::check(&pdu), Ok(expected));
});
