pub mod erc20;
pub mod erc721;

use alloy_primitives::hex;
use thiserror::Error;

/// Errors raised while decoding transaction call data
#[derive(Debug, Error)]
pub enum DecodeError {
   #[error("call data is empty")]
   Empty,

   #[error("unexpected selector 0x{found}, expected 0x{expected}")]
   SelectorMismatch { expected: String, found: String },

   #[error("malformed call arguments: {0}")]
   Abi(#[from] alloy_sol_types::Error),
}

/// The 4-byte function selector at the start of `call_data`
pub fn selector(call_data: &[u8]) -> Option<[u8; 4]> {
   call_data.get(0..4)?.try_into().ok()
}

pub(crate) fn ensure_selector(call_data: &[u8], expected: [u8; 4]) -> Result<(), DecodeError> {
   let found = selector(call_data).ok_or(DecodeError::Empty)?;
   if found != expected {
      return Err(DecodeError::SelectorMismatch {
         expected: hex::encode(expected),
         found: hex::encode(found),
      });
   }
   Ok(())
}
