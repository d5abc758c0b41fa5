use super::{DecodeError, ensure_selector};
use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::{SolCall, sol};
use tracing::trace;

sol! {
   contract IERC721 {
      function ownerOf(uint256 tokenId) external view returns (address owner);
      function transferFrom(address from, address to, uint256 tokenId) external;
   }
}

pub const TRANSFER_FROM_SELECTOR: [u8; 4] = IERC721::transferFromCall::SELECTOR;

pub fn encode_transfer_from(from: Address, to: Address, token_id: U256) -> Bytes {
   let c = IERC721::transferFromCall {
      from,
      to,
      tokenId: token_id,
   };
   Bytes::from(c.abi_encode())
}

/// Decode a `transferFrom(address,address,uint256)` call into (from, to, token id)
pub fn decode_transfer_from(call_data: &[u8]) -> Result<(Address, Address, U256), DecodeError> {
   ensure_selector(call_data, TRANSFER_FROM_SELECTOR)?;
   let call = IERC721::transferFromCall::abi_decode(call_data)?;
   trace!(target: "zeus_eth::abi::erc721",
      "Decoded transferFrom {} -> {} token id {}",
      call.from, call.to, call.tokenId
   );
   Ok((call.from, call.to, call.tokenId))
}
