use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

fn default_chain_id() -> u64 {
   1
}

/// Represents an ERC20 token the user holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ERC20Token {
   #[serde(default = "default_chain_id")]
   pub chain_id: u64,
   pub address: Address,
   pub symbol: String,
   #[serde(default)]
   pub name: String,
   pub decimals: u8,
}

impl ERC20Token {
   pub fn new(
      chain_id: u64,
      address: Address,
      symbol: impl Into<String>,
      name: impl Into<String>,
      decimals: u8,
   ) -> Self {
      Self {
         chain_id,
         address,
         symbol: symbol.into(),
         name: name.into(),
         decimals,
      }
   }
}
