use crate::types::ChainId;
use serde::{Deserialize, Serialize};

/// Represents a Native Currency to its chain
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NativeCurrency {
   pub chain_id: u64,
   pub symbol: String,
   pub name: String,
   pub decimals: u8,
}

impl Default for NativeCurrency {
   fn default() -> Self {
      Self {
         chain_id: 1,
         symbol: "ETH".to_string(),
         name: "Ether".to_string(),
         decimals: 18,
      }
   }
}

impl NativeCurrency {
   pub fn new(chain_id: u64, symbol: impl Into<String>, name: impl Into<String>, decimals: u8) -> Self {
      Self {
         chain_id,
         symbol: symbol.into(),
         name: name.into(),
         decimals,
      }
   }

   /// Create a new Native Currency from the network id
   pub fn from_chain_id(id: u64) -> Result<Self, anyhow::Error> {
      let chain = ChainId::new(id)?;
      Ok(Self::new(chain.id(), chain.coin_symbol(), "Ether", 18))
   }

   /// The ticker the provider reports, falling back to `ETH` when it is missing or blank
   pub fn ticker_or_default(ticker: Option<&str>) -> String {
      match ticker {
         Some(ticker) if !ticker.trim().is_empty() => ticker.to_string(),
         _ => Self::default().symbol,
      }
   }
}
