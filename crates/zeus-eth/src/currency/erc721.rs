use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// A collectible (ERC721) contract the user tracks
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ERC721Collection {
   pub address: Address,
   pub name: String,
   pub symbol: String,
}

impl ERC721Collection {
   pub fn new(address: Address, name: impl Into<String>, symbol: impl Into<String>) -> Self {
      Self {
         address,
         name: name.into(),
         symbol: symbol.into(),
      }
   }

   /// Find the collection deployed at `address`
   pub fn find(collections: &[ERC721Collection], address: Address) -> Option<&ERC721Collection> {
      collections.iter().find(|c| c.address == address)
   }
}
