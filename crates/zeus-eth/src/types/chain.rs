use anyhow::bail;

pub const MAINNET: u64 = 1;
pub const ROPSTEN: u64 = 3;
pub const RINKEBY: u64 = 4;
pub const GOERLI: u64 = 5;
pub const KOVAN: u64 = 42;

pub const SUPPORTED_CHAINS: [u64; 5] = [MAINNET, ROPSTEN, RINKEBY, GOERLI, KOVAN];

const ERR_MSG: &str =
   "Supported networks are: Mainnet(1), Ropsten(3), Rinkeby(4), Goerli(5), Kovan(42)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u64)]
pub enum ChainId {
   Mainnet = 1,
   Ropsten = 3,
   Rinkeby = 4,
   Goerli = 5,
   Kovan = 42,
}

impl Default for ChainId {
   fn default() -> Self {
      ChainId::Mainnet
   }
}

impl TryFrom<u64> for ChainId {
   type Error = anyhow::Error;

   fn try_from(id: u64) -> Result<Self, Self::Error> {
      ChainId::new(id)
   }
}

impl ChainId {
   pub fn new(id: u64) -> Result<Self, anyhow::Error> {
      let chain = match id {
         MAINNET => ChainId::Mainnet,
         ROPSTEN => ChainId::Ropsten,
         RINKEBY => ChainId::Rinkeby,
         GOERLI => ChainId::Goerli,
         KOVAN => ChainId::Kovan,
         _ => bail!(format!("Unsupported network id: {}\n{}", id, ERR_MSG)),
      };
      Ok(chain)
   }

   /// Resolve the network a provider type points to (eg. "mainnet", "rinkeby")
   pub fn from_provider_type(provider_type: &str) -> Result<Self, anyhow::Error> {
      let chain = match provider_type.to_ascii_lowercase().as_str() {
         "mainnet" => ChainId::Mainnet,
         "ropsten" => ChainId::Ropsten,
         "rinkeby" => ChainId::Rinkeby,
         "goerli" => ChainId::Goerli,
         "kovan" => ChainId::Kovan,
         _ => bail!("Unknown provider type: {}", provider_type),
      };
      Ok(chain)
   }

   pub fn coin_symbol(&self) -> &str {
      "ETH"
   }

   pub fn id(&self) -> u64 {
      *self as u64
   }

   pub fn provider_type(&self) -> &str {
      match self {
         ChainId::Mainnet => "mainnet",
         ChainId::Ropsten => "ropsten",
         ChainId::Rinkeby => "rinkeby",
         ChainId::Goerli => "goerli",
         ChainId::Kovan => "kovan",
      }
   }

   /// Block Explorer URL
   pub fn block_explorer(&self) -> &str {
      match self {
         ChainId::Mainnet => "https://etherscan.io",
         ChainId::Ropsten => "https://ropsten.etherscan.io",
         ChainId::Rinkeby => "https://rinkeby.etherscan.io",
         ChainId::Goerli => "https://goerli.etherscan.io",
         ChainId::Kovan => "https://kovan.etherscan.io",
      }
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn chain_new_err() {
      assert!(ChainId::new(1000).is_err());
   }

   #[test]
   fn provider_type_round_trip() {
      for id in SUPPORTED_CHAINS {
         let chain = ChainId::new(id).unwrap();
         let resolved = ChainId::from_provider_type(chain.provider_type()).unwrap();
         assert_eq!(resolved, chain);
         assert_eq!(resolved.id(), id);
      }
   }

   #[test]
   fn provider_type_is_case_insensitive() {
      assert_eq!(ChainId::from_provider_type("Rinkeby").unwrap(), ChainId::Rinkeby);
      assert!(ChainId::from_provider_type("localhost").is_err());
   }
}
