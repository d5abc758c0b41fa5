use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use zeus_eth::{
   ChainId,
   alloy_primitives::{Address, Selector, U256},
   currency::{ERC20Token, ERC721Collection, NativeCurrency},
};

/// Metadata of a well known contract (name, symbol, logo)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractMetadata {
   pub name: String,
   pub symbol: String,
   pub logo: Option<String>,
}

impl ContractMetadata {
   pub fn new(name: impl Into<String>, symbol: impl Into<String>, logo: Option<String>) -> Self {
      Self {
         name: name.into(),
         symbol: symbol.into(),
         logo,
      }
   }
}

/// Market data and wallet state needed to render a transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderContext {
   /// Price of 1 ETH in `current_currency`
   pub conversion_rate: Option<f64>,

   /// Fiat currency code (eg. "usd")
   pub current_currency: String,

   /// Price of 1 SAI in ETH, used for payment channel withdrawals
   pub exchange_rate: Option<f64>,

   /// Ticker of the provider's native coin
   pub ticker: Option<String>,

   pub selected_address: Address,

   /// The user's tokens
   pub tokens: HashMap<Address, ERC20Token>,

   /// Token price in ETH
   pub contract_exchange_rates: HashMap<Address, f64>,

   /// The user's collectible contracts
   pub collectible_contracts: Vec<ERC721Collection>,

   /// Well known contracts
   pub contract_metadata: HashMap<Address, ContractMetadata>,

   /// Method signatures from a signature registry
   pub method_names: HashMap<Selector, String>,

   /// Network the wallet is connected to (eg. "mainnet")
   pub provider_type: String,
}

impl Default for RenderContext {
   fn default() -> Self {
      Self {
         conversion_rate: None,
         current_currency: "usd".to_string(),
         exchange_rate: None,
         ticker: None,
         selected_address: Address::ZERO,
         tokens: HashMap::new(),
         contract_exchange_rates: HashMap::new(),
         collectible_contracts: Vec::new(),
         contract_metadata: HashMap::new(),
         method_names: HashMap::new(),
         provider_type: ChainId::Mainnet.provider_type().to_string(),
      }
   }
}

impl RenderContext {
   /// The ticker to show next to native amounts
   pub fn ticker(&self) -> String {
      NativeCurrency::ticker_or_default(self.ticker.as_deref())
   }

   pub fn token(&self, address: Address) -> Option<&ERC20Token> {
      self.tokens.get(&address)
   }

   pub fn add_token(&mut self, token: ERC20Token) {
      self.tokens.insert(token.address, token);
   }

   /// Price of a token in ETH, zero rates count as unknown
   pub fn token_exchange_rate(&self, address: Address) -> Option<f64> {
      self.contract_exchange_rates
         .get(&address)
         .copied()
         .filter(|rate| *rate != 0.0)
   }

   pub fn collectible_contract(&self, address: Address) -> Option<&ERC721Collection> {
      ERC721Collection::find(&self.collectible_contracts, address)
   }

   pub fn metadata(&self, address: Address) -> Option<&ContractMetadata> {
      self.contract_metadata.get(&address)
   }

   pub fn method_name(&self, selector: [u8; 4]) -> Option<&String> {
      self.method_names.get(&Selector::from(selector))
   }

   /// Network id of the provider, `None` for custom networks
   pub fn provider_network_id(&self) -> Option<u64> {
      ChainId::from_provider_type(&self.provider_type)
         .ok()
         .map(|chain| chain.id())
   }
}

/// Answers the on-chain questions the classification needs
pub trait AssetInspector {
   /// Whether `address` holds contract code
   fn is_contract(&self, address: Address) -> bool;

   /// Owner of an ERC-721 token, `None` if `contract` is not a collectible
   /// or the token does not exist
   fn owner_of(&self, contract: Address, token_id: U256) -> Option<Address>;
}

/// A token and its owner as known by [StaticInspector]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedToken {
   pub contract: Address,
   pub token_id: U256,
   pub owner: Address,
}

/// [AssetInspector] backed by data loaded in memory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticInspector {
   pub contracts: HashSet<Address>,
   pub collectibles: Vec<OwnedToken>,
}

impl StaticInspector {
   pub fn new() -> Self {
      Self::default()
   }

   /// Every token, collectible and well known contract of `ctx` is a contract
   pub fn from_context(ctx: &RenderContext) -> Self {
      let mut inspector = Self::new();
      inspector.contracts.extend(ctx.tokens.keys().copied());
      inspector
         .contracts
         .extend(ctx.collectible_contracts.iter().map(|c| c.address));
      inspector.contracts.extend(ctx.contract_metadata.keys().copied());
      inspector
   }

   pub fn with_contract(mut self, address: Address) -> Self {
      self.contracts.insert(address);
      self
   }

   pub fn with_collectible(mut self, contract: Address, token_id: U256, owner: Address) -> Self {
      self.contracts.insert(contract);
      self.collectibles.push(OwnedToken {
         contract,
         token_id,
         owner,
      });
      self
   }

   /// Merge the contracts and collectibles of `other` into `self`
   pub fn extend(&mut self, other: StaticInspector) {
      self.contracts.extend(other.contracts);
      self.collectibles.extend(other.collectibles);
   }
}

impl AssetInspector for StaticInspector {
   fn is_contract(&self, address: Address) -> bool {
      self.contracts.contains(&address)
   }

   fn owner_of(&self, contract: Address, token_id: U256) -> Option<Address> {
      self.collectibles
         .iter()
         .find(|token| token.contract == contract && token.token_id == token_id)
         .map(|token| token.owner)
   }
}
