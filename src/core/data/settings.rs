use super::labels::Labels;
use crate::core::utils::data_path;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, path::Path};
use tracing::{info, trace};
use zeus_eth::{
   alloy_primitives::{Address, address},
   types::{MAINNET, RINKEBY},
};

pub const SETTINGS_FILE: &str = "activity_settings.json";

pub const DEFAULT_SPEED_UP_RATE: f64 = 1.1;
pub const DEFAULT_CANCEL_RATE: f64 = 1.5;

/// Everything the activity layer can be configured with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
   pub labels: Labels,

   /// Payment channel contract deployed on each network
   ///
   /// Key: network id
   pub payment_channel_contracts: HashMap<u64, Address>,

   /// Multiplier applied to the gas price of a transaction we speed up
   pub speed_up_rate: f64,

   /// Multiplier applied to the gas price of a transaction we cancel
   pub cancel_rate: f64,
}

impl Default for Settings {
   fn default() -> Self {
      let mut payment_channel_contracts = HashMap::new();
      payment_channel_contracts.insert(
         MAINNET,
         address!("dfa6edAe2EC0cF1d4A60542422724A48195A5071"),
      );
      payment_channel_contracts.insert(
         RINKEBY,
         address!("0Fa90eC3AC3245112c6d4ab9BF2F56a3A2dc9E6E"),
      );

      Self {
         labels: Labels::default(),
         payment_channel_contracts,
         speed_up_rate: DEFAULT_SPEED_UP_RATE,
         cancel_rate: DEFAULT_CANCEL_RATE,
      }
   }
}

impl Settings {

   pub fn load_from_path(path: &Path) -> Result<Self, anyhow::Error> {
      let data = std::fs::read(path)?;
      let settings = serde_json::from_slice(&data)?;
      trace!(target: "zeus_activity::data", "Loaded settings from {}", path.display());
      Ok(settings)
   }

   /// Load the settings from the data directory, falling back to the defaults
   pub fn load_or_default() -> Self {
      match data_path() {
         Ok(dir) => Self::load_or_default_from(&dir),
         Err(e) => {
            info!(target: "zeus_activity::data", "Using default settings: {}", e);
            Self::default()
         }
      }
   }

   /// Load `SETTINGS_FILE` from `dir` if it is there, nothing is created
   pub fn load_or_default_from(dir: &Path) -> Self {
      let path = dir.join(SETTINGS_FILE);
      if !path.exists() {
         info!(target: "zeus_activity::data", "No settings at {}, using the defaults", path.display());
         return Self::default();
      }

      match Self::load_from_path(&path) {
         Ok(settings) => settings,
         Err(e) => {
            info!(target: "zeus_activity::data", "Using default settings: {}", e);
            Self::default()
         }
      }
   }

   pub fn save_to_path(&self, path: &Path) -> Result<(), anyhow::Error> {
      let settings = serde_json::to_vec_pretty(&self)?;
      std::fs::write(path, settings)?;
      Ok(())
   }

   /// The payment channel contract of `network_id` if there is one
   ///
   /// An unknown network has none.
   pub fn payment_channel_contract(&self, network_id: Option<u64>) -> Option<Address> {
      self.payment_channel_contracts.get(&network_id?).copied()
   }
}
