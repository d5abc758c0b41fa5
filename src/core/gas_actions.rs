use super::{
   data::{Labels, Settings},
   transaction::TransactionRecord,
};
use serde::{Deserialize, Serialize};
use zeus_eth::{alloy_primitives::U256, utils::units::render_from_wei};

const BPS: u64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GasAction {
   SpeedUp,
   Cancel,
}

impl GasAction {
   pub fn rate(&self, settings: &Settings) -> f64 {
      match self {
         Self::SpeedUp => settings.speed_up_rate,
         Self::Cancel => settings.cancel_rate,
      }
   }
}

/// Multiply `gas_price` by `rate`, rounding down to the wei
pub fn apply_rate(gas_price: U256, rate: f64) -> U256 {
   let rate_bps = (rate * BPS as f64).round() as u64;
   gas_price.saturating_mul(U256::from(rate_bps)) / U256::from(BPS)
}

pub fn speed_up_gas_price(existing: U256, settings: &Settings) -> U256 {
   apply_rate(existing, settings.speed_up_rate)
}

pub fn cancel_gas_price(existing: U256, settings: &Settings) -> U256 {
   apply_rate(existing, settings.cancel_rate)
}

/// "0.0011 ETH"
pub fn fee_text(gas_price: U256, labels: &Labels) -> String {
   format!("{} {}", render_from_wei(gas_price), labels.unit_eth)
}

/// What a speed up or cancel callback receives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasActionRequest {
   pub action: GasAction,
   pub transaction_id: String,
   pub existing_gas_price: U256,
}

impl GasActionRequest {
   pub fn new(action: GasAction, record: &TransactionRecord) -> Self {
      Self {
         action,
         transaction_id: record.id.clone(),
         existing_gas_price: record.existing_gas_price(),
      }
   }

   /// The gas price the replacement transaction is sent with
   pub fn new_gas_price(&self, settings: &Settings) -> U256 {
      apply_rate(self.existing_gas_price, self.action.rate(settings))
   }

   pub fn fee_text(&self, settings: &Settings) -> String {
      fee_text(self.new_gas_price(settings), &settings.labels)
   }
}
