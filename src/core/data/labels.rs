use serde::{Deserialize, Serialize};

const UNIT_PLACEHOLDER: &str = "{unit}";

/// Every user facing string the activity list renders
///
/// Templates may contain `{unit}` which is replaced with a currency symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
   pub sent: String,
   pub sent_tokens: String,
   pub sent_collectible: String,
   pub contract_deploy: String,
   pub smart_contract_interaction: String,
   pub approve: String,
   pub sent_unit: String,
   pub received_unit: String,
   pub self_sent_unit: String,
   pub instant_payment_deposit: String,
   pub instant_payment_withdraw: String,
   pub to_contract: String,
   pub tx_details_not_available: String,
   pub value_not_available: String,
   pub unit_eth: String,
   pub unit_sai: String,
   pub unit_divisor: String,
   pub unit_token_id: String,
}

impl Default for Labels {
   fn default() -> Self {
      Self {
         sent: "Sent".to_string(),
         sent_tokens: "Sent Tokens".to_string(),
         sent_collectible: "Sent Collectible".to_string(),
         contract_deploy: "Contract Deployment".to_string(),
         smart_contract_interaction: "Smart Contract Interaction".to_string(),
         approve: "Approve".to_string(),
         sent_unit: "Sent {unit}".to_string(),
         received_unit: "Received {unit}".to_string(),
         self_sent_unit: "Sent Yourself {unit}".to_string(),
         instant_payment_deposit: "Instant Payment Deposit".to_string(),
         instant_payment_withdraw: "Instant Payment Withdrawal".to_string(),
         to_contract: "New Contract".to_string(),
         tx_details_not_available: "Not available".to_string(),
         value_not_available: "Not Available".to_string(),
         unit_eth: "ETH".to_string(),
         unit_sai: "SAI".to_string(),
         unit_divisor: "/".to_string(),
         unit_token_id: "#".to_string(),
      }
   }
}

impl Labels {
   pub fn sent_unit(&self, unit: &str) -> String {
      self.sent_unit.replace(UNIT_PLACEHOLDER, unit)
   }

   pub fn received_unit(&self, unit: &str) -> String {
      self.received_unit.replace(UNIT_PLACEHOLDER, unit)
   }

   pub fn self_sent_unit(&self, unit: &str) -> String {
      self.self_sent_unit.replace(UNIT_PLACEHOLDER, unit)
   }

   /// "Sent DAI", "Sent CryptoKitties"
   pub fn sent_asset(&self, asset: &str) -> String {
      format!("{} {}", self.sent, asset)
   }

   /// "#1234"
   pub fn token_id(&self, token_id: &str) -> String {
      format!("{}{}", self.unit_token_id, token_id)
   }

   /// Join a value with the gas it cost, "1 DAI / 0.00042 ETH"
   pub fn with_gas(&self, value: &str, gas: &str) -> String {
      format!("{} {} {}", value, self.unit_divisor, gas)
   }
}
