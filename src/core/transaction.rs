use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use zeus_eth::{
   alloy_primitives::{Address, Bytes, U256, hex},
   utils::{
      address::{safe_to_checksum, same_address},
      units::hex_to_u256,
   },
};

/// Lifecycle status the wallet assigns to a transaction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TxStatus {
   Unapproved,
   Approved,
   Submitted,
   Confirmed,
   Failed,
   Rejected,
   Cancelled,
   Other(String),
}

impl Default for TxStatus {
   fn default() -> Self {
      Self::Unapproved
   }
}

impl From<String> for TxStatus {
   fn from(status: String) -> Self {
      match status.as_str() {
         "unapproved" => Self::Unapproved,
         "approved" => Self::Approved,
         "submitted" => Self::Submitted,
         "confirmed" => Self::Confirmed,
         "failed" => Self::Failed,
         "rejected" => Self::Rejected,
         "cancelled" => Self::Cancelled,
         _ => Self::Other(status),
      }
   }
}

impl From<TxStatus> for String {
   fn from(status: TxStatus) -> Self {
      status.as_str().to_string()
   }
}

impl fmt::Display for TxStatus {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str(self.as_str())
   }
}

impl TxStatus {
   pub fn as_str(&self) -> &str {
      match self {
         Self::Unapproved => "unapproved",
         Self::Approved => "approved",
         Self::Submitted => "submitted",
         Self::Confirmed => "confirmed",
         Self::Failed => "failed",
         Self::Rejected => "rejected",
         Self::Cancelled => "cancelled",
         Self::Other(status) => status,
      }
   }

   /// Sent to the network (or about to be) but not mined yet
   pub fn is_pending(&self) -> bool {
      matches!(self, Self::Submitted | Self::Approved)
   }
}

/// The on-chain fields of a transaction, hex encoded as the wallet stores them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxParams {
   pub from: String,
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub to: Option<String>,
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub value: Option<String>,
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub gas: Option<String>,
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub gas_price: Option<String>,
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub data: Option<String>,
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub nonce: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNetworkId {
   Number(u64),
   Text(String),
}

/// The wallet writes the network id as a number or as a string like `"4"`.
/// Anything else (eg. `"loading"`) is an unknown network.
fn network_id_from_any<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
   D: Deserializer<'de>,
{
   let id = match Option::<RawNetworkId>::deserialize(deserializer)? {
      Some(RawNetworkId::Number(id)) => Some(id),
      Some(RawNetworkId::Text(id)) => id.trim().parse().ok(),
      None => None,
   };
   Ok(id)
}

/// A transaction as tracked by the wallet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
   #[serde(default)]
   pub id: String,

   /// `None` while the network is unknown
   #[serde(
      rename = "networkID",
      default,
      deserialize_with = "network_id_from_any",
      skip_serializing_if = "Option::is_none"
   )]
   pub network_id: Option<u64>,

   #[serde(default)]
   pub status: TxStatus,

   /// Milliseconds since the unix epoch
   #[serde(default)]
   pub time: i64,

   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub transaction_hash: Option<String>,

   #[serde(default)]
   pub payment_channel_transaction: bool,

   /// Whether `to` is known to hold contract code
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub to_smart_contract: Option<bool>,

   /// An action label assigned before the record reached us
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub action_key: Option<String>,

   pub transaction: TxParams,
}

impl TransactionRecord {
   /// The recipient, `None` for contract deployments or an unparsable address
   pub fn to_address(&self) -> Option<Address> {
      self.transaction.to.as_deref().and_then(safe_to_checksum)
   }

   /// A deployment carries no recipient at all
   pub fn is_deployment(&self) -> bool {
      self.transaction
         .to
         .as_deref()
         .is_none_or(|to| to.trim().is_empty())
   }

   pub fn value(&self) -> Option<U256> {
      self.transaction.value.as_deref().and_then(hex_to_u256)
   }

   pub fn gas(&self) -> Option<U256> {
      self.transaction.gas.as_deref().and_then(hex_to_u256)
   }

   pub fn gas_price(&self) -> Option<U256> {
      self.transaction.gas_price.as_deref().and_then(hex_to_u256)
   }

   pub fn nonce(&self) -> Option<U256> {
      self.transaction.nonce.as_deref().and_then(hex_to_u256)
   }

   /// gas * gasPrice, zero when either one is missing
   pub fn total_gas(&self) -> U256 {
      match (self.gas(), self.gas_price()) {
         (Some(gas), Some(price)) => gas.saturating_mul(price),
         _ => U256::ZERO,
      }
   }

   /// The gas price the transaction was submitted with, zero if unknown
   pub fn existing_gas_price(&self) -> U256 {
      self.gas_price().unwrap_or(U256::ZERO)
   }

   /// Call data bytes, empty for plain transfers or invalid hex
   pub fn call_data(&self) -> Bytes {
      let Some(data) = self.transaction.data.as_deref() else {
         return Bytes::new();
      };
      hex::decode(data.trim()).map(Bytes::from).unwrap_or_default()
   }

   pub fn is_from(&self, address: Address) -> bool {
      same_address(&self.transaction.from, address)
   }

   pub fn is_to(&self, address: Address) -> bool {
      self.transaction
         .to
         .as_deref()
         .is_some_and(|to| same_address(to, address))
   }

   /// The wallet (`selected`) is the recipient
   pub fn is_incoming(&self, selected: Address) -> bool {
      self.is_to(selected)
   }

   /// The wallet sent this to itself
   pub fn is_self_sent(&self, selected: Address) -> bool {
      self.is_incoming(selected) && self.is_from(selected)
   }
}
