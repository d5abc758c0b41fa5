use super::{
   context::{AssetInspector, RenderContext},
   data::{Labels, Settings},
   transaction::TransactionRecord,
};
use serde::{Deserialize, Serialize};
use zeus_eth::abi::{erc20, selector};

pub const DEPLOY_METHOD: &str = "deploy";
pub const TRANSFER_METHOD: &str = "transfer";
pub const TRANSFER_FROM_METHOD: &str = "transferfrom";
pub const APPROVE_METHOD: &str = "approve";
pub const SMART_CONTRACT_INTERACTION_METHOD: &str = "smartContractInteraction";
pub const SENT_ETHER_METHOD: &str = "sentEther";

/// What a transaction does
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionKind {
   SentEther,
   SentTokens,
   SentCollectible,
   ContractDeployment,
   Approve,
   SmartContractInteraction,
   PaymentChannel,
   /// A method resolved through the signature registry
   Method(String),
}

impl ActionKind {
   pub fn from_method(method: &str) -> Self {
      match method {
         SENT_ETHER_METHOD => Self::SentEther,
         TRANSFER_METHOD => Self::SentTokens,
         TRANSFER_FROM_METHOD => Self::SentCollectible,
         DEPLOY_METHOD => Self::ContractDeployment,
         APPROVE_METHOD => Self::Approve,
         SMART_CONTRACT_INTERACTION_METHOD => Self::SmartContractInteraction,
         other => Self::Method(other.to_string()),
      }
   }

   /// Recover the kind of an action key that was rendered before
   pub fn from_label(label: &str, labels: &Labels) -> Self {
      if label == labels.sent_tokens {
         Self::SentTokens
      } else if label == labels.sent_collectible {
         Self::SentCollectible
      } else if label == labels.contract_deploy {
         Self::ContractDeployment
      } else if label == labels.approve {
         Self::Approve
      } else if label == labels.smart_contract_interaction {
         Self::SmartContractInteraction
      } else {
         Self::Method(label.to_string())
      }
   }

   /// The label of kinds that do not depend on the transaction direction
   pub fn label(&self, labels: &Labels) -> Option<String> {
      let label = match self {
         Self::SentTokens => &labels.sent_tokens,
         Self::SentCollectible => &labels.sent_collectible,
         Self::ContractDeployment => &labels.contract_deploy,
         Self::Approve => &labels.approve,
         Self::SmartContractInteraction => &labels.smart_contract_interaction,
         Self::Method(name) => name,
         Self::SentEther | Self::PaymentChannel => return None,
      };
      Some(label.clone())
   }
}

/// Identify the method a transaction calls
///
/// Contract deployments give [DEPLOY_METHOD], known selectors give their method,
/// then the signature registry is consulted. Anything else is a smart contract
/// interaction when the recipient holds code, or a plain ether transfer.
pub fn method_name(
   record: &TransactionRecord,
   ctx: &RenderContext,
   inspector: &impl AssetInspector,
) -> String {
   if record.is_deployment() {
      return DEPLOY_METHOD.to_string();
   }

   let data = record.call_data();
   if let Some(selector) = selector(&data) {
      match selector {
         erc20::TRANSFER_SELECTOR => return TRANSFER_METHOD.to_string(),
         erc20::TRANSFER_FROM_SELECTOR => return TRANSFER_FROM_METHOD.to_string(),
         erc20::APPROVE_SELECTOR => return APPROVE_METHOD.to_string(),
         _ => {}
      }

      if let Some(name) = ctx.method_name(selector) {
         return name.clone();
      }
   }

   let to_smart_contract = record.to_smart_contract.unwrap_or_else(|| {
      record
         .to_address()
         .is_some_and(|to| inspector.is_contract(to))
   });

   if to_smart_contract {
      SMART_CONTRACT_INTERACTION_METHOD.to_string()
   } else {
      SENT_ETHER_METHOD.to_string()
   }
}

/// Label of a native coin transfer seen from the selected address
fn direction_label(record: &TransactionRecord, ctx: &RenderContext, labels: &Labels, unit: &str) -> String {
   let selected = ctx.selected_address;
   if record.is_self_sent(selected) {
      labels.self_sent_unit(unit)
   } else if record.is_incoming(selected) {
      labels.received_unit(unit)
   } else {
      labels.sent_unit(unit)
   }
}

fn payment_channel_action_key(record: &TransactionRecord, ctx: &RenderContext, settings: &Settings) -> String {
   let labels = &settings.labels;
   if let Some(contract) = settings.payment_channel_contract(record.network_id) {
      if record.is_to(contract) {
         return labels.instant_payment_deposit.clone();
      }
      if record.is_from(contract) {
         return labels.instant_payment_withdraw.clone();
      }
   }
   direction_label(record, ctx, labels, &labels.unit_sai)
}

/// Classify a transaction and render its action key
pub fn get_action_key(
   record: &TransactionRecord,
   ctx: &RenderContext,
   inspector: &impl AssetInspector,
   settings: &Settings,
) -> (ActionKind, String) {
   let labels = &settings.labels;

   if let Some(label) = record.action_key.as_deref().filter(|key| !key.is_empty()) {
      let kind = if record.payment_channel_transaction {
         ActionKind::PaymentChannel
      } else {
         ActionKind::from_label(label, labels)
      };
      return (kind, label.to_string());
   }

   if record.payment_channel_transaction {
      let key = payment_channel_action_key(record, ctx, settings);
      return (ActionKind::PaymentChannel, key);
   }

   let kind = ActionKind::from_method(&method_name(record, ctx, inspector));
   let key = match kind.label(labels) {
      Some(label) => label,
      None => direction_label(record, ctx, labels, &ctx.ticker()),
   };

   (kind, key)
}
