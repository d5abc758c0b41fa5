use super::{
   action_key::ActionKind,
   context::RenderContext,
   data::Settings,
   decode::Decoded,
   transaction::{TransactionRecord, TxStatus},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use zeus_eth::alloy_primitives::Address;

const DATE_FORMAT: &str = "%-m/%-d/%Y %-I:%M:%S %p";

/// How the status of a transaction is highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusBadge {
   Confirmed,
   Pending,
   Failed,
   Neutral,
}

pub fn status_badge(status: &TxStatus) -> StatusBadge {
   match status {
      TxStatus::Confirmed => StatusBadge::Confirmed,
      TxStatus::Submitted | TxStatus::Approved => StatusBadge::Pending,
      TxStatus::Failed => StatusBadge::Failed,
      _ => StatusBadge::Neutral,
   }
}

/// Render a unix timestamp in milliseconds, empty if it is out of range
pub fn format_date(time_ms: i64) -> String {
   DateTime::<Utc>::from_timestamp_millis(time_ms)
      .map(|date| date.format(DATE_FORMAT).to_string())
      .unwrap_or_default()
}

/// The date of a transaction, prefixed with its nonce when we sent it
pub fn time_label(record: &TransactionRecord, selected: Address) -> String {
   let incoming = record.is_incoming(selected);
   let self_sent = record.is_self_sent(selected);
   let date = format_date(record.time);

   match record.nonce() {
      Some(nonce) if !incoming || self_sent => format!("#{}  - {}", nonce, date),
      _ => date,
   }
}

/// The icon in front of a row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementImage {
   EthLogo,
   TokenImage { address: String, logo: Option<String> },
   Deposit,
   Withdraw,
   Identicon { address: String },
}

pub fn element_image(
   decoded: &Decoded,
   record: &TransactionRecord,
   ctx: &RenderContext,
   settings: &Settings,
) -> ElementImage {
   let element = &decoded.element;

   if element.contract_deployment {
      return ElementImage::EthLogo;
   }

   if decoded.kind == ActionKind::SmartContractInteraction {
      let logo = record
         .to_address()
         .and_then(|to| ctx.metadata(to))
         .and_then(|metadata| metadata.logo.clone());
      return ElementImage::TokenImage {
         address: element.render_to.clone(),
         logo,
      };
   }

   if element.payment_channel_transaction {
      if let Some(contract) = settings.payment_channel_contract(record.network_id) {
         if record.is_to(contract) {
            return ElementImage::Deposit;
         }
         if record.is_from(contract) {
            return ElementImage::Withdraw;
         }
      }
   }

   ElementImage::Identicon {
      address: element.render_to.clone(),
   }
}

/// Buttons offered under a row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowActions {
   pub speed_up: bool,
   pub cancel: bool,
}

impl RowActions {
   pub fn any(&self) -> bool {
      self.speed_up || self.cancel
   }
}

/// Pending transactions can be cancelled, and sped up unless they go to the
/// payment channel of the network the wallet is on
pub fn row_actions(record: &TransactionRecord, ctx: &RenderContext, settings: &Settings) -> RowActions {
   if !record.status.is_pending() {
      return RowActions::default();
   }

   let to_channel = settings
      .payment_channel_contract(ctx.provider_network_id())
      .is_some_and(|channel| record.is_to(channel));

   RowActions {
      speed_up: !to_channel,
      cancel: true,
   }
}
