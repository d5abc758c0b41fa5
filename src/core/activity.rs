use super::{
   context::{RenderContext, StaticInspector},
   data::Settings,
   decode::{Decoded, decode_transaction},
   element::{ElementImage, RowActions, StatusBadge, element_image, row_actions, status_badge, time_label},
   transaction::{TransactionRecord, TxStatus},
};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::{fmt::Write, path::Path};
use tracing::info;
use zeus_eth::ChainId;

/// A wallet export: market data, known contracts and the transactions to render
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityFile {
   pub context: RenderContext,
   pub inspector: StaticInspector,
   pub transactions: Vec<TransactionRecord>,
}

impl ActivityFile {
   pub fn load_from_path(path: &Path) -> Result<Self, anyhow::Error> {
      let data = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
      let file: Self =
         serde_json::from_slice(&data).with_context(|| format!("parsing {}", path.display()))?;
      info!(target: "zeus_activity::activity", "Loaded {} transactions from {}", file.transactions.len(), path.display());
      Ok(file)
   }

   /// Inspector with the contracts of the context and the ones listed in the file
   pub fn inspector(&self) -> StaticInspector {
      let mut inspector = StaticInspector::from_context(&self.context);
      inspector.extend(self.inspector.clone());
      inspector
   }

   pub fn render(&self, settings: &Settings) -> Vec<ActivityRow> {
      let inspector = self.inspector();
      self.transactions
         .iter()
         .map(|record| ActivityRow::new(record, &self.context, &inspector, settings))
         .collect()
   }
}

/// `None` for custom networks or transactions without a hash
pub fn explorer_url(record: &TransactionRecord) -> Option<String> {
   let chain = ChainId::new(record.network_id?).ok()?;
   let hash = record.transaction_hash.as_deref()?;
   Some(format!("{}/tx/{}", chain.block_explorer(), hash))
}

/// One rendered row of the activity list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRow {
   pub id: String,
   pub status: TxStatus,
   pub badge: StatusBadge,
   pub time: String,
   pub image: ElementImage,
   pub actions: RowActions,
   /// Link to the transaction on the network's block explorer
   pub explorer_url: Option<String>,
   #[serde(flatten)]
   pub decoded: Decoded,
}

impl ActivityRow {
   pub fn new(
      record: &TransactionRecord,
      ctx: &RenderContext,
      inspector: &StaticInspector,
      settings: &Settings,
   ) -> Self {
      let decoded = decode_transaction(record, ctx, inspector, settings);
      Self {
         id: record.id.clone(),
         status: record.status.clone(),
         badge: status_badge(&record.status),
         time: time_label(record, ctx.selected_address),
         image: element_image(&decoded, record, ctx, settings),
         actions: row_actions(record, ctx, settings),
         explorer_url: explorer_url(record),
         decoded,
      }
   }

   /// Plain text rendering of the row and its details
   pub fn to_text(&self) -> String {
      let element = &self.decoded.element;
      let details = &self.decoded.details;
      let not_set = String::new();

      let mut out = String::new();
      let _ = writeln!(out, "{}", self.time);
      let _ = writeln!(out, "{} [{}]", element.action_key, self.status);
      let _ = writeln!(
         out,
         "  {}  {}",
         element.value,
         element.fiat_value.as_ref().unwrap_or(&not_set)
      );
      let _ = writeln!(out, "  from: {}", details.render_from);
      let _ = writeln!(out, "  to:   {}", details.render_to);
      let _ = writeln!(out, "  gas: {}  gas price: {}", details.render_gas, details.render_gas_price);
      let _ = writeln!(
         out,
         "  total: {}  {}",
         details.render_total_value,
         details.render_total_value_fiat.as_ref().unwrap_or(&not_set)
      );
      if let Some(url) = &self.explorer_url {
         let _ = writeln!(out, "  {}", url);
      }
      if self.actions.any() {
         let mut actions = Vec::new();
         if self.actions.speed_up {
            actions.push("speed up");
         }
         if self.actions.cancel {
            actions.push("cancel");
         }
         let _ = writeln!(out, "  actions: {}", actions.join(", "));
      }
      out
   }
}
