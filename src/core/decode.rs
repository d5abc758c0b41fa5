use super::{
   action_key::{ActionKind, get_action_key},
   context::{AssetInspector, RenderContext},
   data::{Labels, Settings},
   transaction::TransactionRecord,
};
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};
use zeus_eth::{
   abi::{erc20::decode_transfer, erc721::decode_transfer_from},
   alloy_primitives::{Address, U256},
   utils::{
      address::{render_full_address, safe_to_checksum},
      units::{
         ETH_DECIMALS, add_currency_symbol, balance_to_fiat, balance_to_fiat_number,
         from_token_minimal_unit, render_from_token_minimal_unit, render_from_wei,
         render_to_gwei, wei_to_fiat, wei_to_fiat_number,
      },
   },
};

/// What the activity list shows for a transaction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionElement {
   pub render_from: String,
   pub render_to: String,
   pub action_key: String,
   pub value: String,
   pub fiat_value: Option<String>,
   pub contract_deployment: bool,
   pub payment_channel_transaction: bool,
}

/// What the details view shows for a transaction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetails {
   pub render_from: String,
   pub render_to: String,
   pub transaction_hash: Option<String>,
   pub render_gas: String,
   pub render_gas_price: String,
   pub render_value: String,
   pub render_value_fiat: Option<String>,
   pub render_total_gas: Option<String>,
   pub render_total_gas_fiat: Option<String>,
   pub render_total_value: String,
   pub render_total_value_fiat: Option<String>,
}

/// A classified transaction with everything needed to display it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decoded {
   pub kind: ActionKind,
   pub element: TransactionElement,
   pub details: TransactionDetails,
}

/// Checksummed form of `raw`, or `raw` untouched if it is not an address
pub fn render_address(raw: &str) -> String {
   match safe_to_checksum(raw) {
      Some(address) => render_full_address(address),
      None => raw.to_string(),
   }
}

struct TxDecoder<'a, I> {
   record: &'a TransactionRecord,
   ctx: &'a RenderContext,
   inspector: &'a I,
   settings: &'a Settings,
   ticker: String,
   total_gas: U256,
}

impl<'a, I: AssetInspector> TxDecoder<'a, I> {
   fn new(
      record: &'a TransactionRecord,
      ctx: &'a RenderContext,
      inspector: &'a I,
      settings: &'a Settings,
   ) -> Self {
      Self {
         record,
         ctx,
         inspector,
         settings,
         ticker: ctx.ticker(),
         total_gas: record.total_gas(),
      }
   }

   fn labels(&self) -> &Labels {
      &self.settings.labels
   }

   fn currency(&self) -> &str {
      &self.ctx.current_currency
   }

   fn wei_to_fiat(&self, wei: U256) -> Option<String> {
      wei_to_fiat(wei, self.ctx.conversion_rate, self.currency())
   }

   /// "0.00042 ETH"
   fn render_eth(&self, wei: U256) -> String {
      format!("{} {}", render_from_wei(wei), self.ticker)
   }

   fn render_from(&self) -> String {
      render_address(&self.record.transaction.from)
   }

   fn render_to(&self) -> String {
      self.record
         .transaction
         .to
         .as_deref()
         .map(render_address)
         .unwrap_or_default()
   }

   fn render_gas(&self) -> String {
      match self.record.gas() {
         Some(gas) => gas.to_string(),
         None => self.labels().tx_details_not_available.clone(),
      }
   }

   fn render_gas_price(&self) -> String {
      match self.record.gas_price() {
         Some(price) => render_to_gwei(price),
         None => self.labels().tx_details_not_available.clone(),
      }
   }

   fn transaction_hash(&self) -> Option<String> {
      self.record.transaction_hash.clone()
   }

   /// Plain ether transfers and contract calls
   fn decode_confirm_tx(&self, kind: ActionKind, action_key: String) -> Decoded {
      let value = self.record.value().unwrap_or(U256::ZERO);
      let total_value = value.saturating_add(self.total_gas);
      let render_from = self.render_from();
      let render_to = self.render_to();

      let symbol = self
         .record
         .to_address()
         .and_then(|to| self.ctx.metadata(to))
         .map(|metadata| metadata.symbol.as_str())
         .filter(|symbol| !symbol.is_empty());

      let action_key = match symbol {
         Some(symbol) => format!("{} {}", symbol, action_key),
         None => action_key,
      };

      let details = TransactionDetails {
         render_from: render_from.clone(),
         render_to: render_to.clone(),
         transaction_hash: self.transaction_hash(),
         render_gas: self.render_gas(),
         render_gas_price: self.render_gas_price(),
         render_value: self.render_eth(value),
         render_value_fiat: self.wei_to_fiat(value),
         render_total_gas: Some(self.render_eth(self.total_gas)),
         render_total_gas_fiat: self.wei_to_fiat(self.total_gas),
         render_total_value: self.render_eth(total_value),
         render_total_value_fiat: self.wei_to_fiat(total_value),
      };

      let element = TransactionElement {
         render_from,
         render_to,
         action_key,
         value: self.render_eth(value),
         fiat_value: self.wei_to_fiat(value),
         ..Default::default()
      };

      Decoded {
         kind,
         element,
         details,
      }
   }

   /// The row shows what the deployment cost in gas
   fn decode_deployment_tx(&self, kind: ActionKind, action_key: String) -> Decoded {
      let value = self.record.value().unwrap_or(U256::ZERO);
      let total_value = value.saturating_add(self.total_gas);
      let render_from = self.render_from();
      let render_to = self.labels().to_contract.clone();

      let element = TransactionElement {
         render_from: render_from.clone(),
         render_to: render_to.clone(),
         action_key,
         value: self.render_eth(self.total_gas),
         fiat_value: self.wei_to_fiat(self.total_gas),
         contract_deployment: true,
         ..Default::default()
      };

      let details = TransactionDetails {
         render_from,
         render_to,
         transaction_hash: self.transaction_hash(),
         render_gas: self.render_gas(),
         render_gas_price: self.render_gas_price(),
         render_value: self.render_eth(value),
         render_value_fiat: self.wei_to_fiat(value),
         render_total_gas: Some(self.render_eth(self.total_gas)),
         render_total_gas_fiat: self.wei_to_fiat(self.total_gas),
         render_total_value: self.render_eth(total_value),
         render_total_value_fiat: self.wei_to_fiat(total_value),
      };

      Decoded {
         kind,
         element,
         details,
      }
   }

   /// `transfer(address,uint256)`, either an ERC-20 amount or an ERC-721 token id
   fn decode_transfer_tx(&self, kind: ActionKind, action_key: String) -> Decoded {
      let data = self.record.call_data();
      let (recipient, amount) = match decode_transfer(&data) {
         Ok(decoded) => decoded,
         Err(e) => {
            warn!(target: "zeus_activity::decode", "Transaction {} has invalid transfer data: {}", self.record.id, e);
            return self.decode_confirm_tx(kind, action_key);
         }
      };

      let Some(contract) = self.record.to_address() else {
         warn!(target: "zeus_activity::decode", "Transfer {} has no token contract", self.record.id);
         return self.decode_confirm_tx(kind, action_key);
      };

      let is_collectible = self.inspector.owner_of(contract, amount).is_some();
      trace!(target: "zeus_activity::decode", "Transfer on {} is collectible: {}", contract, is_collectible);

      let mut decoded = if is_collectible {
         self.collectible_transfer(contract, amount)
      } else {
         self.token_transfer(kind, contract, amount, action_key)
      };

      let render_to = render_full_address(recipient);
      decoded.element.render_from = self.render_from();
      decoded.element.render_to = render_to.clone();
      decoded.details.render_from = self.render_from();
      decoded.details.render_to = render_to;
      decoded.details.transaction_hash = self.transaction_hash();
      decoded.details.render_gas = self.render_gas();
      decoded.details.render_gas_price = self.render_gas_price();
      decoded
   }

   fn token_transfer(&self, kind: ActionKind, contract: Address, amount: U256, action_key: String) -> Decoded {
      let labels = self.labels();
      let token = self.ctx.token(contract);

      let action_key = match token {
         Some(token) => labels.sent_asset(&token.symbol),
         None => action_key,
      };

      let render_token = match token {
         Some(token) => format!(
            "{} {}",
            render_from_token_minimal_unit(amount, token.decimals),
            token.symbol
         ),
         None => labels.value_not_available.clone(),
      };

      let mut token_fiat = None;
      let mut token_fiat_number = None;
      if let Some(token) = token {
         if let Some(exchange_rate) = self.ctx.token_exchange_rate(token.address) {
            let balance = from_token_minimal_unit(amount, token.decimals);
            token_fiat = balance_to_fiat(
               balance,
               self.ctx.conversion_rate,
               Some(exchange_rate),
               self.currency(),
            );
            token_fiat_number = self.ctx.conversion_rate.map(|conversion_rate| {
               balance_to_fiat_number(balance, conversion_rate, exchange_rate, 5)
            });
         }
      }

      let total_value_fiat = match (token_fiat_number, self.ctx.conversion_rate) {
         (Some(token_fiat), Some(conversion_rate)) if token_fiat != 0.0 => {
            let total = wei_to_fiat_number(self.total_gas, conversion_rate) + token_fiat;
            Some(add_currency_symbol(total, self.currency()))
         }
         _ => None,
      };

      let render_gas = self.render_eth(self.total_gas);

      let element = TransactionElement {
         action_key,
         value: render_token.clone(),
         fiat_value: token_fiat.as_ref().map(|fiat| format!("- {}", fiat)),
         ..Default::default()
      };

      let details = TransactionDetails {
         render_value: render_token.clone(),
         render_value_fiat: token_fiat,
         render_total_gas: Some(render_gas.clone()),
         render_total_gas_fiat: self.wei_to_fiat(self.total_gas),
         render_total_value: labels.with_gas(&render_token, &render_gas),
         render_total_value_fiat: total_value_fiat,
         ..Default::default()
      };

      Decoded {
         kind,
         element,
         details,
      }
   }

   fn collectible_transfer(&self, contract: Address, token_id: U256) -> Decoded {
      let labels = self.labels();
      let collection = self.ctx.collectible_contract(contract);

      let action_key = match collection {
         Some(collection) => labels.sent_asset(&collection.name),
         None => labels.sent_collectible.clone(),
      };

      let (element, details) = self.collectible_rendering(contract, token_id, action_key);
      Decoded {
         kind: ActionKind::SentCollectible,
         element,
         details,
      }
   }

   /// Row and details of a collectible transfer, addresses left to the caller
   fn collectible_rendering(
      &self,
      contract: Address,
      token_id: U256,
      action_key: String,
   ) -> (TransactionElement, TransactionDetails) {
      let labels = self.labels();
      let collection = self.ctx.collectible_contract(contract);
      let render_id = labels.token_id(&token_id.to_string());

      let render_collectible = match collection {
         Some(collection) => format!("{} {}", render_id, collection.symbol),
         None => render_id.clone(),
      };

      let render_gas = self.render_eth(self.total_gas);

      let element = TransactionElement {
         action_key,
         value: render_id,
         fiat_value: collection.map(|collection| collection.symbol.clone()),
         ..Default::default()
      };

      let details = TransactionDetails {
         render_value: render_collectible.clone(),
         render_value_fiat: None,
         render_total_gas: Some(render_gas.clone()),
         render_total_gas_fiat: self.wei_to_fiat(self.total_gas),
         render_total_value: labels.with_gas(&render_collectible, &render_gas),
         render_total_value_fiat: None,
         ..Default::default()
      };

      (element, details)
   }

   /// `transferFrom(address,address,uint256)` on a collectible contract
   fn decode_transfer_from_tx(&self, kind: ActionKind, action_key: String) -> Decoded {
      let data = self.record.call_data();
      let (from, to, token_id) = match decode_transfer_from(&data) {
         Ok(decoded) => decoded,
         Err(e) => {
            warn!(target: "zeus_activity::decode", "Transaction {} has invalid transferFrom data: {}", self.record.id, e);
            return self.decode_confirm_tx(kind, action_key);
         }
      };

      let Some(contract) = self.record.to_address() else {
         warn!(target: "zeus_activity::decode", "Transfer {} has no collectible contract", self.record.id);
         return self.decode_confirm_tx(kind, action_key);
      };
      let action_key = match self.ctx.collectible_contract(contract) {
         Some(collection) => self.labels().sent_asset(&collection.name),
         None => action_key,
      };

      let (mut element, mut details) = self.collectible_rendering(contract, token_id, action_key);

      let render_from = render_full_address(from);
      let render_to = render_full_address(to);
      element.render_from = render_from.clone();
      element.render_to = render_to.clone();
      details.render_from = render_from;
      details.render_to = render_to;
      details.transaction_hash = self.transaction_hash();
      details.render_gas = self.render_gas();
      details.render_gas_price = self.render_gas_price();

      Decoded {
         kind,
         element,
         details,
      }
   }

   /// Deposits are valued in ETH, everything else moves SAI
   fn decode_payment_channel_tx(&self, kind: ActionKind, action_key: String) -> Decoded {
      let labels = self.labels();
      let contract = self.settings.payment_channel_contract(self.record.network_id);
      let is_deposit = contract.is_some_and(|contract| self.record.is_to(contract));

      let total = self.record.value().unwrap_or(U256::ZERO);
      let total_fiat = self.wei_to_fiat(total);
      let unit = if is_deposit {
         &labels.unit_eth
      } else {
         &labels.unit_sai
      };
      let render_total = format!("{} {}", render_from_wei(total), unit);

      let render_total_fiat = if is_deposit {
         total_fiat.clone()
      } else {
         balance_to_fiat(
            from_token_minimal_unit(total, ETH_DECIMALS),
            self.ctx.conversion_rate,
            self.ctx.exchange_rate,
            self.currency(),
         )
      };

      let render_from = self.render_from();
      let render_to = self.render_to();

      let details = TransactionDetails {
         render_from: render_from.clone(),
         render_to: render_to.clone(),
         transaction_hash: self.transaction_hash(),
         render_gas: self.render_gas(),
         render_gas_price: self.render_gas_price(),
         render_value: render_total.clone(),
         render_value_fiat: total_fiat.clone(),
         render_total_gas: None,
         render_total_gas_fiat: None,
         render_total_value: render_total.clone(),
         render_total_value_fiat: if is_deposit { total_fiat } else { None },
      };

      let element = TransactionElement {
         render_from,
         render_to,
         action_key,
         value: render_total,
         fiat_value: render_total_fiat,
         payment_channel_transaction: true,
         ..Default::default()
      };

      Decoded {
         kind,
         element,
         details,
      }
   }
}

/// Classify a transaction and derive the values shown for it
pub fn decode_transaction(
   record: &TransactionRecord,
   ctx: &RenderContext,
   inspector: &impl AssetInspector,
   settings: &Settings,
) -> Decoded {
   let (kind, action_key) = get_action_key(record, ctx, inspector, settings);
   trace!(target: "zeus_activity::decode", "Transaction {} classified as {:?} ({})", record.id, kind, action_key);

   let decoder = TxDecoder::new(record, ctx, inspector, settings);

   if record.payment_channel_transaction {
      return decoder.decode_payment_channel_tx(kind, action_key);
   }

   match kind {
      ActionKind::SentTokens => decoder.decode_transfer_tx(kind, action_key),
      ActionKind::SentCollectible => decoder.decode_transfer_from_tx(kind, action_key),
      ActionKind::ContractDeployment => decoder.decode_deployment_tx(kind, action_key),
      _ => decoder.decode_confirm_tx(kind, action_key),
   }
}

/// Decode every record, newest first as the wallet stores them
pub fn decode_all(
   records: &[TransactionRecord],
   ctx: &RenderContext,
   inspector: &impl AssetInspector,
   settings: &Settings,
) -> Vec<Decoded> {
   records
      .iter()
      .map(|record| decode_transaction(record, ctx, inspector, settings))
      .collect()
}

#[cfg(test)]
mod tests {
   use super::*;
   use crate::core::context::StaticInspector;
   use zeus_eth::{abi::erc721::encode_transfer_from, alloy_primitives::address};

   const ME: Address = address!("5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
   const OTHER: Address = address!("fB6916095ca1df60bB79Ce92cE3Ea74c37c5d359");

   #[test]
   fn transfer_from_without_contract_falls_back() {
      let mut record = TransactionRecord::default();
      record.transaction.from = ME.to_string();
      record.transaction.to = Some("not an address".to_string());
      record.transaction.value = Some("0x0".to_string());
      record.transaction.data = Some(encode_transfer_from(ME, OTHER, U256::from(7u64)).to_string());

      let ctx = RenderContext::default();
      let inspector = StaticInspector::new();
      let settings = Settings::default();
      let decoder = TxDecoder::new(&record, &ctx, &inspector, &settings);

      let decoded = decoder.decode_transfer_from_tx(ActionKind::SentCollectible, "Sent Collectible".to_string());
      assert_eq!(decoded.kind, ActionKind::SentCollectible);
      assert_eq!(decoded.element.action_key, "Sent Collectible");
      assert_eq!(decoded.element.value, "0 ETH");
      assert_eq!(decoded.element.render_to, "not an address");
   }

   #[test]
   fn render_address_keeps_garbage() {
      assert_eq!(
         render_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"),
         "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
      );
      assert_eq!(render_address("not an address"), "not an address");
      assert_eq!(render_address(""), "");
   }
}
