use super::{
   data::Settings,
   decode::Decoded,
   gas_actions::{GasAction, GasActionRequest, cancel_gas_price, fee_text, speed_up_gas_price},
   transaction::TransactionRecord,
};
use std::time::{Duration, Instant};
use tracing::debug;
use zeus_eth::alloy_primitives::U256;

/// Which view of the notification is in front
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Pane {
   #[default]
   Details,
   SpeedUp,
   Cancel,
}

/// What pressing the notification leads to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPress {
   OpenPaymentChannelHome,
   ShowDetails,
}

/// Notification about the newest transaction, with its details and the
/// speed up / cancel panes
#[derive(Debug, Clone, Default)]
pub struct TxNotification {
   visible: bool,
   details_visible: bool,
   pane: Pane,
   tx: Option<TransactionRecord>,
   decoded: Option<Decoded>,
   existing_gas_price: U256,
   autodismiss: Option<Duration>,
   shown_at: Option<Instant>,
}

impl TxNotification {
   pub fn new() -> Self {
      Self::default()
   }

   /// Show the notification for `tx`, details start closed
   pub fn show(&mut self, tx: TransactionRecord, decoded: Decoded, autodismiss: Option<Duration>) {
      debug!(target: "zeus_activity::notification", "Showing notification for {}", tx.id);
      self.existing_gas_price = tx.existing_gas_price();
      self.tx = Some(tx);
      self.decoded = Some(decoded);
      self.visible = true;
      self.details_visible = false;
      self.pane = Pane::Details;
      self.autodismiss = autodismiss;
      self.shown_at = Some(Instant::now());
   }

   pub fn hide(&mut self) {
      self.visible = false;
      self.details_visible = false;
      self.pane = Pane::Details;
      self.tx = None;
      self.decoded = None;
      self.autodismiss = None;
      self.shown_at = None;
   }

   /// Hide the notification once its autodismiss duration has passed
   ///
   /// Returns true if it was hidden.
   pub fn dismiss_if_expired(&mut self, now: Instant) -> bool {
      let expired = match (self.autodismiss, self.shown_at) {
         (Some(after), Some(shown_at)) => now.saturating_duration_since(shown_at) >= after,
         _ => false,
      };

      if self.visible && expired {
         debug!(target: "zeus_activity::notification", "Notification expired");
         self.hide();
         return true;
      }
      false
   }

   /// Payment channel transactions open the payment channel, the rest show their details
   pub fn press(&mut self) -> Option<NotificationPress> {
      let tx = self.tx.as_ref()?;
      if tx.payment_channel_transaction {
         return Some(NotificationPress::OpenPaymentChannelHome);
      }
      self.details_visible = true;
      self.pane = Pane::Details;
      Some(NotificationPress::ShowDetails)
   }

   pub fn open_speed_up(&mut self) {
      if self.details_shown() {
         self.pane = Pane::SpeedUp;
      }
   }

   pub fn finish_speed_up(&mut self) {
      if self.pane == Pane::SpeedUp {
         self.pane = Pane::Details;
      }
   }

   /// Leave the speed up pane with the request to send
   pub fn confirm_speed_up(&mut self) -> Option<GasActionRequest> {
      if self.pane != Pane::SpeedUp {
         return None;
      }
      self.finish_speed_up();
      self.request(GasAction::SpeedUp)
   }

   pub fn open_cancel(&mut self) {
      if self.details_shown() {
         self.pane = Pane::Cancel;
      }
   }

   pub fn finish_cancel(&mut self) {
      if self.pane == Pane::Cancel {
         self.pane = Pane::Details;
      }
   }

   /// Leave the cancel pane with the request to send
   pub fn confirm_cancel(&mut self) -> Option<GasActionRequest> {
      if self.pane != Pane::Cancel {
         return None;
      }
      self.finish_cancel();
      self.request(GasAction::Cancel)
   }

   pub fn close_details(&mut self) {
      self.details_visible = false;
      self.pane = Pane::Details;
   }

   /// Close the details and the notification itself
   pub fn close(&mut self) {
      self.close_details();
      self.hide();
   }

   fn request(&self, action: GasAction) -> Option<GasActionRequest> {
      self.tx.as_ref().map(|tx| GasActionRequest::new(action, tx))
   }

   pub fn speed_up_fee_text(&self, settings: &Settings) -> String {
      fee_text(
         speed_up_gas_price(self.existing_gas_price, settings),
         &settings.labels,
      )
   }

   pub fn cancel_fee_text(&self, settings: &Settings) -> String {
      fee_text(
         cancel_gas_price(self.existing_gas_price, settings),
         &settings.labels,
      )
   }

   pub fn is_visible(&self) -> bool {
      self.visible
   }

   /// Details are never shown for payment channel transactions
   pub fn details_shown(&self) -> bool {
      self.details_visible
         && self
            .tx
            .as_ref()
            .is_some_and(|tx| !tx.payment_channel_transaction)
   }

   pub fn pane(&self) -> Pane {
      self.pane
   }

   pub fn transaction(&self) -> Option<&TransactionRecord> {
      self.tx.as_ref()
   }

   pub fn decoded(&self) -> Option<&Decoded> {
      self.decoded.as_ref()
   }

   pub fn existing_gas_price(&self) -> U256 {
      self.existing_gas_price
   }
}

#[cfg(test)]
mod tests {
   use super::*;
   use crate::core::{action_key::ActionKind, decode::TransactionElement};

   fn decoded() -> Decoded {
      Decoded {
         kind: ActionKind::SentEther,
         element: TransactionElement::default(),
         details: Default::default(),
      }
   }

   fn pending_tx() -> TransactionRecord {
      let mut tx = TransactionRecord::default();
      tx.id = "newest".to_string();
      tx.transaction.gas_price = Some("0x38d7ea4c68000".to_string());
      tx
   }

   #[test]
   fn show_press_and_hide() {
      let mut notification = TxNotification::new();
      assert_eq!(notification.press(), None);

      notification.show(pending_tx(), decoded(), None);
      assert!(notification.is_visible());
      assert!(!notification.details_shown());
      assert_eq!(notification.existing_gas_price(), U256::from(10u64).pow(U256::from(15u64)));

      assert_eq!(notification.press(), Some(NotificationPress::ShowDetails));
      assert!(notification.details_shown());

      notification.close();
      assert!(!notification.is_visible());
      assert!(!notification.details_shown());
      assert!(notification.transaction().is_none());
      assert!(notification.decoded().is_none());
   }

   #[test]
   fn payment_channel_never_shows_details() {
      let mut tx = pending_tx();
      tx.payment_channel_transaction = true;

      let mut notification = TxNotification::new();
      notification.show(tx, decoded(), None);
      assert_eq!(
         notification.press(),
         Some(NotificationPress::OpenPaymentChannelHome)
      );
      assert!(!notification.details_shown());

      notification.open_speed_up();
      assert_eq!(notification.pane(), Pane::Details);
   }

   #[test]
   fn speed_up_and_cancel_panes() {
      let settings = Settings::default();
      let mut notification = TxNotification::new();
      notification.show(pending_tx(), decoded(), None);

      // panes need the details open
      notification.open_speed_up();
      assert_eq!(notification.pane(), Pane::Details);

      notification.press();
      notification.open_speed_up();
      assert_eq!(notification.pane(), Pane::SpeedUp);
      assert_eq!(notification.speed_up_fee_text(&settings), "0.0011 ETH");
      notification.finish_speed_up();
      assert_eq!(notification.pane(), Pane::Details);

      notification.open_cancel();
      assert_eq!(notification.pane(), Pane::Cancel);
      assert_eq!(notification.cancel_fee_text(&settings), "0.0015 ETH");
      let request = notification.confirm_cancel().unwrap();
      assert_eq!(request.action, GasAction::Cancel);
      assert_eq!(request.transaction_id, "newest");
      assert_eq!(notification.pane(), Pane::Details);
      assert!(notification.confirm_cancel().is_none());

      notification.open_speed_up();
      let request = notification.confirm_speed_up().unwrap();
      assert_eq!(request.new_gas_price(&settings), U256::from(11u64) * U256::from(10u64).pow(U256::from(14u64)));
   }

   #[test]
   fn new_transaction_resets_state() {
      let mut notification = TxNotification::new();
      notification.show(pending_tx(), decoded(), None);
      notification.press();
      notification.open_cancel();

      notification.show(TransactionRecord::default(), decoded(), None);
      assert!(!notification.details_shown());
      assert_eq!(notification.pane(), Pane::Details);
      assert_eq!(notification.existing_gas_price(), U256::ZERO);
   }

   #[test]
   fn autodismiss() {
      let mut notification = TxNotification::new();
      notification.show(pending_tx(), decoded(), Some(Duration::from_secs(5)));
      let now = Instant::now();

      assert!(!notification.dismiss_if_expired(now));
      assert!(notification.is_visible());
      assert!(notification.dismiss_if_expired(now + Duration::from_secs(6)));
      assert!(!notification.is_visible());

      notification.show(pending_tx(), decoded(), None);
      assert!(!notification.dismiss_if_expired(now + Duration::from_secs(600)));
   }
}
