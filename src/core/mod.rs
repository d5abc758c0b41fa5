pub mod action_key;
pub mod activity;
pub mod context;
pub mod data;
pub mod decode;
pub mod element;
pub mod gas_actions;
pub mod notification;
pub mod transaction;
pub mod utils;


pub use action_key::{ActionKind, get_action_key, method_name};
pub use activity::{ActivityFile, ActivityRow};
pub use context::{AssetInspector, ContractMetadata, RenderContext, StaticInspector};
pub use data::{Labels, Settings};
pub use decode::{Decoded, TransactionDetails, TransactionElement, decode_all, decode_transaction};
pub use transaction::{TransactionRecord, TxParams, TxStatus};
