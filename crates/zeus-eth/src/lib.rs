pub mod abi;
pub mod currency;
pub mod types;
pub mod utils;

pub use types::ChainId;

// Re-Exports
pub use alloy_primitives;
pub use alloy_sol_types;
