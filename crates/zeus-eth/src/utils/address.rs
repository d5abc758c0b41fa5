use alloy_primitives::Address;
use std::str::FromStr;

/// The full EIP-55 checksummed form of an address
pub fn render_full_address(address: Address) -> String {
   address.to_checksum(None)
}

/// Parse an address regardless of its case or `0x` prefix
///
/// Returns `None` for anything that is not 20 bytes of hex.
pub fn safe_to_checksum(value: &str) -> Option<Address> {
   Address::from_str(value.trim()).ok()
}

/// Whether `value` is `address`, ignoring case
pub fn same_address(value: &str, address: Address) -> bool {
   safe_to_checksum(value) == Some(address)
}
