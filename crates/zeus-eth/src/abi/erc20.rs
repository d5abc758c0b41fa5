use super::{DecodeError, ensure_selector};
use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::{SolCall, sol};
use tracing::trace;

sol! {
    contract IERC20 {
        event Transfer(address indexed from, address indexed to, uint value);

        function approve(address spender, uint256 amount) external returns (bool);
        function transfer(address recipient, uint256 amount) external returns (bool);
        function transferFrom(address from, address recipient, uint256 amount) external returns (bool);
    }
}

pub const TRANSFER_SELECTOR: [u8; 4] = IERC20::transferCall::SELECTOR;
pub const TRANSFER_FROM_SELECTOR: [u8; 4] = IERC20::transferFromCall::SELECTOR;
pub const APPROVE_SELECTOR: [u8; 4] = IERC20::approveCall::SELECTOR;

// ** ABI Encode Functions

pub fn encode_transfer(recipient: Address, amount: U256) -> Bytes {
    let c = IERC20::transferCall { recipient, amount };
    Bytes::from(c.abi_encode())
}

pub fn encode_approve(spender: Address, amount: U256) -> Bytes {
    let c = IERC20::approveCall { spender, amount };
    Bytes::from(c.abi_encode())
}

// ** ABI Decode Functions

/// Decode a `transfer(address,uint256)` call into its recipient and amount
///
/// For collectibles the amount is the token id.
pub fn decode_transfer(call_data: &[u8]) -> Result<(Address, U256), DecodeError> {
    ensure_selector(call_data, TRANSFER_SELECTOR)?;
    let call = IERC20::transferCall::abi_decode(call_data)?;
    trace!(target: "zeus_eth::abi::erc20", "Decoded transfer to {} amount {}", call.recipient, call.amount);
    Ok((call.recipient, call.amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, hex};

    #[test]
    fn known_selectors() {
        assert_eq!(hex::encode(TRANSFER_SELECTOR), "a9059cbb");
        assert_eq!(hex::encode(TRANSFER_FROM_SELECTOR), "23b872dd");
        assert_eq!(hex::encode(APPROVE_SELECTOR), "095ea7b3");
    }

    #[test]
    fn decode_wallet_transfer_data() {
        // transfer 1 token (18 decimals) as the wallet would submit it
        let data = hex::decode(
            "a9059cbb\
             0000000000000000000000003e5e9111ae8eb78fe1cc3bb8915d5d461f3ef9a9\
             0000000000000000000000000000000000000000000000000de0b6b3a7640000",
        )
        .unwrap();

        let (to, amount) = decode_transfer(&data).unwrap();
        assert_eq!(to, address!("3e5e9111ae8eb78fe1cc3bb8915d5d461f3ef9a9"));
        assert_eq!(amount, U256::from(1_000_000_000_000_000_000u128));
    }

    #[test]
    fn decode_rejects_truncated_arguments() {
        let data = encode_transfer(Address::ZERO, U256::from(5));
        let err = decode_transfer(&data[..40]).unwrap_err();
        assert!(matches!(err, DecodeError::Abi(_)));
    }

    #[test]
    fn decode_rejects_other_calls() {
        let data = encode_approve(Address::ZERO, U256::MAX);
        assert!(matches!(
            decode_transfer(&data),
            Err(DecodeError::SelectorMismatch { .. })
        ));
        assert!(matches!(decode_transfer(&[]), Err(DecodeError::Empty)));
    }
}
