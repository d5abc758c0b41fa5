pub mod erc20;
pub mod erc721;
pub mod native;

pub use erc20::ERC20Token;
pub use erc721::ERC721Collection;
pub use native::NativeCurrency;
