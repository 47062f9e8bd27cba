//! Token identity type.

use serde::{Deserialize, Serialize};

use super::{Decimals, TokenAddress};

/// A token: contract address plus native precision.
///
/// Two tokens are equal only if both address and decimals match.
///
/// # Examples
///
/// ```
/// use maturity_quote::domain::{Decimals, Token, TokenAddress};
///
/// let usdc = Token::new(TokenAddress::from_bytes([1u8; 20]), Decimals::new(6).expect("valid"));
/// assert_eq!(usdc.decimals().get(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    address: TokenAddress,
    decimals: Decimals,
}

impl Token {
    /// Creates a token from already-validated parts.
    #[must_use]
    pub const fn new(address: TokenAddress, decimals: Decimals) -> Self {
        Self { address, decimals }
    }

    /// Returns the contract address.
    #[must_use]
    pub const fn address(&self) -> TokenAddress {
        self.address
    }

    /// Returns the native precision.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }
}
