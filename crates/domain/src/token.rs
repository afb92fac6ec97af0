use serde::{Deserialize, Serialize};
use std::fmt;

/// A fungible asset identified by its chain and contract address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub chain_id: u64,
    pub address: String,
    pub symbol: String,
    pub decimals: u8,
    pub name: String,
}

impl Token {
    pub fn new(
        chain_id: u64,
        address: impl Into<String>,
        symbol: impl Into<String>,
        decimals: u8,
        name: impl Into<String>,
    ) -> Self {
        Self {
            chain_id,
            address: address.into(),
            symbol: symbol.into(),
            decimals,
            name: name.into(),
        }
    }

    /// Whether two records point at the same on-chain asset.
    /// Addresses compare case-insensitively; checksummed and lowercase
    /// forms of the same address are one asset.
    pub fn same_asset(&self, other: &Token) -> bool {
        self.chain_id == other.chain_id && self.address.eq_ignore_ascii_case(&other.address)
    }
}

/// The chain's native asset. Carries no address; it is not a contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    pub chain_id: u64,
    pub symbol: String,
    pub decimals: u8,
    pub name: String,
}

/// Display-ready asset identity after unwrapping.
///
/// A wrapped-native token resolves to `Native`; everything else stays a
/// `Token`. Callers must handle both branches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    Native(NativeCurrency),
    Token(Token),
}

impl Currency {
    pub fn symbol(&self) -> &str {
        match self {
            Currency::Native(native) => &native.symbol,
            Currency::Token(token) => &token.symbol,
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Currency::Native(_))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The two assets composing a staking/liquidity pool.
///
/// Order is significant only for display; selection logic treats the pair
/// symmetrically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub token_a: Token,
    pub token_b: Token,
}

impl TokenPair {
    pub fn new(token_a: Token, token_b: Token) -> Self {
        Self { token_a, token_b }
    }
}
