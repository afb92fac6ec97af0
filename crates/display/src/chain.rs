use serde::{Deserialize, Serialize};
use std::env;
use summit_earn_domain::{Currency, NativeCurrency, Token};
use tracing::debug;

/// Environment variable overriding the protocol token address.
pub const PROTOCOL_TOKEN_ENV: &str = "SUMMIT_PROTOCOL_TOKEN_ADDRESS";
/// Environment variable overriding the wrapped-native token address.
pub const WRAPPED_NATIVE_ENV: &str = "SUMMIT_WRAPPED_NATIVE_ADDRESS";

/// Chain configuration errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ChainError {
    /// No asset table is registered for the chain.
    #[error("Unsupported chain id {0}")]
    UnsupportedChain(u64),
}

/// The well-known assets the card logic needs on one chain: the native
/// currency, its wrapped ERC-20 form, and the protocol reward token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainAssets {
    pub chain_id: u64,
    pub native: NativeCurrency,
    pub wrapped_native: Token,
    pub protocol_token: Token,
}

impl ChainAssets {
    /// Built-in asset table for a chain.
    pub fn for_chain(chain_id: u64) -> Result<Self, ChainError> {
        match chain_id {
            // Avalanche C-Chain
            43114 => Ok(Self {
                chain_id,
                native: avax(chain_id),
                wrapped_native: Token::new(
                    chain_id,
                    "0xB31f66AA3C1e785363F0875A1B74E27b85FD66c7",
                    "WAVAX",
                    18,
                    "Wrapped AVAX",
                ),
                protocol_token: Token::new(
                    chain_id,
                    "0x6A3F2c1E9d84b7C05A51eD6eB8fBd3A96C2B47e1",
                    "SMT",
                    18,
                    "Summit",
                ),
            }),
            // Fuji testnet
            43113 => Ok(Self {
                chain_id,
                native: avax(chain_id),
                wrapped_native: Token::new(
                    chain_id,
                    "0xd00ae08403B9bbb9124bB305C09058E32C39A48c",
                    "WAVAX",
                    18,
                    "Wrapped AVAX",
                ),
                protocol_token: Token::new(
                    chain_id,
                    "0x83080D4b5fC60e22dFFA8d14AD3BB41Dde48F199",
                    "SMT",
                    18,
                    "Summit",
                ),
            }),
            other => Err(ChainError::UnsupportedChain(other)),
        }
    }

    /// Applies address overrides from the environment, if set. Symbols,
    /// names and decimals stay as configured; only the addresses move.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(address) = env::var(PROTOCOL_TOKEN_ENV) {
            debug!(%address, "Overriding protocol token address from environment");
            self.protocol_token.address = address;
        }
        if let Ok(address) = env::var(WRAPPED_NATIVE_ENV) {
            debug!(%address, "Overriding wrapped native address from environment");
            self.wrapped_native.address = address;
        }
        self
    }

    pub fn is_wrapped_native(&self, token: &Token) -> bool {
        token.same_asset(&self.wrapped_native)
    }

    /// Resolves a pool token to its display identity: the wrapped-native
    /// token becomes the native currency, everything else stays itself.
    pub fn unwrap_token(&self, token: &Token) -> Currency {
        if self.is_wrapped_native(token) {
            Currency::Native(self.native.clone())
        } else {
            Currency::Token(token.clone())
        }
    }
}

fn avax(chain_id: u64) -> NativeCurrency {
    NativeCurrency {
        chain_id,
        symbol: "AVAX".to_string(),
        decimals: 18,
        name: "Avalanche".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_chain_is_rejected() {
        let err = ChainAssets::for_chain(1).unwrap_err();
        assert!(matches!(err, ChainError::UnsupportedChain(1)));
    }

    #[test]
    fn test_mainnet_and_fuji_differ_by_address() {
        let mainnet = ChainAssets::for_chain(43114).unwrap();
        let fuji = ChainAssets::for_chain(43113).unwrap();
        assert_eq!(mainnet.native.symbol, "AVAX");
        assert_eq!(fuji.native.symbol, "AVAX");
        assert!(!mainnet.wrapped_native.same_asset(&fuji.wrapped_native));
    }

    #[test]
    fn test_unwrap_token() {
        let assets = ChainAssets::for_chain(43114).unwrap();
        let unwrapped = assets.unwrap_token(&assets.wrapped_native);
        assert!(unwrapped.is_native());
        assert_eq!(unwrapped.symbol(), "AVAX");

        let kept = assets.unwrap_token(&assets.protocol_token);
        assert!(!kept.is_native());
        assert_eq!(kept.symbol(), "SMT");
    }
}
