//! Display-layer assembly for Summit staking pool earn cards.
//!
//! Turns a read-only [`summit_earn_domain::StakingSnapshot`] into a
//! [`card::PoolCardView`]: formatted stat lines, call-to-action selection
//! and navigation routes. Everything here is a pure function of its
//! inputs; rendering (terminal, web, anything else) lives downstream.

/// Card assembly and branch selection.
pub mod card;
/// Per-chain asset configuration.
pub mod chain;
/// Navigation path builders.
pub mod routes;

pub use card::{CardAction, CardRequest, PoolCardView, UNAVAILABLE, select_brand_token};
pub use chain::{ChainAssets, ChainError};
