//! Core domain types for Summit staking pools.
//!
//! This crate holds the chain-agnostic building blocks consumed by the
//! display and CLI layers:
//! - Token, currency and pair identities
//! - Raw-unit amounts and display fractions
//! - Staking pool snapshots
//! - Weekly reward-rate math

pub mod math;
pub mod staking;
pub mod token;
pub mod value_objects;

pub use staking::{MigrationTarget, StakingSnapshot};
pub use token::{Currency, NativeCurrency, Token, TokenPair};
pub use value_objects::amount::TokenAmount;
pub use value_objects::fraction::Fraction;
