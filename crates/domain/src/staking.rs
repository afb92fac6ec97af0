use crate::token::TokenPair;
use crate::value_objects::amount::TokenAmount;
use serde::{Deserialize, Serialize};

/// Read-only view of one staking pool as seen by one caller.
///
/// All figures arrive pre-computed from the (out-of-scope) chain data
/// layer. `reward_rate` is present exactly when the caller has a stake.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StakingSnapshot {
    pub pair: TokenPair,
    /// The caller's current stake; zero when not staking.
    pub staked_amount: TokenAmount,
    /// Reward tokens emitted per second across the whole pool.
    pub total_reward_rate: TokenAmount,
    /// Pool TVL expressed in the native collateral unit.
    pub total_staked_in_collateral: TokenAmount,
    /// The caller's share of emission, per second.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward_rate: Option<TokenAmount>,
    /// True once the reward-emission window has ended.
    pub is_period_finished: bool,
}

impl StakingSnapshot {
    /// Whether the pool is active for this caller.
    pub fn is_staking(&self) -> bool {
        !self.staked_amount.is_zero()
    }
}

/// A successor pool the caller should move their stake into.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationTarget {
    pub pair: TokenPair,
    pub version: u32,
}
