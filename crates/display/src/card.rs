use crate::chain::ChainAssets;
use crate::routes;
use serde::{Deserialize, Serialize};
use summit_earn_domain::math::rewards;
use summit_earn_domain::{MigrationTarget, StakingSnapshot, Token, TokenPair};

/// Rendered in place of any figure that cannot be computed.
pub const UNAVAILABLE: &str = "-";

const SIGNIFICANT_DIGITS: u32 = 4;
const PER_COLLATERAL_PLACES: u32 = 4;
const GROUP_SEPARATOR: char = ',';

/// One card's worth of input: the snapshot plus everything the chain data
/// layer resolves alongside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardRequest {
    pub snapshot: StakingSnapshot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migration: Option<MigrationTarget>,
    pub version: u32,
    /// Annualized return, computed upstream; rendered verbatim with a `%`.
    pub apr: String,
}

/// A call to action on the card, already routed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardAction {
    Migrate { route: String },
    Manage { route: String },
    Deposit { route: String },
}

impl CardAction {
    pub fn label(&self) -> &'static str {
        match self {
            CardAction::Migrate { .. } => "Migrate",
            CardAction::Manage { .. } => "Manage",
            CardAction::Deposit { .. } => "Deposit",
        }
    }

    pub fn route(&self) -> &str {
        match self {
            CardAction::Migrate { route }
            | CardAction::Manage { route }
            | CardAction::Deposit { route } => route,
        }
    }
}

/// Display-ready earn card. Computed fresh from each snapshot; holds only
/// owned strings, no references back into the inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolCardView {
    /// `A-B` pair title from the unwrapped currency symbols.
    pub title: String,
    /// Token driving the card's background/brand color.
    pub brand_token: Token,
    pub is_staking: bool,
    /// Ordered calls to action; migrate (when present) comes first.
    pub actions: Vec<CardAction>,
    pub total_staked: String,
    pub pool_rate: String,
    pub reward_per_collateral: String,
    pub apr: String,
    /// The caller's own weekly reward line; present iff staking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_weekly_reward: Option<String>,
}

/// Picks the token whose branding the card carries. If either side of the
/// pair is the wrapped-native token, the other side wins; otherwise the
/// protocol token loses to its partner.
pub fn select_brand_token<'a>(pair: &'a TokenPair, assets: &ChainAssets) -> &'a Token {
    let a_is_native = assets.is_wrapped_native(&pair.token_a);
    let b_is_native = assets.is_wrapped_native(&pair.token_b);

    if a_is_native || b_is_native {
        if a_is_native { &pair.token_b } else { &pair.token_a }
    } else if pair.token_a.same_asset(&assets.protocol_token) {
        &pair.token_b
    } else {
        &pair.token_a
    }
}

impl PoolCardView {
    /// Assembles the card. Total over well-formed requests: formatting
    /// failures degrade to [`UNAVAILABLE`], never to an error.
    pub fn build(request: &CardRequest, assets: &ChainAssets) -> PoolCardView {
        let snapshot = &request.snapshot;
        let currency_a = assets.unwrap_token(&snapshot.pair.token_a);
        let currency_b = assets.unwrap_token(&snapshot.pair.token_b);
        let is_staking = snapshot.is_staking();
        let reward_symbol = &assets.protocol_token.symbol;
        let native_symbol = &assets.native.symbol;

        let mut actions = Vec::new();
        if is_staking {
            if let Some(target) = &request.migration {
                actions.push(CardAction::Migrate {
                    route: routes::migrate_route(&currency_a, &currency_b, request.version, target),
                });
            }
        }
        if is_staking || !snapshot.is_period_finished {
            let route = routes::manage_route(&currency_a, &currency_b, request.version);
            actions.push(if is_staking {
                CardAction::Manage { route }
            } else {
                CardAction::Deposit { route }
            });
        }

        let total_staked = snapshot
            .total_staked_in_collateral
            .to_significant(SIGNIFICANT_DIGITS, GROUP_SEPARATOR)
            .map(|value| format!("{value} {native_symbol}"))
            .unwrap_or_else(|| UNAVAILABLE.to_string());

        // Both pool-wide figures are computed regardless of period state;
        // a finished period only suppresses their display.
        let weekly_total = rewards::weekly_reward_amount(&snapshot.total_reward_rate).ok();
        let per_collateral = weekly_total.as_ref().and_then(|weekly| {
            rewards::weekly_reward_per_collateral(weekly, &snapshot.total_staked_in_collateral).ok()
        });

        let pool_rate = if snapshot.is_period_finished {
            UNAVAILABLE.to_string()
        } else {
            weekly_total
                .as_ref()
                .and_then(|weekly| weekly.to_fixed(0, GROUP_SEPARATOR))
                .map(|value| format!("{value} {reward_symbol} / week"))
                .unwrap_or_else(|| UNAVAILABLE.to_string())
        };

        let reward_per_collateral = if snapshot.is_period_finished {
            UNAVAILABLE.to_string()
        } else {
            per_collateral
                .as_ref()
                .and_then(|fraction| fraction.to_fixed(PER_COLLATERAL_PLACES, GROUP_SEPARATOR))
                .map(|value| format!("{value} {reward_symbol} / {native_symbol}"))
                .unwrap_or_else(|| UNAVAILABLE.to_string())
        };

        // Omitted entirely when not staking, not just hidden.
        let user_weekly_reward = is_staking.then(|| {
            rewards::user_weekly_reward(snapshot.reward_rate.as_ref())
                .ok()
                .flatten()
                .and_then(|weekly| weekly.to_significant(SIGNIFICANT_DIGITS, GROUP_SEPARATOR))
                .map(|value| format!("{value} {reward_symbol} / week"))
                .unwrap_or_else(|| UNAVAILABLE.to_string())
        });

        PoolCardView {
            title: format!("{}-{}", currency_a.symbol(), currency_b.symbol()),
            brand_token: select_brand_token(&snapshot.pair, assets).clone(),
            is_staking,
            actions,
            total_staked,
            pool_rate,
            reward_per_collateral,
            apr: format!("{}%", request.apr),
            user_weekly_reward,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitive_types::U256;
    use summit_earn_domain::TokenAmount;

    fn assets() -> ChainAssets {
        ChainAssets::for_chain(43114).unwrap()
    }

    fn usdc() -> Token {
        Token::new(
            43114,
            "0xA7D7079b0FEaD91F3e65f86E8915Cb59c1a4C664",
            "USDC.e",
            6,
            "USD Coin",
        )
    }

    fn amount(raw: &str) -> TokenAmount {
        TokenAmount::new(U256::from_dec_str(raw).unwrap(), 18)
    }

    /// 1 SMT/sec pool emission, 1000 AVAX staked, caller staking 100 AVAX
    /// worth at 0.01 SMT/sec.
    fn staking_snapshot(assets: &ChainAssets) -> StakingSnapshot {
        StakingSnapshot {
            pair: TokenPair::new(assets.wrapped_native.clone(), assets.protocol_token.clone()),
            staked_amount: amount("100000000000000000000"),
            total_reward_rate: amount("1000000000000000000"),
            total_staked_in_collateral: amount("1000000000000000000000"),
            reward_rate: Some(amount("10000000000000000")),
            is_period_finished: false,
        }
    }

    fn request(snapshot: StakingSnapshot) -> CardRequest {
        CardRequest {
            snapshot,
            migration: None,
            version: 1,
            apr: "42".to_string(),
        }
    }

    #[test]
    fn test_brand_token_avoids_native() {
        let assets = assets();
        let pair = TokenPair::new(assets.wrapped_native.clone(), usdc());
        assert_eq!(select_brand_token(&pair, &assets).symbol, "USDC.e");

        let flipped = TokenPair::new(usdc(), assets.wrapped_native.clone());
        assert_eq!(select_brand_token(&flipped, &assets).symbol, "USDC.e");
    }

    #[test]
    fn test_brand_token_avoids_protocol_token_in_first_slot() {
        let assets = assets();
        let pair = TokenPair::new(assets.protocol_token.clone(), usdc());
        assert_eq!(select_brand_token(&pair, &assets).symbol, "USDC.e");

        // protocol token in the second slot does not demote the first
        let flipped = TokenPair::new(usdc(), assets.protocol_token.clone());
        assert_eq!(select_brand_token(&flipped, &assets).symbol, "USDC.e");
    }

    #[test]
    fn test_staking_card() {
        let assets = assets();
        let view = PoolCardView::build(&request(staking_snapshot(&assets)), &assets);

        assert_eq!(view.title, "AVAX-SMT");
        assert_eq!(view.brand_token.symbol, "SMT");
        assert!(view.is_staking);
        assert_eq!(view.total_staked, "1,000 AVAX");
        assert_eq!(view.pool_rate, "604,800 SMT / week");
        assert_eq!(view.reward_per_collateral, "604.8000 SMT / AVAX");
        assert_eq!(view.apr, "42%");
        assert_eq!(view.user_weekly_reward.as_deref(), Some("6,048 SMT / week"));

        assert_eq!(view.actions.len(), 1);
        assert_eq!(view.actions[0].label(), "Manage");
        assert_eq!(
            view.actions[0].route(),
            format!("/smt/AVAX/{}/1", assets.protocol_token.address)
        );
    }

    #[test]
    fn test_not_staking_card_omits_user_line() {
        let assets = assets();
        let mut snapshot = staking_snapshot(&assets);
        snapshot.staked_amount = TokenAmount::zero(18);
        snapshot.reward_rate = None;
        let view = PoolCardView::build(&request(snapshot), &assets);

        assert!(!view.is_staking);
        assert_eq!(view.user_weekly_reward, None);
        assert_eq!(view.actions.len(), 1);
        assert_eq!(view.actions[0].label(), "Deposit");
    }

    #[test]
    fn test_period_finished_suppresses_pool_figures_only() {
        let assets = assets();
        let mut snapshot = staking_snapshot(&assets);
        snapshot.is_period_finished = true;
        let view = PoolCardView::build(&request(snapshot), &assets);

        assert_eq!(view.pool_rate, UNAVAILABLE);
        assert_eq!(view.reward_per_collateral, UNAVAILABLE);
        // the rest of the card is untouched
        assert_eq!(view.total_staked, "1,000 AVAX");
        assert_eq!(view.apr, "42%");
        assert_eq!(view.user_weekly_reward.as_deref(), Some("6,048 SMT / week"));
        // still staking, so manage stays available
        assert_eq!(view.actions[0].label(), "Manage");
    }

    #[test]
    fn test_finished_pool_without_stake_has_no_actions() {
        let assets = assets();
        let mut snapshot = staking_snapshot(&assets);
        snapshot.staked_amount = TokenAmount::zero(18);
        snapshot.reward_rate = None;
        snapshot.is_period_finished = true;
        let view = PoolCardView::build(&request(snapshot), &assets);

        assert!(view.actions.is_empty());
    }

    #[test]
    fn test_migration_surfaces_only_while_staking() {
        let assets = assets();
        let target = MigrationTarget {
            pair: TokenPair::new(assets.wrapped_native.clone(), assets.protocol_token.clone()),
            version: 2,
        };

        let mut req = request(staking_snapshot(&assets));
        req.migration = Some(target.clone());
        let view = PoolCardView::build(&req, &assets);
        assert_eq!(view.actions.len(), 2);
        assert_eq!(view.actions[0].label(), "Migrate");
        assert_eq!(view.actions[1].label(), "Manage");
        assert!(
            view.actions[0]
                .route()
                .starts_with("/migrate/AVAX/0x6A3F2c1E9d84b7C05A51eD6eB8fBd3A96C2B47e1/1/")
        );

        // same pool, nothing staked: migrate is suppressed
        let mut snapshot = staking_snapshot(&assets);
        snapshot.staked_amount = TokenAmount::zero(18);
        snapshot.reward_rate = None;
        let mut req = request(snapshot);
        req.migration = Some(target);
        let view = PoolCardView::build(&req, &assets);
        assert_eq!(view.actions.len(), 1);
        assert_eq!(view.actions[0].label(), "Deposit");
    }

    #[test]
    fn test_zero_collateral_renders_zero_rate() {
        let assets = assets();
        let mut snapshot = staking_snapshot(&assets);
        snapshot.total_staked_in_collateral = TokenAmount::zero(18);
        let view = PoolCardView::build(&request(snapshot), &assets);

        // the zero-denominator quotient substitutes 0/1, not an error
        assert_eq!(view.reward_per_collateral, "0.0000 SMT / AVAX");
        assert_eq!(view.total_staked, "0 AVAX");
    }

    #[test]
    fn test_card_request_round_trips_through_json() {
        let assets = assets();
        let req = request(staking_snapshot(&assets));
        let json = serde_json::to_string(&req).unwrap();
        let back: CardRequest = serde_json::from_str(&json).unwrap();
        let a = PoolCardView::build(&req, &assets);
        let b = PoolCardView::build(&back, &assets);
        assert_eq!(a.pool_rate, b.pool_rate);
        assert_eq!(a.actions, b.actions);
    }
}
