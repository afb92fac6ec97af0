use crate::value_objects::amount::TokenAmount;
use crate::value_objects::fraction::Fraction;
use primitive_types::U256;

/// Seconds in the 7-day window every rate is projected over.
pub const SECONDS_PER_WEEK: u64 = 60 * 60 * 24 * 7;

/// Projects a per-second emission rate to a 7-day total.
/// Exact integer multiplication on raw units; rounding happens only at
/// display formatting.
pub fn weekly_reward_amount(rate: &TokenAmount) -> Result<TokenAmount, &'static str> {
    let raw = rate
        .raw
        .checked_mul(U256::from(SECONDS_PER_WEEK))
        .ok_or("Overflow")?;
    Ok(TokenAmount::new(raw, rate.decimals))
}

/// Weekly reward tokens per one unit of staked collateral.
///
/// The division itself is unguarded; a pool with zero collateral yields a
/// quotient with a zero denominator, which is detected on the result and
/// substituted with `0/1`.
pub fn weekly_reward_per_collateral(
    weekly_reward: &TokenAmount,
    total_staked_in_collateral: &TokenAmount,
) -> Result<Fraction, &'static str> {
    let quotient = weekly_reward
        .as_fraction()
        .divide(&total_staked_in_collateral.as_fraction())?;
    if quotient.is_denominator_zero() {
        return Ok(Fraction::zero());
    }
    Ok(quotient)
}

/// The caller's personal 7-day reward, when they have a stake.
pub fn user_weekly_reward(
    rate: Option<&TokenAmount>,
) -> Result<Option<TokenAmount>, &'static str> {
    match rate {
        Some(rate) => weekly_reward_amount(rate).map(Some),
        None => Ok(None),
    }
}
