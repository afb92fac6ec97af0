use summit_earn_domain::{Currency, MigrationTarget};

/// Route prefix for the deposit/manage pages.
pub const EARN_ROUTE_PREFIX: &str = "/smt";
/// Route prefix for the migration flow.
pub const MIGRATE_ROUTE_PREFIX: &str = "/migrate";

/// A currency's path segment: the bare symbol for the native asset, the
/// contract address for everything else.
pub fn currency_id(currency: &Currency) -> String {
    match currency {
        Currency::Native(native) => native.symbol.clone(),
        Currency::Token(token) => token.address.clone(),
    }
}

/// Path to the deposit/manage page for a pool.
pub fn manage_route(currency_a: &Currency, currency_b: &Currency, version: u32) -> String {
    format!(
        "{EARN_ROUTE_PREFIX}/{}/{}/{version}",
        currency_id(currency_a),
        currency_id(currency_b),
    )
}

/// Path to the migration flow from the current pool into `target`.
/// The current pair is addressed by unwrapped currency ids; the target
/// pair by raw token addresses.
pub fn migrate_route(
    currency_a: &Currency,
    currency_b: &Currency,
    from_version: u32,
    target: &MigrationTarget,
) -> String {
    format!(
        "{MIGRATE_ROUTE_PREFIX}/{}/{}/{from_version}/{}/{}/{}",
        currency_id(currency_a),
        currency_id(currency_b),
        target.pair.token_a.address,
        target.pair.token_b.address,
        target.version,
    )
}
