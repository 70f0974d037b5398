/// Wei per gwei. Bet values and balances are denominated in gwei.
pub const WEI_PER_GWEI: u128 = 1_000_000_000;

/// Gwei per ether.
pub const GWEI_PER_ETHER: u64 = 1_000_000_000;

/// Default rounding unit for advertised max bets: 0.001 ether in gwei.
pub const DEFAULT_BET_GRANULARITY: u64 = GWEI_PER_ETHER / 1_000;

/// Convert wei to gwei, truncating any remainder.
pub fn wei_to_gwei(wei: u128) -> u128 {
    wei / WEI_PER_GWEI
}

/// Convert gwei to wei. Returns `None` on overflow.
pub fn gwei_to_wei(gwei: u128) -> Option<u128> {
    gwei.checked_mul(WEI_PER_GWEI)
}
