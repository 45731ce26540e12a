//! Threshold arithmetic shared by the execute handlers and the status query.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

/// Gateway balance relative to the threshold
#[cw_serde]
#[derive(Copy, Eq)]
pub enum BalanceState {
    /// Deposits are possible
    Below,
    At,
    /// Withdrawals are possible
    Above,
}

pub fn balance_state(gateway_balance: Uint128, threshold_amount: Uint128) -> BalanceState {
    match gateway_balance.cmp(&threshold_amount) {
        std::cmp::Ordering::Less => BalanceState::Below,
        std::cmp::Ordering::Equal => BalanceState::At,
        std::cmp::Ordering::Greater => BalanceState::Above,
    }
}

/// Amount a deposit moves: the shortfall, capped by the escrow reserve.
pub fn deposit_amount(
    gateway_balance: Uint128,
    threshold_amount: Uint128,
    reserve: Uint128,
) -> Uint128 {
    threshold_amount.saturating_sub(gateway_balance).min(reserve)
}

/// Amount a withdrawal moves: the excess above the threshold, capped by what
/// the escrow itself has deposited in the gateway.
pub fn withdraw_amount(
    gateway_balance: Uint128,
    threshold_amount: Uint128,
    deposited: Uint128,
) -> Uint128 {
    gateway_balance.saturating_sub(threshold_amount).min(deposited)
}
