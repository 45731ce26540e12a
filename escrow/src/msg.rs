use common::access::{HasRoleResponse, RoleMembersResponse};
use common::{AssetInfo, Role};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

use crate::rebalance::BalanceState;

#[cw_serde]
pub struct InstantiateMsg {
    /// Gateway contract to rebalance
    pub gateway: String,
    /// Gateway pair whose real token the escrow holds
    pub token_id: u64,
    /// Receives the default admin role
    pub admin: String,
    /// Target real-token balance of the gateway
    pub threshold_amount: Uint128,
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// Top the gateway up toward the threshold from the escrow's reserve
    ///
    /// Authorization: Depositor
    DepositToGateway {},

    /// Pull the gateway's balance above the threshold back into the escrow
    ///
    /// Authorization: Withdrawer
    WithdrawFromGateway {},

    /// Authorization: Default admin
    SetThresholdAmount { threshold_amount: Uint128 },

    /// Send any asset held by the escrow to `recipient` (default: caller)
    ///
    /// Authorization: Asset manager
    WithdrawAsset {
        asset: AssetInfo,
        amount: Uint128,
        recipient: Option<String>,
    },

    /// Authorization: Default admin
    GrantRole { role: Role, account: String },

    /// Authorization: Default admin
    RevokeRole { role: Role, account: String },

    /// Drop one of the caller's own roles
    RenounceRole { role: Role },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(ThresholdAmountResponse)]
    ThresholdAmount {},

    /// Current gateway and escrow balances, and what the next rebalance would move
    #[returns(RebalanceStatusResponse)]
    RebalanceStatus {},

    #[returns(HasRoleResponse)]
    HasRole { role: Role, account: String },

    #[returns(RoleMembersResponse)]
    RoleMembers {
        role: Role,
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct ConfigResponse {
    pub gateway: Addr,
    pub token_id: u64,
    pub real_token: Addr,
    pub threshold_amount: Uint128,
}

#[cw_serde]
pub struct ThresholdAmountResponse {
    pub threshold_amount: Uint128,
}

#[cw_serde]
pub struct RebalanceStatusResponse {
    pub gateway_balance: Uint128,
    /// Real tokens held by the escrow
    pub reserve: Uint128,
    pub threshold_amount: Uint128,
    pub state: BalanceState,
    /// Deposit amount when below, withdrawal amount when above, else zero.
    /// Both are capped: deposits by the reserve, withdrawals by the escrow's
    /// own gateway deposit.
    pub next_amount: Uint128,
}
