//! Message types for the token gateway contract

use common::access::{HasRoleResponse, RoleMembersResponse};
use common::Role;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// A token pair to register
#[cw_serde]
pub struct TokenPairMsg {
    /// Real CW20 token contract
    pub real_token: String,
    /// Bridged CW20 token contract
    pub wrapped_token: String,
}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Receives the default admin role
    pub admin: String,
    /// Receives the token manager role
    pub token_manager: String,
    /// Pair registered as token id 0, for single-pair deployments
    pub initial_pair: Option<TokenPairMsg>,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Deposit Ledger
    // ========================================================================
    /// Deposit either side of a pair (requires CW20 allowances to the gateway)
    ///
    /// Authorization: Anyone
    Deposit {
        token_id: u64,
        real_amount: Uint128,
        wrapped_amount: Uint128,
    },

    /// Withdraw either side of a pair against the caller's combined deposit
    ///
    /// Authorization: Anyone (up to own deposit)
    Withdraw {
        token_id: u64,
        real_amount: Uint128,
        wrapped_amount: Uint128,
    },

    // ========================================================================
    // Swaps (blocked while paused)
    // ========================================================================
    /// Swap wrapped tokens for real tokens, paid to the caller
    SwapToReal { token_id: u64, amount: Uint128 },

    /// Swap wrapped tokens for real tokens, paid to `recipient`
    SwapToRealTo {
        token_id: u64,
        amount: Uint128,
        recipient: String,
    },

    /// Swap real tokens for wrapped tokens, paid to the caller
    SwapToWrapped { token_id: u64, amount: Uint128 },

    /// Swap real tokens for wrapped tokens, paid to `recipient`
    SwapToWrappedTo {
        token_id: u64,
        amount: Uint128,
        recipient: String,
    },

    // ========================================================================
    // Token Registry
    // ========================================================================
    /// Register a new token pair
    ///
    /// Authorization: Token manager
    AddToken {
        real_token: String,
        wrapped_token: String,
    },

    // ========================================================================
    // Circuit Breaker
    // ========================================================================
    /// Authorization: Pauser
    Pause {},

    /// Authorization: Unpauser
    Unpause {},

    // ========================================================================
    // Access Control
    // ========================================================================
    /// Authorization: Default admin
    GrantRole { role: Role, account: String },

    /// Authorization: Default admin
    RevokeRole { role: Role, account: String },

    /// Drop one of the caller's own roles
    RenounceRole { role: Role },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(PausedResponse)]
    IsPaused {},

    #[returns(TokenPairResponse)]
    TokenPair { token_id: u64 },

    /// Paginated token pairs, ordered by id
    #[returns(TokenPairsResponse)]
    TokenPairs {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    /// Id of the pair whose real token is `real_token`
    #[returns(TokenIdResponse)]
    TokenIdByReal { real_token: String },

    /// Combined deposit of `account` in a pair
    #[returns(DepositResponse)]
    Deposit { token_id: u64, account: String },

    /// Gateway balances of both tokens of a pair
    #[returns(ReservesResponse)]
    Reserves { token_id: u64 },

    #[returns(HasRoleResponse)]
    HasRole { role: Role, account: String },

    #[returns(RoleMembersResponse)]
    RoleMembers {
        role: Role,
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub paused: bool,
    pub token_count: u64,
}

#[cw_serde]
pub struct PausedResponse {
    pub paused: bool,
}

#[cw_serde]
pub struct TokenPairResponse {
    pub token_id: u64,
    pub real_token: Addr,
    pub wrapped_token: Addr,
}

#[cw_serde]
pub struct TokenPairsResponse {
    pub pairs: Vec<TokenPairResponse>,
}

#[cw_serde]
pub struct TokenIdResponse {
    pub token_id: u64,
}

#[cw_serde]
pub struct DepositResponse {
    pub token_id: u64,
    pub account: Addr,
    pub amount: Uint128,
}

#[cw_serde]
pub struct ReservesResponse {
    pub token_id: u64,
    pub real_reserve: Uint128,
    pub wrapped_reserve: Uint128,
}
