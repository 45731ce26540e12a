//! Role-based access control.
//!
//! Membership is a `(role, account)` table in the calling contract's own
//! storage. `DefaultAdmin` administers every role, including itself.

use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    Addr, Deps, DepsMut, Empty, MessageInfo, Order, Response, StdError, StdResult, Storage,
};
use cw_storage_plus::{Bound, Map};
use thiserror::Error;

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

/// Role membership
/// Key: (role name, account), Value: marker
pub const ROLE_MEMBERS: Map<(&str, &Addr), Empty> = Map::new("role_members");

#[cw_serde]
#[derive(Copy, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    /// Grants and revokes every role
    DefaultAdmin,
    /// Engages the circuit breaker
    Pauser,
    /// Releases the circuit breaker
    Unpauser,
    /// Registers gateway token pairs
    TokenManager,
    /// Triggers escrow deposits into the gateway
    Depositor,
    /// Triggers escrow withdrawals from the gateway
    Withdrawer,
    /// Moves arbitrary assets out of the escrow
    AssetManager,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::DefaultAdmin => "default_admin",
            Role::Pauser => "pauser",
            Role::Unpauser => "unpauser",
            Role::TokenManager => "token_manager",
            Role::Depositor => "depositor",
            Role::Withdrawer => "withdrawer",
            Role::AssetManager => "asset_manager",
        }
    }

    /// Role whose members may grant and revoke `self`.
    pub fn admin_role(&self) -> Role {
        Role::DefaultAdmin
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum AccessError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: account {account} is missing role {role}")]
    Unauthorized { account: String, role: String },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct HasRoleResponse {
    pub role: Role,
    pub account: Addr,
    pub has_role: bool,
}

#[cw_serde]
pub struct RoleMembersResponse {
    pub role: Role,
    pub members: Vec<Addr>,
}

// ============================================================================
// Storage Operations
// ============================================================================

pub fn has_role(storage: &dyn Storage, role: Role, account: &Addr) -> bool {
    ROLE_MEMBERS.has(storage, (role.as_str(), account))
}

/// Fails with `Unauthorized` unless `account` holds `role`.
pub fn ensure_role(storage: &dyn Storage, role: Role, account: &Addr) -> Result<(), AccessError> {
    if !has_role(storage, role, account) {
        return Err(AccessError::Unauthorized {
            account: account.to_string(),
            role: role.to_string(),
        });
    }
    Ok(())
}

/// Returns whether the membership changed.
pub fn grant_role(storage: &mut dyn Storage, role: Role, account: &Addr) -> StdResult<bool> {
    if has_role(storage, role, account) {
        return Ok(false);
    }
    ROLE_MEMBERS.save(storage, (role.as_str(), account), &Empty {})?;
    Ok(true)
}

/// Returns whether the membership changed.
pub fn revoke_role(storage: &mut dyn Storage, role: Role, account: &Addr) -> bool {
    if !has_role(storage, role, account) {
        return false;
    }
    ROLE_MEMBERS.remove(storage, (role.as_str(), account));
    true
}

pub fn role_members(
    storage: &dyn Storage,
    role: Role,
    start_after: Option<&Addr>,
    limit: Option<u32>,
) -> StdResult<Vec<Addr>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start: Option<Bound<&Addr>> = start_after.map(Bound::exclusive);

    ROLE_MEMBERS
        .prefix(role.as_str())
        .keys(storage, start, None, Order::Ascending)
        .take(limit)
        .collect()
}

// ============================================================================
// Execute Handlers
// ============================================================================

/// Grant `role` to `account` (caller must hold the role's admin role).
pub fn execute_grant_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Role,
    account: String,
) -> Result<Response, AccessError> {
    ensure_role(deps.storage, role.admin_role(), &info.sender)?;

    let account_addr = deps.api.addr_validate(&account)?;
    let changed = grant_role(deps.storage, role, &account_addr)?;

    Ok(Response::new()
        .add_attribute("method", "grant_role")
        .add_attribute("role", role.as_str())
        .add_attribute("account", account_addr)
        .add_attribute("sender", info.sender)
        .add_attribute("changed", changed.to_string()))
}

/// Revoke `role` from `account` (caller must hold the role's admin role).
pub fn execute_revoke_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Role,
    account: String,
) -> Result<Response, AccessError> {
    ensure_role(deps.storage, role.admin_role(), &info.sender)?;

    let account_addr = deps.api.addr_validate(&account)?;
    let changed = revoke_role(deps.storage, role, &account_addr);

    Ok(Response::new()
        .add_attribute("method", "revoke_role")
        .add_attribute("role", role.as_str())
        .add_attribute("account", account_addr)
        .add_attribute("sender", info.sender)
        .add_attribute("changed", changed.to_string()))
}

/// Drop one of the caller's own roles.
pub fn execute_renounce_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Role,
) -> Result<Response, AccessError> {
    let changed = revoke_role(deps.storage, role, &info.sender);

    Ok(Response::new()
        .add_attribute("method", "renounce_role")
        .add_attribute("role", role.as_str())
        .add_attribute("account", info.sender)
        .add_attribute("changed", changed.to_string()))
}

pub fn query_has_role(deps: Deps, role: Role, account: String) -> StdResult<HasRoleResponse> {
    let account = deps.api.addr_validate(&account)?;
    Ok(HasRoleResponse {
        role,
        has_role: has_role(deps.storage, role, &account),
        account,
    })
}

pub fn query_role_members(
    deps: Deps,
    role: Role,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<RoleMembersResponse> {
    let start_after = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;
    let members = role_members(deps.storage, role, start_after.as_ref(), limit)?;
    Ok(RoleMembersResponse { role, members })
}
