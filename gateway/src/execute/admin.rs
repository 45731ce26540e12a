//! Admin operations handlers.
//!
//! This module handles:
//! - Pause/unpause swaps (distinct pauser and unpauser roles)
//! - Token pair registration

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use common::access::ensure_role;
use common::Role;

use crate::error::ContractError;
use crate::state::{register_token_pair, CONFIG};

// ============================================================================
// Pause/Unpause
// ============================================================================

/// Pause the gateway (stops swaps).
pub fn execute_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    ensure_role(deps.storage, Role::Pauser, &info.sender)?;

    let mut config = CONFIG.load(deps.storage)?;
    if config.paused {
        return Err(ContractError::ContractPaused);
    }
    config.paused = true;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "pause")
        .add_attribute("sender", info.sender))
}

/// Unpause the gateway (resumes swaps).
pub fn execute_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    ensure_role(deps.storage, Role::Unpauser, &info.sender)?;

    let mut config = CONFIG.load(deps.storage)?;
    if !config.paused {
        return Err(ContractError::NotPaused);
    }
    config.paused = false;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "unpause")
        .add_attribute("sender", info.sender))
}

// ============================================================================
// Token Registry
// ============================================================================

/// Register a new real/wrapped token pair.
pub fn execute_add_token(
    deps: DepsMut,
    info: MessageInfo,
    real_token: String,
    wrapped_token: String,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, Role::TokenManager, &info.sender)?;

    let real_token = deps.api.addr_validate(&real_token)?;
    let wrapped_token = deps.api.addr_validate(&wrapped_token)?;
    let pair = register_token_pair(deps.storage, real_token, wrapped_token)?;

    Ok(Response::new()
        .add_attribute("method", "add_token")
        .add_attribute("token_id", pair.token_id.to_string())
        .add_attribute("real_token", pair.real_token)
        .add_attribute("wrapped_token", pair.wrapped_token))
}
