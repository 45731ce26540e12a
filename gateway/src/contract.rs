//! Token Gateway Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use common::access::{
    execute_grant_role, execute_renounce_role, execute_revoke_role, grant_role, query_has_role,
    query_role_members,
};
use common::Role;

use crate::error::ContractError;
use crate::execute::{
    execute_add_token, execute_deposit, execute_pause, execute_swap, execute_unpause,
    execute_withdraw,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_deposit, query_is_paused, query_reserves, query_token_id_by_real,
    query_token_pair, query_token_pairs,
};
use crate::state::{
    register_token_pair, Config, SwapDirection, CONFIG, CONTRACT_NAME, CONTRACT_VERSION,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = deps.api.addr_validate(&msg.admin)?;
    let token_manager = deps.api.addr_validate(&msg.token_manager)?;

    grant_role(deps.storage, Role::DefaultAdmin, &admin)?;
    grant_role(deps.storage, Role::TokenManager, &token_manager)?;

    CONFIG.save(
        deps.storage,
        &Config {
            paused: false,
            next_token_id: 0,
        },
    )?;

    let mut response = Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("token_manager", token_manager);

    if let Some(pair) = msg.initial_pair {
        let real_token = deps.api.addr_validate(&pair.real_token)?;
        let wrapped_token = deps.api.addr_validate(&pair.wrapped_token)?;
        let pair = register_token_pair(deps.storage, real_token, wrapped_token)?;
        response = response
            .add_attribute("token_id", pair.token_id.to_string())
            .add_attribute("real_token", pair.real_token)
            .add_attribute("wrapped_token", pair.wrapped_token);
    }

    Ok(response)
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Deposit ledger
        ExecuteMsg::Deposit {
            token_id,
            real_amount,
            wrapped_amount,
        } => execute_deposit(deps, env, info, token_id, real_amount, wrapped_amount),
        ExecuteMsg::Withdraw {
            token_id,
            real_amount,
            wrapped_amount,
        } => execute_withdraw(deps, env, info, token_id, real_amount, wrapped_amount),

        // Swaps
        ExecuteMsg::SwapToReal { token_id, amount } => {
            execute_swap(deps, env, info, SwapDirection::ToReal, token_id, amount, None)
        }
        ExecuteMsg::SwapToRealTo {
            token_id,
            amount,
            recipient,
        } => execute_swap(
            deps,
            env,
            info,
            SwapDirection::ToReal,
            token_id,
            amount,
            Some(recipient),
        ),
        ExecuteMsg::SwapToWrapped { token_id, amount } => {
            execute_swap(deps, env, info, SwapDirection::ToWrapped, token_id, amount, None)
        }
        ExecuteMsg::SwapToWrappedTo {
            token_id,
            amount,
            recipient,
        } => execute_swap(
            deps,
            env,
            info,
            SwapDirection::ToWrapped,
            token_id,
            amount,
            Some(recipient),
        ),

        // Token registry
        ExecuteMsg::AddToken {
            real_token,
            wrapped_token,
        } => execute_add_token(deps, info, real_token, wrapped_token),

        // Circuit breaker
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),

        // Access control
        ExecuteMsg::GrantRole { role, account } => {
            Ok(execute_grant_role(deps, info, role, account)?)
        }
        ExecuteMsg::RevokeRole { role, account } => {
            Ok(execute_revoke_role(deps, info, role, account)?)
        }
        ExecuteMsg::RenounceRole { role } => Ok(execute_renounce_role(deps, info, role)?),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::IsPaused {} => to_json_binary(&query_is_paused(deps)?),
        QueryMsg::TokenPair { token_id } => to_json_binary(&query_token_pair(deps, token_id)?),
        QueryMsg::TokenPairs { start_after, limit } => {
            to_json_binary(&query_token_pairs(deps, start_after, limit)?)
        }
        QueryMsg::TokenIdByReal { real_token } => {
            to_json_binary(&query_token_id_by_real(deps, real_token)?)
        }
        QueryMsg::Deposit { token_id, account } => {
            to_json_binary(&query_deposit(deps, token_id, account)?)
        }
        QueryMsg::Reserves { token_id } => to_json_binary(&query_reserves(deps, env, token_id)?),
        QueryMsg::HasRole { role, account } => {
            to_json_binary(&query_has_role(deps, role, account)?)
        }
        QueryMsg::RoleMembers {
            role,
            start_after,
            limit,
        } => to_json_binary(&query_role_members(deps, role, start_after, limit)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
