//! Deposit ledger handlers.
//!
//! Deposits of either token of a pair add to one counter per account, and
//! withdrawals of either token draw from it. Ledger handlers ignore the pause
//! flag.

use cosmwasm_std::{Addr, CosmosMsg, DepsMut, Env, MessageInfo, QuerierWrapper, Response, Uint128};

use common::asset::{cw20_balance, cw20_transfer_from_msg, cw20_transfer_msg};

use crate::error::ContractError;
use crate::state::{load_token_pair, DEPOSITS};

/// Fails with `InsufficientBalance` unless `holder` owns at least `required` of `token`.
pub(crate) fn ensure_reserve(
    querier: &QuerierWrapper,
    token: &Addr,
    holder: &Addr,
    required: Uint128,
) -> Result<(), ContractError> {
    let available = cw20_balance(querier, token, holder)?;
    if available < required {
        return Err(ContractError::InsufficientBalance {
            holder: holder.to_string(),
            asset: token.to_string(),
            available,
            required,
        });
    }
    Ok(())
}

/// Pull `real_amount` + `wrapped_amount` from the caller and credit the sum.
pub fn execute_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token_id: u64,
    real_amount: Uint128,
    wrapped_amount: Uint128,
) -> Result<Response, ContractError> {
    let total = real_amount.checked_add(wrapped_amount)?;
    if total.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "total deposit must be greater than 0".to_string(),
        });
    }

    let pair = load_token_pair(deps.storage, token_id)?;

    let mut messages: Vec<CosmosMsg> = vec![];
    for (token, amount) in [
        (&pair.real_token, real_amount),
        (&pair.wrapped_token, wrapped_amount),
    ] {
        if !amount.is_zero() {
            messages.push(cw20_transfer_from_msg(
                token,
                &info.sender,
                &env.contract.address,
                amount,
            )?);
        }
    }

    let balance = DEPOSITS.update(
        deps.storage,
        (token_id, &info.sender),
        |current| -> Result<_, ContractError> {
            Ok(current.unwrap_or_default().checked_add(total)?)
        },
    )?;

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "deposit")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("sender", info.sender)
        .add_attribute("real_amount", real_amount)
        .add_attribute("wrapped_amount", wrapped_amount)
        .add_attribute("balance", balance))
}

/// Debit `real_amount` + `wrapped_amount` from the caller and pay both out.
pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token_id: u64,
    real_amount: Uint128,
    wrapped_amount: Uint128,
) -> Result<Response, ContractError> {
    let total = real_amount.checked_add(wrapped_amount)?;
    if total.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "total withdrawal must be greater than 0".to_string(),
        });
    }

    let pair = load_token_pair(deps.storage, token_id)?;

    let key = (token_id, &info.sender);
    let deposited = DEPOSITS.may_load(deps.storage, key)?.unwrap_or_default();
    if total > deposited {
        return Err(ContractError::InsufficientBalance {
            holder: info.sender.to_string(),
            asset: "deposit".to_string(),
            available: deposited,
            required: total,
        });
    }

    let mut messages: Vec<CosmosMsg> = vec![];
    for (token, amount) in [
        (&pair.real_token, real_amount),
        (&pair.wrapped_token, wrapped_amount),
    ] {
        if !amount.is_zero() {
            ensure_reserve(&deps.querier, token, &env.contract.address, amount)?;
            messages.push(cw20_transfer_msg(token, &info.sender, amount)?);
        }
    }

    let balance = deposited.checked_sub(total)?;
    if balance.is_zero() {
        DEPOSITS.remove(deps.storage, key);
    } else {
        DEPOSITS.save(deps.storage, key, &balance)?;
    }

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "withdraw")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("sender", info.sender)
        .add_attribute("real_amount", real_amount)
        .add_attribute("wrapped_amount", wrapped_amount)
        .add_attribute("balance", balance))
}
