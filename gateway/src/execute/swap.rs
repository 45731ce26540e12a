//! Swap handlers.
//!
//! A swap pulls `amount` of the source token from the caller and pays exactly
//! `amount` of the destination token out of the gateway's reserve.

use cosmwasm_std::{Addr, Deps, DepsMut, Env, MessageInfo, Response, Uint128};

use common::asset::{cw20_transfer_from_msg, cw20_transfer_msg};

use crate::error::ContractError;
use crate::execute::ledger::ensure_reserve;
use crate::state::{load_token_pair, SwapDirection, CONFIG};

/// Execute a swap in `direction`; `recipient` defaults to the caller.
pub fn execute_swap(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    direction: SwapDirection,
    token_id: u64,
    amount: Uint128,
    recipient: Option<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if config.paused {
        return Err(ContractError::ContractPaused);
    }

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "amount must be greater than 0".to_string(),
        });
    }

    let recipient = match recipient {
        Some(recipient) => validate_recipient(deps.as_ref(), &recipient)?,
        None => info.sender.clone(),
    };

    let pair = load_token_pair(deps.storage, token_id)?;
    let (source, destination) = direction.route(&pair);

    ensure_reserve(&deps.querier, destination, &env.contract.address, amount)?;

    let pull = cw20_transfer_from_msg(source, &info.sender, &env.contract.address, amount)?;
    let payout = cw20_transfer_msg(destination, &recipient, amount)?;

    Ok(Response::new()
        .add_message(pull)
        .add_message(payout)
        .add_attribute("method", direction.method())
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("sender", info.sender)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount))
}

fn validate_recipient(deps: Deps, recipient: &str) -> Result<Addr, ContractError> {
    if recipient.trim().is_empty() {
        return Err(ContractError::InvalidRecipient {
            reason: "recipient address must be non-empty".to_string(),
        });
    }
    deps.api
        .addr_validate(recipient)
        .map_err(|e| ContractError::InvalidRecipient {
            reason: e.to_string(),
        })
}
