//! Asset identifiers and transfer helpers.
//!
//! Native coins move through the bank module, CW20 tokens through
//! `Cw20ExecuteMsg`. Every helper here only builds messages or runs queries;
//! nothing is sent until the caller attaches the message to its `Response`.

use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Coin, CosmosMsg, QuerierWrapper, StdResult, Uint128, WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

/// Any asset a contract can hold
#[cw_serde]
pub enum AssetInfo {
    /// Native bank denom (e.g. "uluna")
    Native { denom: String },
    /// CW20 token contract
    Cw20 { contract_addr: Addr },
}

impl AssetInfo {
    /// Balance of `account` in this asset.
    pub fn query_balance(&self, querier: &QuerierWrapper, account: &Addr) -> StdResult<Uint128> {
        match self {
            AssetInfo::Native { denom } => Ok(querier.query_balance(account, denom)?.amount),
            AssetInfo::Cw20 { contract_addr } => cw20_balance(querier, contract_addr, account),
        }
    }

    /// Message sending `amount` of this asset from the executing contract to `recipient`.
    pub fn transfer_msg(&self, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
        match self {
            AssetInfo::Native { denom } => Ok(CosmosMsg::Bank(BankMsg::Send {
                to_address: recipient.to_string(),
                amount: vec![Coin {
                    denom: denom.clone(),
                    amount,
                }],
            })),
            AssetInfo::Cw20 { contract_addr } => cw20_transfer_msg(contract_addr, recipient, amount),
        }
    }
}

impl fmt::Display for AssetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetInfo::Native { denom } => write!(f, "{}", denom),
            AssetInfo::Cw20 { contract_addr } => write!(f, "{}", contract_addr),
        }
    }
}

// ============================================================================
// CW20 Helpers
// ============================================================================

/// Query CW20 token balance
pub fn cw20_balance(querier: &QuerierWrapper, token: &Addr, account: &Addr) -> StdResult<Uint128> {
    let response: BalanceResponse = querier.query_wasm_smart(
        token,
        &Cw20QueryMsg::Balance {
            address: account.to_string(),
        },
    )?;
    Ok(response.balance)
}

/// `Transfer` from the executing contract.
pub fn cw20_transfer_msg(token: &Addr, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    }))
}

/// `TransferFrom` spending an allowance `owner` granted to the executing contract.
pub fn cw20_transfer_from_msg(
    token: &Addr,
    owner: &Addr,
    recipient: &Addr,
    amount: Uint128,
) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: owner.to_string(),
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    }))
}

/// `IncreaseAllowance` for `spender`, without expiry.
pub fn cw20_increase_allowance_msg(
    token: &Addr,
    spender: &Addr,
    amount: Uint128,
) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::IncreaseAllowance {
            spender: spender.to_string(),
            amount,
            expires: None,
        })?,
        funds: vec![],
    }))
}
