use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo,
    QuerierWrapper, Response, StdResult, Uint128, WasmMsg,
};
use cw2::set_contract_version;

use common::access::{
    ensure_role, execute_grant_role, execute_renounce_role, execute_revoke_role, grant_role,
    query_has_role, query_role_members,
};
use common::asset::{cw20_balance, cw20_increase_allowance_msg};
use common::{AssetInfo, Role};
use gateway::msg::{
    DepositResponse, ExecuteMsg as GatewayExecuteMsg, QueryMsg as GatewayQueryMsg,
    TokenPairResponse,
};

use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, RebalanceStatusResponse,
    ThresholdAmountResponse,
};
use crate::rebalance::{balance_state, deposit_amount, withdraw_amount, BalanceState};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, THRESHOLD_AMOUNT};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let gateway = deps.api.addr_validate(&msg.gateway)?;
    let admin = deps.api.addr_validate(&msg.admin)?;

    let pair: TokenPairResponse = deps.querier.query_wasm_smart(
        &gateway,
        &GatewayQueryMsg::TokenPair {
            token_id: msg.token_id,
        },
    )?;

    CONFIG.save(
        deps.storage,
        &Config {
            gateway: gateway.clone(),
            token_id: msg.token_id,
            real_token: pair.real_token.clone(),
        },
    )?;
    THRESHOLD_AMOUNT.save(deps.storage, &msg.threshold_amount)?;
    grant_role(deps.storage, Role::DefaultAdmin, &admin)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("gateway", gateway)
        .add_attribute("token_id", msg.token_id.to_string())
        .add_attribute("real_token", pair.real_token)
        .add_attribute("admin", admin)
        .add_attribute("threshold_amount", msg.threshold_amount))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::DepositToGateway {} => execute_deposit_to_gateway(deps, env, info),
        ExecuteMsg::WithdrawFromGateway {} => execute_withdraw_from_gateway(deps, env, info),
        ExecuteMsg::SetThresholdAmount { threshold_amount } => {
            execute_set_threshold_amount(deps, info, threshold_amount)
        }
        ExecuteMsg::WithdrawAsset {
            asset,
            amount,
            recipient,
        } => execute_withdraw_asset(deps, info, asset, amount, recipient),
        ExecuteMsg::GrantRole { role, account } => {
            Ok(execute_grant_role(deps, info, role, account)?)
        }
        ExecuteMsg::RevokeRole { role, account } => {
            Ok(execute_revoke_role(deps, info, role, account)?)
        }
        ExecuteMsg::RenounceRole { role } => Ok(execute_renounce_role(deps, info, role)?),
    }
}

fn gateway_msg(gateway: &Addr, msg: &GatewayExecuteMsg) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: gateway.to_string(),
        msg: to_json_binary(msg)?,
        funds: vec![],
    }))
}

/// The escrow's own entry in the gateway's deposit ledger.
fn gateway_deposit(
    querier: &QuerierWrapper,
    config: &Config,
    escrow: &Addr,
) -> StdResult<Uint128> {
    let res: DepositResponse = querier.query_wasm_smart(
        &config.gateway,
        &GatewayQueryMsg::Deposit {
            token_id: config.token_id,
            account: escrow.to_string(),
        },
    )?;
    Ok(res.amount)
}

fn execute_deposit_to_gateway(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, Role::Depositor, &info.sender)?;

    let config = CONFIG.load(deps.storage)?;
    let threshold_amount = THRESHOLD_AMOUNT.load(deps.storage)?;

    let gateway_balance = cw20_balance(&deps.querier, &config.real_token, &config.gateway)?;
    if gateway_balance >= threshold_amount {
        return Err(ContractError::ThresholdExceeded {
            gateway_balance,
            threshold_amount,
        });
    }

    let reserve = cw20_balance(&deps.querier, &config.real_token, &env.contract.address)?;
    let amount = deposit_amount(gateway_balance, threshold_amount, reserve);
    if amount.is_zero() {
        return Err(ContractError::InsufficientReserve {
            token: config.real_token.to_string(),
        });
    }

    // Deposit through the ledger so the escrow can withdraw it later
    let allowance = cw20_increase_allowance_msg(&config.real_token, &config.gateway, amount)?;
    let deposit = gateway_msg(
        &config.gateway,
        &GatewayExecuteMsg::Deposit {
            token_id: config.token_id,
            real_amount: amount,
            wrapped_amount: Uint128::zero(),
        },
    )?;

    Ok(Response::new()
        .add_message(allowance)
        .add_message(deposit)
        .add_attribute("method", "deposit_to_gateway")
        .add_attribute("sender", info.sender)
        .add_attribute("gateway_balance", gateway_balance)
        .add_attribute("amount", amount)
        .add_attribute("threshold_amount", threshold_amount))
}

fn execute_withdraw_from_gateway(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, Role::Withdrawer, &info.sender)?;

    let config = CONFIG.load(deps.storage)?;
    let threshold_amount = THRESHOLD_AMOUNT.load(deps.storage)?;

    let gateway_balance = cw20_balance(&deps.querier, &config.real_token, &config.gateway)?;
    if gateway_balance <= threshold_amount {
        return Err(ContractError::BelowThreshold {
            gateway_balance,
            threshold_amount,
        });
    }

    let deposited = gateway_deposit(&deps.querier, &config, &env.contract.address)?;
    let amount = withdraw_amount(gateway_balance, threshold_amount, deposited);
    if amount.is_zero() {
        return Err(ContractError::NoGatewayDeposit {
            token_id: config.token_id,
        });
    }

    let withdraw = gateway_msg(
        &config.gateway,
        &GatewayExecuteMsg::Withdraw {
            token_id: config.token_id,
            real_amount: amount,
            wrapped_amount: Uint128::zero(),
        },
    )?;

    Ok(Response::new()
        .add_message(withdraw)
        .add_attribute("method", "withdraw_from_gateway")
        .add_attribute("sender", info.sender)
        .add_attribute("gateway_balance", gateway_balance)
        .add_attribute("amount", amount)
        .add_attribute("threshold_amount", threshold_amount))
}

fn execute_set_threshold_amount(
    deps: DepsMut,
    info: MessageInfo,
    threshold_amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, Role::DefaultAdmin, &info.sender)?;

    let previous = THRESHOLD_AMOUNT.load(deps.storage)?;
    THRESHOLD_AMOUNT.save(deps.storage, &threshold_amount)?;

    Ok(Response::new()
        .add_attribute("method", "set_threshold_amount")
        .add_attribute("previous", previous)
        .add_attribute("threshold_amount", threshold_amount))
}

fn execute_withdraw_asset(
    deps: DepsMut,
    info: MessageInfo,
    asset: AssetInfo,
    amount: Uint128,
    recipient: Option<String>,
) -> Result<Response, ContractError> {
    ensure_role(deps.storage, Role::AssetManager, &info.sender)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "amount must be greater than 0".to_string(),
        });
    }

    let recipient = match recipient {
        Some(addr) => deps.api.addr_validate(&addr)?,
        None => info.sender.clone(),
    };
    if let AssetInfo::Cw20 { contract_addr } = &asset {
        deps.api.addr_validate(contract_addr.as_str())?;
    }

    let transfer = asset.transfer_msg(&recipient, amount)?;

    Ok(Response::new()
        .add_message(transfer)
        .add_attribute("method", "withdraw_asset")
        .add_attribute("sender", info.sender)
        .add_attribute("asset", asset.to_string())
        .add_attribute("amount", amount)
        .add_attribute("recipient", recipient))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::ThresholdAmount {} => to_json_binary(&query_threshold_amount(deps)?),
        QueryMsg::RebalanceStatus {} => to_json_binary(&query_rebalance_status(deps, env)?),
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

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        gateway: config.gateway,
        token_id: config.token_id,
        real_token: config.real_token,
        threshold_amount: THRESHOLD_AMOUNT.load(deps.storage)?,
    })
}

fn query_threshold_amount(deps: Deps) -> StdResult<ThresholdAmountResponse> {
    Ok(ThresholdAmountResponse {
        threshold_amount: THRESHOLD_AMOUNT.load(deps.storage)?,
    })
}

fn query_rebalance_status(deps: Deps, env: Env) -> StdResult<RebalanceStatusResponse> {
    let config = CONFIG.load(deps.storage)?;
    let threshold_amount = THRESHOLD_AMOUNT.load(deps.storage)?;
    let gateway_balance = cw20_balance(&deps.querier, &config.real_token, &config.gateway)?;
    let reserve = cw20_balance(&deps.querier, &config.real_token, &env.contract.address)?;

    let state = balance_state(gateway_balance, threshold_amount);
    let next_amount = match state {
        BalanceState::Below => deposit_amount(gateway_balance, threshold_amount, reserve),
        BalanceState::At => Uint128::zero(),
        BalanceState::Above => {
            let deposited = gateway_deposit(&deps.querier, &config, &env.contract.address)?;
            withdraw_amount(gateway_balance, threshold_amount, deposited)
        }
    };

    Ok(RebalanceStatusResponse {
        gateway_balance,
        reserve,
        threshold_amount,
        state,
        next_amount,
    })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
