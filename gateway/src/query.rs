//! Query handlers for the token gateway contract.

use cosmwasm_std::{Deps, Env, Order, StdResult};
use cw_storage_plus::Bound;

use common::asset::cw20_balance;

use crate::msg::{
    ConfigResponse, DepositResponse, PausedResponse, ReservesResponse, TokenIdResponse,
    TokenPairResponse, TokenPairsResponse,
};
use crate::state::{TokenPair, CONFIG, DEPOSITS, TOKEN_ID_BY_REAL, TOKEN_PAIRS};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

impl From<TokenPair> for TokenPairResponse {
    fn from(pair: TokenPair) -> Self {
        TokenPairResponse {
            token_id: pair.token_id,
            real_token: pair.real_token,
            wrapped_token: pair.wrapped_token,
        }
    }
}

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        paused: config.paused,
        token_count: config.next_token_id,
    })
}

pub fn query_is_paused(deps: Deps) -> StdResult<PausedResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(PausedResponse {
        paused: config.paused,
    })
}

pub fn query_token_pair(deps: Deps, token_id: u64) -> StdResult<TokenPairResponse> {
    Ok(TOKEN_PAIRS.load(deps.storage, token_id)?.into())
}

/// Query paginated list of token pairs.
pub fn query_token_pairs(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<TokenPairsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start: Option<Bound<u64>> = start_after.map(Bound::exclusive);

    let pairs = TOKEN_PAIRS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, pair)| pair.into()))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(TokenPairsResponse { pairs })
}

pub fn query_token_id_by_real(deps: Deps, real_token: String) -> StdResult<TokenIdResponse> {
    let real_token = deps.api.addr_validate(&real_token)?;
    let token_id = TOKEN_ID_BY_REAL.load(deps.storage, &real_token)?;
    Ok(TokenIdResponse { token_id })
}

pub fn query_deposit(deps: Deps, token_id: u64, account: String) -> StdResult<DepositResponse> {
    let account = deps.api.addr_validate(&account)?;
    let amount = DEPOSITS
        .may_load(deps.storage, (token_id, &account))?
        .unwrap_or_default();
    Ok(DepositResponse {
        token_id,
        account,
        amount,
    })
}

/// Gateway-held balances of both tokens of a pair.
pub fn query_reserves(deps: Deps, env: Env, token_id: u64) -> StdResult<ReservesResponse> {
    let pair = TOKEN_PAIRS.load(deps.storage, token_id)?;
    let gateway = &env.contract.address;
    Ok(ReservesResponse {
        token_id,
        real_reserve: cw20_balance(&deps.querier, &pair.real_token, gateway)?,
        wrapped_reserve: cw20_balance(&deps.querier, &pair.wrapped_token, gateway)?,
    })
}
