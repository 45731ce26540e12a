//! State definitions for the token gateway contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Storage, Uint128};
use cw_storage_plus::{Item, Map};

use crate::error::ContractError;

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Whether swaps are currently halted
    pub paused: bool,
    /// Id assigned to the next registered token pair
    pub next_token_id: u64,
}

/// A real token and its bridged representation
#[cw_serde]
pub struct TokenPair {
    pub token_id: u64,
    /// Canonical CW20 token
    pub real_token: Addr,
    /// Bridged CW20 token, redeemable 1:1 for the real token
    pub wrapped_token: Addr,
}

/// Swap direction through a token pair
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapDirection {
    /// Wrapped in, real out
    ToReal,
    /// Real in, wrapped out
    ToWrapped,
}

impl SwapDirection {
    /// (source, destination) tokens of the swap.
    pub fn route<'a>(&self, pair: &'a TokenPair) -> (&'a Addr, &'a Addr) {
        match self {
            SwapDirection::ToReal => (&pair.wrapped_token, &pair.real_token),
            SwapDirection::ToWrapped => (&pair.real_token, &pair.wrapped_token),
        }
    }

    pub fn method(&self) -> &'static str {
        match self {
            SwapDirection::ToReal => "swap_to_real",
            SwapDirection::ToWrapped => "swap_to_wrapped",
        }
    }
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:token-gateway";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

/// Key: token id, Value: TokenPair
pub const TOKEN_PAIRS: Map<u64, TokenPair> = Map::new("token_pairs");

/// Key: real token address, Value: token id
pub const TOKEN_ID_BY_REAL: Map<&Addr, u64> = Map::new("token_id_by_real");

/// Key: wrapped token address, Value: token id
pub const TOKEN_ID_BY_WRAPPED: Map<&Addr, u64> = Map::new("token_id_by_wrapped");

/// Combined real + wrapped deposits
/// Key: (token id, depositor), Value: deposited amount
pub const DEPOSITS: Map<(u64, &Addr), Uint128> = Map::new("deposits");

pub fn load_token_pair(storage: &dyn Storage, token_id: u64) -> Result<TokenPair, ContractError> {
    TOKEN_PAIRS
        .may_load(storage, token_id)?
        .ok_or(ContractError::UnknownToken { token_id })
}

/// Register a new pair under the next free id.
///
/// Neither token may already belong to a pair, on either side.
pub fn register_token_pair(
    storage: &mut dyn Storage,
    real_token: Addr,
    wrapped_token: Addr,
) -> Result<TokenPair, ContractError> {
    if real_token == wrapped_token {
        return Err(ContractError::InvalidTokenPair {
            reason: "real and wrapped token must differ".to_string(),
        });
    }

    for token in [&real_token, &wrapped_token] {
        if TOKEN_ID_BY_REAL.has(storage, token) || TOKEN_ID_BY_WRAPPED.has(storage, token) {
            return Err(ContractError::TokenAlreadyRegistered {
                token: token.to_string(),
            });
        }
    }

    let mut config = CONFIG.load(storage)?;
    let token_id = config.next_token_id;
    config.next_token_id += 1;
    CONFIG.save(storage, &config)?;

    let pair = TokenPair {
        token_id,
        real_token,
        wrapped_token,
    };
    TOKEN_PAIRS.save(storage, token_id, &pair)?;
    TOKEN_ID_BY_REAL.save(storage, &pair.real_token, &token_id)?;
    TOKEN_ID_BY_WRAPPED.save(storage, &pair.wrapped_token, &token_id)?;

    Ok(pair)
}
