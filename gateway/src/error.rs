//! Error types for the token gateway contract

use common::AccessError;
use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: account {account} is missing role {role}")]
    Unauthorized { account: String, role: String },

    // ========================================================================
    // Pause Errors
    // ========================================================================

    #[error("Gateway is paused")]
    ContractPaused,

    #[error("Gateway is not paused")]
    NotPaused,

    // ========================================================================
    // Amount & Recipient Errors
    // ========================================================================

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Invalid recipient: {reason}")]
    InvalidRecipient { reason: String },

    #[error("Insufficient {asset} balance for {holder}: available {available}, required {required}")]
    InsufficientBalance {
        holder: String,
        asset: String,
        available: Uint128,
        required: Uint128,
    },

    // ========================================================================
    // Token Registry Errors
    // ========================================================================

    #[error("Unknown token id: {token_id}")]
    UnknownToken { token_id: u64 },

    #[error("Token already registered: {token}")]
    TokenAlreadyRegistered { token: String },

    #[error("Invalid token pair: {reason}")]
    InvalidTokenPair { reason: String },
}

impl From<AccessError> for ContractError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::Std(e) => ContractError::Std(e),
            AccessError::Unauthorized { account, role } => {
                ContractError::Unauthorized { account, role }
            }
        }
    }
}
