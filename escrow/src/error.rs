use common::AccessError;
use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Unauthorized: account {account} is missing role {role}")]
    Unauthorized { account: String, role: String },

    #[error("Gateway balance {gateway_balance} already meets threshold {threshold_amount}")]
    ThresholdExceeded {
        gateway_balance: Uint128,
        threshold_amount: Uint128,
    },

    #[error("Gateway balance {gateway_balance} does not exceed threshold {threshold_amount}")]
    BelowThreshold {
        gateway_balance: Uint128,
        threshold_amount: Uint128,
    },

    #[error("Escrow holds no {token} to deposit")]
    InsufficientReserve { token: String },

    #[error("Escrow has no deposit in gateway pair {token_id} to withdraw")]
    NoGatewayDeposit { token_id: u64 },

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },
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
