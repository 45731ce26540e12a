//! Rebalancing Escrow Contract
//!
//! Holds a reserve of one gateway pair's real token and moves it into or out
//! of the gateway so the gateway's real-token balance tracks a configured
//! threshold.
//!
//! - `DepositToGateway` tops the gateway up toward the threshold, limited by
//!   what the escrow holds (partial fill)
//! - `WithdrawFromGateway` pulls the excess above the threshold back
//!
//! Both go through the gateway's deposit ledger, so the escrow can only ever
//! withdraw what it previously deposited.

pub mod contract;
pub mod error;
pub mod msg;
pub mod rebalance;
pub mod state;

pub use crate::error::ContractError;
