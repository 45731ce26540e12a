//! Token Gateway Contract - Real/Bridged Token Swaps for TerraClassic
//!
//! The gateway holds reserves of one or more token pairs. Each pair couples a
//! "real" CW20 token with its bridged representation, and the two are
//! redeemable for each other at a fixed 1:1 rate.
//!
//! # Swaps
//! 1. User grants the gateway an allowance on the source token
//! 2. User calls `SwapToReal` / `SwapToWrapped` (optionally `...To` a recipient)
//! 3. Gateway pulls the source token and pays out the same amount of the other
//!
//! # Deposit Ledger
//! Liquidity providers deposit either side of a pair. Both sides count toward
//! a single per-account counter, and withdrawals of either side draw from it.
//!
//! # Security
//! - Role-based access control (admin, pauser, unpauser, token manager)
//! - Separate pauser and unpauser roles for the swap circuit breaker
//! - Reserve checks before every payout

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
pub use crate::state::SwapDirection;
