//! Execute handlers for the token gateway contract.
//!
//! - `ledger` - Deposit and Withdraw against the combined per-account counter
//! - `swap` - 1:1 swaps between the two tokens of a pair
//! - `admin` - Pause, unpause, and token pair registration

mod admin;
mod ledger;
mod swap;

pub use admin::*;
pub use ledger::*;
pub use swap::*;
