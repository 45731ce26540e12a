use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;

pub const CONTRACT_NAME: &str = "crates.io:rebalancing-escrow";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cw_serde]
pub struct Config {
    /// Gateway contract being rebalanced
    pub gateway: Addr,
    /// Gateway pair id
    pub token_id: u64,
    /// Real token of that pair, resolved from the gateway at instantiation
    pub real_token: Addr,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Target real-token balance of the gateway
pub const THRESHOLD_AMOUNT: Item<Uint128> = Item::new("threshold_amount");
