//! Common - Shared Types and Utilities for the Token Gateway Contracts
//!
//! This package provides the role-based access control table and the
//! asset-transfer helpers used by both the gateway and the escrow contract.

pub mod access;
pub mod asset;

pub use access::{AccessError, Role};
pub use asset::AssetInfo;
