//! State definitions for the endpoint mock

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Uint128};
use cw_storage_plus::{Item, Map};

/// Endpoint configuration
#[cw_serde]
pub struct Config {
    /// This endpoint's chain id
    pub eid: u32,
    /// Denom fees are charged in
    pub fee_denom: String,
    /// Flat component of the relay fee
    pub base_fee: Uint128,
    /// Per-byte component over message plus options bytes
    pub fee_per_byte: Uint128,
}

/// A queued outbound packet
#[cw_serde]
pub struct Packet {
    pub dst_eid: u32,
    /// Destination receiver, 32-byte universal address
    pub receiver: Binary,
    pub message: Binary,
    pub options: Binary,
    /// Native fee collected for this packet
    pub fee_paid: Uint128,
}

pub const CONTRACT_NAME: &str = "crates.io:endpoint-mock";
pub const CONTRACT_VERSION: &str = "0.1.0";

pub const CONFIG: Item<Config> = Item::new("config");

/// Outbound nonce per (sender, dst_eid)
pub const OUTBOUND_NONCES: Map<(&Addr, u32), u64> = Map::new("outbound_nonces");

/// Queued packets, keyed by (sender, dst_eid, nonce)
pub const PACKETS: Map<(&Addr, u32, u64), Packet> = Map::new("packets");
