//! State definitions for the OFT adapter contract
//!
//! Storage covers the peer registry, the enforced-option tables, custodied
//! balance, per-direction nonces, and the outbound transfer records that
//! off-chain tooling queries.

use common::OptionEntry;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Admin address for peer, option, and policy management
    pub admin: Addr,
    /// Transport endpoint contract; the only account allowed to deliver
    pub endpoint: Addr,
    /// Local endpoint id of this chain in the mesh
    pub local_eid: u32,
    /// Denom of the custodied token
    pub token_denom: String,
    /// Denom the messaging fee is paid in
    pub fee_denom: String,
    /// Decimals of the custodied token on this chain
    pub local_decimals: u8,
    /// Shared decimal precision of the bridge mesh
    pub shared_decimals: u8,
    /// Byte length of this chain's canonical addresses; inbound recipients
    /// decode against it
    pub canonical_len: u8,
    /// Adapter surcharge on the endpoint's native fee, in basis points
    pub fee_bps: u64,
    /// Address receiving the surcharge
    pub fee_collector: Addr,
    /// Whether the send path is currently paused (receives stay honored)
    pub paused: bool,
}

impl Config {
    /// 10^(local_decimals - shared_decimals): one shared-decimal unit
    /// expressed in local units.
    pub fn decimal_conversion_rate(&self) -> Uint128 {
        debug_assert!(self.shared_decimals <= self.local_decimals);
        Uint128::from(10u128.pow((self.local_decimals - self.shared_decimals) as u32))
    }

    /// Truncate a local amount down to the shared precision (dust removal).
    pub fn remove_dust(&self, amount: Uint128) -> Uint128 {
        let rate = self.decimal_conversion_rate();
        amount.checked_div(rate).unwrap_or_default() * rate
    }

    /// Local units -> shared-decimal units. Callers must remove dust first.
    pub fn to_sd(&self, amount_ld: Uint128) -> u64 {
        (amount_ld.u128() / self.decimal_conversion_rate().u128()) as u64
    }

    /// Shared-decimal units -> local units.
    pub fn to_ld(&self, amount_sd: u64) -> Uint128 {
        Uint128::from(amount_sd) * self.decimal_conversion_rate()
    }
}

// ============================================================================
// Transfer Records
// ============================================================================

/// Lifecycle of an outbound message. Records start at `Sent`; the adapter
/// never observes transport progress itself, so tooling watching the mesh
/// advances the status from there.
#[cw_serde]
pub enum TransferStatus {
    Sent,
    InFlight,
    Delivered,
    Stuck,
}

/// Record of one outbound transfer
#[cw_serde]
pub struct Transfer {
    /// Globally unique message id (keccak over nonce, route, and peers)
    pub guid: [u8; 32],
    /// Destination endpoint id
    pub dst_eid: u32,
    /// Recipient as 32-byte universal address
    pub to: [u8; 32],
    /// Amount debited from the sender, local units
    pub amount_sent_ld: Uint128,
    /// Amount the destination will credit, local units (post dust removal)
    pub amount_received_ld: Uint128,
    /// Outbound nonce on the (local, dst_eid) pathway
    pub nonce: u64,
    /// Current delivery status
    pub status: TransferStatus,
    /// Block time of the send
    pub sent_at: Timestamp,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:oft-adapter";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = "0.1.0";

/// Basis points denominator
pub const BPS_DENOMINATOR: u128 = 10_000;

// ============================================================================
// Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Peer registry: eid -> authorized counterpart, 32-byte universal address.
/// Absence of an entry rejects all traffic to/from that eid.
pub const PEERS: Map<u32, [u8; 32]> = Map::new("peers");

/// Enforced-option tables: (eid, msg_type) -> minimum required options
pub const ENFORCED_OPTIONS: Map<(u32, u16), Vec<OptionEntry>> = Map::new("enforced_options");

/// Custodied balance of the underlying token. Invariant: never released
/// below zero; equals sum of locks minus sum of releases.
pub const LOCKED: Item<Uint128> = Item::new("locked");

/// Outbound nonce per destination eid (mirrors the endpoint's assignment)
pub const OUTBOUND_NONCES: Map<u32, u64> = Map::new("outbound_nonces");

/// Last accepted inbound nonce per source eid; deliveries must arrive at
/// exactly last + 1
pub const INBOUND_NONCES: Map<u32, u64> = Map::new("inbound_nonces");

/// Outbound transfer records, keyed by a global sequence id
pub const TRANSFERS: Map<u64, Transfer> = Map::new("transfers");

/// Next transfer record id
pub const NEXT_TRANSFER_ID: Item<u64> = Item::new("next_transfer_id");
