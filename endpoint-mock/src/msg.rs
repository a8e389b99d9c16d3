//! Message types for the endpoint mock
//!
//! Send and Quote stay JSON-compatible with the interface enums the adapter
//! uses (`common::interface::endpoint`); Deliver is the test-relayer control
//! surface.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Uint128};

use crate::state::{Config, Packet};

#[cw_serde]
pub struct InstantiateMsg {
    /// This endpoint's chain id
    pub eid: u32,
    /// Denom fees are charged in
    pub fee_denom: String,
    /// Flat component of the relay fee
    pub base_fee: Uint128,
    /// Per-byte component over message plus options bytes
    pub fee_per_byte: Uint128,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Submit an outbound packet. The attached fee must cover the quote;
    /// anything attached is kept (excess handling is the sender's job).
    Send {
        dst_eid: u32,
        receiver: Binary,
        message: Binary,
        options: Binary,
    },

    /// Drive a destination adapter's LzReceive with this endpoint as caller.
    /// Test harnesses use this as the relayer after "verification" completes.
    Deliver {
        /// Destination adapter contract on this chain
        oapp: String,
        /// Origin chain id
        src_eid: u32,
        /// Origin sender, 32-byte universal address
        sender: Binary,
        /// Transport nonce for (origin sender, this chain)
        nonce: u64,
        /// Message guid
        guid: Binary,
        /// Wire payload
        message: Binary,
    },
}

#[cw_serde]
pub struct QuoteResponse {
    pub native_fee: Uint128,
    pub alt_fee: Uint128,
}

#[cw_serde]
pub struct NonceResponse {
    pub nonce: u64,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},

    /// Deterministic fee for relaying `message` with `options` to `dst_eid`
    #[returns(QuoteResponse)]
    Quote {
        dst_eid: u32,
        message: Binary,
        options: Binary,
    },

    /// Last assigned outbound nonce for (sender, dst_eid)
    #[returns(NonceResponse)]
    OutboundNonce { sender: String, dst_eid: u32 },

    /// A queued packet
    #[returns(Packet)]
    Packet {
        sender: String,
        dst_eid: u32,
        nonce: u64,
    },
}
