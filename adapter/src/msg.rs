//! Message types for the OFT adapter contract

use common::OptionEntry;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Uint128};

use crate::state::{Config, Transfer};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Admin address for peer and option management
    pub admin: String,
    /// Transport endpoint contract address
    pub endpoint: String,
    /// Local endpoint id of this chain
    pub local_eid: u32,
    /// Denom of the token this adapter custodies
    pub token_denom: String,
    /// Denom the messaging fee is paid in (must differ from token_denom)
    pub fee_denom: String,
    /// Decimals of the custodied token on this chain
    pub local_decimals: u8,
    /// Shared decimal precision of the mesh (must not exceed local_decimals)
    pub shared_decimals: u8,
    /// Byte length of this chain's canonical addresses; inbound recipients
    /// decode against it (1..=32)
    pub canonical_len: u8,
    /// Adapter surcharge on the endpoint's native fee, in basis points
    pub fee_bps: u64,
    /// Address receiving the surcharge
    pub fee_collector: String,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    /// Lock tokens and emit a cross-chain transfer message.
    ///
    /// Payable: attach the amount to send in the token denom, plus at least
    /// the quoted native fee in the fee denom. Dust below the shared
    /// precision and any fee excess are refunded to `refund_address`
    /// (defaults to the caller). Lock and message submission are atomic:
    /// endpoint failure reverts the lock.
    Send {
        /// Destination endpoint id
        dst_eid: u32,
        /// Recipient, 32-byte universal address (left-padded)
        to: Binary,
        /// Minimum amount to deliver after dust removal (slippage floor)
        min_amount: Uint128,
        /// Wire-encoded execution options
        options: Binary,
        /// Optional compose payload forwarded to the recipient's handler
        compose_msg: Option<Binary>,
        /// Refund address for dust and fee excess
        refund_address: Option<String>,
    },

    /// Verified inbound delivery. Callable only by the configured endpoint;
    /// the origin sender must be the registered peer for `src_eid` and the
    /// nonce must be the next expected value for that origin.
    LzReceive {
        src_eid: u32,
        sender: Binary,
        nonce: u64,
        guid: Binary,
        message: Binary,
    },

    // ========================================================================
    // Administration
    // ========================================================================
    /// Register or overwrite the authorized counterpart for a remote eid.
    ///
    /// Authorization: admin only. No reachability validation is performed.
    SetPeer {
        eid: u32,
        /// 32-byte universal address of the remote adapter
        peer: Binary,
    },

    /// Program the enforced-minimum options for (eid, msg_type).
    ///
    /// Authorization: admin only. Replaces any existing table entry;
    /// idempotent when re-applied with identical options.
    SetEnforcedOptions {
        eid: u32,
        msg_type: u16,
        options: Vec<OptionEntry>,
    },

    /// Update the adapter surcharge and its collector.
    SetFee {
        fee_bps: u64,
        fee_collector: Option<String>,
    },

    /// Pause the send path. Inbound deliveries stay honored so in-flight
    /// value is never stranded.
    Pause {},

    /// Resume the send path.
    Unpause {},

    /// Hand admin rights to a new address.
    UpdateAdmin { admin: String },

    /// Mark an outbound transfer record as in flight (tooling observed the
    /// transport pick the message up; confirmations and quorum pending).
    MarkInFlight { id: u64 },

    /// Mark an outbound transfer record as delivered (tooling observed the
    /// destination-side execution).
    MarkDelivered { id: u64 },

    /// Mark an outbound transfer record as stuck. No automatic timeout
    /// exists; this is an explicit operator judgment.
    MarkStuck { id: u64 },
}

// ============================================================================
// Query Messages
// ============================================================================

/// Messaging fee for a send
#[cw_serde]
pub struct MessagingFeeResponse {
    /// Fee in the native fee denom
    pub native_fee: Uint128,
    /// Fee in the alternate token (zero unless the endpoint supports one)
    pub alt_fee: Uint128,
}

#[cw_serde]
pub struct PeerResponse {
    pub eid: u32,
    /// 32-byte peer, or None when no peer is configured
    pub peer: Option<Binary>,
}

#[cw_serde]
pub struct PeersResponse {
    pub peers: Vec<PeerResponse>,
}

#[cw_serde]
pub struct EnforcedOptionsResponse {
    pub options: Vec<OptionEntry>,
}

#[cw_serde]
pub struct LockedBalanceResponse {
    pub locked: Uint128,
}

#[cw_serde]
pub struct TransferResponse {
    pub id: u64,
    pub transfer: Transfer,
}

#[cw_serde]
pub struct TransfersResponse {
    pub transfers: Vec<TransferResponse>,
}

#[cw_serde]
pub struct NonceResponse {
    pub nonce: u64,
}

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Contract configuration
    #[returns(Config)]
    Config {},

    /// Registered peer for an eid
    #[returns(PeerResponse)]
    Peer { eid: u32 },

    /// All registered peers, paginated by eid
    #[returns(PeersResponse)]
    Peers {
        start_after: Option<u32>,
        limit: Option<u32>,
    },

    /// Enforced-minimum options for (eid, msg_type)
    #[returns(EnforcedOptionsResponse)]
    EnforcedOptions { eid: u32, msg_type: u16 },

    /// Quote the messaging fee for a send. Read-only and deterministic for a
    /// given state snapshot; a quote, not a reservation.
    #[returns(MessagingFeeResponse)]
    QuoteSend {
        dst_eid: u32,
        to: Binary,
        amount: Uint128,
        options: Binary,
        compose_msg: Option<Binary>,
    },

    /// Current custodied balance
    #[returns(LockedBalanceResponse)]
    LockedBalance {},

    /// One outbound transfer record
    #[returns(TransferResponse)]
    Transfer { id: u64 },

    /// Outbound transfer records, paginated by id
    #[returns(TransfersResponse)]
    Transfers {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    /// Last accepted inbound nonce for a source eid
    #[returns(NonceResponse)]
    InboundNonce { src_eid: u32 },

    /// Last assigned outbound nonce for a destination eid
    #[returns(NonceResponse)]
    OutboundNonce { dst_eid: u32 },
}
