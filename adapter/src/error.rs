//! Error types for the OFT adapter contract

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization
    // ========================================================================

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("Unauthorized sender: inbound caller or origin is not a registered peer")]
    UnauthorizedSender,

    #[error("No peer configured for eid {eid}")]
    NoPeerConfigured { eid: u32 },

    // ========================================================================
    // Send Path
    // ========================================================================

    #[error("Adapter is paused")]
    Paused,

    #[error("No funds sent")]
    NoFundsSent,

    #[error("Invalid funds: {reason}")]
    InvalidFunds { reason: String },

    #[error("Slippage exceeded: amount after dust removal {amount_received} is below minimum {min_amount}")]
    SlippageExceeded {
        amount_received: Uint128,
        min_amount: Uint128,
    },

    #[error("Invalid options: {reason}")]
    InvalidOptions { reason: String },

    #[error("Insufficient options: {reason}")]
    InsufficientOptions { reason: String },

    #[error("Insufficient fee paid: required {required}, paid {paid}")]
    InsufficientFeePaid { required: Uint128, paid: Uint128 },

    // ========================================================================
    // Receive Path
    // ========================================================================

    #[error("Replay or out-of-order delivery: expected nonce {expected}, got {got}")]
    ReplayOrOutOfOrder { expected: u64, got: u64 },

    #[error("Insufficient custody: locked balance {available} cannot release {requested}")]
    InsufficientCustody {
        available: Uint128,
        requested: Uint128,
    },

    // ========================================================================
    // Configuration
    // ========================================================================

    #[error("Invalid decimals: shared decimals {shared} exceed local decimals {local}")]
    InvalidDecimals { local: u8, shared: u8 },

    #[error("Invalid canonical address length: {len} (must be 1..=32)")]
    InvalidCanonicalLength { len: u8 },

    #[error("Unknown transfer: {id}")]
    UnknownTransfer { id: u64 },

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },
}
