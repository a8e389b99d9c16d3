//! OFT Adapter Contract - Cross-Chain Token Transfers
//!
//! This contract wraps an existing native token to make it cross-chain
//! transferable without altering the token itself: it locks the token on the
//! source chain, emits an authenticated message through a transport endpoint,
//! and releases an equivalent amount to the recipient when a verified
//! delivery arrives from a registered peer.
//!
//! # Send Flow (Lock)
//! 1. Caller attaches tokens plus the native messaging fee
//! 2. Dust below the shared precision is truncated and refunded
//! 3. Supplied execution options are checked against enforced minimums
//! 4. Tokens are locked and the payload is submitted to the endpoint;
//!    endpoint failure reverts the lock
//!
//! # Receive Flow (Release)
//! 1. The endpoint delivers a verified packet
//! 2. Origin sender must be the registered peer; nonces are strictly ordered
//! 3. Custody is released to the recipient, failing closed on underflow
//! 4. A compose payload, if present, is forwarded best-effort
//!
//! # Security
//! - Per-eid peer registry gates both directions
//! - Enforced-option minimums prevent under-provisioned deliveries
//! - Fees are re-validated against a fresh quote at send time
//! - Inbound nonce tracking rejects replay and reordering

pub mod codec;
pub mod contract;
pub mod error;
mod execute;
pub mod msg;
pub mod options;
mod query;
pub mod state;

pub use crate::error::ContractError;
