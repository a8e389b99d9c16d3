//! Endpoint Mock - Test Transport for the OFT Adapter
//!
//! Stands in for the real message-transport endpoint in integration tests:
//! quotes a deterministic fee for a payload, collects it on send, assigns
//! outbound nonces per (sender, destination), and re-delivers queued packets
//! to a destination adapter on request. Verifier quorum and confirmation
//! depth are assumed satisfied by the time `Deliver` is called.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
