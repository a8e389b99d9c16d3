//! Common - Shared Types for the OFT Adapter Contracts
//!
//! This package provides the types shared between the adapter contract, the
//! mock transport endpoint, and the pathway configuration tooling:
//! 32-byte universal addresses, normalized execution-option descriptors, and
//! the cross-contract message interfaces.

pub mod bytes32;
pub mod interface;
pub mod options;

pub use bytes32::{addr_to_bytes32, bytes32_to_addr, bytes32_to_hex, left_pad, to_bytes32};
pub use options::{OptionEntry, MSG_TYPE_SEND, MSG_TYPE_SEND_AND_CALL};

/// Endpoint identifier: an opaque integer uniquely naming a chain endpoint
/// in the mesh. Immutable once assigned.
pub type Eid = u32;
