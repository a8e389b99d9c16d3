//! Cross-contract message interfaces
//!
//! The adapter talks to the transport endpoint, and the endpoint drives
//! adapters and compose receivers. These enums carry only the variants each
//! caller needs; they stay JSON-compatible with the callee's full message
//! enum (same variant and field names).

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, Uint128};

use crate::Eid;

/// Messages the adapter sends to / queries on the transport endpoint.
pub mod endpoint {
    use super::*;

    #[cw_serde]
    pub enum ExecuteMsg {
        /// Submit an outbound packet. The attached native fee must cover the
        /// endpoint's quote for this destination and payload.
        Send {
            dst_eid: Eid,
            receiver: Binary,
            message: Binary,
            options: Binary,
        },
    }

    #[cw_serde]
    pub enum QueryMsg {
        /// Price relaying `message` with `options` to `dst_eid`.
        Quote {
            dst_eid: Eid,
            message: Binary,
            options: Binary,
        },
    }

    #[cw_serde]
    pub struct QuoteResponse {
        pub native_fee: Uint128,
        pub alt_fee: Uint128,
    }
}

/// Messages the endpoint delivers to a registered OApp (the adapter).
pub mod oapp {
    use super::*;

    #[cw_serde]
    pub enum ExecuteMsg {
        /// Verified inbound packet delivery. Only the configured endpoint may
        /// call this on the adapter.
        LzReceive {
            src_eid: Eid,
            sender: Binary,
            nonce: u64,
            guid: Binary,
            message: Binary,
        },
    }
}

/// Messages the adapter forwards to a recipient's compose handler.
pub mod composer {
    use super::*;

    #[cw_serde]
    pub enum ExecuteMsg {
        /// Secondary payload delivered after the primary value transfer.
        /// Executed best-effort; failure never unwinds the token release.
        LzCompose {
            from: String,
            guid: Binary,
            message: Binary,
        },
    }
}
