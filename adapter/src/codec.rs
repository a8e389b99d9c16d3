//! Wire payload codec and message GUIDs
//!
//! The cross-chain payload is a fixed header followed by an optional compose
//! message:
//! ```text
//! | to: 32 bytes | amount_sd: u64 BE | compose_msg: rest (optional) |
//! ```
//! Amounts travel in shared-decimal units; the receive path converts back to
//! local units.

use cosmwasm_std::StdError;
use tiny_keccak::{Hasher, Keccak};

use crate::error::ContractError;

/// Fixed header length: 32-byte recipient + 8-byte amount.
pub const HEADER_LEN: usize = 40;

/// Decoded wire payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    /// Recipient, 32-byte universal address
    pub to: [u8; 32],
    /// Amount in shared-decimal units
    pub amount_sd: u64,
    /// Optional compose message, forwarded after the value transfer
    pub compose_msg: Option<Vec<u8>>,
}

/// Encode a payload for submission to the endpoint.
pub fn encode(to: &[u8; 32], amount_sd: u64, compose_msg: Option<&[u8]>) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN + compose_msg.map_or(0, <[u8]>::len));
    out.extend_from_slice(to);
    out.extend_from_slice(&amount_sd.to_be_bytes());
    if let Some(compose) = compose_msg {
        out.extend_from_slice(compose);
    }
    out
}

/// Decode an inbound payload. An empty compose tail decodes to `None`.
pub fn decode(bytes: &[u8]) -> Result<Payload, ContractError> {
    if bytes.len() < HEADER_LEN {
        return Err(ContractError::Std(StdError::generic_err(format!(
            "payload too short: {} bytes, need at least {HEADER_LEN}",
            bytes.len()
        ))));
    }
    let mut to = [0u8; 32];
    to.copy_from_slice(&bytes[..32]);
    let mut amount = [0u8; 8];
    amount.copy_from_slice(&bytes[32..40]);
    let compose_msg = if bytes.len() > HEADER_LEN {
        Some(bytes[HEADER_LEN..].to_vec())
    } else {
        None
    };
    Ok(Payload {
        to,
        amount_sd: u64::from_be_bytes(amount),
        compose_msg,
    })
}

/// Compute keccak256 of arbitrary data.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Globally unique message id over the route and nonce.
///
/// Layout: nonce (8) | src_eid (4) | sender (32) | dst_eid (4) | receiver (32).
pub fn guid(
    nonce: u64,
    src_eid: u32,
    sender: &[u8; 32],
    dst_eid: u32,
    receiver: &[u8; 32],
) -> [u8; 32] {
    let mut data = [0u8; 80];
    data[0..8].copy_from_slice(&nonce.to_be_bytes());
    data[8..12].copy_from_slice(&src_eid.to_be_bytes());
    data[12..44].copy_from_slice(sender);
    data[44..48].copy_from_slice(&dst_eid.to_be_bytes());
    data[48..80].copy_from_slice(receiver);
    keccak256(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_without_compose() {
        let to = [0xAB; 32];
        let bytes = encode(&to, 42, None);
        assert_eq!(bytes.len(), HEADER_LEN);
        let payload = decode(&bytes).unwrap();
        assert_eq!(payload.to, to);
        assert_eq!(payload.amount_sd, 42);
        assert_eq!(payload.compose_msg, None);
    }

    #[test]
    fn round_trip_with_compose() {
        let to = [1u8; 32];
        let bytes = encode(&to, u64::MAX, Some(b"compose-payload"));
        let payload = decode(&bytes).unwrap();
        assert_eq!(payload.amount_sd, u64::MAX);
        assert_eq!(payload.compose_msg.as_deref(), Some(&b"compose-payload"[..]));
    }

    #[test]
    fn rejects_short_payload() {
        assert!(decode(&[0u8; 39]).is_err());
    }

    #[test]
    fn guid_differs_per_route_and_nonce() {
        let sender = [2u8; 32];
        let receiver = [3u8; 32];
        let a = guid(1, 10, &sender, 20, &receiver);
        assert_ne!(a, guid(2, 10, &sender, 20, &receiver));
        assert_ne!(a, guid(1, 11, &sender, 20, &receiver));
        assert_ne!(a, guid(1, 10, &sender, 21, &receiver));
    }
}
