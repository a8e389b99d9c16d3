//! Universal 32-byte address encoding
//!
//! Cross-chain recipients and peers are carried as 32-byte values. Narrower
//! address spaces (EVM 20-byte addresses, Cosmos canonical addresses) are
//! left-padded with zeros, mirroring the wire convention of the transport.

use cosmwasm_std::{Addr, Api, Binary, StdError, StdResult};

/// Left-pad raw address bytes into a 32-byte universal address.
///
/// Fails if the input is longer than 32 bytes.
pub fn left_pad(raw: &[u8]) -> StdResult<[u8; 32]> {
    if raw.len() > 32 {
        return Err(StdError::generic_err(format!(
            "address too long for bytes32: {} bytes",
            raw.len()
        )));
    }
    let mut out = [0u8; 32];
    out[32 - raw.len()..].copy_from_slice(raw);
    Ok(out)
}

/// Interpret a `Binary` as an exact 32-byte universal address.
pub fn to_bytes32(bin: &Binary) -> StdResult<[u8; 32]> {
    let bytes: [u8; 32] = bin.as_slice().try_into().map_err(|_| {
        StdError::generic_err(format!(
            "expected 32-byte address, got {} bytes",
            bin.len()
        ))
    })?;
    Ok(bytes)
}

/// Encode a local address as a left-padded 32-byte universal address.
pub fn addr_to_bytes32(api: &dyn Api, addr: &Addr) -> StdResult<[u8; 32]> {
    let canonical = api.addr_canonicalize(addr.as_str())?;
    left_pad(canonical.as_slice())
}

/// Decode a 32-byte universal address back into a local address.
///
/// The low `canonical_len` bytes are the canonical address; everything above
/// them must be zero padding. Decoding by the chain's fixed canonical length
/// keeps addresses whose canonical form starts with a zero byte intact, which
/// stripping leading zeros would not. An all-zero address is rejected.
pub fn bytes32_to_addr(api: &dyn Api, bytes: &[u8; 32], canonical_len: usize) -> StdResult<Addr> {
    if canonical_len == 0 || canonical_len > 32 {
        return Err(StdError::generic_err(format!(
            "invalid canonical address length {canonical_len}"
        )));
    }
    let (padding, canonical) = bytes.split_at(32 - canonical_len);
    if padding.iter().any(|b| *b != 0) {
        return Err(StdError::generic_err(format!(
            "bytes32 address does not fit canonical length {canonical_len}"
        )));
    }
    if canonical.iter().all(|b| *b == 0) {
        return Err(StdError::generic_err("zero bytes32 address"));
    }
    api.addr_humanize(&canonical.into())
}

/// Render a 32-byte value as 0x-prefixed hex for event attributes.
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}
