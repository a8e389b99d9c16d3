//! Execution-option wire codec and enforced-minimum validation
//!
//! Caller-supplied options arrive as an opaque byte string in the transport's
//! "type 3" format and are decoded into the closed [`OptionEntry`] vocabulary.
//! Unknown workers or option types fail the decode; they are never ignored.
//!
//! # Wire layout
//! ```text
//! | version: u16 = 3 | worker_id: u8 | size: u16 | option_type: u8 | params |*
//! ```
//! - option_type 1 (receive-execution): gas u128 [+ value u128]
//! - option_type 3 (compose): index u16, gas u128 [+ value u128]

use std::collections::BTreeMap;

use common::OptionEntry;
use cosmwasm_std::Uint128;

use crate::error::ContractError;

/// Options container format version.
pub const OPTIONS_VERSION: u16 = 3;

/// Executor worker id.
pub const WORKER_ID_EXECUTOR: u8 = 1;

/// Receive-execution option type.
pub const OPTION_TYPE_LZRECEIVE: u8 = 1;

/// Compose option type.
pub const OPTION_TYPE_COMPOSE: u8 = 3;

fn invalid(reason: impl Into<String>) -> ContractError {
    ContractError::InvalidOptions {
        reason: reason.into(),
    }
}

fn read_u128(buf: &[u8]) -> u128 {
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(buf);
    u128::from_be_bytes(bytes)
}

fn gas_from_u128(gas: u128) -> Result<u64, ContractError> {
    u64::try_from(gas).map_err(|_| invalid("gas does not fit in u64"))
}

/// Decode a wire-encoded option string into normalized entries.
pub fn decode(bytes: &[u8]) -> Result<Vec<OptionEntry>, ContractError> {
    if bytes.len() < 2 {
        return Err(invalid("options shorter than version header"));
    }
    let version = u16::from_be_bytes([bytes[0], bytes[1]]);
    if version != OPTIONS_VERSION {
        return Err(invalid(format!("unsupported options version {version}")));
    }

    let mut entries = vec![];
    let mut cursor = 2;
    while cursor < bytes.len() {
        if cursor + 3 > bytes.len() {
            return Err(invalid("truncated option header"));
        }
        let worker_id = bytes[cursor];
        let size = u16::from_be_bytes([bytes[cursor + 1], bytes[cursor + 2]]) as usize;
        cursor += 3;
        if worker_id != WORKER_ID_EXECUTOR {
            return Err(invalid(format!("unknown worker id {worker_id}")));
        }
        if size < 1 || cursor + size > bytes.len() {
            return Err(invalid("truncated option body"));
        }
        let option_type = bytes[cursor];
        let params = &bytes[cursor + 1..cursor + size];
        cursor += size;

        let entry = match option_type {
            OPTION_TYPE_LZRECEIVE => match params.len() {
                16 => OptionEntry::LzReceive {
                    gas: gas_from_u128(read_u128(params))?,
                    value: Uint128::zero(),
                },
                32 => OptionEntry::LzReceive {
                    gas: gas_from_u128(read_u128(&params[..16]))?,
                    value: Uint128::from(read_u128(&params[16..])),
                },
                n => return Err(invalid(format!("lz_receive option has {n} param bytes"))),
            },
            OPTION_TYPE_COMPOSE => {
                let index = match params.len() {
                    18 | 34 => u16::from_be_bytes([params[0], params[1]]),
                    n => return Err(invalid(format!("compose option has {n} param bytes"))),
                };
                let gas = gas_from_u128(read_u128(&params[2..18]))?;
                let value = if params.len() == 34 {
                    Uint128::from(read_u128(&params[18..]))
                } else {
                    Uint128::zero()
                };
                OptionEntry::Compose { index, gas, value }
            }
            other => return Err(invalid(format!("unknown option type {other}"))),
        };
        entries.push(entry);
    }
    Ok(entries)
}

/// Encode normalized entries back into the wire format. Used to price
/// enforced minimums when the caller supplied less.
pub fn encode(entries: &[OptionEntry]) -> Vec<u8> {
    let mut out = OPTIONS_VERSION.to_be_bytes().to_vec();
    for entry in entries {
        match entry {
            OptionEntry::LzReceive { gas, value } => {
                out.push(WORKER_ID_EXECUTOR);
                out.extend_from_slice(&33u16.to_be_bytes());
                out.push(OPTION_TYPE_LZRECEIVE);
                out.extend_from_slice(&(*gas as u128).to_be_bytes());
                out.extend_from_slice(&value.u128().to_be_bytes());
            }
            OptionEntry::Compose { index, gas, value } => {
                out.push(WORKER_ID_EXECUTOR);
                out.extend_from_slice(&35u16.to_be_bytes());
                out.push(OPTION_TYPE_COMPOSE);
                out.extend_from_slice(&index.to_be_bytes());
                out.extend_from_slice(&(*gas as u128).to_be_bytes());
                out.extend_from_slice(&value.u128().to_be_bytes());
            }
        }
    }
    out
}

/// Aggregate (gas, value) totals: receive-execution as a whole, compose per
/// composition index.
struct Totals {
    receive_gas: u128,
    receive_value: u128,
    compose: BTreeMap<u16, (u128, u128)>,
}

fn totals(entries: &[OptionEntry]) -> Totals {
    let mut t = Totals {
        receive_gas: 0,
        receive_value: 0,
        compose: BTreeMap::new(),
    };
    for entry in entries {
        match entry {
            OptionEntry::LzReceive { gas, value } => {
                t.receive_gas = t.receive_gas.saturating_add(*gas as u128);
                t.receive_value = t.receive_value.saturating_add(value.u128());
            }
            OptionEntry::Compose { index, gas, value } => {
                let slot = t.compose.entry(*index).or_insert((0, 0));
                slot.0 = slot.0.saturating_add(*gas as u128);
                slot.1 = slot.1.saturating_add(value.u128());
            }
        }
    }
    t
}

/// Check that supplied options meet or exceed the enforced minimums.
///
/// Per option type present in the enforced set, the supplied gas and value
/// must cover the enforced amounts; compose entries are matched by index.
/// Supplying options absent from the enforced set is permitted.
pub fn validate(
    enforced: &[OptionEntry],
    supplied: &[OptionEntry],
) -> Result<(), ContractError> {
    let want = totals(enforced);
    let got = totals(supplied);

    if want.receive_gas > 0 || want.receive_value > 0 {
        if got.receive_gas < want.receive_gas {
            return Err(ContractError::InsufficientOptions {
                reason: format!(
                    "lz_receive gas {} below enforced minimum {}",
                    got.receive_gas, want.receive_gas
                ),
            });
        }
        if got.receive_value < want.receive_value {
            return Err(ContractError::InsufficientOptions {
                reason: format!(
                    "lz_receive value {} below enforced minimum {}",
                    got.receive_value, want.receive_value
                ),
            });
        }
    }

    for (index, (want_gas, want_value)) in &want.compose {
        let (got_gas, got_value) = got.compose.get(index).copied().unwrap_or((0, 0));
        if got_gas < *want_gas {
            return Err(ContractError::InsufficientOptions {
                reason: format!(
                    "compose[{index}] gas {got_gas} below enforced minimum {want_gas}"
                ),
            });
        }
        if got_value < *want_value {
            return Err(ContractError::InsufficientOptions {
                reason: format!(
                    "compose[{index}] value {got_value} below enforced minimum {want_value}"
                ),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lz_receive(gas: u64, value: u128) -> OptionEntry {
        OptionEntry::LzReceive {
            gas,
            value: Uint128::from(value),
        }
    }

    fn compose(index: u16, gas: u64, value: u128) -> OptionEntry {
        OptionEntry::Compose {
            index,
            gas,
            value: Uint128::from(value),
        }
    }

    #[test]
    fn round_trip() {
        let entries = vec![lz_receive(200_000, 5), compose(0, 80_000, 0)];
        assert_eq!(decode(&encode(&entries)).unwrap(), entries);
    }

    #[test]
    fn decodes_short_form_lz_receive() {
        // 16-byte params: gas only, value defaults to zero
        let mut bytes = OPTIONS_VERSION.to_be_bytes().to_vec();
        bytes.push(WORKER_ID_EXECUTOR);
        bytes.extend_from_slice(&17u16.to_be_bytes());
        bytes.push(OPTION_TYPE_LZRECEIVE);
        bytes.extend_from_slice(&200_000u128.to_be_bytes());
        assert_eq!(decode(&bytes).unwrap(), vec![lz_receive(200_000, 0)]);
    }

    #[test]
    fn rejects_wrong_version() {
        let mut bytes = encode(&[lz_receive(1, 0)]);
        bytes[1] = 2;
        assert!(matches!(
            decode(&bytes),
            Err(ContractError::InvalidOptions { .. })
        ));
    }

    #[test]
    fn rejects_unknown_option_type() {
        let mut bytes = OPTIONS_VERSION.to_be_bytes().to_vec();
        bytes.push(WORKER_ID_EXECUTOR);
        bytes.extend_from_slice(&17u16.to_be_bytes());
        bytes.push(9);
        bytes.extend_from_slice(&[0u8; 16]);
        assert!(matches!(
            decode(&bytes),
            Err(ContractError::InvalidOptions { .. })
        ));
    }

    #[test]
    fn rejects_unknown_worker() {
        let mut bytes = encode(&[lz_receive(1, 0)]);
        bytes[2] = 7;
        assert!(matches!(
            decode(&bytes),
            Err(ContractError::InvalidOptions { .. })
        ));
    }

    #[test]
    fn rejects_truncated_body() {
        let mut bytes = encode(&[lz_receive(1, 0)]);
        bytes.truncate(bytes.len() - 1);
        assert!(matches!(
            decode(&bytes),
            Err(ContractError::InvalidOptions { .. })
        ));
    }

    #[test]
    fn validate_passes_when_supplied_meets_minimum() {
        let enforced = vec![lz_receive(80_000, 0)];
        assert!(validate(&enforced, &[lz_receive(80_000, 0)]).is_ok());
        assert!(validate(&enforced, &[lz_receive(200_000, 10)]).is_ok());
    }

    #[test]
    fn validate_rejects_insufficient_gas_or_value() {
        let enforced = vec![lz_receive(80_000, 10)];
        assert!(matches!(
            validate(&enforced, &[lz_receive(79_999, 10)]),
            Err(ContractError::InsufficientOptions { .. })
        ));
        assert!(matches!(
            validate(&enforced, &[lz_receive(80_000, 9)]),
            Err(ContractError::InsufficientOptions { .. })
        ));
    }

    #[test]
    fn validate_rejects_missing_required_option() {
        let enforced = vec![lz_receive(80_000, 0), compose(0, 50_000, 0)];
        // compose entry missing entirely
        assert!(matches!(
            validate(&enforced, &[lz_receive(80_000, 0)]),
            Err(ContractError::InsufficientOptions { .. })
        ));
    }

    #[test]
    fn validate_matches_compose_by_index() {
        let enforced = vec![compose(1, 50_000, 0)];
        // wrong index does not satisfy the enforced entry
        assert!(matches!(
            validate(&enforced, &[compose(0, 50_000, 0)]),
            Err(ContractError::InsufficientOptions { .. })
        ));
        assert!(validate(&enforced, &[compose(1, 50_000, 0)]).is_ok());
    }

    #[test]
    fn validate_allows_extra_supplied_options() {
        assert!(validate(&[], &[lz_receive(1, 0), compose(3, 1, 1)]).is_ok());
    }

    #[test]
    fn validate_saturates_on_extreme_totals() {
        // Repeated maximal entries must clamp instead of panicking on overflow
        let enforced = vec![lz_receive(u64::MAX, u128::MAX)];
        let supplied = vec![
            lz_receive(u64::MAX, u128::MAX),
            lz_receive(u64::MAX, u128::MAX),
            compose(0, u64::MAX, u128::MAX),
            compose(0, u64::MAX, u128::MAX),
        ];
        assert!(validate(&enforced, &supplied).is_ok());
    }

    #[test]
    fn validate_sums_repeated_entries() {
        let enforced = vec![lz_receive(100_000, 0)];
        let supplied = vec![lz_receive(60_000, 0), lz_receive(40_000, 0)];
        assert!(validate(&enforced, &supplied).is_ok());
    }
}
