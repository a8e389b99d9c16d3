//! Normalized execution-option descriptors
//!
//! Enforced-option tables and decoded caller options share one closed set of
//! known option variants. Unknown wire variants are rejected at decode time
//! rather than silently ignored, so this enum is the complete vocabulary.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

/// Message type for a plain token transfer (receive-execution only).
pub const MSG_TYPE_SEND: u16 = 1;

/// Message type for a transfer carrying a compose payload.
pub const MSG_TYPE_SEND_AND_CALL: u16 = 2;

/// A single decoded execution option.
#[cw_serde]
#[derive(Eq)]
pub enum OptionEntry {
    /// Receive-execution budget on the destination chain.
    LzReceive {
        /// Gas (compute budget) for executing the delivery
        gas: u64,
        /// Native value attached to the delivery
        value: Uint128,
    },
    /// Compose-execution budget, keyed by composition index.
    Compose {
        /// Composition index this option applies to
        index: u16,
        /// Gas for the compose call
        gas: u64,
        /// Native value attached to the compose call
        value: Uint128,
    },
}

impl OptionEntry {
    /// Total priced weight of this option (gas plus attached value), used to
    /// pick the costlier of enforced vs. supplied options when quoting.
    /// Saturates rather than overflowing on caller-supplied extremes.
    pub fn weight(&self) -> u128 {
        match self {
            OptionEntry::LzReceive { gas, value } => (*gas as u128).saturating_add(value.u128()),
            OptionEntry::Compose { gas, value, .. } => (*gas as u128).saturating_add(value.u128()),
        }
    }
}

/// Sum of option weights for an option set, saturating at `u128::MAX`.
pub fn total_weight(entries: &[OptionEntry]) -> u128 {
    entries
        .iter()
        .map(OptionEntry::weight)
        .fold(0u128, u128::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_saturate_on_extreme_values() {
        let entries = vec![
            OptionEntry::LzReceive {
                gas: u64::MAX,
                value: Uint128::MAX,
            },
            OptionEntry::Compose {
                index: 0,
                gas: u64::MAX,
                value: Uint128::MAX,
            },
        ];
        assert_eq!(entries[0].weight(), u128::MAX);
        assert_eq!(total_weight(&entries), u128::MAX);
    }
}
