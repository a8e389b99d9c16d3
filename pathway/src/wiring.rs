//! Expansion of a pathway configuration into per-contract wiring steps
//!
//! Deployment tooling replays these steps against each chain's contracts.
//! The expansion is deterministic and the steps are idempotent: re-applying
//! an identical configuration produces the identical step list and no
//! observable on-chain change.

use std::collections::BTreeMap;

use common::{Eid, OptionEntry};
use serde::{Deserialize, Serialize};

use crate::config::PathwayConfig;
use crate::error::PathwayError;

/// One administrative call the tooling performs on `contract`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WiringStep {
    /// Register the remote counterpart in the peer registry.
    SetPeer {
        contract: String,
        eid: Eid,
        peer: String,
    },
    /// Program the enforced-minimum options for (eid, msg_type).
    SetEnforcedOptions {
        contract: String,
        eid: Eid,
        msg_type: u16,
        options: Vec<OptionEntry>,
    },
    /// Program the verifier quorum and confirmation depth for the leg
    /// toward `eid`. Consumed by the verification layer, not the adapter.
    SetVerifierPolicy {
        contract: String,
        eid: Eid,
        required: Vec<String>,
        optional: Vec<String>,
        threshold: u8,
        confirmations: u64,
    },
}

/// Expand a validated configuration into wiring steps, mirroring included.
///
/// Steps are ordered by (contract, remote eid) and, per pair, peer first,
/// then options by message type, then the verifier policy.
pub fn wiring_steps(config: &PathwayConfig) -> Result<Vec<WiringStep>, PathwayError> {
    config.validate()?;
    let mirrored = config.mirrored();

    let mut steps = vec![];
    for pathway in &mirrored.pathways {
        let contract = pathway.src.contract.clone();
        let remote_eid = pathway.dst.eid;

        steps.push(WiringStep::SetPeer {
            contract: contract.clone(),
            eid: remote_eid,
            peer: pathway.dst.contract.clone(),
        });

        // Group the outbound-leg enforced options by message type
        let mut by_msg_type: BTreeMap<u16, Vec<OptionEntry>> = BTreeMap::new();
        for spec in &pathway.enforced_options[0] {
            by_msg_type
                .entry(spec.msg_type)
                .or_default()
                .push(spec.to_entry()?);
        }
        for (msg_type, options) in by_msg_type {
            steps.push(WiringStep::SetEnforcedOptions {
                contract: contract.clone(),
                eid: remote_eid,
                msg_type,
                options,
            });
        }

        steps.push(WiringStep::SetVerifierPolicy {
            contract,
            eid: remote_eid,
            required: pathway.required_verifiers.clone(),
            optional: pathway.optional_verifiers.clone(),
            threshold: pathway.optional_threshold,
            confirmations: pathway.confirmations[0],
        });
    }

    steps.sort_by(|a, b| step_key(a).cmp(&step_key(b)));
    Ok(steps)
}

fn step_key(step: &WiringStep) -> (String, Eid, u8, u16) {
    match step {
        WiringStep::SetPeer { contract, eid, .. } => (contract.clone(), *eid, 0, 0),
        WiringStep::SetEnforcedOptions {
            contract,
            eid,
            msg_type,
            ..
        } => (contract.clone(), *eid, 1, *msg_type),
        WiringStep::SetVerifierPolicy { contract, eid, .. } => (contract.clone(), *eid, 2, 0),
    }
}
