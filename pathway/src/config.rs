//! Pathway configuration types, parsing, validation, and mirroring

use std::collections::BTreeSet;

use common::{Eid, OptionEntry};
use cosmwasm_std::Uint128;
use serde::{Deserialize, Serialize};

use crate::error::PathwayError;

/// One contract instance in the mesh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointRef {
    /// Endpoint id of the chain this contract lives on
    pub eid: Eid,
    /// Adapter contract address on that chain
    pub contract: String,
}

/// Option kind in the declarative artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptionType {
    LzReceive,
    Compose,
}

/// One enforced-option entry of the artifact:
/// `{msg_type, option_type, gas, value, compose_index?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnforcedOptionSpec {
    pub msg_type: u16,
    pub option_type: OptionType,
    pub gas: u64,
    #[serde(default)]
    pub value: u128,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compose_index: Option<u16>,
}

impl EnforcedOptionSpec {
    /// Convert to the normalized on-chain descriptor. Unknown combinations
    /// are impossible by construction; mismatched compose indices are not.
    pub fn to_entry(&self) -> Result<OptionEntry, PathwayError> {
        match (self.option_type, self.compose_index) {
            (OptionType::LzReceive, None) => Ok(OptionEntry::LzReceive {
                gas: self.gas,
                value: Uint128::from(self.value),
            }),
            (OptionType::LzReceive, Some(_)) => Err(PathwayError::UnexpectedComposeIndex),
            (OptionType::Compose, Some(index)) => Ok(OptionEntry::Compose {
                index,
                gas: self.gas,
                value: Uint128::from(self.value),
            }),
            (OptionType::Compose, None) => Err(PathwayError::MissingComposeIndex),
        }
    }

    fn validate(&self) -> Result<(), PathwayError> {
        if self.msg_type != 1 && self.msg_type != 2 {
            return Err(PathwayError::UnknownMsgType {
                msg_type: self.msg_type,
            });
        }
        self.to_entry().map(|_| ())
    }
}

/// One directed (or auto-mirrored) pathway declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pathway {
    pub src: EndpointRef,
    pub dst: EndpointRef,
    /// Verifiers every message must pass
    #[serde(default)]
    pub required_verifiers: Vec<String>,
    /// Verifiers counted toward the quorum threshold
    #[serde(default)]
    pub optional_verifiers: Vec<String>,
    /// How many optional verifiers must attest
    #[serde(default)]
    pub optional_threshold: u8,
    /// Confirmation depth: [src->dst leg, dst->src leg]
    pub confirmations: [u64; 2],
    /// Enforced options: [src->dst list, dst->src list]
    #[serde(default)]
    pub enforced_options: [Vec<EnforcedOptionSpec>; 2],
}

impl Pathway {
    /// The reverse declaration derived from this one.
    pub fn reversed(&self) -> Pathway {
        Pathway {
            src: self.dst.clone(),
            dst: self.src.clone(),
            required_verifiers: self.required_verifiers.clone(),
            optional_verifiers: self.optional_verifiers.clone(),
            optional_threshold: self.optional_threshold,
            confirmations: [self.confirmations[1], self.confirmations[0]],
            enforced_options: [
                self.enforced_options[1].clone(),
                self.enforced_options[0].clone(),
            ],
        }
    }

    fn validate(&self) -> Result<(), PathwayError> {
        let (src_eid, dst_eid) = (self.src.eid, self.dst.eid);
        if src_eid == dst_eid {
            return Err(PathwayError::SelfReferential { src_eid, dst_eid });
        }
        if self.required_verifiers.is_empty() && self.optional_verifiers.is_empty() {
            return Err(PathwayError::NoVerifiers { src_eid, dst_eid });
        }
        let optional = self.optional_verifiers.len();
        let threshold = self.optional_threshold;
        let threshold_ok = if optional == 0 {
            threshold == 0
        } else {
            threshold >= 1 && (threshold as usize) <= optional
        };
        if !threshold_ok {
            return Err(PathwayError::BadThreshold {
                src_eid,
                dst_eid,
                threshold,
                optional,
            });
        }
        if self.confirmations.contains(&0) {
            return Err(PathwayError::ZeroConfirmations);
        }
        for spec in self.enforced_options.iter().flatten() {
            spec.validate()?;
        }
        Ok(())
    }
}

/// The whole declarative artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathwayConfig {
    pub pathways: Vec<Pathway>,
}

impl PathwayConfig {
    /// Parse the JSON artifact.
    pub fn from_json_str(json: &str) -> Result<Self, PathwayError> {
        serde_json::from_str(json).map_err(|e| PathwayError::Parse(e.to_string()))
    }

    /// Check every declaration and reject duplicate directed pairs.
    pub fn validate(&self) -> Result<(), PathwayError> {
        let mut seen = BTreeSet::new();
        for pathway in &self.pathways {
            pathway.validate()?;
            if !seen.insert((pathway.src.eid, pathway.dst.eid)) {
                return Err(PathwayError::DuplicatePathway {
                    src_eid: pathway.src.eid,
                    dst_eid: pathway.dst.eid,
                });
            }
        }
        Ok(())
    }

    /// Expand symmetric declarations: every A→B without an explicit B→A gets
    /// the derived reverse entry appended.
    pub fn mirrored(&self) -> PathwayConfig {
        let declared: BTreeSet<(Eid, Eid)> = self
            .pathways
            .iter()
            .map(|p| (p.src.eid, p.dst.eid))
            .collect();
        let mut pathways = self.pathways.clone();
        for pathway in &self.pathways {
            if !declared.contains(&(pathway.dst.eid, pathway.src.eid)) {
                pathways.push(pathway.reversed());
            }
        }
        PathwayConfig { pathways }
    }
}
