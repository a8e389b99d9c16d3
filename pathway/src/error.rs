//! Error types for pathway configuration

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PathwayError {
    #[error("failed to parse pathway config: {0}")]
    Parse(String),

    #[error("duplicate directed pathway {src_eid} -> {dst_eid}")]
    DuplicatePathway { src_eid: u32, dst_eid: u32 },

    #[error("pathway {src_eid} -> {dst_eid} has a self-referential pair")]
    SelfReferential { src_eid: u32, dst_eid: u32 },

    #[error("pathway {src_eid} -> {dst_eid} declares no verifiers")]
    NoVerifiers { src_eid: u32, dst_eid: u32 },

    #[error(
        "pathway {src_eid} -> {dst_eid} has optional threshold {threshold} for {optional} optional verifiers"
    )]
    BadThreshold {
        src_eid: u32,
        dst_eid: u32,
        threshold: u8,
        optional: usize,
    },

    #[error("unknown message type {msg_type}: expected 1 or 2")]
    UnknownMsgType { msg_type: u16 },

    #[error("compose option requires a compose_index")]
    MissingComposeIndex,

    #[error("lz_receive option must not carry a compose_index")]
    UnexpectedComposeIndex,

    #[error("confirmation depth must be at least 1 on each leg")]
    ZeroConfirmations,
}
