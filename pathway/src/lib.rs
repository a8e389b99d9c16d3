//! Pathway - Declarative Security Configuration for the Adapter Mesh
//!
//! A pathway declares, per directed chain pair, the policy that gates message
//! delivery: required and optional verifier sets with a quorum threshold,
//! confirmation depth on each leg, and the enforced execution-option minimums
//! per message type. Declarations are symmetric by default: configuring A→B
//! auto-derives B→A unless an explicit reverse entry overrides it.
//!
//! The model is pure data. Deployment tooling validates it, mirrors it, and
//! expands it into the idempotent wiring steps that program the on-chain
//! registries; the runtime core only ever sees those explicit administrative
//! calls. Applying a stricter policy affects messages initiated thereafter,
//! never in-flight ones.

pub mod config;
pub mod error;
pub mod wiring;

pub use config::{EndpointRef, EnforcedOptionSpec, OptionType, Pathway, PathwayConfig};
pub use error::PathwayError;
pub use wiring::WiringStep;
