//! Concrete skills exercising the chimera-core invocation contract.
//!
//! Heavy collaborators (trend fetch, content generation, transaction
//! execution) stay external; the skills here are pure and local, so the
//! contract, registry, and gate can be verified end to end without touching
//! any outside system.

mod contract_probe;
mod sentiment;

pub use contract_probe::ContractProbeSkill;
pub use sentiment::AnalyzeSentiment;
