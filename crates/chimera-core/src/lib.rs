//! chimera-core: typed skill-invocation contract with confidence-gated
//! human escalation.
//!
//! Owns the request/response envelopes every skill speaks, the [`Skill`]
//! capability trait with its name-keyed [`SkillRegistry`], and the
//! [`ConfidenceGate`] that decides when a result needs human review.
//! Concrete collaborators (trend fetch, content generation, transaction
//! execution) live outside this crate and implement [`Skill`].

mod config;
mod contract;
mod error;
mod judge;
mod skill;

pub use config::{CoreConfig, DEFAULT_SKILL_TIMEOUT};
pub use contract::{
    request_schema, response_schema, validate_request, validate_response, SkillRequest,
    SkillResponse,
};
pub use error::{SkillError, ValidationError};
pub use judge::{ConfidenceGate, Disposition, DEFAULT_CONFIDENCE_THRESHOLD};
pub use skill::{Skill, SkillManifest, SkillRegistry};
