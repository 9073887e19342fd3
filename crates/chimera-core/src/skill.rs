//! Skill capability trait, discovery manifests, and the name-keyed registry.
//!
//! A skill is a pluggable unit of behavior behind one uniform contract:
//! validated [`SkillRequest`] in, [`SkillResponse`] out. The registry owns the
//! dispatch path (validate, route, run under a deadline, check response
//! invariants). There is no queue: invocations are independent and
//! uncoordinated.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::DEFAULT_SKILL_TIMEOUT;
use crate::contract::{
    request_schema, response_schema, validate_request, SkillRequest, SkillResponse,
};
use crate::error::{SkillError, ValidationError};

/// Discovery record returned by [`Skill::describe`], consumed by an external
/// registry/dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillManifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub request_schema: Value,
    pub response_schema: Value,
}

/// Uniform invocation surface for heterogeneous behaviors. Concrete
/// collaborators (content generation, trend analysis, transaction execution)
/// implement this trait outside the core.
#[async_trait::async_trait]
pub trait Skill: Send + Sync {
    /// Unique skill name for registry routing.
    fn name(&self) -> &str;

    /// Semantic version of the implementation.
    fn version(&self) -> &str {
        "1.0.0"
    }

    /// Human-readable description for discovery surfaces.
    fn description(&self) -> &str;

    /// Discovery metadata: identity plus the envelope shapes.
    fn describe(&self) -> SkillManifest {
        SkillManifest {
            name: self.name().to_string(),
            version: self.version().to_string(),
            description: self.description().to_string(),
            request_schema: request_schema(),
            response_schema: response_schema(),
        }
    }

    /// The sole behavioral operation. Takes `&SkillRequest` so the input can
    /// never be mutated. Implementations must echo `request.request_id` and
    /// set `confidence` from their own certainty in the result, never a
    /// placeholder constant.
    async fn invoke(&self, request: &SkillRequest) -> Result<SkillResponse, SkillError>;
}

/// Registry of skills dispatched by name.
pub struct SkillRegistry {
    skills: Vec<Arc<dyn Skill>>,
    timeout: Duration,
}

impl SkillRegistry {
    pub fn new(timeout: Duration) -> Self {
        Self {
            skills: Vec::new(),
            timeout,
        }
    }

    pub fn register(&mut self, skill: Arc<dyn Skill>) {
        self.skills.push(skill);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Skill>> {
        self.skills.iter().find(|s| s.name() == name).cloned()
    }

    /// Discovery listing for external dashboards.
    pub fn manifests(&self) -> Vec<SkillManifest> {
        self.skills.iter().map(|s| s.describe()).collect()
    }

    /// Dispatches a raw envelope under the registry's configured deadline.
    pub async fn dispatch(&self, raw: Value) -> Result<SkillResponse, SkillError> {
        self.dispatch_with_timeout(raw, self.timeout).await
    }

    /// Validates the raw envelope, resolves the skill, and runs it under the
    /// given deadline, stamping measured wall-clock `processing_time`.
    ///
    /// A skill-level execution error is folded into a failed response
    /// envelope so callers always see the contract; an unknown skill, a
    /// deadline overrun, or a response that breaks an invariant (wrong
    /// `request_id` echo, out-of-range confidence) is returned as an error.
    pub async fn dispatch_with_timeout(
        &self,
        raw: Value,
        deadline: Duration,
    ) -> Result<SkillResponse, SkillError> {
        let request = validate_request(raw)?;
        let skill = self
            .get(&request.skill_name)
            .ok_or_else(|| SkillError::UnknownSkill(request.skill_name.clone()))?;

        debug!(
            skill = %request.skill_name,
            request_id = %request.request_id,
            "dispatching skill"
        );

        let started = Instant::now();
        let outcome = tokio::time::timeout(deadline, skill.invoke(&request)).await;
        let elapsed = started.elapsed().as_secs_f64();

        let mut response = match outcome {
            Err(_) => {
                warn!(
                    skill = %request.skill_name,
                    secs = deadline.as_secs(),
                    "skill invocation exceeded deadline"
                );
                return Err(SkillError::Timeout {
                    skill: request.skill_name,
                    secs: deadline.as_secs(),
                });
            }
            Ok(Err(err)) => {
                warn!(
                    skill = %request.skill_name,
                    error = %err,
                    "skill failed, folding into failure envelope"
                );
                SkillResponse::failure(&request.request_id, err.to_string())
            }
            Ok(Ok(response)) => response,
        };
        response.processing_time = elapsed;

        if response.request_id != request.request_id {
            return Err(ValidationError::RequestIdMismatch {
                expected: request.request_id,
                got: response.request_id,
            }
            .into());
        }
        if !(0.0..=1.0).contains(&response.confidence) {
            return Err(ValidationError::ConfidenceOutOfRange {
                got: response.confidence,
            }
            .into());
        }

        Ok(response)
    }
}

impl Default for SkillRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_SKILL_TIMEOUT)
    }
}
