//! Contract probe: diagnostic fixture that echoes its parameters back.
//!
//! Exists to verify the dispatch path end to end (validation, routing,
//! deadline, response invariants). Do not register it in production surfaces.

use chimera_core::{Skill, SkillError, SkillRequest, SkillResponse};
use serde_json::{Map, Value};

const SKILL_NAME: &str = "contract_probe";

/// Echoes `parameters` into the result and lists the context keys it saw.
/// The echo is exact, so confidence is 1.0 by construction.
pub struct ContractProbeSkill;

#[async_trait::async_trait]
impl Skill for ContractProbeSkill {
    fn name(&self) -> &str {
        SKILL_NAME
    }

    fn description(&self) -> &str {
        "Diagnostic probe: echoes request parameters back in the result envelope."
    }

    async fn invoke(&self, request: &SkillRequest) -> Result<SkillResponse, SkillError> {
        let mut result = Map::new();
        result.insert("echo".into(), Value::Object(request.parameters.clone()));
        if let Some(context) = &request.context {
            result.insert(
                "context_keys".into(),
                Value::Array(context.keys().cloned().map(Value::String).collect()),
            );
        }
        Ok(SkillResponse::success(&request.request_id, result, 1.0))
    }
}
