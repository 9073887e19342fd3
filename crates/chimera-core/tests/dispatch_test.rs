//! Integration test: registry dispatch path — validation, routing, deadline,
//! and response invariant checks.
//!
//! ## Scenarios
//! 1. A registered skill receives the validated request and its response is
//!    stamped with measured processing time.
//! 2. An unregistered skill name is a fatal `UnknownSkill` error.
//! 3. A skill-level execution error comes back as a failed response envelope.
//! 4. A skill that overruns the deadline surfaces as `Timeout`.
//! 5. A response that fails to echo the request id is rejected.
//! 6. Manifests expose identity and both envelope shapes for discovery.

use std::sync::Arc;
use std::time::Duration;

use chimera_core::{
    Skill, SkillError, SkillRegistry, SkillRequest, SkillResponse, ValidationError,
};
use serde_json::{json, Map, Value};

/// Echoes its parameters back with full certainty.
struct EchoSkill;

#[async_trait::async_trait]
impl Skill for EchoSkill {
    fn name(&self) -> &str {
        "echo"
    }

    fn description(&self) -> &str {
        "Echoes request parameters back in the result envelope."
    }

    async fn invoke(&self, request: &SkillRequest) -> Result<SkillResponse, SkillError> {
        let mut result = Map::new();
        result.insert("echo".into(), Value::Object(request.parameters.clone()));
        Ok(SkillResponse::success(&request.request_id, result, 1.0))
    }
}

/// Always fails internally.
struct FailingSkill;

#[async_trait::async_trait]
impl Skill for FailingSkill {
    fn name(&self) -> &str {
        "failing"
    }

    fn description(&self) -> &str {
        "Fails on every invocation."
    }

    async fn invoke(&self, _request: &SkillRequest) -> Result<SkillResponse, SkillError> {
        Err(SkillError::Execution("upstream model unavailable".into()))
    }
}

/// Sleeps past any reasonable test deadline.
struct SlowSkill;

#[async_trait::async_trait]
impl Skill for SlowSkill {
    fn name(&self) -> &str {
        "slow"
    }

    fn description(&self) -> &str {
        "Sleeps longer than the dispatch deadline."
    }

    async fn invoke(&self, request: &SkillRequest) -> Result<SkillResponse, SkillError> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok(SkillResponse::success(&request.request_id, Map::new(), 1.0))
    }
}

/// Responds with a foreign correlation id.
struct WrongIdSkill;

#[async_trait::async_trait]
impl Skill for WrongIdSkill {
    fn name(&self) -> &str {
        "wrong_id"
    }

    fn description(&self) -> &str {
        "Breaks the request_id echo invariant."
    }

    async fn invoke(&self, _request: &SkillRequest) -> Result<SkillResponse, SkillError> {
        Ok(SkillResponse::success("someone-elses-id", Map::new(), 1.0))
    }
}

fn registry() -> SkillRegistry {
    let mut registry = SkillRegistry::default();
    registry.register(Arc::new(EchoSkill));
    registry.register(Arc::new(FailingSkill));
    registry.register(Arc::new(SlowSkill));
    registry.register(Arc::new(WrongIdSkill));
    registry
}

#[tokio::test]
async fn dispatch_routes_and_stamps_processing_time() {
    let response = registry()
        .dispatch(json!({
            "skill_name": "echo",
            "parameters": {"topic": "launch post"},
            "request_id": "req_42",
        }))
        .await
        .unwrap();

    assert!(response.success);
    assert_eq!(response.request_id, "req_42");
    assert_eq!(response.confidence, 1.0);
    assert!(response.processing_time >= 0.0);
    assert_eq!(
        response.result.unwrap()["echo"],
        json!({"topic": "launch post"})
    );
}

#[tokio::test]
async fn dispatch_rejects_unknown_skill() {
    let err = registry()
        .dispatch(json!({
            "skill_name": "trend_fetcher",
            "parameters": {},
            "request_id": "req_1",
        }))
        .await
        .unwrap_err();
    assert!(matches!(err, SkillError::UnknownSkill(name) if name == "trend_fetcher"));
}

#[tokio::test]
async fn dispatch_rejects_malformed_envelope_before_routing() {
    let err = registry()
        .dispatch(json!({"skill_name": "echo"}))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SkillError::Validation(ValidationError::MissingField {
            field: "parameters"
        })
    ));
}

#[tokio::test]
async fn execution_failure_becomes_failed_envelope() {
    let response = registry()
        .dispatch(json!({
            "skill_name": "failing",
            "parameters": {},
            "request_id": "req_9",
        }))
        .await
        .unwrap();

    assert!(!response.success);
    assert!(response.result.is_none());
    assert_eq!(response.confidence, 0.0);
    assert_eq!(response.request_id, "req_9");
    assert!(response
        .error
        .unwrap()
        .contains("upstream model unavailable"));
}

#[tokio::test]
async fn deadline_overrun_is_a_timeout_error() {
    let err = registry()
        .dispatch_with_timeout(
            json!({
                "skill_name": "slow",
                "parameters": {},
                "request_id": "req_slow",
            }),
            Duration::from_millis(50),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, SkillError::Timeout { skill, .. } if skill == "slow"));
}

#[tokio::test]
async fn response_must_echo_request_id() {
    let err = registry()
        .dispatch(json!({
            "skill_name": "wrong_id",
            "parameters": {},
            "request_id": "req_7",
        }))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SkillError::Validation(ValidationError::RequestIdMismatch { .. })
    ));
}

#[tokio::test]
async fn manifests_expose_identity_and_shapes() {
    let manifests = registry().manifests();
    assert_eq!(manifests.len(), 4);

    let echo = manifests.iter().find(|m| m.name == "echo").unwrap();
    assert_eq!(echo.version, "1.0.0");
    assert!(!echo.description.is_empty());
    assert_eq!(echo.request_schema["skill_name"], "string");
    assert_eq!(echo.response_schema["confidence"], "number in [0.0, 1.0]");
}
