//! Typed request/response envelopes shared by every skill.
//!
//! `validate_request` and `validate_response` are the only way untyped JSON
//! enters the system: both are pure parse functions — same input, same output
//! or same failure, no hidden state. Payload fields (`parameters`, `context`,
//! `result`) stay JSON objects so heterogeneous collaborators (trend fetch,
//! content generation, transaction execution) can share one contract.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Standard input contract for all skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRequest {
    /// Skill name used for registry routing.
    pub skill_name: String,
    /// Skill-specific arguments.
    pub parameters: Map<String, Value>,
    /// Optional call-scoped auxiliary data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Map<String, Value>>,
    /// Caller-supplied correlation token. Must be non-empty; never defaulted.
    pub request_id: String,
}

impl SkillRequest {
    /// Builds a request with a fresh v4 correlation id.
    pub fn new(skill_name: impl Into<String>, parameters: Map<String, Value>) -> Self {
        Self {
            skill_name: skill_name.into(),
            parameters,
            context: None,
            request_id: uuid::Uuid::new_v4().to_string(),
        }
    }

    pub fn with_context(mut self, context: Map<String, Value>) -> Self {
        self.context = Some(context);
        self
    }
}

/// Standard output contract for all skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillResponse {
    pub success: bool,
    /// Present iff `success` is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Map<String, Value>>,
    /// Present iff `success` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// How certain the skill is in its own result, in [0.0, 1.0].
    pub confidence: f64,
    /// Wall-clock seconds; stamped by dispatch.
    pub processing_time: f64,
    /// Echoes the originating request's id.
    pub request_id: String,
}

impl SkillResponse {
    /// Successful envelope. `processing_time` starts at zero; the registry
    /// stamps the measured wall-clock value during dispatch.
    pub fn success(request_id: &str, result: Map<String, Value>, confidence: f64) -> Self {
        Self {
            success: true,
            result: Some(result),
            error: None,
            confidence,
            processing_time: 0.0,
            request_id: request_id.to_string(),
        }
    }

    /// Failed envelope with zero confidence.
    pub fn failure(request_id: &str, error: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(error.into()),
            confidence: 0.0,
            processing_time: 0.0,
            request_id: request_id.to_string(),
        }
    }
}

/// Constructs a [`SkillRequest`] from an untyped JSON value.
pub fn validate_request(raw: Value) -> Result<SkillRequest, ValidationError> {
    let obj = as_envelope_object(raw)?;
    let skill_name = required_str(&obj, "skill_name")?;
    let parameters = required_object(&obj, "parameters")?;
    let context = optional_object(&obj, "context")?;
    let request_id = required_str(&obj, "request_id")?;
    if request_id.is_empty() {
        return Err(ValidationError::EmptyRequestId);
    }
    Ok(SkillRequest {
        skill_name,
        parameters,
        context,
        request_id,
    })
}

/// Constructs a [`SkillResponse`] from an untyped JSON value.
///
/// The confidence range is checked before the result/error exclusivity
/// invariant, so an out-of-range confidence is always reported as such.
pub fn validate_response(raw: Value) -> Result<SkillResponse, ValidationError> {
    let obj = as_envelope_object(raw)?;
    let success = required_bool(&obj, "success")?;
    let result = optional_object(&obj, "result")?;
    let error = optional_str(&obj, "error")?;
    let confidence = required_f64(&obj, "confidence")?;
    let processing_time = required_f64(&obj, "processing_time")?;
    let request_id = required_str(&obj, "request_id")?;

    if request_id.is_empty() {
        return Err(ValidationError::EmptyRequestId);
    }
    if !(0.0..=1.0).contains(&confidence) {
        return Err(ValidationError::ConfidenceOutOfRange { got: confidence });
    }
    if processing_time < 0.0 {
        return Err(ValidationError::NegativeProcessingTime {
            got: processing_time,
        });
    }
    if success != result.is_some() {
        return Err(ValidationError::ResultSuccessMismatch {
            success,
            has_result: result.is_some(),
        });
    }
    if success == error.is_some() {
        return Err(ValidationError::ErrorSuccessMismatch {
            success,
            has_error: error.is_some(),
        });
    }

    Ok(SkillResponse {
        success,
        result,
        error,
        confidence,
        processing_time,
        request_id,
    })
}

/// Shape document for the request envelope, for discovery surfaces.
pub fn request_schema() -> Value {
    serde_json::json!({
        "skill_name": "string",
        "parameters": "object",
        "context": "object|null",
        "request_id": "string (non-empty, caller-supplied)",
    })
}

/// Shape document for the response envelope.
pub fn response_schema() -> Value {
    serde_json::json!({
        "success": "boolean",
        "result": "object (present iff success)",
        "error": "string (present iff failure)",
        "confidence": "number in [0.0, 1.0]",
        "processing_time": "seconds, non-negative",
        "request_id": "string (echoes the request)",
    })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn as_envelope_object(raw: Value) -> Result<Map<String, Value>, ValidationError> {
    match raw {
        Value::Object(map) => Ok(map),
        other => Err(ValidationError::WrongType {
            field: "envelope",
            expected: "an object",
            actual: json_type(&other).to_string(),
        }),
    }
}

fn required_str(obj: &Map<String, Value>, field: &'static str) -> Result<String, ValidationError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingField { field }),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(ValidationError::WrongType {
            field,
            expected: "a string",
            actual: json_type(other).to_string(),
        }),
    }
}

fn optional_str(
    obj: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, ValidationError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ValidationError::WrongType {
            field,
            expected: "a string",
            actual: json_type(other).to_string(),
        }),
    }
}

fn required_object(
    obj: &Map<String, Value>,
    field: &'static str,
) -> Result<Map<String, Value>, ValidationError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingField { field }),
        Some(Value::Object(map)) => Ok(map.clone()),
        Some(other) => Err(ValidationError::WrongType {
            field,
            expected: "an object",
            actual: json_type(other).to_string(),
        }),
    }
}

fn optional_object(
    obj: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<Map<String, Value>>, ValidationError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map.clone())),
        Some(other) => Err(ValidationError::WrongType {
            field,
            expected: "an object",
            actual: json_type(other).to_string(),
        }),
    }
}

fn required_bool(obj: &Map<String, Value>, field: &'static str) -> Result<bool, ValidationError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingField { field }),
        Some(Value::Bool(b)) => Ok(*b),
        Some(other) => Err(ValidationError::WrongType {
            field,
            expected: "a boolean",
            actual: json_type(other).to_string(),
        }),
    }
}

fn required_f64(obj: &Map<String, Value>, field: &'static str) -> Result<f64, ValidationError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingField { field }),
        Some(Value::Number(n)) => n.as_f64().ok_or(ValidationError::WrongType {
            field,
            expected: "a number",
            actual: "number (out of f64 range)".to_string(),
        }),
        Some(other) => Err(ValidationError::WrongType {
            field,
            expected: "a number",
            actual: json_type(other).to_string(),
        }),
    }
}
