//! Confidence gate: human-in-the-loop placement.
//!
//! The gate only classifies. Posting approved content, notifying reviewers,
//! and writing to a dashboard on escalation all belong to downstream
//! collaborators.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Threshold applied when none is configured.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.9;

/// Outcome of weighing a confidence score against the gate threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disposition {
    /// Confidence met the threshold; proceed automatically.
    Approved,
    /// Confidence fell short; route to manual review.
    Escalated,
}

impl Disposition {
    /// Wire strings consumed by existing dashboard mocks. Kept bit-exact.
    pub fn as_str(&self) -> &'static str {
        match self {
            Disposition::Approved => "APPROVED: Proceed to Post",
            Disposition::Escalated => {
                "ESCALATED: Human-in-the-Loop Required (Check Dashboard)"
            }
        }
    }
}

impl std::fmt::Display for Disposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies content by confidence against a threshold fixed at
/// construction. The threshold is immutable for the gate's lifetime.
#[derive(Debug, Clone)]
pub struct ConfidenceGate {
    threshold: f64,
}

impl ConfidenceGate {
    /// Gate with a fixed threshold, clamped to [0.0, 1.0].
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Equality with the threshold approves (closed lower bound on the
    /// approved side). `content` is opaque to the gate; it only feeds the
    /// escalation log line.
    pub fn evaluate(&self, content: &Value, confidence: f64) -> Disposition {
        if confidence >= self.threshold {
            Disposition::Approved
        } else {
            warn!(
                confidence,
                threshold = self.threshold,
                content_kind = content_kind(content),
                "confidence below threshold, escalating for human review"
            );
            Disposition::Escalated
        }
    }
}

impl Default for ConfidenceGate {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIDENCE_THRESHOLD)
    }
}

fn content_kind(content: &Value) -> &'static str {
    match content {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn below_threshold_escalates() {
        let gate = ConfidenceGate::default();
        assert_eq!(gate.evaluate(&json!("X"), 0.85), Disposition::Escalated);
    }

    #[test]
    fn equal_to_threshold_approves() {
        let gate = ConfidenceGate::default();
        assert_eq!(gate.evaluate(&json!("X"), 0.9), Disposition::Approved);
    }

    #[test]
    fn above_threshold_approves() {
        let gate = ConfidenceGate::new(0.5);
        assert_eq!(gate.evaluate(&json!("X"), 0.75), Disposition::Approved);
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(ConfidenceGate::new(1.7).threshold(), 1.0);
        assert_eq!(ConfidenceGate::new(-0.2).threshold(), 0.0);
    }

    #[test]
    fn wire_strings_are_bit_exact() {
        assert_eq!(Disposition::Approved.to_string(), "APPROVED: Proceed to Post");
        assert_eq!(
            Disposition::Escalated.to_string(),
            "ESCALATED: Human-in-the-Loop Required (Check Dashboard)"
        );
    }
}
