//! Analyze Sentiment skill: keyword-lexicon classification over a `text`
//! parameter.
//!
//! Confidence is derived from lexicon hit density rather than a constant, so
//! the gate sees an honest score: sparse matches escalate naturally while
//! dense, unambiguous text clears the default 0.9 threshold.

use chimera_core::{Skill, SkillError, SkillRequest, SkillResponse};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::debug;

const SKILL_NAME: &str = "analyze_sentiment";

const POSITIVE: &[&str] = &["great", "helpful", "thanks", "love", "excellent", "good"];
const NEGATIVE: &[&str] = &["angry", "terrible", "furious", "hate", "awful", "disappointed"];

#[derive(Debug, Deserialize)]
struct SentimentArgs {
    /// Text to classify.
    text: String,
}

/// Label plus a confidence from lexicon hit density. Zero hits stay at a low
/// floor; the score is capped below 1.0 because keyword matching is never
/// certain.
fn classify(text: &str) -> (&'static str, f64) {
    let lower = text.to_lowercase();
    let pos = POSITIVE.iter().filter(|w| lower.contains(**w)).count();
    let neg = NEGATIVE.iter().filter(|w| lower.contains(**w)).count();
    let hits = pos + neg;

    let label = if pos > neg {
        "positive"
    } else if neg > pos {
        "negative"
    } else {
        "neutral"
    };

    let words = lower.split_whitespace().count().max(1);
    let confidence = if hits == 0 {
        0.25
    } else {
        (0.5 + hits as f64 / words as f64).min(0.95)
    };
    (label, confidence)
}

/// Classifies short text by keyword lexicon. Local and pure; a live
/// deployment would swap the lexicon for a model behind the same envelope.
pub struct AnalyzeSentiment;

#[async_trait::async_trait]
impl Skill for AnalyzeSentiment {
    fn name(&self) -> &str {
        SKILL_NAME
    }

    fn description(&self) -> &str {
        "Classifies text sentiment from a keyword lexicon with hit-density confidence."
    }

    async fn invoke(&self, request: &SkillRequest) -> Result<SkillResponse, SkillError> {
        let args: SentimentArgs =
            match serde_json::from_value(Value::Object(request.parameters.clone())) {
                Ok(args) => args,
                Err(e) => {
                    return Ok(SkillResponse::failure(
                        &request.request_id,
                        format!("invalid parameters: {e}"),
                    ))
                }
            };

        let (label, confidence) = classify(&args.text);
        debug!(label, confidence, "sentiment classified");

        let mut result = Map::new();
        result.insert("sentiment".into(), json!(label));
        Ok(SkillResponse::success(&request.request_id, result, confidence))
    }
}
