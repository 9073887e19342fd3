//! Explicit configuration for the skill core.
//!
//! Loaded by the process entry point that owns configuration lifecycle —
//! never implicitly at module import.
//!
//! | Env | Default | Description |
//! |-----|---------|--------------|
//! | CHIMERA_CONFIDENCE_THRESHOLD | 0.9 | Gate threshold, clamped to [0.0, 1.0]. |
//! | CHIMERA_SKILL_TIMEOUT_SECS | 30 | Per-invocation dispatch deadline. |

use std::time::Duration;

use crate::judge::{ConfidenceGate, DEFAULT_CONFIDENCE_THRESHOLD};
use crate::skill::SkillRegistry;

/// Per-invocation deadline applied when none is configured.
pub const DEFAULT_SKILL_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct CoreConfig {
    pub confidence_threshold: f64,
    pub skill_timeout: Duration,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            skill_timeout: DEFAULT_SKILL_TIMEOUT,
        }
    }
}

impl CoreConfig {
    /// Reads `.env` (if present) and then the process environment. Call once
    /// from the entry point.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Reads the process environment only. Unset or unparseable values fall
    /// back to defaults (see the env table above).
    pub fn from_env() -> Self {
        Self {
            confidence_threshold: env_f64(
                "CHIMERA_CONFIDENCE_THRESHOLD",
                DEFAULT_CONFIDENCE_THRESHOLD,
            )
            .clamp(0.0, 1.0),
            skill_timeout: Duration::from_secs(env_u64("CHIMERA_SKILL_TIMEOUT_SECS", 30)),
        }
    }

    /// Gate constructed from this config's threshold.
    pub fn gate(&self) -> ConfidenceGate {
        ConfidenceGate::new(self.confidence_threshold)
    }

    /// Empty registry constructed with this config's deadline.
    pub fn registry(&self) -> SkillRegistry {
        SkillRegistry::new(self.skill_timeout)
    }
}

fn env_f64(key: &str, default: f64) -> f64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
