//! Append-only log entry for one quiz interaction. Never mutated or deleted.
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReviewAttempt {
    pub word_id: i64,
    pub timestamp: SystemTime,
    pub spelled_correctly: bool,
    pub knew_definition: bool,
    pub knew_example: bool,
    /// Elapsed time of the spelling phase.
    pub time_taken_seconds: f64,
}
