//! Word is a vocabulary entry under spaced repetition.
//! Text fields come from the import source; scheduling fields belong to the scheduler.
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Word {
    /// Stable identifier, supplied by the import source.
    pub id: i64,
    /// The literal word or phrase to be spelled.
    pub text: String,
    pub definition: Option<String>,
    pub usage_example: Option<String>,
    /// Days until the next scheduled review; 0 means "due again within minutes".
    pub review_interval: i64,
    /// The word is due when this timestamp has passed.
    pub next_review: SystemTime,
    /// Incremented on success, decremented on failure; may go negative.
    pub streak: i64,
}
