//! Spaced repetition scheduling core.
//!
//! A stripped-down Leitner-style scheduler driven by a single boolean outcome:
//! - A word is due when its `next_review` timestamp has passed
//! - Success: interval goes 0 → 1 day, then doubles without bound; streak +1
//! - Failure: interval resets to 0 and the word comes back in ten minutes; streak -1
//! - State per word is just one integer and one timestamp (no easiness factors)

use super::Word;
use std::time::{Duration, SystemTime};

/// Delay before a failed word reappears, instead of a full day.
const RETRY_DELAY: Duration = Duration::from_secs(10 * 60);

/// Returns true when the word's scheduled review time has arrived or passed.
pub fn is_due(word: &Word, now: SystemTime) -> bool {
    word.next_review <= now
}

/// Calculates the word's new scheduling state from one review outcome.
///
/// `all_correct` means the word was spelled correctly AND the definition was
/// recalled; example recall does not gate progression.
pub fn apply_outcome(word: &Word, all_correct: bool, now: SystemTime) -> Word {
    let mut updated = word.clone();

    if all_correct {
        // First success promotes to 1 day, later successes double
        updated.review_interval = if word.review_interval == 0 {
            1
        } else {
            word.review_interval * 2
        };
        updated.streak = word.streak + 1;
        updated.next_review =
            now + Duration::from_secs((updated.review_interval as u64) * 24 * 60 * 60);
    } else {
        // Any miss resets progress; streak has no floor
        updated.review_interval = 0;
        updated.streak = word.streak - 1;
        updated.next_review = now + RETRY_DELAY;
    }

    updated
}
