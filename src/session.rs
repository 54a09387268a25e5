//! Interactive review session.
//!
//! Runs one pass over the words due right now: speak the word, collect a timed
//! spelling, reveal the supporting text, record the outcome and reschedule.
//! Console I/O goes through the `Prompter` capability so the loop can be
//! driven by a scripted prompter in tests.

use crate::audio::Speaker;
use crate::database::db;
use crate::error::Result;
use crate::models::{ReviewAttempt, scheduler};
use rusqlite::Connection;
use std::io::{self, Write};
use std::time::{Instant, SystemTime};

/// User interaction capability consumed by the session runner.
pub trait Prompter {
    /// Shows `prompt` and blocks for one line of input.
    fn prompt_text(&mut self, prompt: &str) -> io::Result<String>;

    /// Shows `prompt` and blocks for a yes/no answer.
    fn prompt_confirm(&mut self, prompt: &str) -> io::Result<bool>;

    /// Shows text to the user without expecting input.
    fn reveal(&mut self, text: &str);
}

/// Prompter backed by stdin/stdout. Waits indefinitely for input.
pub struct ConsolePrompter;

impl Prompter for ConsolePrompter {
    fn prompt_text(&mut self, prompt: &str) -> io::Result<String> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn prompt_confirm(&mut self, prompt: &str) -> io::Result<bool> {
        loop {
            let answer = self.prompt_text(&format!("{prompt} [y/n] "))?;
            match answer.trim().to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.reveal("Please answer y or n."),
            }
        }
    }

    fn reveal(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Totals for one finished session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub reviewed: usize,
    pub passed: usize,
}

/// Drives one pass over the due words, delegating speech and console I/O
/// to the injected collaborators.
pub struct SessionRunner<'a> {
    conn: &'a Connection,
    speaker: &'a dyn Speaker,
    prompter: &'a mut dyn Prompter,
}

impl<'a> SessionRunner<'a> {
    pub fn new(
        conn: &'a Connection,
        speaker: &'a dyn Speaker,
        prompter: &'a mut dyn Prompter,
    ) -> Self {
        Self {
            conn,
            speaker,
            prompter,
        }
    }

    /// Runs one review pass over the words due at `now`.
    ///
    /// Each word is handled to completion before the next: the attempt row
    /// and the schedule update are only written after the full interaction.
    /// Words failed here are rescheduled ten minutes out but are not retried
    /// within this pass.
    pub fn run(&mut self, now: SystemTime) -> Result<SessionSummary> {
        let due = db::get_due_words(self.conn, now)?;
        let mut summary = SessionSummary::default();

        if due.is_empty() {
            self.prompter.reveal("Nothing due for review. Come back later!");
            return Ok(summary);
        }

        self.prompter
            .reveal(&format!("{} word(s) due for review.\n", due.len()));

        for word in due {
            if let Err(e) = self.speaker.speak(&word.text) {
                log::warn!("audio playback failed for '{}': {e}", word.text);
                self.prompter
                    .reveal(&format!("(audio unavailable, the word is '{}')", word.text));
            }

            let started = Instant::now();
            let answer = self.prompter.prompt_text("Spell the word: ")?;
            let time_taken_seconds = started.elapsed().as_secs_f64();

            let spelled_correctly =
                answer.trim().to_lowercase() == word.text.trim().to_lowercase();

            if spelled_correctly {
                self.prompter.reveal("Correct!");
            } else {
                self.prompter
                    .reveal(&format!("Incorrect. The word was '{}'.", word.text));
            }
            if let Some(definition) = &word.definition {
                self.prompter.reveal(&format!("Definition: {definition}"));
            }
            if let Some(example) = &word.usage_example {
                self.prompter.reveal(&format!("Example: {example}"));
            }

            let knew_definition = self.prompter.prompt_confirm("Did you know the definition?")?;
            let knew_example = self.prompter.prompt_confirm("Did you know the usage example?")?;

            // Spelling alone is not enough; the definition must be known too.
            // Example recall is logged but does not gate progression.
            let all_correct = spelled_correctly && knew_definition;

            // One clock value for the reschedule and the history row
            let reviewed_at = SystemTime::now();
            let updated = scheduler::apply_outcome(&word, all_correct, reviewed_at);
            db::update_schedule(self.conn, &updated)?;

            db::insert_attempt(
                self.conn,
                &ReviewAttempt {
                    word_id: word.id,
                    timestamp: reviewed_at,
                    spelled_correctly,
                    knew_definition,
                    knew_example,
                    time_taken_seconds,
                },
            )?;

            summary.reviewed += 1;
            if all_correct {
                summary.passed += 1;
            }
            self.prompter.reveal("");
        }

        self.prompter.reveal(&format!(
            "Session complete: {}/{} passed.",
            summary.passed, summary.reviewed
        ));
        Ok(summary)
    }
}
