//! Command handlers for the CLI.
//! Wires the word store, the session runner and its collaborators together;
//! the connection is constructed once in `main` and passed down explicitly.

use crate::audio::{NullSpeaker, Speaker, SystemSpeaker};
use crate::database::db;
use crate::error::Result;
use crate::export::json::export_json_to_path;
use crate::import::csv::import_csv_from_path;
use crate::models::scheduler;
use crate::session::{ConsolePrompter, SessionRunner};
use chrono::{DateTime, Local};
use rusqlite::Connection;
use std::path::Path;
use std::time::SystemTime;

/// Formats SystemTime as a YYYY-MM-DD HH:MM string
fn format_system_time(time: SystemTime) -> String {
    let datetime: DateTime<Local> = time.into();
    datetime.format("%Y-%m-%d %H:%M").to_string()
}

pub fn run_import(conn: &Connection, file: &Path) -> Result<()> {
    let summary = import_csv_from_path(conn, file, SystemTime::now())?;
    println!(
        "Imported {} word(s), skipped {} invalid row(s).",
        summary.imported, summary.skipped
    );
    Ok(())
}

pub fn run_review(conn: &Connection, no_audio: bool) -> Result<()> {
    let speaker: Box<dyn Speaker> = if no_audio {
        Box::new(NullSpeaker)
    } else {
        Box::new(SystemSpeaker)
    };
    let mut prompter = ConsolePrompter;

    let mut runner = SessionRunner::new(conn, speaker.as_ref(), &mut prompter);
    runner.run(SystemTime::now())?;
    Ok(())
}

/// Prints every word with its scheduling state; due words are starred.
pub fn run_list(conn: &Connection) -> Result<()> {
    let now = SystemTime::now();
    let words = db::get_all_words(conn)?;

    if words.is_empty() {
        println!("No words imported yet.");
        return Ok(());
    }

    let due = words.iter().filter(|w| scheduler::is_due(w, now)).count();
    println!("{} word(s), {} due now.", words.len(), due);

    for word in &words {
        let marker = if scheduler::is_due(word, now) { "*" } else { " " };
        println!(
            "{} {:>5}  {:<24} interval {:>4}d  streak {:>3}  next {}",
            marker,
            word.id,
            word.text,
            word.review_interval,
            word.streak,
            format_system_time(word.next_review)
        );
    }

    Ok(())
}

pub fn run_export(conn: &Connection, file: &Path) -> Result<()> {
    let count = export_json_to_path(conn, file)?;
    println!("Exported {} word(s) to '{}'.", count, file.display());
    Ok(())
}
