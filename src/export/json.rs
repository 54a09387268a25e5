//! JSON export module for the word list.
//! Dumps every word with its scheduling state, for backup or inspection.

use crate::database::db;
use crate::error::Result;
use rusqlite::Connection;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Exports all words to a JSON file at the specified path.
/// Returns the number of words written.
pub fn export_json_to_path(conn: &Connection, path: &Path) -> Result<usize> {
    let words = db::get_all_words(conn)?;
    let json_string = serde_json::to_string_pretty(&words)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;
    Ok(words.len())
}
