//! CSV word import.
//!
//! Rows are `id, word, definition, usage_example` without a header. Rows with
//! fewer than four fields, or with an id that is not an integer, are skipped
//! and counted; the rest of the file is still processed.

use crate::database::db;
use crate::error::Result;
use rusqlite::Connection;
use std::path::Path;
use std::time::SystemTime;

/// Outcome of one import run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

/// Imports words from a CSV file, upserting by id.
///
/// Existing words keep their scheduling state; only text fields are updated.
/// Each row is a single upsert, so a failure mid-file leaves earlier rows
/// applied and the word table consistent.
pub fn import_csv_from_path(
    conn: &Connection,
    path: &Path,
    now: SystemTime,
) -> Result<ImportSummary> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut summary = ImportSummary::default();

    for record in reader.records() {
        let record = record?;

        if record.len() < 4 {
            log::debug!("skipping row with {} field(s)", record.len());
            summary.skipped += 1;
            continue;
        }

        let id = match record[0].trim().parse::<i64>() {
            Ok(id) => id,
            Err(_) => {
                log::debug!("skipping row with non-numeric id '{}'", &record[0]);
                summary.skipped += 1;
                continue;
            }
        };

        let text = record[1].trim();
        let definition = non_empty(&record[2]);
        let usage_example = non_empty(&record[3]);

        db::upsert_word(
            conn,
            id,
            text,
            definition.as_deref(),
            usage_example.as_deref(),
            now,
        )?;
        summary.imported += 1;
    }

    log::info!(
        "import finished: {} imported, {} skipped",
        summary.imported,
        summary.skipped
    );
    Ok(summary)
}

fn non_empty(field: &str) -> Option<String> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
