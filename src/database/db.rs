//! Database operations for the vocabulary drill.
//!
//! Handles SQLite initialization, word upserts, due-word queries
//! and the append-only review history.

use crate::error::Result;
use crate::models::{ReviewAttempt, Word};
use rusqlite::{Connection, Row, params};
use std::path::Path;
use std::time::{Duration, SystemTime};

/// Opens (creating if needed) the database file and ensures the schema exists.
pub fn init_database(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)?;
    bootstrap_schema(&conn)?;
    Ok(conn)
}

/// Creates the `words` and `repasos` tables if they do not exist.
pub fn bootstrap_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS words (
            id INTEGER PRIMARY KEY,
            word TEXT NOT NULL,
            definition TEXT,
            usage_example TEXT,
            next_review INTEGER NOT NULL,
            review_interval INTEGER NOT NULL DEFAULT 0,
            streak INTEGER NOT NULL DEFAULT 0
        )",
        (),
    )?;

    // Review history, one row per quiz interaction. Insert-only.
    conn.execute(
        "CREATE TABLE IF NOT EXISTS repasos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            word_id INTEGER NOT NULL,
            review_date INTEGER NOT NULL,
            spelled_correctly INTEGER NOT NULL,
            knew_definition INTEGER NOT NULL,
            knew_example INTEGER NOT NULL,
            time_taken_seconds REAL NOT NULL
        )",
        (),
    )?;

    Ok(())
}

fn unix_secs(time: SystemTime) -> i64 {
    time.duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

fn from_unix_secs(secs: i64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(secs.max(0) as u64)
}

fn word_from_row(row: &Row<'_>) -> rusqlite::Result<Word> {
    Ok(Word {
        id: row.get(0)?,
        text: row.get(1)?,
        definition: row.get(2)?,
        usage_example: row.get(3)?,
        next_review: from_unix_secs(row.get(4)?),
        review_interval: row.get(5)?,
        streak: row.get(6)?,
    })
}

/// Inserts a word, or updates its text fields if the id already exists.
///
/// Scheduling state is never touched on conflict, so re-imports do not reset
/// review progress. New words are scheduled immediately (`next_review = now`).
pub fn upsert_word(
    conn: &Connection,
    id: i64,
    text: &str,
    definition: Option<&str>,
    usage_example: Option<&str>,
    now: SystemTime,
) -> Result<()> {
    conn.execute(
        "INSERT INTO words (id, word, definition, usage_example, next_review, review_interval, streak)
         VALUES (?1, ?2, ?3, ?4, ?5, 0, 0)
         ON CONFLICT(id) DO UPDATE SET
             word = excluded.word,
             definition = excluded.definition,
             usage_example = excluded.usage_example",
        params![id, text, definition, usage_example, unix_secs(now)],
    )?;

    Ok(())
}

/// Retrieves a single word by id, or None if it does not exist.
pub fn get_word(conn: &Connection, id: i64) -> Result<Option<Word>> {
    let mut stmt = conn.prepare(
        "SELECT id, word, definition, usage_example, next_review, review_interval, streak
         FROM words
         WHERE id = ?1",
    )?;

    match stmt.query_row(params![id], word_from_row) {
        Ok(word) => Ok(Some(word)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Retrieves every word, ordered by id.
pub fn get_all_words(conn: &Connection) -> Result<Vec<Word>> {
    let mut stmt = conn.prepare(
        "SELECT id, word, definition, usage_example, next_review, review_interval, streak
         FROM words
         ORDER BY id ASC",
    )?;

    let words = stmt
        .query_map([], word_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(words)
}

/// Retrieves the words due for review at `now`.
///
/// Returns words where next_review <= now, most overdue first.
/// An empty result is the normal "nothing due" case.
pub fn get_due_words(conn: &Connection, now: SystemTime) -> Result<Vec<Word>> {
    let mut stmt = conn.prepare(
        "SELECT id, word, definition, usage_example, next_review, review_interval, streak
         FROM words
         WHERE next_review <= ?1
         ORDER BY next_review ASC",
    )?;

    let words = stmt
        .query_map(params![unix_secs(now)], word_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(words)
}

/// Writes a word's scheduling state back after a review attempt.
pub fn update_schedule(conn: &Connection, word: &Word) -> Result<()> {
    conn.execute(
        "UPDATE words
         SET review_interval = ?1, next_review = ?2, streak = ?3
         WHERE id = ?4",
        params![
            word.review_interval,
            unix_secs(word.next_review),
            word.streak,
            word.id
        ],
    )?;

    Ok(())
}

/// Appends one review attempt to the history log.
pub fn insert_attempt(conn: &Connection, attempt: &ReviewAttempt) -> Result<()> {
    conn.execute(
        "INSERT INTO repasos (word_id, review_date, spelled_correctly, knew_definition, knew_example, time_taken_seconds)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            attempt.word_id,
            unix_secs(attempt.timestamp),
            attempt.spelled_correctly,
            attempt.knew_definition,
            attempt.knew_example,
            attempt.time_taken_seconds,
        ],
    )?;

    Ok(())
}

/// Retrieves the review history of one word, oldest attempt first.
pub fn get_attempts_for_word(conn: &Connection, word_id: i64) -> Result<Vec<ReviewAttempt>> {
    let mut stmt = conn.prepare(
        "SELECT word_id, review_date, spelled_correctly, knew_definition, knew_example, time_taken_seconds
         FROM repasos
         WHERE word_id = ?1
         ORDER BY review_date ASC, id ASC",
    )?;

    let attempts = stmt
        .query_map(params![word_id], |row| {
            Ok(ReviewAttempt {
                word_id: row.get(0)?,
                timestamp: from_unix_secs(row.get(1)?),
                spelled_correctly: row.get(2)?,
                knew_definition: row.get(3)?,
                knew_example: row.get(4)?,
                time_taken_seconds: row.get(5)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(attempts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        bootstrap_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn test_new_word_is_due_immediately() {
        let conn = test_conn();
        let now = SystemTime::now();

        upsert_word(&conn, 1, "necessary", Some("required"), None, now).unwrap();

        let due = get_due_words(&conn, now).unwrap();
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].text, "necessary");
        assert_eq!(due[0].review_interval, 0);
        assert_eq!(due[0].streak, 0);
    }

    #[test]
    fn test_reimport_preserves_scheduling_state() {
        let conn = test_conn();
        let now = SystemTime::now();

        upsert_word(&conn, 1, "necessary", Some("required"), None, now).unwrap();

        // Simulate review progress
        let mut word = get_word(&conn, 1).unwrap().unwrap();
        word.review_interval = 4;
        word.streak = 2;
        word.next_review = now + Duration::from_secs(4 * 24 * 60 * 60);
        update_schedule(&conn, &word).unwrap();

        // Read the schedule back so the comparison is stored-vs-stored;
        // timestamps round-trip through whole unix seconds
        let stored = get_word(&conn, 1).unwrap().unwrap();

        // Re-import with changed text fields
        upsert_word(
            &conn,
            1,
            "necessary",
            Some("needed; essential"),
            Some("It is necessary to practice."),
            now + Duration::from_secs(60),
        )
        .unwrap();

        let after = get_word(&conn, 1).unwrap().unwrap();
        assert_eq!(after.review_interval, 4);
        assert_eq!(after.streak, 2);
        assert_eq!(after.next_review, stored.next_review);
        assert_eq!(after.definition.as_deref(), Some("needed; essential"));
        assert_eq!(
            after.usage_example.as_deref(),
            Some("It is necessary to practice.")
        );
    }

    #[test]
    fn test_due_words_ordered_most_overdue_first() {
        let conn = test_conn();
        let now = SystemTime::now();

        for (id, text) in [(1, "first"), (2, "second"), (3, "third")] {
            upsert_word(&conn, id, text, None, None, now).unwrap();
        }

        // Spread next_review: id 2 most overdue, id 3 not due at all
        let mut w1 = get_word(&conn, 1).unwrap().unwrap();
        w1.next_review = now - Duration::from_secs(60);
        update_schedule(&conn, &w1).unwrap();

        let mut w2 = get_word(&conn, 2).unwrap().unwrap();
        w2.next_review = now - Duration::from_secs(3600);
        update_schedule(&conn, &w2).unwrap();

        let mut w3 = get_word(&conn, 3).unwrap().unwrap();
        w3.next_review = now + Duration::from_secs(3600);
        update_schedule(&conn, &w3).unwrap();

        let due = get_due_words(&conn, now).unwrap();
        let ids: Vec<i64> = due.iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_no_due_words_is_empty_not_error() {
        let conn = test_conn();

        let due = get_due_words(&conn, SystemTime::now()).unwrap();
        assert!(due.is_empty());
    }

    #[test]
    fn test_attempt_history_appends_in_order() {
        let conn = test_conn();
        let now = SystemTime::now();

        upsert_word(&conn, 1, "rhythm", None, None, now).unwrap();

        let first = ReviewAttempt {
            word_id: 1,
            timestamp: now,
            spelled_correctly: false,
            knew_definition: true,
            knew_example: false,
            time_taken_seconds: 12.5,
        };
        let second = ReviewAttempt {
            word_id: 1,
            timestamp: now + Duration::from_secs(600),
            spelled_correctly: true,
            knew_definition: true,
            knew_example: true,
            time_taken_seconds: 4.0,
        };
        insert_attempt(&conn, &first).unwrap();
        insert_attempt(&conn, &second).unwrap();

        let history = get_attempts_for_word(&conn, 1).unwrap();
        assert_eq!(history.len(), 2);
        assert!(!history[0].spelled_correctly);
        assert!(history[1].spelled_correctly);
        assert_eq!(history[0].time_taken_seconds, 12.5);
    }

    #[test]
    fn test_get_word_missing_returns_none() {
        let conn = test_conn();

        assert!(get_word(&conn, 42).unwrap().is_none());
    }
}
