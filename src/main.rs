use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use vocab_drill::app;
use vocab_drill::database::db;

#[derive(Parser)]
#[command(
    name = "vocab-drill",
    about = "Vocabulary spelling drill with spaced repetition",
    version
)]
struct Cli {
    /// Path to the SQLite database file
    #[arg(long, global = true, default_value = "vocab.db")]
    db: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Import words from a CSV file (rows: id, word, definition, usage example)
    Import {
        /// CSV file to read
        file: PathBuf,
    },

    /// Review the words that are due right now
    Review {
        /// Skip text-to-speech playback
        #[arg(long)]
        no_audio: bool,
    },

    /// List all words with their scheduling state
    List,

    /// Export all words to a JSON file
    Export {
        /// Destination path
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let conn = db::init_database(&cli.db)
        .with_context(|| format!("failed to open database at {}", cli.db.display()))?;

    match cli.command {
        Command::Import { file } => app::run_import(&conn, &file)?,
        Command::Review { no_audio } => app::run_review(&conn, no_audio)?,
        Command::List => app::run_list(&conn)?,
        Command::Export { file } => app::run_export(&conn, &file)?,
    }

    Ok(())
}
