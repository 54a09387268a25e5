pub mod app;
pub mod audio;
pub mod database;
pub mod error;
pub mod export;
pub mod import;
pub mod models;
pub mod session;

pub use error::{Error, Result};
pub use models::{ReviewAttempt, Word};
