pub mod review_attempt;
pub mod scheduler;
pub mod word;

pub use review_attempt::ReviewAttempt;
pub use word::Word;
