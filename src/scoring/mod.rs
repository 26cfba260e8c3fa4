//! Scoring engine: pure folds from raw answers to category statistics.
//!
//! Every function takes the question catalog as an argument; nothing here
//! reads process-wide state, writes to a store, or blocks.

pub mod dominant;
pub mod questions;
pub mod reverse;
pub mod tally;

pub use dominant::dominant_category;
pub use questions::{question_stats, QuestionStats};
pub use tally::tally_categories;
