// Flat-file data access layer: CSV word lists and the JSON quiz log.

pub mod models;
pub use models::*;

mod log;
mod words;

pub use log::QuizLog;
pub use words::{DictConfig, WordStore};
