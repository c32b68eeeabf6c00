use serde::{Deserialize, Serialize};

/// One row of a word list. `word` and `meaning` are non-empty by
/// construction; rows missing either are dropped at load time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordEntry {
    pub word: String,
    pub meaning: String,
    pub pos: String,
}

/// One completed quiz attempt, as persisted in the quiz log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizLogEntry {
    pub dict_name: String,
    pub total: u32,
    pub correct: u32,
    pub score: u32,
    /// `YYYY-MM-DD HH:MM:SS`; filled in on append when left empty.
    #[serde(default)]
    pub created_at: String,
}
