use std::{path::PathBuf, sync::Arc};

use color_eyre::Result;

use super::models::QuizLogEntry;
use crate::names;

/// Append-only quiz history backed by a single pretty-printed JSON array.
///
/// Every append is a read-modify-write of the whole document. Nothing
/// serializes concurrent writers, so simultaneous submissions can lose an
/// entry (last writer wins). Accepted at this scale; see DESIGN.md.
#[derive(Clone)]
pub struct QuizLog {
    path: Arc<PathBuf>,
}

impl QuizLog {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path: Arc::new(path),
        }
    }

    /// All entries, oldest first (the persisted order). A missing or
    /// malformed file reads as an empty log rather than an error.
    pub fn load(&self) -> Vec<QuizLogEntry> {
        let raw = match std::fs::read(self.path.as_ref()) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!("could not read quiz log {:?}: {e}", self.path);
                return Vec::new();
            }
        };

        match serde_json::from_slice(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("quiz log {:?} is malformed, treating as empty: {e}", self.path);
                Vec::new()
            }
        }
    }

    /// Append one entry, stamping `created_at` with the current local time
    /// when the caller left it empty.
    pub fn append(&self, mut entry: QuizLogEntry) -> Result<()> {
        if entry.created_at.is_empty() {
            entry.created_at = chrono::Local::now()
                .format(names::CREATED_AT_FORMAT)
                .to_string();
        }

        let mut entries = self.load();
        entries.push(entry);
        self.write(&entries)
    }

    pub fn clear(&self) -> Result<()> {
        self.write(&[])
    }

    fn write(&self, entries: &[QuizLogEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        // serde_json leaves non-ASCII text unescaped, as the log format wants.
        let json = serde_json::to_string_pretty(entries)?;
        std::fs::write(self.path.as_ref(), json)?;
        Ok(())
    }
}
