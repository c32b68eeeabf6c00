use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use color_eyre::Result;

use super::models::WordEntry;

/// One entry of the dictionary registry: a stable id used in URLs, a
/// display name, and the CSV file backing it.
#[derive(Clone, Debug)]
pub struct DictConfig {
    pub id: String,
    pub name: String,
    pub path: PathBuf,
}

/// Registry of the allowed dictionaries plus the loader for their word
/// lists. Word lists are read fresh on every load; nothing is cached.
#[derive(Clone)]
pub struct WordStore {
    dicts: Arc<Vec<DictConfig>>,
}

impl WordStore {
    pub fn new(dicts: Vec<DictConfig>) -> Self {
        Self {
            dicts: Arc::new(dicts),
        }
    }

    /// The registry shipped with the app: CET-4, CET-6 and the graduate
    /// exam list, each backed by `<data_dir>/<id>.csv`.
    pub fn standard(data_dir: &Path) -> Self {
        let dict = |id: &str, name: &str| DictConfig {
            id: id.to_owned(),
            name: name.to_owned(),
            path: data_dir.join(format!("{id}.csv")),
        };

        Self::new(vec![
            dict("cet4", "CET-4"),
            dict("cet6", "CET-6"),
            dict("kaoyan", "考研英语"),
        ])
    }

    pub fn dictionaries(&self) -> &[DictConfig] {
        &self.dicts
    }

    /// Resolve a dictionary id. Callers reject unknown ids as client input
    /// errors before any file access happens.
    pub fn dictionary(&self, id: &str) -> Option<&DictConfig> {
        self.dicts.iter().find(|d| d.id == id)
    }

    /// Load a dictionary's word list. A missing file is not an error: it
    /// yields an empty list, which callers surface as a reportable
    /// condition. Rows without a word or a meaning are dropped; fields are
    /// trimmed.
    pub fn load(&self, id: &str) -> Result<Vec<WordEntry>> {
        let Some(dict) = self.dictionary(id) else {
            return Ok(Vec::new());
        };

        let raw = match std::fs::read(&dict.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("word list {:?} does not exist", dict.path);
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        // Word lists exported from spreadsheets often carry a UTF-8 BOM.
        let raw = raw.strip_prefix(b"\xef\xbb\xbf").unwrap_or(&raw);
        let text = String::from_utf8_lossy(raw);

        Ok(parse_word_list(&text, &dict.id))
    }
}

/// Parse CSV text with header-derived `word`/`meaning`/`pos` columns.
fn parse_word_list(text: &str, dict_id: &str) -> Vec<WordEntry> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns = match reader.headers() {
        Ok(headers) => {
            let find = |name: &str| headers.iter().position(|h| h.trim() == name);
            (find("word"), find("meaning"), find("pos"))
        }
        Err(e) => {
            tracing::warn!("word list '{dict_id}' has an unreadable header: {e}");
            return Vec::new();
        }
    };
    let (Some(word_col), Some(meaning_col), pos_col) = (columns.0, columns.1, columns.2) else {
        tracing::warn!("word list '{dict_id}' is missing the word or meaning column");
        return Vec::new();
    };

    let mut entries = Vec::new();
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("skipping unreadable row in '{dict_id}': {e}");
                continue;
            }
        };

        let field = |col: usize| record.get(col).unwrap_or("").trim();
        let word = field(word_col);
        let meaning = field(meaning_col);
        if word.is_empty() || meaning.is_empty() {
            continue;
        }

        entries.push(WordEntry {
            word: word.to_owned(),
            meaning: meaning.to_owned(),
            pos: pos_col.map(field).unwrap_or_default().to_owned(),
        });
    }

    entries
}
