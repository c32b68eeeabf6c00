#![allow(dead_code)]

use std::path::{Path, PathBuf};

use lexiquiz::{
    quiz::Scorer,
    store::{QuizLog, WordStore},
    AppState,
};

/// Fresh per-test data directory under the system temp dir.
pub fn test_data_dir() -> PathBuf {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!("lexiquiz_test_{}_{}", std::process::id(), id));
    // Clean up leftovers from previous runs
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("failed to create test data dir");
    dir
}

/// Write a word-list CSV for dictionary `id` into `dir`.
pub fn write_words(dir: &Path, id: &str, rows: &[(&str, &str, &str)]) {
    let mut csv = String::from("word,meaning,pos\n");
    for (word, meaning, pos) in rows {
        csv.push_str(&format!("{word},{meaning},{pos}\n"));
    }
    std::fs::write(dir.join(format!("{id}.csv")), csv).expect("failed to write word list");
}

/// `n` distinct entries with ASCII meanings, convenient for form round-trips.
pub fn sample_rows(n: usize) -> Vec<(String, String, String)> {
    (0..n)
        .map(|i| (format!("word{i}"), format!("meaning{i}"), "n.".to_string()))
        .collect()
}

pub fn write_sample_words(dir: &Path, id: &str, n: usize) {
    let rows = sample_rows(n);
    let borrowed: Vec<(&str, &str, &str)> = rows
        .iter()
        .map(|(w, m, p)| (w.as_str(), m.as_str(), p.as_str()))
        .collect();
    write_words(dir, id, &borrowed);
}

pub fn app_state(dir: &Path) -> AppState {
    let log = QuizLog::new(dir.join("quiz_log.json"));
    AppState {
        store: WordStore::standard(dir),
        scorer: Scorer::new(log.clone()),
        log,
    }
}
