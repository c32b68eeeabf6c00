//! The quiz core: sampling multiple-choice questions from a word list and
//! grading submitted answers.

use std::collections::HashSet;

use color_eyre::Result;
use rand::seq::SliceRandom;

use crate::{
    names,
    store::{QuizLog, QuizLogEntry, WordEntry},
};

/// One generated question: a prompt word, its correct meaning, and the
/// shuffled choices shown to the user.
#[derive(Clone, Debug)]
pub struct QuizItem {
    pub word: String,
    pub correct_answer: String,
    pub options: Vec<String>,
}

/// The dictionary is too small to build a multiple-choice question from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InsufficientData {
    pub have: usize,
}

impl std::fmt::Display for InsufficientData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "dictionary has {} usable entries, need at least {}",
            self.have,
            names::MIN_DICTIONARY_ENTRIES
        )
    }
}

impl std::error::Error for InsufficientData {}

/// Build a quiz of up to `requested` questions from `words`.
///
/// `requested` is clamped to `[1, 50]` and then to the dictionary size.
/// Questions are drawn without replacement; wrong options come from the
/// deduplicated meanings of the whole dictionary, so each item carries 4
/// unique options unless the meaning pool itself is smaller than that.
pub fn generate(words: &[WordEntry], requested: i64) -> Result<Vec<QuizItem>, InsufficientData> {
    if words.len() < names::MIN_DICTIONARY_ENTRIES {
        return Err(InsufficientData { have: words.len() });
    }

    let count = requested
        .clamp(names::MIN_QUIZ_SIZE, names::MAX_QUIZ_SIZE)
        .min(words.len() as i64) as usize;

    let mut rng = rand::thread_rng();
    let questions: Vec<&WordEntry> = words.choose_multiple(&mut rng, count).collect();

    let meanings: HashSet<&str> = words.iter().map(|w| w.meaning.as_str()).collect();

    let mut items = Vec::with_capacity(count);
    for entry in questions {
        let pool: Vec<&str> = meanings
            .iter()
            .copied()
            .filter(|m| *m != entry.meaning)
            .collect();

        let mut options: Vec<String> = pool
            .choose_multiple(&mut rng, names::WRONG_OPTIONS_PER_QUESTION)
            .map(|m| (*m).to_owned())
            .collect();
        options.push(entry.meaning.clone());
        options.shuffle(&mut rng);

        items.push(QuizItem {
            word: entry.word.clone(),
            correct_answer: entry.meaning.clone(),
            options,
        });
    }

    Ok(items)
}

/// One submitted answer alongside the expected one, round-tripped through
/// the form because the server keeps no quiz state between requests.
#[derive(Clone, Debug, Default)]
pub struct AnswerPair {
    pub given: String,
    pub expected: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizResult {
    pub total: u32,
    pub correct: u32,
    pub score: u32,
}

/// Grade a submission. An index counts as correct only when both sides are
/// non-empty and exactly equal. The score is the floored percentage, with
/// an empty submission scoring 0 rather than dividing by zero.
pub fn grade(answers: &[AnswerPair]) -> QuizResult {
    let total = answers.len() as u32;
    let correct = answers
        .iter()
        .filter(|a| !a.given.is_empty() && !a.expected.is_empty() && a.given == a.expected)
        .count() as u32;

    QuizResult {
        total,
        correct,
        score: correct * 100 / total.max(1),
    }
}

/// Grades submissions and records every attempt in the quiz log.
#[derive(Clone)]
pub struct Scorer {
    log: QuizLog,
}

impl Scorer {
    pub fn new(log: QuizLog) -> Self {
        Self { log }
    }

    /// Grade `answers` and append one log entry, unconditionally: a
    /// zero-question submission is still an attempt worth recording.
    pub fn score(&self, dict_name: &str, answers: &[AnswerPair]) -> Result<QuizResult> {
        let result = grade(answers);

        self.log.append(QuizLogEntry {
            dict_name: dict_name.to_owned(),
            total: result.total,
            correct: result.correct,
            score: result.score,
            created_at: String::new(),
        })?;

        Ok(result)
    }
}
