mod common;

use std::collections::HashSet;

use common::test_data_dir;
use lexiquiz::{
    quiz::{generate, grade, AnswerPair, InsufficientData, Scorer},
    store::{QuizLog, WordEntry},
};

fn words(n: usize) -> Vec<WordEntry> {
    (0..n)
        .map(|i| WordEntry {
            word: format!("word{i}"),
            meaning: format!("meaning{i}"),
            pos: "n.".to_string(),
        })
        .collect()
}

fn pair(given: &str, expected: &str) -> AnswerPair {
    AnswerPair {
        given: given.to_string(),
        expected: expected.to_string(),
    }
}

// --- Generation ---

#[test]
fn items_have_four_unique_options_including_the_answer() {
    let dict = words(20);
    let items = generate(&dict, 10).unwrap();
    assert_eq!(items.len(), 10);

    let all_meanings: HashSet<&str> = dict.iter().map(|w| w.meaning.as_str()).collect();
    for item in &items {
        let options: HashSet<&str> = item.options.iter().map(String::as_str).collect();
        assert_eq!(options.len(), 4, "options must be unique");
        assert_eq!(item.options.len(), 4);
        assert!(options.contains(item.correct_answer.as_str()));
        for option in &options {
            assert!(
                all_meanings.contains(option),
                "option '{option}' is not a dictionary meaning"
            );
        }
    }
}

#[test]
fn questions_are_sampled_without_replacement() {
    let dict = words(10);
    let items = generate(&dict, 10).unwrap();

    let prompts: HashSet<&str> = items.iter().map(|i| i.word.as_str()).collect();
    assert_eq!(prompts.len(), items.len(), "duplicate prompt words");
}

#[test]
fn too_small_dictionary_is_insufficient() {
    for n in 0..4 {
        let result = generate(&words(n), 10);
        assert_eq!(result.unwrap_err(), InsufficientData { have: n });
    }
    assert!(generate(&words(4), 10).is_ok());
}

#[test]
fn requested_count_is_clamped() {
    let dict = words(100);

    // 0 and negative clamp up to a single question
    assert_eq!(generate(&dict, 0).unwrap().len(), 1);
    assert_eq!(generate(&dict, -7).unwrap().len(), 1);

    // Huge requests clamp to 50
    assert_eq!(generate(&dict, 1000).unwrap().len(), 50);

    // ...or to the dictionary size when that is smaller
    let small = words(6);
    assert_eq!(generate(&small, 1000).unwrap().len(), 6);
}

#[test]
fn duplicate_meanings_shrink_the_option_pool() {
    // 5 entries but only 2 distinct meanings: 1 correct + 1 wrong candidate
    let dict: Vec<WordEntry> = (0..5)
        .map(|i| WordEntry {
            word: format!("word{i}"),
            meaning: if i % 2 == 0 { "even" } else { "odd" }.to_string(),
            pos: String::new(),
        })
        .collect();

    let items = generate(&dict, 3).unwrap();
    for item in &items {
        let options: HashSet<&str> = item.options.iter().map(String::as_str).collect();
        assert_eq!(options.len(), 2);
        assert!(options.contains(item.correct_answer.as_str()));
    }
}

// --- Grading ---

#[test]
fn grading_is_a_floored_percentage() {
    let answers: Vec<AnswerPair> = (0..10)
        .map(|i| {
            if i < 7 {
                pair("a", "a")
            } else {
                pair("a", "b")
            }
        })
        .collect();
    let result = grade(&answers);
    assert_eq!(result.total, 10);
    assert_eq!(result.correct, 7);
    assert_eq!(result.score, 70);

    let result = grade(&[pair("x", "x"), pair("x", "y"), pair("", "z")]);
    assert_eq!(result.score, 33, "1/3 floors to 33");
}

#[test]
fn empty_submission_scores_zero_without_panicking() {
    let result = grade(&[]);
    assert_eq!(result.total, 0);
    assert_eq!(result.correct, 0);
    assert_eq!(result.score, 0);
}

#[test]
fn blank_answers_never_count_as_correct() {
    // Both sides empty is not a match, even though "" == ""
    let result = grade(&[pair("", ""), pair("a", ""), pair("", "a")]);
    assert_eq!(result.correct, 0);
}

#[test]
fn grading_is_idempotent() {
    let answers = vec![pair("a", "a"), pair("b", "c")];
    assert_eq!(grade(&answers), grade(&answers));
}

// --- Scorer side effect ---

#[test]
fn scorer_records_every_attempt() {
    let dir = test_data_dir();
    let log = QuizLog::new(dir.join("quiz_log.json"));
    let scorer = Scorer::new(log.clone());

    let result = scorer
        .score("cet4", &[pair("a", "a"), pair("b", "c")])
        .unwrap();
    assert_eq!(result.score, 50);

    let entries = log.load();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].dict_name, "cet4");
    assert_eq!(entries[0].total, 2);
    assert_eq!(entries[0].correct, 1);
    assert_eq!(entries[0].score, 50);
    assert!(!entries[0].created_at.is_empty());
}

#[test]
fn scorer_records_zero_question_submissions_too() {
    let dir = test_data_dir();
    let log = QuizLog::new(dir.join("quiz_log.json"));
    let scorer = Scorer::new(log.clone());

    let result = scorer.score("cet6", &[]).unwrap();
    assert_eq!(result.score, 0);

    let entries = log.load();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].total, 0);
    assert_eq!(entries[0].score, 0);
}
