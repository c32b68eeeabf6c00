pub const HOME_URL: &str = "/home";
pub const QUIZ_SELECT_URL: &str = "/quiz-select";
pub const QUIZ_URL: &str = "/quiz";
pub const STATS_URL: &str = "/stats";
pub const CLEAR_STATS_URL: &str = "/stats/clear";

// Word-list paging
pub const DEFAULT_PAGE_SIZE: usize = 18;
pub const PAGE_SIZES: &[usize] = &[18, 24, 36, 48];

// Quiz sizing
pub const DEFAULT_QUIZ_SIZE: i64 = 10;
pub const MIN_QUIZ_SIZE: i64 = 1;
pub const MAX_QUIZ_SIZE: i64 = 50;

/// A dictionary needs one correct meaning plus three distinct wrong
/// candidates before a multiple-choice question can be built.
pub const MIN_DICTIONARY_ENTRIES: usize = 4;
pub const WRONG_OPTIONS_PER_QUESTION: usize = 3;

pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn learn_url(dict_id: &str, page: usize, size: usize) -> String {
    format!("/learn?dict={dict_id}&page={page}&size={size}")
}

pub fn quiz_url(dict_id: &str, size: i64) -> String {
    format!("/quiz?dict={dict_id}&size={size}")
}
