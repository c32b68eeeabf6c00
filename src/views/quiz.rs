use maud::{html, Markup};

use crate::{
    names,
    quiz::{QuizItem, QuizResult},
    store::DictConfig,
};

pub fn select_page(dicts: &[DictConfig]) -> Markup {
    html! {
        h1 { "Take a quiz" }
        article style="width: fit-content;" {
            form action=(names::QUIZ_URL) method="get" {
                label {
                    "Dictionary"
                    select name="dict" {
                        @for dict in dicts {
                            option value=(dict.id) { (dict.name) }
                        }
                    }
                }
                label {
                    "Number of questions"
                    input type="number" name="size"
                          value=(names::DEFAULT_QUIZ_SIZE)
                          min=(names::MIN_QUIZ_SIZE)
                          max=(names::MAX_QUIZ_SIZE);
                }
                input type="submit" value="Start";
            }
        }
    }
}

pub struct QuizFormData {
    pub dict_id: String,
    pub dict_name: String,
    pub items: Vec<QuizItem>,
}

/// The quiz form. Each question carries a hidden `right{i}` field with the
/// correct answer so the scoring request is self-contained.
pub fn quiz_form(data: QuizFormData) -> Markup {
    html! {
        h1 { "Quiz: " mark { (data.dict_name) } }
        form action=(names::QUIZ_URL) method="post" {
            input type="hidden" name="dict" value=(data.dict_id);
            input type="hidden" name="qcount" value=(data.items.len());

            @for (i, item) in data.items.iter().enumerate() {
                article.quiz-question {
                    h3 { (i + 1) ". " (item.word) }
                    input type="hidden" name=(format!("right{i}")) value=(item.correct_answer);
                    fieldset {
                        @for option in &item.options {
                            label {
                                input type="radio" name=(format!("q{i}")) value=(option);
                                (option)
                            }
                        }
                    }
                }
            }

            input type="submit" value="Submit answers";
        }
    }
}

pub fn not_enough_data(dict_name: &str, have: usize) -> Markup {
    html! {
        h1 { "Not enough words" }
        p {
            mark { (dict_name) }
            " has only " (have) " usable entries; a quiz needs at least "
            (names::MIN_DICTIONARY_ENTRIES) "."
        }
        p { a href=(names::QUIZ_SELECT_URL) { "Pick another dictionary" } }
    }
}

pub fn result_page(dict_name: &str, result: QuizResult) -> Markup {
    html! {
        h1 { "Result" }
        article.quiz-result {
            p { "Dictionary: " mark { (dict_name) } }
            p {
                "You answered " strong { (result.correct) }
                " of " (result.total) " correctly."
            }
            h2.score { (result.score) "%" }
            footer {
                a role="button" href=(names::QUIZ_SELECT_URL) { "Another quiz" }
                a role="button" class="outline" href=(names::STATS_URL) { "History" }
            }
        }
    }
}
