use maud::{html, Markup};

use crate::names;

pub fn cover() -> Markup {
    html! {
        section.cover-hero {
            h1 { "Learn words. Quiz yourself." }
            p.cover-desc {
                "Study CET-4, CET-6 and graduate-exam vocabulary, then check "
                "what stuck with quick multiple-choice quizzes."
            }
            div.cover-cta {
                a role="button" href=(names::HOME_URL) { "Start learning" }
                a role="button" href=(names::QUIZ_SELECT_URL) class="outline" { "Take a quiz" }
            }
        }
    }
}

pub struct DictStatus {
    pub id: String,
    pub name: String,
    pub entries: usize,
}

pub fn home(dicts: &[DictStatus]) -> Markup {
    html! {
        h1 { "Dictionaries" }
        div.dict-grid {
            @for dict in dicts {
                article.dict-card {
                    h3 { (dict.name) }
                    @if dict.entries == 0 {
                        p.dict-missing { "No data loaded" }
                    } @else {
                        p { (dict.entries) " words" }
                    }
                    footer {
                        a role="button" href=(names::learn_url(&dict.id, 1, names::DEFAULT_PAGE_SIZE)) {
                            "Study"
                        }
                        a role="button" class="outline"
                          href=(names::quiz_url(&dict.id, names::DEFAULT_QUIZ_SIZE)) {
                            "Quiz"
                        }
                    }
                }
            }
        }
    }
}
