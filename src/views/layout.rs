use maud::{html, Markup, DOCTYPE};

use crate::{names, utils};

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";
        link rel="stylesheet" href="/static/index.css";
    }
}

fn header() -> Markup {
    html! {
        header {
            nav {
                ul {
                    li."secondary" {
                        a href="/" {
                            strong { "Lexiquiz" }
                        }
                    }
                }
                ul {
                    li { a href=(names::HOME_URL) { "Dictionaries" } }
                    li { a href=(names::QUIZ_SELECT_URL) { "Quiz" } }
                    li { a href=(names::STATS_URL) { "History" } }
                    li."secondary" { (utils::VERSION) }
                }
            }
        }
    }
}

fn main(body: Markup) -> Markup {
    html! {
        main { (body) }
    }
}

pub fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            meta name="color-scheme" content="light dark";

            (css())

            title { (format!("{title} - Lexiquiz")) }
        }

        body."container" {
            (header())
            (main(body))
        }
    }
}
