use maud::{html, Markup};

use crate::{names, store::QuizLogEntry};

/// Quiz history, already ordered most recent first by the handler.
pub fn history(entries: &[QuizLogEntry]) -> Markup {
    html! {
        h1 { "Quiz history" }

        @if entries.is_empty() {
            p { "No quizzes taken yet." }
            p { a role="button" href=(names::QUIZ_SELECT_URL) { "Take your first quiz" } }
        } @else {
            table.history-table {
                thead {
                    tr {
                        th { "When" }
                        th { "Dictionary" }
                        th { "Questions" }
                        th { "Correct" }
                        th { "Score" }
                    }
                }
                tbody {
                    @for entry in entries {
                        tr {
                            td { (entry.created_at) }
                            td { (entry.dict_name) }
                            td { (entry.total) }
                            td { (entry.correct) }
                            td { strong { (entry.score) "%" } }
                        }
                    }
                }
            }

            form action=(names::CLEAR_STATS_URL) method="post" {
                input type="submit" class="secondary" value="Clear history";
            }
        }
    }
}
