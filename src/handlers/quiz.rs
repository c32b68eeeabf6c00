use std::collections::HashMap;

use axum::{
    extract::{Form, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use maud::Markup;
use serde::Deserialize;

use crate::{
    names,
    quiz::{self, AnswerPair},
    rejections::{AppError, ResultExt},
    utils, views,
    views::quiz as quiz_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/quiz-select", get(quiz_select))
        .route("/quiz", get(take_quiz).post(submit_quiz))
}

async fn quiz_select(State(state): State<AppState>) -> Markup {
    views::page(
        "Quiz",
        quiz_views::select_page(state.store.dictionaries()),
    )
}

#[derive(Deserialize)]
struct QuizQuery {
    dict: Option<String>,
    size: Option<String>,
}

async fn take_quiz(
    State(state): State<AppState>,
    Query(query): Query<QuizQuery>,
) -> Result<axum::response::Response, AppError> {
    let dict_id = query
        .dict
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or("cet4");
    let Some(dict) = state.store.dictionary(dict_id) else {
        return Err(AppError::Input("unknown dictionary"));
    };
    let dict = dict.clone();

    let size = utils::parse_or(query.size.as_deref(), names::DEFAULT_QUIZ_SIZE);

    let words = state
        .store
        .load(&dict.id)
        .reject("could not load word list")?;

    let items = match quiz::generate(&words, size) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!("cannot build quiz for '{}': {e}", dict.id);
            let page = views::page("Quiz", quiz_views::not_enough_data(&dict.name, e.have));
            return Ok((StatusCode::INTERNAL_SERVER_ERROR, page).into_response());
        }
    };

    tracing::debug!("generated {} questions for '{}'", items.len(), dict.id);

    let page = views::page(
        "Quiz",
        quiz_views::quiz_form(quiz_views::QuizFormData {
            dict_id: dict.id,
            dict_name: dict.name,
            items,
        }),
    );
    Ok(page.into_response())
}

/// Scores a submitted quiz. The form round-trips, for each index `i`, the
/// user's pick as `q{i}` and the originally-shown correct answer as
/// `right{i}`; the server keeps no quiz state between requests.
async fn submit_quiz(
    State(state): State<AppState>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Markup, AppError> {
    let dict_id = form
        .get("dict")
        .map(|d| d.trim())
        .filter(|d| !d.is_empty())
        .unwrap_or("cet4");
    let Some(dict) = state.store.dictionary(dict_id) else {
        return Err(AppError::Input("unknown dictionary"));
    };
    let dict = dict.clone();

    // A missing or negative question count grades as an empty submission;
    // counts above MAX_QUIZ_SIZE cannot come from a generated quiz.
    let total = utils::parse_or(form.get("qcount").map(String::as_str), 0)
        .clamp(0, names::MAX_QUIZ_SIZE) as usize;

    let answers: Vec<AnswerPair> = (0..total)
        .map(|i| AnswerPair {
            given: form.get(&format!("q{i}")).cloned().unwrap_or_default(),
            expected: form.get(&format!("right{i}")).cloned().unwrap_or_default(),
        })
        .collect();

    let result = state
        .scorer
        .score(&dict.id, &answers)
        .reject("could not record quiz result")?;

    tracing::info!(
        "quiz on '{}' scored {}/{} ({}%)",
        dict.id,
        result.correct,
        result.total,
        result.score
    );

    Ok(views::page(
        "Result",
        quiz_views::result_page(&dict.name, result),
    ))
}
