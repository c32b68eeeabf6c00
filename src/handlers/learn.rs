use axum::{
    extract::{Query, State},
    routing::get,
    Router,
};
use maud::Markup;
use serde::Deserialize;

use crate::{
    names,
    rejections::{AppError, ResultExt},
    utils, views,
    views::learn as learn_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/learn", get(learn))
}

// Numeric fields arrive as strings so malformed values can fall back to
// defaults instead of failing deserialization.
#[derive(Deserialize)]
struct LearnQuery {
    dict: Option<String>,
    page: Option<String>,
    size: Option<String>,
}

async fn learn(
    State(state): State<AppState>,
    Query(query): Query<LearnQuery>,
) -> Result<Markup, AppError> {
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

    let page = utils::parse_or(query.page.as_deref(), 1).max(1) as usize;
    let size = utils::parse_or(query.size.as_deref(), names::DEFAULT_PAGE_SIZE as i64) as usize;
    let size = if names::PAGE_SIZES.contains(&size) {
        size
    } else {
        names::DEFAULT_PAGE_SIZE
    };

    let words = state
        .store
        .load(&dict.id)
        .reject("could not load word list")?;
    if words.is_empty() {
        tracing::warn!("word list for '{}' is missing or empty", dict.id);
        return Err(AppError::Internal("word list is missing or empty"));
    }

    let total_pages = words.len().div_ceil(size).max(1);
    let page = page.min(total_pages);
    let start = (page - 1) * size;
    let words = words[start..(start + size).min(words.len())].to_vec();

    Ok(views::page(
        &dict.name.clone(),
        learn_views::word_list(learn_views::WordListData {
            dict_id: dict.id,
            dict_name: dict.name,
            words,
            page,
            size,
            total_pages,
        }),
    ))
}
