use axum::{
    extract::State,
    response::Redirect,
    routing::{get, post},
    Router,
};
use maud::Markup;

use crate::{
    names,
    rejections::{AppError, ResultExt},
    views,
    views::stats as stats_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(stats))
        .route("/stats/clear", post(clear))
}

async fn stats(State(state): State<AppState>) -> Markup {
    // The log persists oldest first; display wants the latest attempt on top.
    let mut entries = state.log.load();
    entries.reverse();

    views::page("History", stats_views::history(&entries))
}

async fn clear(State(state): State<AppState>) -> Result<Redirect, AppError> {
    state.log.clear().reject("could not clear quiz history")?;
    tracing::info!("quiz history cleared");

    Ok(Redirect::to(names::STATS_URL))
}
