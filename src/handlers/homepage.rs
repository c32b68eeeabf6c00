use axum::{extract::State, routing::get, Router};
use maud::Markup;

use crate::{
    rejections::{AppError, ResultExt},
    views,
    views::homepage as homepage_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cover))
        .route("/home", get(home))
}

async fn cover() -> Markup {
    views::page("Welcome", homepage_views::cover())
}

/// Dictionary overview: each configured dictionary with how many usable
/// entries its word list currently holds.
async fn home(State(state): State<AppState>) -> Result<Markup, AppError> {
    let mut dicts = Vec::new();
    for dict in state.store.dictionaries() {
        let count = state
            .store
            .load(&dict.id)
            .reject("could not load word list")?
            .len();
        dicts.push(homepage_views::DictStatus {
            id: dict.id.clone(),
            name: dict.name.clone(),
            entries: count,
        });
    }

    Ok(views::page("Dictionaries", homepage_views::home(&dicts)))
}
