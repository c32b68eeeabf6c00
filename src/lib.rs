pub mod handlers;
pub mod names;
pub mod quiz;
pub mod rejections;
pub mod statics;
pub mod store;
pub mod utils;
pub mod views;

use axum::Router;

use crate::{
    quiz::Scorer,
    store::{QuizLog, WordStore},
};

#[derive(Clone)]
pub struct AppState {
    pub store: WordStore,
    pub scorer: Scorer,
    pub log: QuizLog,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::homepage::routes())
        .merge(handlers::learn::routes())
        .merge(handlers::quiz::routes())
        .merge(handlers::stats::routes())
        .nest("/static", statics::routes())
        .with_state(state)
}
