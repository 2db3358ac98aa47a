pub mod appresult;
pub mod config;
pub mod db;
pub mod messages;
pub mod participants;
pub mod sanitize;
pub mod sweeper;

use axum::{Router, extract::FromRef, http::HeaderMap};
use sqlx::SqlitePool;

pub use appresult::{AppError, AppResult};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub db_pool: SqlitePool,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(participants::router())
        .merge(messages::router())
        .with_state(state)
}

/// The acting user for message endpoints comes in the `User` header.
pub fn user_header(headers: &HeaderMap) -> AppResult<String> {
    let name = headers
        .get("user")
        .ok_or_else(|| AppError::Validation("missing User header".to_owned()))?
        .to_str()
        .map_err(|_| AppError::Validation("malformed User header".to_owned()))?;

    let name = sanitize::clean(name);
    if name.is_empty() {
        return Err(AppError::Validation("empty User header".to_owned()));
    }

    Ok(name)
}
