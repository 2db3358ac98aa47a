use axum::{Json, debug_handler, extract::State, http::StatusCode};
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::info;

use crate::{
    AppError, AppResult, messages, sanitize,
    db::{self, Message},
};

#[derive(Deserialize)]
pub(crate) struct JoinBody {
    name: String,
}

#[debug_handler]
pub(crate) async fn join(
    State(db_pool): State<SqlitePool>,
    Json(JoinBody { name }): Json<JoinBody>,
) -> AppResult<StatusCode> {
    let name = sanitize::clean(&name);
    if name.is_empty() {
        return Err(AppError::Validation("name must not be empty".to_owned()));
    }

    if super::find(&db_pool, &name).await?.is_some() {
        return Err(AppError::Conflict(format!("{name} is already in the room")));
    }

    super::create(&db_pool, &name, db::epoch_ms()).await?;
    messages::append(&db_pool, &Message::status(&name, db::JOINED_ROOM)).await?;

    info!("{name} {}", db::JOINED_ROOM);
    Ok(StatusCode::CREATED)
}
