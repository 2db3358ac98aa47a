use axum::{
    debug_handler,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use sqlx::SqlitePool;

use crate::{AppError, AppResult, db, user_header};

/// Heartbeat. Only moves `lastStatus`; no message side effect.
#[debug_handler]
pub(crate) async fn status(
    State(db_pool): State<SqlitePool>,
    headers: HeaderMap,
) -> AppResult<StatusCode> {
    let name = user_header(&headers)?;

    if !super::touch(&db_pool, &name, db::epoch_ms()).await? {
        return Err(AppError::NotFound(format!("{name} is not in the room")));
    }

    Ok(StatusCode::OK)
}
