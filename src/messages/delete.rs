use axum::{
    debug_handler,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{AppError, AppResult, user_header};

#[debug_handler]
pub(crate) async fn delete(
    State(db_pool): State<SqlitePool>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> AppResult<StatusCode> {
    let acting_user = user_header(&headers)?;

    let id = id.to_string();
    let Some(message) = super::find(&db_pool, &id).await? else {
        return Err(AppError::NotFound(format!("no message {id}")));
    };
    if message.sender != acting_user {
        return Err(AppError::Unauthorized);
    }

    sqlx::query("DELETE FROM messages WHERE id=?")
        .bind(&id)
        .execute(&db_pool)
        .await?;

    Ok(StatusCode::OK)
}
