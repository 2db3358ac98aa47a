use axum::{
    Json, debug_handler,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{AppError, AppResult, db, user_header};

use super::MessageBody;

/// Full replace of `to`/`text`/`type`; `time` is regenerated and `from`
/// stays whatever it was at creation.
#[debug_handler]
pub(crate) async fn edit(
    State(db_pool): State<SqlitePool>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(body): Json<MessageBody>,
) -> AppResult<StatusCode> {
    let acting_user = user_header(&headers)?;
    let (to, text) = super::validate_user_message(&db_pool, &acting_user, &body).await?;

    let id = id.to_string();
    let Some(message) = super::find(&db_pool, &id).await? else {
        return Err(AppError::NotFound(format!("no message {id}")));
    };
    if message.sender != acting_user {
        return Err(AppError::Unauthorized);
    }

    sqlx::query("UPDATE messages SET recipient=?, text=?, kind=?, time=? WHERE id=?")
        .bind(&to)
        .bind(&text)
        .bind(body.kind)
        .bind(db::clock_time())
        .bind(&id)
        .execute(&db_pool)
        .await?;

    Ok(StatusCode::OK)
}
