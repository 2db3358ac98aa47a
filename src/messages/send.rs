use axum::{
    Json, debug_handler,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use sqlx::SqlitePool;

use crate::{AppResult, db::Message, user_header};

use super::MessageBody;

#[debug_handler]
pub(crate) async fn send(
    State(db_pool): State<SqlitePool>,
    headers: HeaderMap,
    Json(body): Json<MessageBody>,
) -> AppResult<StatusCode> {
    let sender = user_header(&headers)?;
    let (to, text) = super::validate_user_message(&db_pool, &sender, &body).await?;

    super::append(&db_pool, &Message::new(sender, to, text, body.kind)).await?;

    Ok(StatusCode::CREATED)
}
