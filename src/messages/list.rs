use axum::{
    Json, debug_handler,
    extract::{Query, State},
    http::HeaderMap,
};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::{AppResult, db::Message, user_header};

#[derive(Deserialize)]
pub(crate) struct ListQuery {
    limit: Option<i64>,
}

#[debug_handler]
pub(crate) async fn list(
    State(db_pool): State<SqlitePool>,
    Query(ListQuery { limit }): Query<ListQuery>,
    headers: HeaderMap,
) -> AppResult<Json<Vec<Message>>> {
    let viewer = user_header(&headers)?;
    Ok(Json(super::list_visible_to(&db_pool, &viewer, limit).await?))
}
