use axum::{Json, debug_handler, extract::State};
use sqlx::SqlitePool;

use crate::{AppResult, db::Participant};

#[debug_handler]
pub(crate) async fn list(
    State(db_pool): State<SqlitePool>,
) -> AppResult<Json<Vec<Participant>>> {
    Ok(Json(super::all(&db_pool).await?))
}
