mod delete;
mod edit;
mod list;
mod send;
pub mod visibility;

use axum::{Router, routing::post, routing::put};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::{
    AppError, AppResult, AppState, participants, sanitize,
    db::{Message, MessageKind},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/messages", post(send::send).get(list::list))
        .route("/messages/{id}", put(edit::edit).delete(delete::delete))
}

/// Body shared by POST and PUT; `from` always comes from the `User` header.
#[derive(Deserialize)]
pub(crate) struct MessageBody {
    pub(crate) to: String,
    pub(crate) text: String,
    #[serde(rename = "type")]
    pub(crate) kind: MessageKind,
}

/// Checks a user-authored body: non-empty `to`/`text` after sanitization,
/// no synthetic `status` kind, and a live sender. Returns the cleaned
/// `(to, text)` pair.
pub(crate) async fn validate_user_message(
    pool: &SqlitePool,
    sender: &str,
    body: &MessageBody,
) -> AppResult<(String, String)> {
    let to = sanitize::clean(&body.to);
    let text = sanitize::clean(&body.text);

    if to.is_empty() {
        return Err(AppError::Validation("to must not be empty".to_owned()));
    }
    if text.is_empty() {
        return Err(AppError::Validation("text must not be empty".to_owned()));
    }
    if body.kind == MessageKind::Status {
        return Err(AppError::Validation(
            "status messages cannot be user-authored".to_owned(),
        ));
    }
    if participants::find(pool, sender).await?.is_none() {
        return Err(AppError::Validation(format!("{sender} is not in the room")));
    }

    Ok((to, text))
}

pub(crate) async fn append(pool: &SqlitePool, message: &Message) -> AppResult<()> {
    sqlx::query("INSERT INTO messages (id,sender,recipient,text,kind,time) VALUES (?,?,?,?,?,?)")
        .bind(&message.id)
        .bind(&message.sender)
        .bind(&message.recipient)
        .bind(&message.text)
        .bind(message.kind)
        .bind(&message.time)
        .execute(pool)
        .await?;

    Ok(())
}

/// All messages in insertion order, oldest first.
pub(crate) async fn all_ordered(pool: &SqlitePool) -> AppResult<Vec<Message>> {
    let messages = sqlx::query_as::<_, Message>(
        "SELECT id,sender,recipient,text,kind,time FROM messages ORDER BY rowid",
    )
    .fetch_all(pool)
    .await?;

    Ok(messages)
}

/// Everything `viewer` may see, oldest first, then the newest `limit`
/// entries of that filtered set. A missing or non-positive `limit`
/// returns the whole set.
pub(crate) async fn list_visible_to(
    pool: &SqlitePool,
    viewer: &str,
    limit: Option<i64>,
) -> AppResult<Vec<Message>> {
    let mut visible: Vec<Message> = all_ordered(pool)
        .await?
        .into_iter()
        .filter(|message| visibility::visible_to(message, viewer))
        .collect();

    if let Some(limit) = limit {
        if limit > 0 && (limit as usize) < visible.len() {
            visible = visible.split_off(visible.len() - limit as usize);
        }
    }

    Ok(visible)
}

pub(crate) async fn find(pool: &SqlitePool, id: &str) -> AppResult<Option<Message>> {
    let message = sqlx::query_as::<_, Message>(
        "SELECT id,sender,recipient,text,kind,time FROM messages WHERE id=?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(message)
}
