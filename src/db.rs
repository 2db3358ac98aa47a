use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use time::macros::format_description;
use uuid::Uuid;

/// Reserved recipient meaning "all participants".
pub const EVERYONE: &str = "Todos";

pub const JOINED_ROOM: &str = "entra na sala...";
pub const LEFT_ROOM: &str = "sai da sala...";

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Participant {
    // unique: name
    pub name: String,
    #[serde(rename = "lastStatus")]
    pub last_status: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum MessageKind {
    Message,
    PrivateMessage,
    Status,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Message {
    pub id: String,
    #[serde(rename = "from")]
    pub sender: String,
    #[serde(rename = "to")]
    pub recipient: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub time: String,
}

impl Message {
    pub fn new(sender: String, recipient: String, text: String, kind: MessageKind) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            sender,
            recipient,
            text,
            kind,
            time: clock_time(),
        }
    }

    /// Synthetic join/leave notice, always broadcast.
    pub fn status(name: &str, text: &str) -> Self {
        Self::new(
            name.to_owned(),
            EVERYONE.to_owned(),
            text.to_owned(),
            MessageKind::Status,
        )
    }
}

pub async fn init(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS participants (
            name TEXT NOT NULL PRIMARY KEY,
            last_status INTEGER NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS messages (
            id TEXT NOT NULL PRIMARY KEY,
            sender TEXT NOT NULL,
            recipient TEXT NOT NULL,
            text TEXT NOT NULL,
            kind TEXT NOT NULL,
            time TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Milliseconds since the epoch, the `lastStatus` clock.
pub fn epoch_ms() -> i64 {
    (time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

/// Wall-clock `HH:MM:SS` stamp stored on message rows.
pub fn clock_time() -> String {
    time::OffsetDateTime::now_utc()
        .format(format_description!("[hour]:[minute]:[second]"))
        .unwrap_or_default()
}
