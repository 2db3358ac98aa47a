mod join;
mod list;
mod status;

use axum::{Router, routing::post};
use sqlx::SqlitePool;

use crate::{AppResult, AppState, db::Participant};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/participants", post(join::join).get(list::list))
        .route("/status", post(status::status))
}

pub(crate) async fn find(pool: &SqlitePool, name: &str) -> AppResult<Option<Participant>> {
    let participant =
        sqlx::query_as::<_, Participant>("SELECT name,last_status FROM participants WHERE name=?")
            .bind(name)
            .fetch_optional(pool)
            .await?;

    Ok(participant)
}

pub(crate) async fn create(pool: &SqlitePool, name: &str, now: i64) -> AppResult<()> {
    sqlx::query("INSERT INTO participants (name,last_status) VALUES (?,?)")
        .bind(name)
        .bind(now)
        .execute(pool)
        .await?;

    Ok(())
}

pub(crate) async fn all(pool: &SqlitePool) -> AppResult<Vec<Participant>> {
    let everyone =
        sqlx::query_as::<_, Participant>("SELECT name,last_status FROM participants")
            .fetch_all(pool)
            .await?;

    Ok(everyone)
}

/// Refreshes `lastStatus`. Returns false when no such participant exists.
pub(crate) async fn touch(pool: &SqlitePool, name: &str, now: i64) -> AppResult<bool> {
    let result = sqlx::query("UPDATE participants SET last_status=? WHERE name=?")
        .bind(now)
        .bind(name)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Removal only. The paired departure message is the caller's problem, so
/// one failed insert cannot block the rest of a sweep batch.
pub(crate) async fn remove(pool: &SqlitePool, name: &str) -> AppResult<()> {
    sqlx::query("DELETE FROM participants WHERE name=?")
        .bind(name)
        .execute(pool)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        db::init(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn create_then_find() {
        let pool = test_pool().await;
        create(&pool, "maria", 1_000).await.unwrap();

        let found = find(&pool, "maria").await.unwrap().unwrap();
        assert_eq!(found.name, "maria");
        assert_eq!(found.last_status, 1_000);

        assert!(find(&pool, "joao").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn touch_refreshes_without_duplicating() {
        let pool = test_pool().await;
        create(&pool, "maria", 1_000).await.unwrap();

        assert!(touch(&pool, "maria", 2_000).await.unwrap());
        assert!(touch(&pool, "maria", 3_000).await.unwrap());

        let everyone = all(&pool).await.unwrap();
        assert_eq!(everyone.len(), 1);
        assert_eq!(everyone[0].last_status, 3_000);
    }

    #[tokio::test]
    async fn touch_unknown_is_false() {
        let pool = test_pool().await;
        assert!(!touch(&pool, "ghost", 1_000).await.unwrap());
    }

    #[tokio::test]
    async fn remove_deletes_the_record() {
        let pool = test_pool().await;
        create(&pool, "maria", 1_000).await.unwrap();
        remove(&pool, "maria").await.unwrap();
        assert!(find(&pool, "maria").await.unwrap().is_none());
    }
}
