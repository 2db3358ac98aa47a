//! Presence sweeper: a repeating background task that evicts stale
//! participants and leaves a broadcast departure notice behind.
//!
//! The task keeps no state between ticks. Every tick recomputes
//! staleness from the stored `lastStatus` values, so a crash between
//! ticks costs timeliness, never correctness.

use std::time::Duration;

use sqlx::SqlitePool;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use crate::{
    AppResult, messages, participants,
    db::{self, Message},
};

pub fn spawn(pool: SqlitePool, interval: Duration, timeout_ms: i64) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // A tick that outlives the interval must skip, never overlap.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            if let Err(err) = sweep_once(&pool, timeout_ms, db::epoch_ms()).await {
                warn!("presence sweep failed: {err}");
            }
        }
    })
}

/// One sweep pass. Each participant is handled independently: a failed
/// removal or a failed departure notice is logged and the batch moves on.
pub async fn sweep_once(pool: &SqlitePool, timeout_ms: i64, now: i64) -> AppResult<()> {
    for participant in participants::all(pool).await? {
        let idle = now - participant.last_status;
        if idle <= timeout_ms {
            continue;
        }

        if let Err(err) = participants::remove(pool, &participant.name).await {
            warn!("failed to evict {}: {err}", participant.name);
            continue;
        }

        info!("{} timed out after {idle}ms", participant.name);

        if let Err(err) =
            messages::append(pool, &Message::status(&participant.name, db::LEFT_ROOM)).await
        {
            warn!("failed to record departure of {}: {err}", participant.name);
        }
    }

    Ok(())
}
