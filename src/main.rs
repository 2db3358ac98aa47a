use batepapo::{AppState, config::Config, db, sweeper};
use sqlx::sqlite::SqlitePoolOptions;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "batepapo=debug,info".into()),
        )
        .init();

    let config = Config::from_env();

    let db_pool = SqlitePoolOptions::new()
        .max_connections(16)
        .connect(&config.database_url)
        .await
        .unwrap();
    db::init(&db_pool).await.unwrap();

    let _sweep = sweeper::spawn(
        db_pool.clone(),
        config.sweep_interval,
        config.presence_timeout_ms,
    );

    let app = batepapo::app(AppState { db_pool }).layer(CorsLayer::permissive());

    info!("listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
