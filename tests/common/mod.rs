// tests/common/mod.rs

#![allow(dead_code)]

use cat_tracker::{
    config::{Config, DEFAULT_ALLOWED_ORIGINS, DEFAULT_BIND_ADDR, parse_origins},
    routes,
    state::AppState,
    store::{RecordStore, SqliteKvStore},
};
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use std::sync::Arc;

/// Opens a migrated pool. A single long-lived connection keeps an in-memory
/// database alive for the whole test.
pub async fn open_pool(database_url: &str) -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect(database_url)
        .await
        .expect("Failed to open SQLite for testing.");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to migrate database");

    pool
}

/// Spawns the app on a random port backed by a fresh in-memory database.
/// Returns the base URL (e.g., "http://127.0.0.1:12345").
pub async fn spawn_app() -> String {
    let database_url = "sqlite::memory:".to_string();
    let pool = open_pool(&database_url).await;

    let config = Config {
        database_url,
        bind_addr: DEFAULT_BIND_ADDR.to_string(),
        rust_log: "error".to_string(),
        log_dir: "logs".to_string(),
        allowed_origins: parse_origins(DEFAULT_ALLOWED_ORIGINS),
    };

    let state = AppState {
        store: RecordStore::new(Arc::new(SqliteKvStore::new(pool))),
        config,
    };
    let app = routes::create_router(state);

    // Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}
