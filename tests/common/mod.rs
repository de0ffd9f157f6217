#![allow(dead_code)]

use devsecops_demo::{create_router, AppConfig, AppState};
use tokio::net::TcpListener;

/// Spawns the application on a random local port with the given configuration.
///
/// Returned address format: `http://127.0.0.1:8492`
pub async fn spawn_app_with_config(config: AppConfig) -> String {
    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    let app = create_router(AppState::new(config));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://127.0.0.1:{port}")
}

/// Spawns the application with default configuration.
pub async fn spawn_app() -> String {
    spawn_app_with_config(AppConfig::default()).await
}
