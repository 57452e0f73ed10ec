mod model;
mod server;

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::server::{
    config::Config,
    error::AppError,
    scheduler,
    service::{storage::ContentStorage, token::TokenService},
    startup,
    state::AppState,
    task::{worker::TaskWorker, TaskQueue},
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    let _log_guard = startup::init_tracing(&config);

    let db = startup::connect_to_database(&config).await?;

    tokio::fs::create_dir_all(&config.content_dir).await?;
    let storage = ContentStorage::new(config.content_dir.clone());

    // Start the background worker before any handler can queue work
    let (tasks, receiver) = TaskQueue::new();
    let worker = TaskWorker::new(
        startup::setup_email(&config)?,
        startup::setup_sms(&config)?,
        storage.clone(),
    )
    .spawn(receiver);

    let _scheduler =
        scheduler::start_scheduler(db.clone(), config.pending_registration_ttl_hours).await?;

    let state = AppState {
        db,
        tokens: TokenService::new(
            &config.secret_key,
            config.algorithm,
            config.access_token_expiry_minutes,
        ),
        tasks,
        storage,
        otp_expiration_minutes: config.otp_expiration_minutes,
        max_retry_attempts: config.max_retry_attempts,
    };

    let app = server::router::router()
        .with_state(state)
        .layer(startup::cors_layer(&config)?)
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The router owned the last queue handle, so the worker finishes what is left and exits
    if let Err(e) = worker.await {
        tracing::error!("Background worker panicked: {}", e);
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
