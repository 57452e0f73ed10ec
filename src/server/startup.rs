use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    task::{email::EmailService, sms::SmsClient},
};

const LOG_FILE_NAME: &str = "trendconnect.log";

/// Installs the global tracing subscriber.
///
/// Logs go to stdout and to a daily-rolling file under `config.log_dir`. The filter
/// comes from `RUST_LOG` and defaults to `info`.
///
/// # Returns
/// - `WorkerGuard` - Must be held until shutdown so buffered file logs are flushed
pub fn init_tracing(config: &Config) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_NAME);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stdout))
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .init();

    guard
}

/// Connects to the database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the mailer, or a no-op one when no SMTP server is configured.
pub fn setup_email(config: &Config) -> Result<EmailService, AppError> {
    let email = EmailService::new(&config.smtp)?;

    if !email.is_enabled() {
        tracing::warn!("SMTP_SERVER is not set; emails will only be logged");
    }

    Ok(email)
}

/// Builds the Twilio client when every Twilio variable is set.
pub fn setup_sms(config: &Config) -> Result<Option<SmsClient>, AppError> {
    let Some(twilio) = config.twilio.clone() else {
        tracing::warn!("Twilio is not configured; OTP SMS are disabled");
        return Ok(None);
    };

    let http = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(Some(SmsClient::new(http, twilio)))
}

/// CORS policy for browser clients.
///
/// Any origin is allowed unless `CORS_ORIGINS` lists specific ones.
pub fn cors_layer(config: &Config) -> Result<CorsLayer, ConfigError> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT]);

    if config.cors_origins.is_empty() {
        return Ok(layer.allow_origin(Any));
    }

    let origins = config
        .cors_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidEnvVar {
                name: "CORS_ORIGINS".to_string(),
                value: origin.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(layer.allow_origin(origins))
}
