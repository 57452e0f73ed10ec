use std::{path::PathBuf, str::FromStr};

use jsonwebtoken::Algorithm;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_ALGORITHM: &str = "HS256";
const DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 30;
const DEFAULT_OTP_EXPIRATION_MINUTES: i64 = 10;
const DEFAULT_MAX_RETRY_ATTEMPTS: i32 = 3;
const DEFAULT_PENDING_REGISTRATION_TTL_HOURS: i64 = 24;
const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_CONTENT_DIR: &str = "content_database";
const DEFAULT_LOG_DIR: &str = "logs";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

/// SMTP settings. An empty `server` puts the mailer in no-op mode.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub server: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub mail_from: String,
    /// Upgrade a plain connection with STARTTLS (`MAIL_TLS`).
    pub starttls: bool,
    /// Connect with implicit TLS (`MAIL_SSL`). Takes precedence over `starttls`.
    pub implicit_tls: bool,
    pub use_credentials: bool,
}

#[derive(Debug, Clone)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,

    pub secret_key: String,
    pub algorithm: Algorithm,
    pub access_token_expiry_minutes: i64,

    pub otp_expiration_minutes: i64,
    pub max_retry_attempts: i32,
    pub pending_registration_ttl_hours: i64,

    pub smtp: SmtpConfig,
    /// `None` when any Twilio variable is missing, which disables SMS.
    pub twilio: Option<TwilioConfig>,

    pub content_dir: PathBuf,
    pub log_dir: PathBuf,
    pub bind_address: String,
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Blank values are treated as unset. `DATABASE_URL` wins over the individual
    /// `DATABASE_*` parts, which are only required when it is absent.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let required = |name: &str| var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let database_url = match var("DATABASE_URL") {
            Some(url) => url,
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                required("DATABASE_USERNAME")?,
                required("DATABASE_PASSWORD")?,
                required("DATABASE_HOSTNAME")?,
                required("DATABASE_PORT")?,
                required("DATABASE_NAME")?,
            ),
        };

        let algorithm_name = var("ALGORITHM").unwrap_or_else(|| DEFAULT_ALGORITHM.to_string());
        let algorithm = match Algorithm::from_str(&algorithm_name) {
            Ok(alg @ (Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512)) => alg,
            _ => {
                return Err(ConfigError::InvalidEnvVar {
                    name: "ALGORITHM".to_string(),
                    value: algorithm_name,
                })
            }
        };

        let smtp = SmtpConfig {
            server: var("SMTP_SERVER").unwrap_or_default(),
            port: parse_or(&var, "SMTP_PORT", DEFAULT_SMTP_PORT)?,
            username: var("EMAIL_USERNAME"),
            password: var("EMAIL_PASSWORD"),
            mail_from: var("MAIL_FROM")
                .or_else(|| var("EMAIL_USERNAME"))
                .unwrap_or_else(|| "no-reply@trendconnect.local".to_string()),
            starttls: parse_bool_or(&var, "MAIL_TLS", true)?,
            implicit_tls: parse_bool_or(&var, "MAIL_SSL", false)?,
            use_credentials: parse_bool_or(&var, "USE_CREDENTIALS", true)?,
        };

        let twilio = match (
            var("TWILIO_ACCOUNT_SID"),
            var("TWILIO_AUTH_TOKEN"),
            var("TWILIO_PHONE_NUMBER"),
        ) {
            (Some(account_sid), Some(auth_token), Some(from_number)) => Some(TwilioConfig {
                account_sid,
                auth_token,
                from_number,
            }),
            _ => None,
        };

        let cors_origins = var("CORS_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            database_url,
            secret_key: required("SECRET_KEY")?,
            algorithm,
            access_token_expiry_minutes: parse_or(
                &var,
                "ACCESS_TOKEN_EXPIRY_MINUTES",
                DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES,
            )?,
            otp_expiration_minutes: parse_or(
                &var,
                "OTP_EXPIRATION_MINUTES",
                DEFAULT_OTP_EXPIRATION_MINUTES,
            )?,
            max_retry_attempts: parse_or(&var, "MAX_RETRY_ATTEMPTS", DEFAULT_MAX_RETRY_ATTEMPTS)?,
            pending_registration_ttl_hours: parse_or(
                &var,
                "PENDING_REGISTRATION_TTL_HOURS",
                DEFAULT_PENDING_REGISTRATION_TTL_HOURS,
            )?,
            smtp,
            twilio,
            content_dir: PathBuf::from(
                var("CONTENT_DIR").unwrap_or_else(|| DEFAULT_CONTENT_DIR.to_string()),
            ),
            log_dir: PathBuf::from(var("LOG_DIR").unwrap_or_else(|| DEFAULT_LOG_DIR.to_string())),
            bind_address: var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            cors_origins,
        })
    }
}

fn parse_or<T, F>(var: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match var(name) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        None => Ok(default),
    }
}

fn parse_bool_or<F>(var: &F, name: &str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match var(name) {
        Some(value) => match value.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
        },
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn applies_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("SECRET_KEY", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.algorithm, Algorithm::HS256);
        assert_eq!(config.access_token_expiry_minutes, 30);
        assert_eq!(config.otp_expiration_minutes, 10);
        assert_eq!(config.max_retry_attempts, 3);
        assert_eq!(config.smtp.port, 587);
        assert!(config.smtp.starttls);
        assert!(!config.smtp.implicit_tls);
        assert!(config.twilio.is_none());
        assert_eq!(config.content_dir, PathBuf::from("content_database"));
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn builds_postgres_url_from_parts() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_HOSTNAME", "localhost"),
            ("DATABASE_PORT", "5432"),
            ("DATABASE_USERNAME", "trend"),
            ("DATABASE_PASSWORD", "pw"),
            ("DATABASE_NAME", "trendconnect"),
            ("SECRET_KEY", "secret"),
        ]))
        .unwrap();

        assert_eq!(
            config.database_url,
            "postgres://trend:pw@localhost:5432/trendconnect"
        );
    }

    #[test]
    fn requires_secret_key() {
        let result = Config::from_lookup(lookup(&[("DATABASE_URL", "sqlite::memory:")]));

        assert!(matches!(result, Err(ConfigError::MissingEnvVar(name)) if name == "SECRET_KEY"));
    }

    #[test]
    fn rejects_non_hmac_algorithm() {
        let result = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("SECRET_KEY", "secret"),
            ("ALGORITHM", "RS256"),
        ]));

        assert!(matches!(result, Err(ConfigError::InvalidEnvVar { name, .. }) if name == "ALGORITHM"));
    }

    #[test]
    fn rejects_unparseable_numbers() {
        let result = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("SECRET_KEY", "secret"),
            ("MAX_RETRY_ATTEMPTS", "three"),
        ]));

        assert!(matches!(result, Err(ConfigError::InvalidEnvVar { value, .. }) if value == "three"));
    }

    #[test]
    fn enables_twilio_only_when_complete() {
        let partial = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("SECRET_KEY", "secret"),
            ("TWILIO_ACCOUNT_SID", "AC123"),
        ]))
        .unwrap();
        assert!(partial.twilio.is_none());

        let full = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("SECRET_KEY", "secret"),
            ("TWILIO_ACCOUNT_SID", "AC123"),
            ("TWILIO_AUTH_TOKEN", "token"),
            ("TWILIO_PHONE_NUMBER", "+15550000000"),
            ("CORS_ORIGINS", "http://a.test, http://b.test"),
        ]))
        .unwrap();
        assert_eq!(full.twilio.unwrap().from_number, "+15550000000");
        assert_eq!(full.cors_origins, vec!["http://a.test", "http://b.test"]);
    }
}
