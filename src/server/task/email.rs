//! Outgoing email over SMTP.
//!
//! Account emails (OTP, update, deletion) are HTML rendered from askama templates.
//! Activity notifications (new post, like, comment) are plain text. With no SMTP
//! server configured the service runs in no-op mode and only logs.

use std::sync::Arc;

use askama::Template;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::server::{config::SmtpConfig, error::AppError};

const SENDER_NAME: &str = "Trend Connect";

#[derive(Template)]
#[template(path = "otp.html")]
struct OtpTemplate {
    otp: i32,
    expires_in_minutes: i64,
}

#[derive(Template)]
#[template(path = "account_updated.html")]
struct AccountUpdatedTemplate<'a> {
    username: &'a str,
}

#[derive(Template)]
#[template(path = "account_deleted.html")]
struct AccountDeletedTemplate<'a> {
    username: &'a str,
}

struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

#[derive(Clone)]
pub struct EmailService {
    mailer: Option<Arc<Mailer>>,
}

impl EmailService {
    /// Builds the SMTP transport from configuration.
    ///
    /// `implicit_tls` selects a TLS-wrapped connection, otherwise `starttls` upgrades a
    /// plain one. Credentials are only attached when `use_credentials` is set and both
    /// username and password are present.
    ///
    /// # Returns
    /// - `Ok(EmailService)` - Ready to send, or in no-op mode when `server` is empty
    /// - `Err(AppError)` - Invalid sender address or relay hostname
    pub fn new(config: &SmtpConfig) -> Result<Self, AppError> {
        if config.server.trim().is_empty() {
            tracing::warn!("SMTP server not configured; email service will operate in no-op mode");
            return Ok(Self::disabled());
        }

        let from = format!("{} <{}>", SENDER_NAME, config.mail_from).parse::<Mailbox>()?;

        let builder = if config.implicit_tls {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.server)?
        } else if config.starttls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.server)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.server)
        }
        .port(config.port);

        let builder = match (&config.username, &config.password) {
            (Some(username), Some(password)) if config.use_credentials => {
                builder.credentials(Credentials::new(username.clone(), password.clone()))
            }
            _ => builder,
        };

        Ok(Self {
            mailer: Some(Arc::new(Mailer {
                transport: builder.build(),
                from,
            })),
        })
    }

    /// An email service that never sends anything.
    pub fn disabled() -> Self {
        Self { mailer: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.mailer.is_some()
    }

    pub async fn send_otp(
        &self,
        recipient: &str,
        otp: i32,
        expires_in_minutes: i64,
    ) -> Result<(), AppError> {
        let html = OtpTemplate {
            otp,
            expires_in_minutes,
        }
        .render()?;

        self.send(recipient, "Your OTP for Registration", ContentType::TEXT_HTML, html)
            .await
    }

    pub async fn send_account_updated(&self, recipient: &str, username: &str) -> Result<(), AppError> {
        let html = AccountUpdatedTemplate { username }.render()?;

        self.send(
            recipient,
            "Account Updated - Trend Connect",
            ContentType::TEXT_HTML,
            html,
        )
        .await
    }

    pub async fn send_account_deleted(&self, recipient: &str, username: &str) -> Result<(), AppError> {
        let html = AccountDeletedTemplate { username }.render()?;

        self.send(
            recipient,
            "Account Deleted - Trend Connect",
            ContentType::TEXT_HTML,
            html,
        )
        .await
    }

    pub async fn send_new_post(
        &self,
        recipient: &str,
        author: &str,
        title: &str,
        caption: &str,
    ) -> Result<(), AppError> {
        let (subject, body) = new_post_message(author, title, caption);
        self.send(recipient, &subject, ContentType::TEXT_PLAIN, body)
            .await
    }

    pub async fn send_like(
        &self,
        recipient: &str,
        liker: &str,
        title: &str,
        caption: &str,
    ) -> Result<(), AppError> {
        let (subject, body) = like_message(liker, title, caption);
        self.send(recipient, &subject, ContentType::TEXT_PLAIN, body)
            .await
    }

    pub async fn send_comment(
        &self,
        recipient: &str,
        commenter: &str,
        title: &str,
        comment: &str,
    ) -> Result<(), AppError> {
        let (subject, body) = comment_message(commenter, title, comment);
        self.send(recipient, &subject, ContentType::TEXT_PLAIN, body)
            .await
    }

    async fn send(
        &self,
        recipient: &str,
        subject: &str,
        content_type: ContentType,
        body: String,
    ) -> Result<(), AppError> {
        let Some(mailer) = &self.mailer else {
            tracing::info!(
                subject,
                recipient,
                "Email service running in no-op mode; skipping actual send"
            );
            return Ok(());
        };

        let message = Message::builder()
            .from(mailer.from.clone())
            .to(recipient.parse::<Mailbox>()?)
            .subject(subject)
            .header(content_type)
            .body(body)?;

        mailer.transport.send(message).await?;
        tracing::info!(subject, recipient, "Email sent");

        Ok(())
    }
}

fn new_post_message(author: &str, title: &str, caption: &str) -> (String, String) {
    (
        format!("New Post from {}: {}", author, title),
        format!(
            "Hi,\n\n{} has posted new content:\n\nTitle: {}\nCaption: {}\n\nCheck it out!",
            author, title, caption
        ),
    )
}

fn like_message(liker: &str, title: &str, caption: &str) -> (String, String) {
    (
        "Trend Connect Notifications: Someone liked your post!".to_string(),
        format!(
            "Hi,\n\n{} has liked your post!\n\nTitle: {}\nCaption: {}\n\nCheck it out!",
            liker, title, caption
        ),
    )
}

fn comment_message(commenter: &str, title: &str, comment: &str) -> (String, String) {
    (
        "Trend Connect Notifications: Someone commented on your post!".to_string(),
        format!(
            "Hi,\n\n{} has commented on your post!\n\nTitle: {}\nComment: {}\n\nCheck it out!",
            commenter, title, comment
        ),
    )
}
