use tokio::{sync::mpsc::UnboundedReceiver, task::JoinHandle};

use crate::server::{
    error::AppError,
    service::storage::ContentStorage,
    task::{email::EmailService, sms::SmsClient, BackgroundTask},
};

/// Consumes the task queue one task at a time.
pub struct TaskWorker {
    email: EmailService,
    sms: Option<SmsClient>,
    storage: ContentStorage,
}

impl TaskWorker {
    pub fn new(email: EmailService, sms: Option<SmsClient>, storage: ContentStorage) -> Self {
        Self {
            email,
            sms,
            storage,
        }
    }

    pub fn spawn(self, receiver: UnboundedReceiver<BackgroundTask>) -> JoinHandle<()> {
        tokio::spawn(self.run(receiver))
    }

    /// Runs until every `TaskQueue` handle has been dropped.
    ///
    /// A failing task is logged and never stops the loop.
    pub async fn run(self, mut receiver: UnboundedReceiver<BackgroundTask>) {
        tracing::info!("Background task worker started");

        while let Some(task) = receiver.recv().await {
            let kind = task.kind();

            if let Err(e) = self.execute(task).await {
                tracing::error!(task = kind, "Background task failed: {}", e);
            }
        }

        tracing::info!("Background task queue closed; worker stopping");
    }

    async fn execute(&self, task: BackgroundTask) -> Result<(), AppError> {
        match task {
            BackgroundTask::OtpEmail {
                email,
                otp,
                expires_in_minutes,
            } => self.email.send_otp(&email, otp, expires_in_minutes).await,
            BackgroundTask::OtpSms {
                phone_number,
                otp,
                expires_in_minutes,
            } => match &self.sms {
                Some(sms) => sms.send_otp(&phone_number, otp, expires_in_minutes).await,
                None => {
                    tracing::debug!("SMS is not configured; skipping OTP SMS");
                    Ok(())
                }
            },
            BackgroundTask::AccountUpdatedEmail { email, username } => {
                self.email.send_account_updated(&email, &username).await
            }
            BackgroundTask::AccountDeletedEmail { email, username } => {
                self.email.send_account_deleted(&email, &username).await
            }
            BackgroundTask::NewPostEmail {
                email,
                author,
                title,
                caption,
            } => {
                self.email
                    .send_new_post(&email, &author, &title, &caption)
                    .await
            }
            BackgroundTask::LikeEmail {
                email,
                liker,
                title,
                caption,
            } => self.email.send_like(&email, &liker, &title, &caption).await,
            BackgroundTask::CommentEmail {
                email,
                commenter,
                title,
                comment,
            } => {
                self.email
                    .send_comment(&email, &commenter, &title, &comment)
                    .await
            }
            BackgroundTask::RemoveFiles { paths } => {
                for path in paths {
                    if let Err(e) = self.storage.remove_file(&path).await {
                        tracing::error!(
                            path = %path.display(),
                            "Failed to remove stored file: {}",
                            e
                        );
                    }
                }
                Ok(())
            }
            BackgroundTask::RemoveUserFolder { user_id } => {
                self.storage.remove_user_dir(user_id).await
            }
        }
    }
}
