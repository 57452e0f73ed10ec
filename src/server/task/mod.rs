//! Fire-and-forget background work.
//!
//! Request handlers never wait on email delivery, SMS or file cleanup. They push a
//! `BackgroundTask` onto the `TaskQueue` and return; a single `TaskWorker` drains the
//! queue and logs any failure.

pub mod email;
pub mod sms;
pub mod worker;

use std::path::PathBuf;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// A unit of deferred work.
#[derive(Debug, Clone, PartialEq)]
pub enum BackgroundTask {
    OtpEmail {
        email: String,
        otp: i32,
        expires_in_minutes: i64,
    },
    OtpSms {
        phone_number: String,
        otp: i32,
        expires_in_minutes: i64,
    },
    AccountUpdatedEmail {
        email: String,
        username: String,
    },
    AccountDeletedEmail {
        email: String,
        username: String,
    },
    /// Tells a follower that someone they follow has posted.
    NewPostEmail {
        email: String,
        author: String,
        title: String,
        caption: String,
    },
    LikeEmail {
        email: String,
        liker: String,
        title: String,
        caption: String,
    },
    CommentEmail {
        email: String,
        commenter: String,
        title: String,
        comment: String,
    },
    /// Deletes stored uploads. Missing files are ignored.
    RemoveFiles { paths: Vec<PathBuf> },
    /// Deletes a user's upload folder if nothing is left in it.
    RemoveUserFolder { user_id: i32 },
}

impl BackgroundTask {
    /// Short name used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::OtpEmail { .. } => "otp_email",
            Self::OtpSms { .. } => "otp_sms",
            Self::AccountUpdatedEmail { .. } => "account_updated_email",
            Self::AccountDeletedEmail { .. } => "account_deleted_email",
            Self::NewPostEmail { .. } => "new_post_email",
            Self::LikeEmail { .. } => "like_email",
            Self::CommentEmail { .. } => "comment_email",
            Self::RemoveFiles { .. } => "remove_files",
            Self::RemoveUserFolder { .. } => "remove_user_folder",
        }
    }
}

/// Sending half of the background task channel. Cheap to clone.
#[derive(Clone, Debug)]
pub struct TaskQueue {
    sender: UnboundedSender<BackgroundTask>,
}

impl TaskQueue {
    /// Creates the queue and the receiver the worker consumes.
    pub fn new() -> (Self, UnboundedReceiver<BackgroundTask>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    /// Enqueues a task. If the worker has stopped the task is dropped with a warning.
    pub fn push(&self, task: BackgroundTask) {
        let kind = task.kind();

        if self.sender.send(task).is_err() {
            tracing::warn!(task = kind, "Background worker is not running; task dropped");
        }
    }
}
