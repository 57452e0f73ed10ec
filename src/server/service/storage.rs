//! On-disk storage for uploaded content.
//!
//! Files live at `{root}/{user_id}/{YYYYmmddHHMMSS}_{filename}`. Folders are keyed by
//! the immutable account id so renames and look-alike usernames never share a folder.
//! Uploaded file names are sanitised so an upload can never escape the root.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::server::{error::AppError, model::content::Upload};

#[derive(Clone, Debug)]
pub struct ContentStorage {
    root: PathBuf,
}

impl ContentStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn user_dir(&self, user_id: i32) -> PathBuf {
        self.root.join(user_id.to_string())
    }

    /// Writes an upload into the user's folder, creating it when needed.
    ///
    /// # Returns
    /// - `Ok(String)` - Path of the stored file, as saved on the post
    /// - `Err(AppError::IoErr)` - Directory creation or write failed
    pub async fn store(&self, user_id: i32, upload: &Upload) -> Result<String, AppError> {
        let dir = self.user_dir(user_id);
        tokio::fs::create_dir_all(&dir).await?;

        let filename = Path::new(&upload.filename)
            .file_name()
            .and_then(|name| name.to_str())
            .map(sanitize_segment)
            .unwrap_or_else(|| "upload".to_string());

        let path = dir.join(format!(
            "{}_{}",
            Utc::now().format("%Y%m%d%H%M%S"),
            filename
        ));
        tokio::fs::write(&path, &upload.bytes).await?;

        Ok(path.to_string_lossy().into_owned())
    }

    /// Deletes a stored file. A file that is already gone is not an error.
    pub async fn remove_file(&self, path: impl AsRef<Path>) -> Result<(), AppError> {
        match tokio::fs::remove_file(path.as_ref()).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.as_ref().display(), "Stored file already removed");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Deletes a user's upload folder once it is empty.
    ///
    /// Stored files are removed individually beforehand, so anything still inside
    /// was not queued for deletion and is left alone along with the folder.
    pub async fn remove_user_dir(&self, user_id: i32) -> Result<(), AppError> {
        let dir = self.user_dir(user_id);

        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };
        if entries.next_entry().await?.is_some() {
            tracing::warn!(user_id, "Content folder not empty; leaving it in place");
            return Ok(());
        }

        match tokio::fs::remove_dir(&dir).await {
            Ok(()) => {
                tracing::info!(user_id, "Removed content folder");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Replaces anything outside `[A-Za-z0-9._-]` and neutralises `.`/`..`.
fn sanitize_segment(segment: &str) -> String {
    let cleaned: String = segment
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    match cleaned.as_str() {
        "" | "." | ".." => "_".to_string(),
        _ => cleaned,
    }
}
