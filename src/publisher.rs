//! Creates the remote repository and populates it one file at a time.
use base64::{Engine, prelude::BASE64_STANDARD};
use log::*;
use std::time::Duration;
use tokio::time::sleep;

use crate::{
    error::Result,
    remote::{
        traits::RepoHost,
        types::{CreateRepoRequest, UploadFileRequest},
    },
    types::{FileEntry, RepoConfig, RepoIdentity},
};

/// Reported before each upload begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadProgress<'a> {
    /// 0-based position of the file in walk order.
    pub index: usize,
    pub total: usize,
    pub path: &'a str,
}

/// Commit message used for every uploaded file.
pub fn commit_message(path: &str) -> String {
    format!("Add {path}")
}

/// Content placed in the upload envelope.
///
/// The entry's content string is base64 encoded for transport regardless of
/// its kind, so binary entries (already base64) are encoded a second time.
/// The host stores the once-decoded text, which for binary entries is the
/// base64 form of the original bytes.
pub fn envelope_content(entry: &FileEntry) -> String {
    BASE64_STANDARD.encode(entry.content.as_str())
}

/// Publishes a walked file list to a [`RepoHost`].
pub struct Publisher {
    host: Box<dyn RepoHost>,
    upload_delay: Duration,
    dry_run: bool,
}

impl Publisher {
    pub fn new(
        host: Box<dyn RepoHost>,
        upload_delay: Duration,
        dry_run: bool,
    ) -> Self {
        Self {
            host,
            upload_delay,
            dry_run,
        }
    }

    pub async fn check_auth(&self) -> bool {
        self.host.check_auth().await
    }

    /// Issue a single creation request for the configured repository.
    pub async fn create_repository(
        &self,
        config: &RepoConfig,
    ) -> Result<RepoIdentity> {
        let req = CreateRepoRequest {
            name: config.name.clone(),
            description: config.description.clone().unwrap_or_default(),
            private: config.private,
            auto_init: true,
        };

        if self.dry_run {
            warn!("dry_run: would create repository: req: {:#?}", req);
            return Ok(RepoIdentity {
                owner: "dry-run".into(),
                full_name: format!("dry-run/{}", req.name),
                html_url: format!("https://github.com/dry-run/{}", req.name),
            });
        }

        self.host.create_repository(req).await
    }

    /// Upload every entry sequentially, in the given order.
    ///
    /// Stops at the first rejected upload; entries after it are never sent.
    /// Each successful upload is followed by the fixed pacing delay.
    pub async fn upload_all(
        &self,
        owner: &str,
        repo: &str,
        files: &[FileEntry],
        on_progress: &mut dyn FnMut(UploadProgress<'_>),
    ) -> Result<()> {
        let total = files.len();

        for (index, file) in files.iter().enumerate() {
            on_progress(UploadProgress {
                index,
                total,
                path: &file.path,
            });

            let req = UploadFileRequest {
                owner: owner.to_string(),
                repo: repo.to_string(),
                path: file.path.clone(),
                message: commit_message(&file.path),
                content: envelope_content(file),
            };

            if self.dry_run {
                warn!(
                    "dry_run: would upload {} ({} bytes) to {owner}/{repo}",
                    req.path,
                    req.content.len()
                );
                continue;
            }

            debug!("uploading {}/{}: {}", index + 1, total, file.path);
            self.host.upload_file(req).await?;

            sleep(self.upload_delay).await;
        }

        info!("uploaded {total} files to {owner}/{repo}");

        Ok(())
    }
}
