//! Configuration for remote service connections.
use secrecy::SecretString;

/// Default GitHub REST API base URL.
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
/// Default Vercel REST API base URL.
pub const DEFAULT_VERCEL_API_URL: &str = "https://api.vercel.com";
/// Branch the deploy platform builds from. Repositories are created with
/// `auto_init`, so this is the host's default primary branch.
pub const DEFAULT_DEPLOY_BRANCH: &str = "main";
/// Pause between consecutive file uploads, in milliseconds.
pub const DEFAULT_UPLOAD_DELAY_MS: u64 = 100;
/// Fallback message when repository creation fails without one.
pub const REPO_CREATION_FALLBACK: &str = "Failed to create repository";
/// Fallback message when a deployment request fails without one.
pub const DEPLOY_FALLBACK: &str = "Failed to deploy to Vercel";

/// Connection settings for a single remote service.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// API base URL, e.g. "https://api.github.com".
    pub base_url: String,
    /// Bearer token for authentication.
    pub token: SecretString,
}

impl RemoteConfig {
    pub fn new(base_url: impl Into<String>, token: SecretString) -> Self {
        Self {
            base_url: base_url.into(),
            token,
        }
    }

    /// Base URL with any trailing slash removed.
    pub fn trimmed_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// Pick the remote-supplied message, or the fallback when it is blank.
pub fn message_or(message: Option<&str>, fallback: &str) -> String {
    match message.map(str::trim) {
        Some(msg) if !msg.is_empty() => msg.to_string(),
        _ => fallback.to_string(),
    }
}
