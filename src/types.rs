//! Shared data types for a deployment run.
use secrecy::SecretString;

/// Payload of a walked file, already in the encoding it is handed to the
/// publisher with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// Decoded UTF-8 text, passed through unchanged.
    Text(String),
    /// Standard base64 of the file's exact bytes.
    Binary(String),
}

impl FileContent {
    pub fn as_str(&self) -> &str {
        match self {
            FileContent::Text(s) | FileContent::Binary(s) => s,
        }
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, FileContent::Binary(_))
    }
}

/// One classified file from a directory walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Slash separated path relative to the walk root.
    pub path: String,
    pub content: FileContent,
}

/// User supplied settings for the repository to create. Immutable for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoConfig {
    pub name: String,
    pub description: Option<String>,
    pub private: bool,
}

/// Identity of a freshly created remote repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoIdentity {
    /// Login of the owning account.
    pub owner: String,
    /// `owner/name`
    pub full_name: String,
    /// Browser URL of the repository.
    pub html_url: String,
}

impl RepoIdentity {
    /// Repository name without the owner prefix.
    pub fn name(&self) -> &str {
        self.full_name
            .split_once('/')
            .map(|(_, name)| name)
            .unwrap_or(&self.full_name)
    }
}

/// Outcome of an accepted deployment request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployResult {
    pub url: String,
}

/// Bearer credentials for the repository host and the deploy platform.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub github: SecretString,
    pub vercel: SecretString,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repo_identity_name_strips_owner() {
        let identity = RepoIdentity {
            owner: "octo".into(),
            full_name: "octo/site".into(),
            html_url: "https://github.com/octo/site".into(),
        };
        assert_eq!(identity.name(), "site");
    }

    #[test]
    fn file_content_exposes_payload() {
        let text = FileContent::Text("hi".into());
        let bin = FileContent::Binary("AQID".into());
        assert_eq!(text.as_str(), "hi");
        assert!(!text.is_binary());
        assert_eq!(bin.as_str(), "AQID");
        assert!(bin.is_binary());
    }
}
