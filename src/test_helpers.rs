//! Common test helper functions shared across test modules.
use base64::{Engine, prelude::BASE64_STANDARD};

use crate::types::{FileContent, FileEntry, RepoIdentity};

/// Creates a text FileEntry as the walker would produce it.
pub fn text_entry(path: &str, text: &str) -> FileEntry {
    FileEntry {
        path: path.to_string(),
        content: FileContent::Text(text.to_string()),
    }
}

/// Creates a binary FileEntry with base64 encoded content.
pub fn binary_entry(path: &str, bytes: &[u8]) -> FileEntry {
    FileEntry {
        path: path.to_string(),
        content: FileContent::Binary(BASE64_STANDARD.encode(bytes)),
    }
}

/// Identity returned by mocked repository creation.
pub fn create_test_identity() -> RepoIdentity {
    RepoIdentity {
        owner: "octo".to_string(),
        full_name: "octo/site".to_string(),
        html_url: "https://github.com/octo/site".to_string(),
    }
}
