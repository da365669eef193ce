//! Text/binary classification of walked files.
//!
//! Classification is a heuristic on the file name only: a name ending in one
//! of [`TEXT_EXTENSIONS`] is text, everything else (including names with no
//! extension) is binary. File contents are never sniffed.
use base64::{Engine, prelude::BASE64_STANDARD};

use crate::types::FileContent;

/// Case-sensitive suffixes of files handled as text.
pub const TEXT_EXTENSIONS: &[&str] = &[
    ".js", ".jsx", ".ts", ".tsx", ".json", ".css", ".scss", ".html", ".md",
    ".txt", ".yaml", ".yml", ".xml", ".svg",
];

/// Returns true when `name` ends with one of the text extensions.
pub fn is_text_file(name: &str) -> bool {
    TEXT_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Produce the transport payload for a file.
///
/// Text files are decoded as UTF-8; invalid sequences are replaced with
/// U+FFFD rather than rejected. Binary files are base64 encoded verbatim.
pub fn classify(name: &str, bytes: &[u8]) -> FileContent {
    if is_text_file(name) {
        FileContent::Text(String::from_utf8_lossy(bytes).into_owned())
    } else {
        FileContent::Binary(BASE64_STANDARD.encode(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_text_extensions() {
        for name in ["index.js", "App.tsx", "data.json", "README.md", "a.svg"]
        {
            assert!(is_text_file(name), "{name} should be text");
        }
    }

    #[test]
    fn everything_else_is_binary() {
        for name in ["logo.png", "Makefile", "font.woff2", "archive.tar.gz"] {
            assert!(!is_text_file(name), "{name} should be binary");
        }
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(!is_text_file("NOTES.TXT"));
        assert!(!is_text_file("index.JS"));
    }

    #[test]
    fn text_passes_through_unchanged() {
        let input = "const greeting = \"héllo\";\n";
        let content = classify("main.js", input.as_bytes());
        assert_eq!(content, FileContent::Text(input.to_string()));
        assert_eq!(content.as_str().as_bytes(), input.as_bytes());
    }

    #[test]
    fn binary_round_trips_through_base64() {
        let bytes = [0u8, 159, 146, 150, 255, 10];
        let content = classify("blob.bin", &bytes);
        assert!(content.is_binary());
        let decoded = BASE64_STANDARD.decode(content.as_str()).unwrap();
        assert_eq!(decoded, bytes);
    }

    #[test]
    fn invalid_utf8_in_text_file_is_accepted() {
        let bytes = [b'o', b'k', 0xff, b'!'];
        let content = classify("notes.txt", &bytes);
        assert_eq!(content, FileContent::Text("ok\u{fffd}!".into()));
    }

    #[test]
    fn empty_files_classify_cleanly() {
        assert_eq!(classify("empty.md", b""), FileContent::Text(String::new()));
        assert_eq!(
            classify("empty.bin", b""),
            FileContent::Binary(String::new())
        );
    }
}
