//! Recursive directory walk producing classified file entries.
//!
//! Entries are yielded depth-first in the order the filesystem enumerates
//! them. Callers must not assume lexicographic ordering.
use log::*;
use std::{fs, path::Path};

use crate::{
    classifier::classify,
    error::{Result, ShipfolderError},
    types::FileEntry,
};

/// Directory names skipped entirely, along with everything beneath them.
pub const EXCLUDED_DIRS: &[&str] =
    &["node_modules", ".git", ".next", "dist", "build"];

/// Returns true when a directory with this name is never descended into.
pub fn is_excluded_dir(name: &str) -> bool {
    EXCLUDED_DIRS.contains(&name)
}

/// Walk `root` and classify every file found outside excluded directories.
///
/// Any unreadable directory or file aborts the whole walk.
pub fn walk(root: &Path) -> Result<Vec<FileEntry>> {
    let mut files = vec![];
    walk_dir(root, "", &mut files)?;
    debug!("walked {} files under {}", files.len(), root.display());
    Ok(files)
}

fn walk_dir(
    dir: &Path,
    prefix: &str,
    files: &mut Vec<FileEntry>,
) -> Result<()> {
    let entries =
        fs::read_dir(dir).map_err(|e| ShipfolderError::traversal(dir, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| ShipfolderError::traversal(dir, e))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|e| ShipfolderError::traversal(&path, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();

        let rel_path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}/{name}")
        };

        if file_type.is_dir() {
            if is_excluded_dir(&name) {
                debug!("skipping excluded directory: {rel_path}");
                continue;
            }
            walk_dir(&path, &rel_path, files)?;
        } else if file_type.is_file() {
            let bytes = fs::read(&path)
                .map_err(|e| ShipfolderError::traversal(&path, e))?;
            files.push(FileEntry {
                content: classify(&name, &bytes),
                path: rel_path,
            });
        } else {
            debug!("skipping non-regular file: {rel_path}");
        }
    }

    Ok(())
}

/// Suggested repository name for a selected folder: lowercased, with each
/// run of whitespace collapsed into a single `-`.
pub fn suggest_repo_name(folder_name: &str) -> String {
    folder_name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Overview of a walked folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    pub folder_name: String,
    pub file_count: usize,
    pub text_files: usize,
    pub binary_files: usize,
    pub suggested_name: String,
}

impl ScanSummary {
    /// Relative roots such as `.` are resolved first so the folder name is
    /// the directory's real name.
    pub fn new(root: &Path, files: &[FileEntry]) -> Self {
        let resolved =
            fs::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
        let folder_name = resolved
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let binary_files =
            files.iter().filter(|f| f.content.is_binary()).count();

        Self {
            suggested_name: suggest_repo_name(&folder_name),
            folder_name,
            file_count: files.len(),
            text_files: files.len() - binary_files,
            binary_files,
        }
    }
}
