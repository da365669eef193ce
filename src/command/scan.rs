//! Scan command implementation.
use log::*;
use std::path::Path;

use crate::{
    error::Result,
    walker::{ScanSummary, walk},
};

/// Report the folder summary and, optionally, every classified file.
pub fn execute(dir: &Path, list_files: bool) -> Result<()> {
    let files = walk(dir)?;
    let summary = ScanSummary::new(dir, &files);

    info!("scanned {}", dir.display());

    println!("Folder:         {}", summary.folder_name);
    println!(
        "Files:          {} ({} text, {} binary)",
        summary.file_count, summary.text_files, summary.binary_files
    );
    println!("Suggested name: {}", summary.suggested_name);

    if list_files {
        for file in files.iter() {
            let kind = if file.content.is_binary() { "binary" } else { "text" };
            println!("{kind:>6}  {}", file.path);
        }
    }

    Ok(())
}
