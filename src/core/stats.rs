//! Overview statistics

use crate::core::walker::Walker;
use crate::error::Result;
use crate::models::analysis::{ExtensionCounter, OverviewStats, TOP_EXTENSIONS};
use crate::models::file_metadata::dotted_extension;

/// Label for files without an extension
pub const NO_EXTENSION: &str = "(no ext)";

/// Count non-skipped files and directories below the walker's root
pub fn collect_overview(walker: &Walker<'_>) -> Result<OverviewStats> {
    let mut total_files = 0;
    let mut total_dirs = 0;
    let mut extensions = ExtensionCounter::default();

    for entry in walker.entries() {
        let entry = entry?;
        let file_type = entry.file_type();

        if file_type.is_dir() {
            total_dirs += 1;
        } else if file_type.is_file() {
            total_files += 1;
            let extension = dotted_extension(entry.path());
            extensions.record(extension.as_deref().unwrap_or(NO_EXTENSION));
        }
    }

    Ok(OverviewStats {
        total_files,
        total_dirs,
        top_extensions: extensions.top(TOP_EXTENSIONS),
    })
}
