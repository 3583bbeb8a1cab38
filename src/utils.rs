/*!
 * Utility functions for DirDump
 */

use std::path::Path;

use once_cell::sync::Lazy;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::Result;
use crate::scanner::is_excluded;

/// Count total files for progress tracking
///
/// Applies the same exclusion rules as the scanner, so the count matches the
/// number of content blocks that will be appended.
pub fn count_files(dir: &Path, config: &Config) -> Result<u64> {
    let root = dir.to_path_buf();
    let excludes = config.excludes.clone();
    let mut count = 0;

    let walker = WalkDir::new(dir).into_iter().filter_entry(move |entry| {
        if entry.depth() == 0 {
            return true;
        }
        let name = entry.file_name().to_string_lossy();
        let rel = entry.path().strip_prefix(&root).unwrap_or(entry.path());
        !is_excluded(&name, rel, &excludes)
    });

    for entry in walker {
        let entry = entry?;
        if entry.depth() > 0 && !entry.file_type().is_dir() {
            count += 1;
        }
    }

    Ok(count)
}

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}

/// Default exclusion rules applied unless suppressed via the CLI
pub static DEFAULT_EXCLUDE: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Version control
        ".git",
        ".svn",
        ".hg",
        // OS files
        ".DS_Store",
        "Thumbs.db",
        // Dependencies and lockfiles
        "node_modules",
        "package-lock.json",
        "yarn.lock",
        // Build output
        "target",
        "dist",
        "build",
        // Python
        "__pycache__",
        ".venv",
        "venv",
        // Secrets
        ".env",
        // IDEs
        ".idea",
        ".vscode",
    ]
});
