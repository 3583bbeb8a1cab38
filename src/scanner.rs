/*!
 * Directory tree scanning functionality
 */

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::config::Config;
use crate::error::Result;
use crate::types::{EntryKind, FileRecord, ScanResult, TreeLine};

/// Check whether an entry is excluded by the given rules
///
/// A rule matches when it equals the entry's base name (so a plain name
/// excludes entries at any depth), when it equals the entry's root-relative
/// path, or when it is a parent of that path (rule followed by `/`).
/// Relative paths are compared with `/` separators; absolute rules never
/// match. An excluded directory prunes its whole subtree.
pub fn is_excluded(name: &str, rel_path: &Path, rules: &[String]) -> bool {
    let rel = rel_path.to_string_lossy();
    rules.iter().any(|rule| {
        rule == name || rel == rule.as_str() || rel.starts_with(&format!("{}/", rule))
    })
}

/// Scanner for directory contents
pub struct Scanner {
    /// Scanner configuration
    config: Config,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Scan the target directory and return the tree lines and file records
    ///
    /// Entries are visited depth-first in byte-wise lexicographic order of
    /// their file names; a directory's own line precedes its children's, and
    /// a subtree is spliced in before the next sibling. Files are recorded
    /// in the same relative order as their tree lines. A directory that
    /// cannot be read aborts the whole scan.
    pub fn scan(&self) -> Result<ScanResult> {
        let abs_path = fs::canonicalize(&self.config.target_dir)?;
        let mut result = ScanResult::default();
        self.scan_directory(&abs_path, Path::new(""), 0, &mut result)?;
        Ok(result)
    }

    /// Scan one directory level, recursing into subdirectories
    fn scan_directory(
        &self,
        abs_path: &Path,
        rel_path: &Path,
        depth: usize,
        result: &mut ScanResult,
    ) -> Result<()> {
        let walker = WalkDir::new(abs_path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();
            let entry_rel = rel_path.join(&name);

            if is_excluded(&name, &entry_rel, &self.config.excludes) {
                continue;
            }

            if entry.file_type().is_dir() {
                result.lines.push(TreeLine {
                    name,
                    depth,
                    kind: EntryKind::Directory,
                });
                self.scan_directory(entry.path(), &entry_rel, depth + 1, result)?;
            } else {
                result.lines.push(TreeLine {
                    name,
                    depth,
                    kind: EntryKind::File,
                });
                result.files.push(FileRecord {
                    path: entry.path().to_path_buf(),
                    rel_path: entry_rel,
                });
            }
        }

        Ok(())
    }
}
