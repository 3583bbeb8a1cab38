/*!
 * Core types and data structures for the DirDump application
 */

use std::path::PathBuf;

/// Indentation used for each level of nesting in the tree listing
pub const INDENT: &str = "    ";

/// Branch marker prefixed to every tree line
pub const BRANCH: &str = "├── ";

/// Kind of filesystem entry a tree line represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Directory containing other entries
    Directory,
    /// Anything that is not a directory (regular file, symlink, ...)
    File,
}

/// One rendered line of the directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    /// Entry base name
    pub name: String,
    /// Nesting depth below the scan root (root children are depth 0)
    pub depth: usize,
    /// Whether the entry is a directory or a file
    pub kind: EntryKind,
}

impl TreeLine {
    /// Render the line with indentation and branch marker
    pub fn render(&self) -> String {
        format!("{}{}{}", INDENT.repeat(self.depth), BRANCH, self.name)
    }
}

/// A file discovered during the scan, to be read at append time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Absolute path used for reading content
    pub path: PathBuf,
    /// Path relative to the scan root, used for labeling output
    pub rel_path: PathBuf,
}

/// Result of scanning a directory tree
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Tree lines for every visited entry, in depth-first pre-order
    pub lines: Vec<TreeLine>,
    /// Records for every visited file, in the same relative order
    pub files: Vec<FileRecord>,
}

impl ScanResult {
    /// Render all tree lines joined by newlines
    pub fn tree_text(&self) -> String {
        self.lines
            .iter()
            .map(TreeLine::render)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
