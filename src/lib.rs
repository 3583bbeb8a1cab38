/*!
 * DirDump - Dump a directory tree and its file contents into a single report
 *
 * This library walks a project directory, renders a tree listing of its
 * structure, and appends the contents of every non-excluded file into one
 * plain-text document for use as context for Large Language Models.
 */

pub mod config;
pub mod error;
pub mod report;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use config::{Args, Config};
pub use error::{DirDumpError, Result};
pub use report::{FileReportInfo, ReportFormat, Reporter, RunReport};
pub use scanner::Scanner;
pub use types::{EntryKind, FileRecord, ScanResult, TreeLine};
pub use utils::{count_files, format_file_size};
pub use writer::{ReportWriter, WriteStats};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
