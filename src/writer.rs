/*!
 * Report writer implementation for DirDump
 *
 * Writes the output artifact in two passes: the structure pass creates the
 * file and writes the header plus tree listing, the append pass reopens it
 * in append mode and streams one delimited block per discovered file.
 */

use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::sync::Arc;

use indicatif::ProgressBar;

use crate::config::Config;
use crate::report::FileReportInfo;
use crate::types::{FileRecord, ScanResult};

/// Fixed instructions written at the top of the report
pub const INSTRUCTIONS: &str = "Only show files you edit.\n\
    This is the current version of the project directory and its file contents.\n\n";

/// Fixed heading written before the tree listing
pub const HEADING: &str = "Directory Structure of the Project\n\
    This file contains a structured listing of all directories and files within \
    the project. Contents are included for specified files.\n\n";

/// Delimiter opening a content block
pub const START_MARKER: &str = "--- start -----------------------";

/// Delimiter closing a content block
pub const END_MARKER: &str = "--- end -----------------------";

/// Statistics collected while appending file contents
#[derive(Debug, Clone, Default)]
pub struct WriteStats {
    /// Number of files appended (including failed reads)
    pub files_processed: usize,
    /// Number of files whose content could not be read
    pub read_failures: usize,
    /// Total number of lines across appended files
    pub total_lines: usize,
    /// Total number of characters across appended files
    pub total_chars: usize,
    /// Details for each file, keyed by relative path
    pub file_details: HashMap<String, FileReportInfo>,
}

/// Writer for the plain-text report
pub struct ReportWriter {
    /// Writer configuration
    config: Config,
    /// Progress bar
    progress: Arc<ProgressBar>,
}

impl ReportWriter {
    /// Create a new report writer
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self { config, progress }
    }

    /// Create the output file and write the header and tree listing
    pub fn write_structure(&self, scan: &ScanResult) -> std::io::Result<()> {
        let file = File::create(&self.config.output_file)?;
        let mut writer = BufWriter::new(file);

        writer.write_all(INSTRUCTIONS.as_bytes())?;
        writer.write_all(HEADING.as_bytes())?;
        writer.write_all(scan.tree_text().as_bytes())?;
        writer.write_all(b"\n\n")?;
        writer.flush()
    }

    /// Append one delimited content block per file record, in order
    ///
    /// A file that cannot be read produces an in-band error message in place
    /// of its content; the block is never skipped and the run continues.
    pub fn append_contents(&self, files: &[FileRecord]) -> std::io::Result<WriteStats> {
        let file = OpenOptions::new()
            .append(true)
            .open(&self.config.output_file)?;
        let mut writer = BufWriter::new(file);
        let mut stats = WriteStats::default();

        for record in files {
            let label = record.rel_path.display().to_string();
            self.progress.inc(1);
            self.progress.set_message(format!("Appending: {}", label));

            writeln!(writer, "Contents of {}:", label)?;
            writeln!(writer, "{}", START_MARKER)?;
            writeln!(writer)?;

            // read_to_string closes the handle whether the read succeeds or not
            match fs::read_to_string(&record.path) {
                Ok(content) => {
                    let info = FileReportInfo {
                        lines: content.lines().count(),
                        chars: content.chars().count(),
                    };
                    stats.total_lines += info.lines;
                    stats.total_chars += info.chars;
                    stats.file_details.insert(label, info);
                    writer.write_all(content.as_bytes())?;
                }
                Err(e) => {
                    stats.read_failures += 1;
                    stats.file_details.insert(label, FileReportInfo::default());
                    write!(writer, "Error reading file: {}", e)?;
                }
            }
            stats.files_processed += 1;

            write!(writer, "\n\n{}\n\n\n", END_MARKER)?;
        }

        writer.flush()?;
        Ok(stats)
    }
}
