/*!
 * Configuration handling for DirDump
 */

use std::path::{Path, PathBuf};

use clap::Parser;
use clap_complete::Shell;

use crate::error::Result;
use crate::utils::DEFAULT_EXCLUDE;
use crate::{bail, ensure};

/// Command-line arguments for DirDump
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "dirdump",
    version = env!("CARGO_PKG_VERSION"),
    about = "Dump a directory tree and its file contents into a single text report",
    long_about = "Writes a tree listing of a directory followed by the contents of every \
                  non-excluded file, as a single plain-text report designed for sharing \
                  project context with reviewers or Large Language Models (LLMs)."
)]
pub struct Args {
    /// Target directory to process
    #[clap(default_value = ".")]
    pub directory_path: String,

    /// Output report file name
    #[clap(default_value = "program_structure.txt")]
    pub output_file: String,

    /// Comma-separated list of names or root-relative sub-paths to exclude
    #[clap(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Do not apply the built-in exclusion list (.git, node_modules, ...)
    #[clap(long)]
    pub no_default_excludes: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Target directory to process
    pub target_dir: PathBuf,

    /// Output report file path
    pub output_file: PathBuf,

    /// Effective exclusion rules (names or root-relative sub-paths)
    pub excludes: Vec<String>,
}

impl Config {
    /// Create configuration from command-line arguments
    ///
    /// Resolves the effective exclusion list: caller-supplied rules, the
    /// built-in defaults (unless suppressed), and the output file's own name
    /// so the report never includes itself.
    pub fn from_args(args: Args) -> Self {
        let output_file = PathBuf::from(args.output_file);
        let mut excludes = args.exclude;

        if !args.no_default_excludes {
            excludes.extend(DEFAULT_EXCLUDE.iter().map(|s| s.to_string()));
        }

        if let Some(name) = output_file.file_name() {
            let name = name.to_string_lossy().to_string();
            if !excludes.contains(&name) {
                excludes.push(name);
            }
        }

        Self {
            target_dir: PathBuf::from(args.directory_path),
            output_file,
            excludes,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.target_dir.exists() && self.target_dir.is_dir(),
            Config,
            "Target directory not found: {}",
            self.target_dir.display()
        );

        // Check if the output file directory exists and is writable
        if let Some(parent) = self.output_file.parent() {
            if !parent.exists() && parent != Path::new("") {
                bail!(
                    Config,
                    "Output directory not found: {}",
                    parent.display()
                );
            }
        }

        Ok(())
    }
}
