/*!
 * Command-line interface for DirDump
 */

use std::fs;
use std::io;
use std::sync::Arc;
use std::time::Instant;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use dirdump::config::{Args, Config};
use dirdump::report::{ReportFormat, Reporter, RunReport};
use dirdump::scanner::Scanner;
use dirdump::utils::count_files;
use dirdump::writer::ReportWriter;
use dirdump::Result;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Generate shell completions and exit if requested
    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    // Create configuration
    let config = Config::from_args(args);

    // Validate configuration
    config.validate()?;

    // Create progress bar
    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%) Elapsed: {elapsed_precise}")
            .unwrap(),
    );
    progress.enable_steady_tick(std::time::Duration::from_millis(100));
    progress.set_prefix("📊 Setup");
    progress.set_message(format!(
        "📂 Scanning directory: {}",
        config.target_dir.display()
    ));

    // Count files for progress tracking
    match count_files(&config.target_dir, &config) {
        Ok(count) => {
            progress.set_message(format!("🔎 Found {} files to process", count));
            progress.set_length(count);
        }
        Err(e) => {
            progress.set_message(format!("⚠️ Warning: Failed to count files: {}", e));
        }
    }

    progress.set_prefix("📊 Processing");
    progress.set_message("Starting scan...");

    // Create scanner and writer
    let scanner = Scanner::new(config.clone());
    let writer = ReportWriter::new(config.clone(), Arc::new(progress.clone()));

    // Start timing both scan and write operations
    let start_time = Instant::now();

    // Scan directory, then write the structure and append file contents
    let scan = scanner.scan()?;
    writer.write_structure(&scan)?;
    let stats = writer.append_contents(&scan.files)?;

    // Calculate total duration (scan + write)
    let total_duration = start_time.elapsed();

    // Clear the progress bar
    progress.finish_and_clear();

    let output_size = fs::metadata(&config.output_file).map(|m| m.len()).unwrap_or(0);

    // Prepare the run report
    let run_report = RunReport {
        output_file: config.output_file.display().to_string(),
        output_size,
        duration: total_duration,
        files_processed: stats.files_processed,
        read_failures: stats.read_failures,
        total_lines: stats.total_lines,
        total_chars: stats.total_chars,
        file_details: stats.file_details,
    };

    // Create a reporter and print the report
    let reporter = Reporter::new(ReportFormat::ConsoleTable);
    reporter.print_report(&run_report);

    Ok(())
}
