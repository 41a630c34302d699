//! CLI application for extracting NFe access keys from PDF documents.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use chavex_core::{BatchProcessor, ChavexConfig};

/// Extract NFe access keys from fiscal document PDFs and sort the files
/// into with-key / without-key folders
#[derive(Parser)]
#[command(name = "chavex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input folder with the PDFs (default: current directory)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output folder for files with a key (default: "PDFs_Com_Chave")
    #[arg(short = 'c', long = "com-chave")]
    com_chave: Option<PathBuf>,

    /// Output folder for files without a key (default: "PDFs_Sem_Chave")
    #[arg(short = 's', long = "sem-chave")]
    sem_chave: Option<PathBuf>,

    /// Report file path (default: "chaves_extraidas_final.txt")
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Show detailed help text
    #[arg(long)]
    ajuda: bool,

    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.ajuda {
        Cli::command().print_long_help()?;
        println!();
        return Ok(());
    }

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Load configuration; CLI flags override config values
    let mut config = if let Some(path) = &cli.config {
        ChavexConfig::from_file(path)?
    } else {
        ChavexConfig::default()
    };

    if let Some(input) = cli.input {
        config.folders.input = input;
    }
    if let Some(com_chave) = cli.com_chave {
        config.folders.with_key = com_chave;
    }
    if let Some(sem_chave) = cli.sem_chave {
        config.folders.without_key = sem_chave;
    }
    if let Some(output) = cli.output {
        config.folders.report_file = output;
    }

    let processor = BatchProcessor::new(config.clone());
    let files = processor.list_files()?;

    if files.is_empty() {
        println!(
            "{} No PDF files found in {}",
            style("ℹ").blue(),
            config.folders.input.display()
        );
        return Ok(());
    }

    println!(
        "{} Found {} PDF files to process",
        style("ℹ").blue(),
        files.len()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let outcome = processor.run_with_progress(|_row| pb.inc(1))?;
    pb.finish_and_clear();

    let summary = outcome.summary;
    println!();
    println!(
        "{} Processed {} files",
        style("✓").green(),
        summary.processed
    );
    println!(
        "   {} with key, {} without key, {} errored",
        style(summary.with_key).green(),
        style(summary.without_key).yellow(),
        style(summary.errored).red()
    );
    println!(
        "   Files with key copied to:    {}",
        config.folders.with_key.display()
    );
    println!(
        "   Files without key copied to: {}",
        config.folders.without_key.display()
    );
    println!(
        "   Report saved to:             {}",
        config.folders.report_file.display()
    );

    Ok(())
}
