//! Batch orchestration: per-file pipeline, folder routing and report
//! accumulation for one run.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::chave::{ChaveParser, ExtractionOutcome};
use crate::error::{ChavexError, Result};
use crate::models::config::ChavexConfig;
use crate::models::report::{BatchSummary, FilenameFields, ReportRow};
use crate::pdf::{PdfTextSource, TextSource};
use crate::report::write_report;

/// Result of a whole batch run.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    /// One row per processed file, in processing order.
    pub rows: Vec<ReportRow>,
    /// Final counters.
    pub summary: BatchSummary,
}

/// Sequential batch processor.
///
/// Owns the row accumulator and counters for exactly one run; files are
/// processed one at a time in sorted listing order, and a failing file
/// never aborts the batch. Only pre-flight configuration problems are
/// fatal.
pub struct BatchProcessor<S: TextSource> {
    config: ChavexConfig,
    parser: ChaveParser,
    source: S,
}

impl BatchProcessor<PdfTextSource> {
    /// Create a processor reading real PDFs from the filesystem.
    pub fn new(config: ChavexConfig) -> Self {
        Self::with_source(config, PdfTextSource)
    }
}

impl<S: TextSource> BatchProcessor<S> {
    /// Create a processor with a custom text source.
    pub fn with_source(config: ChavexConfig, source: S) -> Self {
        let parser = ChaveParser::from_config(&config.extraction);
        Self {
            config,
            parser,
            source,
        }
    }

    /// List the PDF files of the input folder in stable (sorted) order.
    ///
    /// A missing input folder is a configuration error and aborts before
    /// any processing starts.
    pub fn list_files(&self) -> Result<Vec<PathBuf>> {
        let input = &self.config.folders.input;
        if !input.is_dir() {
            return Err(ChavexError::Config(format!(
                "input folder not found: {}",
                input.display()
            )));
        }

        let mut files: Vec<PathBuf> = fs::read_dir(input)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path
                        .extension()
                        .and_then(|e| e.to_str())
                        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
            })
            .collect();

        files.sort();
        Ok(files)
    }

    /// Run the whole batch and write the report.
    pub fn run(self) -> Result<BatchOutcome> {
        self.run_with_progress(|_| {})
    }

    /// Run the whole batch, invoking `on_file` after each file.
    pub fn run_with_progress(
        self,
        mut on_file: impl FnMut(&ReportRow),
    ) -> Result<BatchOutcome> {
        let files = self.list_files()?;
        self.ensure_output_folders()?;

        info!("processing {} PDF files", files.len());

        let mut rows = Vec::with_capacity(files.len());
        let mut summary = BatchSummary::default();

        for path in &files {
            let row = self.process_file(path, &mut summary);
            on_file(&row);
            rows.push(row);
        }

        write_report(&self.config.folders.report_file, &rows, &summary)?;

        Ok(BatchOutcome { rows, summary })
    }

    fn ensure_output_folders(&self) -> Result<()> {
        for folder in [
            &self.config.folders.with_key,
            &self.config.folders.without_key,
        ] {
            fs::create_dir_all(folder).map_err(|source| ChavexError::Filesystem {
                path: folder.clone(),
                source,
            })?;
        }
        Ok(())
    }

    /// Run the pipeline for one file and route it. Per-file errors are
    /// isolated: an unreadable PDF or a failed copy is logged and counted,
    /// and the run continues.
    fn process_file(&self, path: &Path, summary: &mut BatchSummary) -> ReportRow {
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        let fields = FilenameFields::parse(filename);

        summary.processed += 1;
        let mut file_errored = false;

        let outcome = match self.source.document_text(path) {
            Ok(pages) => {
                let text = pages.join("\n");
                self.parser.parse(&text).outcome
            }
            Err(e) => {
                warn!("failed to read {}: {}", path.display(), e);
                file_errored = true;
                ExtractionOutcome::NotFound
            }
        };

        let (key, destination) = match outcome {
            ExtractionOutcome::Found(key) => {
                debug!("{}: key {}", filename, key);
                summary.with_key += 1;
                (Some(key), &self.config.folders.with_key)
            }
            ExtractionOutcome::NotFound => {
                debug!("{}: no valid key", filename);
                summary.without_key += 1;
                (None, &self.config.folders.without_key)
            }
        };

        if let Err(e) = self.route_file(path, filename, destination) {
            error!("failed to route {}: {}", path.display(), e);
            file_errored = true;
        }

        if file_errored {
            summary.errored += 1;
        }

        ReportRow { fields, key }
    }

    fn route_file(&self, path: &Path, filename: &str, destination: &Path) -> Result<()> {
        let target = destination.join(filename);
        fs::copy(path, &target).map_err(|source| ChavexError::Filesystem {
            path: target,
            source,
        })?;
        Ok(())
    }
}
