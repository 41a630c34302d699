//! Report writer: serializes accumulated rows once after the batch.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::Local;
use tracing::debug;

use crate::error::Result;
use crate::models::report::{BatchSummary, ReportRow};

/// Fixed report header.
pub const REPORT_HEADER: [&str; 5] = [
    "Empresa",
    "Numero Doc",
    "Filial",
    "Nome Arquivo",
    "Chave de Acesso",
];

/// Write the complete report to `path`.
///
/// Layout: extraction timestamp and run totals, a blank line, the fixed
/// semicolon-delimited header, a 100-dash separator line, then one row per
/// processed file in processing order. The key field is empty when no key
/// was found.
pub fn write_report(path: &Path, rows: &[ReportRow], summary: &BatchSummary) -> Result<()> {
    let mut file = File::create(path)?;

    writeln!(
        file,
        "Data da extração: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(file, "Total de arquivos processados: {}", summary.processed)?;
    writeln!(
        file,
        "Arquivos com chaves encontradas: {}",
        summary.with_key
    )?;
    writeln!(file)?;

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .from_writer(file);

    writer.write_record(REPORT_HEADER)?;
    writer.write_record(["-".repeat(100)])?;

    for row in rows {
        writer.write_record([
            row.fields.company.as_str(),
            row.fields.document_number.as_str(),
            row.fields.branch.as_str(),
            row.fields.filename.as_str(),
            row.key.as_deref().unwrap_or(""),
        ])?;
    }

    writer.flush()?;
    debug!("report written to {}", path.display());
    Ok(())
}
