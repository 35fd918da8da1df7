//! # Export Files
//!
//! Records are encoded as CSV (CRLF line endings, one record per text line
//! split on `,`, the blank separator becoming `""`) and appended to the
//! site's export file. A batch is encoded completely in memory first and then
//! written with a single append, so a failed run never leaves half a phone in
//! the file.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::batch::DeviceAssignment;
use crate::error::ExportError;
use crate::record::ProvisioningRecord;

/// Encodes records into `writer`.
pub fn write_records<W: Write>(writer: W, records: &[ProvisioningRecord]) -> Result<(), ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    for record in records {
        for line in record.lines() {
            csv_writer.write_record(line.split(','))?;
        }
    }
    csv_writer.flush()?;

    Ok(())
}

pub fn encode_records(records: &[ProvisioningRecord]) -> Result<Vec<u8>, ExportError> {
    let mut buffer: Vec<u8> = Vec::new();
    write_records(&mut buffer, records)?;
    Ok(buffer)
}

/// Appends the encoded batch to the export file.
pub fn append_records(path: &Path, records: &[ProvisioningRecord]) -> Result<(), ExportError> {
    let encoded: Vec<u8> = encode_records(records)?;
    append(path, &encoded)?;
    info!("Wrote {} device records to {}", records.len(), path.display());
    Ok(())
}

/// Appends one line per phone to the deployment details file.
pub fn append_deployment(path: &Path, assignments: &[DeviceAssignment]) -> Result<(), ExportError> {
    let text: String = assignments
        .iter()
        .map(|assignment| assignment.summary_line() + "\n")
        .collect();
    append(path, text.as_bytes())
}

fn append(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    let io_error = |source: std::io::Error| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_error)?;
    file.write_all(bytes).map_err(io_error)?;
    file.flush().map_err(io_error)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
