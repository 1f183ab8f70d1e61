use crate::constants::CSV_HEADER;
use crate::error::{Result, ToukijoError};
use crate::types::CodeEntry;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Writes `code,name` followed by one record per entry.
///
/// The header is written even when there are no entries.
pub fn write_records<W: Write>(
    writer: W,
    entries: &[CodeEntry],
) -> std::result::Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    writer.write_record(CSV_HEADER)?;
    for entry in entries {
        writer.serialize(entry)?;
    }
    writer.flush()?;
    Ok(())
}

/// Creates (or truncates) `path` and writes the entries as CSV.
pub fn write_csv(path: &Path, entries: &[CodeEntry]) -> Result<()> {
    let file = File::create(path).map_err(|e| ToukijoError::file(path, e))?;
    write_records(file, entries).map_err(|source| ToukijoError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote {} entries to {}", entries.len(), path.display());
    Ok(())
}
