use crate::error::{Result, ToukijoError};
use crate::types::CodeEntry;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Escapes a value for a single pipe-table cell.
fn escape_cell(value: &str) -> String {
    value
        .replace("\r\n", " ")
        .replace(['\r', '\n'], " ")
        .replace('|', "\\|")
}

/// Title line, table header, separator, then one row per entry.
pub fn render_markdown(title: &str, entries: &[CodeEntry]) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {}\n", title));
    out.push_str("| code | name |\n");
    out.push_str("| --- | --- |\n");
    for entry in entries {
        out.push_str(&format!(
            "| {} | {} |\n",
            escape_cell(&entry.code),
            escape_cell(&entry.name)
        ));
    }
    out
}

/// Creates (or truncates) `path` and writes the Markdown table.
pub fn write_markdown(path: &Path, title: &str, entries: &[CodeEntry]) -> Result<()> {
    let file = File::create(path).map_err(|e| ToukijoError::file(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(render_markdown(title, entries).as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| ToukijoError::file(path, e))?;
    info!("Wrote {} entries to {}", entries.len(), path.display());
    Ok(())
}
