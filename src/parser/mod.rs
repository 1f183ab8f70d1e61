use crate::error::{Result, ToukijoError};
use crate::types::{Registry, TableRow};
use scraper::{ElementRef, Html, Selector};
use std::borrow::Cow;
use tracing::{debug, info, warn};

/// Registry built from one page, with row bookkeeping for the run summary
#[derive(Debug, Clone)]
pub struct Extraction {
    pub registry: Registry,
    /// Data rows seen after the header
    pub total_rows: usize,
    /// Data rows dropped for having fewer than two cells
    pub skipped_rows: usize,
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| ToukijoError::Parse(format!("invalid selector '{}': {:?}", css, e)))
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// Reads every `table tr` row of the page in document order.
pub fn parse_rows(bytes: &[u8]) -> Result<Vec<TableRow>> {
    debug!("parse_rows: start bytes_len={}", bytes.len());
    let html = String::from_utf8_lossy(bytes);
    if let Cow::Owned(_) = html {
        warn!("Page is not valid UTF-8; invalid bytes replaced with U+FFFD");
    }
    let document = Html::parse_document(&html);

    let table_selector = selector("table")?;
    if document.select(&table_selector).next().is_none() {
        return Err(ToukijoError::Parse("no <table> element found".to_string()));
    }

    let row_selector = selector("table tr")?;
    let cell_selector = selector("td")?;
    let rows: Vec<TableRow> = document
        .select(&row_selector)
        .map(|row| TableRow::new(row.select(&cell_selector).map(cell_text).collect()))
        .collect();

    debug!("parse_rows: found {} rows", rows.len());
    Ok(rows)
}

/// Builds the code -> name registry from the page, skipping the header row.
pub fn extract_registry(bytes: &[u8]) -> Result<Extraction> {
    let rows = parse_rows(bytes)?;
    let mut registry = Registry::new();
    let mut skipped_rows = 0usize;

    for (i, row) in rows.iter().enumerate().skip(1) {
        match row.code_and_name() {
            Some((code, name)) => registry.insert(code, name),
            None => {
                warn!("Skipping row {}: expected 2 cells, found {}", i, row.len());
                skipped_rows += 1;
            }
        }
    }

    let total_rows = rows.len().saturating_sub(1);
    info!(
        "Extracted {} offices from {} rows ({} skipped)",
        registry.len(),
        total_rows,
        skipped_rows
    );

    Ok(Extraction {
        registry,
        total_rows,
        skipped_rows,
    })
}
