use crate::app::ports::HttpClientPort;
use crate::config::Config;
use crate::error::{Result, ToukijoError};
use crate::filter::remove_sentinels;
use crate::output::{write_csv, write_markdown};
use crate::parser::extract_registry;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, instrument};

/// Result of a complete pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct PipelineResult {
    pub source_url: String,
    pub total_rows: usize,
    pub skipped_rows: usize,
    pub filtered_entries: usize,
    pub written_entries: usize,
    pub csv_path: PathBuf,
    pub markdown_path: PathBuf,
}

pub struct Pipeline;

impl Pipeline {
    /// Fetches the source page and returns its body, failing on a non-2xx status.
    #[instrument(skip(http))]
    pub async fn fetch(http: &dyn HttpClientPort, url: &str) -> Result<Vec<u8>> {
        info!("📡 Fetching registry table from {}", url);
        let response = http.get(url).await?;
        if !response.is_success() {
            return Err(ToukijoError::HttpStatus {
                url: url.to_string(),
                status: response.status,
            });
        }
        info!("✅ Fetched {} bytes ({})", response.bytes.len(), response.content_type);
        Ok(response.bytes)
    }

    /// Run the complete pipeline: fetch, extract, filter, sort, write CSV, write Markdown
    #[instrument(skip(http, config), fields(source_url = %config.source_url))]
    pub async fn run(http: &dyn HttpClientPort, config: &Config) -> Result<PipelineResult> {
        let body = Self::fetch(http, &config.source_url).await?;

        info!("🔧 Extracting offices...");
        let extraction = extract_registry(&body)?;
        drop(body);

        let mut registry = extraction.registry;
        let filtered_entries = remove_sentinels(&mut registry);
        let entries = registry.sorted_entries();
        info!(
            "✅ {} offices after removing {} sentinel entries",
            entries.len(),
            filtered_entries
        );

        info!("💾 Writing outputs...");
        write_csv(&config.csv_path, &entries)?;
        write_markdown(&config.markdown_path, &config.markdown_title, &entries)?;

        Ok(PipelineResult {
            source_url: config.source_url.clone(),
            total_rows: extraction.total_rows,
            skipped_rows: extraction.skipped_rows,
            filtered_entries,
            written_entries: entries.len(),
            csv_path: config.csv_path.clone(),
            markdown_path: config.markdown_path.clone(),
        })
    }
}
