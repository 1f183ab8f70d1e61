use anyhow::Context;
use tracing::{error, info};

use toukijo_scraper::config::Config;
use toukijo_scraper::infra::ReqwestHttp;
use toukijo_scraper::logging;
use toukijo_scraper::pipeline::Pipeline;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _log_guard = logging::init_logging();

    let config = Config::load().context("loading configuration")?;
    let http = ReqwestHttp::new();

    info!("🚀 Starting toukijo pipeline");
    let result = match Pipeline::run(&http, &config).await {
        Ok(result) => result,
        Err(e) => {
            error!(kind = ?e.kind(), "Pipeline failed: {}", e);
            return Err(e).context("toukijo pipeline failed");
        }
    };

    info!(
        written = result.written_entries,
        skipped_rows = result.skipped_rows,
        "Pipeline finished"
    );
    println!("📊 Wrote {} offices", result.written_entries);
    println!("   CSV: {}", result.csv_path.display());
    println!("   Markdown: {}", result.markdown_path.display());
    Ok(())
}
