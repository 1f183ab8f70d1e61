use std::fs;

use tempfile::tempdir;
use toukijo_scraper::config::Config;
use toukijo_scraper::error::ErrorKind;
use toukijo_scraper::infra::ReqwestHttp;
use toukijo_scraper::pipeline::Pipeline;
use toukijo_scraper::types::CodeEntry;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE_PATH: &str = "/toukinet/mock/SC01WS01.html";

fn page(rows: &[(&str, &str)]) -> String {
    let mut html = String::from("<html><body><table>\n");
    for (code, name) in rows {
        html.push_str(&format!("<tr><td>{}</td><td>{}</td></tr>\n", code, name));
    }
    html.push_str("</table></body></html>");
    html
}

async fn serve(status: u16, body: String) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(PAGE_PATH))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_raw(body.into_bytes(), "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;
    server
}

fn config_for(server: &MockServer, dir: &std::path::Path) -> Config {
    Config {
        source_url: format!("{}{}", server.uri(), PAGE_PATH),
        ..Config::default()
    }
    .with_output_dir(dir)
}

fn read_csv(path: &std::path::Path) -> Vec<CodeEntry> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, vec!["code", "name"]);
    reader.deserialize().map(|r| r.unwrap()).collect()
}

#[tokio::test]
async fn test_sentinel_rows_filtered_and_sorted() {
    let body = page(&[
        ("header", "header"),
        ("0001", "Tokyo Legal Affairs Bureau"),
        ("0000", "All Offices"),
        ("0002", "Osaka Legal Affairs Bureau"),
    ]);
    let server = serve(200, body).await;
    let dir = tempdir().unwrap();
    let config = config_for(&server, dir.path());

    let result = Pipeline::run(&ReqwestHttp::new(), &config).await.unwrap();
    assert_eq!(result.written_entries, 2);

    let entries = read_csv(&config.csv_path);
    assert_eq!(
        entries,
        vec![
            CodeEntry::new("0001", "Tokyo Legal Affairs Bureau"),
            CodeEntry::new("0002", "Osaka Legal Affairs Bureau"),
        ]
    );

    let csv_text = fs::read_to_string(&config.csv_path).unwrap();
    assert_eq!(csv_text.lines().count(), 3);

    let markdown = fs::read_to_string(&config.markdown_path).unwrap();
    let lines: Vec<&str> = markdown.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "# 登記所コード一覧");
    assert_eq!(lines[1], "| code | name |");
    assert_eq!(lines[2], "| --- | --- |");
    assert_eq!(lines[3], "| 0001 | Tokyo Legal Affairs Bureau |");
    assert_eq!(lines[4], "| 0002 | Osaka Legal Affairs Bureau |");
}

#[tokio::test]
async fn test_header_label_code_removed() {
    // A data row whose code is the header label must not survive
    let body = page(&[
        ("登記所コード", "登記所名"),
        ("登記所コード", "登記所名"),
        ("0101", "札幌法務局"),
    ]);
    let server = serve(200, body).await;
    let dir = tempdir().unwrap();
    let config = config_for(&server, dir.path());

    let result = Pipeline::run(&ReqwestHttp::new(), &config).await.unwrap();
    assert_eq!(result.filtered_entries, 1);
    assert_eq!(read_csv(&config.csv_path), vec![CodeEntry::new("0101", "札幌法務局")]);
}

#[tokio::test]
async fn test_entry_count_and_order_match_input() {
    let rows: Vec<(String, String)> = (1..=25)
        .rev()
        .map(|i| (format!("{:04}", i * 7), format!("法務局 {}", i)))
        .collect();
    let mut table: Vec<(&str, &str)> = vec![("登記所コード", "登記所名")];
    table.extend(rows.iter().map(|(c, n)| (c.as_str(), n.as_str())));

    let server = serve(200, page(&table)).await;
    let dir = tempdir().unwrap();
    let config = config_for(&server, dir.path());

    let result = Pipeline::run(&ReqwestHttp::new(), &config).await.unwrap();
    assert_eq!(result.written_entries, 25);

    let entries = read_csv(&config.csv_path);
    assert_eq!(entries.len(), 25);
    assert!(entries.windows(2).all(|w| w[0].code <= w[1].code));

    let markdown = fs::read_to_string(&config.markdown_path).unwrap();
    assert_eq!(markdown.lines().count(), 3 + 25);
}

#[tokio::test]
async fn test_names_with_commas_round_trip() {
    let body = page(&[
        ("code", "name"),
        ("0300", "Kyoto, Main &quot;Central&quot; Office"),
        ("0200", "Nagoya"),
    ]);
    let server = serve(200, body).await;
    let dir = tempdir().unwrap();
    let config = config_for(&server, dir.path());

    Pipeline::run(&ReqwestHttp::new(), &config).await.unwrap();
    assert_eq!(
        read_csv(&config.csv_path),
        vec![
            CodeEntry::new("0200", "Nagoya"),
            CodeEntry::new("0300", "Kyoto, Main \"Central\" Office"),
        ]
    );
}

#[tokio::test]
async fn test_names_with_newlines_round_trip() {
    let body = page(&[
        ("code", "name"),
        ("0500", "Sapporo\nKita Branch"),
        ("0400", "Sendai"),
    ]);
    let server = serve(200, body).await;
    let dir = tempdir().unwrap();
    let config = config_for(&server, dir.path());

    Pipeline::run(&ReqwestHttp::new(), &config).await.unwrap();

    let csv_text = fs::read_to_string(&config.csv_path).unwrap();
    assert!(csv_text.contains("0500,\"Sapporo\nKita Branch\"\n"));
    assert_eq!(
        read_csv(&config.csv_path),
        vec![
            CodeEntry::new("0400", "Sendai"),
            CodeEntry::new("0500", "Sapporo\nKita Branch"),
        ]
    );

    // The Markdown row stays on one line
    let markdown = fs::read_to_string(&config.markdown_path).unwrap();
    assert_eq!(markdown.lines().count(), 3 + 2);
    assert!(markdown.contains("| 0500 | Sapporo Kita Branch |"));
}

#[tokio::test]
async fn test_server_error_is_network_error() {
    let server = serve(500, "internal error".to_string()).await;
    let dir = tempdir().unwrap();
    let config = config_for(&server, dir.path());

    let err = Pipeline::run(&ReqwestHttp::new(), &config).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
    assert!(!config.csv_path.exists());
    assert!(!config.markdown_path.exists());
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    let server = MockServer::start().await;
    let url = format!("{}{}", server.uri(), PAGE_PATH);
    drop(server);

    let dir = tempdir().unwrap();
    let config = Config {
        source_url: url,
        ..Config::default()
    }
    .with_output_dir(dir.path());

    let err = Pipeline::run(&ReqwestHttp::new(), &config).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
    assert!(!config.csv_path.exists());
}

#[tokio::test]
async fn test_page_without_table_is_parse_error() {
    let body = "<html><body><p>メンテナンス中</p></body></html>".to_string();
    let server = serve(200, body).await;
    let dir = tempdir().unwrap();
    let config = config_for(&server, dir.path());

    let err = Pipeline::run(&ReqwestHttp::new(), &config).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(!config.csv_path.exists());
    assert!(!config.markdown_path.exists());
}

#[tokio::test]
async fn test_markdown_failure_leaves_csv() {
    let server = serve(200, page(&[("code", "name"), ("0001", "Tokyo")])).await;
    let dir = tempdir().unwrap();
    let mut config = config_for(&server, dir.path());
    config.markdown_path = dir.path().join("no-such-dir").join("README.md");

    let err = Pipeline::run(&ReqwestHttp::new(), &config).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::File);
    assert!(config.csv_path.exists());
}
