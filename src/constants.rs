/// Mock endpoint of the registry online service that serves the office code table
pub const SOURCE_URL: &str = "https://www.touki-kyoutaku-online.moj.go.jp/toukinet/mock/SC01WS01.html";

// Output files, written to the working directory
pub const CSV_FILE: &str = "toukijo.csv";
pub const MARKDOWN_FILE: &str = "README.md";
pub const MARKDOWN_TITLE: &str = "登記所コード一覧";

/// Optional overrides, read from the working directory when present
pub const CONFIG_FILE: &str = "toukijo.toml";

/// Aggregate "all offices" row; not a real office
pub const ALL_OFFICES_CODE: &str = "0000";

/// Header label of the code column
pub const HEADER_LABEL_CODE: &str = "登記所コード";

/// Codes removed from the registry before writing
pub const SENTINEL_CODES: [&str; 2] = [ALL_OFFICES_CODE, HEADER_LABEL_CODE];

pub const CSV_HEADER: [&str; 2] = ["code", "name"];
