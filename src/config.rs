const DEFAULT_DOCS_PAGE_SIZE: u64 = 10;
const DEFAULT_QUERIES_PAGE_SIZE: u64 = 5;

/// Runtime configuration, read once at startup. A `.env` file is honored
/// but real environment variables win.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: String,
    pub docs_page_size: u64,
    pub queries_page_size: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PDF_QA_API_URL is not set")]
    MissingApiUrl,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenv::dotenv();

        let api_url = dotenv::var("PDF_QA_API_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingApiUrl)?;

        Ok(Self {
            api_url: normalize_base_url(&api_url),
            docs_page_size: page_size_from_env("PDF_QA_DOCS_PAGE_SIZE", DEFAULT_DOCS_PAGE_SIZE),
            queries_page_size: page_size_from_env(
                "PDF_QA_QUERIES_PAGE_SIZE",
                DEFAULT_QUERIES_PAGE_SIZE,
            ),
        })
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn page_size_from_env(key: &str, default: u64) -> u64 {
    dotenv::var(key)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(default)
}
