use async_trait::async_trait;

use crate::error::Result;

// Ingest-side ports
#[async_trait]
pub trait HttpClientPort: Send + Sync {
    /// Issues one GET and returns whatever the server answered, success or not.
    async fn get(&self, url: &str) -> Result<HttpGetResult>;
}

#[derive(Clone, Debug)]
pub struct HttpGetResult {
    pub status: u16,
    pub bytes: Vec<u8>,
    pub content_type: String,
}

impl HttpGetResult {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
