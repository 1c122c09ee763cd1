// paste.rs - Paste Host Client
// Uploads text to a hastebin-compatible paste host (mystb.in, hastebin.com) and
// returns the link to the new paste.

use async_trait::async_trait;
use log::{info, warn};
use serde::Deserialize;

use crate::error::MetaError;

#[async_trait]
pub trait PasteService: Send + Sync {
    /// Human readable host name, used in errors and logs
    fn name(&self) -> &str;

    async fn upload(&self, text: &str) -> Result<String, MetaError>;
}

#[derive(Debug, Deserialize)]
struct DocumentCreated {
    key: String,
}

/// Client for hosts speaking the haste protocol: `POST {base}/documents` answers
/// `{"key": "..."}` and the paste lives at `{base}/{key}`.
pub struct HasteClient {
    http: reqwest::Client,
    name: String,
    base_url: String,
}

impl HasteClient {
    pub fn new(http: reqwest::Client, name: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http,
            name: name.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

/// Public link for a paste key
pub fn paste_url(base_url: &str, key: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), key)
}

#[async_trait]
impl PasteService for HasteClient {
    fn name(&self) -> &str {
        &self.name
    }

    async fn upload(&self, text: &str) -> Result<String, MetaError> {
        let response = self
            .http
            .post(format!("{}/documents", self.base_url))
            .body(text.to_string())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("[PASTE] {} answered HTTP {}", self.name, status);
            return Err(MetaError::ServiceUnavailable {
                service: self.name.clone(),
                status: status.as_u16(),
            });
        }

        let created: DocumentCreated = response.json().await.map_err(|e| MetaError::MalformedResponse {
            service: self.name.clone(),
            reason: e.to_string(),
        })?;

        let url = paste_url(&self.base_url, &created.key);
        info!("[PASTE] Uploaded {} chars to {}", text.len(), url);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paste_url() {
        assert_eq!(paste_url("https://hastebin.com", "abcdef"), "https://hastebin.com/abcdef");
        assert_eq!(paste_url("https://mystb.in/", "xyz"), "https://mystb.in/xyz");
    }

    #[test]
    fn test_document_created_parses() {
        let created: DocumentCreated = serde_json::from_str(r#"{"key":"qwerty"}"#).unwrap();
        assert_eq!(created.key, "qwerty");
    }

    #[test]
    fn test_client_normalises_base_url() {
        let client = HasteClient::new(reqwest::Client::new(), "hastebin", "https://hastebin.com/");
        assert_eq!(client.base_url, "https://hastebin.com");
        assert_eq!(client.name(), "hastebin");
    }
}
