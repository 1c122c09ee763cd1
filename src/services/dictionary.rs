// dictionary.rs - Dictionary Lookup
// Looks words up on dictionaryapi.dev. The API answers a JSON list on success and a
// JSON object on failure; that is resolved here, once, into a tagged result.

use async_trait::async_trait;
use log::debug;
use reqwest::{StatusCode, Url};
use serde::Deserialize;

use crate::error::MetaError;

const SERVICE: &str = "dictionaryapi.dev";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DictionaryEntry {
    pub word: String,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Phonetic {
    pub text: Option<String>,
    pub audio: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Meaning {
    #[serde(rename = "partOfSpeech")]
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Definition {
    pub definition: String,
    pub example: Option<String>,
}

#[async_trait]
pub trait DictionaryLookup: Send + Sync {
    async fn fetch(&self, word: &str) -> Result<DictionaryEntry, MetaError>;
}

/// Turn a status code and body into the first entry or a specific error
pub fn decide_response(status: StatusCode, body: &str, word: &str) -> Result<DictionaryEntry, MetaError> {
    if status.is_server_error() {
        return Err(MetaError::ServerError { status: status.as_u16() });
    }
    if !status.is_success() {
        return Err(MetaError::WordNotFound { word: word.to_string() });
    }

    let entries: Vec<DictionaryEntry> = serde_json::from_str(body).map_err(|e| MetaError::MalformedResponse {
        service: SERVICE.to_string(),
        reason: e.to_string(),
    })?;

    entries
        .into_iter()
        .find(|entry| !entry.meanings.is_empty())
        .ok_or_else(|| MetaError::WordNotFound { word: word.to_string() })
}

pub struct DictionaryClient {
    http: reqwest::Client,
    base_url: String,
}

impl DictionaryClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    fn word_url(&self, word: &str) -> Result<Url, MetaError> {
        let invalid = || MetaError::MalformedResponse {
            service: SERVICE.to_string(),
            reason: format!("bad base url {}", self.base_url),
        };
        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut().map_err(|_| invalid())?.pop_if_empty().push(word);
        Ok(url)
    }
}

#[async_trait]
impl DictionaryLookup for DictionaryClient {
    async fn fetch(&self, word: &str) -> Result<DictionaryEntry, MetaError> {
        let url = self.word_url(word)?;
        debug!("[DEFINE] GET {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        decide_response(status, &body, word)
    }
}
