use crate::catalog::Language;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// A translation captured at the moment it was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub source: Language,
    pub target: Language,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, source: Language, target: Language) -> Self {
        Self {
            text: text.into(),
            source,
            target,
        }
    }

    /// Source and target codes joined the way the endpoint expects ("en-GB|hi-IN")
    pub fn langpair(&self) -> String {
        format!("{}|{}", self.source.code(), self.target.code())
    }
}

/// Why a translation request produced no text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslationError {
    #[error("translation request failed: {0}")]
    Transport(String),
    #[error("translation API error ({status}): {body}")]
    Status { status: u16, body: String },
    #[error("malformed translation response: {0}")]
    Malformed(String),
    #[error("translation response is missing `{0}`")]
    MissingField(&'static str),
}

/// Performs one translation per call. Implementations must not retry or cache.
#[async_trait]
pub trait TranslationClient: Send + Sync {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslationError>;
}

/// MyMemory `GET /get?q=..&langpair=..` response
///
/// ```json
/// { "responseData": { "translatedText": "Ciao Mondo!", "match": 1 } }
/// ```
#[derive(Debug, Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    response_data: Option<ResponseData>,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

/// Translation client backed by the MyMemory public API
#[derive(Debug, Clone)]
pub struct MyMemoryClient {
    http: reqwest::Client,
    api_url: String,
}

impl MyMemoryClient {
    pub fn new(http: reqwest::Client, api_url: impl Into<String>) -> Self {
        Self {
            http,
            api_url: api_url.into(),
        }
    }
}

#[async_trait]
impl TranslationClient for MyMemoryClient {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslationError> {
        let langpair = request.langpair();
        debug!(
            "Requesting translation {} ({} chars)",
            langpair,
            request.text.chars().count()
        );

        let response = self
            .http
            .get(&self.api_url)
            .query(&[("q", request.text.as_str()), ("langpair", langpair.as_str())])
            .send()
            .await
            .map_err(|e| TranslationError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            return Err(TranslationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| TranslationError::Transport(e.to_string()))?;

        parse_response(&body)
    }
}

/// Extract `responseData.translatedText` verbatim
fn parse_response(body: &str) -> Result<String, TranslationError> {
    let parsed: MyMemoryResponse =
        serde_json::from_str(body).map_err(|e| TranslationError::Malformed(e.to_string()))?;

    parsed
        .response_data
        .ok_or(TranslationError::MissingField("responseData"))?
        .translated_text
        .ok_or(TranslationError::MissingField("responseData.translatedText"))
}
