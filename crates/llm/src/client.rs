use std::time::Duration;

use sqlchat_core::constants::{DEFAULT_LLM_MAX_RETRIES, DEFAULT_MODEL};
use sqlchat_core::{truncate, Settings};

use crate::ai_types::{ChatRequest, ChatResponse, Message};
use crate::error::LlmError;

/// Backoff before each retry, indexed by attempt number.
const RETRY_DELAYS_SECS: [u64; 4] = [0, 1, 2, 4];

/// Client for an OpenAI-compatible chat-completions API.
pub struct LlmClient {
    pub(crate) client: reqwest::Client,
    pub(crate) api_key: String,
    pub(crate) base_url: String,
    pub(crate) model: String,
    pub(crate) max_retries: usize,
}

impl std::fmt::Debug for LlmClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmClient")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_retries", &self.max_retries)
            .finish_non_exhaustive()
    }
}

impl LlmClient {
    /// Creates a new LLM client with the given API key, base URL and request timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Result<Self, LlmError> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::ClientInit(e.to_string()))?;
        Ok(Self {
            client,
            api_key,
            base_url,
            model: DEFAULT_MODEL.to_owned(),
            max_retries: DEFAULT_LLM_MAX_RETRIES,
        })
    }

    /// Creates a client configured from session settings.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_settings(settings: &Settings) -> Result<Self, LlmError> {
        Ok(Self::new(
            settings.api_key.clone(),
            settings.base_url.clone(),
            Duration::from_secs(settings.llm_timeout_secs),
        )?
        .with_model(settings.model.clone())
        .with_max_retries(settings.llm_max_retries))
    }

    /// Sets a custom model for this client.
    #[must_use]
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    /// Sets how many times a transient failure is retried.
    #[must_use]
    pub const fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Sends a system instruction and a user prompt, returning the trimmed completion.
    ///
    /// # Errors
    /// See [`LlmClient::chat_completion`].
    pub async fn complete(
        &self,
        system: &str,
        prompt: String,
        temperature: f32,
    ) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![Message::system(system), Message::user(prompt)],
            temperature,
        };
        let content = self.chat_completion(&request).await?;
        Ok(content.trim().to_owned())
    }

    /// Send a chat completion request and return the extracted content string.
    ///
    /// Transient failures (network errors, 429 and 5xx) are retried up to
    /// `max_retries` times; with the default of zero a request is tried once.
    ///
    /// # Errors
    /// Returns an error if the HTTP request fails, the API returns a
    /// non-success status, the response body cannot be parsed, or no
    /// completion text is present.
    pub async fn chat_completion(&self, request: &ChatRequest) -> Result<String, LlmError> {
        let mut last_error: Option<LlmError> = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay_secs = RETRY_DELAYS_SECS.get(attempt).copied().unwrap_or(4);
                let delay = Duration::from_secs(delay_secs);
                tracing::warn!("LLM retry attempt {attempt}/{} after {delay:?}", self.max_retries);
                tokio::time::sleep(delay).await;
            }

            match self.send_once(request).await {
                Ok(content) => return Ok(content),
                Err(err) if err.is_transient() && attempt < self.max_retries => {
                    tracing::warn!(error = %err, "transient LLM failure");
                    last_error = Some(err);
                },
                Err(err) if err.is_transient() && self.max_retries > 0 => {
                    return Err(LlmError::RetriesExhausted(Box::new(err)));
                },
                Err(err) => return Err(err),
            }
        }

        Err(LlmError::RetriesExhausted(Box::new(last_error.unwrap_or(LlmError::EmptyResponse))))
    }

    async fn send_once(&self, request: &ChatRequest) -> Result<String, LlmError> {
        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body =
                response.text().await.unwrap_or_else(|_| "Could not read error body".to_owned());
            return Err(LlmError::HttpStatus { code: status.as_u16(), body });
        }

        let body = response.text().await?;
        let chat_response: ChatResponse =
            serde_json::from_str(&body).map_err(|e| LlmError::JsonParse {
                context: format!("chat completion response (body: {})", truncate(&body, 200)),
                source: e,
            })?;

        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(LlmError::EmptyResponse)
    }
}
