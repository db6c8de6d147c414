use crate::core::ConfigProvider;
use crate::domain::completion::{ChatCompletionRequest, ChatCompletionResponse};
use crate::domain::ports::CompletionClient;
use crate::utils::error::{Result, TranslatorError};
use crate::utils::validation::validate_required_secret;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Chat Completions client for OpenAI and compatible endpoints.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(api_base: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let api_key = validate_required_secret("api_key", Some(api_key))?;
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", api_base.trim_end_matches('/')),
            api_key: api_key.to_string(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let api_key = validate_required_secret("api_key", config.api_key())?;
        Self::new(config.api_base(), api_key, config.request_timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, request: &ChatCompletionRequest) -> Result<ChatCompletionResponse> {
        tracing::debug!("POST {} (model {})", self.endpoint, request.model);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranslatorError::ApiStatusError {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| TranslatorError::MalformedResponseError {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::completion::ChatMessage;
    use httpmock::prelude::*;

    fn request() -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: "gpt-4o".to_string(),
            messages: vec![ChatMessage::system("rules"), ChatMessage::user("Bokmål: Hei\nNynorsk:")],
            n: 1,
            max_tokens: 16384,
            temperature: 0.2,
        }
    }

    #[test]
    fn test_new_rejects_blank_key() {
        let err = OpenAiClient::new(DEFAULT_API_BASE, " ", Duration::from_secs(60)).unwrap_err();
        assert!(matches!(err, TranslatorError::MissingConfigError { .. }));
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let client =
            OpenAiClient::new("http://localhost:1234/v1/", "sk-test", Duration::from_secs(1)).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:1234/v1/chat/completions");
    }

    #[tokio::test]
    async fn test_complete_sends_bearer_and_parameters() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v1/chat/completions")
                .header("Authorization", "Bearer sk-test")
                .json_body_partial(r#"{"model": "gpt-4o", "n": 1, "max_tokens": 16384}"#);
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "choices": [{"index": 0, "message": {"role": "assistant", "content": "Hei"}}]
                }));
        });

        let client = OpenAiClient::new(&server.url("/v1"), "sk-test", Duration::from_secs(5)).unwrap();
        let response = client.complete(&request()).await.unwrap();

        api_mock.assert();
        assert_eq!(response.choices[0].message.content.as_deref(), Some("Hei"));
    }

    #[tokio::test]
    async fn test_complete_maps_error_status() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(429).body("slow down");
        });

        let client = OpenAiClient::new(&server.base_url(), "sk-test", Duration::from_secs(5)).unwrap();
        let err = client.complete(&request()).await.unwrap_err();

        api_mock.assert();
        match err {
            TranslatorError::ApiStatusError { status, body } => {
                assert_eq!(status, 429);
                assert_eq!(body, "slow down");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_complete_rejects_malformed_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/chat/completions");
            then.status(200).body("not json");
        });

        let client = OpenAiClient::new(&server.base_url(), "sk-test", Duration::from_secs(5)).unwrap();
        let err = client.complete(&request()).await.unwrap_err();

        assert!(matches!(err, TranslatorError::MalformedResponseError { .. }));
        assert!(err.is_retryable());
    }
}
