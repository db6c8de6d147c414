use crate::domain::completion::{ChatCompletionRequest, ChatCompletionResponse};
use crate::domain::model::{NordicLetters, ResourceMap, TranslationReport};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Human readable location of `path`, used in logs and error messages.
    fn location(&self, path: &str) -> String {
        path.to_string()
    }
}

pub trait ConfigProvider: Send + Sync {
    fn input_file(&self) -> &str;
    fn output_file(&self) -> &str;
    fn model(&self) -> &str;
    fn api_base(&self) -> &str;
    fn api_key(&self) -> Option<&str>;
    fn nordic_letters(&self) -> NordicLetters;
    /// Replaces the built-in system prompt when set.
    fn system_prompt(&self) -> Option<&str>;
    fn max_retries(&self) -> u32;
    fn retry_delay(&self) -> Duration;
    fn request_timeout(&self) -> Duration;
    fn max_tokens(&self) -> u32;
    fn temperature(&self) -> f32;
}

/// A single chat completion round-trip.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: &ChatCompletionRequest) -> Result<ChatCompletionResponse>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<ResourceMap>;
    async fn transform(&self, data: ResourceMap) -> Result<TranslationReport>;
    async fn load(&self, report: TranslationReport) -> Result<String>;
}
