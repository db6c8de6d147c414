use crate::core::prompt::PromptBuilder;
use crate::core::retry::{retry_with_policy, RetryPolicy};
use crate::core::ConfigProvider;
use crate::domain::completion::ChatCompletionRequest;
use crate::domain::model::{Translation, TranslationStatus};
use crate::domain::ports::CompletionClient;
use crate::utils::error::{Result, TranslatorError};

pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_MAX_TOKENS: u32 = 16384;
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

#[derive(Debug, Clone, PartialEq)]
pub struct TranslationSettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// Translates single values. Never fails: when no translation can be obtained
/// the original text comes back with a fallback status. Every error from the
/// completion client is retried, whatever its kind.
pub struct Translator<T: CompletionClient> {
    client: T,
    prompt: PromptBuilder,
    settings: TranslationSettings,
    policy: RetryPolicy,
}

impl<T: CompletionClient> Translator<T> {
    pub fn new(
        client: T,
        prompt: PromptBuilder,
        settings: TranslationSettings,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            client,
            prompt,
            settings,
            policy: policy.retrying_all_errors(),
        }
    }

    pub fn from_config<C: ConfigProvider>(client: T, config: &C) -> Self {
        let prompt = match config.system_prompt() {
            Some(system) => PromptBuilder::with_system_prompt(system),
            None => PromptBuilder::new(config.nordic_letters()),
        };
        let settings = TranslationSettings {
            model: config.model().to_string(),
            max_tokens: config.max_tokens(),
            temperature: config.temperature(),
        };
        let policy = RetryPolicy::new(config.max_retries(), config.retry_delay());

        Self::new(client, prompt, settings, policy)
    }

    pub fn request(&self, text: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.settings.model.clone(),
            messages: self.prompt.messages(text),
            n: 1,
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        }
    }

    pub async fn translate(&self, text: &str) -> Translation {
        let request = self.request(text);
        let request = &request;
        let outcome = retry_with_policy(&self.policy, move |_| self.attempt(request)).await;

        match outcome.result {
            Ok(Some(translated)) => Translation {
                text: translated,
                status: TranslationStatus::Translated,
                failed_attempts: outcome.failures,
            },
            Ok(None) => {
                tracing::warn!("API returned no choices, keeping original text");
                Translation {
                    text: text.to_string(),
                    status: TranslationStatus::FallbackNoChoices,
                    failed_attempts: outcome.failures,
                }
            }
            Err(err) => {
                tracing::error!(
                    "Translation failed after {} attempts, returning original text: {}",
                    outcome.failures.len(),
                    err
                );
                Translation {
                    text: text.to_string(),
                    status: TranslationStatus::FallbackExhausted,
                    failed_attempts: outcome.failures,
                }
            }
        }
    }

    /// `Ok(None)` when the response holds no choices.
    async fn attempt(&self, request: &ChatCompletionRequest) -> Result<Option<String>> {
        let response = self.client.complete(request).await?;

        let Some(choice) = response.choices.into_iter().next() else {
            return Ok(None);
        };

        let content = choice
            .message
            .content
            .ok_or_else(|| TranslatorError::MalformedResponseError {
                message: "first choice has no message content".to_string(),
            })?;

        Ok(Some(content.trim().to_string()))
    }
}
