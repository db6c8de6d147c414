use crate::config::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};
use crate::core::openai::DEFAULT_API_BASE;
use crate::core::translator::DEFAULT_MODEL;
use crate::core::ConfigProvider;
use crate::domain::model::NordicLetters;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, validate_range,
    validate_required_secret, validate_url, Validate,
};
use clap::Parser;
use std::time::Duration;

#[derive(Clone, Parser)]
#[command(name = "bokmal-nynorsk")]
#[command(about = "Translate a Bokmål resource file to Nynorsk with a chat completion model")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_INPUT_FILE)]
    pub input: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: String,

    #[arg(long, default_value = ".", help = "Directory the input and output paths are relative to")]
    pub base_dir: String,

    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, value_enum, default_value_t = NordicLetters::Escaped)]
    pub nordic_letters: NordicLetters,

    #[arg(long, help = "Read the system prompt from this file instead of the built-in one")]
    pub system_prompt_file: Option<String>,

    /// Loaded from `system_prompt_file` by the binary.
    #[arg(skip)]
    pub system_prompt: Option<String>,

    #[arg(long, default_value = "10")]
    pub max_retries: u32,

    #[arg(long, default_value = "0")]
    pub retry_delay_ms: u64,

    #[arg(long, default_value = "60")]
    pub timeout_secs: u64,

    #[arg(long, default_value = "16384")]
    pub max_tokens: u32,

    #[arg(long, default_value = "0.2")]
    pub temperature: f32,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl std::fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliConfig")
            .field("input", &self.input)
            .field("output", &self.output)
            .field("base_dir", &self.base_dir)
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("nordic_letters", &self.nordic_letters)
            .field("system_prompt_file", &self.system_prompt_file)
            .field("max_retries", &self.max_retries)
            .field("retry_delay_ms", &self.retry_delay_ms)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("verbose", &self.verbose)
            .finish()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_required_secret("api_key", self.api_key.as_deref())?;
        validate_url("api_base", &self.api_base)?;
        validate_path("input", &self.input)?;
        validate_path("output", &self.output)?;
        validate_path("base_dir", &self.base_dir)?;
        validate_non_empty_string("model", &self.model)?;
        validate_positive_number("max_tokens", u64::from(self.max_tokens), 1)?;
        validate_positive_number("timeout_secs", self.timeout_secs, 1)?;
        validate_range("temperature", self.temperature, 0.0, 2.0)?;
        if let Some(prompt) = &self.system_prompt {
            validate_non_empty_string("system_prompt_file", prompt)?;
        }
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn input_file(&self) -> &str {
        &self.input
    }

    fn output_file(&self) -> &str {
        &self.output
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn nordic_letters(&self) -> NordicLetters {
        self.nordic_letters
    }

    fn system_prompt(&self) -> Option<&str> {
        self.system_prompt.as_deref()
    }

    fn max_retries(&self) -> u32 {
        self.max_retries
    }

    fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    fn temperature(&self) -> f32 {
        self.temperature
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::TranslatorError;

    fn parse(args: &[&str]) -> CliConfig {
        CliConfig::try_parse_from(std::iter::once("bokmal-nynorsk").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults_match_reference_constants() {
        let config = parse(&["--api-key", "sk-test"]);

        assert_eq!(config.input_file(), "ApplicationResources.properties");
        assert_eq!(config.output_file(), "ApplicationResources_nn_NN.properties");
        assert_eq!(config.model(), "gpt-4o");
        assert_eq!(config.max_retries(), 10);
        assert_eq!(config.retry_delay(), Duration::ZERO);
        assert_eq!(config.request_timeout(), Duration::from_secs(60));
        assert_eq!(config.max_tokens(), 16384);
        assert_eq!(config.nordic_letters(), NordicLetters::Escaped);
        assert!((config.temperature() - 0.2).abs() < f32::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_nordic_letters_flag() {
        let config = parse(&["--api-key", "sk-test", "--nordic-letters", "literal"]);
        assert_eq!(config.nordic_letters(), NordicLetters::Literal);
    }

    #[test]
    fn test_blank_api_key_is_missing_config() {
        let mut config = parse(&["--api-key", "sk-test"]);
        config.api_key = Some("  ".to_string());

        let err = config.validate().unwrap_err();
        assert!(matches!(err, TranslatorError::MissingConfigError { ref field } if field == "api_key"));
    }

    #[test]
    fn test_rejects_out_of_range_temperature() {
        let config = parse(&["--api-key", "sk-test", "--temperature", "3.5"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = parse(&["--api-key", "sk-secret"]);
        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
