pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::LocalStorage;

pub use core::{
    etl::TranslationEngine, openai::OpenAiClient, pipeline::PropertiesPipeline,
    translator::Translator,
};
pub use utils::error::{Result, TranslatorError};
