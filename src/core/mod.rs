pub mod etl;
pub mod openai;
pub mod pipeline;
pub mod prompt;
pub mod properties;
pub mod retry;
pub mod translator;

pub use crate::domain::model::{ResourceMap, TranslationReport};
pub use crate::domain::ports::{CompletionClient, ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
