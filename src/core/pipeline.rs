use crate::core::properties;
use crate::core::translator::Translator;
use crate::core::{ConfigProvider, Pipeline, ResourceMap, Storage, TranslationReport};
use crate::domain::model::Progress;
use crate::domain::ports::CompletionClient;
use crate::utils::error::{Result, TranslatorError};
use std::path::PathBuf;

/// Reads the Bokmål resource file, translates every value in file order and
/// writes the Nynorsk resource file in one piece.
pub struct PropertiesPipeline<S: Storage, C: ConfigProvider, T: CompletionClient> {
    storage: S,
    config: C,
    translator: Translator<T>,
}

impl<S: Storage, C: ConfigProvider, T: CompletionClient> PropertiesPipeline<S, C, T> {
    pub fn new(storage: S, config: C, client: T) -> Self {
        let translator = Translator::from_config(client, &config);
        Self {
            storage,
            config,
            translator,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, T: CompletionClient> Pipeline for PropertiesPipeline<S, C, T> {
    async fn extract(&self) -> Result<ResourceMap> {
        let input = self.config.input_file();
        tracing::debug!("Reading {}", self.storage.location(input));

        let bytes = self.storage.read_file(input).await.map_err(|e| match e {
            TranslatorError::IoError(source) => TranslatorError::InputError {
                path: PathBuf::from(self.storage.location(input)),
                source,
            },
            other => other,
        })?;

        properties::parse_bytes(input, bytes)
    }

    async fn transform(&self, data: ResourceMap) -> Result<TranslationReport> {
        let mut report = TranslationReport {
            translated: ResourceMap::with_capacity(data.len()),
            fallback_keys: Vec::new(),
        };
        let mut progress = Progress {
            completed: 0,
            total: data.len(),
        };

        for (key, value) in data {
            let translation = self.translator.translate(&value).await;
            if translation.is_fallback() {
                tracing::warn!("Could not translate '{}', keeping original text", key);
                report.fallback_keys.push(key.clone());
            }
            progress.completed += 1;

            println!(
                "Progress: {}/{} ({}% completed)",
                progress.completed,
                progress.total,
                progress.percent()
            );
            println!("{}={}", key, translation.text);

            report.translated.insert(key, translation.text);
        }

        Ok(report)
    }

    async fn load(&self, report: TranslationReport) -> Result<String> {
        let output = self.config.output_file();
        let location = self.storage.location(output);
        let content = properties::serialize(&report.translated);

        tracing::debug!(
            "Writing {} entries ({} bytes) to {}",
            report.translated.len(),
            content.len(),
            location
        );

        self.storage
            .write_file(output, content.as_bytes())
            .await
            .map_err(|e| match e {
                TranslatorError::IoError(source) => TranslatorError::OutputError {
                    path: PathBuf::from(&location),
                    source,
                },
                other => other,
            })?;

        Ok(location)
    }
}
