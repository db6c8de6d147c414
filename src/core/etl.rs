use crate::core::Pipeline;
use crate::utils::error::Result;

/// Drives a pipeline through load, translate and save.
pub struct TranslationEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> TranslationEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Returns the location of the written output. Nothing is written when
    /// loading fails, and translations are discarded when saving fails.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Loading resource file...");
        let entries = self.pipeline.extract().await?;
        tracing::info!("Loaded {} entries", entries.len());

        tracing::info!("Translating entries...");
        let report = self.pipeline.transform(entries).await?;
        if report.fallback_keys.is_empty() {
            tracing::info!("Translated {} entries", report.translated.len());
        } else {
            tracing::warn!(
                "Translated {} entries, {} kept their original text: {}",
                report.translated.len(),
                report.fallback_keys.len(),
                report.fallback_keys.join(", ")
            );
        }

        tracing::info!("Saving translations...");
        let output_path = self.pipeline.load(report).await?;
        println!("Translation completed! Output saved to {}", output_path);

        Ok(output_path)
    }
}
