use anyhow::Result;
use bokmal_nynorsk::utils::error::{ErrorSeverity, TranslatorError};
use bokmal_nynorsk::utils::{logger, validation::Validate};
use bokmal_nynorsk::{CliConfig, LocalStorage, OpenAiClient, PropertiesPipeline, TranslationEngine};
use clap::Parser;
use std::path::PathBuf;

fn exit_with(e: TranslatorError) -> ! {
    tracing::error!(
        "❌ Translation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting bokmal-nynorsk");
    tracing::debug!("CLI config: {:?}", config);

    // The credential is checked before touching any file.
    if let Err(e) = config.validate() {
        exit_with(e);
    }

    if let Some(path) = config.system_prompt_file.clone() {
        match tokio::fs::read_to_string(&path).await {
            Ok(prompt) => config.system_prompt = Some(prompt.trim().to_string()),
            Err(source) => exit_with(TranslatorError::InputError {
                path: PathBuf::from(path),
                source,
            }),
        }
        if let Err(e) = config.validate() {
            exit_with(e);
        }
    }

    let client = OpenAiClient::from_config(&config).unwrap_or_else(|e| exit_with(e));
    let storage = LocalStorage::new(config.base_dir.clone());
    let pipeline = PropertiesPipeline::new(storage, config, client);
    let engine = TranslationEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Output saved to: {}", output_path);
            Ok(())
        }
        Err(e) => exit_with(e),
    }
}
