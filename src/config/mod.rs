#[cfg(feature = "cli")]
pub mod cli;
pub mod storage;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use storage::LocalStorage;

pub const DEFAULT_INPUT_FILE: &str = "ApplicationResources.properties";
pub const DEFAULT_OUTPUT_FILE: &str = "ApplicationResources_nn_NN.properties";
