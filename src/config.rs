use std::path::PathBuf;

use log::debug;

/// Environment key for the output directory.
pub const OUTPUT_PATH_KEY: &str = "CSV_OUTPUT_PATH";
/// Environment key for the output file name (without extension).
pub const OUTPUT_NAME_KEY: &str = "CSV_OUTPUT_NAME";

pub const DEFAULT_OUTPUT_PATH: &str = "output/";
pub const DEFAULT_OUTPUT_NAME: &str = "processed_data";

const EXTENSION: &str = ".csv";

// ---------------------------------------------------------------------------
// Environment loaders
// ---------------------------------------------------------------------------

/// A source of configuration values keyed by name.
///
/// Implementations return `default` when the key is unset.
pub trait EnvLoader {
    fn load(&self, key: &str, default: &str) -> String;
}

/// Reads the process environment, after merging in a `.env` file if one is
/// found in the working directory or its parents.
#[derive(Debug, Default)]
pub struct LocalEnvLoader;

impl LocalEnvLoader {
    pub fn new() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => debug!("loaded environment from {}", path.display()),
            Err(e) => debug!("no .env file loaded: {e}"),
        }
        LocalEnvLoader
    }
}

impl EnvLoader for LocalEnvLoader {
    fn load(&self, key: &str, default: &str) -> String {
        std::env::var(key)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| default.to_string())
    }
}

// ---------------------------------------------------------------------------
// OutputConfig
// ---------------------------------------------------------------------------

/// Where processed tables are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Directory prefix, normally ending in `/`.
    pub directory: String,
    /// File name without the `.csv` extension.
    pub base_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: DEFAULT_OUTPUT_PATH.to_string(),
            base_name: DEFAULT_OUTPUT_NAME.to_string(),
        }
    }
}

impl OutputConfig {
    pub fn new(directory: impl Into<String>, base_name: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            base_name: base_name.into(),
        }
    }

    /// Resolve both settings once from `loader`.
    pub fn from_loader(loader: &dyn EnvLoader) -> Self {
        let config = Self {
            directory: loader.load(OUTPUT_PATH_KEY, DEFAULT_OUTPUT_PATH),
            base_name: loader.load(OUTPUT_NAME_KEY, DEFAULT_OUTPUT_NAME),
        };
        debug!(
            "output config: directory={:?} base_name={:?}",
            config.directory, config.base_name
        );
        config
    }

    /// `{directory}{base_name}.csv`. The directory is concatenated as-is, so a
    /// missing trailing separator becomes part of the file name.
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(format!("{}{}{EXTENSION}", self.directory, self.base_name))
    }
}
