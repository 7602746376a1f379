use crate::error::ConfigError;
use std::fmt;
use std::path::PathBuf;

/// Environment variable holding the DashScope credential.
pub const API_KEY_ENV: &str = "QWEN_MAX_API_KEY";

pub const DEFAULT_MODEL: &str = "qwen-plus";

pub const DEFAULT_OUTPUT_DIR: &str = "summaries";

/// Credential for the generation service. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Accepts the value looked up from [`API_KEY_ENV`] or the command line;
    /// blank counts as missing.
    pub fn from_value(value: Option<String>) -> Result<Self, ConfigError> {
        value
            .map(|raw| raw.trim().to_string())
            .filter(|key| !key.is_empty())
            .map(Self)
            .ok_or(ConfigError::MissingApiKey {
                variable: API_KEY_ENV,
            })
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub api_key: ApiKey,
    pub model: String,
    pub output_dir: PathBuf,
}

impl BatchConfig {
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }
}
