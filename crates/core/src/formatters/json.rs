use crate::result::ExtractionResult;
use crate::{PageliftError, Result};

/// Configuration for JSON output
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Pretty print JSON output
    pub pretty: bool,
}

/// Serializes a result to JSON
pub fn to_json_string(result: &ExtractionResult, config: &JsonConfig) -> Result<String> {
    let out = if config.pretty { serde_json::to_string_pretty(result) } else { serde_json::to_string(result) };
    out.map_err(|e| PageliftError::ExtractionFailed(e.to_string()))
}

/// JSON formatter with configurable options
pub struct JsonFormatter {
    config: JsonConfig,
}

impl JsonFormatter {
    pub fn new(config: JsonConfig) -> Self {
        Self { config }
    }

    pub fn convert(&self, result: &ExtractionResult) -> Result<String> {
        to_json_string(result, &self.config)
    }
}
