// Environment-based configuration.
//
// The API key comes from env vars (never hardcoded). A .env file is loaded
// best-effort when configuration is read.

use std::env;

use crate::analyzer::Analyzer;
use crate::error::{AnalyzerError, Result};

/// Configuration loaded from environment variables.
pub struct Config {
    /// Perspective API key (PERSPECTIVE_API_KEY)
    pub api_key: String,
    /// Default language hints (PERSPECTIVE_LANGUAGES, comma-separated).
    /// Empty means the API auto-detects the language of each comment.
    pub languages: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Missing variables default to empty; call require_api_key before any
    /// operation that talks to the API.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        let languages = env::var("PERSPECTIVE_LANGUAGES")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            api_key: env::var("PERSPECTIVE_API_KEY").unwrap_or_default(),
            languages,
        }
    }

    /// Check that the Perspective API key is configured.
    pub fn require_api_key(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(AnalyzerError::Configuration(
                "PERSPECTIVE_API_KEY not set. Add it to your .env file.".into(),
            ));
        }
        Ok(())
    }

    /// Build an analyzer from this configuration.
    pub fn analyzer(&self) -> Result<Analyzer> {
        self.require_api_key()?;
        let mut analyzer = Analyzer::new(self.api_key.clone());
        for code in &self.languages {
            analyzer.add_language(code);
        }
        Ok(analyzer)
    }
}
