use std::time::Duration;
use thiserror::Error;

use crate::chunker::DEFAULT_TOKEN_LIMIT;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Generous, since a single completion can take minutes
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(180);

pub const DEFAULT_MAX_REDUCE_DEPTH: usize = 3;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Token limit must be greater than zero")]
    ZeroTokenLimit,

    #[error("Model identifier is empty")]
    EmptyModel,

    #[error("No API key configured (set OPENAI_API_KEY or pass --api-key)")]
    MissingApiKey,

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Everything a summarization run needs, built once by the entry point
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    /// Used both for completions and for token counting
    pub model: String,
    /// Max tokens per request and per chunk
    pub token_limit: usize,
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
    /// Re-summarize combined partial summaries until they fit
    pub recursive_reduce: bool,
    /// Extra reduce passes allowed when `recursive_reduce` is on
    pub max_reduce_depth: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            token_limit: DEFAULT_TOKEN_LIMIT,
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            recursive_reduce: false,
            max_reduce_depth: DEFAULT_MAX_REDUCE_DEPTH,
        }
    }
}

impl SummarizerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.token_limit == 0 {
            return Err(ConfigError::ZeroTokenLimit);
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::EmptyModel);
        }
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        let parsed = url::Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: self.base_url.clone(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> SummarizerConfig {
        SummarizerConfig {
            api_key: "sk-test".to_string(),
            ..SummarizerConfig::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = SummarizerConfig::default();
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.token_limit, DEFAULT_TOKEN_LIMIT);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(!config.recursive_reduce);
    }

    #[test]
    fn test_valid_config() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_limit() {
        let config = SummarizerConfig {
            token_limit: 0,
            ..valid()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroTokenLimit)));
    }

    #[test]
    fn test_rejects_missing_key_and_model() {
        assert!(matches!(
            SummarizerConfig::default().validate(),
            Err(ConfigError::MissingApiKey)
        ));

        let config = SummarizerConfig {
            model: " ".to_string(),
            ..valid()
        };
        assert!(matches!(config.validate(), Err(ConfigError::EmptyModel)));
    }

    #[test]
    fn test_rejects_bad_base_url() {
        for url in ["not a url", "ftp://example.com"] {
            let config = SummarizerConfig {
                base_url: url.to_string(),
                ..valid()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidBaseUrl { .. })),
                "Failed for {}",
                url
            );
        }
    }
}
