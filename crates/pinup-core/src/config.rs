use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::constants;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing {0} environment variable")]
    MissingApiKey(&'static str),
}

/// Explicitly constructed and passed into the runtime - nothing in the core
/// reads configuration from globals after startup.
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Credential for the hosted indexing API.
    pub api_key: String,
    /// Collection contract the ownership fetch is filtered to.
    pub contract_address: String,
    pub indexer_base_url: String,
    pub visibility_list_url: String,
    /// Local directory holding `{token_id}.jpg` alternate images for
    /// flagged tokens.
    pub uncensored_dir: PathBuf,
}

impl CoreConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var(constants::API_KEY_ENV)
            .map_err(|_| ConfigError::MissingApiKey(constants::API_KEY_ENV))?;
        Ok(Self {
            api_key,
            ..Self::default()
        })
    }

    pub fn uncensored_image_path(&self, token_id: &str) -> PathBuf {
        uncensored_image_path(&self.uncensored_dir, token_id)
    }
}

pub fn uncensored_image_path(dir: &Path, token_id: &str) -> PathBuf {
    dir.join(format!("{token_id}.jpg"))
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            api_key: "demo".to_string(),
            contract_address: constants::DARING_DIVAS_CONTRACT.to_string(),
            indexer_base_url: constants::INDEXER_BASE_URL.to_string(),
            visibility_list_url: constants::VISIBILITY_LIST_URL.to_string(),
            uncensored_dir: PathBuf::from("uncensored"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncensored_image_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = CoreConfig {
            uncensored_dir: dir.path().to_path_buf(),
            ..CoreConfig::default()
        };

        let path = config.uncensored_image_path("42");
        std::fs::write(&path, b"jpg").unwrap();

        assert!(path.exists());
        assert_eq!(path.file_name().unwrap().to_str().unwrap(), "42.jpg");
    }

    #[test]
    fn test_default_points_at_collection_contract() {
        let config = CoreConfig::default();
        assert_eq!(config.contract_address, constants::DARING_DIVAS_CONTRACT);
    }
}
