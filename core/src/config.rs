use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Engine settings fixed at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Upper bound on the number of documents a query returns.
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_results: DEFAULT_MAX_RESULTS }
    }
}

impl SearchConfig {
    pub fn with_max_results(max_results: usize) -> Self {
        Self { max_results }
    }

    /// Parse a JSON object such as `{"max_results": 10}`. Missing fields fall back to defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_results == 0 {
            return Err(SearchError::InvalidConfig("max_results must be at least 1".into()));
        }
        Ok(())
    }
}
