use serde::Deserialize;
use serde::Serialize;

use crate::constants::DEFAULT_MAX_DEPTH;
use crate::constants::ESTIMATED_SOL_PRICE_USD;
use crate::constants::LABEL_PREFIX_LEN;
use crate::constants::LABEL_SUFFIX_LEN;
use crate::constants::ROOT_LABEL_PREFIX;
use crate::constants::SMART_MONEY_THRESHOLD_USD;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub max_depth: usize,
    pub smart_money_threshold_usd: f64,
    pub estimated_sol_price_usd: f64,
    pub label_prefix_len: usize,
    pub label_suffix_len: usize,
    pub root_label_prefix: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            smart_money_threshold_usd: SMART_MONEY_THRESHOLD_USD,
            estimated_sol_price_usd: ESTIMATED_SOL_PRICE_USD,
            label_prefix_len: LABEL_PREFIX_LEN,
            label_suffix_len: LABEL_SUFFIX_LEN,
            root_label_prefix: ROOT_LABEL_PREFIX.to_string(),
        }
    }
}

impl GraphConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::InvalidValue("graph.max_depth must be positive".to_string()));
        }
        if !self.estimated_sol_price_usd.is_finite() || self.estimated_sol_price_usd < 0.0 {
            return Err(ConfigError::InvalidValue(
                "graph.estimated_sol_price_usd must be a non-negative number".to_string(),
            ));
        }
        if !self.smart_money_threshold_usd.is_finite() {
            return Err(ConfigError::InvalidValue("graph.smart_money_threshold_usd must be finite".to_string()));
        }
        Ok(())
    }
}
