//! Engine configuration.
//!
//! Every section falls back to its defaults, so an empty TOML document
//! yields the production thresholds.
//!
//! # Examples
//!
//! ```
//! use flagrev_core::config::FlagrevConfig;
//!
//! let config = FlagrevConfig::from_toml("[auto_reviewer]\nmin_age_days = 45\n").unwrap();
//! assert_eq!(config.auto_reviewer.min_age_days, 45);
//! assert_eq!(config.reviewer.min_age_days, 60);
//! ```

pub mod aggregation_config;
pub mod defaults;
pub mod observability_config;
pub mod tier_config;

use serde::{Deserialize, Serialize};

pub use aggregation_config::AggregationConfig;
pub use observability_config::ObservabilityConfig;
pub use tier_config::{AutoReviewerThresholds, ReviewerThresholds};

use crate::errors::{FlagrevError, FlagrevResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlagrevConfig {
    pub reviewer: ReviewerThresholds,
    pub auto_reviewer: AutoReviewerThresholds,
    pub aggregation: AggregationConfig,
    pub observability: ObservabilityConfig,
}

impl FlagrevConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(input: &str) -> FlagrevResult<Self> {
        let config: Self = toml::from_str(input).map_err(|e| FlagrevError::Config {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> FlagrevResult<()> {
        let ratio = self.reviewer.max_revert_ratio;
        if !ratio.is_finite() || ratio < 0.0 {
            return Err(FlagrevError::Config {
                reason: format!("reviewer.max_revert_ratio must be a non-negative number, got {ratio}"),
            });
        }
        if self.aggregation.flagged_batch_size == 0 {
            return Err(FlagrevError::Config {
                reason: "aggregation.flagged_batch_size must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
