//! Configuration validation
//!
//! Bounds checking for capture and registry settings.

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid chain depth: {0}")]
    InvalidChainDepth(String),

    #[error("Invalid sweep threshold: {0}")]
    InvalidSweepThreshold(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` variant if any validation fails:
    /// - `InvalidChainDepth` - if the maximum chain depth is zero or above the hard limit
    /// - `InvalidSweepThreshold` - if the registry sweep threshold is zero
    fn validate(&self) -> ConfigResult<()>;
}

/// Common configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Upper bound for any configured chain depth
    pub const MAX_CHAIN_DEPTH_LIMIT: usize = 1024;

    /// Validate a maximum chain depth
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidChainDepth` if the depth is zero
    /// or exceeds [`Self::MAX_CHAIN_DEPTH_LIMIT`].
    pub fn validate_chain_depth(depth: usize) -> ConfigResult<()> {
        if depth == 0 {
            return Err(ConfigurationError::InvalidChainDepth(
                "max_chain_depth cannot be zero".to_string(),
            ));
        }

        if depth > Self::MAX_CHAIN_DEPTH_LIMIT {
            return Err(ConfigurationError::InvalidChainDepth(format!(
                "max_chain_depth cannot exceed {}",
                Self::MAX_CHAIN_DEPTH_LIMIT
            )));
        }

        Ok(())
    }

    /// Validate a registry sweep threshold
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidSweepThreshold` if the threshold is zero.
    pub fn validate_sweep_threshold(threshold: usize) -> ConfigResult<()> {
        if threshold == 0 {
            return Err(ConfigurationError::InvalidSweepThreshold(
                "sweep_threshold cannot be zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LambdaConfig;

    #[test]
    fn test_default_config_is_valid() {
        assert!(LambdaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_chain_depth_bounds() {
        assert!(ConfigValidator::validate_chain_depth(1).is_ok());
        assert!(ConfigValidator::validate_chain_depth(ConfigValidator::MAX_CHAIN_DEPTH_LIMIT).is_ok());
        assert!(matches!(
            ConfigValidator::validate_chain_depth(0),
            Err(ConfigurationError::InvalidChainDepth(_))
        ));
        assert!(ConfigValidator::validate_chain_depth(ConfigValidator::MAX_CHAIN_DEPTH_LIMIT + 1).is_err());
    }

    #[test]
    fn test_zero_sweep_threshold_rejected() {
        let config = LambdaConfig::default().with_sweep_threshold(0);
        assert!(matches!(config.validate(), Err(ConfigurationError::InvalidSweepThreshold(_))));
    }
}
