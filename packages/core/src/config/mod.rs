//! Capture and registry configuration

pub mod validation;

pub use validation::{ConfigResult, ConfigValidator, ConfigurationError, Validator};

/// Settings shared by the placeholder factory and the chain registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LambdaConfig {
    /// Maximum number of steps a single capture may record
    pub max_chain_depth: usize,
    /// Registry size above which dead weak entries are swept on close
    pub sweep_threshold: usize,
}

impl Default for LambdaConfig {
    fn default() -> Self {
        Self {
            max_chain_depth: 32,
            sweep_threshold: 256,
        }
    }
}

impl LambdaConfig {
    #[must_use]
    pub fn with_max_chain_depth(mut self, depth: usize) -> Self {
        self.max_chain_depth = depth;
        self
    }

    #[must_use]
    pub fn with_sweep_threshold(mut self, threshold: usize) -> Self {
        self.sweep_threshold = threshold;
        self
    }
}

impl Validator for LambdaConfig {
    fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::validate_chain_depth(self.max_chain_depth)?;
        ConfigValidator::validate_sweep_threshold(self.sweep_threshold)?;
        Ok(())
    }
}
