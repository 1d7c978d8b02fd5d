//! Generator configuration.

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

/// Transient iterations discarded before sampling.
pub const DEFAULT_WARM_UP: usize = 100;

/// Default cap on sampling steps per request.
pub const DEFAULT_MAX_ITERATIONS: u64 = 10_000_000;

/// Tunables of the sampling pipeline.
///
/// `warm_up` is part of the output format: any value other than
/// [`DEFAULT_WARM_UP`] yields different passwords for the same secrets.
/// `max_iterations` only bounds how long a sparse alphabet may sample
/// before the request fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub warm_up: usize,
    pub max_iterations: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            warm_up: DEFAULT_WARM_UP,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl GeneratorConfig {
    pub fn with_warm_up(mut self, warm_up: usize) -> Self {
        self.warm_up = warm_up;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Checks the configuration can ever produce a password.
    ///
    /// # Errors
    /// Returns [`GenerationError::InvalidConfig`] if `max_iterations` is zero.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.max_iterations == 0 {
            return Err(GenerationError::InvalidConfig(
                "max_iterations must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
