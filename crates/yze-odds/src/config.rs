use serde::{Deserialize, Serialize};

use crate::error::{OddsError, OddsResult};

/// Default number of trials, as used by the original odds scripts.
pub const DEFAULT_TRIALS: u64 = 100_000;

/// Configuration for an odds run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OddsConfig {
    /// Number of independent trials.
    pub trials: u64,
    /// RNG seed. A random seed is drawn (and reported) when unset.
    pub seed: Option<u64>,
}

impl Default for OddsConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: None,
        }
    }
}

impl OddsConfig {
    /// Set the number of trials.
    pub fn with_trials(mut self, trials: u64) -> Self {
        self.trials = trials;
        self
    }

    /// Set the RNG seed for a reproducible run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration before a run.
    pub fn validate(&self) -> OddsResult<()> {
        if self.trials == 0 {
            return Err(OddsError::NoTrials);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = OddsConfig::default();
        assert_eq!(config.trials, 100_000);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_builder_chain() {
        let config = OddsConfig::default().with_trials(500).with_seed(7);
        assert_eq!(config.trials, 500);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn zero_trials_rejected() {
        let config = OddsConfig::default().with_trials(0);
        assert!(matches!(config.validate(), Err(OddsError::NoTrials)));
    }

    #[test]
    fn config_roundtrips_through_json() {
        let config = OddsConfig::default().with_seed(3);
        let json = serde_json::to_string(&config).unwrap();
        let back: OddsConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
