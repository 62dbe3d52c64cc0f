//! Simulation configuration.

use crate::error::ConfigError;

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Number of doors per trial
    pub doors: usize,

    /// Number of trials to run
    pub trials: u64,

    /// Whether the player switches after the host's reveal
    pub switch: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            doors: 3,
            trials: 100,
            switch: true,
        }
    }
}

impl SimConfig {
    pub fn new(doors: usize, trials: u64, switch: bool) -> Self {
        Self {
            doors,
            trials,
            switch,
        }
    }

    /// Rejects settings that would leave nothing to simulate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.doors == 0 {
            return Err(ConfigError::NoDoors);
        }
        if self.trials == 0 {
            return Err(ConfigError::NoTrials);
        }
        Ok(())
    }
}
