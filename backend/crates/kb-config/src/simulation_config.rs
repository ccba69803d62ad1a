use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_FAILURE_RATE, DEFAULT_LATENCY_MS, MAX_LATENCY_MS,
};

use serde::Deserialize;

/// Simulated network behaviour of the services.
///
/// Latency always applies. Random failures are injected only when
/// `dev_mode` is on, so a stray `failure_rate` cannot break a normal run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub dev_mode: bool,
    pub latency_ms: u64,
    /// Probability (0.0-1.0) that a service call fails in dev mode
    pub failure_rate: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            dev_mode: false,
            latency_ms: DEFAULT_LATENCY_MS,
            failure_rate: DEFAULT_FAILURE_RATE,
        }
    }
}

impl SimulationConfig {
    /// No latency and no failures.
    pub fn instant() -> Self {
        Self {
            dev_mode: false,
            latency_ms: 0,
            failure_rate: 0.0,
        }
    }

    /// Failure probability actually applied to calls.
    pub fn effective_failure_rate(&self) -> f64 {
        if self.dev_mode { self.failure_rate } else { 0.0 }
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.latency_ms > MAX_LATENCY_MS {
            return Err(ConfigError::simulation(format!(
                "simulation.latency_ms must be 0-{}, got {}",
                MAX_LATENCY_MS, self.latency_ms
            )));
        }

        if !(0.0..=1.0).contains(&self.failure_rate) {
            return Err(ConfigError::simulation(format!(
                "simulation.failure_rate must be 0.0-1.0, got {}",
                self.failure_rate
            )));
        }

        Ok(())
    }
}
