use crate::{Result as ServiceResult, ServiceError};

use kb_config::SimulationConfig;

use std::time::Duration;

use log::debug;

/// Stands in for the network: every service call waits `latency` and, in
/// development mode, fails with probability `failure_rate`.
#[derive(Debug, Clone)]
pub struct Simulator {
    latency: Duration,
    failure_rate: f64,
}

impl Simulator {
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            latency: Duration::from_millis(config.latency_ms),
            failure_rate: config.effective_failure_rate(),
        }
    }

    pub fn instant() -> Self {
        Self::from_config(&SimulationConfig::instant())
    }

    pub fn with_failure_rate(mut self, failure_rate: f64) -> Self {
        self.failure_rate = failure_rate.clamp(0.0, 1.0);
        self
    }

    pub async fn call(&self, operation: &str) -> ServiceResult<()> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if self.failure_rate > 0.0 && rand::random::<f64>() < self.failure_rate {
            debug!("Injecting simulated failure into '{operation}'");
            return Err(ServiceError::simulated(operation));
        }

        Ok(())
    }
}
