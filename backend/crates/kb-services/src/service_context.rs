use crate::{LogNotifier, Notifier, Result as ServiceResult, Simulator};

use kb_store::{Collection, SharedStore};

use std::sync::Arc;

use log::{debug, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Everything a service call needs: the store, the simulated network and
/// the notification sink.
#[derive(Clone)]
pub struct ServiceContext {
    pub store: SharedStore,
    pub simulator: Simulator,
    pub notifier: Arc<dyn Notifier>,
}

impl ServiceContext {
    pub fn new(store: SharedStore, simulator: Simulator, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            simulator,
            notifier,
        }
    }

    /// Instant calls, notifications to the log.
    pub fn with_store(store: SharedStore) -> Self {
        Self::new(store, Simulator::instant(), Arc::new(LogNotifier))
    }

    pub fn collection<T>(&self, key: String) -> Collection<T>
    where
        T: Serialize + DeserializeOwned,
    {
        Collection::new(self.store.clone(), key)
    }

    /// Run one service operation: simulated latency and failure, then `f`.
    /// Failures raise an error notification and are returned unchanged.
    /// Nothing is retried.
    pub async fn run<T>(
        &self,
        operation: &str,
        f: impl FnOnce() -> ServiceResult<T>,
    ) -> ServiceResult<T> {
        debug!("{operation} starting");

        let result = match self.simulator.call(operation).await {
            Ok(()) => f(),
            Err(e) => Err(e),
        };

        match &result {
            Ok(_) => debug!("{operation} complete"),
            Err(e) => {
                warn!("{operation} failed: {e}");
                self.notifier.error(&format!("Failed to {operation}"));
            }
        }

        result
    }

    pub fn notify_success(&self, message: &str) {
        self.notifier.success(message);
    }
}
