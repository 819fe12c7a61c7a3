use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// Admits at most one outstanding call; a second caller is turned away, not queued.
#[derive(Debug, Clone)]
pub struct SingleFlight {
    permits: Arc<Semaphore>,
}

/// Held for the lifetime of the admitted call.
#[derive(Debug)]
pub struct FlightGuard {
    _permit: OwnedSemaphorePermit,
}

impl SingleFlight {
    pub fn new() -> Self {
        Self {
            permits: Arc::new(Semaphore::new(1)),
        }
    }

    pub fn try_begin(&self) -> Option<FlightGuard> {
        Arc::clone(&self.permits)
            .try_acquire_owned()
            .ok()
            .map(|permit| FlightGuard { _permit: permit })
    }

    pub fn is_in_flight(&self) -> bool {
        self.permits.available_permits() == 0
    }
}

impl Default for SingleFlight {
    fn default() -> Self {
        Self::new()
    }
}
