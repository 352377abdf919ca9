use crate::error::{Error, Result};
use crate::graph::network::IngredientNetwork;
use std::sync::{Arc, RwLock};
use tracing::info;

/// Publishes complete networks to concurrent readers.
///
/// Readers take an `Arc` snapshot and query it without holding the lock.
/// Replacement networks are built outside the lock and swapped in whole.
#[derive(Debug, Clone)]
pub struct SharedNetwork {
    current: Arc<RwLock<Arc<IngredientNetwork>>>,
}

impl SharedNetwork {
    pub fn new(network: IngredientNetwork) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(network))),
        }
    }

    /// Snapshot of the network currently published.
    pub fn current(&self) -> Result<Arc<IngredientNetwork>> {
        self.current
            .read()
            .map(|guard| Arc::clone(&*guard))
            .map_err(|_| Error::Internal("Network lock poisoned".to_string()))
    }

    /// Replace the published network and return the snapshot that was
    /// swapped in. Existing snapshots stay valid.
    pub fn publish(&self, network: IngredientNetwork) -> Result<Arc<IngredientNetwork>> {
        let network = Arc::new(network);
        let mut guard = self
            .current
            .write()
            .map_err(|_| Error::Internal("Network lock poisoned".to_string()))?;
        *guard = Arc::clone(&network);
        Ok(network)
    }

    /// Rebuild the current network at a new threshold and publish it.
    pub fn rebuild(&self, min_cooccurrence: u64) -> Result<Arc<IngredientNetwork>> {
        let snapshot = self.current()?;
        info!(
            "Rebuilding graph: min co-occurrence {} -> {}",
            snapshot.graph().min_cooccurrence(),
            min_cooccurrence
        );

        self.publish(snapshot.rebuild(min_cooccurrence))
    }
}
