//! Filter registry — named accumulation points whose collected payloads are
//! passed en masse to a caller-supplied transform.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::debug;

/// Registry of filter payloads organized by filter name.
///
/// Payloads accumulate in insertion order and are never removed; a transform
/// sees the full sequence every time it runs.
#[derive(Debug)]
pub struct FilterRegistry {
    /// Filter name → payloads in accumulation order.
    payloads: RwLock<HashMap<String, Vec<serde_json::Value>>>,
}

impl FilterRegistry {
    /// Creates a new empty filter registry.
    pub fn new() -> Self {
        Self {
            payloads: RwLock::new(HashMap::new()),
        }
    }

    /// Appends a payload under a filter name, creating it on first use.
    pub async fn add(&self, filter: &str, payload: serde_json::Value) {
        let mut payloads = self.payloads.write().await;
        payloads
            .entry(filter.to_string())
            .or_default()
            .push(payload);
        debug!(filter = %filter, "Filter payload added");
    }

    /// Runs `transform` exactly once over the full payload sequence.
    ///
    /// Returns `None` if no payloads were ever added under `filter`; the
    /// transform is not called in that case.
    pub async fn apply<F>(&self, filter: &str, transform: F) -> Option<serde_json::Value>
    where
        F: FnOnce(&[serde_json::Value]) -> serde_json::Value,
    {
        let payloads = self.payloads.read().await;
        payloads.get(filter).map(|sequence| transform(sequence))
    }

    /// Returns a snapshot of the payloads accumulated under a filter.
    pub async fn payloads(&self, filter: &str) -> Option<Vec<serde_json::Value>> {
        let payloads = self.payloads.read().await;
        payloads.get(filter).cloned()
    }

    /// Returns whether a filter has any payloads.
    pub async fn has_payloads(&self, filter: &str) -> bool {
        let payloads = self.payloads.read().await;
        payloads
            .get(filter)
            .map(|sequence| !sequence.is_empty())
            .unwrap_or(false)
    }

    /// Returns the number of payloads accumulated under a filter.
    pub async fn payload_count(&self, filter: &str) -> usize {
        let payloads = self.payloads.read().await;
        payloads
            .get(filter)
            .map(|sequence| sequence.len())
            .unwrap_or(0)
    }

    /// Returns all filter names with at least one payload.
    pub async fn registered_filters(&self) -> Vec<String> {
        let payloads = self.payloads.read().await;
        payloads.keys().cloned().collect()
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
