//! Hook registry — handlers register against named events in order.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use super::definitions::{HookArgs, HookOutput};

/// Trait for hook handler implementations.
#[async_trait]
pub trait HookHandler: Send + Sync + fmt::Debug {
    /// Returns the handler name used in logs and dispatch error messages.
    fn name(&self) -> &str;

    /// Handles one hook invocation.
    async fn call(&self, args: &HookArgs) -> HookOutput;
}

/// Stable token identifying a single hook registration.
///
/// Returned by [`HookRegistry::add`]; the only handle for removing a
/// handler. Registering the same handler twice yields two distinct tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HookId(Uuid);

impl HookId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for HookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Entry in the hook registry.
#[derive(Debug)]
struct HookEntry {
    /// Removal token handed out at registration.
    id: HookId,
    /// The handler.
    handler: Arc<dyn HookHandler>,
}

/// Registry of hook handlers organized by event name.
///
/// Handlers for an event run in registration order; the order is part of
/// the contract. Duplicate registrations are kept, not de-duplicated.
#[derive(Debug)]
pub struct HookRegistry {
    /// Event name → handlers in registration order.
    handlers: RwLock<HashMap<String, Vec<HookEntry>>>,
}

impl HookRegistry {
    /// Creates a new empty hook registry.
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a handler for an event, creating the event on first use.
    pub async fn add(&self, event: &str, handler: Arc<dyn HookHandler>) -> HookId {
        let id = HookId::new();
        let name = handler.name().to_string();

        let mut handlers = self.handlers.write().await;
        handlers
            .entry(event.to_string())
            .or_default()
            .push(HookEntry { id, handler });

        info!(event = %event, handler = %name, id = %id, "Hook registered");
        id
    }

    /// Registers a batch of handlers, preserving iteration order.
    pub async fn add_many<I>(&self, hooks: I) -> Vec<HookId>
    where
        I: IntoIterator<Item = (String, Arc<dyn HookHandler>)>,
    {
        let mut ids = Vec::new();
        for (event, handler) in hooks {
            ids.push(self.add(&event, handler).await);
        }
        ids
    }

    /// Removes the registration identified by `id`.
    ///
    /// Returns whether an entry was removed. Unknown events and foreign
    /// tokens are a no-op. An event whose last handler is removed disappears
    /// from the registry.
    pub async fn remove(&self, event: &str, id: HookId) -> bool {
        let mut handlers = self.handlers.write().await;
        let Some(entries) = handlers.get_mut(event) else {
            return false;
        };
        let Some(pos) = entries.iter().position(|entry| entry.id == id) else {
            return false;
        };

        entries.remove(pos);
        if entries.is_empty() {
            handlers.remove(event);
        }

        debug!(event = %event, id = %id, "Hook removed");
        true
    }

    /// Returns the handlers for an event, in registration order.
    pub async fn handlers(&self, event: &str) -> Vec<(HookId, Arc<dyn HookHandler>)> {
        let handlers = self.handlers.read().await;
        handlers
            .get(event)
            .map(|entries| {
                entries
                    .iter()
                    .map(|entry| (entry.id, entry.handler.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns whether any handlers are registered for an event.
    pub async fn has_hooks(&self, event: &str) -> bool {
        let handlers = self.handlers.read().await;
        handlers
            .get(event)
            .map(|entries| !entries.is_empty())
            .unwrap_or(false)
    }

    /// Returns the number of handlers registered for an event.
    pub async fn hook_count(&self, event: &str) -> usize {
        let handlers = self.handlers.read().await;
        handlers.get(event).map(|entries| entries.len()).unwrap_or(0)
    }

    /// Returns all event names with at least one handler.
    pub async fn registered_events(&self) -> Vec<String> {
        let handlers = self.handlers.read().await;
        handlers.keys().cloned().collect()
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}
