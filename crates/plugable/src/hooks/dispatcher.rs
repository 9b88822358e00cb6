//! Hook dispatcher — fires every handler registered for an event, in
//! registration order.
//!
//! A handler failure aborts the run and surfaces as a `Hook` error naming
//! the event and the handler. An event with no handlers yields an empty
//! outcome, never an error.

use std::sync::Arc;

use tracing::debug;

use plugable_core::error::RegistryError;
use plugable_core::result::RegistryResult;

use super::definitions::HookArgs;
use super::registry::HookRegistry;

/// Ordered results of dispatching one event.
#[derive(Debug, Clone)]
pub struct DispatchOutcome {
    /// The event that was fired.
    pub event: String,
    /// One entry per handler, in registration order.
    pub results: Vec<serde_json::Value>,
}

impl DispatchOutcome {
    /// Returns whether no handler ran.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns the last handler's result, if any handler ran.
    pub fn last(&self) -> Option<&serde_json::Value> {
        self.results.last()
    }

    /// Consumes the outcome, returning the last result.
    pub fn into_last(self) -> Option<serde_json::Value> {
        self.results.into_iter().next_back()
    }
}

/// Dispatches events to all registered handlers.
#[derive(Debug)]
pub struct HookDispatcher {
    /// Hook registry.
    registry: Arc<HookRegistry>,
}

impl HookDispatcher {
    /// Creates a new dispatcher over a registry.
    pub fn new(registry: Arc<HookRegistry>) -> Self {
        Self { registry }
    }

    /// Fires an event, invoking every handler in registration order.
    ///
    /// Handler results are collected in the same order. The first failing
    /// handler aborts the run; results from handlers that already ran are
    /// discarded with it.
    pub async fn dispatch(&self, event: &str, args: &HookArgs) -> RegistryResult<DispatchOutcome> {
        let handlers = self.registry.handlers(event).await;

        if handlers.is_empty() {
            return Ok(DispatchOutcome {
                event: event.to_string(),
                results: Vec::new(),
            });
        }

        debug!(event = %event, handler_count = handlers.len(), "Dispatching hooks");

        let mut results = Vec::with_capacity(handlers.len());
        for (_, handler) in &handlers {
            match handler.call(args).await {
                Ok(value) => results.push(value),
                Err(message) => {
                    return Err(RegistryError::hook(format!(
                        "hook '{}' handler '{}' failed: {}",
                        event,
                        handler.name(),
                        message
                    )));
                }
            }
        }

        Ok(DispatchOutcome {
            event: event.to_string(),
            results,
        })
    }

    /// Returns the underlying hook registry.
    pub fn registry(&self) -> &Arc<HookRegistry> {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::traits::ClosureHook;
    use plugable_core::error::ErrorKind;
    use serde_json::json;

    fn dispatcher() -> (Arc<HookRegistry>, HookDispatcher) {
        let registry = Arc::new(HookRegistry::new());
        let dispatcher = HookDispatcher::new(registry.clone());
        (registry, dispatcher)
    }

    #[tokio::test]
    async fn test_all_handlers_run_in_registration_order() {
        let (registry, dispatcher) = dispatcher();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for label in ["first", "second", "third"] {
            let seen = seen.clone();
            registry
                .add(
                    "startup",
                    Arc::new(ClosureHook::new(label, move |_| {
                        seen.lock().unwrap().push(label);
                        Ok(json!(label))
                    })),
                )
                .await;
        }

        let outcome = dispatcher
            .dispatch("startup", &HookArgs::none())
            .await
            .unwrap();

        assert_eq!(*seen.lock().unwrap(), vec!["first", "second", "third"]);
        assert_eq!(
            outcome.results,
            vec![json!("first"), json!("second"), json!("third")]
        );
        assert_eq!(outcome.last(), Some(&json!("third")));
    }

    #[tokio::test]
    async fn test_unknown_event_yields_empty_outcome() {
        let (_registry, dispatcher) = dispatcher();
        let outcome = dispatcher.dispatch("nope", &HookArgs::none()).await.unwrap();
        assert!(outcome.is_empty());
        assert_eq!(outcome.into_last(), None);
    }

    #[tokio::test]
    async fn test_handler_failure_names_event_and_handler() {
        let (registry, dispatcher) = dispatcher();
        registry
            .add(
                "startup",
                Arc::new(ClosureHook::new("boom", |_| Err("exploded".to_string()))),
            )
            .await;

        let err = dispatcher
            .dispatch("startup", &HookArgs::none())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Hook);
        assert!(err.message.contains("'startup'"));
        assert!(err.message.contains("'boom'"));
    }

    #[tokio::test]
    async fn test_failure_aborts_remaining_handlers() {
        let (registry, dispatcher) = dispatcher();
        let ran_after = Arc::new(Mutex::new(false));

        registry
            .add(
                "e",
                Arc::new(ClosureHook::new("fails", |_| Err("no".to_string()))),
            )
            .await;
        let ran_after_clone = ran_after.clone();
        registry
            .add(
                "e",
                Arc::new(ClosureHook::new("late", move |_| {
                    *ran_after_clone.lock().unwrap() = true;
                    Ok(serde_json::Value::Null)
                })),
            )
            .await;

        assert!(dispatcher.dispatch("e", &HookArgs::none()).await.is_err());
        assert!(!*ran_after.lock().unwrap());
    }

    #[tokio::test]
    async fn test_handlers_receive_the_arguments() {
        let (registry, dispatcher) = dispatcher();
        registry
            .add(
                "greet",
                Arc::new(ClosureHook::new("echo", |args| {
                    let who = args.get_str(0).unwrap_or("nobody");
                    Ok(json!(format!("hello {who}")))
                })),
            )
            .await;

        let outcome = dispatcher
            .dispatch("greet", &HookArgs::none().with_str("world"))
            .await
            .unwrap();
        assert_eq!(outcome.into_last(), Some(json!("hello world")));
    }

    #[tokio::test]
    async fn test_async_handler() {
        let (registry, dispatcher) = dispatcher();
        registry
            .add(
                "tick",
                Arc::new(ClosureHook::new_async("yields", |_: &HookArgs| async {
                    tokio::task::yield_now().await;
                    Ok(json!(42))
                })),
            )
            .await;

        let outcome = dispatcher.dispatch("tick", &HookArgs::none()).await.unwrap();
        assert_eq!(outcome.into_last(), Some(json!(42)));
    }
}
