//! Closure-backed hook handlers.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;

use crate::hooks::definitions::{HookArgs, HookOutput};
use crate::hooks::registry::HookHandler;

/// A closure-based hook handler for quick handler creation.
///
/// Most hooks are small functions; this wrapper saves plugins from writing a
/// struct-plus-trait-impl for each one. The name is what shows up in logs
/// and dispatch error messages.
pub struct ClosureHook {
    /// Handler name.
    name: String,
    /// Handler function.
    func: Arc<
        dyn Fn(&HookArgs) -> Pin<Box<dyn Future<Output = HookOutput> + Send + '_>> + Send + Sync,
    >,
}

impl std::fmt::Debug for ClosureHook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClosureHook")
            .field("name", &self.name)
            .field("func", &"<closure>")
            .finish()
    }
}

impl ClosureHook {
    /// Creates a handler from a synchronous closure.
    pub fn new<F>(name: &str, func: F) -> Self
    where
        F: Fn(&HookArgs) -> HookOutput + Send + Sync + 'static,
    {
        Self {
            name: name.to_string(),
            func: Arc::new(move |args| {
                let out = func(args);
                Box::pin(async move { out })
            }),
        }
    }

    /// Creates a handler from a future-returning closure.
    pub fn new_async<F, Fut>(name: &str, func: F) -> Self
    where
        F: Fn(&HookArgs) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HookOutput> + Send + 'static,
    {
        Self {
            name: name.to_string(),
            func: Arc::new(move |args| {
                let fut = func(args);
                Box::pin(fut)
            }),
        }
    }

    /// Wraps the handler for registration.
    pub fn arc(self) -> Arc<dyn HookHandler> {
        Arc::new(self)
    }
}

#[async_trait]
impl HookHandler for ClosureHook {
    fn name(&self) -> &str {
        &self.name
    }

    async fn call(&self, args: &HookArgs) -> HookOutput {
        (self.func)(args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_sync_closure() {
        let hook = ClosureHook::new("double", |args| {
            let n = args.get_i64(0).ok_or("missing argument")?;
            Ok(json!(n * 2))
        });

        let out = hook.call(&HookArgs::none().with_int(21)).await;
        assert_eq!(out, Ok(json!(42)));
        assert_eq!(hook.name(), "double");
    }

    #[tokio::test]
    async fn test_sync_closure_error() {
        let hook = ClosureHook::new("picky", |args| {
            let n = args.get_i64(0).ok_or("missing argument")?;
            Ok(json!(n))
        });

        let out = hook.call(&HookArgs::none()).await;
        assert_eq!(out, Err("missing argument".to_string()));
    }

    #[tokio::test]
    async fn test_async_closure() {
        let hook = ClosureHook::new_async("later", |_: &HookArgs| async {
            tokio::task::yield_now().await;
            Ok(json!("done"))
        });

        let out = hook.call(&HookArgs::none()).await;
        assert_eq!(out, Ok(json!("done")));
    }
}
