//! Prelude for convenient imports.

pub use async_trait::async_trait;

pub use plugable_core::config::PluginSettings;
pub use plugable_core::error::{ErrorKind, RegistryError};
pub use plugable_core::result::RegistryResult;

pub use crate::filters::FilterRegistry;
pub use crate::hooks::definitions::{HookArgs, HookOutput};
pub use crate::hooks::dispatcher::{DispatchOutcome, HookDispatcher};
pub use crate::hooks::registry::{HookHandler, HookId, HookRegistry};
pub use crate::manager::PluginManager;
pub use crate::plugins::loader::PluginLoader;
pub use crate::plugins::registry::PluginRegistry;
pub use crate::traits::ClosureHook;
