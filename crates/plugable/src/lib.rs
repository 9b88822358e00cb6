//! # plugable
//!
//! A plugin/hook/filter registry. Provides:
//!
//! - Hook registry with ordered, token-removable registrations per event
//! - Hook dispatcher that fires every handler in registration order
//! - Filter registry whose accumulated payloads feed a caller-supplied
//!   transform, run once over the whole sequence
//! - Per-plugin `config.json` loading into a plugin-config registry
//! - A [`PluginManager`] facade owning all of the above
//!
//! The registries are explicit instances guarded by async locks; construct
//! one per host (or per test) and share it with `Arc`.

pub mod filters;
pub mod hooks;
pub mod manager;
pub mod plugins;
pub mod prelude;
pub mod traits;

pub use filters::FilterRegistry;
pub use hooks::definitions::{HookArgs, HookOutput};
pub use hooks::dispatcher::{DispatchOutcome, HookDispatcher};
pub use hooks::registry::{HookHandler, HookId, HookRegistry};
pub use manager::PluginManager;
pub use plugins::loader::PluginLoader;
pub use plugins::registry::PluginRegistry;
pub use traits::ClosureHook;
