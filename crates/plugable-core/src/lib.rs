//! # plugable-core
//!
//! Core crate for the plugable registry. Contains the unified error system,
//! the result alias, and the plugin loader settings.
//!
//! This crate has **no** dependency on the registry crate itself.

pub mod config;
pub mod error;
pub mod result;

pub use config::PluginSettings;
pub use error::{ErrorKind, RegistryError};
pub use result::RegistryResult;
