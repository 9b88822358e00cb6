//! Convenience result type alias for the plugable registry.

use crate::error::RegistryError;

/// A specialized `Result` type for registry operations.
///
/// Defined once so the rest of the workspace does not need to spell out
/// `Result<T, RegistryError>` everywhere.
pub type RegistryResult<T> = Result<T, RegistryError>;
