//! Hook invocation payload types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result returned by a single hook handler.
///
/// Handler-level failures are plain strings; the dispatcher maps them into
/// registry errors naming the event and the handler.
pub type HookOutput = Result<serde_json::Value, String>;

/// Ordered argument sequence passed to every handler of one hook firing.
///
/// Arguments are positional JSON values, so the registry stays
/// payload-agnostic while handlers get typed accessors at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookArgs {
    /// Positional arguments, in the order the caller supplied them.
    pub values: Vec<serde_json::Value>,
    /// Timestamp of the firing.
    pub fired_at: DateTime<Utc>,
}

impl HookArgs {
    /// Creates an empty argument list.
    pub fn none() -> Self {
        Self {
            values: Vec::new(),
            fired_at: Utc::now(),
        }
    }

    /// Creates an argument list from raw values.
    pub fn from_values(values: Vec<serde_json::Value>) -> Self {
        Self {
            values,
            fired_at: Utc::now(),
        }
    }

    /// Appends a typed value.
    pub fn with_value(mut self, value: serde_json::Value) -> Self {
        self.values.push(value);
        self
    }

    /// Appends a string argument.
    pub fn with_str(self, value: &str) -> Self {
        self.with_value(serde_json::json!(value))
    }

    /// Appends an integer argument.
    pub fn with_int(self, value: i64) -> Self {
        self.with_value(serde_json::json!(value))
    }

    /// Appends a boolean argument.
    pub fn with_bool(self, value: bool) -> Self {
        self.with_value(serde_json::json!(value))
    }

    /// Returns the number of arguments.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether the argument list is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Gets an argument by position.
    pub fn get(&self, index: usize) -> Option<&serde_json::Value> {
        self.values.get(index)
    }

    /// Gets a string argument by position.
    pub fn get_str(&self, index: usize) -> Option<&str> {
        self.values.get(index).and_then(|v| v.as_str())
    }

    /// Gets an i64 argument by position.
    pub fn get_i64(&self, index: usize) -> Option<i64> {
        self.values.get(index).and_then(|v| v.as_i64())
    }

    /// Gets a bool argument by position.
    pub fn get_bool(&self, index: usize) -> Option<bool> {
        self.values.get(index).and_then(|v| v.as_bool())
    }
}

impl Default for HookArgs {
    fn default() -> Self {
        Self::none()
    }
}

impl From<Vec<serde_json::Value>> for HookArgs {
    fn from(values: Vec<serde_json::Value>) -> Self {
        Self::from_values(values)
    }
}
