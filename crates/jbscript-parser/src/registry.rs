//! Registry of recognized system variable names
//!
//! The runtime predefines a set of `$jitterbit.*` system variables; the
//! parser only needs their names to classify `$`-references as system vs
//! user-global. The registry is supplied by the surrounding runtime and a
//! built-in default covers the documented names.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Names (without the `$` sigil) in the built-in default registry
const DEFAULT_SYSTEM_VARS: &[&str] = &[
    "jitterbit.api.request.body",
    "jitterbit.api.request.headers.fullurl",
    "jitterbit.api.request.method",
    "jitterbit.api.response",
    "jitterbit.api.response.status_code",
    "jitterbit.networking.http.request.method",
    "jitterbit.operation.error",
    "jitterbit.operation.guid",
    "jitterbit.operation.last_error",
    "jitterbit.operation.name",
    "jitterbit.operation.previous.error",
    "jitterbit.operation.previous.success",
    "jitterbit.operation.project_name",
    "jitterbit.operation.warning",
    "jitterbit.script.error",
    "jitterbit.source.filename",
    "jitterbit.source.filenames",
    "jitterbit.source.locator",
    "jitterbit.target.filename",
    "jitterbit.target.locator",
    "jitterbit.web_service_call.status_code",
];

static DEFAULT_REGISTRY: Lazy<SystemVarRegistry> = Lazy::new(SystemVarRegistry::with_defaults);

/// The reserved namespace prefix for system variables
pub const SYSTEM_NAMESPACE_PREFIX: &str = "jitterbit.";

/// Set of system variable names recognized at parse time
#[derive(Debug, Clone, Default)]
pub struct SystemVarRegistry {
    names: HashSet<String>,
}

impl SystemVarRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with the built-in default names
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for name in DEFAULT_SYSTEM_VARS {
            registry.insert(*name);
        }
        registry
    }

    /// The shared default registry
    pub fn shared() -> &'static Self {
        &DEFAULT_REGISTRY
    }

    /// Register a system variable name (without the `$` sigil)
    pub fn insert(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    /// Check whether a name (without the `$` sigil) is a system variable
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Check whether a name claims the reserved system namespace
    pub fn in_reserved_namespace(name: &str) -> bool {
        name.starts_with(SYSTEM_NAMESPACE_PREFIX)
    }

    /// Number of registered names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
