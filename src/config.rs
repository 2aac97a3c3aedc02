use serde::{Deserialize, Serialize};

/// Registry configuration
///
/// Defaults reproduce the host plugin conventions: derived identities start at
/// one million and both filters are bound at priority 20.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Base added to `order + parent` when an item has no explicit ID
    pub id_base: i64,

    /// Priority used when binding the extension points
    pub hook_priority: i32,

    /// Bind the extension points in the administrative context too
    pub register_in_admin: bool,

    /// Emit a warning when a referenced object cannot be resolved
    pub log_dropped_references: bool,
}

impl RegistryConfig {
    pub const DEFAULT_ID_BASE: i64 = 1_000_000;
    pub const DEFAULT_HOOK_PRIORITY: i32 = 20;

    pub fn new() -> Self {
        Self {
            id_base: Self::DEFAULT_ID_BASE,
            hook_priority: Self::DEFAULT_HOOK_PRIORITY,
            register_in_admin: false,
            log_dropped_references: true,
        }
    }

    /// Set the derived ID base
    pub fn id_base(mut self, base: i64) -> Self {
        self.id_base = base;
        self
    }

    /// Set the hook priority
    pub fn hook_priority(mut self, priority: i32) -> Self {
        self.hook_priority = priority;
        self
    }

    /// Allow binding in the administrative context
    pub fn register_in_admin(mut self, enabled: bool) -> Self {
        self.register_in_admin = enabled;
        self
    }

    pub fn log_dropped_references(mut self, enabled: bool) -> Self {
        self.log_dropped_references = enabled;
        self
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new()
    }
}
