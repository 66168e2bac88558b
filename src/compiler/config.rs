//! Rule selection for the fusion compiler.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Which rewrite rule families the compiler may apply.
///
/// Identity elimination is always on. Every other family can be switched
/// off, which is mostly useful when lifted functions are not pure:
/// annihilation drops calls and commutation reorders them.
///
/// Missing fields fall back to their defaults when deserializing, so a
/// partial document only needs to name what it changes.
///
/// # Example
///
/// ```rust
/// use stepper::CompilerConfig;
///
/// let config = CompilerConfig::from_json(r#"{ "commute": false }"#).unwrap();
/// assert!(!config.commute);
/// assert!(config.fuse_lifts);
///
/// assert_eq!(CompilerConfig::conservative(), CompilerConfig::default()
///     .with_annihilation(false)
///     .with_commutation(false));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Collapse adjacent lifts into one function
    pub fuse_lifts: bool,

    /// Collapse adjacent fresh windows into one
    pub fuse_slices: bool,

    /// Drop a lift that feeds a constant producer
    pub annihilate: bool,

    /// Move windows ahead of the lifts feeding them
    pub commute: bool,

    /// Rebalance nested compositions to the right
    pub reassociate: bool,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            fuse_lifts: true,
            fuse_slices: true,
            annihilate: true,
            commute: true,
            reassociate: true,
        }
    }
}

impl CompilerConfig {
    /// Configuration safe for lifted functions with side effects.
    pub fn conservative() -> Self {
        Self {
            annihilate: false,
            commute: false,
            ..Self::default()
        }
    }

    /// Load a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Toggle fusion of adjacent lifts (rule 4).
    pub fn with_lift_fusion(mut self, enabled: bool) -> Self {
        self.fuse_lifts = enabled;
        self
    }

    /// Toggle fusion of adjacent fresh windows (rule 6).
    pub fn with_slice_fusion(mut self, enabled: bool) -> Self {
        self.fuse_slices = enabled;
        self
    }

    /// Toggle dropping a lift that feeds a constant (rule 3).
    ///
    /// Disable when the lift has side effects that must still run.
    pub fn with_annihilation(mut self, enabled: bool) -> Self {
        self.annihilate = enabled;
        self
    }

    /// Toggle moving windows ahead of lifts (rule 5).
    ///
    /// Disable when the lift must see every input, including discarded ones.
    pub fn with_commutation(mut self, enabled: bool) -> Self {
        self.commute = enabled;
        self
    }

    /// Toggle rebalancing of nested compositions (rules 7 and 8).
    pub fn with_reassociation(mut self, enabled: bool) -> Self {
        self.reassociate = enabled;
        self
    }

    /// True when every purity-dependent rule is disabled.
    ///
    /// Under such a configuration each lifted function runs exactly as
    /// often, and in the same order, as in the uncompiled tree.
    pub fn tolerates_side_effects(&self) -> bool {
        !self.annihilate && !self.commute
    }
}
