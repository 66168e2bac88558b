//! Compiler and configuration error types.

use thiserror::Error;

/// Errors raised while normalizing an automaton tree.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompileError {
    /// The tree contains a variant the rewrite rules do not cover
    #[error("Cannot compile unsupported automaton variant '{name}'")]
    UnsupportedVariant { name: String },
}

/// Errors raised while loading a compiler configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid compiler configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
