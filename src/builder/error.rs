//! Construction errors for automaton builders.

use thiserror::Error;

/// Errors that can occur when constructing automatons.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("Slice lower bound {min} exceeds upper bound {max}")]
    InvertedWindow { min: usize, max: usize },
}
