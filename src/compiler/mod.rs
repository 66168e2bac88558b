//! Fusion compiler for automaton trees.
//!
//! The compiler rewrites a tree of `Sequential` compositions into an
//! equivalent tree that dispatches less per input:
//! - Adjacent lifts and adjacent windows collapse into one node
//! - Windows move ahead of the lifts feeding them
//! - Compositions lean to the right
//!
//! Rewriting is pure and total over the closed variant set. Trees holding
//! `Custom` automatons are rejected with [`CompileError::UnsupportedVariant`].

mod config;
mod error;
mod fuse;

pub use config::CompilerConfig;
pub use error::{CompileError, ConfigError};
pub use fuse::Compiler;

use crate::core::Automaton;

/// Normalize an automaton with the default rule set.
///
/// # Example
///
/// ```rust
/// use stepper::{compose, normalize, slice};
///
/// let windows = compose(slice::<i32>(2, 5).unwrap(), slice(1, 3).unwrap());
/// let compiled = normalize(&windows).unwrap();
///
/// let outputs: Vec<i32> = compiled.run(0..10).collect();
/// assert_eq!(outputs, vec![3, 4]);
/// ```
pub fn normalize<T>(automaton: &Automaton<T>) -> Result<Automaton<T>, CompileError>
where
    T: Clone + 'static,
{
    Compiler::default().normalize(automaton)
}

/// Fuse `ab` followed by `bc` with the default rule set.
pub fn fuse<T>(ab: &Automaton<T>, bc: &Automaton<T>) -> Result<Automaton<T>, CompileError>
where
    T: Clone + 'static,
{
    Compiler::default().fuse(ab, bc)
}

impl<T: Clone + 'static> Automaton<T> {
    /// Normalize this automaton with the default rule set.
    pub fn normalize(&self) -> Result<Automaton<T>, CompileError> {
        normalize(self)
    }
}
