//! Core automaton types and stepping semantics.
//!
//! This module contains the pure core of the library:
//! - The three-way [`Step`] outcome of a transition
//! - The closed [`Automaton`] variant set
//! - Positional [`Window`]s and shared function values
//!
//! Nothing in this module mutates in place; every transition returns a
//! fresh value.

mod automaton;
mod function;
mod shape;
mod step;
mod window;

pub use automaton::{Automaton, AutomatonStep, Stepper};
pub use function::{Predicate, Pure};
pub use shape::Shape;
pub use step::Step;
pub use window::{Position, Window, UNBOUNDED};
