//! Construction API for automatons.
//!
//! This module provides free-standing constructors for every primitive
//! variant, sequential composition, fluent combinators on [`Automaton`]
//! and the [`pipeline!`](crate::pipeline) macro.
//!
//! Functions handed to [`lift`], [`filter`] and the mapping helpers are
//! assumed pure. The compiler relies on that when it drops or reorders
//! their applications.

pub mod error;
pub mod macros;
mod pipeline;

pub use error::ConstructionError;

use crate::core::{Automaton, Predicate, Pure, Window};
use std::sync::Arc;

/// Automaton that passes every input through unchanged.
pub fn identity<T>() -> Automaton<T> {
    Automaton::Identity
}

/// Lift a pure function into an automaton.
///
/// # Example
///
/// ```
/// use stepper::lift;
///
/// let inc = lift(|x: i32| x + 1);
/// assert_eq!(inc.step(1).into_value(), Some(2));
/// ```
pub fn lift<T, F>(f: F) -> Automaton<T>
where
    F: Fn(T) -> T + Send + Sync + 'static,
{
    Automaton::Lift(Pure::new(f))
}

/// Automaton that ignores its input and always produces `value`.
pub fn always<T>(value: T) -> Automaton<T> {
    Automaton::Always(value)
}

/// Automaton that passes inputs matching `predicate` and skips the rest.
pub fn filter<T, P>(predicate: P) -> Automaton<T>
where
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    Automaton::Filter(Predicate::new(predicate))
}

/// Positional window admitting transitions `min..max`.
///
/// # Example
///
/// ```
/// use stepper::{slice, ConstructionError};
///
/// let window = slice::<i32>(1, 3).unwrap();
/// let outputs: Vec<i32> = window.run(vec![10, 20, 30, 40]).collect();
/// assert_eq!(outputs, vec![20, 30]);
///
/// assert!(matches!(
///     slice::<i32>(3, 1),
///     Err(ConstructionError::InvertedWindow { min: 3, max: 1 })
/// ));
/// ```
pub fn slice<T>(min: usize, max: usize) -> Result<Automaton<T>, ConstructionError> {
    Ok(Automaton::Slice(Window::new(min, max)?))
}

/// Pass the first `n` inputs, then terminate.
pub fn take<T>(n: usize) -> Automaton<T> {
    Automaton::Slice(Window::until(n))
}

/// Skip the first `n` inputs, then pass everything.
pub fn skip<T>(n: usize) -> Automaton<T> {
    Automaton::Slice(Window::from_index(n))
}

/// Feed the outputs of `ab` into `bc`.
pub fn compose<T>(ab: Automaton<T>, bc: Automaton<T>) -> Automaton<T> {
    Automaton::Sequential(Arc::new(ab), Arc::new(bc))
}

/// Transform inputs with `f` before they reach `automaton`.
pub fn map_input<T, F>(f: F, automaton: Automaton<T>) -> Automaton<T>
where
    F: Fn(T) -> T + Send + Sync + 'static,
{
    compose(lift(f), automaton)
}

/// Transform the outputs of `automaton` with `f`.
pub fn map_output<T, F>(automaton: Automaton<T>, f: F) -> Automaton<T>
where
    F: Fn(T) -> T + Send + Sync + 'static,
{
    compose(automaton, lift(f))
}

/// Transform both the inputs and the outputs of `automaton`.
pub fn dimap<T, L, R>(before: L, after: R, automaton: Automaton<T>) -> Automaton<T>
where
    L: Fn(T) -> T + Send + Sync + 'static,
    R: Fn(T) -> T + Send + Sync + 'static,
{
    map_input(before, map_output(automaton, after))
}
