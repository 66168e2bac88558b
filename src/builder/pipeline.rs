//! Fluent combinators for chaining automatons.

use super::{compose, filter, lift, skip, slice, take, ConstructionError};
use crate::core::Automaton;

impl<T> Automaton<T> {
    /// Feed this automaton's outputs into `next`.
    ///
    /// # Example
    ///
    /// ```
    /// use stepper::{lift, take};
    ///
    /// let pipeline = lift(|x: i32| x + 1).then(take(2));
    /// let outputs: Vec<i32> = pipeline.run(vec![1, 2, 3]).collect();
    /// assert_eq!(outputs, vec![2, 3]);
    /// ```
    pub fn then(self, next: Automaton<T>) -> Automaton<T> {
        compose(self, next)
    }

    /// Apply a pure function to every output.
    pub fn map<F>(self, f: F) -> Automaton<T>
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        self.then(lift(f))
    }

    /// Keep only outputs matching `predicate`.
    pub fn filter<P>(self, predicate: P) -> Automaton<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.then(filter(predicate))
    }

    /// Stop after `n` outputs have been passed on.
    pub fn take(self, n: usize) -> Automaton<T> {
        self.then(take(n))
    }

    /// Discard the first `n` outputs.
    pub fn skip(self, n: usize) -> Automaton<T> {
        self.then(skip(n))
    }

    pub fn slice(self, min: usize, max: usize) -> Result<Automaton<T>, ConstructionError> {
        Ok(self.then(slice(min, max)?))
    }
}
