//! Drivers that step an automaton over a sequence of inputs.
//!
//! [`run`] is lazy: it pulls one input at a time and stops for good at the
//! first `Terminated`, so inputs after that point are never consumed.

use crate::core::{Automaton, Step};
use log::debug;

/// Lazy iterator over the values an automaton produces.
///
/// Created by [`run`] or [`Automaton::run`].
pub struct Outputs<T, I> {
    automaton: Option<Automaton<T>>,
    inputs: I,
    consumed: usize,
}

impl<T, I> Outputs<T, I> {
    /// Number of inputs pulled so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// True once the automaton has terminated.
    pub fn is_terminated(&self) -> bool {
        self.automaton.is_none()
    }

    /// The automaton that will receive the next input, if still alive.
    pub fn automaton(&self) -> Option<&Automaton<T>> {
        self.automaton.as_ref()
    }
}

impl<T, I> Iterator for Outputs<T, I>
where
    T: Clone,
    I: Iterator<Item = T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            let current = self.automaton.as_ref()?;
            let input = self.inputs.next()?;
            self.consumed += 1;

            match current.step(input) {
                Step::Terminated => {
                    debug!("automaton terminated after {} inputs", self.consumed);
                    self.automaton = None;
                    return None;
                }
                Step::Skipped { next } => self.automaton = Some(next),
                Step::Produced { value, next } => {
                    self.automaton = Some(next);
                    return Some(value);
                }
            }
        }
    }
}

/// Step `automaton` over `inputs`, yielding produced values in order.
///
/// # Example
///
/// ```rust
/// use stepper::{compose, lift, run, slice};
///
/// let pipeline = compose(lift(|x: i32| x * 2), slice(1, 3).unwrap());
/// let mut outputs = run(pipeline, vec![10, 20, 30, 40, 50]);
///
/// assert_eq!(outputs.by_ref().collect::<Vec<_>>(), vec![40, 60]);
/// assert_eq!(outputs.consumed(), 4);
/// ```
pub fn run<T, I>(automaton: Automaton<T>, inputs: I) -> Outputs<T, I::IntoIter>
where
    T: Clone,
    I: IntoIterator<Item = T>,
{
    Outputs {
        automaton: Some(automaton),
        inputs: inputs.into_iter(),
        consumed: 0,
    }
}

/// Fold `inputs` through an automaton over `(accumulator, input)` pairs.
///
/// Each step receives the current accumulator alongside the next input.
/// A produced pair's first component becomes the new accumulator; a skip
/// keeps the old one. Folding stops at the first `Terminated` and returns
/// the last accumulator.
///
/// # Example
///
/// ```rust
/// use stepper::{fold, lift};
///
/// let sum = lift(|(acc, x): (i32, i32)| (acc + x, x)).take(3);
/// assert_eq!(fold(sum, 0, vec![1, 2, 3, 4, 5]), 6);
/// ```
pub fn fold<R, A, I>(automaton: Automaton<(R, A)>, init: R, inputs: I) -> R
where
    R: Clone,
    A: Clone,
    I: IntoIterator<Item = A>,
{
    let mut accumulator = init;
    let mut current = automaton;

    for input in inputs {
        match current.step((accumulator.clone(), input)) {
            Step::Terminated => break,
            Step::Skipped { next } => current = next,
            Step::Produced {
                value: (next_accumulator, _),
                next,
            } => {
                accumulator = next_accumulator;
                current = next;
            }
        }
    }

    accumulator
}

/// Record every step outcome, up to and including the first `Terminated`.
///
/// # Example
///
/// ```rust
/// use stepper::core::Step;
/// use stepper::{take, trace};
///
/// let outcomes = trace(take(1), vec!['a', 'b', 'c']);
/// assert_eq!(outcomes, vec![Step::produced('a', ()), Step::terminated()]);
/// ```
pub fn trace<T, I>(automaton: Automaton<T>, inputs: I) -> Vec<Step<T, ()>>
where
    T: Clone,
    I: IntoIterator<Item = T>,
{
    let mut outcomes = Vec::new();
    let mut current = automaton;

    for input in inputs {
        let step = current.step(input);
        let next = step.next().cloned();
        outcomes.push(step.without_next());
        match next {
            Some(next) => current = next,
            None => break,
        }
    }

    outcomes
}

impl<T: Clone> Automaton<T> {
    /// Lazily step this automaton over `inputs`. See [`run`].
    pub fn run<I>(self, inputs: I) -> Outputs<T, I::IntoIter>
    where
        I: IntoIterator<Item = T>,
    {
        run(self, inputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{always, compose, filter, identity, lift, skip, take};

    #[test]
    fn run_collects_produced_values() {
        let evens = filter(|x: &i32| x % 2 == 0);
        let outputs: Vec<i32> = run(evens, 1..=6).collect();
        assert_eq!(outputs, vec![2, 4, 6]);
    }

    #[test]
    fn run_stops_pulling_after_termination() {
        let mut outputs = run(take(2), vec![1, 2, 3, 4]);

        assert_eq!(outputs.next(), Some(1));
        assert_eq!(outputs.next(), Some(2));
        assert_eq!(outputs.next(), None);
        assert_eq!(outputs.consumed(), 3);
        assert!(outputs.is_terminated());

        assert_eq!(outputs.next(), None);
        assert_eq!(outputs.consumed(), 3);
    }

    #[test]
    fn run_handles_unbounded_inputs() {
        let outputs: Vec<u64> = run(skip(5).take(3), 0u64..).collect();
        assert_eq!(outputs, vec![5, 6, 7]);
    }

    #[test]
    fn run_on_exhausted_inputs_keeps_automaton() {
        let mut outputs = run(identity::<i32>(), Vec::new());

        assert_eq!(outputs.next(), None);
        assert!(!outputs.is_terminated());
        assert!(outputs.automaton().is_some());
    }

    #[test]
    fn always_produces_once_per_input() {
        let outputs: Vec<&str> = run(always("x"), vec!["a", "b", "c"]).collect();
        assert_eq!(outputs, vec!["x", "x", "x"]);
    }

    #[test]
    fn fold_threads_accumulator() {
        let product = lift(|(acc, x): (i64, i64)| (acc * x, x));
        assert_eq!(fold(product, 1, 1..=5), 120);
    }

    #[test]
    fn fold_keeps_accumulator_on_skip() {
        let odd_sum = compose(
            filter(|(_, x): &(i32, i32)| x % 2 == 1),
            lift(|(acc, x): (i32, i32)| (acc + x, x)),
        );
        assert_eq!(fold(odd_sum, 0, 1..=6), 9);
    }

    #[test]
    fn fold_returns_last_accumulator_on_termination() {
        let sum = compose(lift(|(acc, x): (i32, i32)| (acc + x, x)), take(2));
        assert_eq!(fold(sum, 100, vec![1, 2, 3]), 103);
    }

    #[test]
    fn trace_ends_at_first_termination() {
        let outcomes = trace(skip(1).take(1), vec![7, 8, 9, 10]);
        assert_eq!(
            outcomes,
            vec![Step::skipped(()), Step::produced(8, ()), Step::terminated()]
        );
    }

    #[test]
    fn trace_of_empty_input_is_empty() {
        assert!(trace(take::<i32>(0), Vec::new()).is_empty());
    }
}
