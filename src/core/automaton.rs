//! The closed set of automaton variants and their stepping rules.

use super::function::{Predicate, Pure};
use super::shape::Shape;
use super::step::Step;
use super::window::{Position, Window};
use std::fmt;
use std::sync::Arc;

/// Outcome of stepping an [`Automaton`]: the successor is another automaton.
pub type AutomatonStep<T> = Step<T, Automaton<T>>;

/// A hand-written automaton plugged into [`Automaton::Custom`].
///
/// Custom automatons step like any other variant but are opaque to the
/// compiler, which refuses to rewrite trees containing them.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use stepper::core::{Automaton, AutomatonStep, Step, Stepper};
///
/// /// Emits the sum of each input and the one before it.
/// struct PairSum {
///     previous: Option<i32>,
/// }
///
/// impl Stepper<i32> for PairSum {
///     fn name(&self) -> &str {
///         "PairSum"
///     }
///
///     fn step(&self, input: i32) -> AutomatonStep<i32> {
///         let next: Automaton<i32> = Automaton::Custom(Arc::new(PairSum { previous: Some(input) }));
///         match self.previous {
///             Some(prev) => Step::produced(prev + input, next),
///             None => Step::skipped(next),
///         }
///     }
/// }
///
/// let automaton: Automaton<i32> = Automaton::Custom(Arc::new(PairSum { previous: None }));
/// let outputs: Vec<i32> = automaton.run(vec![1, 2, 3]).collect();
/// assert_eq!(outputs, vec![3, 5]);
/// ```
pub trait Stepper<T>: Send + Sync {
    /// Name reported in diagnostics and compiler errors.
    fn name(&self) -> &str;

    /// Consume one input. Must not mutate `self`.
    fn step(&self, input: T) -> AutomatonStep<T>;
}

/// An immutable incremental transformer over values of type `T`.
///
/// Stepping never mutates the receiver; it returns the automaton to use for
/// the next input. The same value can therefore be stepped independently by
/// any number of callers.
///
/// The variant set is closed: the compiler's rewrite rules are written
/// against exactly these shapes. `Custom` is the escape hatch for
/// hand-written automatons and is never rewritten.
pub enum Automaton<T> {
    /// Passes every input through unchanged
    Identity,

    /// Applies a pure function to every input
    Lift(Pure<T>),

    /// Ignores the input and produces a stored constant
    Always(T),

    /// Passes inputs matching the predicate, skips the rest
    Filter(Predicate<T>),

    /// Positional window over the transition counter
    Slice(Window),

    /// Feeds the output of the first automaton into the second
    Sequential(Arc<Automaton<T>>, Arc<Automaton<T>>),

    /// User-supplied automaton, opaque to the compiler
    Custom(Arc<dyn Stepper<T>>),
}

impl<T: Clone> Automaton<T> {
    /// Consume one input and return the outcome with the successor.
    ///
    /// Termination is sticky: once either stage of a `Sequential` node
    /// terminates, the whole composite terminates and the other stage's
    /// updated state is discarded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stepper::{compose, lift, slice};
    ///
    /// let pipeline = compose(lift(|x: i32| x * 2), slice(1, 3).unwrap());
    ///
    /// let first = pipeline.step(10);
    /// assert!(first.is_skipped());
    ///
    /// let second = first.into_next().unwrap().step(20);
    /// assert_eq!(second.value(), Some(&40));
    /// ```
    pub fn step(&self, input: T) -> AutomatonStep<T> {
        match self {
            Automaton::Identity => Step::produced(input, self.clone()),
            Automaton::Lift(f) => Step::produced(f.apply(input), self.clone()),
            Automaton::Always(value) => Step::produced(value.clone(), self.clone()),
            Automaton::Filter(p) => {
                if p.check(&input) {
                    Step::produced(input, self.clone())
                } else {
                    Step::skipped(self.clone())
                }
            }
            Automaton::Slice(window) => match window.position() {
                Position::Closed => Step::terminated(),
                Position::Before => Step::skipped(Automaton::Slice(window.advance())),
                Position::Inside => Step::produced(input, Automaton::Slice(window.advance())),
            },
            Automaton::Sequential(ab, bc) => step_sequential(ab, bc, input),
            Automaton::Custom(stepper) => stepper.step(input),
        }
    }
}

fn step_sequential<T: Clone>(
    ab: &Arc<Automaton<T>>,
    bc: &Arc<Automaton<T>>,
    input: T,
) -> AutomatonStep<T> {
    let (middle, ab_next) = match ab.step(input) {
        Step::Terminated => return Step::terminated(),
        Step::Skipped { next } => {
            return Step::skipped(Automaton::Sequential(Arc::new(next), Arc::clone(bc)));
        }
        Step::Produced { value, next } => (value, next),
    };

    match bc.step(middle) {
        Step::Terminated => Step::terminated(),
        Step::Skipped { next } => {
            Step::skipped(Automaton::Sequential(Arc::new(ab_next), Arc::new(next)))
        }
        Step::Produced { value, next } => Step::produced(
            value,
            Automaton::Sequential(Arc::new(ab_next), Arc::new(next)),
        ),
    }
}

impl<T> Automaton<T> {
    /// Variant name, as used in logs and errors.
    pub fn name(&self) -> &str {
        match self {
            Automaton::Identity => "Identity",
            Automaton::Lift(_) => "Lift",
            Automaton::Always(_) => "Always",
            Automaton::Filter(_) => "Filter",
            Automaton::Slice(_) => "Slice",
            Automaton::Sequential(_, _) => "Sequential",
            Automaton::Custom(stepper) => stepper.name(),
        }
    }

    /// Structural description of this automaton.
    pub fn shape(&self) -> Shape {
        match self {
            Automaton::Identity => Shape::Identity,
            Automaton::Lift(_) => Shape::Lift,
            Automaton::Always(_) => Shape::Always,
            Automaton::Filter(_) => Shape::Filter,
            Automaton::Slice(window) => Shape::slice(window),
            Automaton::Sequential(ab, bc) => Shape::Sequential {
                first: Box::new(ab.shape()),
                second: Box::new(bc.shape()),
            },
            Automaton::Custom(stepper) => Shape::Custom {
                name: stepper.name().to_string(),
            },
        }
    }
}

impl<T: Clone> Clone for Automaton<T> {
    fn clone(&self) -> Self {
        match self {
            Automaton::Identity => Automaton::Identity,
            Automaton::Lift(f) => Automaton::Lift(f.clone()),
            Automaton::Always(value) => Automaton::Always(value.clone()),
            Automaton::Filter(p) => Automaton::Filter(p.clone()),
            Automaton::Slice(window) => Automaton::Slice(*window),
            Automaton::Sequential(ab, bc) => Automaton::Sequential(Arc::clone(ab), Arc::clone(bc)),
            Automaton::Custom(stepper) => Automaton::Custom(Arc::clone(stepper)),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Automaton<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Automaton::Identity => f.write_str("Identity"),
            Automaton::Lift(_) => f.write_str("Lift(..)"),
            Automaton::Always(value) => f.debug_tuple("Always").field(value).finish(),
            Automaton::Filter(_) => f.write_str("Filter(..)"),
            Automaton::Slice(window) => f
                .debug_struct("Slice")
                .field("min", &window.min())
                .field("max", &window.max())
                .field("index", &window.index())
                .finish(),
            Automaton::Sequential(ab, bc) => {
                f.debug_tuple("Sequential").field(ab).field(bc).finish()
            }
            Automaton::Custom(stepper) => write!(f, "Custom({})", stepper.name()),
        }
    }
}
