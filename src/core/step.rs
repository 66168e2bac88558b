//! The outcome of a single automaton transition.
//!
//! Every call to `step` returns exactly one of three shapes: the automaton
//! is finished, it consumed the input silently, or it produced a value.

/// Result of stepping an automaton on one input.
///
/// `B` is the produced value and `S` the successor automaton. Once
/// `Terminated` is returned the caller must stop stepping; there is no
/// successor to step.
///
/// # Example
///
/// ```rust
/// use stepper::core::Step;
///
/// let step: Step<i32, &str> = Step::produced(7, "next");
/// assert!(step.is_produced());
/// assert_eq!(step.value(), Some(&7));
/// assert_eq!(step.into_next(), Some("next"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step<B, S> {
    /// No further values will ever be produced.
    Terminated,

    /// The input was consumed without producing a value
    Skipped { next: S },

    /// One value was produced
    Produced { value: B, next: S },
}

impl<B, S> Step<B, S> {
    /// The automaton is finished.
    pub fn terminated() -> Self {
        Step::Terminated
    }

    /// The input was consumed; continue with `next`.
    pub fn skipped(next: S) -> Self {
        Step::Skipped { next }
    }

    /// `value` was produced; continue with `next`.
    pub fn produced(value: B, next: S) -> Self {
        Step::Produced { value, next }
    }

    /// Check whether this is [`Step::Terminated`].
    pub fn is_terminated(&self) -> bool {
        matches!(self, Step::Terminated)
    }

    /// Check whether this is [`Step::Skipped`].
    pub fn is_skipped(&self) -> bool {
        matches!(self, Step::Skipped { .. })
    }

    /// Check whether this is [`Step::Produced`].
    pub fn is_produced(&self) -> bool {
        matches!(self, Step::Produced { .. })
    }

    /// Borrow the produced value, if any.
    pub fn value(&self) -> Option<&B> {
        match self {
            Step::Produced { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Take the produced value, discarding the successor.
    pub fn into_value(self) -> Option<B> {
        match self {
            Step::Produced { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Borrow the successor, if the automaton is still alive.
    pub fn next(&self) -> Option<&S> {
        match self {
            Step::Terminated => None,
            Step::Skipped { next } | Step::Produced { next, .. } => Some(next),
        }
    }

    /// Take the successor, discarding any value.
    ///
    /// Returns `None` once the automaton has terminated.
    pub fn into_next(self) -> Option<S> {
        match self {
            Step::Terminated => None,
            Step::Skipped { next } | Step::Produced { next, .. } => Some(next),
        }
    }

    /// Transform the successor while keeping the outcome and value.
    pub fn map_next<S2, F>(self, f: F) -> Step<B, S2>
    where
        F: FnOnce(S) -> S2,
    {
        match self {
            Step::Terminated => Step::Terminated,
            Step::Skipped { next } => Step::Skipped { next: f(next) },
            Step::Produced { value, next } => Step::Produced {
                value,
                next: f(next),
            },
        }
    }

    /// Drop the successor, leaving a comparable record of what happened.
    pub fn without_next(self) -> Step<B, ()> {
        self.map_next(|_| ())
    }
}
