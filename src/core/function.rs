//! Shared function values carried by `Lift` and `Filter` automatons.
//!
//! Both wrappers hold their closure behind an `Arc`, so cloning an
//! automaton never clones the closure itself.

use std::fmt;
use std::sync::Arc;

/// A pure value transform.
///
/// Purity is a precondition on the caller, not something the type can
/// check: the compiler reorders and removes applications of these
/// functions, so a closure with side effects may observe fewer or
/// differently ordered calls after normalization.
///
/// # Example
///
/// ```rust
/// use stepper::core::Pure;
///
/// let double = Pure::new(|x: i32| x * 2);
/// let inc = Pure::new(|x: i32| x + 1);
///
/// assert_eq!(double.then(&inc).apply(5), 11);
/// ```
pub struct Pure<T> {
    f: Arc<dyn Fn(T) -> T + Send + Sync>,
}

impl<T> Pure<T> {
    /// Wrap a pure function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        Pure { f: Arc::new(f) }
    }

    /// Call the wrapped function.
    pub fn apply(&self, input: T) -> T {
        (self.f)(input)
    }

    /// Compose `self` followed by `next` into a single call.
    pub fn then(&self, next: &Pure<T>) -> Pure<T>
    where
        T: 'static,
    {
        let first = Arc::clone(&self.f);
        let second = Arc::clone(&next.f);
        Pure {
            f: Arc::new(move |input| second(first(input))),
        }
    }
}

impl<T> Clone for Pure<T> {
    fn clone(&self) -> Self {
        Pure {
            f: Arc::clone(&self.f),
        }
    }
}

impl<T> fmt::Debug for Pure<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Pure(..)")
    }
}

/// A pure predicate deciding whether an input passes a filter.
///
/// # Example
///
/// ```rust
/// use stepper::core::Predicate;
///
/// let even = Predicate::new(|x: &i32| x % 2 == 0);
///
/// assert!(even.check(&4));
/// assert!(!even.check(&3));
/// ```
pub struct Predicate<T> {
    p: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Predicate<T> {
    pub fn new<F>(p: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Predicate { p: Arc::new(p) }
    }

    /// Evaluate the predicate on a borrowed input.
    pub fn check(&self, input: &T) -> bool {
        (self.p)(input)
    }
}

impl<T> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Predicate {
            p: Arc::clone(&self.p),
        }
    }
}

impl<T> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}
