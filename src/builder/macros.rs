//! Macros for ergonomic pipeline construction.

/// Compose automatons left to right.
///
/// `pipeline![a, b, c]` feeds `a` into `b` into `c`, building the
/// right-leaning tree `compose(a, compose(b, c))`. A single argument is
/// returned unchanged.
///
/// # Example
///
/// ```
/// use stepper::{filter, lift, pipeline, take};
///
/// let evens = pipeline![
///     lift(|x: i32| x + 1),
///     filter(|x: &i32| x % 2 == 0),
///     take(2),
/// ];
///
/// let outputs: Vec<i32> = evens.run(0..).collect();
/// assert_eq!(outputs, vec![2, 4]);
/// ```
#[macro_export]
macro_rules! pipeline {
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::builder::compose($first, $crate::pipeline!($($rest),+))
    };
}
