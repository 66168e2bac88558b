//! Positional windows used by `Slice` automatons.
//!
//! A window admits the transitions whose zero-based counter lies in
//! `[min, max)`. The counter advances on every transition whether or not
//! the input is admitted, so the decision never depends on input values.

use crate::builder::ConstructionError;
use serde::Serialize;

/// Upper bound standing in for "no limit".
pub const UNBOUNDED: usize = usize::MAX;

/// Where a window's counter currently sits relative to its bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    /// Counter is below `min`: consume and skip
    Before,
    /// Counter is inside `[min, max)`: pass the input through
    Inside,
    /// Counter reached `max`: terminate
    Closed,
}

/// Bounds and counter of a positional window.
///
/// Windows are immutable. [`Window::advance`] returns a new window with the
/// counter incremented; the receiver is left untouched.
///
/// Windows serialize for diagnostics but never deserialize: the only way
/// to build one is through the constructors, which check the bounds.
///
/// # Example
///
/// ```rust
/// use stepper::core::{Position, Window};
///
/// let window = Window::new(1, 3).unwrap();
/// assert_eq!(window.position(), Position::Before);
///
/// let window = window.advance();
/// assert_eq!(window.position(), Position::Inside);
/// assert_eq!(window.advance().advance().position(), Position::Closed);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Window {
    min: usize,
    max: usize,
    index: usize,
}

impl Window {
    /// Create a fresh window over `[min, max)`.
    ///
    /// Fails fast when `min > max`.
    pub fn new(min: usize, max: usize) -> Result<Self, ConstructionError> {
        if min > max {
            return Err(ConstructionError::InvertedWindow { min, max });
        }
        Ok(Window { min, max, index: 0 })
    }

    /// Window that skips the first `min` transitions and never closes.
    pub fn from_index(min: usize) -> Self {
        Window {
            min,
            max: UNBOUNDED,
            index: 0,
        }
    }

    /// Window that passes the first `max` transitions, then closes.
    pub fn until(max: usize) -> Self {
        Window { min: 0, max, index: 0 }
    }

    /// First admitted counter value.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Counter value at which the window closes; [`UNBOUNDED`] if never.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Number of transitions seen so far.
    pub fn index(&self) -> usize {
        self.index
    }

    /// True when the window eventually closes.
    pub fn is_bounded(&self) -> bool {
        self.max != UNBOUNDED
    }

    /// True when no transition has happened yet.
    pub fn is_fresh(&self) -> bool {
        self.index == 0
    }

    /// Classify the current counter. `Closed` takes precedence over `Before`.
    pub fn position(&self) -> Position {
        if self.index >= self.max {
            Position::Closed
        } else if self.index < self.min {
            Position::Before
        } else {
            Position::Inside
        }
    }

    /// The window after one more transition.
    pub fn advance(&self) -> Self {
        Window {
            index: self.index.saturating_add(1),
            ..*self
        }
    }

    /// Collapse `self` followed by `inner` into one fresh window.
    ///
    /// `inner` counts only the transitions `self` admits, so its offsets are
    /// measured from `self.min`. The result may have `min > max` when the
    /// inner window starts past the outer one's end; such a window skips
    /// until it closes, which is exactly what the pair does.
    pub fn fuse(&self, inner: &Window) -> Window {
        Window {
            min: self.min.saturating_add(inner.min),
            max: self.max.min(self.min.saturating_add(inner.max)),
            index: 0,
        }
    }
}
