//! Structural descriptions of automaton trees.
//!
//! A [`Shape`] drops closures and constants and keeps only the tree layout
//! and window bounds, which makes it comparable and serializable.

use super::window::{Window, UNBOUNDED};
use serde::{Deserialize, Serialize};

/// Serializable outline of an automaton.
///
/// # Example
///
/// ```rust
/// use stepper::core::Shape;
/// use stepper::{compose, lift, take};
///
/// let pipeline = compose(lift(|x: i32| x + 1), take(3));
/// let shape = pipeline.shape();
///
/// assert_eq!(shape.sequential_count(), 1);
/// assert!(shape.to_json().unwrap().contains("\"kind\":\"sequential\""));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Identity,
    Lift,
    Always,
    Filter,
    Slice {
        min: usize,
        /// `None` when the window never closes
        max: Option<usize>,
        index: usize,
    },
    Sequential {
        first: Box<Shape>,
        second: Box<Shape>,
    },
    Custom {
        name: String,
    },
}

impl Shape {
    pub(crate) fn slice(window: &Window) -> Self {
        Shape::Slice {
            min: window.min(),
            max: (window.max() != UNBOUNDED).then_some(window.max()),
            index: window.index(),
        }
    }

    /// Number of `Sequential` nodes in the tree.
    pub fn sequential_count(&self) -> usize {
        match self {
            Shape::Sequential { first, second } => {
                1 + first.sequential_count() + second.sequential_count()
            }
            _ => 0,
        }
    }

    /// Number of non-`Sequential` nodes in the tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Shape::Sequential { first, second } => first.leaf_count() + second.leaf_count(),
            _ => 1,
        }
    }

    /// Longest chain of nested `Sequential` nodes. A leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Shape::Sequential { first, second } => 1 + first.depth().max(second.depth()),
            _ => 0,
        }
    }

    /// True when no `Sequential` node has a `Sequential` first child.
    pub fn is_right_associated(&self) -> bool {
        match self {
            Shape::Sequential { first, second } => {
                !matches!(**first, Shape::Sequential { .. }) && second.is_right_associated()
            }
            _ => true,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
