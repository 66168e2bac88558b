//! Stepper: composable incremental automatons with a fusing compiler
//!
//! An automaton consumes one input at a time and answers with one of three
//! outcomes: it terminated, it skipped the input, or it produced a value.
//! Every answer carries the automaton to use next, so automatons are plain
//! immutable values that never buffer a whole sequence.
//!
//! # Core Concepts
//!
//! - **Automaton**: closed set of primitives (identity, lift, constant,
//!   filter, positional slice) plus sequential composition
//! - **Compiler**: rewrites a composed tree into an equivalent one with
//!   fewer dispatches per input
//! - **Drivers**: lazy iteration and folding over input sequences
//!
//! Functions passed to [`lift`] and [`filter`] must be pure. The compiler
//! drops and reorders their calls.
//!
//! # Example
//!
//! ```rust
//! use stepper::{compose, filter, lift, normalize, take};
//!
//! let pipeline = compose(
//!     compose(lift(|x: i64| x * x), lift(|x: i64| x + 1)),
//!     compose(filter(|x: &i64| x % 2 == 0), take(3)),
//! );
//!
//! let compiled = normalize(&pipeline).unwrap();
//! assert!(compiled.shape().is_right_associated());
//!
//! let outputs: Vec<i64> = compiled.run(1..).collect();
//! assert_eq!(outputs, vec![2, 10, 26]);
//! ```

pub mod builder;
pub mod compiler;
pub mod core;
pub mod drive;

// Re-export commonly used types
pub use crate::builder::{
    always, compose, dimap, filter, identity, lift, map_input, map_output, skip, slice, take,
    ConstructionError,
};
pub use crate::compiler::{fuse, normalize, CompileError, Compiler, CompilerConfig, ConfigError};
pub use crate::core::{Automaton, Shape, Step, Stepper, Window};
pub use crate::drive::{fold, run, trace, Outputs};
