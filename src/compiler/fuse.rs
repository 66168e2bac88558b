//! Algebraic rewriting of composed automatons.
//!
//! `compile` walks a tree bottom-up and hands each pair of normalized
//! children to `rewrite`, which tries the rules below in order:
//!
//! 1. `Identity ; bc` becomes `bc`
//! 2. `ab ; Identity` becomes `ab`
//! 3. `Lift ; Always(c)` becomes `Always(c)`
//! 4. `Lift(f) ; Lift(g)` becomes `Lift(g . f)`
//! 5. `Lift ; Slice` becomes `Slice ; Lift`
//! 6. `Slice ; Slice` (both fresh) becomes one `Slice`
//! 7. `ab ; (b1 ; b2)` fuses `ab` with `b1`, then the result with `b2`
//! 8. `(a1 ; a2) ; bc` fuses `a2` with `bc`, then `a1` with the result,
//!    or rotates to `a1 ; (a2 ; bc)` when nothing fused
//! 9. anything else stays `ab ; bc`
//!
//! Rules 7 and 8 only recurse after a rule reported that it fired, which
//! keeps the mutual recursion between them finite.

use super::config::CompilerConfig;
use super::error::CompileError;
use crate::core::Automaton;
use log::{debug, log_enabled, trace, Level};
use std::sync::Arc;

type Node<T> = Arc<Automaton<T>>;

/// Outcome of one rewrite attempt.
enum Fusion<T> {
    /// A rule fired and the node differs from the plain pair
    Rewritten(Node<T>),

    /// No rule fired; the node is the plain pair `ab ; bc`
    Unchanged(Node<T>),
}

impl<T> Fusion<T> {
    fn into_node(self) -> Node<T> {
        match self {
            Fusion::Rewritten(node) | Fusion::Unchanged(node) => node,
        }
    }
}

/// Rewrites automaton trees into equivalent, cheaper ones.
///
/// The result produces the same sequence of step outcomes as the input
/// for every input sequence, provided lifted functions are pure. Trees
/// are right-associated so that a skip or termination early in a chain
/// never visits the later stages.
///
/// # Example
///
/// ```rust
/// use stepper::core::Shape;
/// use stepper::{compose, lift, Compiler, CompilerConfig};
///
/// let compiler = Compiler::new(CompilerConfig::default());
/// let chain = compose(lift(|x: i32| x + 1), lift(|x: i32| x * 2));
///
/// let compiled = compiler.normalize(&chain).unwrap();
/// assert_eq!(compiled.shape(), Shape::Lift);
/// assert_eq!(compiled.step(3).into_value(), Some(8));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Compiler {
    config: CompilerConfig,
}

impl Compiler {
    pub fn new(config: CompilerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Normalize an automaton tree.
    ///
    /// Leaves come back unchanged. Fails with
    /// [`CompileError::UnsupportedVariant`] if the tree contains a
    /// `Custom` automaton anywhere.
    pub fn normalize<T>(&self, automaton: &Automaton<T>) -> Result<Automaton<T>, CompileError>
    where
        T: Clone + 'static,
    {
        let compiled = self.compile(Arc::new(automaton.clone()))?;

        if log_enabled!(Level::Debug) {
            debug!(
                "normalized {} sequential nodes into {} (side-effect safe: {})",
                automaton.shape().sequential_count(),
                compiled.shape().sequential_count(),
                self.config.tolerates_side_effects()
            );
        }

        Ok(Arc::unwrap_or_clone(compiled))
    }

    /// Normalize both automatons, then fuse `ab` followed by `bc`.
    pub fn fuse<T>(
        &self,
        ab: &Automaton<T>,
        bc: &Automaton<T>,
    ) -> Result<Automaton<T>, CompileError>
    where
        T: Clone + 'static,
    {
        let ab = self.compile(Arc::new(ab.clone()))?;
        let bc = self.compile(Arc::new(bc.clone()))?;
        Ok(Arc::unwrap_or_clone(self.rewrite(ab, bc).into_node()))
    }

    fn compile<T>(&self, node: Node<T>) -> Result<Node<T>, CompileError>
    where
        T: Clone + 'static,
    {
        match node.as_ref() {
            Automaton::Sequential(ab, bc) => {
                let ab = self.compile(Arc::clone(ab))?;
                let bc = self.compile(Arc::clone(bc))?;
                Ok(self.rewrite(ab, bc).into_node())
            }
            Automaton::Custom(stepper) => Err(CompileError::UnsupportedVariant {
                name: stepper.name().to_string(),
            }),
            _ => Ok(Arc::clone(&node)),
        }
    }

    /// Fuse two already normalized automatons.
    fn rewrite<T>(&self, ab: Node<T>, bc: Node<T>) -> Fusion<T>
    where
        T: Clone + 'static,
    {
        let config = &self.config;

        match (ab.as_ref(), bc.as_ref()) {
            (Automaton::Identity, _) => {
                trace!("dropped identity before {}", bc.name());
                Fusion::Rewritten(Arc::clone(&bc))
            }
            (_, Automaton::Identity) => {
                trace!("dropped identity after {}", ab.name());
                Fusion::Rewritten(Arc::clone(&ab))
            }
            (Automaton::Lift(_), Automaton::Always(_)) if config.annihilate => {
                trace!("dropped lift feeding a constant");
                Fusion::Rewritten(Arc::clone(&bc))
            }
            (Automaton::Lift(f), Automaton::Lift(g)) if config.fuse_lifts => {
                trace!("fused adjacent lifts");
                Fusion::Rewritten(Arc::new(Automaton::Lift(f.then(g))))
            }
            (Automaton::Lift(_), Automaton::Slice(_)) if config.commute => {
                trace!("moved slice ahead of lift");
                Fusion::Rewritten(Arc::new(Automaton::Sequential(
                    Arc::clone(&bc),
                    Arc::clone(&ab),
                )))
            }
            (Automaton::Slice(outer), Automaton::Slice(inner))
                if config.fuse_slices && outer.is_fresh() && inner.is_fresh() =>
            {
                let fused = outer.fuse(inner);
                trace!("fused slices into [{}, {})", fused.min(), fused.max());
                Fusion::Rewritten(Arc::new(Automaton::Slice(fused)))
            }
            (_, Automaton::Sequential(b1, b2)) if config.reassociate => {
                self.rewrite_right(&ab, &bc, b1, b2)
            }
            (Automaton::Sequential(a1, a2), _) if config.reassociate => {
                self.rewrite_left(a1, a2, &bc)
            }
            _ => Fusion::Unchanged(Arc::new(Automaton::Sequential(
                Arc::clone(&ab),
                Arc::clone(&bc),
            ))),
        }
    }

    /// `ab ; (b1 ; b2)`
    fn rewrite_right<T>(
        &self,
        ab: &Node<T>,
        bc: &Node<T>,
        b1: &Node<T>,
        b2: &Node<T>,
    ) -> Fusion<T>
    where
        T: Clone + 'static,
    {
        match self.rewrite(Arc::clone(ab), Arc::clone(b1)) {
            Fusion::Rewritten(head) => {
                trace!("fused {} into the head of a composition", ab.name());
                Fusion::Rewritten(self.rewrite(head, Arc::clone(b2)).into_node())
            }
            Fusion::Unchanged(_) => Fusion::Unchanged(Arc::new(Automaton::Sequential(
                Arc::clone(ab),
                Arc::clone(bc),
            ))),
        }
    }

    /// `(a1 ; a2) ; bc`
    fn rewrite_left<T>(&self, a1: &Node<T>, a2: &Node<T>, bc: &Node<T>) -> Fusion<T>
    where
        T: Clone + 'static,
    {
        match self.rewrite(Arc::clone(a2), Arc::clone(bc)) {
            Fusion::Rewritten(tail) => {
                Fusion::Rewritten(self.rewrite(Arc::clone(a1), tail).into_node())
            }
            Fusion::Unchanged(tail) => {
                trace!("rotated composition to the right");
                Fusion::Rewritten(Arc::new(Automaton::Sequential(Arc::clone(a1), tail)))
            }
        }
    }
}
