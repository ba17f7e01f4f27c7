//! The [`Composed`] pipeline node.
//!
//! A pipeline with more than one stage is a chain of `Composed` nodes
//! terminating in a [`Terminal`](super::Terminal): each node wraps one
//! later-executing stage around an already-built inner pipeline. The
//! [`Invoke`] implementation below is the inductive case of the chain's
//! evaluation; the base case lives on `Terminal`.

use super::Invoke;

/// One later-executing stage wrapped around an inner pipeline.
///
/// `Composed { outer, inner }` evaluates as `outer(inner.invoke(args))`:
/// the inner pipeline runs first on the caller's arguments, and `outer`
/// consumes its single result. Nesting `Composed` nodes therefore unrolls,
/// at compile time, into a fixed sequence of direct calls with no
/// indirection, no branching, and no possibility of a stage being skipped
/// or repeated.
///
/// Values of this type are normally built by the
/// [`compose!`](crate::compose!) and [`chain!`](crate::chain!) macros;
/// `compose!(f, g, h)` produces a
/// `Composed<F, Composed<G, Terminal<H>>>`.
///
/// Both stages are owned by value. `Composed` is `Clone`, `Copy`, `Send`,
/// and `Sync` exactly when its stages are.
///
/// # Examples
///
/// ```
/// use fncomp::compose::{Composed, InvokeExt, Terminal};
///
/// // Equivalent to compose!(|x| x + 1, |x| x * 2):
/// let composed = Composed::new(|x: i32| x + 1, Terminal::new(|x: i32| x * 2));
/// assert_eq!(composed.call(5), 11);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Composed<Outer, Inner> {
    outer: Outer,
    inner: Inner,
}

impl<Outer, Inner> Composed<Outer, Inner> {
    /// Wraps `outer` around the already-built pipeline `inner`.
    ///
    /// Both are taken by value and evaluated lazily: construction runs no
    /// stage, and the caller's original bindings are moved (or copied) in.
    #[inline]
    pub const fn new(outer: Outer, inner: Inner) -> Self {
        Self { outer, inner }
    }
}

impl<Outer, Inner, Args, Out> Invoke<Args> for Composed<Outer, Inner>
where
    Inner: Invoke<Args>,
    Outer: Fn(Inner::Output) -> Out,
{
    type Output = Out;

    #[inline]
    fn invoke(&self, arguments: Args) -> Out {
        (self.outer)(self.inner.invoke(arguments))
    }
}
