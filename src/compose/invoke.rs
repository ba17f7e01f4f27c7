//! The [`Invoke`] trait and the [`Terminal`] pipeline node.
//!
//! [`Invoke`] is the calling convention of a built pipeline: arguments go
//! in as a tuple, one value comes out. [`Terminal`] wraps the stage that
//! executes first and is the base case of the recursive pipeline structure;
//! it is the only stage allowed to take more than one argument.

/// The calling convention of a pipeline value.
///
/// `Args` is a tuple holding the arguments destined for the stage that
/// executes first; [`Output`](Invoke::Output) is the type produced by the
/// stage that executes last. The implementation is selected per `Args`
/// instantiation, so the whole call chain is resolved before any
/// invocation runs.
///
/// Invocation takes `&self`: evaluating a pipeline never consumes or
/// mutates it, so the same value can be invoked any number of times, each
/// invocation fully independent of the others.
///
/// # The tuple convention
///
/// The first-executing stage may take up to eight arguments; they are
/// passed as a tuple, `(a0,)` for one argument, `(a0, a1)` for two, and so
/// on. For the common single-argument case, [`InvokeExt::call`] unwraps
/// the tuple.
///
/// # Examples
///
/// ```
/// use fncomp::compose;
/// use fncomp::compose::Invoke;
///
/// let magnitude = compose!(f64::abs, f64::hypot);
/// assert_eq!(magnitude.invoke((3.0, -4.0)), 5.0);
/// ```
///
/// # Type mismatches
///
/// A pipeline whose stage interfaces do not line up simply has no `Invoke`
/// implementation for the offending argument types, so the mismatch is a
/// compile error at the invocation site:
///
/// ```compile_fail
/// use fncomp::compose;
/// use fncomp::compose::InvokeExt;
///
/// // `str::len` produces usize, but the outer stage wants a String.
/// let broken = compose!(|s: String| s.len(), |s: &str| s.len());
/// broken.call("hello");
/// ```
pub trait Invoke<Args> {
    /// The type produced by the last-executing stage.
    type Output;

    /// Evaluates the pipeline on `arguments`, threading each stage's result
    /// into the next stage, and returns the final stage's result.
    fn invoke(&self, arguments: Args) -> Self::Output;
}

/// The first-executing stage of a pipeline.
///
/// `Terminal` is the base case of the pipeline structure: it holds the
/// stage that receives the caller's arguments directly. It implements
/// [`Invoke`] for argument tuples of one through eight elements, whenever
/// the wrapped callable implements the matching [`Fn`] signature.
///
/// Values of this type are normally built by the [`compose!`](crate::compose!)
/// and [`chain!`](crate::chain!) macros rather than by hand; a single-stage
/// composition is just a `Terminal`.
///
/// The stage is owned by value. `Terminal` is `Clone`, `Copy`, `Send`, and
/// `Sync` exactly when the stage is.
///
/// # Examples
///
/// ```
/// use fncomp::compose::{InvokeExt, Terminal};
///
/// let double = Terminal::new(|x: i32| x * 2);
/// assert_eq!(double.call(21), 42);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Terminal<F> {
    stage: F,
}

impl<F> Terminal<F> {
    /// Wraps `stage` as the first-executing end of a pipeline.
    ///
    /// Takes the stage by value; the caller's binding is moved (or copied)
    /// in, so later changes to the caller's original cannot affect the
    /// pipeline. Construction evaluates nothing.
    #[inline]
    pub const fn new(stage: F) -> Self {
        Self { stage }
    }
}

// One Invoke implementation per terminal arity. Mechanical expansion, the
// same way the curry macro family handles arities by enumeration.
macro_rules! impl_terminal_invoke {
    ($($argument_type:ident => $argument:ident),+) => {
        impl<F, Out, $($argument_type),+> Invoke<($($argument_type,)+)> for Terminal<F>
        where
            F: Fn($($argument_type),+) -> Out,
        {
            type Output = Out;

            #[inline]
            fn invoke(&self, ($($argument,)+): ($($argument_type,)+)) -> Out {
                (self.stage)($($argument),+)
            }
        }
    };
}

impl_terminal_invoke!(A0 => argument0);
impl_terminal_invoke!(A0 => argument0, A1 => argument1);
impl_terminal_invoke!(A0 => argument0, A1 => argument1, A2 => argument2);
impl_terminal_invoke!(A0 => argument0, A1 => argument1, A2 => argument2, A3 => argument3);
impl_terminal_invoke!(
    A0 => argument0, A1 => argument1, A2 => argument2, A3 => argument3,
    A4 => argument4
);
impl_terminal_invoke!(
    A0 => argument0, A1 => argument1, A2 => argument2, A3 => argument3,
    A4 => argument4, A5 => argument5
);
impl_terminal_invoke!(
    A0 => argument0, A1 => argument1, A2 => argument2, A3 => argument3,
    A4 => argument4, A5 => argument5, A6 => argument6
);
impl_terminal_invoke!(
    A0 => argument0, A1 => argument1, A2 => argument2, A3 => argument3,
    A4 => argument4, A5 => argument5, A6 => argument6, A7 => argument7
);

/// Single-argument conveniences for pipeline values.
///
/// Implemented for every [`Invoke`] whose argument tuple has exactly one
/// element, which is by far the common case.
///
/// # Examples
///
/// ```
/// use fncomp::compose;
/// use fncomp::compose::InvokeExt;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let composed = compose!(add_one, double);
/// assert_eq!(composed.call(5), 11);
/// ```
pub trait InvokeExt<A>: Invoke<(A,)> {
    /// Invokes the pipeline with a single argument, without tuple wrapping.
    ///
    /// `pipeline.call(x)` is exactly `pipeline.invoke((x,))`.
    #[inline]
    fn call(&self, argument: A) -> Self::Output {
        self.invoke((argument,))
    }

    /// Repackages the pipeline as an ordinary closure.
    ///
    /// The resulting closure owns the pipeline and forwards each call to
    /// [`invoke`](Invoke::invoke). This is how a built pipeline becomes a
    /// stage of a larger one:
    ///
    /// ```
    /// use fncomp::compose;
    /// use fncomp::compose::InvokeExt;
    ///
    /// fn add_one(x: i32) -> i32 { x + 1 }
    /// fn double(x: i32) -> i32 { x * 2 }
    /// fn square(x: i32) -> i32 { x * x }
    ///
    /// let inner = compose!(add_one, double).into_fn();
    /// let composed = compose!(inner, square);
    /// // add_one(double(square(3))) = add_one(18) = 19
    /// assert_eq!(composed.call(3), 19);
    /// ```
    #[inline]
    fn into_fn(self) -> impl Fn(A) -> Self::Output
    where
        Self: Sized,
    {
        move |argument| self.invoke((argument,))
    }
}

impl<T, A> InvokeExt<A> for T where T: Invoke<(A,)> {}
