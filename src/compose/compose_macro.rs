//! The `compose!` macro for right-leaning function composition.
//!
//! This module provides the [`compose!`] macro, which builds a pipeline
//! value that evaluates its stages from right to left, following the
//! mathematical notation for function composition.

/// Builds a pipeline that evaluates its stages from right to left.
///
/// `compose!(f, g, h).call(x)` is equivalent to `f(g(h(x)))`.
///
/// This follows the mathematical convention where composition reads
/// right-to-left: the rightmost (last-declared) stage is applied first. For
/// the left-to-right reading, use [`chain!`](crate::chain!).
///
/// The macro evaluates nothing: it moves the stage expressions into a
/// [`Composed`](crate::compose::Composed) /
/// [`Terminal`](crate::compose::Terminal) chain, and the resulting value is
/// evaluated through [`Invoke`](crate::compose::Invoke) (or the
/// single-argument [`call`](crate::compose::InvokeExt::call)) as many times
/// as desired.
///
/// # Syntax
///
/// - `compose!(f)` - Single-stage pipeline; behaves exactly like `f`
/// - `compose!(f, g)` - `.call(x)` gives `f(g(x))`
/// - `compose!(f, g, h)` - `.call(x)` gives `f(g(h(x)))`
/// - `compose!(f, g, h, ...)` - Any number of stages ≥ 1
///
/// Zero stages is a compile error: no rule matches `compose!()`.
///
/// # Type Requirements
///
/// The last-declared stage receives the invocation arguments (up to eight,
/// as a tuple through `invoke`) and may be any [`Fn`] of that arity. Every
/// other stage must be a single-argument [`Fn`] accepting the output of the
/// stage declared to its right. A mismatch anywhere in the chain means no
/// `Invoke` implementation exists for the pipeline, and the invocation site
/// fails to compile:
///
/// ```compile_fail
/// use fncomp::compose;
/// use fncomp::compose::InvokeExt;
///
/// // usize flows out of the inner stage, but the outer stage wants String.
/// let broken = compose!(|s: String| s.len(), |x: i32| x as usize);
/// broken.call(7);
/// ```
///
/// # Examples
///
/// ## Basic composition
///
/// ```
/// use fncomp::compose;
/// use fncomp::compose::InvokeExt;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// // compose!(f, g).call(x) = f(g(x)) = add_one(double(5)) = 11
/// let composed = compose!(add_one, double);
/// assert_eq!(composed.call(5), 11);
/// ```
///
/// ## Three-stage composition
///
/// ```
/// use fncomp::compose;
/// use fncomp::compose::InvokeExt;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn square(x: i32) -> i32 { x * x }
///
/// // compose!(f, g, h).call(x) = f(g(h(x)))
/// // = add_one(double(square(3))) = add_one(18) = 19
/// let composed = compose!(add_one, double, square);
/// assert_eq!(composed.call(3), 19);
/// ```
///
/// ## Multi-argument first stage
///
/// ```
/// use fncomp::compose;
/// use fncomp::compose::Invoke;
///
/// let magnitude = compose!(f64::abs, f64::hypot);
/// assert_eq!(magnitude.invoke((3.0, -4.0)), 5.0);
/// ```
///
/// ## Types flowing through the chain
///
/// ```
/// use fncomp::compose;
/// use fncomp::compose::InvokeExt;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// let composed = compose!(get_length, to_string);
/// assert_eq!(composed.call(12345), 5);
/// ```
///
/// ## With closures capturing environment
///
/// ```
/// use fncomp::compose;
/// use fncomp::compose::InvokeExt;
///
/// let multiplier = 3;
/// let multiply = move |x: i32| x * multiplier;
/// let add_ten = |x: i32| x + 10;
///
/// let composed = compose!(add_ten, multiply);
/// assert_eq!(composed.call(5), 25); // add_ten(multiply(5)) = 25
/// ```
#[macro_export]
macro_rules! compose {
    // Single stage: the terminal node alone
    ($stage:expr $(,)?) => {
        $crate::compose::Terminal::new($stage)
    };

    // Two or more stages: peel the outermost (last-executing) stage off the
    // front and recurse on the rest
    ($outer_stage:expr, $($remaining_stages:expr),+ $(,)?) => {
        $crate::compose::Composed::new($outer_stage, $crate::compose!($($remaining_stages),+))
    };
}
