//! The `chain!` macro for left-leaning function composition.
//!
//! This module provides the [`chain!`] macro, which builds a pipeline
//! value that evaluates its stages from left to right, in data flow order.

/// Builds a pipeline that evaluates its stages from left to right.
///
/// `chain!(f, g, h).call(x)` is equivalent to `h(g(f(x)))`.
///
/// This is the "data flow" ordering: stages run in the order they are
/// written, which often matches the mental model of a value moving through
/// successive transformations. It is the mirror image of
/// [`compose!`](crate::compose!), which follows the right-to-left
/// mathematical convention; the two directions have distinct names on
/// purpose.
///
/// Like `compose!`, the macro evaluates nothing at construction and the
/// resulting pipeline may be invoked any number of times.
///
/// # Relationship with compose!
///
/// `chain!(f, g, h)` evaluates the same calls in the same order as
/// `compose!(h, g, f)`; only the declaration order differs.
///
/// # Syntax
///
/// - `chain!(f)` - Single-stage pipeline; behaves exactly like `f`
/// - `chain!(f, g)` - `.call(x)` gives `g(f(x))`
/// - `chain!(f, g, h)` - `.call(x)` gives `h(g(f(x)))`
/// - `chain!(f, g, h, ...)` - Any number of stages ≥ 1
///
/// # Type Requirements
///
/// The **first**-declared stage receives the invocation arguments (up to
/// eight, as a tuple through `invoke`) and may be any [`Fn`] of that arity.
/// Every subsequent stage must be a single-argument [`Fn`] accepting the
/// output of the stage declared to its left.
///
/// # Examples
///
/// ## Basic pipeline
///
/// ```
/// use fncomp::chain;
/// use fncomp::compose::InvokeExt;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// // chain!(f, g).call(x) = g(f(x)) = add_one(double(5)) = 11
/// let chained = chain!(double, add_one);
/// assert_eq!(chained.call(5), 11);
/// ```
///
/// ## Stages run in declaration order
///
/// ```
/// use fncomp::chain;
/// use fncomp::compose::InvokeExt;
///
/// fn square(x: i32) -> i32 { x * x }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// // 3 -> square(3)=9 -> double(9)=18 -> add_one(18)=19
/// let chained = chain!(square, double, add_one);
/// assert_eq!(chained.call(3), 19);
/// ```
///
/// ## Multi-argument first stage
///
/// ```
/// use fncomp::chain;
/// use fncomp::compose::Invoke;
///
/// let magnitude = chain!(f64::hypot, f64::abs);
/// assert_eq!(magnitude.invoke((3.0, -4.0)), 5.0);
/// ```
///
/// ## Equivalence with compose!
///
/// ```
/// use fncomp::{chain, compose};
/// use fncomp::compose::InvokeExt;
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
/// fn h(x: i32) -> i32 { x - 3 }
///
/// let chained = chain!(f, g, h);
/// let composed = compose!(h, g, f);
///
/// assert_eq!(chained.call(10), composed.call(10));
/// ```
#[macro_export]
macro_rules! chain {
    // Single stage: the terminal node alone
    ($stage:expr $(,)?) => {
        $crate::compose::Terminal::new($stage)
    };

    // Two or more stages: the first-declared stage is the terminal node;
    // fold the remaining stages around it, left to right
    ($first_stage:expr, $($remaining_stages:expr),+ $(,)?) => {
        $crate::__chain_fold!($crate::compose::Terminal::new($first_stage); $($remaining_stages),+)
    };
}

/// Accumulator for [`chain!`]: wraps each remaining stage, left to right,
/// around the pipeline built so far. Not public API.
#[doc(hidden)]
#[macro_export]
macro_rules! __chain_fold {
    ($pipeline:expr; $next_stage:expr) => {
        $crate::compose::Composed::new($next_stage, $pipeline)
    };

    ($pipeline:expr; $next_stage:expr, $($remaining_stages:expr),+) => {
        $crate::__chain_fold!($crate::compose::Composed::new($next_stage, $pipeline); $($remaining_stages),+)
    };
}

#[cfg(test)]
mod tests {
    use crate::compose;
    use crate::compose::{Invoke, InvokeExt};

    #[test]
    fn test_chain_single() {
        let double = |x: i32| x * 2;
        let chained = chain!(double);
        assert_eq!(chained.call(5), 10);
    }

    #[test]
    fn test_chain_two() {
        let double = |x: i32| x * 2;
        let add_one = |x: i32| x + 1;
        // double(5) = 10, add_one(10) = 11
        let chained = chain!(double, add_one);
        assert_eq!(chained.call(5), 11);
    }

    #[test]
    fn test_chain_three() {
        let square = |x: i32| x * x;
        let double = |x: i32| x * 2;
        let add_one = |x: i32| x + 1;
        // square(3) = 9, double(9) = 18, add_one(18) = 19
        let chained = chain!(square, double, add_one);
        assert_eq!(chained.call(3), 19);
    }

    #[test]
    fn test_chain_multi_argument_first_stage() {
        let chained = chain!(|a: i32, b: i32| a + b, |x: i32| x * 10);
        assert_eq!(chained.invoke((2, 3)), 50);
    }

    #[test]
    fn test_chain_mirrors_compose() {
        let f = |x: i32| x + 1;
        let g = |x: i32| x * 2;
        let h = |x: i32| x - 3;

        let chained = chain!(f, g, h);
        let composed = compose!(h, g, f);

        assert_eq!(chained.call(10), composed.call(10));
    }
}
