//! Helper functions (combinators) for function composition.
//!
//! This module provides fundamental combinators that are commonly used
//! as pipeline stages:
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`constant`]: Creates a function that always returns the same value (K combinator)
//! - [`flip`]: Swaps the arguments of a binary function (C combinator)
//! - [`project_first`] / [`project_second`]: Return one of two arguments unchanged
//! - [`select_first`] / [`select_second`]: Extract one element of a pair
//!
//! All of them are plain generic functions, so they can be named directly
//! wherever a stage is expected.

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// - `compose!(identity, f)` is equivalent to `f`
/// - `compose!(f, identity)` is equivalent to `f`
///
/// In combinatory logic, this is known as the I combinator.
///
/// # Examples
///
/// ```
/// use fncomp::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
///
/// # Use with function composition
///
/// ```
/// use fncomp::compose;
/// use fncomp::compose::{identity, InvokeExt};
///
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let composed = compose!(identity, double);
/// assert_eq!(composed.call(5), double(5));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// Also known as the K combinator in combinatory logic.
/// Useful when you need a stage that always produces the same result
/// regardless of its input.
///
/// # Type Parameters
///
/// * `T` - The type of the constant value (must implement [`Clone`])
/// * `U` - The input type of the returned function (ignored)
///
/// # Examples
///
/// ```
/// use fncomp::compose::constant;
///
/// let always_five = constant::<_, i32>(5);
/// assert_eq!(always_five(100), 5);
///
/// let always_five_from_str = constant::<_, &str>(5);
/// assert_eq!(always_five_from_str("ignored"), 5);
/// ```
///
/// # Use with iterators
///
/// ```
/// use fncomp::compose::constant;
///
/// // Replace all elements with zeros
/// let values: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(values, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// Given a function `f(a, b)`, returns a new function `g(b, a)` such that
/// `g(b, a) = f(a, b)`.
///
/// Also known as the C combinator (flip) in combinatory logic. Handy for
/// reordering the arguments fed to a multi-argument first stage.
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f)) == f`
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
///
/// # Examples
///
/// ```
/// use fncomp::compose::flip;
///
/// fn divide(numerator: f64, denominator: f64) -> f64 {
///     numerator / denominator
/// }
///
/// let flipped_divide = flip(divide);
///
/// assert_eq!(divide(10.0, 2.0), 5.0);
/// assert!((flipped_divide(10.0, 2.0) - 0.2).abs() < f64::EPSILON);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Returns the first of two arguments unchanged, discarding the second.
///
/// # Examples
///
/// ```
/// use fncomp::compose::project_first;
///
/// assert_eq!(project_first(-1, 42.3), -1);
/// ```
///
/// # As a multi-argument first stage
///
/// ```
/// use fncomp::compose;
/// use fncomp::compose::{project_first, Invoke};
///
/// let composed = compose!(|x: i32| -x, project_first::<i32, &str>);
/// assert_eq!(composed.invoke((7, "ignored")), -7);
/// ```
#[inline]
pub fn project_first<A, B>(first: A, _second: B) -> A {
    first
}

/// Returns the second of two arguments unchanged, discarding the first.
///
/// # Examples
///
/// ```
/// use fncomp::compose::project_second;
///
/// assert_eq!(project_second(-1, 42.3), 42.3);
/// ```
#[inline]
pub fn project_second<A, B>(_first: A, second: B) -> B {
    second
}

/// Extracts the first element of a pair.
///
/// The classic `select1st` function object, reworked for Rust tuples.
/// Valuable wherever pairs flow through a pipeline, most typically key
/// extraction from map entries.
///
/// # Examples
///
/// ```
/// use fncomp::compose::select_first;
///
/// let pair = (-1, 42.3);
/// assert_eq!(select_first(pair), -1);
/// ```
///
/// # Use with iterators
///
/// ```
/// use fncomp::compose::select_first;
/// use std::collections::BTreeMap;
///
/// let mut movies = BTreeMap::new();
/// movies.insert(1972, "The Godfather");
/// movies.insert(1994, "Pulp Fiction");
///
/// let years: Vec<i32> = movies.into_iter().map(select_first).collect();
/// assert_eq!(years, vec![1972, 1994]);
/// ```
#[inline]
pub fn select_first<A, B>(pair: (A, B)) -> A {
    pair.0
}

/// Extracts the second element of a pair.
///
/// The counterpart to [`select_first`].
///
/// # Examples
///
/// ```
/// use fncomp::compose::select_second;
///
/// let pair = (-1, 42.3);
/// assert_eq!(select_second(pair), 42.3);
/// ```
///
/// # As a pipeline stage
///
/// ```
/// use fncomp::compose;
/// use fncomp::compose::{select_second, InvokeExt};
///
/// let negate_second = compose!(|x: i32| -x, select_second);
/// assert_eq!(negate_second.call((5, 10)), -10);
/// ```
#[inline]
pub fn select_second<A, B>(pair: (A, B)) -> B {
    pair.1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_with_unit() {
        assert_eq!(identity(()), ());
    }

    #[test]
    fn test_constant_with_reference() {
        let always_hello = constant("hello");
        assert_eq!(always_hello(42), "hello");
    }

    #[test]
    fn test_flip_with_asymmetric_function() {
        fn power(base: i32, exponent: u32) -> i32 {
            base.pow(exponent)
        }

        let flipped_power = flip(power);
        assert_eq!(power(2, 3), 8);
        // flipped_power(3, 2) = power(2, 3) = 8
        assert_eq!(flipped_power(3, 2), 8);
    }

    #[test]
    fn test_projections_discard_the_other_argument() {
        assert_eq!(project_first("kept", 99), "kept");
        assert_eq!(project_second(99, "kept"), "kept");
    }

    #[test]
    fn test_selections_move_the_element_out() {
        let pair = (String::from("key"), String::from("value"));
        assert_eq!(select_first(pair), "key");

        let pair = (String::from("key"), String::from("value"));
        assert_eq!(select_second(pair), "value");
    }
}
