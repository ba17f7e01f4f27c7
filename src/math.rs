//! Generic math function objects.
//!
//! The standard float operations live as inherent methods on `f32` and
//! `f64`, which makes them awkward to name as values: `f64::sin` works but
//! pins the type, and method syntax cannot be passed to a combinator at
//! all. This module wraps each operation as a plain free function, generic
//! over [`Real`], so it can be handed directly to iterator adapters or used
//! as a pipeline stage.
//!
//! # Examples
//!
//! ```
//! use fncomp::math;
//!
//! let values = [-1.1_f64, -2.2, -3.3];
//! let magnitudes: Vec<f64> = values.iter().copied().map(math::abs).collect();
//! assert_eq!(magnitudes, vec![1.1, 2.2, 3.3]);
//! ```
//!
//! As pipeline stages:
//!
//! ```
//! use fncomp::{compose, math};
//! use fncomp::compose::Invoke;
//!
//! let magnitude = compose!(math::abs, math::hypot);
//! assert_eq!(magnitude.invoke((3.0_f64, -4.0_f64)), 5.0);
//! ```

// Emits the Real trait, its f32/f64 implementations, and the free-function
// wrappers from one operation list, so the three stay in sync.
macro_rules! real_api {
    (
        @impls [],
        unary: [$($unary:ident),+],
        binary: [$($binary:ident),+],
        predicates: [$($predicate:ident),+]
    ) => {};
    (
        @impls [$ty:ty $(, $rest:ty)*],
        unary: [$($unary:ident),+],
        binary: [$($binary:ident),+],
        predicates: [$($predicate:ident),+]
    ) => {
        impl Real for $ty {
            $(
                #[inline]
                fn $unary(self) -> Self {
                    <$ty>::$unary(self)
                }
            )+

            $(
                #[inline]
                fn $binary(self, other: Self) -> Self {
                    <$ty>::$binary(self, other)
                }
            )+

            #[inline]
            fn mul_add(self, multiplier: Self, addend: Self) -> Self {
                <$ty>::mul_add(self, multiplier, addend)
            }

            $(
                #[inline]
                fn $predicate(self) -> bool {
                    <$ty>::$predicate(self)
                }
            )+
        }

        real_api! {
            @impls [$($rest),*],
            unary: [$($unary),+],
            binary: [$($binary),+],
            predicates: [$($predicate),+]
        }
    };
    (
        unary: [$($unary:ident),+ $(,)?],
        binary: [$($binary:ident as $binary_fn:ident),+ $(,)?],
        predicates: [$($predicate:ident),+ $(,)?],
        implementors: [$($ty:ty),+ $(,)?]
    ) => {
        /// A floating-point scalar.
        ///
        /// Abstracts over `f32` and `f64` so the free functions in this
        /// module (and any code built on them) work with either width.
        /// Every method forwards to the like-named inherent method; no
        /// behavior is added or changed.
        ///
        /// The trait is sealed in practice: it is only meaningful for the
        /// primitive float types, and no other implementations are
        /// supported.
        pub trait Real: Copy + PartialOrd {
            $(
                #[doc = concat!(
                    "Forwards to [`f64::", stringify!($unary),
                    "`] / [`f32::", stringify!($unary), "`]."
                )]
                fn $unary(self) -> Self;
            )+

            $(
                #[doc = concat!(
                    "Forwards to [`f64::", stringify!($binary),
                    "`] / [`f32::", stringify!($binary), "`]."
                )]
                fn $binary(self, other: Self) -> Self;
            )+

            /// Forwards to [`f64::mul_add`] / [`f32::mul_add`].
            fn mul_add(self, multiplier: Self, addend: Self) -> Self;

            $(
                #[doc = concat!(
                    "Forwards to [`f64::", stringify!($predicate),
                    "`] / [`f32::", stringify!($predicate), "`]."
                )]
                fn $predicate(self) -> bool;
            )+
        }

        real_api! {
            @impls [$($ty),+],
            unary: [$($unary),+],
            binary: [$($binary),+],
            predicates: [$($predicate),+]
        }

        $(
            #[doc = concat!(
                "Unary function object for [`f64::", stringify!($unary),
                "`] / [`f32::", stringify!($unary), "`]."
            )]
            #[inline]
            pub fn $unary<T: Real>(value: T) -> T {
                T::$unary(value)
            }
        )+

        $(
            #[doc = concat!(
                "Binary function object for [`f64::", stringify!($binary),
                "`] / [`f32::", stringify!($binary), "`]."
            )]
            #[inline]
            pub fn $binary_fn<T: Real>(first: T, second: T) -> T {
                T::$binary(first, second)
            }
        )+

        $(
            #[doc = concat!(
                "Predicate function object for [`f64::", stringify!($predicate),
                "`] / [`f32::", stringify!($predicate), "`]."
            )]
            #[inline]
            pub fn $predicate<T: Real>(value: T) -> bool {
                T::$predicate(value)
            }
        )+
    };
}

real_api! {
    unary: [
        abs, signum, floor, ceil, round, trunc, fract,
        sqrt, cbrt, recip,
        exp, exp2, exp_m1, ln, ln_1p, log2, log10,
        sin, cos, tan, asin, acos, atan,
        sinh, cosh, tanh, asinh, acosh, atanh,
        to_degrees, to_radians,
    ],
    binary: [
        atan2 as atan2,
        hypot as hypot,
        powf as pow,
        log as log,
        copysign as copysign,
        max as max,
        min as min,
    ],
    predicates: [
        is_nan, is_finite, is_infinite, is_normal,
        is_sign_positive, is_sign_negative,
    ],
    implementors: [f32, f64]
}

/// Ternary function object for [`f64::mul_add`] / [`f32::mul_add`].
///
/// Computes `value * multiplier + addend` with a single rounding.
#[inline]
pub fn mul_add<T: Real>(value: T, multiplier: T, addend: T) -> T {
    T::mul_add(value, multiplier, addend)
}

#[cfg(test)]
mod tests {
    use paste::paste;

    // One test per unary wrapper: the free function must agree exactly
    // with the inherent method it forwards to.
    macro_rules! test_unary_matches_inherent {
        ($($name:ident at $input:expr),+ $(,)?) => {
            paste! {
                $(
                    #[test]
                    fn [<test_ $name _matches_inherent>]() {
                        let input: f64 = $input;
                        assert_eq!(super::$name(input), input.$name());

                        let input: f32 = $input;
                        assert_eq!(super::$name(input), input.$name());
                    }
                )+
            }
        };
    }

    test_unary_matches_inherent!(
        abs at -1.5,
        signum at -1.5,
        floor at 1.5,
        ceil at 1.5,
        round at 1.5,
        trunc at 1.5,
        fract at 1.5,
        sqrt at 2.0,
        cbrt at 8.0,
        recip at 4.0,
        exp at 0.5,
        exp2 at 0.5,
        exp_m1 at 0.5,
        ln at 2.0,
        ln_1p at 0.5,
        log2 at 8.0,
        log10 at 100.0,
        sin at 0.5,
        cos at 0.5,
        tan at 0.5,
        asin at 0.5,
        acos at 0.5,
        atan at 0.5,
        sinh at 0.5,
        cosh at 0.5,
        tanh at 0.5,
        asinh at 0.5,
        acosh at 1.5,
        atanh at 0.5,
        to_degrees at 1.0,
        to_radians at 90.0,
    );

    #[test]
    fn test_binary_wrappers_match_inherent() {
        assert_eq!(super::atan2(1.0_f64, 2.0), 1.0_f64.atan2(2.0));
        assert_eq!(super::hypot(3.0_f64, 4.0), 5.0);
        assert_eq!(super::pow(2.0_f64, 10.0), 2.0_f64.powf(10.0));
        assert_eq!(super::log(8.0_f64, 2.0), 8.0_f64.log(2.0));
        assert_eq!(super::copysign(3.0_f64, -1.0), -3.0);
        assert_eq!(super::max(1.0_f64, 2.0), 2.0);
        assert_eq!(super::min(1.0_f64, 2.0), 1.0);
    }

    #[test]
    fn test_mul_add_single_rounding() {
        assert_eq!(super::mul_add(2.0_f64, 3.0, 4.0), 10.0);
        assert_eq!(super::mul_add(2.0_f32, 3.0, 4.0), 10.0);
    }

    #[test]
    fn test_predicates() {
        assert!(super::is_nan(f64::NAN));
        assert!(super::is_finite(1.0_f64));
        assert!(super::is_infinite(f64::INFINITY));
        assert!(super::is_normal(1.0_f64));
        assert!(super::is_sign_positive(1.0_f64));
        assert!(super::is_sign_negative(-1.0_f64));
    }

    #[test]
    fn test_wrappers_work_for_both_widths() {
        assert_eq!(super::abs(-2.5_f32), 2.5_f32);
        assert_eq!(super::abs(-2.5_f64), 2.5_f64);
    }
}
