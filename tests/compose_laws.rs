#![cfg(feature = "compose")]
//! Property-based tests for the composition laws.
//!
//! This module verifies that the combinators satisfy the required laws:
//!
//! ## Composition Laws
//! - **Order**: `compose!(f, g, h).call(x) == f(g(h(x)))`
//! - **Grouping irrelevance**: nesting pipelines (via `into_fn`) in any
//!   grouping yields the same result as the flat pipeline
//! - **Left Identity**: `compose!(identity, f).call(x) == f(x)`
//! - **Right Identity**: `compose!(f, identity).call(x) == f(x)`
//! - **Single stage**: `compose!(f).call(x) == f(x)`
//!
//! ## Chain Laws
//! - **Mirror**: `chain!(f, g, h).call(x) == h(g(f(x)))`
//! - **Duality**: `chain!(f, g).call(x) == compose!(g, f).call(x)`
//!
//! Using proptest, we generate random inputs to verify these laws across a
//! wide range of values.

use fncomp::compose::{identity, InvokeExt};
use fncomp::{chain, compose};
use proptest::prelude::*;

// =============================================================================
// Composition Laws
// =============================================================================

proptest! {
    /// Order law: compose!(f, g, h).call(x) == f(g(h(x)))
    #[test]
    fn prop_compose_order(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);
        let function3 = |n: i32| n.wrapping_sub(3);

        let composed = compose!(function1, function2, function3);

        prop_assert_eq!(composed.call(x), function1(function2(function3(x))));
    }

    /// Left Identity Law: compose!(identity, f).call(x) == f(x)
    #[test]
    fn prop_compose_left_identity(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(2);

        let composed = compose!(identity, function);

        prop_assert_eq!(composed.call(x), function(x));
    }

    /// Right Identity Law: compose!(f, identity).call(x) == f(x)
    #[test]
    fn prop_compose_right_identity(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(2);

        let composed = compose!(function, identity);

        prop_assert_eq!(composed.call(x), function(x));
    }

    /// Single-stage law: compose!(f).call(x) == f(x)
    #[test]
    fn prop_compose_single_stage(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(3);

        let composed = compose!(function);

        prop_assert_eq!(composed.call(x), function(x));
    }

    /// Grouping irrelevance: compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)
    #[test]
    fn prop_compose_grouping_irrelevance(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);
        let function3 = |n: i32| n.wrapping_sub(3);

        // compose!(f, compose!(g, h))
        let inner_right = compose!(function2, function3).into_fn();
        let left_grouped = compose!(function1, inner_right);

        // compose!(compose!(f, g), h)
        let inner_left = compose!(function1, function2).into_fn();
        let right_grouped = compose!(inner_left, function3);

        let flat = compose!(function1, function2, function3);

        prop_assert_eq!(left_grouped.call(x), flat.call(x));
        prop_assert_eq!(right_grouped.call(x), flat.call(x));
    }

    /// Re-invocation purity: the same pipeline gives the same result twice
    #[test]
    fn prop_compose_reinvocation_pure(x in any::<i32>()) {
        let composed = compose!(|n: i32| n.wrapping_add(1), |n: i32| n.wrapping_mul(2));

        prop_assert_eq!(composed.call(x), composed.call(x));
    }
}

// =============================================================================
// Chain Laws
// =============================================================================

proptest! {
    /// Mirror law: chain!(f, g, h).call(x) == h(g(f(x)))
    #[test]
    fn prop_chain_mirror(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);
        let function3 = |n: i32| n.wrapping_sub(3);

        let chained = chain!(function1, function2, function3);

        prop_assert_eq!(chained.call(x), function3(function2(function1(x))));
    }

    /// Duality: chain!(f, g).call(x) == compose!(g, f).call(x)
    #[test]
    fn prop_chain_compose_duality(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let chained = chain!(function1, function2);
        let composed = compose!(function2, function1);

        prop_assert_eq!(chained.call(x), composed.call(x));
    }

    /// Chain with identity on either side leaves the stage unchanged
    #[test]
    fn prop_chain_identity(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(2);

        prop_assert_eq!(chain!(identity, function).call(x), function(x));
        prop_assert_eq!(chain!(function, identity).call(x), function(x));
    }
}

// =============================================================================
// Identity Function Laws
// =============================================================================

proptest! {
    /// Identity function returns input unchanged (i32)
    #[test]
    fn prop_identity_i32(x in any::<i32>()) {
        prop_assert_eq!(identity(x), x);
    }

    /// Identity function returns input unchanged (String)
    #[test]
    fn prop_identity_string(x in any::<String>()) {
        prop_assert_eq!(identity(x.clone()), x);
    }
}
