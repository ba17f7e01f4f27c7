//! Function composition combinators.
//!
//! This module provides the machinery for building pipeline values from an
//! ordered list of callables, with every stage-to-stage interface resolved
//! at compile time.
//!
//! # Overview
//!
//! The module provides the following pieces:
//!
//! - [`compose!`]: Build a pipeline that evaluates right-to-left
//!   (mathematical composition)
//! - [`chain!`]: Build a pipeline that evaluates left-to-right
//!   (data flow order)
//! - [`Invoke`]: The trait through which a built pipeline is evaluated
//! - [`InvokeExt`]: Single-argument conveniences ([`call`](InvokeExt::call)
//!   and [`into_fn`](InvokeExt::into_fn))
//! - [`Terminal`] and [`Composed`]: The nodes of the pipeline value itself
//!
//! # Helper Functions
//!
//! - [`identity`]: The identity function - returns its argument unchanged
//! - [`constant`]: Creates a function that always returns the same value
//! - [`flip`]: Swaps the arguments of a binary function
//! - [`project_first`] / [`project_second`]: Return one of two arguments,
//!   discarding the other
//! - [`select_first`] / [`select_second`]: Extract one element of a pair
//!
//! # The pipeline value
//!
//! `compose!(f, g, h)` does not call anything. It builds a value of type
//! `Composed<F, Composed<G, Terminal<H>>>` that owns the three stages and
//! can be invoked any number of times:
//!
//! ```
//! use fncomp::compose;
//! use fncomp::compose::InvokeExt;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // compose!(f, g).call(x) = f(g(x))
//! let composed = compose!(add_one, double);
//! assert_eq!(composed.call(5), 11); // add_one(double(5)) = add_one(10) = 11
//! assert_eq!(composed.call(6), 13); // reusable; invocation does not consume it
//! ```
//!
//! The stage that executes first (the last-declared one for [`compose!`],
//! the first-declared one for [`chain!`]) may take any number of arguments;
//! they are supplied as a tuple through [`Invoke::invoke`]. Every other
//! stage takes exactly one argument: the previous stage's result.
//!
//! ```
//! use fncomp::compose;
//! use fncomp::compose::Invoke;
//!
//! let magnitude = compose!(f64::abs, f64::hypot);
//! assert_eq!(magnitude.invoke((3.0, -4.0)), 5.0);
//! ```
//!
//! # Evaluation order
//!
//! [`compose!`] follows the mathematical convention, reading right-to-left:
//!
//! ```text
//! compose!(f, g, h).call(x) = f(g(h(x)))
//! ```
//!
//! [`chain!`] reads left-to-right, matching the mental model of data
//! flowing through transformations:
//!
//! ```text
//! chain!(f, g, h).call(x) = h(g(f(x)))
//! ```
//!
//! The two directions are deliberately given distinct names; direction is
//! never expressed by overloading a single name.
//!
//! # Laws
//!
//! - **Order**: `compose!(f, g, h).call(x) == f(g(h(x)))` and
//!   `chain!(f, g, h).call(x) == h(g(f(x)))`
//! - **Duality**: `chain!(f, g).call(x) == compose!(g, f).call(x)`
//! - **Single-stage identity**: `compose!(f).call(x) == f(x)`
//! - **Left Identity**: `compose!(identity, f).call(x) == f(x)`
//! - **Right Identity**: `compose!(f, identity).call(x) == f(x)`
//! - **Associativity of grouping** (via [`InvokeExt::into_fn`]):
//!   `compose!(f, compose!(g, h).into_fn()).call(x) ==
//!    compose!(compose!(f, g).into_fn(), h).call(x)`
//!
//! # Failure semantics
//!
//! A stage whose input type does not match the previous stage's output type
//! is a compile error at the invocation site (no [`Invoke`] implementation
//! exists), never a runtime error. A stage that panics during evaluation
//! propagates unchanged; the combinator neither catches nor wraps anything.

mod chain_macro;
mod compose_macro;
mod composed;
mod invoke;
mod utils;

pub use composed::Composed;
pub use invoke::{Invoke, InvokeExt, Terminal};

// Re-export helper functions
pub use utils::{
    constant, flip, identity, project_first, project_second, select_first, select_second,
};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::chain;
pub use crate::compose;
