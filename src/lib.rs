//! # fncomp
//!
//! Compile-time function composition combinators and generic function
//! objects for Rust.
//!
//! ## Overview
//!
//! This library provides a small set of building blocks for point-free,
//! pipeline-style programming where every call is resolved statically:
//!
//! - **Composition combinators**: the [`compose!`] and [`chain!`] macros
//!   build a [`Composed`](compose::Composed) pipeline value from an ordered
//!   list of callables, with argument and return types resolved entirely at
//!   compile time through the [`Invoke`](compose::Invoke) trait.
//! - **Helper combinators**: [`identity`](compose::identity),
//!   [`constant`](compose::constant), [`flip`](compose::flip), plus
//!   projection and tuple-selection functions.
//! - **Math function objects**: free-function wrappers over the standard
//!   float operations, generic over [`Real`](math::Real), so `abs`, `sin`,
//!   `hypot` and friends are directly nameable as pipeline stages.
//! - **Delimited output**: [`DelimitedWriter`](output::DelimitedWriter), a
//!   generic delimiter-inserting adapter over any [`std::io::Write`] sink.
//!
//! There is no dynamic dispatch, no boxing, and no runtime state: a built
//! pipeline is a plain value that owns its stages and reduces to a fixed
//! sequence of direct calls when invoked.
//!
//! ## Feature Flags
//!
//! - `compose`: Composition combinators and helper functions
//! - `math`: Math function objects over `f32`/`f64`
//! - `output`: Delimiter-inserting stream adapter
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fncomp::compose::{Invoke, InvokeExt};
//! use fncomp::{compose, math};
//!
//! fn exclaim(s: String) -> String {
//!     format!("{s}!")
//! }
//!
//! // compose! is right-leaning: the last-declared stage executes first.
//! let pipeline = compose!(exclaim, |n: i32| n.to_string(), |n: i32| -n);
//! assert_eq!(pipeline.call(7), "-7!");
//!
//! // The first-executing stage may take several arguments.
//! let magnitude = compose!(math::abs, math::hypot);
//! assert_eq!(magnitude.invoke((3.0_f64, -4.0_f64)), 5.0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits, and functions.
///
/// # Usage
///
/// ```rust
/// use fncomp::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "math")]
    pub use crate::math;

    #[cfg(feature = "output")]
    pub use crate::output::*;
}

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "math")]
pub mod math;

#[cfg(feature = "output")]
pub mod output;
