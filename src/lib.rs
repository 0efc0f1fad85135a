//! # exotic-functions
//!
//! Function pipelines built from overloaded operators.
//!
//! ## Overview
//!
//! Instead of nesting calls, a pipeline is written as one expression:
//! a plain function is wrapped with the `exotic` builder and then composed
//! (`/`), partially applied (`*`, `<<`, `>>`) and piped into combinators
//! (`|`) such as `apply` and `unpack`. Every step yields a new immutable
//! value; nothing is evaluated until the pipeline is applied.
//!
//! ## Feature Flags
//!
//! - `compose`: the exotic function module (enabled by default)
//! - `tracing`: emit `trace`-level events when functions are piped into
//!   modifiers and when `unpack` spreads a sequence
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use exotic_functions::prelude::*;
//!
//! fn split(text: &str) -> Vec<&str> { text.split_whitespace().collect() }
//! fn count(pieces: Vec<&str>) -> usize { pieces.len() }
//!
//! assert_eq!(exotic % count / split | apply << "one two three", 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the builder, the combinators and the [`Callable`] trait needed
/// to invoke exotic functions.
///
/// [`Callable`]: crate::compose::Callable
///
/// # Usage
///
/// ```rust
/// use exotic_functions::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(all(test, feature = "compose"))]
mod tests {
    use crate::compose::{Exotic, Identity};

    static_assertions::assert_impl_all!(Exotic<fn(i32) -> i32>: Clone, Copy, Send, Sync);
    static_assertions::assert_impl_all!(Identity: Clone, Copy, Send, Sync, Default);
    static_assertions::assert_not_impl_any!(Exotic<std::rc::Rc<fn()>>: Send, Sync);
}
