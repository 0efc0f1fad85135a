//! Exotic functions: composition and partial application through operators.
//!
//! This module lets a pipeline of function calls be written as an expression
//! over overloaded operators instead of nested calls. A plain function is
//! turned into an [`Exotic`] function with the [`exotic`] builder, and new
//! exotic functions are derived from it by composing, binding arguments and
//! piping into modifiers.
//!
//! # Overview
//!
//! - [`Exotic`]: the wrapped callable (an underlying function plus a
//!   post-transform applied to its result)
//! - [`exotic`] / [`build`]: the builder
//! - [`unpack`]: spreads a produced sequence into the piped function
//! - [`apply`]: calls the piped function with the arguments bound to `apply`
//! - [`apply_with`], [`apply_first`]: application as plain functions
//! - [`identity`]: the identity function
//!
//! # Operators
//!
//! | Expression | Meaning |
//! |------------|---------|
//! | `exotic % f` | wrap `f` |
//! | `f / g` | compose: apply `g`, then `f` |
//! | `f * a` | bind `a` as the first argument |
//! | `f << a` | bind `a`, with lower precedence than `*` |
//! | `f >> a` | bind a thunk yielding `a` |
//! | `f \| m` | pipe `f` into the modifier `m` |
//!
//! Arguments travel as tuples: an exotic function is invoked with
//! [`Callable::invoke`], e.g. `pipeline.invoke((x, y))`.
//!
//! # Examples
//!
//! ## Partial application and `apply`
//!
//! ```
//! use exotic_functions::compose::{apply, exotic};
//!
//! fn greet(name: &str) -> String { format!("Hello, {name}") }
//!
//! assert_eq!(exotic % greet * "world" | apply, "Hello, world");
//! ```
//!
//! ## Composition
//!
//! ```
//! use exotic_functions::compose::{apply, exotic};
//!
//! fn parse_all(pieces: Vec<&str>) -> Result<Vec<i32>, std::num::ParseIntError> {
//!     pieces.into_iter().map(str::parse).collect()
//! }
//! fn split(text: &str) -> Vec<&str> { text.split_whitespace().collect() }
//!
//! let numbers = exotic % parse_all / split / str::trim | apply << " 1  2  3   4  ";
//! assert_eq!(numbers, Ok(vec![1, 2, 3, 4]));
//! ```
//!
//! ## Unpacking a sequence into arguments
//!
//! ```
//! use exotic_functions::compose::{apply, exotic, unpack};
//!
//! fn label(prefix: &str, first: i32, second: i32) -> String {
//!     format!("{prefix} {first} {second}")
//! }
//!
//! let produce = exotic % (|text: &str| [text.len() as i32, 2]) * "abc";
//! let line = exotic % label * "output:" | unpack << produce | apply;
//! assert_eq!(line, "output: 3 2");
//! ```
//!
//! # Laws
//!
//! - **Composition**: `(exotic % f / g).invoke((x,)) == f(g(x))`
//! - **Associativity in effect**: `exotic % f / g / h` applied to `x` is
//!   `f(g(h(x)))`
//! - **Partial application**: `(exotic % f * a).invoke(()) == f(a)`
//! - **Pipe**: `w | m == m(w)` for a closure modifier `m`

mod builder;
mod callable;
mod combinators;
mod function;
mod modifier;
mod partial;
mod utils;

pub use builder::{Builder, build, exotic};
pub use callable::{Callable, IntoArgs, SplitFirst};
pub use combinators::{ApplyFn, Spread, UnpackFn, apply, apply_first, apply_with, unpack};
pub use function::Exotic;
pub use modifier::{Func, Modifier};
pub use partial::{Partial, Thunk};
pub use utils::{Identity, identity};
