//! Modifiers: combinators that receive a wrapped callable through `|`.
//!
//! `func | modifier` hands `func` to `modifier` and yields the modifier's
//! result verbatim. Two kinds of value can act as modifiers:
//!
//! - any closure or function taking the wrapped callable, which receives it
//!   directly;
//! - an [`Exotic`] whose underlying function takes a trailing [`Func`]
//!   argument, such as [`apply`](super::apply) and [`unpack`](super::unpack).
//!   Arguments bound earlier with `*`, `<<` or `>>` come first and the piped
//!   callable arrives last, wrapped in `Func`.

use super::callable::Callable;
use super::function::Exotic;

/// A combinator that consumes a function and produces something from it.
///
/// # Examples
///
/// ```
/// use exotic_functions::compose::Modifier;
///
/// let call_twice = |func: fn(i32) -> i32| func(func(1));
/// let increment: fn(i32) -> i32 = |value| value + 1;
///
/// assert_eq!(call_twice.modify(increment), 3);
/// ```
pub trait Modifier<W> {
    /// The modifier's result.
    type Output;

    /// Consumes `func` and produces the modifier's result.
    fn modify(self, func: W) -> Self::Output;
}

impl<W, M, R> Modifier<W> for M
where
    M: FnOnce(W) -> R,
{
    type Output = R;

    #[inline]
    fn modify(self, func: W) -> R {
        self(func)
    }
}

/// The function handed to an [`Exotic`] modifier.
///
/// Marks the trailing argument that carries the piped callable, so an
/// underlying function can tell it apart from the positional arguments bound
/// before the pipe.
///
/// # Examples
///
/// ```
/// use exotic_functions::compose::{Callable, Exotic, Func, exotic};
///
/// // Calls the piped function with the bound argument, then adds one.
/// fn call_and_increment<W>(argument: i32, Func(func): Func<W>) -> i32
/// where
///     W: Callable<(i32,), Output = i32>,
/// {
///     func.invoke((argument,)) + 1
/// }
///
/// let triple = |value: i32| value * 3;
/// let modifier = exotic % call_and_increment::<Exotic<fn(i32) -> i32>> * 4;
///
/// assert_eq!((exotic % (triple as fn(i32) -> i32)) | modifier, 13);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Func<W>(pub W);

impl<W> Func<W> {
    /// Returns the wrapped function.
    #[inline]
    pub fn into_inner(self) -> W {
        self.0
    }
}

impl<W, F, P> Modifier<W> for Exotic<F, P>
where
    Self: Callable<(Func<W>,)>,
{
    type Output = <Self as Callable<(Func<W>,)>>::Output;

    #[inline]
    fn modify(self, func: W) -> Self::Output {
        self.invoke((Func(func),))
    }
}
