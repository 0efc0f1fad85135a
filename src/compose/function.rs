//! The wrapped callable and its operators.
//!
//! An [`Exotic`] pairs an underlying function with a post-transform that is
//! applied to the underlying function's result. Every combinator consumes
//! the receiver and returns a new `Exotic`; nothing is ever mutated in place.
//!
//! # Operators
//!
//! | Operator | Method | Meaning |
//! |----------|--------|---------|
//! | `f / g`  | [`Exotic::compose_with`] | apply `g` first, then `f` |
//! | `f * a`  | [`Exotic::partial_left`] | bind `a` as the first argument |
//! | `f << a` | [`Exotic::partial_left`] | same, with shift precedence |
//! | `f >> a` | [`Exotic::partial_right_wrapped`] | bind a [`Thunk`] yielding `a` |
//! | `f \| m` | [`Exotic::pipe_to`] | hand `f` to the modifier `m` |
//!
//! Rust gives `%`, `*` and `/` the same precedence with left associativity,
//! `<<` and `>>` a lower one, and `|` the lowest, so
//! `exotic % f / g * a | apply << x` reads as
//! `((exotic % f) / g * a) | (apply << x)`.

use std::ops::{BitOr, Div, Mul, Shl, Shr};

use super::callable::Callable;
use super::modifier::Modifier;
use super::partial::{Partial, Thunk};
use super::utils::Identity;

/// A callable wrapper supporting composition, partial application and piping.
///
/// Invoking an `Exotic` calls its underlying function with the given argument
/// tuple and passes the result through the post-transform.
///
/// `Exotic` is `Copy` whenever both parts are, which is the case for function
/// items and for closures that capture only `Copy` data; otherwise clone it to
/// reuse it in several pipelines.
///
/// # Examples
///
/// ```
/// use exotic_functions::compose::{Callable, exotic};
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
/// fn double(value: i32) -> i32 { value * 2 }
///
/// // double(add(3, 4))
/// let pipeline = exotic % double / add * 3;
/// assert_eq!(pipeline.invoke((4,)), 14);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Exotic<F, P = Identity> {
    function: F,
    composed: P,
}

impl<F> Exotic<F> {
    /// Wraps `function` with the identity post-transform.
    #[inline]
    pub const fn new(function: F) -> Self {
        Self {
            function,
            composed: Identity,
        }
    }
}

impl<F, P> Exotic<F, P> {
    /// Wraps `function` and applies `composed` to each of its results.
    #[inline]
    pub const fn with_post_transform(function: F, composed: P) -> Self {
        Self { function, composed }
    }

    /// Returns the underlying function.
    #[inline]
    pub const fn function(&self) -> &F {
        &self.function
    }

    /// Returns the post-transform applied to the underlying function's result.
    #[inline]
    pub const fn post_transform(&self) -> &P {
        &self.composed
    }

    /// Splits the wrapper into its underlying function and post-transform.
    #[inline]
    pub fn into_parts(self) -> (F, P) {
        (self.function, self.composed)
    }

    /// Composes `self` with `inner`: the result applies `inner` first and
    /// feeds its output to `self`.
    ///
    /// Each composition wraps one layer deeper; chains are never flattened.
    ///
    /// # Examples
    ///
    /// ```
    /// use exotic_functions::compose::{Callable, exotic};
    ///
    /// let add_one = |value: i32| value + 1;
    /// let square = |value: i32| value * value;
    ///
    /// let composed = (exotic % add_one).compose_with(square);
    /// assert_eq!(composed.invoke((3,)), 10);
    /// ```
    #[inline]
    pub fn compose_with<G>(self, inner: G) -> Exotic<G, Self> {
        Exotic::with_post_transform(inner, self)
    }

    /// Binds `argument` as the first positional argument of the underlying
    /// function. The post-transform is kept as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use exotic_functions::compose::{Callable, exotic};
    ///
    /// fn power(base: u32, exponent: u32) -> u32 { base.pow(exponent) }
    ///
    /// let power_of_two = (exotic % power).partial_left(2);
    /// assert_eq!(power_of_two.invoke((10,)), 1024);
    /// ```
    #[inline]
    pub fn partial_left<A>(self, argument: A) -> Exotic<Partial<F, A>, P> {
        Exotic::with_post_transform(Partial::new(self.function, argument), self.composed)
    }

    /// Binds a [`Thunk`] producing `argument` as the first positional argument.
    ///
    /// Used where the underlying function expects a producer rather than a
    /// value, as [`unpack`](super::unpack) does.
    ///
    /// # Examples
    ///
    /// ```
    /// use exotic_functions::compose::{Callable, Thunk, exotic};
    ///
    /// let twice = |producer: Thunk<i32>| producer.invoke(()) * 2;
    ///
    /// let pipeline = (exotic % twice).partial_right_wrapped(21);
    /// assert_eq!(pipeline.invoke(()), 42);
    /// ```
    #[inline]
    pub fn partial_right_wrapped<A>(self, argument: A) -> Exotic<Partial<F, Thunk<A>>, P> {
        self.partial_left(Thunk::new(argument))
    }

    /// Hands `self` to `modifier` as its `func` and returns whatever the
    /// modifier produces.
    ///
    /// A closure modifier receives `self` directly. An `Exotic` modifier such
    /// as [`apply`](super::apply) receives it as a trailing
    /// [`Func`](super::Func) argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use exotic_functions::compose::{Callable, Exotic, exotic};
    ///
    /// fn negate(value: i32) -> i32 { -value }
    ///
    /// let negation = exotic % (negate as fn(i32) -> i32);
    /// let description = negation.pipe_to(|func: Exotic<fn(i32) -> i32>| {
    ///     format!("negate(5) = {}", func.invoke((5,)))
    /// });
    /// assert_eq!(description, "negate(5) = -5");
    /// ```
    #[inline]
    pub fn pipe_to<M>(self, modifier: M) -> M::Output
    where
        M: Modifier<Self>,
    {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            target_function = std::any::type_name::<F>(),
            modifier = std::any::type_name::<M>(),
            "piping exotic function into modifier"
        );
        modifier.modify(self)
    }
}

impl<F, P, Args> Callable<Args> for Exotic<F, P>
where
    F: Callable<Args>,
    P: Callable<(F::Output,)>,
{
    type Output = P::Output;

    #[inline]
    fn invoke(&self, args: Args) -> Self::Output {
        self.composed.invoke((self.function.invoke(args),))
    }
}

impl<F, P, G> Div<G> for Exotic<F, P> {
    type Output = Exotic<G, Self>;

    #[inline]
    fn div(self, inner: G) -> Self::Output {
        self.compose_with(inner)
    }
}

impl<F, P, A> Mul<A> for Exotic<F, P> {
    type Output = Exotic<Partial<F, A>, P>;

    #[inline]
    fn mul(self, argument: A) -> Self::Output {
        self.partial_left(argument)
    }
}

impl<F, P, A> Shl<A> for Exotic<F, P> {
    type Output = Exotic<Partial<F, A>, P>;

    #[inline]
    fn shl(self, argument: A) -> Self::Output {
        self.partial_left(argument)
    }
}

impl<F, P, A> Shr<A> for Exotic<F, P> {
    type Output = Exotic<Partial<F, Thunk<A>>, P>;

    #[inline]
    fn shr(self, argument: A) -> Self::Output {
        self.partial_right_wrapped(argument)
    }
}

impl<F, P, M> BitOr<M> for Exotic<F, P>
where
    M: Modifier<Self>,
{
    type Output = M::Output;

    #[inline]
    fn bitor(self, modifier: M) -> Self::Output {
        self.pipe_to(modifier)
    }
}
