//! The `unpack` and `apply` combinators.
//!
//! Both are [`Exotic`] values meant to sit on the right of `|`:
//!
//! - [`unpack`] calls a producer bound to it, spreads the produced sequence
//!   and returns the piped function with those elements bound.
//! - [`apply`] calls the piped function with the arguments bound to it.
//!
//! [`apply_with`] and [`apply_first`] are the plain-function forms of
//! application: the first takes the function explicitly, the second uses
//! the first element of the argument tuple as the function.
//!
//! # Examples
//!
//! ```
//! use exotic_functions::compose::{apply, exotic, unpack};
//!
//! fn sum(first: i32, second: i32, third: i32) -> i32 { first + second + third }
//!
//! assert_eq!(exotic % sum | unpack >> [1, 2, 3] | apply, 6);
//! assert_eq!(exotic % sum * 1 * 2 | apply << 3, 6);
//! ```

use super::callable::{Callable, IntoArgs, SplitFirst};
use super::function::Exotic;
use super::modifier::Func;

/// A function with a tuple of leading arguments bound.
///
/// Produced by [`unpack`]. Invoking it with `(c, d, ...)` calls
/// `function(arguments..., c, d, ...)` with a clone of the stored arguments,
/// so the elements become the leading positional arguments and the function
/// still accepts the rest. At most six arguments in total are supported.
///
/// # Examples
///
/// ```
/// use exotic_functions::compose::{Callable, Spread};
///
/// let area = Spread::new(|width: u32, height: u32| width * height, (3, 4));
/// assert_eq!(area.invoke(()), 12);
///
/// let volume = Spread::new(|width: u32, height: u32, depth: u32| width * height * depth, (3, 4));
/// assert_eq!(volume.invoke((5,)), 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spread<F, Args> {
    function: F,
    arguments: Args,
}

impl<F, Args> Spread<F, Args> {
    /// Stores `function` together with its leading arguments.
    #[inline]
    pub const fn new(function: F, arguments: Args) -> Self {
        Self {
            function,
            arguments,
        }
    }

    /// Returns the stored arguments.
    #[inline]
    pub const fn arguments(&self) -> &Args {
        &self.arguments
    }
}

macro_rules! impl_callable_for_spread {
    (@impl ($($bound_type:ident $bound:ident),*); ($($rest_type:ident $rest:ident),*)) => {
        impl<Function, $($bound_type,)* $($rest_type),*> Callable<($($rest_type,)*)>
            for Spread<Function, ($($bound_type,)*)>
        where
            Function: Callable<($($bound_type,)* $($rest_type,)*)>,
            $($bound_type: Clone,)*
        {
            type Output = Function::Output;

            #[inline]
            fn invoke(&self, ($($rest,)*): ($($rest_type,)*)) -> Self::Output {
                let ($($bound,)*) = &self.arguments;
                self.function.invoke(($($bound.clone(),)* $($rest,)*))
            }
        }
    };
    ($bound:tt; $($rest:tt),*) => {
        $(impl_callable_for_spread!(@impl $bound; $rest);)*
    };
}

impl_callable_for_spread!(
    ();
    (), (G g), (G g, H h), (G g, H h, I i), (G g, H h, I i, J j),
    (G g, H h, I i, J j, K k), (G g, H h, I i, J j, K k, L l)
);
impl_callable_for_spread!(
    (A a);
    (), (G g), (G g, H h), (G g, H h, I i), (G g, H h, I i, J j), (G g, H h, I i, J j, K k)
);
impl_callable_for_spread!(
    (A a, B b);
    (), (G g), (G g, H h), (G g, H h, I i), (G g, H h, I i, J j)
);
impl_callable_for_spread!((A a, B b, C c); (), (G g), (G g, H h), (G g, H h, I i));
impl_callable_for_spread!((A a, B b, C c, D d); (), (G g), (G g, H h));
impl_callable_for_spread!((A a, B b, C c, D d, E e); (), (G g));
impl_callable_for_spread!((A a, B b, C c, D d, E e, F f); ());

/// Underlying function of [`unpack`].
///
/// Takes a zero-argument producer and the piped function, calls the
/// producer once and binds its spread result to the function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct UnpackFn;

impl<Producer, Target> Callable<(Producer, Func<Target>)> for UnpackFn
where
    Producer: Callable<()>,
    Producer::Output: IntoArgs,
{
    type Output = Exotic<Spread<Target, <Producer::Output as IntoArgs>::Args>>;

    fn invoke(&self, (producer, Func(target)): (Producer, Func<Target>)) -> Self::Output {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            producer = std::any::type_name::<Producer>(),
            target_function = std::any::type_name::<Target>(),
            "unpacking producer result into function arguments"
        );
        Exotic::new(Spread::new(target, producer.invoke(()).into_args()))
    }
}

/// Spreads the sequence made by a producer into the piped function.
///
/// Bind the producer first, then pipe the function in:
/// `func | unpack >> sequence` wraps `sequence` in a [`Thunk`](super::Thunk),
/// `func | unpack << producer` uses an existing producer such as a fully
/// bound [`Exotic`]. The producer runs once, when the pipe is evaluated; the
/// result is an [`Exotic`] with the elements bound as leading arguments, so
/// invoking it with `(rest...)` calls `func(elements..., rest...)`.
///
/// # Examples
///
/// ```
/// use exotic_functions::compose::{Callable, exotic, unpack};
///
/// fn describe(name: &str, age: u32) -> String { format!("{name} is {age}") }
///
/// let bound = exotic % describe | unpack >> ("Ada", 36_u32);
/// assert_eq!(bound.invoke(()), "Ada is 36");
///
/// let named = exotic % describe | unpack >> ["Ada"];
/// assert_eq!(named.invoke((36,)), "Ada is 36");
/// ```
#[allow(non_upper_case_globals)]
pub const unpack: Exotic<UnpackFn> = Exotic::new(UnpackFn);

/// Underlying function of [`apply`].
///
/// Calls the piped function with every positional argument that precedes
/// it. Up to five bound arguments are supported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ApplyFn;

macro_rules! impl_callable_for_apply {
    ($($argument_type:ident $argument:ident),*) => {
        impl<Target, $($argument_type),*> Callable<($($argument_type,)* Func<Target>,)> for ApplyFn
        where
            Target: Callable<($($argument_type,)*)>,
        {
            type Output = Target::Output;

            #[inline]
            fn invoke(
                &self,
                ($($argument,)* Func(target),): ($($argument_type,)* Func<Target>,),
            ) -> Self::Output {
                target.invoke(($($argument,)*))
            }
        }
    };
}

impl_callable_for_apply!();
impl_callable_for_apply!(A a);
impl_callable_for_apply!(A a, B b);
impl_callable_for_apply!(A a, B b, C c);
impl_callable_for_apply!(A a, B b, C c, D d);
impl_callable_for_apply!(A a, B b, C c, D d, E e);

/// Calls the piped function with the arguments bound to `apply`.
///
/// `func | apply` calls `func()`, `func | apply << x` calls `func(x)` and
/// `func | apply * x * y` calls `func(x, y)`. Only positional arguments are
/// spread.
///
/// # Examples
///
/// ```
/// use exotic_functions::compose::{apply, exotic};
///
/// fn greet(greeting: &str, name: &str) -> String { format!("{greeting}, {name}!") }
///
/// assert_eq!(exotic % greet * "Hello" * "world" | apply, "Hello, world!");
/// assert_eq!(exotic % greet * "Hello" | apply << "Rust", "Hello, Rust!");
/// ```
#[allow(non_upper_case_globals)]
pub const apply: Exotic<ApplyFn> = Exotic::new(ApplyFn);

/// Calls `func` with `args` spread as positional arguments.
///
/// # Examples
///
/// ```
/// use exotic_functions::compose::apply_with;
///
/// let sum = |first: i32, second: i32, third: i32| first + second + third;
/// assert_eq!(apply_with(sum, (1, 2, 3)), 6);
/// ```
#[inline]
pub fn apply_with<F, Args>(func: F, args: Args) -> F::Output
where
    F: Callable<Args>,
{
    func.invoke(args)
}

/// Calls the first element of `args` with the remaining elements.
///
/// # Examples
///
/// ```
/// use exotic_functions::compose::apply_first;
///
/// let sum = |first: i32, second: i32, third: i32| first + second + third;
/// assert_eq!(apply_first((sum, 1, 2, 3)), 6);
/// ```
#[inline]
pub fn apply_first<Args>(args: Args) -> <Args::First as Callable<Args::Rest>>::Output
where
    Args: SplitFirst,
    Args::First: Callable<Args::Rest>,
{
    let (func, rest) = args.split_first();
    func.invoke(rest)
}
