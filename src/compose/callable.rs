//! The call protocol shared by every exotic function.
//!
//! Rust has no variadic functions, so arguments travel as tuples:
//! `function.invoke((a, b))` is `function(a, b)`. [`Callable`] is implemented
//! for every [`Fn`] of arity 0 through 6 and for the wrapper types of this
//! module, which lets plain functions, closures and wrapped pipelines be
//! mixed freely.
//!
//! Two helper traits describe argument sequences:
//!
//! - [`IntoArgs`]: turns a tuple or a fixed-size array into an argument tuple
//!   (used by [`unpack`](super::unpack) to spread a producer's result).
//! - [`SplitFirst`]: separates the first element of an argument tuple from
//!   the rest (used by [`apply_first`](super::apply_first)).

/// A value that can be called with the argument tuple `Args`.
///
/// # Examples
///
/// ```
/// use exotic_functions::compose::Callable;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// assert_eq!(add.invoke((2, 3)), 5);
/// assert_eq!((|| "unit").invoke(()), "unit");
/// ```
pub trait Callable<Args> {
    /// The value produced by the call.
    type Output;

    /// Calls `self`, spreading `args` as positional arguments.
    fn invoke(&self, args: Args) -> Self::Output;
}

macro_rules! impl_callable_for_fn {
    ($($argument_type:ident $argument:ident),*) => {
        impl<Function, Return, $($argument_type),*> Callable<($($argument_type,)*)> for Function
        where
            Function: Fn($($argument_type),*) -> Return,
        {
            type Output = Return;

            #[inline]
            fn invoke(&self, ($($argument,)*): ($($argument_type,)*)) -> Return {
                self($($argument),*)
            }
        }
    };
}

impl_callable_for_fn!();
impl_callable_for_fn!(A a);
impl_callable_for_fn!(A a, B b);
impl_callable_for_fn!(A a, B b, C c);
impl_callable_for_fn!(A a, B b, C c, D d);
impl_callable_for_fn!(A a, B b, C c, D d, E e);
impl_callable_for_fn!(A a, B b, C c, D d, E e, G g);

/// An ordered sequence whose elements can be spread as positional arguments.
///
/// Tuples spread as themselves; arrays of length 0 through 6 spread into a
/// tuple of the same length.
///
/// # Examples
///
/// ```
/// use exotic_functions::compose::IntoArgs;
///
/// assert_eq!([1, 2, 3].into_args(), (1, 2, 3));
/// assert_eq!((1, "two").into_args(), (1, "two"));
/// ```
pub trait IntoArgs {
    /// The argument tuple produced by spreading.
    type Args;

    /// Spreads `self` into an argument tuple.
    fn into_args(self) -> Self::Args;
}

macro_rules! impl_into_args_for_tuple {
    ($($element_type:ident),*) => {
        impl<$($element_type),*> IntoArgs for ($($element_type,)*) {
            type Args = Self;

            #[inline]
            fn into_args(self) -> Self {
                self
            }
        }
    };
}

impl_into_args_for_tuple!();
impl_into_args_for_tuple!(A);
impl_into_args_for_tuple!(A, B);
impl_into_args_for_tuple!(A, B, C);
impl_into_args_for_tuple!(A, B, C, D);
impl_into_args_for_tuple!(A, B, C, D, E);
impl_into_args_for_tuple!(A, B, C, D, E, G);

// Expands to the array element type once per element.
macro_rules! element_type {
    ($element:ident) => {
        Element
    };
}

macro_rules! impl_into_args_for_array {
    ($length:literal; $($element:ident),*) => {
        impl<Element> IntoArgs for [Element; $length] {
            type Args = ($(element_type!($element),)*);

            #[inline]
            fn into_args(self) -> Self::Args {
                let [$($element),*] = self;
                ($($element,)*)
            }
        }
    };
}

impl_into_args_for_array!(0;);
impl_into_args_for_array!(1; a);
impl_into_args_for_array!(2; a, b);
impl_into_args_for_array!(3; a, b, c);
impl_into_args_for_array!(4; a, b, c, d);
impl_into_args_for_array!(5; a, b, c, d, e);
impl_into_args_for_array!(6; a, b, c, d, e, g);

/// An argument tuple with at least one element, split into head and tail.
///
/// # Examples
///
/// ```
/// use exotic_functions::compose::SplitFirst;
///
/// assert_eq!((1, 2, 3).split_first(), (1, (2, 3)));
/// assert_eq!(("only",).split_first(), ("only", ()));
/// ```
pub trait SplitFirst {
    /// The first element.
    type First;
    /// The remaining elements, as a tuple.
    type Rest;

    /// Separates the first element from the rest.
    fn split_first(self) -> (Self::First, Self::Rest);
}

macro_rules! impl_split_first {
    ($first_type:ident $first:ident $(, $rest_type:ident $rest:ident)*) => {
        impl<$first_type, $($rest_type),*> SplitFirst for ($first_type, $($rest_type,)*) {
            type First = $first_type;
            type Rest = ($($rest_type,)*);

            #[inline]
            fn split_first(self) -> (Self::First, Self::Rest) {
                let ($first, $($rest,)*) = self;
                ($first, ($($rest,)*))
            }
        }
    };
}

impl_split_first!(A a);
impl_split_first!(A a, B b);
impl_split_first!(A a, B b, C c);
impl_split_first!(A a, B b, C c, D d);
impl_split_first!(A a, B b, C c, D d, E e);
impl_split_first!(A a, B b, C c, D d, E e, G g);
impl_split_first!(A a, B b, C c, D d, E e, G g, H h);
