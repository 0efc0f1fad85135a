//! First-argument binding and constant thunks.
//!
//! [`Partial`] is what [`Exotic::partial_left`](super::Exotic::partial_left)
//! builds under the hood: a function with its first positional argument
//! fixed. [`Thunk`] is a zero-argument callable that always produces the
//! same value; [`Exotic::partial_right_wrapped`](super::Exotic::partial_right_wrapped)
//! binds one so that a plain value can stand where a producer is expected.

use super::callable::Callable;

/// A function with its first positional argument bound.
///
/// Invoking `Partial::new(function, argument)` with `(b, c, ...)` calls
/// `function(argument, b, c, ...)`. The bound argument is cloned on every
/// call, so a partial can be invoked any number of times.
///
/// Up to five further arguments may follow the bound one. Binding again
/// nests: `Partial::new(Partial::new(f, a), b)` invoked with `(c,)` calls
/// `f(a, b, c)`.
///
/// # Examples
///
/// ```
/// use exotic_functions::compose::{Callable, Partial};
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 { minuend - subtrahend }
///
/// let subtract_from_ten = Partial::new(subtract, 10);
/// assert_eq!(subtract_from_ten.invoke((3,)), 7);
///
/// let seven = Partial::new(subtract_from_ten, 3);
/// assert_eq!(seven.invoke(()), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Partial<F, A> {
    function: F,
    argument: A,
}

impl<F, A> Partial<F, A> {
    /// Binds `argument` as the first positional argument of `function`.
    #[inline]
    pub const fn new(function: F, argument: A) -> Self {
        Self { function, argument }
    }

    /// Returns the function whose argument was bound.
    #[inline]
    pub const fn function(&self) -> &F {
        &self.function
    }

    /// Returns the bound argument.
    #[inline]
    pub const fn argument(&self) -> &A {
        &self.argument
    }
}

macro_rules! impl_callable_for_partial {
    ($($argument_type:ident $argument:ident),*) => {
        impl<Function, Bound, $($argument_type),*> Callable<($($argument_type,)*)>
            for Partial<Function, Bound>
        where
            Function: Callable<(Bound, $($argument_type),*)>,
            Bound: Clone,
        {
            type Output = Function::Output;

            #[inline]
            fn invoke(&self, ($($argument,)*): ($($argument_type,)*)) -> Self::Output {
                self.function.invoke((self.argument.clone(), $($argument),*))
            }
        }
    };
}

impl_callable_for_partial!();
impl_callable_for_partial!(A a);
impl_callable_for_partial!(A a, B b);
impl_callable_for_partial!(A a, B b, C c);
impl_callable_for_partial!(A a, B b, C c, D d);
impl_callable_for_partial!(A a, B b, C c, D d, E e);

/// A zero-argument callable that always produces a clone of one value.
///
/// `Thunk` only implements `Callable<()>`: invoking it with arguments does
/// not compile, so a stray argument can never replace the captured value.
///
/// # Examples
///
/// ```
/// use exotic_functions::compose::{Callable, Thunk};
///
/// let answer = Thunk::new(vec![4, 2]);
/// assert_eq!(answer.invoke(()), vec![4, 2]);
/// assert_eq!(answer.invoke(()), vec![4, 2]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Thunk<T> {
    value: T,
}

impl<T> Thunk<T> {
    /// Captures `value`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Returns the captured value without cloning it.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Clone> Callable<()> for Thunk<T> {
    type Output = T;

    #[inline]
    fn invoke(&self, (): ()) -> T {
        self.value.clone()
    }
}
