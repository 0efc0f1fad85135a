//! The identity helper.
//!
//! - [`identity`]: the identity function (I combinator) as an exotic function
//! - [`Identity`]: the plain [`Callable`] form, the default post-transform of
//!   every freshly built [`Exotic`]

use super::callable::Callable;
use super::function::Exotic;

/// Returns its argument unchanged.
///
/// `identity` is already an [`Exotic`], so it composes, binds and pipes like
/// any built function.
///
/// # Examples
///
/// ```
/// use exotic_functions::compose::{Callable, apply, identity};
///
/// assert_eq!(identity.invoke((42,)), 42);
/// assert_eq!(identity.invoke(("hello",)), "hello");
/// assert_eq!(identity | apply << vec![1, 2, 3], vec![1, 2, 3]);
///
/// let double = |value: i32| value * 2;
/// assert_eq!((identity / double).invoke((21,)), 42);
/// ```
#[allow(non_upper_case_globals)]
pub const identity: Exotic<Identity> = Exotic::new(Identity);

/// The identity function as a value.
///
/// `Identity` is a single type that accepts any argument, so it can sit in the
/// post-transform slot of an [`Exotic`] before the pipeline's output type is
/// known.
///
/// # Examples
///
/// ```
/// use exotic_functions::compose::{Callable, Identity};
///
/// assert_eq!(Identity.invoke((7,)), 7);
/// assert_eq!(Identity.invoke(("seven",)), "seven");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Identity;

impl<T> Callable<(T,)> for Identity {
    type Output = T;

    #[inline]
    fn invoke(&self, (value,): (T,)) -> T {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_with_unit() {
        assert_eq!(identity.invoke(((),)), ());
    }

    #[test]
    fn test_identity_binds_like_a_built_function() {
        let bound = identity * "bound";
        assert_eq!(bound.invoke(()), "bound");
    }

    #[test]
    fn test_identity_value_preserves_ownership() {
        let owned = String::from("owned string");
        assert_eq!(Identity.invoke((owned,)), "owned string");
    }
}
