//! Entry point for building exotic functions.

use std::ops::Rem;

use super::function::Exotic;

/// Turns plain functions into [`Exotic`] functions.
///
/// The builder is normally used through the [`exotic`] value and the `%`
/// operator, which binds as tightly as the other pipeline operators and so
/// starts a chain without extra parentheses.
///
/// # Examples
///
/// ```
/// use exotic_functions::compose::{Builder, Callable};
///
/// let shout = Builder.build(|text: &str| text.to_uppercase());
/// assert_eq!(shout.invoke(("hey",)), "HEY");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Builder;

impl Builder {
    /// Wraps `function` with the identity post-transform.
    #[inline]
    pub const fn build<F>(self, function: F) -> Exotic<F> {
        Exotic::new(function)
    }
}

impl<F> Rem<F> for Builder {
    type Output = Exotic<F>;

    #[inline]
    fn rem(self, function: F) -> Self::Output {
        self.build(function)
    }
}

/// The builder value: `exotic % function` wraps `function`.
///
/// # Examples
///
/// ```
/// use exotic_functions::compose::{apply, exotic};
///
/// fn shout(text: &str) -> String { format!("{}!", text.to_uppercase()) }
///
/// assert_eq!(exotic % shout * "hello, world" | apply, "HELLO, WORLD!");
/// ```
#[allow(non_upper_case_globals)]
pub const exotic: Builder = Builder;

/// Wraps `function` with the identity post-transform.
///
/// The function form of `exotic % function`.
///
/// # Examples
///
/// ```
/// use exotic_functions::compose::{Callable, build};
///
/// let length = build(|text: String| text.len());
/// assert_eq!(length.invoke((String::from("four"),)), 4);
/// ```
#[inline]
pub const fn build<F>(function: F) -> Exotic<F> {
    Exotic::new(function)
}
