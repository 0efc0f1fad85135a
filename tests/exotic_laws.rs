#![cfg(feature = "compose")]
//! Property-based tests for exotic function laws.
//!
//! ## Composition Laws
//! - **Composition**: `(exotic % f / g).invoke((x,)) == f(g(x))`
//! - **Associativity in effect**: `exotic % f / g / h == f . (g . h)`
//! - **Identity**: composing with `identity` on either side changes nothing
//!
//! ## Partial Application Laws
//! - **Full binding**: `(exotic % f * a).invoke(()) == f(a)`
//! - **Left binding**: `(exotic % f * a).invoke((b,)) == f(a, b)`
//! - **Thunk binding**: the thunk bound by `>>` yields its value on every call
//!
//! ## Pipe Laws
//! - **Pipe**: `w | m == m(w)`
//! - **Apply**: `w | apply << x == w.invoke((x,))`
//!
//! ## Application Laws
//! - `apply_first((f, a, b)) == apply_with(f, (a, b)) == f(a, b)`

use exotic_functions::compose::{
    Callable, Exotic, Thunk, apply, apply_first, apply_with, exotic, identity, unpack,
};
use proptest::prelude::*;

fn increment(value: i32) -> i32 {
    value.wrapping_add(1)
}

fn double(value: i32) -> i32 {
    value.wrapping_mul(2)
}

fn offset(value: i32) -> i32 {
    value.wrapping_sub(3)
}

fn combine(first: i32, second: i32) -> i32 {
    first.wrapping_mul(31).wrapping_add(second)
}

// =============================================================================
// Composition Laws
// =============================================================================

proptest! {
    /// Composition: (exotic % f / g)(x) == f(g(x))
    #[test]
    fn prop_compose_applies_inner_first(x in any::<i32>()) {
        let composed = exotic % increment / double;
        prop_assert_eq!(composed.invoke((x,)), increment(double(x)));
    }

    /// Associativity in effect: exotic % f / g / h == f(g(h(x)))
    #[test]
    fn prop_compose_associativity(x in any::<i32>()) {
        let chained = exotic % increment / double / offset;
        let grouped = exotic % increment / (exotic % double / offset);

        prop_assert_eq!(chained.invoke((x,)), increment(double(offset(x))));
        prop_assert_eq!(chained.invoke((x,)), grouped.invoke((x,)));
    }

    /// Left identity: identity / f == f
    #[test]
    fn prop_compose_left_identity(x in any::<i32>()) {
        let composed = identity / double;
        prop_assert_eq!(composed.invoke((x,)), double(x));
    }

    /// Right identity: exotic % f / identity == f
    #[test]
    fn prop_compose_right_identity(x in any::<i32>()) {
        let composed = exotic % double / identity;
        prop_assert_eq!(composed.invoke((x,)), double(x));
    }
}

// =============================================================================
// Partial Application Laws
// =============================================================================

proptest! {
    /// Full binding: (exotic % f * a)() == f(a)
    #[test]
    fn prop_partial_full_binding(a in any::<i32>()) {
        prop_assert_eq!((exotic % double * a).invoke(()), double(a));
    }

    /// Left binding: (exotic % f * a)(b) == f(a, b)
    #[test]
    fn prop_partial_left_binding(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!((exotic % combine * a).invoke((b,)), combine(a, b));
        prop_assert_eq!((exotic % combine << a).invoke((b,)), combine(a, b));
    }

    /// Both orders of binding reach the same full application
    #[test]
    fn prop_partial_sequential_binding(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!((exotic % combine * a * b).invoke(()), combine(a, b));
    }

    /// Thunk binding yields the captured value on every call
    #[test]
    fn prop_thunk_binding_is_stable(values in prop::collection::vec(any::<i32>(), 0..16)) {
        let total = |producer: Thunk<Vec<i32>>| {
            producer.invoke(()).into_iter().fold(0_i32, i32::wrapping_add)
        };
        let bound = exotic % total >> values.clone();
        let expected = values.into_iter().fold(0_i32, i32::wrapping_add);

        prop_assert_eq!(bound.invoke(()), expected);
        prop_assert_eq!(bound.invoke(()), expected);
    }
}

// =============================================================================
// Pipe Laws
// =============================================================================

proptest! {
    /// Pipe: w | m == m(w)
    #[test]
    fn prop_pipe_is_modifier_application(x in any::<i32>()) {
        let modifier = move |func: Exotic<fn(i32) -> i32>| func.invoke((x,));
        let wrapped = exotic % (double as fn(i32) -> i32);

        prop_assert_eq!(wrapped | modifier, modifier(wrapped));
    }

    /// Apply: w | apply << x == w(x)
    #[test]
    fn prop_apply_invokes_piped_function(x in any::<i32>()) {
        let wrapped = exotic % increment / double;
        prop_assert_eq!(wrapped | apply << x, wrapped.invoke((x,)));
    }

    /// Unpack then apply is a direct call
    #[test]
    fn prop_unpack_then_apply(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(exotic % combine | unpack >> [a, b] | apply, combine(a, b));
    }
}

// =============================================================================
// Application Laws
// =============================================================================

proptest! {
    /// apply_first((f, a, b)) == apply_with(f, (a, b)) == f(a, b)
    #[test]
    fn prop_application_modes_agree(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(apply_first((combine, a, b)), combine(a, b));
        prop_assert_eq!(apply_with(combine, (a, b)), combine(a, b));
    }
}
