//! Argument tuples bound to a template.
//!
//! A buffer's argument list is an ordinary tuple of [`WorstCase`] types.
//! [`Args`] exposes what the estimator and the engine need from it, and
//! [`Split`] types the head/tail halves that partial formatting produces.
//! Both are implemented for every tuple arity up to eight.

use core::fmt;

use crate::worst::WorstCase;

/// An ordered list of format arguments with a build-time worst-case size.
pub trait Args {
    /// Number of arguments. Must equal the bound template's placeholder
    /// count.
    const COUNT: usize;
    /// Sum of every argument type's worst-case rendered length.
    const MAX_LEN: usize;
    /// The tuple holding every type's worst-case value.
    const WORST: Self;

    /// Renders the `n`-th argument through its [`Display`] implementation.
    /// Returns an error when `n` is out of range.
    ///
    /// [`Display`]: fmt::Display
    fn fmt_nth(&self, n: usize, w: &mut dyn fmt::Write) -> fmt::Result;
}

/// Splits an argument tuple after its first `N` elements.
///
/// Implementations exist exactly for `N` up to the tuple's arity, so an
/// out-of-range split index fails to type-check instead of failing at
/// runtime.
pub trait Split<const N: usize>: Args {
    /// The first `N` argument types.
    type Head: Args;
    /// The remaining argument types.
    type Tail: Args;
}

macro_rules! impl_args {
    (@count) => { 0 };
    (@count $head:ident $($tail:ident)*) => { 1 + impl_args!(@count $($tail)*) };
    ($($name:ident),*) => {
        impl<$($name: WorstCase),*> Args for ($($name,)*) {
            const COUNT: usize = impl_args!(@count $($name)*);
            const MAX_LEN: usize = 0 $(+ $name::MAX_LEN)*;
            const WORST: Self = ($($name::WORST,)*);

            #[allow(non_snake_case, unused_variables, unused_mut, unused_assignments)]
            fn fmt_nth(&self, n: usize, w: &mut dyn fmt::Write) -> fmt::Result {
                let ($(ref $name,)*) = *self;
                let mut i = 0;
                $(
                    if i == n {
                        return write!(w, "{}", $name);
                    }
                    i += 1;
                )*
                Err(fmt::Error)
            }
        }
    };
}

impl Args for () {
    const COUNT: usize = 0;
    const MAX_LEN: usize = 0;
    const WORST: Self = ();

    fn fmt_nth(&self, _n: usize, _w: &mut dyn fmt::Write) -> fmt::Result {
        Err(fmt::Error)
    }
}

impl_args!(A);
impl_args!(A, B);
impl_args!(A, B, C);
impl_args!(A, B, C, D);
impl_args!(A, B, C, D, E);
impl_args!(A, B, C, D, E, F);
impl_args!(A, B, C, D, E, F, G);
impl_args!(A, B, C, D, E, F, G, H);

impl Split<0> for () {
    type Head = ();
    type Tail = ();
}

macro_rules! impl_split {
    ($n:literal, ($($h:ident),*), ($($t:ident),*)) => {
        impl<$($h: WorstCase,)* $($t: WorstCase),*> Split<$n> for ($($h,)* $($t,)*) {
            type Head = ($($h,)*);
            type Tail = ($($t,)*);
        }
    };
}

impl_split!(0, (), (A));
impl_split!(1, (A), ());

impl_split!(0, (), (A, B));
impl_split!(1, (A), (B));
impl_split!(2, (A, B), ());

impl_split!(0, (), (A, B, C));
impl_split!(1, (A), (B, C));
impl_split!(2, (A, B), (C));
impl_split!(3, (A, B, C), ());

impl_split!(0, (), (A, B, C, D));
impl_split!(1, (A), (B, C, D));
impl_split!(2, (A, B), (C, D));
impl_split!(3, (A, B, C), (D));
impl_split!(4, (A, B, C, D), ());

impl_split!(0, (), (A, B, C, D, E));
impl_split!(1, (A), (B, C, D, E));
impl_split!(2, (A, B), (C, D, E));
impl_split!(3, (A, B, C), (D, E));
impl_split!(4, (A, B, C, D), (E));
impl_split!(5, (A, B, C, D, E), ());

impl_split!(0, (), (A, B, C, D, E, F));
impl_split!(1, (A), (B, C, D, E, F));
impl_split!(2, (A, B), (C, D, E, F));
impl_split!(3, (A, B, C), (D, E, F));
impl_split!(4, (A, B, C, D), (E, F));
impl_split!(5, (A, B, C, D, E), (F));
impl_split!(6, (A, B, C, D, E, F), ());

impl_split!(0, (), (A, B, C, D, E, F, G));
impl_split!(1, (A), (B, C, D, E, F, G));
impl_split!(2, (A, B), (C, D, E, F, G));
impl_split!(3, (A, B, C), (D, E, F, G));
impl_split!(4, (A, B, C, D), (E, F, G));
impl_split!(5, (A, B, C, D, E), (F, G));
impl_split!(6, (A, B, C, D, E, F), (G));
impl_split!(7, (A, B, C, D, E, F, G), ());

impl_split!(0, (), (A, B, C, D, E, F, G, H));
impl_split!(1, (A), (B, C, D, E, F, G, H));
impl_split!(2, (A, B), (C, D, E, F, G, H));
impl_split!(3, (A, B, C), (D, E, F, G, H));
impl_split!(4, (A, B, C, D), (E, F, G, H));
impl_split!(5, (A, B, C, D, E), (F, G, H));
impl_split!(6, (A, B, C, D, E, F), (G, H));
impl_split!(7, (A, B, C, D, E, F, G), (H));
impl_split!(8, (A, B, C, D, E, F, G, H), ());
