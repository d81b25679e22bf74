//! Fixed-capacity format buffers with no allocation.
//!
//! A [`SizedBuf`] owns a `[u8; CAP]` sized for the worst-case rendering of
//! its template and argument types, so the checked construction path via
//! [`sized_buf!`](crate::sized_buf) can never overflow at runtime.

use core::fmt;
use core::marker::PhantomData;

use crate::args::{Args, Split};
use crate::engine;
use crate::template;

/// Builds a fresh [`SizedBuf`] whose capacity is computed at compile time.
///
/// The first operand is the template, the rest are the argument types bound
/// to its placeholders in order. Malformed templates, arity mismatches and
/// unsupported argument types all fail the build while the capacity constant
/// is evaluated.
///
/// # Example
///
/// ```
/// let mut buf = stackfmt::sized_buf!("[{}] = {}", usize, u8);
/// assert_eq!(buf.format((0, 0)), "[0] = 0");
/// assert_eq!(buf.format((12, 3)), "[12] = 3");
/// ```
///
/// Argument types without a derivable worst-case size are rejected:
///
/// ```compile_fail
/// let buf = stackfmt::sized_buf!("{}", f64);
/// ```
///
/// So are templates whose placeholder count differs from the argument count:
///
/// ```compile_fail
/// let buf = stackfmt::sized_buf!("{} {}", u8);
/// ```
#[macro_export]
macro_rules! sized_buf {
    ($template:expr $(, $ty:ty)* $(,)?) => {{
        const CAPACITY: usize = $crate::estimate::capacity::<($($ty,)*)>($template);
        $crate::buffer::SizedBuf::<($($ty,)*), CAPACITY>::new($template)
    }};
}

/// A fixed-capacity format buffer bound to a template and the argument tuple
/// type `A` for its remaining placeholders.
///
/// The buffer owns its bytes; passing it by value copies them, and no two
/// buffers ever alias. `cursor` marks how many bytes earlier
/// [`partial_format`](Self::partial_format) calls committed.
pub struct SizedBuf<A, const CAP: usize> {
    buf: [u8; CAP],
    cursor: usize,
    /// Template for the placeholders not yet formatted.
    template: &'static str,
    _args: PhantomData<A>,
}

impl<A, const CAP: usize> SizedBuf<A, CAP> {
    /// Returns the bytes committed by earlier partial formatting as `&str`.
    pub fn to_str(&self) -> &str {
        // Safety: committed bytes were written through the engine's
        //      `fmt::Write` sinks, which only write whole `&str` pieces, so
        //      `buf[..cursor]` is valid UTF-8.
        unsafe { core::str::from_utf8_unchecked(&self.buf[..self.cursor]) }
    }

    /// Total capacity in bytes, including the terminator slot.
    pub const fn capacity(&self) -> usize {
        CAP
    }
}

impl<A: Args, const CAP: usize> SizedBuf<A, CAP> {
    /// Constructs an empty buffer over `template` with a caller-chosen
    /// capacity.
    ///
    /// This is the size-unchecked variant: `CAP` is trusted to cover the
    /// worst-case rendering plus one terminator byte. Prefer
    /// [`sized_buf!`](crate::sized_buf), which derives `CAP` from the
    /// argument types and cannot get it wrong. If a hand-picked `CAP` turns
    /// out too small for some rendering, the formatting call panics; use
    /// this only with outside knowledge of a safe bound, e.g. when a type
    /// the estimator cannot size is formatted through a wrapper.
    ///
    /// Panics when the placeholder count of `template` is not `A::COUNT`.
    pub const fn new(template: &'static str) -> Self {
        assert!(
            template::placeholder_count(template) == A::COUNT,
            "placeholder count and argument count differ"
        );
        assert!(CAP > 0, "capacity must include the terminator byte");
        Self {
            buf: [0; CAP],
            cursor: 0,
            template,
            _args: PhantomData,
        }
    }

    /// Renders the remaining template with `args` and returns everything
    /// rendered so far, committed prefix included.
    ///
    /// Writing starts at the cursor and the cursor does not move, so calling
    /// again overwrites; equal arguments give equal results. The byte after
    /// the returned slice is always NUL, so the pointer doubles as a C
    /// string.
    ///
    /// Panics when the output exceeds the capacity, which only a hand-picked
    /// `CAP` can cause.
    pub fn format(&mut self, args: A) -> &str {
        let Ok(written) = engine::render_into(&mut self.buf[self.cursor..CAP - 1], self.template, &args)
        else {
            panic!("format output exceeds the buffer capacity");
        };
        let end = self.cursor + written;
        self.buf[end] = 0;
        // Safety: the engine sink writes whole `&str` pieces only, so
        //      `buf[..end]` is valid UTF-8.
        unsafe { core::str::from_utf8_unchecked(&self.buf[..end]) }
    }

    /// Renders the first `N` placeholders with `args` and returns the
    /// continuation buffer for the rest.
    ///
    /// The continuation holds its own copy of the bytes with the cursor
    /// advanced past the rendered prefix, and is bound to the template
    /// suffix and the remaining argument types; it can be partially
    /// formatted again. `self` is left untouched and shares nothing with
    /// the returned value. Split positions past the argument count do not
    /// type-check.
    ///
    /// Panics when the prefix output exceeds the capacity, which only a
    /// hand-picked `CAP` can cause.
    pub fn partial_format<const N: usize>(&self, args: A::Head) -> SizedBuf<A::Tail, CAP>
    where
        A: Split<N>,
    {
        let (prefix, suffix) = template::split_at_placeholder(self.template, N);
        let mut next = SizedBuf {
            buf: self.buf,
            cursor: self.cursor,
            template: suffix,
            _args: PhantomData,
        };
        let Ok(written) = engine::render_into(&mut next.buf[next.cursor..CAP - 1], prefix, &args)
        else {
            panic!("partial format output exceeds the buffer capacity");
        };
        next.cursor += written;
        next
    }
}

impl<A, const CAP: usize> Clone for SizedBuf<A, CAP> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, const CAP: usize> Copy for SizedBuf<A, CAP> {}

impl<A, const CAP: usize> fmt::Debug for SizedBuf<A, CAP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SizedBuf")
            .field("template", &self.template)
            .field("committed", &self.to_str())
            .field("capacity", &CAP)
            .finish()
    }
}
