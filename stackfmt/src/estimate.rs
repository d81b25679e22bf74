//! Build-time maximum-size estimation.
//!
//! The bound is structural: the template's rendered literal bytes plus the
//! sum of every argument type's worst-case length. The engine renders
//! literals verbatim and arguments independently through `Display`, so the
//! structural bound equals `engine::measure` fed with [`Args::WORST`]; the
//! test suite pins that equality.

use crate::args::Args;
use crate::template;

/// Returns the largest length any rendering of `template` with arguments of
/// types `A` can produce.
///
/// Panics when the template is malformed or its placeholder count is not
/// `A::COUNT`. In const context the panic is a compile error, which is how
/// the checked construction path rejects bad templates outright.
pub const fn max_len<A: Args>(template: &str) -> usize {
    assert!(
        template::placeholder_count(template) == A::COUNT,
        "placeholder count and argument count differ"
    );
    template::literal_len(template) + A::MAX_LEN
}

/// Returns the buffer capacity for `template` with arguments `A`: the
/// worst-case rendered length plus one terminator byte.
pub const fn capacity<A: Args>(template: &str) -> usize {
    max_len::<A>(template) + 1
}
