//! Format template scanning and splitting.
//!
//! A template holds literal text and `{}` placeholders. Doubled markers
//! (`{{` and `}}`) are escapes for one literal brace and are never counted as
//! placeholders. All scanners here are const fns, so template problems
//! surface while a capacity is evaluated, not at runtime.

/// Returns the number of placeholders in `template`.
///
/// Panics on a malformed template: a lone `}`, or a `{` that starts neither
/// a `{}` placeholder nor a `{{` escape. In const context the panic is a
/// compile error.
pub const fn placeholder_count(template: &str) -> usize {
    let bytes = template.as_bytes();
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'{' => {
                if i + 1 < bytes.len() && bytes[i + 1] == b'{' {
                    i += 2;
                } else if i + 1 < bytes.len() && bytes[i + 1] == b'}' {
                    count += 1;
                    i += 2;
                } else {
                    panic!("'{{' must start a '{{}}' placeholder or a '{{{{' escape");
                }
            }
            b'}' => {
                if i + 1 < bytes.len() && bytes[i + 1] == b'}' {
                    i += 2;
                } else {
                    panic!("unmatched '}}' in template");
                }
            }
            _ => i += 1,
        }
    }
    count
}

/// Returns the number of bytes the literal text of `template` renders to.
///
/// Escapes count as the single byte they render to; placeholders count as
/// zero. Panics on malformed templates like [`placeholder_count`].
pub const fn literal_len(template: &str) -> usize {
    let bytes = template.as_bytes();
    let mut len = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'{' => {
                if i + 1 < bytes.len() && bytes[i + 1] == b'{' {
                    len += 1;
                    i += 2;
                } else if i + 1 < bytes.len() && bytes[i + 1] == b'}' {
                    i += 2;
                } else {
                    panic!("'{{' must start a '{{}}' placeholder or a '{{{{' escape");
                }
            }
            b'}' => {
                if i + 1 < bytes.len() && bytes[i + 1] == b'}' {
                    len += 1;
                    i += 2;
                } else {
                    panic!("unmatched '}}' in template");
                }
            }
            _ => {
                len += 1;
                i += 1;
            }
        }
    }
    len
}

/// Splits `template` immediately before its `n`-th placeholder, 0-indexed,
/// skipping escapes.
///
/// The prefix holds exactly `n` placeholders and the suffix the rest;
/// concatenating the halves gives `template` back byte for byte. `n` equal
/// to the placeholder count yields `(template, "")`; a larger `n` panics.
pub const fn split_at_placeholder(template: &str, n: usize) -> (&str, &str) {
    let bytes = template.as_bytes();
    let mut seen = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'{' => {
                if i + 1 < bytes.len() && bytes[i + 1] == b'{' {
                    i += 2;
                } else if seen == n {
                    break;
                } else if i + 1 < bytes.len() && bytes[i + 1] == b'}' {
                    seen += 1;
                    i += 2;
                } else {
                    panic!("'{{' must start a '{{}}' placeholder or a '{{{{' escape");
                }
            }
            b'}' => {
                if i + 1 < bytes.len() && bytes[i + 1] == b'}' {
                    i += 2;
                } else {
                    panic!("unmatched '}}' in template");
                }
            }
            _ => i += 1,
        }
    }
    if seen != n {
        panic!("split point exceeds the template's placeholder count");
    }

    let (prefix, suffix) = bytes.split_at(i);
    // Safety: the split lands on an ASCII '{' or at the end of the template,
    //      so both halves remain valid UTF-8.
    unsafe {
        (
            core::str::from_utf8_unchecked(prefix),
            core::str::from_utf8_unchecked(suffix),
        )
    }
}
