//! Stack headroom for the recursive passes.
//!
//! Parsing, validation, layout and serialization all recurse once per
//! nesting level, with frames large enough that a few hundred levels can
//! exhaust a 2 MiB thread stack. Each recursive step goes through
//! [`ensure_sufficient_stack`], which moves onto a fresh heap-allocated
//! segment when the current stack runs low. The depth limits then decide
//! where nesting stops, not the size of the caller's stack.

/// Remaining stack below which the next step switches segments.
const RED_ZONE: usize = 256 * 1024;

/// Size of each new segment.
const SEGMENT_SIZE: usize = 4 * 1024 * 1024;

/// Runs `f`, first switching to a new stack segment if the current one has
/// less than [`RED_ZONE`] bytes left.
#[inline]
pub fn ensure_sufficient_stack<R, F: FnOnce() -> R>(f: F) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}
