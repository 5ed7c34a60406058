//! Stack growth for recursive grammar descent.
//!
//! A grammar that refers back to itself (an expression containing a
//! parenthesised expression, say) recurses once per nesting level of the
//! *input*. Deeply nested input would otherwise overflow the thread stack
//! long before it exhausts memory.
//!
//! `weft` calls [`ensure_sufficient_stack`] each time it dispatches through a
//! rebound placeholder, which is the only place a grammar can recurse.
//!
//! This only buys depth. A recursive alternative reachable without consuming
//! input still never terminates; that is the grammar author's problem.
//!
//! # Platform Support
//!
//! - **Native targets**: grows the stack on demand with `stacker`.
//! - **WASM targets**: calls straight through.

/// Grow when less than this much stack remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if it is close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
