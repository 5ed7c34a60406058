//! Combinators: functions that build grammars out of text and other grammars.
//!
//! # Backtracking protocol
//!
//! Every combinator saves the source position before it starts and obeys
//! one rule on failure:
//!
//! - **Recoverable** failure: restore to the saved position, so the caller
//!   sees the input exactly as it was.
//! - **Fatal** failure: propagate immediately, without restoring. Nobody
//!   above will backtrack past it anyway.
//!
//! | Combinator | Success | Recoverable failure | Fatal failure |
//! |------------|---------|---------------------|---------------|
//! | `literal` / `char_class` | `Literal` | restore | (I/O only) |
//! | `sequence` | `Sequence` of non-discarded children | restore, child's error | pass through |
//! | `alternative` | first child that matches | try next; all failed: restore, aggregate | stop, pass through |
//! | `repeat` | `Sequence` of 0..=max matches | below `min`: restore, child's error | pass through |
//! | `commit` | as `sequence` | promoted to fatal | pass through |
//! | `discard` | nothing | child's | child's |
//! | `tag` | `Tagged` | child's | child's |

mod primitive;
mod structure;

pub use primitive::{char_class, char_set, literal};
pub use structure::{alternative, commit, discard, optional, repeat, sequence, tag};
