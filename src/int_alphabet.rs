//! Integer-alphabet entry point: caller-supplied alphabet bound `k`, with
//! the "restore `text` on success" contract inherited from the distilled
//! specification (§6, §9 Open Questions).
//!
//! This crate's reduced-problem representation never writes through
//! `text` at all — the renumbered LMS-substring names live in a separate
//! buffer (`construct::lms`'s in-place split of the *output* array, not
//! the input). `text` is therefore left byte-for-byte unchanged on every
//! exit path, trivially and unconditionally satisfying the "restored on
//! success" guarantee. The signature still takes `text` mutably so a
//! future optimization that does need transient in-place marking has
//! the access it would require without an API break.

use crate::alphabet::Symbol;
use crate::construct;
use crate::error::{Error, Result};
use crate::sa_index::SaIndex;

/// Compute the suffix array of `text` over the alphabet `[0, k)`. As
/// with the crate-root `sa` function, `sa` may be longer than `text`;
/// the extra tail is the caller's `fs` slack and is left untouched.
pub fn sa_long<Idx: SaIndex + Symbol>(
    text: &mut [u32],
    sa: &mut [Idx],
    k: usize,
    freq: Option<&mut [Idx]>,
) -> Result<()> {
    if k == 0 {
        return Err(Error::BadArgument("alphabet size k must be at least 1"));
    }
    debug_assert!(
        text.iter().all(|&c| (c as usize) < k),
        "every symbol must lie in the declared alphabet [0, k)"
    );

    construct::run(&*text, k, sa, freq)
}
