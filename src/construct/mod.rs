//! SA-IS construction core: induced sorting with LMS-substring naming and
//! in-place recursion into the reduced problem (SPEC_FULL §4).
//!
//! The generic pipeline is parameterized over the text's [`Symbol`] type
//! (byte, 16-bit, or the reduced-problem's own index type) and the
//! caller's chosen [`SaIndex`] output width, collapsing what would
//! otherwise be four near-duplicate code paths (8/16-bit text times
//! 32/64-bit output) into one.

pub(crate) mod induce;
mod lms;


use crate::alphabet::Symbol;
use crate::bucket::{self, Bucket};
use crate::error::{Error, Result};
use crate::sa_index::SaIndex;
use crate::types::Types;
use induce::induce_by_lms;
use lms::place_sorted_lms;

/// Below this length, comparison sort beats the fixed overhead of
/// building type bitmap, bucket table and reduced problem.
const THRESHOLD: usize = 128;

/// Construct the suffix array of `s` into `work`.
///
/// `work` must have length `s.len() + 1`; on return `work[0]` holds the
/// implicit empty suffix (always the smallest) and `work[1..]` holds the
/// suffix array proper. `scale` is the alphabet size: every symbol in `s`
/// must satisfy `symbol.as_usize() < scale`.
pub fn construct<T: Symbol, Idx: SaIndex + Symbol>(
    s: &[T],
    scale: usize,
    work: &mut [Idx],
) -> Result<()> {
    assert_eq!(s.len() + 1, work.len(), "sa buffer must hold s.len() + 1 entries");
    debug_assert!(s.len() < Idx::EMPTY.to_usize(), "text too long for this index width");

    general_sort(s, scale, work)
}

/// The entry point shared by every public `sa*` function: validates
/// buffer lengths, builds the sentinel-prefixed work buffer, constructs,
/// copies the result out, and optionally fills the frequency table.
///
/// `sa` may be longer than `text`; the distilled spec's `fs` ("free
/// space") slack is this crate's spare tail of `sa` rather than a
/// separate counted parameter — the idiomatic encoding of "a caller may
/// pass a longer output buffer" in a language with first-class slice
/// lengths. The slack is never read and `sa[0..text.len()]` is identical
/// for any `fs`, satisfying idempotence-of-`fs`; unlike the distilled
/// spec's 2k/4k/6k variants this crate does not yet carve the internal
/// bucket-table allocation out of that slack (see DESIGN.md).
pub fn run<T: Symbol, Idx: SaIndex + Symbol>(
    text: &[T],
    scale: usize,
    sa: &mut [Idx],
    freq: Option<&mut [Idx]>,
) -> Result<()> {
    if sa.len() < text.len() {
        return Err(Error::BadArgument("sa buffer must hold at least text.len() entries"));
    }
    if let Some(ref freq) = freq {
        if freq.len() < scale {
            return Err(Error::BadArgument("freq buffer shorter than the alphabet"));
        }
    }

    let mut work = vec![Idx::EMPTY; text.len() + 1];
    construct(text, scale, &mut work)?;
    sa[..text.len()].copy_from_slice(&work[1..]);

    if let Some(freq) = freq {
        bucket::histogram(text, scale, freq)?;
    }

    Ok(())
}

/// Dispatch to the naive comparison sort or to SA-IS, by size.
pub(crate) fn general_sort<T: Symbol, Idx: SaIndex + Symbol>(
    s: &[T],
    scale: usize,
    work: &mut [Idx],
) -> Result<()> {
    if s.len() < THRESHOLD {
        naive_sort(s, work);
        Ok(())
    } else {
        sais(s, scale, work)
    }
}

/// O(n log n) comparison sort with no auxiliary structures, used below
/// [`THRESHOLD`] and as the base case of the SA-IS recursion.
fn naive_sort<T: Ord, Idx: SaIndex>(s: &[T], work: &mut [Idx]) {
    for (slot, x) in work.iter_mut().zip((0..=s.len()).rev()) {
        *slot = Idx::from_usize(x);
    }
    work[1..].sort_by(|&i, &j| Ord::cmp(&s[i.to_usize()..], &s[j.to_usize()..]));
}

/// The induced-sorting algorithm proper: classify S/L types, place and
/// sort LMS substrings (recursing into the reduced problem if needed),
/// then induce the complete order from the sorted LMS suffixes.
fn sais<T: Symbol, Idx: SaIndex + Symbol>(s: &[T], scale: usize, work: &mut [Idx]) -> Result<()> {
    if s.is_empty() {
        work[0] = Idx::from_usize(0);
        return Ok(());
    }

    let ty = Types::calculate(s);
    let mut bkt = Bucket::calculate(s, scale)?;

    place_sorted_lms(s, &ty, work, &mut bkt)?;
    induce_by_lms(s, &ty, work, &mut bkt);
    Ok(())
}
