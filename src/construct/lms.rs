use crate::alphabet::Symbol;
use crate::bucket::Bucket;
use crate::construct::general_sort;
use crate::construct::induce::induce_by_lms;
use crate::error::Result;
use crate::sa_index::SaIndex;
use crate::types::{lms_substring_eq, Types};

/// Radix-place every LMS position into its bucket, sort the LMS
/// *substrings* by one induction pass, then either:
///
/// - recognize the sort already produced a total order (no two distinct
///   LMS substrings compared equal) and read the final LMS suffix order
///   directly off it, or
/// - otherwise name the LMS substrings (§4.5), build the reduced problem
///   in place (§4.6) and solve it by recursion, then translate the
///   reduced SA back into true text positions.
///
/// On return, `work[0..n]` holds the LMS suffixes of `s` in final sorted
/// order, where `n` is the LMS count; `place_sorted_lms` (the caller)
/// scatters them into their true bucket tails to seed the final full
/// induction pass.
pub fn place_sorted_lms<T: Symbol, Idx: SaIndex + Symbol>(
    s: &[T],
    ty: &Types,
    work: &mut [Idx],
    bkt: &mut Bucket,
) -> Result<()> {
    let (n, is_permutation) = sort_or_permut_lms(s, ty, work, bkt)?;

    if is_permutation {
        // collect the LMS positions, in text order, into the head of work
        let mut m = 0;
        for i in 0..=s.len() {
            if ty.is_lms(i) {
                work[m] = Idx::from_usize(i);
                m += 1;
            }
        }

        // the reduced SA (now sitting in the tail) holds ranks into that
        // text-order listing; translate ranks to real text positions.
        let tail_start = work.len() - n;
        for i in tail_start..work.len() {
            let rank = work[i].to_usize();
            work[i] = work[rank];
        }
    }

    work.copy_within(work.len() - n..work.len(), 0);

    // scatter the now-fully-sorted LMS suffixes into their true bucket
    // tails, in reverse rank order so each push_back sees the smallest
    // remaining rank last (keeping ties ordered by descending rank, which
    // is irrelevant here since ranks are already a total order).
    for i in (1..n).rev() {
        let pos = work[i].to_usize();
        let c = s[pos].as_usize();
        bkt.push_back(work, c, pos);
    }

    Ok(())
}

/// Compute either the sorted order of LMS suffixes directly, or (if LMS
/// substrings don't already totally order by equality) a permutation
/// that must be resolved by recursing into a reduced problem.
///
/// Returns `(count, is_permutation)`: `count` is the number of entries
/// now sitting in `work`'s tail, `is_permutation` tells the caller
/// whether those entries are final text positions or ranks requiring
/// translation.
fn sort_or_permut_lms<T: Symbol, Idx: SaIndex + Symbol>(
    s: &[T],
    ty: &Types,
    work: &mut [Idx],
    bkt: &mut Bucket,
) -> Result<(usize, bool)> {
    // coarsely bucket every LMS position (other than the sentinel, seeded
    // separately at work[0]) by its leading symbol.
    work[0] = Idx::from_usize(s.len());
    for i in (1..s.len()).rev() {
        if ty.is_lms(i) {
            let c = s[i].as_usize();
            bkt.push_back(work, c, i);
        }
    }

    // one induction pass over coarse buckets sorts LMS *substrings*.
    induce_by_lms(s, ty, work, bkt);

    // gather the sorted LMS substrings into the tail of work.
    let mut lms_head = work.len();
    for i in (0..work.len()).rev() {
        if ty.is_lms(work[i].to_usize()) {
            lms_head -= 1;
            work[lms_head] = work[i];
        }
    }

    // name LMS substrings in place: `head` becomes the reduced problem's
    // text (renumbered LMS substrings, indexed by the in-place trick
    // `x / 2`, since consecutive LMS positions are at least 2 apart),
    // `lms` keeps the LMS positions themselves as the reduced SA to
    // recurse into.
    let (head, lms) = work.split_at_mut(lms_head);

    for x in head.iter_mut() {
        *x = Idx::EMPTY;
    }

    let mut scale: usize = 0;
    let mut last = lms[0].to_usize();
    for &x in lms.iter().skip(1) {
        let x = x.to_usize();
        let i = x / 2;
        if !lms_substring_eq(s, ty, last, x) {
            scale += 1;
        }
        head[i] = Idx::from_usize(scale - 1);
        last = x;
    }

    let mut n = 0;
    for i in 0..head.len() {
        if head[i].is_empty() {
            continue;
        }
        head[n] = head[i];
        n += 1;
    }

    if scale + 1 < lms.len() {
        // the naming didn't produce a total order: solve the reduced
        // problem by recursion, reusing `lms` itself as the reduced SA and
        // the (now-compacted) head of `work` as the reduced text, named
        // over the same index type as the outer suffix array. `head` and
        // `lms` are disjoint slices of the same backing buffer.
        general_sort(&head[..n], scale, &mut *lms)?;
        Ok((lms.len(), true))
    } else {
        // names were already pairwise distinct: lms is already the
        // correctly sorted order of LMS suffixes.
        Ok((lms.len(), false))
    }
}
