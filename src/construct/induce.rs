use crate::alphabet::Symbol;
use crate::bucket::Bucket;
use crate::sa_index::SaIndex;
use crate::types::Types;

/// The induction scanner (SPEC_FULL §4.4).
///
/// Two passes over `work` (length `s.len() + 1`, `work[0]` reserved for the
/// sentinel suffix):
///
/// - left-to-right, inducing every L-type suffix from whatever is already
///   seeded in the buckets (either coarsely bucketed LMS characters, for
///   the LMS-*substring* sort, or fully sorted LMS suffixes, for the final
///   full sort);
/// - right-to-left, symmetrically inducing every S-type suffix from the
///   L-type suffixes the first pass just placed.
///
/// Called twice per recursion level: once to order LMS substrings (so they
/// can be named, §4.5) and once — after the reduced problem has been
/// solved and the true LMS *suffix* order reconstructed — to produce the
/// complete order.
pub fn induce_by_lms<T: Symbol, Idx: SaIndex>(
    s: &[T],
    ty: &Types,
    work: &mut [Idx],
    bkt: &mut Bucket,
) {
    // the implicit sentinel suffix at s.len() induces its predecessor,
    // which is always L-type (nothing can be smaller than the sentinel).
    if !s.is_empty() {
        let c = s[s.len() - 1].as_usize();
        bkt.push_front(work, c, s.len() - 1);
    }

    for c0 in 0..bkt.len() {
        let mut i = bkt.head(c0);
        while i < bkt.front(c0) {
            let j = work[i].to_usize();
            if j > 0 && !ty.is_s(j - 1) {
                let c = s[j - 1].as_usize();
                bkt.push_front(work, c, j - 1);
            }
            i += 1;
        }

        let mut i = bkt.back(c0);
        while i < bkt.tail(c0) {
            let j = work[i].to_usize();
            // every entry seeded in a bucket's tail is an LMS position,
            // which by definition always has a predecessor (j > 0).
            let c = s[j - 1].as_usize();
            bkt.push_front(work, c, j - 1);
            i += 1;
        }
    }
    bkt.reset_back_all();

    for c0 in (0..bkt.len()).rev() {
        for i in (bkt.back(c0)..bkt.tail(c0)).rev() {
            let j = work[i].to_usize();
            if j > 0 && ty.is_s(j - 1) {
                let c = s[j - 1].as_usize();
                bkt.push_back(work, c, j - 1);
            }
        }
        for i in (bkt.head(c0)..bkt.front(c0)).rev() {
            let j = work[i].to_usize();
            if j > 0 && ty.is_s(j - 1) {
                let c = s[j - 1].as_usize();
                bkt.push_back(work, c, j - 1);
            }
        }
    }
    bkt.reset_all();
}
