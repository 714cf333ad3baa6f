//! PLCP via Kasai's algorithm and its permutation into LCP (SPEC_FULL
//! §4.9).

use crate::error::{Error, Result};
use crate::sa_index::SaIndex;

/// Kasai's algorithm: for every text position `i` (in text order),
/// `plcp[i]` is the length of the common prefix shared with the suffix
/// immediately preceding it in the suffix array. The running bound `h`
/// only ever decreases by at most one per step, which is what keeps the
/// whole scan linear.
pub fn plcp<Idx: SaIndex>(text: &[u8], sa: &[Idx], plcp: &mut [Idx]) -> Result<()> {
    compute_plcp(text, sa, plcp, false)
}

/// As [`plcp`], but a `0` separator byte always bounds the common
/// prefix: two suffixes can never be judged to share a prefix that
/// crosses into a different string of the generalized set.
pub fn plcp_gsa<Idx: SaIndex>(text: &[u8], sa: &[Idx], plcp: &mut [Idx]) -> Result<()> {
    compute_plcp(text, sa, plcp, true)
}

fn compute_plcp<Idx: SaIndex>(text: &[u8], sa: &[Idx], plcp: &mut [Idx], gsa: bool) -> Result<()> {
    let n = text.len();
    if sa.len() != n || plcp.len() != n {
        return Err(Error::BadArgument("sa/plcp buffers must have text.len() entries"));
    }
    if n == 0 {
        return Ok(());
    }

    let mut rank = vec![0usize; n];
    for (r, &p) in sa.iter().enumerate() {
        rank[p.to_usize()] = r;
    }

    let mut h = 0usize;
    for i in 0..n {
        let r = rank[i];
        if r == 0 {
            plcp[i] = Idx::from_usize(0);
            h = 0;
            continue;
        }

        let j = sa[r - 1].to_usize();
        while i + h < n && j + h < n {
            if gsa && text[i + h] == 0 {
                break;
            }
            if text[i + h] != text[j + h] {
                break;
            }
            h += 1;
        }
        plcp[i] = Idx::from_usize(h);
        if h > 0 {
            h -= 1;
        }
    }

    Ok(())
}

/// The one-line permutation `LCP[i] = PLCP[SA[i]]`. `lcp_out` may alias
/// `sa`'s storage: each cell is read before it is overwritten.
pub fn lcp<Idx: SaIndex>(plcp: &[Idx], sa: &[Idx], lcp_out: &mut [Idx]) -> Result<()> {
    let n = sa.len();
    if plcp.len() != n || lcp_out.len() != n {
        return Err(Error::BadArgument("plcp/lcp buffers must have sa.len() entries"));
    }

    for i in 0..n {
        let p = sa[i].to_usize();
        lcp_out[i] = plcp[p];
    }

    Ok(())
}
