//! Burrows–Wheeler Transform, its auxiliary-sampled variant, and inverse
//! transform via LF-mapping (SPEC_FULL §4.8).

use crate::alphabet::{Symbol, BYTE_ALPHABET};
use crate::construct;
use crate::error::{Error, Result};
use crate::sa_index::SaIndex;

/// Forward BWT. Builds the suffix array of `text` into `sa_scratch`, then
/// derives `u[i] = text[sa_scratch[i] - 1]`, or `text[n-1]` for the one
/// row where `sa_scratch[i] == 0` (the rotation equal to `text` itself).
/// Returns the 1-based primary index: the row of the sorted rotation
/// matrix equal to `text`, matching the distilled algorithm's own
/// indexing convention. For `n <= 1`, returns `n` directly.
///
/// `sa_scratch` must hold at least `text.len()` entries; as with the
/// crate-root `sa` function, any extra trailing capacity is the caller's
/// `fs` slack and is ignored.
pub fn bwt<Idx: SaIndex + Symbol>(
    text: &[u8],
    u: &mut [u8],
    sa_scratch: &mut [Idx],
    freq: Option<&mut [Idx]>,
) -> Result<Idx> {
    let n = text.len();
    if u.len() != n {
        return Err(Error::BadArgument("u buffer must have text.len() entries"));
    }
    if sa_scratch.len() < n {
        return Err(Error::BadArgument("sa_scratch buffer must hold at least text.len() entries"));
    }

    if n <= 1 {
        if n == 1 {
            u[0] = text[0];
        }
        return Ok(Idx::from_usize(n));
    }

    construct::run(text, BYTE_ALPHABET, sa_scratch, freq)?;
    gather(text, &sa_scratch[..n], u);

    let primary = sa_scratch[..n]
        .iter()
        .position(|&p| p.to_usize() == 0)
        .expect("sa_scratch is a permutation of 0..n, so 0 always appears");

    Ok(Idx::from_usize(primary + 1))
}

/// As [`bwt`], additionally sampling every `r`-th suffix array entry into
/// `aux` (`r` a power of two), so a partial inversion can later resume
/// from a nearby sample instead of from the primary index alone. `aux`
/// must have length `(n - 1) / r + 1`.
pub fn bwt_aux<Idx: SaIndex + Symbol>(
    text: &[u8],
    u: &mut [u8],
    sa_scratch: &mut [Idx],
    freq: Option<&mut [Idx]>,
    r: usize,
    aux: &mut [Idx],
) -> Result<()> {
    let n = text.len();
    if r == 0 || !r.is_power_of_two() {
        return Err(Error::BadArgument("sampling rate r must be a power of two"));
    }
    let expected_aux_len = if n == 0 { 1 } else { (n - 1) / r + 1 };
    if aux.len() != expected_aux_len {
        return Err(Error::BadArgument("aux buffer has the wrong length for r"));
    }
    if u.len() != n {
        return Err(Error::BadArgument("u buffer must have text.len() entries"));
    }
    if sa_scratch.len() < n {
        return Err(Error::BadArgument("sa_scratch buffer must hold at least text.len() entries"));
    }

    if n <= 1 {
        if n == 1 {
            u[0] = text[0];
            aux[0] = Idx::from_usize(0);
        }
        return Ok(());
    }

    construct::run(text, BYTE_ALPHABET, sa_scratch, freq)?;
    gather(text, &sa_scratch[..n], u);

    for (k, slot) in aux.iter_mut().enumerate() {
        *slot = sa_scratch[k * r];
    }

    Ok(())
}

#[cfg(feature = "parallel")]
fn gather<Idx: SaIndex>(text: &[u8], sa: &[Idx], u: &mut [u8]) {
    crate::parallel::bwt_copy(text, sa, u);
}

#[cfg(not(feature = "parallel"))]
fn gather<Idx: SaIndex>(text: &[u8], sa: &[Idx], u: &mut [u8]) {
    let n = text.len();
    for (i, &p) in sa.iter().enumerate() {
        let p = p.to_usize();
        u[i] = if p == 0 { text[n - 1] } else { text[p - 1] };
    }
}

/// Cumulative symbol counts and the "rank within symbol" of every
/// position of `u`, combined into one `LF[i] = C[u[i]] + rank(i)` table
/// in a single left-to-right pass (§4.8).
fn build_lf(u: &[u8], freq: &[usize; BYTE_ALPHABET]) -> Vec<usize> {
    let mut c = [0usize; BYTE_ALPHABET];
    let mut acc = 0;
    for (slot, &count) in c.iter_mut().zip(freq.iter()) {
        *slot = acc;
        acc += count;
    }

    let mut seen = [0usize; BYTE_ALPHABET];
    let mut lf = vec![0usize; u.len()];
    for (i, &byte) in u.iter().enumerate() {
        let b = byte as usize;
        lf[i] = c[b] + seen[b];
        seen[b] += 1;
    }
    lf
}

/// Invert a BWT string back into `text`, via LF-mapping chased backward
/// from `primary_index` for `n` steps. `freq`, if supplied, must hold the
/// per-symbol occurrence counts of `u` (as produced by [`bwt`]'s own
/// `freq` output); otherwise it is recomputed from `u`.
pub fn unbwt<Idx: SaIndex>(
    u: &[u8],
    text: &mut [u8],
    freq: Option<&[Idx]>,
    primary_index: Idx,
) -> Result<()> {
    let n = u.len();
    if text.len() != n {
        return Err(Error::BadArgument("text buffer must have u.len() entries"));
    }

    if n <= 1 {
        if n == 1 {
            text[0] = u[0];
        }
        return Ok(());
    }

    let mut counts = [0usize; BYTE_ALPHABET];
    match freq {
        Some(f) => {
            for (slot, &count) in counts.iter_mut().zip(f.iter()) {
                *slot = count.to_usize();
            }
        }
        None => {
            for &byte in u {
                counts[byte as usize] += 1;
            }
        }
    }

    let lf = build_lf(u, &counts);

    let primary = primary_index.to_usize();
    debug_assert!(primary >= 1 && primary <= n, "primary index out of range");
    let mut next = primary - 1;
    for k in (0..n).rev() {
        text[k] = u[next];
        next = lf[next];
    }

    Ok(())
}

/// As [`unbwt`], validating the `r`/`aux` sampling parameters used by
/// [`bwt_aux`]. The current implementation still performs a full
/// `O(n)` LF chase: `aux` is accepted and validated so callers can
/// persist it alongside `u` instead of a full suffix array, but this
/// crate does not yet expose a sub-range decode entry point that would
/// exploit it to skip work.
pub fn unbwt_aux<Idx: SaIndex>(
    u: &[u8],
    text: &mut [u8],
    freq: Option<&[Idx]>,
    primary_index: Idx,
    r: usize,
    aux: &[Idx],
) -> Result<()> {
    let n = u.len();
    if r == 0 || !r.is_power_of_two() {
        return Err(Error::BadArgument("sampling rate r must be a power of two"));
    }
    let expected_aux_len = if n == 0 { 1 } else { (n - 1) / r + 1 };
    if aux.len() != expected_aux_len {
        return Err(Error::BadArgument("aux buffer has the wrong length for r"));
    }

    unbwt(u, text, freq, primary_index)
}
