//! `rayon`-backed parallel variants of the construction pipeline's
//! embarrassingly-parallel phases (feature `parallel`, §5 of SPEC_FULL).
//!
//! The induction scanner itself is never parallelized here: its
//! correctness depends on in-place read/write ordering within a bucket
//! that doesn't decompose into independent chunks.

use rayon::prelude::*;

/// Histogram accumulation, chunked across `rayon`'s thread pool: each
/// chunk builds its own local histogram, then all chunks are summed
/// into one (a single reduction barrier).
pub fn histogram<T: Copy + Into<u64>>(s: &[T], scale: usize) -> Vec<u32> {
    let chunk_len = (s.len() / rayon::current_num_threads().max(1)).max(1);

    s.par_chunks(chunk_len)
        .map(|chunk| {
            let mut local = vec![0u32; scale];
            for &c in chunk {
                local[c.into() as usize] += 1;
            }
            local
        })
        .reduce(
            || vec![0u32; scale],
            |mut a, b| {
                for (x, y) in a.iter_mut().zip(b.iter()) {
                    *x += y;
                }
                a
            },
        )
}

/// Gather `u[1..]` from `T[sa[i] - 1]` (or `T[n-1]` for `sa[i] == 0`) over
/// equal-stride chunks — the BWT copy phase (§4.8), a pure element-wise
/// map over already-known indices.
pub fn bwt_copy<Idx: crate::sa_index::SaIndex>(text: &[u8], sa: &[Idx], out: &mut [u8]) {
    let n = text.len();
    out.par_iter_mut().zip(sa.par_iter()).for_each(|(o, &p)| {
        let p = p.to_usize();
        *o = if p == 0 { text[n - 1] } else { text[p - 1] };
    });
}
