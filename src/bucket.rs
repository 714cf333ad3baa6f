use crate::error::{Error, Result};
use crate::sa_index::SaIndex;

/// One symbol's bucket: the half-open range of SA reserved for suffixes
/// starting with that symbol, plus the two advancing cursors used during
/// induced sorting.
#[derive(Debug, Clone, Copy)]
struct Span {
    head: u32,
    tail: u32,
    i: u32,
    j: u32,
}

impl Span {
    const fn new() -> Span {
        Span {
            head: 0,
            tail: 0,
            i: 0,
            j: 0,
        }
    }

    #[inline]
    fn reset(&mut self) {
        self.i = self.head;
        self.j = self.tail;
    }

    #[inline]
    fn reset_front(&mut self) {
        self.i = self.head;
    }

    #[inline]
    fn reset_back(&mut self) {
        self.j = self.tail;
    }
}

/// Per-symbol bucket table: a single prefix sum over the alphabet axis,
/// reshaped into bidirectional `head`/`tail` pointers (§4.2 of SPEC_FULL).
#[derive(Debug)]
pub struct Bucket {
    spans: Vec<Span>,
}

impl Bucket {
    /// Build the bucket table from a raw per-symbol histogram. `hist[c]`
    /// must hold the number of occurrences of symbol `c`.
    ///
    /// This is the one scratch allocation the distilled spec calls out as
    /// skippable when the caller supplies enough `fs` slack (§3); this
    /// crate always takes it, sized from the alphabet rather than from the
    /// text, so it is small and `try_reserve`'d rather than left to abort
    /// the process on exhaustion.
    pub fn from_histogram(hist: &[u32]) -> Result<Bucket> {
        let mut spans = Vec::new();
        spans
            .try_reserve_exact(hist.len())
            .map_err(|_| Error::AllocFailed)?;
        spans.resize(hist.len(), Span::new());

        let mut offset: u32 = 0;
        for (c, sp) in spans.iter_mut().enumerate() {
            sp.head = offset;
            offset += hist[c];
            sp.tail = offset;
            sp.reset();
        }
        Ok(Bucket { spans })
    }

    /// Count occurrences of every symbol in `s` and build the table in
    /// one pass.
    pub fn calculate<T: Copy + Into<u64>>(s: &[T], scale: usize) -> Result<Bucket> {
        Bucket::from_histogram(&raw_histogram(s, scale)?)
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Write `value` at the advancing head of bucket `c` (used by the
    /// L-suffix induction pass), then advance the head pointer.
    #[inline]
    pub fn push_front<Idx: SaIndex>(&mut self, sa: &mut [Idx], c: usize, value: usize) {
        let sp = &mut self.spans[c];
        sa[sp.i as usize] = Idx::from_usize(value);
        sp.i += 1;
    }

    /// Decrement the advancing tail of bucket `c` and write `value` there
    /// (used by the S-suffix induction pass and by LMS radix placement).
    #[inline]
    pub fn push_back<Idx: SaIndex>(&mut self, sa: &mut [Idx], c: usize, value: usize) {
        let sp = &mut self.spans[c];
        sp.j -= 1;
        sa[sp.j as usize] = Idx::from_usize(value);
    }

    #[inline]
    pub fn head(&self, c: usize) -> usize {
        self.spans[c].head as usize
    }

    #[inline]
    pub fn tail(&self, c: usize) -> usize {
        self.spans[c].tail as usize
    }

    #[inline]
    pub fn front(&self, c: usize) -> usize {
        self.spans[c].i as usize
    }

    #[inline]
    pub fn back(&self, c: usize) -> usize {
        self.spans[c].j as usize
    }

    pub fn reset_front_all(&mut self) {
        self.spans.iter_mut().for_each(Span::reset_front);
    }

    pub fn reset_back_all(&mut self) {
        self.spans.iter_mut().for_each(Span::reset_back);
    }

    pub fn reset_all(&mut self) {
        self.spans.iter_mut().for_each(Span::reset);
    }
}

/// Raw per-symbol counts, sequential or `rayon`-chunked depending on the
/// `parallel` feature (§5: histogram accumulation is embarrassingly
/// parallel — split, accumulate per chunk, sum the per-chunk histograms).
fn raw_histogram<T: Copy + Into<u64>>(s: &[T], scale: usize) -> Result<Vec<u32>> {
    #[cfg(feature = "parallel")]
    {
        // rayon's chunked reduction manages its own transient buffers;
        // only the serial path's single scale-sized allocation is routed
        // through `try_reserve`.
        Ok(crate::parallel::histogram(s, scale))
    }
    #[cfg(not(feature = "parallel"))]
    {
        let mut hist = Vec::new();
        hist.try_reserve_exact(scale).map_err(|_| Error::AllocFailed)?;
        hist.resize(scale, 0u32);
        for &c in s {
            hist[c.into() as usize] += 1;
        }
        Ok(hist)
    }
}

/// Count occurrences of every symbol of `s` into `freq[0..scale]`, the
/// same histogram the bucket table is built from. Exposed separately so
/// callers can request the frequency table without recomputing it (§6,
/// "requesting it is free").
pub fn histogram<T, Idx>(s: &[T], scale: usize, freq: &mut [Idx]) -> Result<()>
where
    T: Copy + Into<u64>,
    Idx: SaIndex,
{
    assert!(freq.len() >= scale);
    let hist = raw_histogram(s, scale)?;
    for (c, &count) in hist.iter().enumerate() {
        freq[c] = Idx::from_usize(count as usize);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_cover_text_length_with_no_gaps() {
        let s = &b"banana"[..];
        let bkt = Bucket::calculate(s, 256).unwrap();
        let total: usize = (0..bkt.len()).map(|c| bkt.tail(c) - bkt.head(c)).sum();
        assert_eq!(total, s.len());

        // 'a' (3 occurrences) sorts before 'b' (1) before 'n' (2).
        let a = b'a' as usize;
        let b = b'b' as usize;
        let n = b'n' as usize;
        assert_eq!(bkt.tail(a) - bkt.head(a), 3);
        assert_eq!(bkt.tail(b) - bkt.head(b), 1);
        assert_eq!(bkt.tail(n) - bkt.head(n), 2);
        assert!(bkt.head(a) < bkt.head(b));
        assert!(bkt.head(b) < bkt.head(n));
    }

    #[test]
    fn push_front_and_push_back_advance_toward_each_other() {
        let mut bkt = Bucket::from_histogram(&[3]).unwrap();
        let mut sa = vec![u32::MAX; 3];

        bkt.push_front(&mut sa[..], 0, 10);
        bkt.push_back(&mut sa[..], 0, 20);
        bkt.push_front(&mut sa[..], 0, 30);

        assert_eq!(sa, [10, 30, 20]);
        assert_eq!(bkt.front(0), 2);
        assert_eq!(bkt.back(0), 2);
    }

    #[test]
    fn reset_restores_cursors_to_head_and_tail() {
        let mut bkt = Bucket::from_histogram(&[2, 2]).unwrap();
        let mut sa = vec![0u32; 4];
        bkt.push_front(&mut sa[..], 0, 1);
        bkt.push_back(&mut sa[..], 1, 2);

        bkt.reset_all();
        assert_eq!(bkt.front(0), bkt.head(0));
        assert_eq!(bkt.back(1), bkt.tail(1));
    }

    #[test]
    fn histogram_matches_manual_counts() {
        let s = &b"mississippi"[..];
        let mut freq = [0u32; 256];
        histogram(s, 256, &mut freq).unwrap();
        assert_eq!(freq[b'm' as usize], 1);
        assert_eq!(freq[b'i' as usize], 4);
        assert_eq!(freq[b's' as usize], 4);
        assert_eq!(freq[b'p' as usize], 2);
    }
}
