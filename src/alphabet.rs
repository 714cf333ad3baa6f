/// A symbol type a text may be built from.
///
/// Bounding the construction pipeline by this trait instead of
/// monomorphizing separate `u8`/`u16`/`u32` implementations is what
/// collapses the near-duplicate byte/16-bit/integer code paths into one
/// generic core.
pub trait Symbol: Copy + Ord + Into<u64> + 'static {
    /// The symbol value zero (used for GSA separators and sentinels).
    fn zero() -> Self;

    /// Widen to `usize` for use as a bucket/histogram index.
    #[inline]
    fn as_usize(self) -> usize {
        self.into() as usize
    }
}

impl Symbol for u8 {
    #[inline]
    fn zero() -> u8 {
        0
    }
}

impl Symbol for u16 {
    #[inline]
    fn zero() -> u16 {
        0
    }
}

impl Symbol for u32 {
    #[inline]
    fn zero() -> u32 {
        0
    }
}

impl Symbol for u64 {
    #[inline]
    fn zero() -> u64 {
        0
    }
}

/// Alphabet size for the fixed-width byte path.
pub const BYTE_ALPHABET: usize = 256;

/// Alphabet size for the fixed-width 16-bit path.
pub const U16_ALPHABET: usize = 65536;
