//! Generalized-suffix-array entry point: a `0`-separated concatenation of
//! several strings, suffix-sorted by the very same byte-path core (§3,
//! §4.3 — no dedicated GSA algorithm is needed, since `0` is already the
//! smallest symbol and therefore naturally sorts every separator-led
//! suffix ahead of any suffix with real content).

use crate::alphabet::{Symbol, BYTE_ALPHABET, U16_ALPHABET};
use crate::construct;
use crate::error::{Error, Result};
use crate::sa_index::SaIndex;

/// Compute the generalized suffix array of `text`, which must end in a
/// `0` separator (unless `text` is empty). As with the crate-root `sa`
/// function, `sa` may be longer than `text`; the extra tail is the
/// caller's `fs` slack and is left untouched.
pub fn sa_gsa<Idx: SaIndex + Symbol>(
    text: &[u8],
    sa: &mut [Idx],
    freq: Option<&mut [Idx]>,
) -> Result<()> {
    if !text.is_empty() && *text.last().unwrap() != 0 {
        return Err(Error::BadArgument("gsa text must end in a 0 separator"));
    }

    construct::run(text, BYTE_ALPHABET, sa, freq)
}

/// As [`sa_gsa`], for a 16-bit symbol text: `text` must end in a `0`
/// separator (unless empty), and `freq`, if supplied, has `65536`
/// entries.
pub fn sa_u16_gsa<Idx: SaIndex + Symbol>(
    text: &[u16],
    sa: &mut [Idx],
    freq: Option<&mut [Idx]>,
) -> Result<()> {
    if !text.is_empty() && *text.last().unwrap() != 0 {
        return Err(Error::BadArgument("gsa text must end in a 0 separator"));
    }

    construct::run(text, U16_ALPHABET, sa, freq)
}
