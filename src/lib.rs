//! Linear-time, low-memory suffix array construction (SA-IS), with BWT
//! and LCP array derivation, over byte, 16-bit and integer alphabets.
//!
//! The construction core (`construct`) is a single generic pipeline
//! parameterized by the text's [`Symbol`] type and the caller's chosen
//! [`SaIndex`] output width; [`sa`], [`sa_u16`], [`gsa::sa_gsa`],
//! [`gsa::sa_u16_gsa`] and [`int_alphabet::sa_long`] are thin entry
//! points into it. [`bwt`] and [`lcp`] build derived products on top of
//! the same pipeline.

mod alphabet;
mod bucket;
mod construct;
pub mod error;
pub mod gsa;
pub mod int_alphabet;
pub mod lcp;
#[cfg(feature = "pack")]
pub mod packed_sa;
#[cfg(feature = "parallel")]
mod parallel;
pub mod sa;
mod sa_index;
mod types;

pub mod bwt;


pub use alphabet::{Symbol, BYTE_ALPHABET, U16_ALPHABET};
pub use bwt::{bwt, bwt_aux, unbwt, unbwt_aux};
pub use error::{Error, Result};
pub use gsa::{sa_gsa, sa_u16_gsa};
pub use int_alphabet::sa_long;
pub use lcp::{lcp, plcp, plcp_gsa};
pub use sa::SuffixArray;
pub use sa_index::SaIndex;

/// Compute the suffix array of a byte text.
///
/// `sa` must have at least `text.len()` entries; any entries beyond that
/// are the distilled spec's `fs` slack (§3 of SPEC_FULL.md) and are left
/// untouched. If `freq` is supplied, `freq[c]` receives the number of
/// occurrences of byte `c`, for every `c` in `0..256`.
pub fn sa<Idx: SaIndex + Symbol>(
    text: &[u8],
    sa: &mut [Idx],
    freq: Option<&mut [Idx]>,
) -> Result<()> {
    construct::run(text, BYTE_ALPHABET, sa, freq)
}

/// As [`sa`], for a 16-bit symbol text. `freq`, if supplied, has
/// `65536` entries.
pub fn sa_u16<Idx: SaIndex + Symbol>(
    text: &[u16],
    sa: &mut [Idx],
    freq: Option<&mut [Idx]>,
) -> Result<()> {
    construct::run(text, U16_ALPHABET, sa, freq)
}
