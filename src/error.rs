use std::error;
use std::fmt;

/// Failure modes for every entry point in this crate.
///
/// Replaces the C-library convention of `{-1 bad argument, -2 allocation
/// failure, >= 0 success value}` with an explicit sum type: the success
/// payload (e.g. a BWT primary index) travels in `Ok`, and the two failure
/// kinds are distinguished by variant instead of by sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A precondition on the arguments was violated: mismatched buffer
    /// lengths, a missing GSA sentinel, a non-power-of-two sampling rate,
    /// and so on. No caller-owned buffer is written before this is
    /// returned.
    BadArgument(&'static str),

    /// The internal bucket-table allocation failed (`Vec::try_reserve`
    /// reported exhaustion rather than the global allocator aborting the
    /// process). This allocation is always taken regardless of the
    /// caller's `fs` slack; see `bucket.rs`.
    AllocFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BadArgument(reason) => write!(f, "bad argument: {}", reason),
            Error::AllocFailed => write!(f, "scratch allocation failed"),
        }
    }
}

impl error::Error for Error {}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
