//! Error taxonomy for auxiliary vector operations.
//!
//! Every failure here is structural, not transient: a missing anchor or a
//! missing terminator cannot heal on retry, so nothing in this crate
//! retries internally. Errors are always returned to the caller as values.

use core::fmt;

/// Errors that can occur while locating, decoding, or mutating the
/// auxiliary vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuxvError {
    /// The environment anchor is null or was never initialized by the
    /// hosting runtime. Fatal to every further operation.
    EnvironmentUnavailable,
    /// Neither null sentinel (environment array or auxv terminator) was
    /// found within the bounded scan distance. Indicates a corrupted or
    /// non-standard startup layout. Carries the scan distance in words
    /// (environment scan) or entries (vector scan) for diagnostics.
    TerminatorNotFound { scanned: usize },
    /// A mutation handle addresses memory outside the validated vector
    /// span, or is not on an entry boundary. Rejected before any write.
    InvalidMutationTarget { addr: usize },
}

impl fmt::Display for AuxvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnvironmentUnavailable => {
                write!(f, "environment pointer array is unavailable")
            }
            Self::TerminatorNotFound { scanned } => {
                write!(f, "no null terminator within {} slots scanned", scanned)
            }
            Self::InvalidMutationTarget { addr } => {
                write!(f, "mutation target 0x{:x} is outside the live vector", addr)
            }
        }
    }
}

/// Result type for auxiliary vector operations.
pub type AuxvResult<T> = Result<T, AuxvError>;
