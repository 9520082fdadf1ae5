//! Locator: derive the auxiliary vector base from the environment anchor.
//!
//! The kernel lays out the initial stack as
//!
//! ```text
//! [argc] [argv...] [NULL] [environ pointers...] [NULL] [auxv entries] [AT_NULL,?]
//! ```
//!
//! so the first auxiliary vector entry sits one word past the null
//! terminator of the environment pointer array. The C runtime publishes a
//! pointer to the first environment slot as the `environ` symbol; scanning
//! forward from it to the null sentinel and stepping over that slot yields
//! the vector base. The kernel never relocates the region, so the derived
//! address is valid for the whole process lifetime and is cached after the
//! first successful scan.

use spin::Once;

use stackaux_abi::auxv::WORD_SIZE;

use crate::error::{AuxvError, AuxvResult};
use crate::raw;

/// Upper bound on environment slots scanned before the array is declared
/// unterminated. Real environments are a few hundred slots at most.
pub const ENVIRON_SCAN_MAX: usize = 16 * 1024;

/// Address of the first auxiliary vector entry.
///
/// Obtained from [`locate`] (or constructed directly by a hosting runtime
/// that still holds the initial stack pointer). The address itself is just
/// a word; every dereference of it goes through the unsafe view
/// constructors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawVectorBase(usize);

impl RawVectorBase {
    /// Wrap a raw base address.
    ///
    /// Constructing the wrapper is safe; claiming the address actually is
    /// a vector base happens at [`AuxVector::from_base`], which is unsafe.
    ///
    /// [`AuxVector::from_base`]: crate::view::AuxVector::from_base
    pub const fn new(addr: usize) -> Self {
        Self(addr)
    }

    /// The raw address of the first entry.
    pub const fn addr(self) -> usize {
        self.0
    }
}

#[cfg(any(target_os = "linux", target_os = "android", target_os = "freebsd"))]
unsafe extern "C" {
    /// Null-terminated array of pointers to `"NAME=value"` strings,
    /// published by the C runtime at startup.
    #[allow(non_upper_case_globals)]
    static environ: *const *const u8;
}

static LOCATED: Once<AuxvResult<RawVectorBase>> = Once::new();

/// Locate the auxiliary vector of the current process.
///
/// Reads the `environ` anchor and scans forward to the null sentinel; the
/// slot after it is the vector base. The result (success or failure) is
/// computed once and cached for the process lifetime: a missing startup
/// symbol cannot appear later, and a found vector never moves.
///
/// # Errors
///
/// - [`AuxvError::EnvironmentUnavailable`] if the anchor is null, the
///   runtime never initialized it, or the target does not use ELF startup.
/// - [`AuxvError::TerminatorNotFound`] if no null sentinel shows up within
///   [`ENVIRON_SCAN_MAX`] slots.
pub fn locate() -> AuxvResult<RawVectorBase> {
    *LOCATED.call_once(locate_uncached)
}

#[cfg(any(target_os = "linux", target_os = "android", target_os = "freebsd"))]
fn locate_uncached() -> AuxvResult<RawVectorBase> {
    let anchor = unsafe { environ };
    // SAFETY: on ELF targets the runtime guarantees `environ` points at
    // the null-terminated environment pointer array (or is null, which
    // locate_from rejects before dereferencing anything).
    let base = unsafe { locate_from(anchor) }?;
    log::debug!("auxiliary vector located at 0x{:x}", base.addr());
    Ok(base)
}

#[cfg(not(any(target_os = "linux", target_os = "android", target_os = "freebsd")))]
fn locate_uncached() -> AuxvResult<RawVectorBase> {
    // No stable anchor symbol on this target; fail closed rather than
    // guess an address.
    Err(AuxvError::EnvironmentUnavailable)
}

/// Derive the vector base from a caller-supplied environment anchor.
///
/// This is the scan [`locate`] performs, exposed for hosting runtimes
/// that carry their own anchor instead of the C runtime's `environ`. The
/// null check happens before any dereference.
///
/// # Safety
///
/// A non-null `anchor` must point at a readable, null-terminated array of
/// pointers laid out by the kernel (or an equivalent synthetic buffer).
///
/// # Errors
///
/// Same as [`locate`].
pub unsafe fn locate_from(anchor: *const *const u8) -> AuxvResult<RawVectorBase> {
    if anchor.is_null() {
        return Err(AuxvError::EnvironmentUnavailable);
    }

    let mut slot = anchor as usize;
    for _ in 0..ENVIRON_SCAN_MAX {
        // SAFETY: caller guarantees the array is readable up to its null
        // sentinel; slots before the sentinel are valid pointer words.
        if unsafe { raw::pointer_at(slot) }.is_null() {
            return Ok(RawVectorBase(slot + WORD_SIZE));
        }
        slot += WORD_SIZE;
    }

    Err(AuxvError::TerminatorNotFound {
        scanned: ENVIRON_SCAN_MAX,
    })
}
