//! The single unsafe memory-access primitive.
//!
//! Every raw read or write the crate performs goes through this module so
//! the unsafe surface stays in one auditable place. All accesses are
//! volatile: the vector is plain already-mapped memory, but its values can
//! be changed underneath us by the mutation layer (or by another thread
//! the application failed to serialize), and nothing here may be cached
//! by the compiler beyond the point of read.

use core::ptr;

/// Read one machine word at `addr`.
///
/// # Safety
///
/// `addr` must be word-aligned and mapped readable for the full word.
pub(crate) unsafe fn word_at(addr: usize) -> usize {
    unsafe { ptr::read_volatile(addr as *const usize) }
}

/// Read one pointer slot at `addr`.
///
/// # Safety
///
/// `addr` must be word-aligned and mapped readable for the full word.
pub(crate) unsafe fn pointer_at(addr: usize) -> *const u8 {
    unsafe { ptr::read_volatile(addr as *const *const u8) }
}

/// Overwrite one machine word at `addr`.
///
/// # Safety
///
/// `addr` must be word-aligned and mapped writable for the full word.
pub(crate) unsafe fn write_word(addr: usize, value: usize) {
    unsafe { ptr::write_volatile(addr as *mut usize, value) }
}
