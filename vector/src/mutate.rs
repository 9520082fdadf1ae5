//! Mutator: in-place overwrite of entry value words.
//!
//! The vector's byte length was fixed by the kernel at process start and
//! the surrounding memory is not ours, so mutation is strictly limited to
//! rewriting the value word of an entry that already exists. Keys,
//! positions, and the terminator are immutable. The intended uses are
//! narrow: clearing the `AT_SECURE` flag or substituting a page-size hint
//! before handing control to a nested interpreter that re-reads the
//! vector. It is not general vector editing.

use stackaux_abi::auxv::{ENTRY_SIZE, WORD_SIZE};

use crate::classify::AuxKey;
use crate::error::{AuxvError, AuxvResult};
use crate::raw;
use crate::view::{AuxVector, EntrySlot};

impl AuxVector {
    /// Overwrite the value word of `slot` with `new_value`, returning the
    /// value that was there.
    ///
    /// The slot's address is checked against the span validated at view
    /// construction before anything is written: addresses outside
    /// `[base, end)` or off an entry boundary are rejected with
    /// [`AuxvError::InvalidMutationTarget`] and memory is left untouched.
    /// The next iteration observes the new value.
    ///
    /// # Safety
    ///
    /// The slot must come from a live iteration of *this* view over the
    /// current process's own vector; a handle minted against another
    /// process, or kept across an exec, is undefined behavior the range
    /// check cannot catch. The underlying mapping must be writable; a
    /// protection fault on the store is not interceptable from here.
    /// Concurrent access must be serialized by the caller.
    pub unsafe fn set(&self, slot: EntrySlot, new_value: usize) -> AuxvResult<usize> {
        let addr = slot.addr();
        if addr < self.base() || addr >= self.end() || (addr - self.base()) % ENTRY_SIZE != 0 {
            return Err(AuxvError::InvalidMutationTarget { addr });
        }

        let value_addr = addr + WORD_SIZE;
        // SAFETY: value_addr lies inside the validated span; caller
        // guarantees writability and exclusive access.
        let previous = unsafe { raw::word_at(value_addr) };
        unsafe { raw::write_word(value_addr, new_value) };
        log::debug!(
            "auxv entry at 0x{:x}: value 0x{:x} -> 0x{:x}",
            addr,
            previous,
            new_value
        );
        Ok(previous)
    }

    /// Overwrite the value of the first entry matching `key`.
    ///
    /// Returns the previous value, or `Ok(None)` if the vector carries no
    /// such entry. Absence is not an error; the kernel decides which
    /// keys a process gets.
    ///
    /// # Safety
    ///
    /// Same contract as [`AuxVector::set`].
    pub unsafe fn set_by_key(&self, key: AuxKey, new_value: usize) -> AuxvResult<Option<usize>> {
        match self.entries().find(|slot| slot.raw_key() == key.raw()) {
            // SAFETY: the slot was just produced by this view's own
            // iteration; the caller's contract covers the rest.
            Some(slot) => unsafe { self.set(slot, new_value) }.map(Some),
            None => {
                log::debug!("auxv has no {} entry to patch", key);
                Ok(None)
            }
        }
    }
}
