//! Vector view: validated decode, iteration, and lookup.
//!
//! A view is created by scanning from the base address to the `AT_NULL`
//! terminator once, within a bounded distance. The scan establishes the
//! span `[base, end)` that iteration and mutation are confined to; the
//! entries themselves are re-read from live memory on every pass, so a
//! mutated value is visible to the next iteration without any cache
//! invalidation.

use core::mem;

use spin::Once;

use stackaux_abi::auxv::{AT_NULL, AuxEntry, WORD_SIZE};

use crate::classify::{AuxKey, AuxValue};
use crate::error::{AuxvError, AuxvResult};
use crate::locate::{self, RawVectorBase};
use crate::raw;

/// Upper bound on entries scanned while validating a vector. Kernels
/// today emit a few dozen entries; dynamic loaders commonly cap at 64.
pub const ENTRY_SCAN_MAX: usize = 512;

/// A validated view over a live auxiliary vector.
///
/// The view holds only the span bounds, never decoded values, so it is
/// trivially copyable and every read goes to the underlying memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuxVector {
    /// Address of the first entry.
    base: usize,
    /// Address of the terminator entry. Entries are yielded from
    /// `[base, end)`; the terminator itself is excluded.
    end: usize,
}

static CURRENT: Once<AuxvResult<AuxVector>> = Once::new();

impl AuxVector {
    /// View over the current process's own vector.
    ///
    /// Locates the base via [`locate::locate`] and validates the
    /// terminator once; the result is cached for the process lifetime
    /// because the kernel never relocates or resizes the region.
    ///
    /// # Errors
    ///
    /// Everything [`locate::locate`] reports, plus
    /// [`AuxvError::TerminatorNotFound`] if no `AT_NULL` entry shows up
    /// within [`ENTRY_SCAN_MAX`] entries.
    pub fn current() -> AuxvResult<Self> {
        *CURRENT.call_once(|| {
            let base = locate::locate()?;
            // SAFETY: the base was derived from the kernel-established
            // startup layout, which guarantees a terminated entry
            // sequence at that address.
            unsafe { Self::from_base(base) }
        })
    }

    /// View over a vector at a caller-supplied base.
    ///
    /// This is the seam for hosting runtimes that still hold the initial
    /// stack pointer, and for synthetic in-memory vectors in tests. The
    /// same bounded terminator validation runs before the view is
    /// returned.
    ///
    /// # Safety
    ///
    /// `base` must address a readable sequence of `(key, value)` word
    /// pairs terminated by an `AT_NULL` key within [`ENTRY_SCAN_MAX`]
    /// entries, and the memory must stay mapped for the lifetime of the
    /// view and every handle derived from it.
    ///
    /// # Errors
    ///
    /// [`AuxvError::TerminatorNotFound`] if the bounded scan never hits
    /// an `AT_NULL` key.
    pub unsafe fn from_base(base: RawVectorBase) -> AuxvResult<Self> {
        let start = base.addr();
        let mut addr = start;
        for _ in 0..ENTRY_SCAN_MAX {
            // SAFETY: caller guarantees readability up to the terminator.
            if unsafe { raw::word_at(addr) } == AT_NULL {
                let vector = Self {
                    base: start,
                    end: addr,
                };
                log::debug!(
                    "auxiliary vector: {} entries at 0x{:x}",
                    vector.len(),
                    start
                );
                return Ok(vector);
            }
            addr += mem::size_of::<AuxEntry>();
        }

        Err(AuxvError::TerminatorNotFound {
            scanned: ENTRY_SCAN_MAX,
        })
    }

    /// Iterate the entries in kernel layout order.
    ///
    /// Lazy and restartable: each call starts over at the base and
    /// re-reads memory, so values written through [`set`] are observed by
    /// the next pass. The terminator is never yielded.
    ///
    /// [`set`]: AuxVector::set
    pub fn entries(&self) -> Entries {
        Entries {
            cursor: self.base,
            end: self.end,
        }
    }

    /// Iterate raw `(key, value)` word pairs, for callers doing their own
    /// classification.
    pub fn entries_raw(&self) -> impl Iterator<Item = (usize, usize)> {
        self.entries().map(|slot| (slot.raw_key(), slot.value()))
    }

    /// Value word of the first entry matching `key`, if present.
    pub fn lookup(&self, key: AuxKey) -> Option<usize> {
        self.lookup_raw(key.raw())
    }

    /// Value word of the first entry with the raw key `raw_key`.
    ///
    /// The terminator is not an entry; looking up `AT_NULL` yields
    /// `None`.
    pub fn lookup_raw(&self, raw_key: usize) -> Option<usize> {
        self.entries()
            .find(|slot| slot.raw_key() == raw_key)
            .map(|slot| slot.value())
    }

    /// Number of entries between base and terminator at validation time.
    pub fn len(&self) -> usize {
        (self.end - self.base) / mem::size_of::<AuxEntry>()
    }

    /// Whether the vector has no entries at all (terminator first).
    pub fn is_empty(&self) -> bool {
        self.end == self.base
    }

    /// Address of the first entry.
    pub const fn base(&self) -> usize {
        self.base
    }

    /// Address of the terminator entry (exclusive bound of the span).
    pub const fn end(&self) -> usize {
        self.end
    }
}

// =============================================================================
// Entry handles
// =============================================================================

/// One decoded entry: a `(key, value)` snapshot plus the address it was
/// read from.
///
/// The address is what makes the slot usable as a mutation handle; the
/// snapshot is exactly that: a later read through [`AuxVector::entries`]
/// may observe a different value if the entry was mutated in between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntrySlot {
    addr: usize,
    key: usize,
    value: usize,
}

impl EntrySlot {
    /// The classified key.
    pub fn key(&self) -> AuxKey {
        AuxKey::from_raw(self.key)
    }

    /// The raw integer key word.
    pub const fn raw_key(&self) -> usize {
        self.key
    }

    /// The value word as read.
    pub const fn value(&self) -> usize {
        self.value
    }

    /// The value wrapped per the key's declared interpretation.
    pub fn interpreted(&self) -> AuxValue {
        self.key().interpret(self.value)
    }

    /// Address of the entry's key word in the live vector.
    pub const fn addr(&self) -> usize {
        self.addr
    }
}

/// Lazy iterator over the validated span. Re-reads memory on every step.
#[derive(Clone, Debug)]
pub struct Entries {
    cursor: usize,
    end: usize,
}

impl Iterator for Entries {
    type Item = EntrySlot;

    fn next(&mut self) -> Option<EntrySlot> {
        if self.cursor >= self.end {
            return None;
        }

        let addr = self.cursor;
        // SAFETY: addr lies inside the span validated at view
        // construction, which the kernel keeps mapped for the process
        // lifetime.
        let key = unsafe { raw::word_at(addr) };
        let value = unsafe { raw::word_at(addr + WORD_SIZE) };

        // A key rewritten to AT_NULL since validation still ends the
        // sequence; the terminator is never yielded.
        if key == AT_NULL {
            self.cursor = self.end;
            return None;
        }

        self.cursor = addr + mem::size_of::<AuxEntry>();
        Some(EntrySlot { addr, key, value })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end.saturating_sub(self.cursor)) / mem::size_of::<AuxEntry>();
        (0, Some(remaining))
    }
}
