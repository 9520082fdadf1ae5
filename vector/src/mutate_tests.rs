//! Tests for in-place mutation: round-trips, bounds rejection, patching
//! by key.

use std::vec::Vec;

use stackaux_abi::auxv::{AT_CLKTCK, AT_NULL, AT_PAGESZ, AT_SECURE, AuxEntry, WORD_SIZE};

use crate::classify::AuxKey;
use crate::error::AuxvError;
use crate::locate::RawVectorBase;
use crate::view::{AuxVector, EntrySlot};

// =============================================================================
// Helpers
// =============================================================================

/// Validated view over a mutable synthetic buffer.
fn view_over(buf: &mut [AuxEntry]) -> AuxVector {
    // SAFETY: the buffer is live, writable, and terminated by the caller.
    unsafe { AuxVector::from_base(RawVectorBase::new(buf.as_mut_ptr() as usize)) }
        .expect("synthetic vector is terminated")
}

fn slot_for(vector: &AuxVector, key: AuxKey) -> EntrySlot {
    vector
        .entries()
        .find(|slot| slot.key() == key)
        .expect("key is present in the synthetic vector")
}

// =============================================================================
// Round-trip
// =============================================================================

#[test]
fn set_overwrites_value_and_returns_previous() {
    let mut buf = [
        AuxEntry::new(AT_SECURE, 1),
        AuxEntry::new(AT_PAGESZ, 4096),
        AuxEntry::new(AT_NULL, 0),
    ];
    let vector = view_over(&mut buf);

    let slot = slot_for(&vector, AuxKey::Secure);
    // SAFETY: the slot came from this view's own iteration.
    let previous = unsafe { vector.set(slot, 0) }.expect("slot is in bounds");
    assert_eq!(previous, 1);
    assert_eq!(vector.lookup(AuxKey::Secure), Some(0));
}

#[test]
fn mutation_preserves_every_other_entry() {
    let mut buf = [
        AuxEntry::new(AT_SECURE, 1),
        AuxEntry::new(AT_PAGESZ, 4096),
        AuxEntry::new(AT_CLKTCK, 100),
        AuxEntry::new(AT_NULL, 0),
    ];
    let vector = view_over(&mut buf);

    let slot = slot_for(&vector, AuxKey::PageSize);
    // SAFETY: the slot came from this view's own iteration.
    unsafe { vector.set(slot, 8192) }.expect("slot is in bounds");

    let after: Vec<(usize, usize)> = vector.entries_raw().collect();
    assert_eq!(
        after,
        [(AT_SECURE, 1), (AT_PAGESZ, 8192), (AT_CLKTCK, 100)]
    );
}

#[test]
fn mutation_is_visible_to_subsequent_iteration() {
    let mut buf = [AuxEntry::new(AT_CLKTCK, 100), AuxEntry::new(AT_NULL, 0)];
    let vector = view_over(&mut buf);

    let before = slot_for(&vector, AuxKey::ClockTick);
    // SAFETY: the slot came from this view's own iteration.
    unsafe { vector.set(before, 250) }.expect("slot is in bounds");

    let reread = slot_for(&vector, AuxKey::ClockTick);
    assert_eq!(reread.value(), 250);
    assert_eq!(reread.addr(), before.addr());
}

// =============================================================================
// Rejection before write
// =============================================================================

#[test]
fn set_rejects_slot_from_another_vector() {
    let mut victim = [AuxEntry::new(AT_PAGESZ, 4096), AuxEntry::new(AT_NULL, 0)];
    let mut other = [AuxEntry::new(AT_PAGESZ, 4096), AuxEntry::new(AT_NULL, 0)];
    let victim_view = view_over(&mut victim);
    let other_view = view_over(&mut other);

    let foreign = slot_for(&other_view, AuxKey::PageSize);
    // SAFETY: the address range check is the behavior under test; the
    // write is rejected before it happens.
    let result = unsafe { victim_view.set(foreign, 1) };
    assert_eq!(
        result,
        Err(AuxvError::InvalidMutationTarget {
            addr: foreign.addr()
        })
    );

    // Neither vector was touched.
    assert_eq!(victim_view.lookup(AuxKey::PageSize), Some(4096));
    assert_eq!(other_view.lookup(AuxKey::PageSize), Some(4096));
}

#[test]
fn set_rejects_misaligned_slot() {
    // A second view shifted by one word produces slots that land inside
    // the first view's span but off its entry grid.
    let mut buf = [
        AuxEntry::new(AT_CLKTCK, 100),
        AuxEntry::new(AT_PAGESZ, 4096),
        AuxEntry::new(AT_NULL, 0),
    ];
    let aligned = view_over(&mut buf);

    let shifted_base = RawVectorBase::new(aligned.base() + WORD_SIZE);
    // SAFETY: the shifted word sequence still reaches a zero key word
    // inside the buffer.
    let shifted = unsafe { AuxVector::from_base(shifted_base) }.expect("zero word terminates");

    let offgrid = shifted.entries().next().expect("shifted view has entries");
    // SAFETY: the alignment check is the behavior under test.
    let result = unsafe { aligned.set(offgrid, 1) };
    assert_eq!(
        result,
        Err(AuxvError::InvalidMutationTarget {
            addr: offgrid.addr()
        })
    );

    // The original entries are untouched.
    assert_eq!(aligned.lookup(AuxKey::ClockTick), Some(100));
    assert_eq!(aligned.lookup(AuxKey::PageSize), Some(4096));
}

// =============================================================================
// Patch by key
// =============================================================================

#[test]
fn set_by_key_clears_the_secure_flag() {
    let mut buf = [
        AuxEntry::new(AT_PAGESZ, 4096),
        AuxEntry::new(AT_SECURE, 1),
        AuxEntry::new(AT_NULL, 0),
    ];
    let vector = view_over(&mut buf);

    // SAFETY: the view owns a live synthetic vector.
    let previous = unsafe { vector.set_by_key(AuxKey::Secure, 0) }.expect("slot is in bounds");
    assert_eq!(previous, Some(1));
    assert_eq!(vector.lookup(AuxKey::Secure), Some(0));
}

#[test]
fn set_by_key_without_the_key_is_not_an_error() {
    let mut buf = [AuxEntry::new(AT_PAGESZ, 4096), AuxEntry::new(AT_NULL, 0)];
    let vector = view_over(&mut buf);

    // SAFETY: the view owns a live synthetic vector.
    let previous = unsafe { vector.set_by_key(AuxKey::Secure, 0) }.expect("nothing to write");
    assert_eq!(previous, None);
    assert_eq!(vector.entries().count(), 1);
}
