//! Discovery, decoding, and in-place mutation of the current process's
//! ELF auxiliary vector.
//!
//! The kernel places the auxiliary vector on the initial stack during
//! exec(), immediately after the null terminator of the environment
//! pointer array. There is no portable accessor for it, so this crate
//! derives its address by chasing the process-wide `environ` anchor
//! ([`locate`]), validates the sequence up to its `AT_NULL` terminator
//! ([`AuxVector`]), classifies the raw keys ([`AuxKey`]), and allows the
//! value word of an existing entry to be overwritten in place
//! ([`AuxVector::set`]).
//!
//! Reads never copy or reallocate anything: the vector lives in kernel-
//! established memory for the whole process lifetime, and every iteration
//! re-reads it where it sits.
//!
//! # Concurrency
//!
//! This crate provides no synchronization. The vector region is shared by
//! the whole process; if an application mutates entries from multiple
//! threads, or mutates while another thread iterates, it must serialize
//! all calls into this crate behind its own lock. Unsynchronized
//! concurrent access is governed solely by the memory model; the crate
//! cannot detect or repair a torn view. Pointer stability is the one
//! guarantee that survives regardless: the kernel never relocates the
//! vector.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod classify;
pub mod error;
pub mod locate;
pub mod view;

mod mutate;
mod probe;
mod raw;

#[cfg(test)]
mod classify_tests;
#[cfg(test)]
mod mutate_tests;

pub use classify::{AuxKey, AuxValue, ValueKind};
pub use error::{AuxvError, AuxvResult};
pub use locate::{ENVIRON_SCAN_MAX, RawVectorBase, locate};
pub use view::{AuxVector, ENTRY_SCAN_MAX, Entries, EntrySlot};
