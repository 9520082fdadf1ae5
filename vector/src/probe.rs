//! Explicit dereference of pointer-valued entries.
//!
//! Decoding never follows pointers; these helpers are the separate,
//! clearly unsafe layer for the entries whose value word points at
//! kernel-written payloads elsewhere in the address space. Each returns
//! `None` when the key is absent; the kernel decides which entries a
//! process receives.

use core::ffi::{CStr, c_char};

use crate::classify::AuxKey;
use crate::view::AuxVector;

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
use stackaux_abi::arch::{HwCap2Flags, HwCapFlags};

impl AuxVector {
    /// The 16 kernel-supplied random bytes behind `AT_RANDOM`.
    ///
    /// # Safety
    ///
    /// The view must be over the current process's live vector (the
    /// pointer is only meaningful in this address space), and nothing may
    /// be concurrently rewriting the `AT_RANDOM` value word.
    pub unsafe fn random_bytes(&self) -> Option<&'static [u8; 16]> {
        let addr = self.lookup(AuxKey::Random)?;
        if addr == 0 {
            return None;
        }
        // SAFETY: the kernel backs AT_RANDOM with 16 readable bytes that
        // live as long as the process.
        Some(unsafe { &*(addr as *const [u8; 16]) })
    }

    /// The platform name string behind `AT_PLATFORM`.
    ///
    /// # Safety
    ///
    /// Same contract as [`AuxVector::random_bytes`].
    pub unsafe fn platform(&self) -> Option<&'static CStr> {
        // SAFETY: forwarded caller contract.
        unsafe { self.string_value(AuxKey::Platform) }
    }

    /// The real platform name string behind `AT_BASE_PLATFORM`.
    ///
    /// # Safety
    ///
    /// Same contract as [`AuxVector::random_bytes`].
    pub unsafe fn base_platform(&self) -> Option<&'static CStr> {
        // SAFETY: forwarded caller contract.
        unsafe { self.string_value(AuxKey::BasePlatform) }
    }

    /// The executable's filename behind `AT_EXECFN`.
    ///
    /// # Safety
    ///
    /// Same contract as [`AuxVector::random_bytes`].
    pub unsafe fn exec_filename(&self) -> Option<&'static CStr> {
        // SAFETY: forwarded caller contract.
        unsafe { self.string_value(AuxKey::ExecFilename) }
    }

    unsafe fn string_value(&self, key: AuxKey) -> Option<&'static CStr> {
        let addr = self.lookup(key)?;
        if addr == 0 {
            return None;
        }
        // SAFETY: the kernel backs these keys with null-terminated
        // strings that live as long as the process.
        Some(unsafe { CStr::from_ptr(addr as *const c_char) })
    }

    /// Typed view of the `AT_HWCAP` bitmask. Safe: the word itself is the
    /// payload, nothing is dereferenced. Unknown bits are retained.
    #[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
    pub fn hardware_capabilities(&self) -> Option<HwCapFlags> {
        self.lookup(AuxKey::HwCap).map(HwCapFlags::from_bits_retain)
    }

    /// Typed view of the `AT_HWCAP2` bitmask.
    #[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
    pub fn hardware_capabilities2(&self) -> Option<HwCap2Flags> {
        self.lookup(AuxKey::HwCap2)
            .map(HwCap2Flags::from_bits_retain)
    }
}
