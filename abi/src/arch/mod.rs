//! Architecture-specific definitions.
//!
//! The meaning of the hardware-capability value words (`AT_HWCAP`,
//! `AT_HWCAP2`) is defined per architecture. Each supported architecture
//! contributes typed bitflag views; the active one is re-exported at arch
//! level for convenience.

#[cfg(target_arch = "aarch64")]
pub mod aarch64;
#[cfg(target_arch = "x86_64")]
pub mod x86_64;

#[cfg(target_arch = "aarch64")]
pub use aarch64::*;
#[cfg(target_arch = "x86_64")]
pub use x86_64::*;
