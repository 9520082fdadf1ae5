//! ELF Auxiliary Vector ABI Types
//!
//! This crate provides the canonical definitions for the auxiliary vector
//! layout the kernel establishes on the initial process stack. Having a
//! single source of truth eliminates:
//! - Duplicate key-constant definitions
//! - Mismatches between the decoder and the mutation layer
//! - The need for unsafe FFI conversions
//!
//! All types in this crate are `#[repr(C)]` for ABI stability.

#![no_std]
#![forbid(unsafe_code)]

pub mod arch;
pub mod auxv;

pub use auxv::*;
