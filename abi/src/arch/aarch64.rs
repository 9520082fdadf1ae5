//! AArch64 hardware capability words.
//!
//! On AArch64 the `AT_HWCAP` and `AT_HWCAP2` value words are bitmasks
//! defined by the kernel (asm/hwcap.h), advertising ISA extensions the CPU
//! and kernel both support.

use bitflags::bitflags;

bitflags! {
    /// `AT_HWCAP` bits.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct HwCapFlags: usize {
        /// Scalar floating point.
        const FP = 1 << 0;
        /// Advanced SIMD.
        const ASIMD = 1 << 1;
        /// Generic timer event stream.
        const EVTSTRM = 1 << 2;
        /// AES instructions.
        const AES = 1 << 3;
        /// Polynomial multiply long.
        const PMULL = 1 << 4;
        /// SHA-1 instructions.
        const SHA1 = 1 << 5;
        /// SHA-2 instructions.
        const SHA2 = 1 << 6;
        /// CRC32 instructions.
        const CRC32 = 1 << 7;
        /// Large System Extensions atomics.
        const ATOMICS = 1 << 8;
        /// Half-precision floating point.
        const FPHP = 1 << 9;
        /// Half-precision Advanced SIMD.
        const ASIMDHP = 1 << 10;
        /// Userspace access to ID registers.
        const CPUID = 1 << 11;
        /// Rounding double multiply accumulate.
        const ASIMDRDM = 1 << 12;
        /// JavaScript conversion instruction.
        const JSCVT = 1 << 13;
        /// Complex number instructions.
        const FCMA = 1 << 14;
        /// Load-acquire RCpc instructions.
        const LRCPC = 1 << 15;
        /// Data cache clean to point of persistence.
        const DCPOP = 1 << 16;
        /// SHA-3 instructions.
        const SHA3 = 1 << 17;
        /// SM3 instructions.
        const SM3 = 1 << 18;
        /// SM4 instructions.
        const SM4 = 1 << 19;
        /// SIMD dot product.
        const ASIMDDP = 1 << 20;
        /// SHA-512 instructions.
        const SHA512 = 1 << 21;
        /// Scalable Vector Extension.
        const SVE = 1 << 22;
        /// Half-precision multiply accumulate long.
        const ASIMDFHM = 1 << 23;
        /// Data Independent Timing.
        const DIT = 1 << 24;
        /// Unaligned atomics in single copy.
        const USCAT = 1 << 25;
        /// Immediate-offset load-acquire RCpc.
        const ILRCPC = 1 << 26;
        /// Condition flag manipulation.
        const FLAGM = 1 << 27;
        /// Speculative Store Bypass Safe.
        const SSBS = 1 << 28;
        /// Speculation barrier.
        const SB = 1 << 29;
        /// Address authentication.
        const PACA = 1 << 30;
        /// Generic authentication.
        const PACG = 1 << 31;
    }
}

bitflags! {
    /// `AT_HWCAP2` bits.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct HwCap2Flags: usize {
        /// Data cache clean to point of deep persistence.
        const DCPODP = 1 << 0;
        /// SVE version 2.
        const SVE2 = 1 << 1;
        /// SVE AES instructions.
        const SVEAES = 1 << 2;
        /// SVE polynomial multiply long.
        const SVEPMULL = 1 << 3;
        /// SVE bit permute.
        const SVEBITPERM = 1 << 4;
        /// SVE SHA-3 instructions.
        const SVESHA3 = 1 << 5;
        /// SVE SM4 instructions.
        const SVESM4 = 1 << 6;
        /// Condition flag manipulation v2.
        const FLAGM2 = 1 << 7;
        /// FRINT32/FRINT64 instructions.
        const FRINT = 1 << 8;
        /// SVE int8 matrix multiply.
        const SVEI8MM = 1 << 9;
        /// SVE fp32 matrix multiply.
        const SVEF32MM = 1 << 10;
        /// SVE fp64 matrix multiply.
        const SVEF64MM = 1 << 11;
        /// SVE BFloat16 instructions.
        const SVEBF16 = 1 << 12;
        /// Int8 matrix multiply.
        const I8MM = 1 << 13;
        /// BFloat16 instructions.
        const BF16 = 1 << 14;
        /// Data gathering hint.
        const DGH = 1 << 15;
        /// Random number generation.
        const RNG = 1 << 16;
        /// Branch Target Identification.
        const BTI = 1 << 17;
        /// Memory Tagging Extension.
        const MTE = 1 << 18;
    }
}
