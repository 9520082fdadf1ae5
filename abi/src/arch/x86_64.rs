//! x86_64 hardware capability words.
//!
//! On x86_64 the kernel copies the CPUID leaf 1 EDX feature bits into the
//! `AT_HWCAP` value word, so the flags below mirror that register layout.
//! `AT_HWCAP2` carries a small set of kernel-defined extensions.

use bitflags::bitflags;

bitflags! {
    /// `AT_HWCAP` bits (CPUID leaf 1 EDX layout).
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct HwCapFlags: usize {
        /// Floating Point Unit on-chip.
        const FPU = 1 << 0;
        /// Virtual Mode Extensions.
        const VME = 1 << 1;
        /// Debugging Extensions.
        const DE = 1 << 2;
        /// Page Size Extension (4MB pages).
        const PSE = 1 << 3;
        /// Time Stamp Counter.
        const TSC = 1 << 4;
        /// Model Specific Registers.
        const MSR = 1 << 5;
        /// Physical Address Extension.
        const PAE = 1 << 6;
        /// Machine Check Exception.
        const MCE = 1 << 7;
        /// CMPXCHG8B instruction.
        const CX8 = 1 << 8;
        /// On-chip APIC.
        const APIC = 1 << 9;
        /// SYSENTER/SYSEXIT instructions.
        const SEP = 1 << 11;
        /// Memory Type Range Registers.
        const MTRR = 1 << 12;
        /// Page Global Enable.
        const PGE = 1 << 13;
        /// Machine Check Architecture.
        const MCA = 1 << 14;
        /// Conditional move instructions.
        const CMOV = 1 << 15;
        /// Page Attribute Table.
        const PAT = 1 << 16;
        /// 36-bit Page Size Extension.
        const PSE36 = 1 << 17;
        /// CLFLUSH instruction.
        const CLFLUSH = 1 << 19;
        /// MMX instructions.
        const MMX = 1 << 23;
        /// FXSAVE/FXRSTOR instructions.
        const FXSR = 1 << 24;
        /// SSE instructions.
        const SSE = 1 << 25;
        /// SSE2 instructions.
        const SSE2 = 1 << 26;
    }
}

bitflags! {
    /// `AT_HWCAP2` bits (kernel-defined).
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct HwCap2Flags: usize {
        /// MONITOR/MWAIT usable from ring 3.
        const RING3MWAIT = 1 << 0;
        /// RDFSBASE/WRFSBASE family usable from ring 3.
        const FSGSBASE = 1 << 1;
    }
}
