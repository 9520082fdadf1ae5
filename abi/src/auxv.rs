//! ELF auxiliary vector definitions (kernel-userland ABI).
//!
//! The auxiliary vector is placed on the initial stack by the kernel during
//! exec(). It provides runtime information that the C library startup code
//! (crt0 / __libc_start_main) and the dynamic linker need to initialize
//! properly.
//!
//! Stack layout after exec:
//!   [argc] [argv0..argvN] [NULL] [env0..envN] [NULL] [auxv entries] [AT_NULL,?]
//!
//! Every entry is two native machine words: a key (`a_type`) and a value
//! (`a_val`). The sequence ends at the first entry whose key is [`AT_NULL`].
//! The terminator's value word is undefined: commonly zero, but nothing may
//! rely on that.

use core::mem;

/// Auxiliary vector entry (two native machine words).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuxEntry {
    pub a_type: usize,
    pub a_val: usize,
}

impl AuxEntry {
    /// Construct an entry from a raw key and value word.
    pub const fn new(a_type: usize, a_val: usize) -> Self {
        Self { a_type, a_val }
    }

    /// Whether this entry is the end-of-vector marker.
    pub const fn is_terminator(&self) -> bool {
        self.a_type == AT_NULL
    }
}

/// Byte size of one entry: two machine words, always.
pub const ENTRY_SIZE: usize = mem::size_of::<AuxEntry>();

/// Byte size of one machine word.
pub const WORD_SIZE: usize = mem::size_of::<usize>();

// =============================================================================
// Auxiliary vector type constants (from ELF spec / Linux ABI)
// =============================================================================

/// End of auxiliary vector.
pub const AT_NULL: usize = 0;

/// Entry carries no meaning and must be skipped.
pub const AT_IGNORE: usize = 1;

/// File descriptor the program was loaded from.
pub const AT_EXECFD: usize = 2;

/// Address of the program headers in memory.
pub const AT_PHDR: usize = 3;

/// Size of each program header entry.
pub const AT_PHENT: usize = 4;

/// Number of program headers.
pub const AT_PHNUM: usize = 5;

/// System page size.
pub const AT_PAGESZ: usize = 6;

/// Base address of the interpreter (0 for static binaries).
pub const AT_BASE: usize = 7;

/// Flags word (unused on Linux, set to 0).
pub const AT_FLAGS: usize = 8;

/// Entry point of the program (not the interpreter).
pub const AT_ENTRY: usize = 9;

/// Non-zero if the program is not in ELF format.
pub const AT_NOTELF: usize = 10;

/// Real UID at exec time.
pub const AT_UID: usize = 11;

/// Effective UID at exec time.
pub const AT_EUID: usize = 12;

/// Real GID at exec time.
pub const AT_GID: usize = 13;

/// Effective GID at exec time.
pub const AT_EGID: usize = 14;

/// Pointer to a string naming the target platform.
pub const AT_PLATFORM: usize = 15;

/// Arch-dependent hardware capability bitmask.
pub const AT_HWCAP: usize = 16;

/// Frequency of times(2) ticks.
pub const AT_CLKTCK: usize = 17;

/// FPU control word in use.
pub const AT_FPUCW: usize = 18;

/// Data cache block size in bytes.
pub const AT_DCACHEBSIZE: usize = 19;

/// Instruction cache block size in bytes.
pub const AT_ICACHEBSIZE: usize = 20;

/// Unified cache block size in bytes.
pub const AT_UCACHEBSIZE: usize = 21;

/// PowerPC-only marker controlling vector interpretation; skipped elsewhere.
pub const AT_IGNOREPPC: usize = 22;

/// Boolean: exec was setuid/setgid or otherwise privilege-changing.
pub const AT_SECURE: usize = 23;

/// Pointer to a string naming the real platform.
pub const AT_BASE_PLATFORM: usize = 24;

/// Pointer to 16 bytes of kernel-supplied randomness.
pub const AT_RANDOM: usize = 25;

/// Extension of the hardware capability bitmask.
pub const AT_HWCAP2: usize = 26;

/// Restartable sequences supported feature size.
pub const AT_RSEQ_FEATURE_SIZE: usize = 27;

/// Restartable sequences allocation alignment.
pub const AT_RSEQ_ALIGN: usize = 28;

/// Third hardware capability bitmask.
pub const AT_HWCAP3: usize = 29;

/// Fourth hardware capability bitmask.
pub const AT_HWCAP4: usize = 30;

/// Pointer to the null-terminated filename of the executable.
pub const AT_EXECFN: usize = 31;

/// Pointer to the global system call page.
pub const AT_SYSINFO: usize = 32;

/// Pointer to the ELF header of the vDSO.
pub const AT_SYSINFO_EHDR: usize = 33;

/// L1 instruction cache shape (associativity in bits 0-3, log2 line size
/// in bits 4-7; the rest is the cache size). Applies to all `*_CACHESHAPE`.
pub const AT_L1I_CACHESHAPE: usize = 34;

/// L1 data cache shape.
pub const AT_L1D_CACHESHAPE: usize = 35;

/// L2 cache shape.
pub const AT_L2_CACHESHAPE: usize = 36;

/// L3 cache shape.
pub const AT_L3_CACHESHAPE: usize = 37;

/// L1 instruction cache size in bytes.
pub const AT_L1I_CACHESIZE: usize = 40;

/// L1 instruction cache geometry (line size in the low 16 bits,
/// associativity in the next 16). Applies to all `*_CACHEGEOMETRY`.
pub const AT_L1I_CACHEGEOMETRY: usize = 41;

/// L1 data cache size in bytes.
pub const AT_L1D_CACHESIZE: usize = 42;

/// L1 data cache geometry.
pub const AT_L1D_CACHEGEOMETRY: usize = 43;

/// L2 cache size in bytes.
pub const AT_L2_CACHESIZE: usize = 44;

/// L2 cache geometry.
pub const AT_L2_CACHEGEOMETRY: usize = 45;

/// L3 cache size in bytes.
pub const AT_L3_CACHESIZE: usize = 46;

/// L3 cache geometry.
pub const AT_L3_CACHEGEOMETRY: usize = 47;

/// Minimum stack size needed for signal delivery.
pub const AT_MINSIGSTKSZ: usize = 51;
