//! Typed classification of the raw key space.
//!
//! Raw keys are architecture-defined integers; [`AuxKey::from_raw`] maps
//! them onto a closed enumeration and never fails: keys this crate does
//! not know (new kernels grow the space over time) classify as
//! [`AuxKey::Unrecognized`] with the original integer preserved. Each key
//! declares how its value word is meant to be read ([`ValueKind`]);
//! pointer-valued entries are never dereferenced here; that is a
//! separate, explicitly unsafe step layered on top (see the probe
//! methods on [`AuxVector`]).
//!
//! [`AuxVector`]: crate::view::AuxVector

use core::fmt;

use stackaux_abi::auxv::*;

// =============================================================================
// Key classification
// =============================================================================

/// A classified auxiliary vector key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuxKey {
    /// End of vector (`AT_NULL`). Never yielded by iteration; its value
    /// word is undefined.
    Terminator,
    /// Entry carries no meaning (`AT_IGNORE`).
    Ignore,
    /// File descriptor of the program (`AT_EXECFD`).
    ExecFd,
    /// Address of the program headers (`AT_PHDR`).
    PhdrAddress,
    /// Size of one program header entry (`AT_PHENT`).
    PhdrEntrySize,
    /// Number of program headers (`AT_PHNUM`).
    PhdrCount,
    /// System page size (`AT_PAGESZ`).
    PageSize,
    /// Interpreter base address (`AT_BASE`).
    InterpreterBase,
    /// Flags word (`AT_FLAGS`).
    Flags,
    /// Program entry point (`AT_ENTRY`).
    EntryPoint,
    /// Non-zero when the program is not ELF (`AT_NOTELF`).
    NotElf,
    /// Real UID at exec time (`AT_UID`).
    RealUid,
    /// Effective UID at exec time (`AT_EUID`).
    EffectiveUid,
    /// Real GID at exec time (`AT_GID`).
    RealGid,
    /// Effective GID at exec time (`AT_EGID`).
    EffectiveGid,
    /// Pointer to the target platform string (`AT_PLATFORM`).
    Platform,
    /// Hardware capability bitmask (`AT_HWCAP`).
    HwCap,
    /// times(2) tick frequency (`AT_CLKTCK`).
    ClockTick,
    /// FPU control word (`AT_FPUCW`).
    FpuControlWord,
    /// Data cache block size (`AT_DCACHEBSIZE`).
    DataCacheBlockSize,
    /// Instruction cache block size (`AT_ICACHEBSIZE`).
    InstructionCacheBlockSize,
    /// Unified cache block size (`AT_UCACHEBSIZE`).
    UnifiedCacheBlockSize,
    /// PowerPC interpretation marker (`AT_IGNOREPPC`).
    IgnorePpc,
    /// Exec changed privileges (`AT_SECURE`).
    Secure,
    /// Pointer to the real platform string (`AT_BASE_PLATFORM`).
    BasePlatform,
    /// Pointer to 16 kernel-supplied random bytes (`AT_RANDOM`).
    Random,
    /// Second hardware capability bitmask (`AT_HWCAP2`).
    HwCap2,
    /// rseq supported feature size (`AT_RSEQ_FEATURE_SIZE`).
    RseqFeatureSize,
    /// rseq allocation alignment (`AT_RSEQ_ALIGN`).
    RseqAlign,
    /// Third hardware capability bitmask (`AT_HWCAP3`).
    HwCap3,
    /// Fourth hardware capability bitmask (`AT_HWCAP4`).
    HwCap4,
    /// Pointer to the executable's filename (`AT_EXECFN`).
    ExecFilename,
    /// Pointer to the system call page (`AT_SYSINFO`).
    SysinfoPage,
    /// Pointer to the vDSO ELF header (`AT_SYSINFO_EHDR`).
    SysinfoHeader,
    /// L1 instruction cache shape (`AT_L1I_CACHESHAPE`).
    L1iCacheShape,
    /// L1 data cache shape (`AT_L1D_CACHESHAPE`).
    L1dCacheShape,
    /// L2 cache shape (`AT_L2_CACHESHAPE`).
    L2CacheShape,
    /// L3 cache shape (`AT_L3_CACHESHAPE`).
    L3CacheShape,
    /// L1 instruction cache size (`AT_L1I_CACHESIZE`).
    L1iCacheSize,
    /// L1 instruction cache geometry (`AT_L1I_CACHEGEOMETRY`).
    L1iCacheGeometry,
    /// L1 data cache size (`AT_L1D_CACHESIZE`).
    L1dCacheSize,
    /// L1 data cache geometry (`AT_L1D_CACHEGEOMETRY`).
    L1dCacheGeometry,
    /// L2 cache size (`AT_L2_CACHESIZE`).
    L2CacheSize,
    /// L2 cache geometry (`AT_L2_CACHEGEOMETRY`).
    L2CacheGeometry,
    /// L3 cache size (`AT_L3_CACHESIZE`).
    L3CacheSize,
    /// L3 cache geometry (`AT_L3_CACHEGEOMETRY`).
    L3CacheGeometry,
    /// Minimum signal delivery stack size (`AT_MINSIGSTKSZ`).
    MinSignalStackSize,
    /// Key outside the known enumeration; the raw integer is preserved.
    Unrecognized(usize),
}

impl AuxKey {
    /// Classify a raw key. Total: unknown keys map to
    /// [`AuxKey::Unrecognized`] rather than failing.
    pub fn from_raw(raw: usize) -> Self {
        match raw {
            AT_NULL => Self::Terminator,
            AT_IGNORE => Self::Ignore,
            AT_EXECFD => Self::ExecFd,
            AT_PHDR => Self::PhdrAddress,
            AT_PHENT => Self::PhdrEntrySize,
            AT_PHNUM => Self::PhdrCount,
            AT_PAGESZ => Self::PageSize,
            AT_BASE => Self::InterpreterBase,
            AT_FLAGS => Self::Flags,
            AT_ENTRY => Self::EntryPoint,
            AT_NOTELF => Self::NotElf,
            AT_UID => Self::RealUid,
            AT_EUID => Self::EffectiveUid,
            AT_GID => Self::RealGid,
            AT_EGID => Self::EffectiveGid,
            AT_PLATFORM => Self::Platform,
            AT_HWCAP => Self::HwCap,
            AT_CLKTCK => Self::ClockTick,
            AT_FPUCW => Self::FpuControlWord,
            AT_DCACHEBSIZE => Self::DataCacheBlockSize,
            AT_ICACHEBSIZE => Self::InstructionCacheBlockSize,
            AT_UCACHEBSIZE => Self::UnifiedCacheBlockSize,
            AT_IGNOREPPC => Self::IgnorePpc,
            AT_SECURE => Self::Secure,
            AT_BASE_PLATFORM => Self::BasePlatform,
            AT_RANDOM => Self::Random,
            AT_HWCAP2 => Self::HwCap2,
            AT_RSEQ_FEATURE_SIZE => Self::RseqFeatureSize,
            AT_RSEQ_ALIGN => Self::RseqAlign,
            AT_HWCAP3 => Self::HwCap3,
            AT_HWCAP4 => Self::HwCap4,
            AT_EXECFN => Self::ExecFilename,
            AT_SYSINFO => Self::SysinfoPage,
            AT_SYSINFO_EHDR => Self::SysinfoHeader,
            AT_L1I_CACHESHAPE => Self::L1iCacheShape,
            AT_L1D_CACHESHAPE => Self::L1dCacheShape,
            AT_L2_CACHESHAPE => Self::L2CacheShape,
            AT_L3_CACHESHAPE => Self::L3CacheShape,
            AT_L1I_CACHESIZE => Self::L1iCacheSize,
            AT_L1I_CACHEGEOMETRY => Self::L1iCacheGeometry,
            AT_L1D_CACHESIZE => Self::L1dCacheSize,
            AT_L1D_CACHEGEOMETRY => Self::L1dCacheGeometry,
            AT_L2_CACHESIZE => Self::L2CacheSize,
            AT_L2_CACHEGEOMETRY => Self::L2CacheGeometry,
            AT_L3_CACHESIZE => Self::L3CacheSize,
            AT_L3_CACHEGEOMETRY => Self::L3CacheGeometry,
            AT_MINSIGSTKSZ => Self::MinSignalStackSize,
            other => Self::Unrecognized(other),
        }
    }

    /// The raw integer key. Round-trips with [`AuxKey::from_raw`].
    pub fn raw(&self) -> usize {
        match self {
            Self::Terminator => AT_NULL,
            Self::Ignore => AT_IGNORE,
            Self::ExecFd => AT_EXECFD,
            Self::PhdrAddress => AT_PHDR,
            Self::PhdrEntrySize => AT_PHENT,
            Self::PhdrCount => AT_PHNUM,
            Self::PageSize => AT_PAGESZ,
            Self::InterpreterBase => AT_BASE,
            Self::Flags => AT_FLAGS,
            Self::EntryPoint => AT_ENTRY,
            Self::NotElf => AT_NOTELF,
            Self::RealUid => AT_UID,
            Self::EffectiveUid => AT_EUID,
            Self::RealGid => AT_GID,
            Self::EffectiveGid => AT_EGID,
            Self::Platform => AT_PLATFORM,
            Self::HwCap => AT_HWCAP,
            Self::ClockTick => AT_CLKTCK,
            Self::FpuControlWord => AT_FPUCW,
            Self::DataCacheBlockSize => AT_DCACHEBSIZE,
            Self::InstructionCacheBlockSize => AT_ICACHEBSIZE,
            Self::UnifiedCacheBlockSize => AT_UCACHEBSIZE,
            Self::IgnorePpc => AT_IGNOREPPC,
            Self::Secure => AT_SECURE,
            Self::BasePlatform => AT_BASE_PLATFORM,
            Self::Random => AT_RANDOM,
            Self::HwCap2 => AT_HWCAP2,
            Self::RseqFeatureSize => AT_RSEQ_FEATURE_SIZE,
            Self::RseqAlign => AT_RSEQ_ALIGN,
            Self::HwCap3 => AT_HWCAP3,
            Self::HwCap4 => AT_HWCAP4,
            Self::ExecFilename => AT_EXECFN,
            Self::SysinfoPage => AT_SYSINFO,
            Self::SysinfoHeader => AT_SYSINFO_EHDR,
            Self::L1iCacheShape => AT_L1I_CACHESHAPE,
            Self::L1dCacheShape => AT_L1D_CACHESHAPE,
            Self::L2CacheShape => AT_L2_CACHESHAPE,
            Self::L3CacheShape => AT_L3_CACHESHAPE,
            Self::L1iCacheSize => AT_L1I_CACHESIZE,
            Self::L1iCacheGeometry => AT_L1I_CACHEGEOMETRY,
            Self::L1dCacheSize => AT_L1D_CACHESIZE,
            Self::L1dCacheGeometry => AT_L1D_CACHEGEOMETRY,
            Self::L2CacheSize => AT_L2_CACHESIZE,
            Self::L2CacheGeometry => AT_L2_CACHEGEOMETRY,
            Self::L3CacheSize => AT_L3_CACHESIZE,
            Self::L3CacheGeometry => AT_L3_CACHEGEOMETRY,
            Self::MinSignalStackSize => AT_MINSIGSTKSZ,
            Self::Unrecognized(raw) => *raw,
        }
    }

    /// How this key's value word is meant to be read.
    pub fn value_kind(&self) -> ValueKind {
        match self {
            Self::PhdrAddress
            | Self::InterpreterBase
            | Self::EntryPoint
            | Self::Platform
            | Self::BasePlatform
            | Self::Random
            | Self::ExecFilename
            | Self::SysinfoPage
            | Self::SysinfoHeader => ValueKind::Address,
            Self::Flags | Self::HwCap | Self::HwCap2 | Self::HwCap3 | Self::HwCap4 => {
                ValueKind::Bitmask
            }
            Self::Secure | Self::NotElf => ValueKind::Boolean,
            _ => ValueKind::Integer,
        }
    }

    /// Wrap a value word according to this key's declared interpretation.
    pub fn interpret(&self, word: usize) -> AuxValue {
        match self.value_kind() {
            ValueKind::Integer => AuxValue::Integer(word),
            ValueKind::Address => AuxValue::Address(word),
            ValueKind::Bitmask => AuxValue::Bitmask(word),
            ValueKind::Boolean => AuxValue::Boolean(word != 0),
        }
    }
}

impl fmt::Display for AuxKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Terminator => write!(f, "AT_NULL"),
            Self::Ignore => write!(f, "AT_IGNORE"),
            Self::ExecFd => write!(f, "AT_EXECFD"),
            Self::PhdrAddress => write!(f, "AT_PHDR"),
            Self::PhdrEntrySize => write!(f, "AT_PHENT"),
            Self::PhdrCount => write!(f, "AT_PHNUM"),
            Self::PageSize => write!(f, "AT_PAGESZ"),
            Self::InterpreterBase => write!(f, "AT_BASE"),
            Self::Flags => write!(f, "AT_FLAGS"),
            Self::EntryPoint => write!(f, "AT_ENTRY"),
            Self::NotElf => write!(f, "AT_NOTELF"),
            Self::RealUid => write!(f, "AT_UID"),
            Self::EffectiveUid => write!(f, "AT_EUID"),
            Self::RealGid => write!(f, "AT_GID"),
            Self::EffectiveGid => write!(f, "AT_EGID"),
            Self::Platform => write!(f, "AT_PLATFORM"),
            Self::HwCap => write!(f, "AT_HWCAP"),
            Self::ClockTick => write!(f, "AT_CLKTCK"),
            Self::FpuControlWord => write!(f, "AT_FPUCW"),
            Self::DataCacheBlockSize => write!(f, "AT_DCACHEBSIZE"),
            Self::InstructionCacheBlockSize => write!(f, "AT_ICACHEBSIZE"),
            Self::UnifiedCacheBlockSize => write!(f, "AT_UCACHEBSIZE"),
            Self::IgnorePpc => write!(f, "AT_IGNOREPPC"),
            Self::Secure => write!(f, "AT_SECURE"),
            Self::BasePlatform => write!(f, "AT_BASE_PLATFORM"),
            Self::Random => write!(f, "AT_RANDOM"),
            Self::HwCap2 => write!(f, "AT_HWCAP2"),
            Self::RseqFeatureSize => write!(f, "AT_RSEQ_FEATURE_SIZE"),
            Self::RseqAlign => write!(f, "AT_RSEQ_ALIGN"),
            Self::HwCap3 => write!(f, "AT_HWCAP3"),
            Self::HwCap4 => write!(f, "AT_HWCAP4"),
            Self::ExecFilename => write!(f, "AT_EXECFN"),
            Self::SysinfoPage => write!(f, "AT_SYSINFO"),
            Self::SysinfoHeader => write!(f, "AT_SYSINFO_EHDR"),
            Self::L1iCacheShape => write!(f, "AT_L1I_CACHESHAPE"),
            Self::L1dCacheShape => write!(f, "AT_L1D_CACHESHAPE"),
            Self::L2CacheShape => write!(f, "AT_L2_CACHESHAPE"),
            Self::L3CacheShape => write!(f, "AT_L3_CACHESHAPE"),
            Self::L1iCacheSize => write!(f, "AT_L1I_CACHESIZE"),
            Self::L1iCacheGeometry => write!(f, "AT_L1I_CACHEGEOMETRY"),
            Self::L1dCacheSize => write!(f, "AT_L1D_CACHESIZE"),
            Self::L1dCacheGeometry => write!(f, "AT_L1D_CACHEGEOMETRY"),
            Self::L2CacheSize => write!(f, "AT_L2_CACHESIZE"),
            Self::L2CacheGeometry => write!(f, "AT_L2_CACHEGEOMETRY"),
            Self::L3CacheSize => write!(f, "AT_L3_CACHESIZE"),
            Self::L3CacheGeometry => write!(f, "AT_L3_CACHEGEOMETRY"),
            Self::MinSignalStackSize => write!(f, "AT_MINSIGSTKSZ"),
            Self::Unrecognized(raw) => write!(f, "AT_UNKNOWN_{}", raw),
        }
    }
}

// =============================================================================
// Value interpretation
// =============================================================================

/// Declared interpretation of a key's value word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Plain integer quantity.
    Integer,
    /// Pointer into the process address space. Dereferencing it is an
    /// explicit, separate, unsafe operation, never done during decode.
    Address,
    /// Flags bitmask.
    Bitmask,
    /// Zero/non-zero boolean.
    Boolean,
}

/// A value word wrapped per its key's declared interpretation, suitable
/// for display by a front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuxValue {
    Integer(usize),
    Address(usize),
    Bitmask(usize),
    Boolean(bool),
}

impl fmt::Display for AuxValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{}", v),
            Self::Address(v) => write!(f, "0x{:x}", v),
            Self::Bitmask(v) => write!(f, "0x{:x}", v),
            Self::Boolean(v) => write!(f, "{}", v),
        }
    }
}
