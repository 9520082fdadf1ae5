//! Tests for key classification and value interpretation.

use std::format;

use stackaux_abi::auxv::*;

use crate::classify::{AuxKey, AuxValue, ValueKind};

/// Every raw key the enumeration knows.
const KNOWN_RAW_KEYS: &[usize] = &[
    AT_NULL,
    AT_IGNORE,
    AT_EXECFD,
    AT_PHDR,
    AT_PHENT,
    AT_PHNUM,
    AT_PAGESZ,
    AT_BASE,
    AT_FLAGS,
    AT_ENTRY,
    AT_NOTELF,
    AT_UID,
    AT_EUID,
    AT_GID,
    AT_EGID,
    AT_PLATFORM,
    AT_HWCAP,
    AT_CLKTCK,
    AT_FPUCW,
    AT_DCACHEBSIZE,
    AT_ICACHEBSIZE,
    AT_UCACHEBSIZE,
    AT_IGNOREPPC,
    AT_SECURE,
    AT_BASE_PLATFORM,
    AT_RANDOM,
    AT_HWCAP2,
    AT_RSEQ_FEATURE_SIZE,
    AT_RSEQ_ALIGN,
    AT_HWCAP3,
    AT_HWCAP4,
    AT_EXECFN,
    AT_SYSINFO,
    AT_SYSINFO_EHDR,
    AT_L1I_CACHESHAPE,
    AT_L1D_CACHESHAPE,
    AT_L2_CACHESHAPE,
    AT_L3_CACHESHAPE,
    AT_L1I_CACHESIZE,
    AT_L1I_CACHEGEOMETRY,
    AT_L1D_CACHESIZE,
    AT_L1D_CACHEGEOMETRY,
    AT_L2_CACHESIZE,
    AT_L2_CACHEGEOMETRY,
    AT_L3_CACHESIZE,
    AT_L3_CACHEGEOMETRY,
    AT_MINSIGSTKSZ,
];

#[test]
fn known_keys_round_trip() {
    for &raw in KNOWN_RAW_KEYS {
        let key = AuxKey::from_raw(raw);
        assert!(
            !matches!(key, AuxKey::Unrecognized(_)),
            "key {} should be known",
            raw
        );
        assert_eq!(key.raw(), raw);
    }
}

#[test]
fn unknown_keys_carry_the_raw_integer() {
    let key = AuxKey::from_raw(1000);
    assert_eq!(key, AuxKey::Unrecognized(1000));
    assert_eq!(key.raw(), 1000);
}

#[test]
fn gaps_in_the_key_space_are_unrecognized() {
    // 38/39 and 48..=50 have never been assigned.
    for raw in [38, 39, 48, 49, 50] {
        assert_eq!(AuxKey::from_raw(raw), AuxKey::Unrecognized(raw));
    }
}

#[test]
fn value_kinds_match_key_semantics() {
    assert_eq!(AuxKey::PageSize.value_kind(), ValueKind::Integer);
    assert_eq!(AuxKey::ClockTick.value_kind(), ValueKind::Integer);
    assert_eq!(AuxKey::PhdrAddress.value_kind(), ValueKind::Address);
    assert_eq!(AuxKey::Random.value_kind(), ValueKind::Address);
    assert_eq!(AuxKey::ExecFilename.value_kind(), ValueKind::Address);
    assert_eq!(AuxKey::HwCap.value_kind(), ValueKind::Bitmask);
    assert_eq!(AuxKey::Flags.value_kind(), ValueKind::Bitmask);
    assert_eq!(AuxKey::Secure.value_kind(), ValueKind::Boolean);
    assert_eq!(AuxKey::NotElf.value_kind(), ValueKind::Boolean);
    assert_eq!(AuxKey::Unrecognized(1000).value_kind(), ValueKind::Integer);
}

#[test]
fn interpret_wraps_by_declared_kind() {
    assert_eq!(AuxKey::PageSize.interpret(4096), AuxValue::Integer(4096));
    assert_eq!(
        AuxKey::Random.interpret(0x7fff_0000),
        AuxValue::Address(0x7fff_0000)
    );
    assert_eq!(AuxKey::HwCap.interpret(0xff), AuxValue::Bitmask(0xff));
    assert_eq!(AuxKey::Secure.interpret(1), AuxValue::Boolean(true));
    assert_eq!(AuxKey::Secure.interpret(0), AuxValue::Boolean(false));
}

#[test]
fn display_uses_canonical_names() {
    assert_eq!(format!("{}", AuxKey::Terminator), "AT_NULL");
    assert_eq!(format!("{}", AuxKey::PageSize), "AT_PAGESZ");
    assert_eq!(format!("{}", AuxKey::Random), "AT_RANDOM");
    assert_eq!(format!("{}", AuxKey::MinSignalStackSize), "AT_MINSIGSTKSZ");
    assert_eq!(format!("{}", AuxKey::Unrecognized(99)), "AT_UNKNOWN_99");
}

#[test]
fn values_render_per_interpretation() {
    assert_eq!(format!("{}", AuxValue::Integer(4096)), "4096");
    assert_eq!(format!("{}", AuxValue::Address(0x1000)), "0x1000");
    assert_eq!(format!("{}", AuxValue::Bitmask(0b1010)), "0xa");
    assert_eq!(format!("{}", AuxValue::Boolean(true)), "true");
}
