//! Version-gated constants consumed by the implicit-weight calculator and by the
//! variant filter in §4.5. Nothing here is loaded from the DUCET text; it is derived
//! directly from the Unicode Collation Algorithm's specification of implicit weights.

/// The twelve CJK Compatibility Ideographs that are treated as part of the "CJK
/// Unified Ideographs Core" block for implicit-weight purposes, regardless of the
/// block they actually live in.
pub const CJK_COMPATIBILITY_EXCEPTIONS: [u32; 12] = [
    0xFA0E, 0xFA0F, 0xFA11, 0xFA13, 0xFA14, 0xFA1F, 0xFA21, 0xFA23, 0xFA24, 0xFA27, 0xFA28, 0xFA29,
];

/// CJK Unified Ideographs Core, present in every supported version.
pub const CJK_CORE: (u32, u32) = (0x4E00, 0x9FCC);
/// Extended in Unicode 8.0.0.
pub const CJK_CORE_8_0_0: (u32, u32) = (0x9FCD, 0x9FD5);
/// Extended again in Unicode 10.0.0.
pub const CJK_CORE_10_0_0: (u32, u32) = (0x9FD6, 0x9FEA);

/// CJK Unified Ideographs Extension A (present since Unicode 3.0; always enabled here).
pub const CJK_EXT_A: (u32, u32) = (0x3400, 0x4DB5);
/// Extension B (Unicode 3.1; always enabled here).
pub const CJK_EXT_B: (u32, u32) = (0x20000, 0x2A6D6);
/// Extension C, enabled from 6.3.0 onward.
pub const CJK_EXT_C: (u32, u32) = (0x2A700, 0x2B734);
/// Extension D, enabled from 6.3.0 onward.
pub const CJK_EXT_D: (u32, u32) = (0x2B740, 0x2B81D);
/// Extension E, enabled from 8.0.0 onward.
pub const CJK_EXT_E: (u32, u32) = (0x2B820, 0x2CEAF);
/// Extension F, enabled only from 10.0.0 onward.
pub const CJK_EXT_F: (u32, u32) = (0x2CEB0, 0x2EBE0);

/// Base constants for implicit-weight AAAA derivation (§4.4).
pub const BASE_CJK_CORE: u16 = 0xFB40;
pub const BASE_CJK_EXT: u16 = 0xFB80;
pub const BASE_UNASSIGNED: u16 = 0xFBC0;

/// Which CJK extension ranges are live for a given UCA version. Extensions A and B
/// have been part of every version this crate supports; C/D/E/F were added over time,
/// and 5.2.0 in particular predates C and D despite some documentation suggesting
/// otherwise (see DESIGN.md — the pyucollate reference treats its own conformance
/// tests as authoritative over that documentation, and so do we).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CjkFlags {
    /// Whether `CJK_CORE_8_0_0` is part of the CJK Unified Ideographs Core block.
    pub core_8_0_0: bool,
    /// Whether `CJK_CORE_10_0_0` is part of the CJK Unified Ideographs Core block.
    pub core_10_0_0: bool,
    /// Whether CJK Unified Ideographs Extension C is enabled.
    pub ext_c: bool,
    /// Whether CJK Unified Ideographs Extension D is enabled.
    pub ext_d: bool,
    /// Whether CJK Unified Ideographs Extension E is enabled.
    pub ext_e: bool,
    /// Whether CJK Unified Ideographs Extension F is enabled.
    pub ext_f: bool,
}

impl CjkFlags {
    /// Flags for UCA 5.2.0.
    pub const V5_2_0: Self = Self {
        core_8_0_0: false,
        core_10_0_0: false,
        ext_c: false,
        ext_d: false,
        ext_e: false,
        ext_f: false,
    };

    /// Flags for UCA 6.3.0.
    pub const V6_3_0: Self = Self {
        core_8_0_0: false,
        core_10_0_0: false,
        ext_c: true,
        ext_d: true,
        ext_e: false,
        ext_f: false,
    };

    /// Flags for UCA 8.0.0.
    pub const V8_0_0: Self = Self {
        core_8_0_0: true,
        core_10_0_0: false,
        ext_c: true,
        ext_d: true,
        ext_e: true,
        ext_f: false,
    };

    /// Flags for UCA 9.0.0 (identical CJK coverage to 8.0.0).
    pub const V9_0_0: Self = Self::V8_0_0;

    /// Flags for UCA 10.0.0.
    pub const V10_0_0: Self = Self {
        core_8_0_0: true,
        core_10_0_0: true,
        ext_c: true,
        ext_d: true,
        ext_e: true,
        ext_f: true,
    };
}

/// Builds the set of non-character codepoints filtered out by the 5.2.0 variant
/// (§4.5, step 2): the last two codepoints of each of the 17 planes, plus the
/// `U+FDD0..=U+FDEF` block.
pub fn non_characters() -> impl Iterator<Item = u32> {
    (0..=16u32)
        .flat_map(|plane| [plane << 16 | 0xFFFE, plane << 16 | 0xFFFF])
        .chain(0xFDD0..=0xFDEF)
}
