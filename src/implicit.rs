//! Derivation of implicit weights (§4.4) for codepoints that have no entry in the
//! DUCET: unassigned codepoints, private-use codepoints, and CJK ideographs outside
//! the table's explicit coverage.

use unicode_general_category::{get_general_category, GeneralCategory};

use crate::consts::{
    self, CjkFlags, BASE_CJK_CORE, BASE_CJK_EXT, BASE_UNASSIGNED, CJK_COMPATIBILITY_EXCEPTIONS,
};
use crate::types::{CollationElement, ImplicitRange};

fn in_range(cp: u32, range: (u32, u32)) -> bool {
    range.0 <= cp && cp <= range.1
}

fn is_assigned(cp: u32) -> bool {
    // SAFETY-free: every u32 in [0, 0x10FFFF] that isn't a surrogate maps to a `char`,
    // and general-category lookups treat surrogates as simply unassigned.
    char::from_u32(cp).is_some_and(|c| get_general_category(c) != GeneralCategory::Unassigned)
}

fn is_cjk_core(cp: u32, flags: CjkFlags) -> bool {
    is_assigned(cp)
        && (in_range(cp, consts::CJK_CORE)
            || (flags.core_8_0_0 && in_range(cp, consts::CJK_CORE_8_0_0))
            || (flags.core_10_0_0 && in_range(cp, consts::CJK_CORE_10_0_0))
            || CJK_COMPATIBILITY_EXCEPTIONS.contains(&cp))
}

fn is_cjk_extension(cp: u32, flags: CjkFlags) -> bool {
    is_assigned(cp)
        && (in_range(cp, consts::CJK_EXT_A)
            || in_range(cp, consts::CJK_EXT_B)
            || (flags.ext_c && in_range(cp, consts::CJK_EXT_C))
            || (flags.ext_d && in_range(cp, consts::CJK_EXT_D))
            || (flags.ext_e && in_range(cp, consts::CJK_EXT_E))
            || (flags.ext_f && in_range(cp, consts::CJK_EXT_F)))
}

/// Computes the two-element implicit-weight CEA for `cp` per §4.4.
///
/// `implicit_ranges` are the `@implicitweights` directives read from the loaded DUCET;
/// they only ever override the "unassigned/default" branch, never the CJK branches
/// (§9, "Implicit weights and tailoring interaction").
pub fn implicit_weight(
    cp: u32,
    flags: CjkFlags,
    implicit_ranges: &[ImplicitRange],
) -> [CollationElement; 2] {
    let (aaaa, bbbb) = if is_cjk_core(cp, flags) {
        (BASE_CJK_CORE + (cp >> 15) as u16, ((cp & 0x7FFF) | 0x8000) as u16)
    } else if is_cjk_extension(cp, flags) {
        (BASE_CJK_EXT + (cp >> 15) as u16, ((cp & 0x7FFF) | 0x8000) as u16)
    } else if let Some(range) = implicit_ranges.iter().find(|r| r.contains(cp)) {
        (range.base, ((cp - range.start) | 0x8000) as u16)
    } else {
        (BASE_UNASSIGNED + (cp >> 15) as u16, ((cp & 0x7FFF) | 0x8000) as u16)
    };

    [CollationElement::new(aaaa, 0x0020, 0x0002), CollationElement::new(bbbb, 0x0000, 0x0000)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cjk_core_uses_fb40_base() {
        let weights = implicit_weight(0x4E2D, CjkFlags::V9_0_0, &[]);
        assert_eq!(weights[0].primary, BASE_CJK_CORE + (0x4E2D >> 15) as u16);
    }

    #[test]
    fn unassigned_falls_back_to_fbc0() {
        // U+0378 is unassigned in every released Unicode version.
        let weights = implicit_weight(0x0378, CjkFlags::V9_0_0, &[]);
        assert_eq!(weights[0].primary, BASE_UNASSIGNED);
    }

    #[test]
    fn implicitweights_directive_overrides_default_branch_only() {
        let ranges = [ImplicitRange { start: 0x20, end: 0x30, base: 0xAAAA }];

        // Inside the declared range and not CJK: overridden.
        let weights = implicit_weight(0x25, CjkFlags::V9_0_0, &ranges);
        assert_eq!(weights[0].primary, 0xAAAA);
        assert_eq!(weights[1].primary, (0x25 - 0x20) | 0x8000);

        // A CJK-core codepoint is unaffected even if (hypothetically) it overlapped a range.
        let cjk_ranges = [ImplicitRange { start: 0x4E00, end: 0x9FCC, base: 0xAAAA }];
        let weights = implicit_weight(0x4E2D, CjkFlags::V9_0_0, &cjk_ranges);
        assert_eq!(weights[0].primary, BASE_CJK_CORE + (0x4E2D >> 15) as u16);
    }

    #[test]
    fn every_codepoint_yields_nonempty_weights() {
        for cp in [0u32, 1, 0x4E00, 0x9FEA, 0x3400, 0x2EBE0, 0x10FFFF, 0xE000] {
            let weights = implicit_weight(cp, CjkFlags::V10_0_0, &[]);
            assert!(weights[0].primary != 0 || weights[1].primary != 0);
        }
    }
}
