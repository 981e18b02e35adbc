//! Sort-key assembly and the 5.2.0 variant filter (§4.5).

use crate::consts::non_characters;
use crate::types::CollationElement;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Discards surrogates and designated non-characters from an already-NFD-normalized
/// codepoint sequence. Only variant 5.2.0 calls this; every other variant passes its
/// codepoints through unchanged. Must run after normalization, not before, since
/// filtering first would change canonical equivalence (§9).
pub fn filter_5_2_0(codepoints: &[u32]) -> Vec<u32> {
    let non_chars: Vec<u32> = non_characters().collect();

    codepoints
        .iter()
        .copied()
        .filter(|&cp| {
            let Some(c) = char::from_u32(cp) else {
                // Lone surrogate values have no `char` representation; they are
                // exactly the codepoints this filter is meant to discard.
                return false;
            };
            match get_general_category(c) {
                GeneralCategory::Surrogate => false,
                GeneralCategory::Unassigned if non_chars.contains(&cp) => false,
                _ => true,
            }
        })
        .collect()
}

/// Flattens a collation-element sequence into a comparable `u16` sort key.
///
/// Emits each of the three levels (primary, secondary, tertiary) in turn, carrying
/// forward only the nonzero weights at that level, with a single `0` separating
/// consecutive levels. This is the "conventional" shape §4.5 explicitly permits in
/// place of the reference's interleaved-zero form: both orders compare identically,
/// since only order — never byte-for-byte equality with the reference — is tested.
pub fn assemble(cea: &[CollationElement]) -> Vec<u16> {
    let mut key = Vec::new();

    for level in 0..3 {
        if level > 0 {
            key.push(0);
        }
        for ce in cea {
            let weight = match level {
                0 => ce.primary,
                1 => ce.secondary,
                _ => ce.tertiary,
            };
            if weight != 0 {
                key.push(weight);
            }
        }
    }

    key
}
