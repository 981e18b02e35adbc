//! NFD normalization, the first external-collaborator step in §4.5. Canonical
//! combining class and general category are the other two; those live next to the
//! code that actually consumes them (`cea.rs` and `implicit.rs` respectively), since
//! each is only ever needed in one place.

use unicode_normalization::UnicodeNormalization;

/// Normalizes `s` to NFD and returns its codepoints as `u32`s, ready for the
/// extractor.
pub fn nfd_codepoints(s: &str) -> Vec<u32> {
    s.nfd().map(|c| c as u32).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decomposes_precomposed_accented_letter() {
        // é (U+00E9) decomposes to e (U+0065) + combining acute accent (U+0301).
        let cps = nfd_codepoints("caf\u{00E9}");
        assert_eq!(cps, vec![b'c' as u32, b'a' as u32, b'f' as u32, 0x0065, 0x0301]);
    }

    #[test]
    fn canonically_equivalent_inputs_normalize_identically() {
        let precomposed = nfd_codepoints("caf\u{00E9}");
        let decomposed = nfd_codepoints("cafe\u{0301}");
        assert_eq!(precomposed, decomposed);
    }
}
