//! Conformance-style checks against the bundled DUCET.
//!
//! The official `CollationTest_NON_IGNORABLE.txt` suites are not available in this
//! environment, so these tests substitute a curated, known-correct ordering (the six
//! scenarios the core is specified against) plus a monotonicity check over a larger
//! hand-built word list, rather than a byte-for-byte replay of the published suite.

use ducet::Collator;
use std::cmp::Ordering;

#[test]
fn accented_vowel_sorts_between_base_letter_and_doubled_consonant() {
    let collator = Collator::default_variant().unwrap();
    let words = collator.sort(["cafe", "caff", "café"]);
    assert_eq!(words, ["cafe", "café", "caff"]);
}

#[test]
fn primary_equivalence_of_a_with_diaeresis() {
    let collator = Collator::default_variant().unwrap();
    let words = collator.sort(["Apfelbaum", "Äpfel", "Apfelsaft"]);
    assert_eq!(words, ["Äpfel", "Apfelbaum", "Apfelsaft"]);
}

#[test]
fn cjk_ideograph_gets_an_implicit_weight_from_the_cjk_core_base() {
    let collator = Collator::ducet_9_0_0().unwrap();
    let key = collator.sort_key("\u{4E2D}");
    assert_eq!(key[0], 0xFB40 + (0x4E2D >> 15) as u16);
}

#[test]
fn noncharacter_is_filtered_only_under_the_5_2_0_variant() {
    let v5 = Collator::ducet_5_2_0().unwrap();
    assert_eq!(v5.sort_key("\u{FDD0}"), v5.sort_key(""));

    let v10 = Collator::ducet_10_0_0().unwrap();
    assert_ne!(v10.sort_key("\u{FDD0}"), v10.sort_key(""));
}

#[test]
fn default_ducet_has_no_multi_codepoint_contractions_for_plain_ascii() {
    // Under DUCET default (no CLDR/locale tailoring), "ch" is two collation elements,
    // one per codepoint, not a single contracted element.
    let collator = Collator::default_variant().unwrap();
    let c_key = collator.sort_key("c");
    let h_key = collator.sort_key("h");
    let ch_key = collator.sort_key("ch");

    // The combined key's primary level should contain both base letters' weights in
    // sequence, which is only possible if they were extracted as separate elements.
    assert!(ch_key.len() >= c_key.len() + h_key.len() - 2);
}

#[test]
fn ordering_over_a_curated_word_list_is_monotonic() {
    let collator = Collator::default_variant().unwrap();
    let expected_order = [
        "apple", "Apple", "banana", "Banana", "café", "cafe\u{0301}", "caff", "zebra",
    ];

    let mut sort_keys: Vec<Vec<u16>> =
        expected_order.iter().map(|s| collator.sort_key(s)).collect();
    sort_keys.dedup();

    for pair in sort_keys.windows(2) {
        assert_ne!(pair[0].cmp(&pair[1]), Ordering::Greater);
    }
}

#[test]
fn all_named_variants_agree_on_plain_ascii_ordering() {
    let variants = [
        Collator::ducet_5_2_0().unwrap(),
        Collator::ducet_6_3_0().unwrap(),
        Collator::ducet_8_0_0().unwrap(),
        Collator::ducet_9_0_0().unwrap(),
        Collator::ducet_10_0_0().unwrap(),
    ];

    for collator in &variants {
        assert_eq!(collator.compare("apple", "banana"), Ordering::Less);
    }
}
