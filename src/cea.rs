//! The collation-element extractor (§4.3): UCA's S2 state machine. Walks a
//! NFD-normalized codepoint sequence, consuming the longest bound prefix at each step,
//! then tries to extend that match across intervening non-starters before falling back
//! to implicit weighting.

use unicode_canonical_combining_class::get_canonical_combining_class_u32;

use crate::consts::CjkFlags;
use crate::implicit::implicit_weight;
use crate::trie::Trie;
use crate::types::{CollationElement, ImplicitRange};

fn combining_class(cp: u32) -> u8 {
    get_canonical_combining_class_u32(cp) as u8
}

/// Extracts the full collation-element sequence for `codepoints`.
///
/// `codepoints` must already be NFD-normalized (and, for variant 5.2.0, already passed
/// through the non-character filter); this function performs neither step itself.
pub fn extract(
    codepoints: &[u32],
    trie: &Trie,
    flags: CjkFlags,
    implicit_ranges: &[ImplicitRange],
) -> Vec<CollationElement> {
    let mut output = Vec::new();
    let mut remaining: Vec<u32> = codepoints.to_vec();

    while !remaining.is_empty() {
        let (matched_len, value) = trie.longest_prefix_match(&remaining);
        let mut matched: Vec<u32> = remaining[..matched_len].to_vec();
        let mut rest: Vec<u32> = remaining[matched_len..].to_vec();
        let mut cea = value.map(|v| v.into_vec());

        // Non-starter discontiguous extension (UCA S2.1.1-S2.1.3). Re-run the scan
        // after each adopted match so a run of several combining marks can be gathered
        // in one step rather than stopping at the first (§9, resolving "break ???" in
        // favor of full UCA semantics).
        loop {
            let mut last_class: Option<u8> = None;
            let mut adopted = None;

            for (i, &c) in rest.iter().enumerate() {
                let cc = combining_class(c);
                if cc == 0 || last_class.is_some_and(|lc| cc <= lc) {
                    break;
                }

                let mut probe = matched.clone();
                probe.push(c);
                if let Some(probed) = trie.get_exact(&probe) {
                    adopted = Some((i, probe, probed.into_vec()));
                    break;
                }
                last_class = Some(cc);
            }

            match adopted {
                Some((i, probe, probed)) => {
                    rest.remove(i);
                    matched = probe;
                    cea = Some(probed);
                }
                None => break,
            }
        }

        match cea {
            Some(v) => {
                output.extend_from_slice(&v);
                remaining = rest;
            }
            None => {
                let cp = remaining[0];
                output.extend_from_slice(&implicit_weight(cp, flags, implicit_ranges));
                remaining = remaining[1..].to_vec();
            }
        }
    }

    output
}
