//! An implementation of the core of the Unicode Collation Algorithm (UCA), built on
//! the Default Unicode Collation Element Table (DUCET).
//!
//! A [`Collator`] is constructed once per UCA version variant and is immutable
//! thereafter; [`Collator::sort_key`], [`Collator::compare`], and [`Collator::sort`]
//! may all be called concurrently from any number of threads.
//!
//! ```
//! use ducet::Collator;
//!
//! let collator = Collator::default_variant().unwrap();
//! let names = collator.sort(["cafe", "caff", "café"]);
//! assert_eq!(names, ["cafe", "café", "caff"]);
//! ```
//!
//! Only the Non-ignorable variable-weighting policy is implemented, and only the
//! default (untailored) collation order; locale-specific tailoring is out of scope.

#![warn(clippy::pedantic, clippy::cargo)]
#![allow(clippy::module_name_repetitions)]
#![deny(missing_docs)]

use std::cmp::Ordering;
use std::path::Path;

mod cea;
mod consts;
mod error;
mod implicit;
mod loader;
mod normalize;
mod sort_key;
mod trie;
mod types;

pub use consts::CjkFlags;
pub use error::DucetError;
pub use types::{CollationElement, ImplicitRange};

use trie::Trie;

/// The complete DUCET text bundled with this crate. All five supported version
/// variants load this same table; they differ only in which CJK extension ranges
/// their [`CjkFlags`] enable and, for 5.2.0, whether the non-character filter runs
/// (see `SPEC_FULL.md` §2 for why one file covers every variant).
const DUCET_TEXT: &str = include_str!("../data/allkeys.txt");

/// A UCA collator bound to one version variant and its DUCET table.
///
/// Construction parses and indexes the DUCET text into a [`Trie`], which is the only
/// part of this crate's work that can fail. Every method after that is total: any
/// valid Rust `&str` (which, by construction, can never contain an invalid codepoint)
/// produces a sort key.
#[derive(Debug)]
pub struct Collator {
    trie: Trie,
    implicit_ranges: Vec<ImplicitRange>,
    cjk_flags: CjkFlags,
    filter_5_2_0: bool,
    version: &'static str,
}

impl Collator {
    fn from_embedded(
        version: &'static str,
        cjk_flags: CjkFlags,
        filter_5_2_0: bool,
    ) -> Result<Self, DucetError> {
        let table = loader::load_str(DUCET_TEXT, "allkeys.txt")?;
        Ok(Self { trie: table.trie, implicit_ranges: table.implicit_ranges, cjk_flags, filter_5_2_0, version })
    }

    /// UCA 5.2.0: Extensions A and B only, plus the surrogate/non-character filter.
    ///
    /// # Errors
    ///
    /// Returns [`DucetError`] if the bundled DUCET text fails to parse.
    pub fn ducet_5_2_0() -> Result<Self, DucetError> {
        Self::from_embedded("5.2.0", CjkFlags::V5_2_0, true)
    }

    /// UCA 6.3.0: adds Extensions C and D.
    ///
    /// # Errors
    ///
    /// Returns [`DucetError`] if the bundled DUCET text fails to parse.
    pub fn ducet_6_3_0() -> Result<Self, DucetError> {
        Self::from_embedded("6.3.0", CjkFlags::V6_3_0, false)
    }

    /// UCA 8.0.0: adds Extension E and the first CJK Core extension block.
    ///
    /// # Errors
    ///
    /// Returns [`DucetError`] if the bundled DUCET text fails to parse.
    pub fn ducet_8_0_0() -> Result<Self, DucetError> {
        Self::from_embedded("8.0.0", CjkFlags::V8_0_0, false)
    }

    /// UCA 9.0.0: identical CJK coverage to 8.0.0.
    ///
    /// # Errors
    ///
    /// Returns [`DucetError`] if the bundled DUCET text fails to parse.
    pub fn ducet_9_0_0() -> Result<Self, DucetError> {
        Self::from_embedded("9.0.0", CjkFlags::V9_0_0, false)
    }

    /// UCA 10.0.0: adds Extension F and the second CJK Core extension block.
    ///
    /// # Errors
    ///
    /// Returns [`DucetError`] if the bundled DUCET text fails to parse.
    pub fn ducet_10_0_0() -> Result<Self, DucetError> {
        Self::from_embedded("10.0.0", CjkFlags::V10_0_0, false)
    }

    /// Loads a DUCET table from a file on disk instead of the bundled copy, keeping
    /// `cjk_flags` and the 5.2.0 filter the same as the matching `ducet_*` constructor
    /// (mirrors the original `pyucollate` `BaseCollator(collation_table: str | Path)`
    /// constructor, which takes a caller-supplied table file rather than an embedded
    /// one).
    ///
    /// # Errors
    ///
    /// Returns [`DucetError::Io`] if `path` cannot be read, or
    /// [`DucetError::MalformedLine`] if its contents don't parse as a DUCET table.
    pub fn from_path(
        path: impl AsRef<Path>,
        version: &'static str,
        cjk_flags: CjkFlags,
        filter_5_2_0: bool,
    ) -> Result<Self, DucetError> {
        let table = loader::load_file(path.as_ref())?;
        Ok(Self { trie: table.trie, implicit_ranges: table.implicit_ranges, cjk_flags, filter_5_2_0, version })
    }

    /// The packaging-level default variant. This crate always resolves it to 9.0.0;
    /// callers who need a different default for their host's character database
    /// should construct the named variant directly (§6, "Default-variant selection
    /// policy" — the core itself does not inspect the host environment).
    ///
    /// # Errors
    ///
    /// Returns [`DucetError`] if the bundled DUCET text fails to parse.
    pub fn default_variant() -> Result<Self, DucetError> {
        Self::ducet_9_0_0()
    }

    /// The UCA version this collator was constructed for, e.g. `"9.0.0"`.
    #[must_use]
    pub fn uca_version(&self) -> &str {
        self.version
    }

    /// Computes the sort key for `s`: NFD-normalize, apply the 5.2.0 filter if this
    /// variant calls for it, extract collation elements, then flatten to levels.
    #[must_use]
    pub fn sort_key(&self, s: &str) -> Vec<u16> {
        let mut codepoints = normalize::nfd_codepoints(s);
        if self.filter_5_2_0 {
            codepoints = sort_key::filter_5_2_0(&codepoints);
        }
        let cea = cea::extract(&codepoints, &self.trie, self.cjk_flags, &self.implicit_ranges);
        sort_key::assemble(&cea)
    }

    /// Compares two strings by their sort keys.
    #[must_use]
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.sort_key(a).cmp(&self.sort_key(b))
    }

    /// Stably sorts `strings` by UCA order, returning a new `Vec`.
    #[must_use]
    pub fn sort<'a>(&self, strings: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        let mut strings: Vec<&'a str> = strings.into_iter().collect();
        strings.sort_by_key(|s| self.sort_key(s));
        strings
    }
}
