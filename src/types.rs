use tinyvec::TinyVec;

/// A single collation element: the three-level weight used to compare two strings at
/// progressively finer granularity. Primary distinguishes base letters, secondary
/// distinguishes accents, tertiary distinguishes case and variants.
///
/// A weight of `0` at a given level is significant — it means "ignorable at this
/// level" — and is preserved rather than special-cased away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct CollationElement {
    /// Distinguishes base letters.
    pub primary: u16,
    /// Distinguishes accents.
    pub secondary: u16,
    /// Distinguishes case and variant forms.
    pub tertiary: u16,
}

impl CollationElement {
    /// Builds a collation element from its three weights.
    pub const fn new(primary: u16, secondary: u16, tertiary: u16) -> Self {
        Self { primary, secondary, tertiary }
    }
}

/// A collation-element array: the value bound to a codepoint or contraction in the
/// prefix tree. Almost always one or two elements long, so a small inline buffer
/// avoids a heap allocation for the overwhelming majority of table entries.
pub type Cea = TinyVec<[CollationElement; 2]>;

/// A range of codepoints sharing an `@implicitweights`-declared base, read from a
/// DUCET `@implicitweights` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImplicitRange {
    /// First codepoint in the range, inclusive.
    pub start: u32,
    /// Last codepoint in the range, inclusive.
    pub end: u32,
    /// The `AAAA` base this range overrides the default with.
    pub base: u16,
}

impl ImplicitRange {
    /// Whether `cp` falls within this range.
    pub fn contains(&self, cp: u32) -> bool {
        self.start <= cp && cp <= self.end
    }
}
