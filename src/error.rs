use std::path::PathBuf;

/// Errors that can arise while loading a DUCET table or validating input codepoints.
///
/// Table loading is the only fallible part of this crate's surface: once a `Collator`
/// is constructed, every subsequent `sort_key`/`sort`/`compare` call on valid Unicode
/// input is total.
#[derive(Debug, thiserror::Error)]
pub enum DucetError {
    /// The DUCET file could not be read at all.
    #[error("failed to read DUCET table {file}: {source}")]
    Io {
        /// The path that failed to read.
        file: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A specific line of the DUCET file did not match the expected grammar.
    #[error("malformed DUCET entry in {file} at line {line}: {message}")]
    MalformedLine {
        /// The file the malformed line came from.
        file: PathBuf,
        /// The 1-indexed line number.
        line: usize,
        /// What about the line failed to parse.
        message: String,
    },

    /// A caller passed a codepoint outside the valid Unicode range `[0, 0x10FFFF]`.
    #[error("invalid codepoint U+{0:X}, not in [0, 10FFFF]")]
    InvalidCodepoint(u32),
}
