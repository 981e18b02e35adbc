//! Parses a DUCET text file into a [`Trie`] and a list of [`ImplicitRange`]s (§4.2).
//!
//! Lines are stripped of `#` comments and trailing whitespace. Blank lines and
//! `@version` lines are ignored. An `@implicitweights` line produces one
//! [`ImplicitRange`]. Every other non-blank line binds a codepoint sequence to a
//! collation-element array. A line that is none of these is a loader error naming the
//! source and line number — malformed data is never silently skipped.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::DucetError;
use crate::trie::Trie;
use crate::types::{Cea, CollationElement, ImplicitRange};

static COLLATION_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        \[
        (?:\.|\*)
        ([0-9A-Fa-f]{4})\.
        ([0-9A-Fa-f]{4})\.
        ([0-9A-Fa-f]{4})
        (?:\.[0-9A-Fa-f]{4,5})?
        \]
        ",
    )
    .expect("collation element pattern is a fixed, valid regex")
});

/// The result of a successful load: the prefix tree plus any `@implicitweights`
/// ranges declared in the file.
#[derive(Debug, Default)]
pub struct Table {
    pub trie: Trie,
    pub implicit_ranges: Vec<ImplicitRange>,
}

/// Loads a DUCET table from a file on disk.
///
/// # Errors
///
/// Returns [`DucetError::Io`] if `path` cannot be read, or [`DucetError::MalformedLine`]
/// if its contents don't parse as a DUCET table.
pub fn load_file(path: &Path) -> Result<Table, DucetError> {
    let text = std::fs::read_to_string(path)
        .map_err(|source| DucetError::Io { file: path.to_path_buf(), source })?;
    load_str(&text, path)
}

/// Loads a DUCET table from text already in memory. `source` is used only to label
/// errors (it need not be a real path).
pub fn load_str(text: &str, source: impl AsRef<Path>) -> Result<Table, DucetError> {
    let source = source.as_ref();
    let mut table = Table { trie: Trie::new(), implicit_ranges: Vec::new() };

    for (line_no, raw_line) in text.lines().enumerate() {
        let line_no = line_no + 1;
        let line = strip_comment(raw_line).trim_end();

        if line.is_empty() || line.starts_with("@version") {
            continue;
        }

        if let Some(rest) = line.strip_prefix("@implicitweights") {
            table.implicit_ranges.push(parse_implicit_weights(rest, source, line_no)?);
            continue;
        }

        let (key, cea) = parse_entry(line, source, line_no)?;
        table.trie.insert(&key, cea);
    }

    Ok(table)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

fn malformed(source: &Path, line: usize, message: impl Into<String>) -> DucetError {
    DucetError::MalformedLine { file: source.to_path_buf(), line, message: message.into() }
}

fn parse_implicit_weights(rest: &str, source: &Path, line_no: usize) -> Result<ImplicitRange, DucetError> {
    let (range, base) = rest
        .split_once(';')
        .ok_or_else(|| malformed(source, line_no, "expected '<start>..<end>; <base>'"))?;

    let (start, end) = range
        .trim()
        .split_once("..")
        .ok_or_else(|| malformed(source, line_no, "expected '<start>..<end>' range"))?;

    let start = parse_hex_u32(start.trim(), source, line_no)?;
    let end = parse_hex_u32(end.trim(), source, line_no)?;
    let base = parse_hex_u16(base.trim(), source, line_no)?;

    Ok(ImplicitRange { start, end, base })
}

fn parse_entry(line: &str, source: &Path, line_no: usize) -> Result<(Vec<u32>, Cea), DucetError> {
    let (key_part, elements_part) = line
        .split_once(';')
        .ok_or_else(|| malformed(source, line_no, "expected '<codepoints>; <elements>'"))?;

    let key = key_part
        .split_whitespace()
        .map(|h| parse_hex_u32(h, source, line_no))
        .collect::<Result<Vec<_>, _>>()?;

    if key.is_empty() {
        return Err(malformed(source, line_no, "entry has no codepoints on the left side"));
    }

    let elements_part = elements_part.trim();
    let mut cea = Cea::new();
    for caps in COLLATION_ELEMENT.captures_iter(elements_part) {
        let primary = u16::from_str_radix(&caps[1], 16)
            .map_err(|e| malformed(source, line_no, e.to_string()))?;
        let secondary = u16::from_str_radix(&caps[2], 16)
            .map_err(|e| malformed(source, line_no, e.to_string()))?;
        let tertiary = u16::from_str_radix(&caps[3], 16)
            .map_err(|e| malformed(source, line_no, e.to_string()))?;
        cea.push(CollationElement::new(primary, secondary, tertiary));
    }

    if cea.is_empty() {
        return Err(malformed(source, line_no, "no collation elements found after ';'"));
    }

    Ok((key, cea))
}

fn parse_hex_u32(s: &str, source: &Path, line_no: usize) -> Result<u32, DucetError> {
    u32::from_str_radix(s, 16).map_err(|e| malformed(source, line_no, e.to_string()))
}

fn parse_hex_u16(s: &str, source: &Path, line_no: usize) -> Result<u16, DucetError> {
    u16::from_str_radix(s, 16).map_err(|e| malformed(source, line_no, e.to_string()))
}
