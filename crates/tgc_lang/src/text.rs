//! Conversion between tables and the editable text representation
//!
//! One entry per line, `key:=value`, always terminated with `\n`. Literal tab, newline, and
//! carriage-return characters inside either field are written as the two-character sequences
//! `\t`, `\n`, `\r`. The `:=` separator itself is never escaped: a key containing a literal `:=`
//! renders fine but cannot survive a round trip, because [`parse`] always splits on the first
//! occurrence. Values containing `:=` are unaffected.

use crate::error::{Error, Result};
use crate::types::{LangEntry, LangTable};

/// Separator between a key and its value on each line.
pub const SEPARATOR: &str = ":=";

/// Escape control characters for the line format.
///
/// A chain of plain substring replacements in a fixed order, not an escape grammar: an input
/// already containing the two characters `\` `t` passes through unchanged and reads back as a
/// tab.
pub fn escape(field: &str) -> String {
    field
        .replace('\t', "\\t")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

/// Invert [`escape`], with the same fixed-order substring replacement semantics.
pub fn unescape(field: &str) -> String {
    field
        .replace("\\t", "\t")
        .replace("\\n", "\n")
        .replace("\\r", "\r")
}

/// Render a table into the text representation.
///
/// Entries keep their table order. Every line, including the last, ends with `\n` regardless of
/// platform.
pub fn render(table: &LangTable) -> String {
    let mut output = String::new();
    for entry in table.iter() {
        output.push_str(&escape(&entry.key));
        output.push_str(SEPARATOR);
        output.push_str(&escape(&entry.value));
        output.push('\n');
    }
    output
}

/// Parse the text representation into a table.
///
/// A byte-order mark at the start of the first line is stripped. Blank lines are skipped (they do
/// not become empty entries but still count for line numbering). Every other line must contain
/// [`SEPARATOR`]; the split happens at its first occurrence, so values may contain `:=` verbatim.
pub fn parse(input: &str) -> Result<LangTable> {
    let mut entries = Vec::new();

    for (number, line) in input.split('\n').enumerate() {
        let line = if number == 0 {
            line.trim_start_matches('\u{FEFF}')
        } else {
            line
        };

        if line.is_empty() {
            continue;
        }

        let (key, value) = line
            .split_once(SEPARATOR)
            .ok_or(Error::MalformedLine { line: number + 1 })?;

        entries.push(LangEntry::new(unescape(key), unescape(value)));
    }

    Ok(LangTable::new(entries))
}
