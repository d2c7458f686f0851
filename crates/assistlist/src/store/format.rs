//! Text encoding for the store file.
//!
//! Each entry is written as a labelled block:
//!
//! ```text
//! ==== Entry #1 ====
//! Parent/Guardian Information:
//!   Last Name: Reyes
//!
//! Student Information:
//!   First Name: Ana
//!
//! --------------------------
//!
//! ```
//!
//! Nothing is escaped: a field name containing a colon, or a value containing
//! the separator line or an entry header, will not survive a round trip.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

use crate::entry::{Entry, FieldMap};

/// Line closing every entry block.
pub const SEPARATOR: &str = "--------------------------";

/// Heading of the parent/guardian sub-block.
pub const PARENT_HEADING: &str = "Parent/Guardian Information:";

/// Heading of the student sub-block.
pub const STUDENT_HEADING: &str = "Student Information:";

const BLOCK_PATTERN: &str = r"(?s)==== Entry #\d+ ====\n(.*?)\n--------------------------";
const PARENT_PATTERN: &str = r"(?s)Parent/Guardian Information:\n(.*?)\n\nStudent Information:";
const STUDENT_PATTERN: &str = r"(?s)Student Information:\n(.*)";

/// Encode entries into store-file text, numbering them from 1.
#[must_use]
pub fn encode(entries: &[Entry]) -> String {
    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        out.push_str(&format!("==== Entry #{} ====\n", i + 1));
        out.push_str(PARENT_HEADING);
        out.push('\n');
        push_fields(&mut out, &entry.parent);
        out.push('\n');
        out.push_str(STUDENT_HEADING);
        out.push('\n');
        push_fields(&mut out, &entry.student);
        out.push('\n');
        out.push_str(SEPARATOR);
        out.push_str("\n\n");
    }
    out
}

fn push_fields(out: &mut String, fields: &FieldMap) {
    for (name, value) in fields.iter() {
        out.push_str(&format!("  {name}: {value}\n"));
    }
}

/// Decode store-file text into entries.
///
/// Never fails: text outside recognised blocks is ignored and a block missing
/// a sub-block yields an empty record for it.
#[must_use]
pub fn decode(text: &str) -> Vec<Entry> {
    static DECODER: OnceLock<Decoder> = OnceLock::new();
    DECODER.get_or_init(Decoder::new).decode(text)
}

/// Compiled patterns for scanning store-file text.
#[derive(Debug)]
pub struct Decoder {
    block: Regex,
    parent: Regex,
    student: Regex,
}

impl Decoder {
    /// Compile the block patterns.
    ///
    /// # Panics
    ///
    /// Panics if a built-in pattern fails to compile.
    #[must_use]
    pub fn new() -> Self {
        Self {
            block: Regex::new(BLOCK_PATTERN).expect("Invalid block pattern"),
            parent: Regex::new(PARENT_PATTERN).expect("Invalid parent pattern"),
            student: Regex::new(STUDENT_PATTERN).expect("Invalid student pattern"),
        }
    }

    /// Decode every entry block found in `text`, in file order.
    ///
    /// `\r\n` and lone `\r` line endings are read as `\n`.
    #[must_use]
    pub fn decode(&self, text: &str) -> Vec<Entry> {
        let text = normalize_newlines(text);
        self.block
            .captures_iter(&text)
            .filter_map(|caps| caps.get(1))
            .map(|block| self.decode_block(block.as_str()))
            .collect()
    }

    fn decode_block(&self, block: &str) -> Entry {
        let parent = self
            .parent
            .captures(block)
            .and_then(|caps| caps.get(1))
            .map(|m| parse_fields(m.as_str()))
            .unwrap_or_default();
        let student = self
            .student
            .captures(block)
            .and_then(|caps| caps.get(1))
            .map(|m| parse_fields(m.as_str()))
            .unwrap_or_default();
        Entry::new(parent, student)
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Split `name: value` lines at the first colon; lines without one are skipped.
fn parse_fields(sub_block: &str) -> FieldMap {
    sub_block
        .lines()
        .filter_map(|line| line.trim().split_once(':'))
        .map(|(name, value)| (name.trim(), value.trim()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(parent: &[(&str, &str)], student: &[(&str, &str)]) -> Entry {
        Entry::new(
            parent.iter().copied().collect(),
            student.iter().copied().collect(),
        )
    }

    #[test]
    fn test_encode_layout() {
        let text = encode(&[entry(&[("Last Name", "Reyes")], &[("First Name", "Ana")])]);
        assert_eq!(
            text,
            "==== Entry #1 ====\n\
             Parent/Guardian Information:\n  Last Name: Reyes\n\n\
             Student Information:\n  First Name: Ana\n\n\
             --------------------------\n\n"
        );
    }

    #[test]
    fn test_encode_numbers_from_one() {
        let text = encode(&[Entry::default(), Entry::default(), Entry::default()]);
        assert!(text.contains("==== Entry #1 ===="));
        assert!(text.contains("==== Entry #3 ===="));
        assert!(!text.contains("==== Entry #0 ===="));
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn test_round_trip_preserves_order() {
        let entries: Vec<Entry> = ["A", "B", "C", "D", "E"]
            .into_iter()
            .map(|name| {
                entry(
                    &[("Last Name", name), ("Sex", "F"), ("Address", "12 Rizal St")],
                    &[("First Name", name), ("Year Level", "Grade 7")],
                )
            })
            .collect();

        let decoded = decode(&encode(&entries));
        assert_eq!(decoded, entries);
    }

    #[test]
    fn test_round_trip_empty_values() {
        let entries = vec![entry(&[("Middle Name", "")], &[("Extension Name", "")])];
        assert_eq!(decode(&encode(&entries)), entries);
    }

    #[test]
    fn test_round_trip_empty_records() {
        let entries = vec![Entry::default(), entry(&[], &[("First Name", "Lito")])];
        assert_eq!(decode(&encode(&entries)), entries);
    }

    #[test]
    fn test_decode_ignores_garbage() {
        assert!(decode("nothing to see here").is_empty());
        assert!(decode("").is_empty());
    }

    #[test]
    fn test_decode_splits_on_first_colon() {
        let text = "==== Entry #1 ====\n\
                    Parent/Guardian Information:\n  Contact Number: 0917: ext 2\n\n\
                    Student Information:\n  First Name: Ana\n\n\
                    --------------------------\n";
        let entries = decode(text);
        assert_eq!(entries[0].parent.get("Contact Number"), Some("0917: ext 2"));
    }

    #[test]
    fn test_decode_skips_lines_without_colon() {
        let text = "==== Entry #1 ====\n\
                    Parent/Guardian Information:\n  stray line\n  Last Name: Cruz\n\n\
                    Student Information:\n  no colon here\n  First Name: Ben\n\n\
                    --------------------------\n";
        let entries = decode(text);
        assert_eq!(entries[0].parent.len(), 1);
        assert_eq!(entries[0].student.len(), 1);
        assert_eq!(entries[0].student.get("First Name"), Some("Ben"));
    }

    #[test]
    fn test_decode_missing_parent_block() {
        let text = "==== Entry #7 ====\n\
                    Student Information:\n  First Name: Ben\n\n\
                    --------------------------\n";
        let entries = decode(text);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].parent.is_empty());
        assert_eq!(entries[0].student.get("First Name"), Some("Ben"));
    }

    #[test]
    fn test_decode_keeps_file_field_order() {
        let text = "==== Entry #1 ====\n\
                    Parent/Guardian Information:\n  Sex: M\n  Last Name: Cruz\n\n\
                    Student Information:\n\n\
                    --------------------------\n";
        let entries = decode(text);
        let names: Vec<_> = entries[0].parent.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Sex", "Last Name"]);
    }

    #[test]
    fn test_decode_ignores_header_numbers() {
        let text = format!(
            "{}{}",
            encode(&[entry(&[("Last Name", "First")], &[])]).replace("#1", "#9"),
            encode(&[entry(&[("Last Name", "Second")], &[])])
        );
        let entries = decode(&text);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].parent.get("Last Name"), Some("First"));
        assert_eq!(entries[1].parent.get("Last Name"), Some("Second"));
    }

    #[test]
    fn test_decode_windows_line_endings() {
        let entries = vec![
            entry(&[("Last Name", "Reyes"), ("Sex", "F")], &[("First Name", "Ana")]),
            entry(&[("Last Name", "Cruz")], &[("First Name", "Ben")]),
        ];
        let text = encode(&entries).replace('\n', "\r\n");

        assert_eq!(decode(&text), entries);
    }

    #[test]
    fn test_decode_old_mac_line_endings() {
        let entries = vec![entry(&[("Last Name", "Reyes")], &[("First Name", "Ana")])];
        let text = encode(&entries).replace('\n', "\r");

        assert_eq!(decode(&text), entries);
    }

    #[test]
    fn test_decoder_reused_across_calls() {
        let decoder = Decoder::default();
        let text = encode(&[entry(&[("Last Name", "Reyes")], &[])]);
        assert_eq!(decoder.decode(&text), decoder.decode(&text.replace('\n', "\r\n")));
    }

    #[test]
    fn test_decode_unterminated_block_is_dropped() {
        let mut text = encode(&[entry(&[("Last Name", "Kept")], &[])]);
        text.push_str("==== Entry #2 ====\nParent/Guardian Information:\n  Last Name: Lost\n");
        let entries = decode(&text);
        assert_eq!(entries.len(), 1);
    }
}
