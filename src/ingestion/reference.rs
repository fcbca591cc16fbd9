//! Reference-list loading (country names, legal suffixes).
//!
//! Format: one entry per line. Lines are trimmed, blank lines are skipped, order is kept.
//! There is no escaping or comment syntax.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::ClassifyResult;
use crate::types::ReferenceList;

/// Load a reference list from a file. Invalid UTF-8 is replaced rather than rejected.
pub fn load_reference_list(path: impl AsRef<Path>) -> ClassifyResult<ReferenceList> {
    let bytes = fs::read(path)?;
    parse_reference_list(&String::from_utf8_lossy(&bytes))
}

/// Read a reference list from any reader.
pub fn read_reference_list<R: Read>(mut reader: R) -> ClassifyResult<ReferenceList> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    parse_reference_list(&String::from_utf8_lossy(&bytes))
}

impl ReferenceList {
    /// Read a reference list from any reader. See [`read_reference_list`].
    pub fn from_reader<R: Read>(reader: R) -> ClassifyResult<Self> {
        read_reference_list(reader)
    }
}

/// Parse reference-list text.
pub fn parse_reference_list(text: &str) -> ClassifyResult<ReferenceList> {
    ReferenceList::new(text.lines().map(str::trim).filter(|line| !line.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::{parse_reference_list, read_reference_list};
    use crate::types::ReferenceList;

    #[test]
    fn skips_blank_lines_and_trims() {
        let list = parse_reference_list("Inc.\n\n  LLC  \r\n\t\nLtd").unwrap();
        assert_eq!(list.entries(), ["Inc.", "LLC", "Ltd"]);
    }

    #[test]
    fn reads_lossily_from_bytes() {
        let list = read_reference_list(&b"Canada\nC\xf4te d'Ivoire\n"[..]).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.entries()[1], "C\u{fffd}te d'Ivoire");
    }

    #[test]
    fn from_reader_keeps_order() {
        let list = ReferenceList::from_reader(&b"India\nCanada\nIndia\n"[..]).unwrap();
        assert_eq!(list.entries(), ["India", "Canada", "India"]);
    }

    #[test]
    fn empty_text_is_an_empty_list() {
        assert!(parse_reference_list("\n \n").unwrap().is_empty());
    }
}
