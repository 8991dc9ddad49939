//! Torrent metainfo field access ([BEP-3]).
//!
//! A torrent file (`.torrent`) is a bencoded dictionary whose `info`
//! sub-dictionary carries the content metadata, including the suggested
//! display name. This module answers that one question by streaming the file
//! through the bencode tokenizer; no document tree is ever built, so a
//! multi-gigabyte piece table costs nothing beyond scanning past it.
//!
//! # Examples
//!
//! ```no_run
//! use seedtool::metainfo::torrent_name;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = std::fs::read("example.torrent")?;
//! let name = torrent_name(&data)?;
//! println!("Name: {}", String::from_utf8_lossy(&name));
//! # Ok(())
//! # }
//! ```
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

use bytes::Bytes;
use thiserror::Error;

use crate::bencode::{ExtractError, FieldExtractor};

/// Errors that can occur when reading fields out of a torrent file.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetainfoError {
    /// The torrent file is not well-formed bencode, or the field has the
    /// wrong shape.
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// A required field is missing from the torrent file.
    #[error("missing field: {0}")]
    MissingField(&'static str),
}

/// Returns the `name` stored in the torrent's `info` dictionary.
///
/// The lookup is scoped: a `name` key anywhere else in the document (a file
/// named `name`, an unrelated nested dictionary) does not match. The bytes
/// are copied out of `data` and are not required to be UTF-8.
///
/// # Errors
///
/// Returns [`MetainfoError::MissingField`] when the document parses cleanly
/// but carries no such entry, and [`MetainfoError::Extract`] when the input
/// is not well-formed bencode or the name is not a string.
///
/// # Examples
///
/// ```
/// use seedtool::metainfo::torrent_name;
///
/// let data = b"d4:infod6:lengthi1024e4:name8:test.txtee";
/// assert_eq!(&torrent_name(data).unwrap()[..], b"test.txt");
/// ```
pub fn torrent_name(data: &[u8]) -> Result<Bytes, MetainfoError> {
    FieldExtractor::new(data, b"name")
        .within(b"info")
        .run()?
        .ok_or(MetainfoError::MissingField("name"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bencode::BencodeError;

    #[test]
    fn test_name_from_minimal_torrent() {
        let data = b"d4:infod4:name8:test.txtee";
        assert_eq!(&torrent_name(data).unwrap()[..], b"test.txt");
    }

    #[test]
    fn test_name_from_realistic_torrent() {
        // announce + info with binary (non-UTF-8) piece hashes.
        let mut data = Vec::new();
        data.extend_from_slice(b"d8:announce31:http://tracker.example/announce");
        data.extend_from_slice(b"4:infod6:lengthi1024e4:name8:test.txt");
        data.extend_from_slice(b"12:piece lengthi16384e6:pieces20:");
        data.extend_from_slice(&[0xAA; 20]);
        data.extend_from_slice(b"ee");

        assert_eq!(&torrent_name(&data).unwrap()[..], b"test.txt");
    }

    #[test]
    fn test_top_level_name_does_not_count() {
        // "name" outside the info dictionary must not satisfy the lookup.
        let data = b"d4:name7:top.txt4:infod6:lengthi1eee";
        assert_eq!(
            torrent_name(data),
            Err(MetainfoError::MissingField("name"))
        );
    }

    #[test]
    fn test_missing_name() {
        assert_eq!(
            torrent_name(b"d4:infod6:lengthi1eee"),
            Err(MetainfoError::MissingField("name"))
        );
        assert_eq!(
            torrent_name(b"de"),
            Err(MetainfoError::MissingField("name"))
        );
    }

    #[test]
    fn test_malformed_torrent() {
        assert_eq!(
            torrent_name(b"d4:info"),
            Err(MetainfoError::Extract(ExtractError::Bencode(
                BencodeError::UnexpectedEof
            )))
        );
    }

    #[test]
    fn test_non_string_name() {
        let err = torrent_name(b"d4:infod4:namei7eee").unwrap_err();
        assert!(matches!(
            err,
            MetainfoError::Extract(ExtractError::UnexpectedValueType { .. })
        ));
    }
}
