//! seedtool - seedbox maintenance utilities
//!
//! Small tools for keeping a torrent box tidy, built around a streaming
//! bencode tokenizer that answers questions about `.torrent` files without
//! materializing a document tree.
//!
//! # Modules
//!
//! - [`bencode`] - BEP-3 streaming tokenizer and dictionary key extraction
//! - [`metainfo`] - Torrent metainfo field lookups
//! - [`diskspace`] - Free-space scanning for download target selection
//! - [`filelist`] - Modification-time listing of a directory tree

pub mod bencode;
pub mod diskspace;
pub mod filelist;
pub mod metainfo;

pub use bencode::{
    find_first, BencodeError, ExtractError, FieldExtractor, KeyScope, Token, Tokenizer,
};
pub use diskspace::{best_path, free_space, BestPath};
pub use filelist::{collect_sorted, format_timestamp, FileEntry};
pub use metainfo::{torrent_name, MetainfoError};
