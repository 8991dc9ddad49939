//! Streaming bencode tokenization ([BEP-3]).
//!
//! Bencode is the serialization format used throughout BitTorrent for storing
//! and transmitting structured data, including `.torrent` files and tracker
//! responses.
//!
//! This module reads bencode one lexical unit at a time instead of building a
//! document tree: the [`Tokenizer`] yields borrowed [`Token`]s on demand from
//! a fully buffered byte slice, and the [`FieldExtractor`] drives it to pull
//! a single dictionary value out of an arbitrarily nested, untrusted stream.
//!
//! # Tokens
//!
//! | Input | Tokens |
//! |-------|--------|
//! | `i42e` | `Integer(b"42")` |
//! | `4:spam` | `String(b"spam")` |
//! | `l4:spami42ee` | `ListBegin`, `String(b"spam")`, `Integer(b"42")`, `ListEnd` |
//! | `d3:cow3:mooe` | `DictBegin`, `String(b"cow")`, `String(b"moo")`, `DictEnd` |
//!
//! # Examples
//!
//! ## Walking a token stream
//!
//! ```
//! use seedtool::bencode::{Token, Tokenizer};
//!
//! let mut tokens = Tokenizer::new(b"l4:spam4:eggse");
//!
//! assert_eq!(tokens.next_token(), Ok(Token::ListBegin));
//! assert_eq!(tokens.next_token(), Ok(Token::String(b"spam")));
//! assert_eq!(tokens.next_token(), Ok(Token::String(b"eggs")));
//! assert_eq!(tokens.next_token(), Ok(Token::ListEnd));
//! assert_eq!(tokens.next_token(), Ok(Token::Done));
//! ```
//!
//! ## Extracting one field
//!
//! ```
//! use seedtool::bencode::{find_first, KeyScope};
//!
//! let data = b"d4:infod4:name8:test.txt12:piece lengthi16384eee";
//!
//! let name = find_first(data, b"name", KeyScope::Within(b"info")).unwrap();
//! assert_eq!(name.as_deref(), Some(b"test.txt".as_slice()));
//! ```
//!
//! # Error Handling
//!
//! Tokenization can fail for various reasons:
//!
//! - [`BencodeError::UnexpectedEof`] - Input ended inside a string or an open container
//! - [`BencodeError::InvalidInteger`] - Malformed integer (e.g., leading zeros)
//! - [`BencodeError::InvalidLengthPrefix`] - Malformed string length
//! - [`BencodeError::InvalidDictKey`] - A dictionary key that is not a string
//! - [`BencodeError::DepthExceeded`] - Nesting beyond the configured bound
//!
//! Every error is terminal: the tokenizer does not resynchronize, and
//! repeated calls keep returning the same error.
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod error;
mod extract;
mod tokenizer;

pub use error::BencodeError;
pub use extract::{find_first, ExtractError, FieldExtractor, KeyScope};
pub use tokenizer::{Token, Tokenizer, DEFAULT_MAX_DEPTH};
