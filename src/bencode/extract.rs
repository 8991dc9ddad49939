use bytes::Bytes;
use thiserror::Error;

use super::error::BencodeError;
use super::tokenizer::{Token, Tokenizer};

/// Which dictionary keys a [`FieldExtractor`] may match.
///
/// The two modes give different results on documents that repeat a key name
/// at different nesting levels, so the choice is part of the public
/// contract rather than an implementation detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyScope<'a> {
    /// Match the first dictionary key equal to the target, at any depth, in
    /// document order. String values and list elements never match.
    Anywhere,
    /// Match only keys directly inside a dictionary that is itself the value
    /// of an entry with this name (e.g. the `info` dictionary of a torrent).
    Within(&'a [u8]),
}

/// Extraction failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The tokenizer rejected the input; surfaced verbatim, extraction never
    /// attempts partial recovery.
    #[error("bencode error: {0}")]
    Bencode(#[from] BencodeError),

    /// The matched key's value is not a byte string.
    #[error("value for key `{key}` is not a string (found {found})")]
    UnexpectedValueType {
        /// The key that matched, lossily decoded for display.
        key: String,
        /// What the value turned out to be.
        found: &'static str,
    },
}

/// One open container as seen by the extractor, labelled with the key its
/// parent dictionary stores it under.
#[derive(Debug)]
struct Level<'a> {
    is_dict: bool,
    expecting_key: bool,
    label: Option<&'a [u8]>,
    pending_key: Option<&'a [u8]>,
}

/// Drives a [`Tokenizer`] over a buffer and returns the string value of the
/// first matching dictionary key.
///
/// The extractor never materializes the document: it mirrors the nesting
/// structure token by token, skipping over composite values it is not
/// interested in. Matching defaults to [`KeyScope::Anywhere`]; use
/// [`within`](FieldExtractor::within) for a scoped lookup.
///
/// # Examples
///
/// ```
/// use seedtool::bencode::FieldExtractor;
///
/// let data = b"d4:infod4:name8:test.txtee";
/// let name = FieldExtractor::new(data, b"name")
///     .within(b"info")
///     .run()
///     .unwrap();
/// assert_eq!(name.as_deref(), Some(b"test.txt".as_slice()));
/// ```
#[derive(Debug)]
pub struct FieldExtractor<'a> {
    tokenizer: Tokenizer<'a>,
    target: &'a [u8],
    scope: KeyScope<'a>,
}

impl<'a> FieldExtractor<'a> {
    /// Creates an unscoped extractor for `key` over `data`.
    pub fn new(data: &'a [u8], key: &'a [u8]) -> Self {
        Self {
            tokenizer: Tokenizer::new(data),
            target: key,
            scope: KeyScope::Anywhere,
        }
    }

    /// Restricts matching to keys directly inside the dictionary stored
    /// under `parent`.
    pub fn within(mut self, parent: &'a [u8]) -> Self {
        self.scope = KeyScope::Within(parent);
        self
    }

    /// The matching mode this extractor will use.
    pub fn scope(&self) -> KeyScope<'a> {
        self.scope
    }

    /// Runs the extraction, consuming tokens until a match, an error, or end
    /// of stream.
    ///
    /// The returned bytes are copied out of the input buffer. `Ok(None)`
    /// means the stream ended without a matching key.
    ///
    /// # Errors
    ///
    /// Any tokenizer error aborts extraction and is surfaced verbatim. A
    /// matched key whose value is not a string yields
    /// [`ExtractError::UnexpectedValueType`].
    pub fn run(mut self) -> Result<Option<Bytes>, ExtractError> {
        let mut levels: Vec<Level<'a>> = Vec::new();
        let mut matched = false;

        loop {
            let token = self.tokenizer.next_token()?;

            if matched {
                return match token {
                    Token::String(value) => Ok(Some(Bytes::copy_from_slice(value))),
                    other => Err(ExtractError::UnexpectedValueType {
                        key: String::from_utf8_lossy(self.target).into_owned(),
                        found: other.name(),
                    }),
                };
            }

            match token {
                Token::String(s) => {
                    if let Some(top) = levels.last_mut() {
                        if top.is_dict {
                            if top.expecting_key {
                                let in_scope = match self.scope {
                                    KeyScope::Anywhere => true,
                                    KeyScope::Within(parent) => top.label == Some(parent),
                                };
                                if in_scope && s == self.target {
                                    matched = true;
                                }
                                top.pending_key = Some(s);
                            }
                            top.expecting_key = !top.expecting_key;
                        }
                    }
                }
                Token::Integer(_) => {
                    // The tokenizer guarantees this sits in value position.
                    if let Some(top) = levels.last_mut() {
                        if top.is_dict {
                            top.expecting_key = true;
                        }
                    }
                }
                Token::ListBegin | Token::DictBegin => {
                    let label = levels.last_mut().and_then(|top| top.pending_key.take());
                    levels.push(Level {
                        is_dict: token == Token::DictBegin,
                        expecting_key: true,
                        label,
                        pending_key: None,
                    });
                }
                Token::ListEnd | Token::DictEnd => {
                    levels.pop();
                    if let Some(top) = levels.last_mut() {
                        if top.is_dict {
                            top.expecting_key = true;
                        }
                    }
                }
                Token::Done => return Ok(None),
            }
        }
    }
}

/// Convenience wrapper: the first string value stored under `key`, matched
/// according to `scope`.
pub fn find_first<'a>(
    data: &'a [u8],
    key: &'a [u8],
    scope: KeyScope<'a>,
) -> Result<Option<Bytes>, ExtractError> {
    let extractor = FieldExtractor::new(data, key);
    match scope {
        KeyScope::Anywhere => extractor.run(),
        KeyScope::Within(parent) => extractor.within(parent).run(),
    }
}
