//! # BIO Tags
//!
//! Decomposes raw tag strings such as `B-PERS`, `I-LOC` or `O` into a prefix
//! and an optional entity type. Anything that is not a well-formed `B-`/`I-`
//! tag degrades to an outside-like prefix instead of being rejected.

use std::fmt;

/// Default tag for tokens whose line carries no tag column.
pub const OUTSIDE: &str = "O";

/// The part of a tag before the first `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagPrefix {
    /// `B`: first token of an entity.
    Begin,
    /// `I`: continuation of an entity.
    Inside,
    /// `O`: outside any entity.
    Outside,
    /// Any other prefix. Treated like `Outside`.
    Other,
}

impl TagPrefix {
    fn classify(prefix: &str) -> Self {
        match prefix {
            "B" => Self::Begin,
            "I" => Self::Inside,
            "O" => Self::Outside,
            _ => Self::Other,
        }
    }
}

/// A decomposed tag borrowing from its source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag<'a> {
    pub prefix: TagPrefix,
    /// Entity type after the first `-`. `None` when there is no `-` or
    /// nothing follows it.
    pub entity_type: Option<&'a str>,
    raw: &'a str,
}

impl<'a> Tag<'a> {
    /// Split a raw tag into prefix and entity type.
    ///
    /// # Examples
    /// ```
    /// use hdsner_core::tags::{Tag, TagPrefix};
    ///
    /// let tag = Tag::parse("I-PERS");
    /// assert_eq!(tag.prefix, TagPrefix::Inside);
    /// assert_eq!(tag.entity_type, Some("PERS"));
    ///
    /// let tag = Tag::parse("O");
    /// assert_eq!(tag.entity_type, None);
    /// ```
    pub fn parse(raw: &'a str) -> Self {
        let (prefix, entity_type) = match raw.split_once('-') {
            Some((prefix, rest)) => (prefix, Some(rest).filter(|t| !t.is_empty())),
            None => (raw, None),
        };

        Self {
            prefix: TagPrefix::classify(prefix),
            entity_type,
            raw,
        }
    }

    /// Check if this tag opens a span.
    pub fn is_begin(&self) -> bool {
        self.prefix == TagPrefix::Begin && self.entity_type.is_some()
    }

    /// Check if this tag continues an open span of type `label`.
    pub fn continues(&self, label: &str) -> bool {
        self.prefix == TagPrefix::Inside && self.entity_type == Some(label)
    }

    /// The original tag text.
    pub fn as_str(&self) -> &'a str {
        self.raw
    }
}

impl fmt::Display for Tag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}
