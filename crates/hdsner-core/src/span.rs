//! # BIO Span Decoding
//!
//! Turns a sequence of per-token BIO tags into closed entity spans in a
//! single forward pass. Malformed tags never fail decoding: they close any
//! open span and open nothing.

use serde::{Deserialize, Serialize};

use crate::tags::Tag;

/// An entity mention covering tokens `start..=end`.
///
/// Serializes as a 3-element array `[start, end, "TYPE"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(usize, usize, String)", into = "(usize, usize, String)")]
pub struct Span {
    /// Index of the first token.
    pub start: usize,
    /// Index of the last token (inclusive).
    pub end: usize,
    /// Entity type, e.g. `PERS` or `LOC`.
    pub label: String,
}

impl Span {
    pub fn new(start: usize, end: usize, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
        }
    }

    /// Number of tokens covered; 0 for an inverted span.
    pub fn token_count(&self) -> usize {
        self.end.checked_sub(self.start).map_or(0, |n| n + 1)
    }

    /// The tokens this span covers, or `None` if it does not fit `tokens`.
    pub fn tokens<'t, T>(&self, tokens: &'t [T]) -> Option<&'t [T]> {
        tokens.get(self.start..=self.end)
    }
}

impl From<(usize, usize, String)> for Span {
    fn from((start, end, label): (usize, usize, String)) -> Self {
        Self { start, end, label }
    }
}

impl From<Span> for (usize, usize, String) {
    fn from(span: Span) -> Self {
        (span.start, span.end, span.label)
    }
}

/// The span currently being extended.
#[derive(Debug, Clone, Copy)]
struct OpenSpan<'a> {
    label: &'a str,
    start: usize,
}

/// Incremental BIO decoder.
///
/// Feed tags in order with [`push`](Self::push), then call
/// [`finish`](Self::finish) to close any span still open.
///
/// # Examples
/// ```
/// use hdsner_core::span::{Span, SpanDecoder};
///
/// let mut decoder = SpanDecoder::new();
/// for tag in ["B-PERS", "I-PERS", "O", "B-LOC"] {
///     decoder.push(tag);
/// }
/// assert_eq!(
///     decoder.finish(),
///     vec![Span::new(0, 1, "PERS"), Span::new(3, 3, "LOC")]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct SpanDecoder<'a> {
    open: Option<OpenSpan<'a>>,
    position: usize,
    spans: Vec<Span>,
}

impl<'a> SpanDecoder<'a> {
    /// Create a decoder positioned before the first token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the tag of the next token.
    pub fn push(&mut self, raw: &'a str) {
        let tag = Tag::parse(raw);
        let i = self.position;
        self.position += 1;

        if let Some(open) = self.open {
            if tag.continues(open.label) {
                return;
            }
            // Closed on the token before the one that broke the run.
            self.spans.push(Span::new(open.start, i - 1, open.label));
            self.open = None;
        }

        if let (true, Some(label)) = (tag.is_begin(), tag.entity_type) {
            self.open = Some(OpenSpan { label, start: i });
        }
    }

    /// Number of tags consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Close any open span on the final token and return all spans.
    pub fn finish(mut self) -> Vec<Span> {
        if let Some(open) = self.open.take() {
            let last_index = self.position - 1;
            self.spans.push(Span::new(open.start, last_index, open.label));
        }
        self.spans
    }
}

/// Decode a full tag sequence into spans.
///
/// # Examples
/// ```
/// use hdsner_core::span::{decode_spans, Span};
///
/// let spans = decode_spans(["B-PERS", "B-LOC"]);
/// assert_eq!(spans, vec![Span::new(0, 0, "PERS"), Span::new(1, 1, "LOC")]);
/// ```
pub fn decode_spans<'a, I>(tags: I) -> Vec<Span>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut decoder = SpanDecoder::new();
    for tag in tags {
        decoder.push(tag);
    }
    decoder.finish()
}
