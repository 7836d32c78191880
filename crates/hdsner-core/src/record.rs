//! # Labeled Sentence Records
//!
//! The JSON sequence-labeling format consumed by the span-based NER models.
//! Both fields hold JSON text rather than nested values, so a record looks
//! like `{"sentence": "[\"a\", \"b\"]", "labeled entities": "[[0, 0, \"LOC\"]]"}`.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::json::to_ascii_string;
use crate::reader::{parse_sequences, Sequence};
use crate::span::Span;

/// One converted sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledSentence {
    /// JSON-encoded token list.
    pub sentence: String,
    /// JSON-encoded list of `[start, end, type]` spans.
    #[serde(rename = "labeled entities")]
    pub labeled_entities: String,
}

impl LabeledSentence {
    /// Build the record for a sequence, decoding its spans.
    pub fn from_sequence(sequence: &Sequence) -> Result<Self> {
        Ok(Self {
            sentence: to_ascii_string(&sequence.tokens)?,
            labeled_entities: to_ascii_string(&sequence.spans())?,
        })
    }

    /// Decode the token list back out of `sentence`.
    pub fn tokens(&self) -> Result<Vec<String>> {
        Ok(serde_json::from_str(&self.sentence)?)
    }

    /// Decode the spans back out of `labeled entities`.
    pub fn spans(&self) -> Result<Vec<Span>> {
        Ok(serde_json::from_str(&self.labeled_entities)?)
    }
}

/// Convert a whole BIO file's content into records, one per sequence.
pub fn convert_str(text: &str) -> Result<Vec<LabeledSentence>> {
    parse_sequences(text)
        .iter()
        .map(LabeledSentence::from_sequence)
        .collect()
}
