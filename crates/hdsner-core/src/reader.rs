//! # BIO Sequence Reader
//!
//! Parses tab-separated `token<TAB>tag` text into sequences. An empty line
//! ends a sequence; a line without a tag column is tagged `O`.

use crate::span::{decode_spans, Span};
use crate::tags::OUTSIDE;

/// One sentence: tokens with their raw tags, index-aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    pub tokens: Vec<String>,
    pub tags: Vec<String>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one `token<TAB>tag` line. The line is trimmed first; a missing
    /// tag column defaults to `O` and columns past the second are ignored.
    pub fn push_line(&mut self, line: &str) {
        let mut fields = line.trim().split('\t');
        let token = fields.next().unwrap_or_default();
        let tag = fields.next().unwrap_or(OUTSIDE);

        self.tokens.push(token.to_string());
        self.tags.push(tag.to_string());
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Decode the entity spans of this sequence.
    pub fn spans(&self) -> Vec<Span> {
        decode_spans(self.tags.iter().map(String::as_str))
    }
}

/// Split BIO text into sequences.
///
/// Only empty lines separate sequences. Whitespace-only lines inside a
/// sequence stay as empty `O` tokens, but leading and trailing ones are
/// dropped. Runs of empty lines never produce empty sequences.
///
/// # Examples
/// ```
/// use hdsner_core::reader::parse_sequences;
///
/// let text = "Lisboa\tB-LOC\né\tO\n\nJoão\tB-PERS\n";
/// let sequences = parse_sequences(text);
/// assert_eq!(sequences.len(), 2);
/// assert_eq!(sequences[0].tokens, vec!["Lisboa", "é"]);
/// ```
pub fn parse_sequences(text: &str) -> Vec<Sequence> {
    let mut sequences = Vec::new();
    let mut block = Vec::new();

    for line in text.lines() {
        if line.is_empty() {
            flush_block(&mut block, &mut sequences);
        } else {
            block.push(line);
        }
    }

    // Last sequence may not be followed by an empty line
    flush_block(&mut block, &mut sequences);
    sequences
}

fn flush_block(block: &mut Vec<&str>, sequences: &mut Vec<Sequence>) {
    let is_content = |line: &&str| !line.trim().is_empty();
    if let (Some(first), Some(last)) = (
        block.iter().position(is_content),
        block.iter().rposition(is_content),
    ) {
        let mut sequence = Sequence::new();
        for line in &block[first..=last] {
            sequence.push_line(line);
        }
        sequences.push(sequence);
    }
    block.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_sequences() {
        let text = "D.\tB-PERS\nJoão\tI-PERS\nfoi\tO\n\nem\tO\nBraga\tB-LOC\n";
        let sequences = parse_sequences(text);

        assert_eq!(sequences.len(), 2);
        assert_eq!(sequences[0].tokens, vec!["D.", "João", "foi"]);
        assert_eq!(sequences[0].tags, vec!["B-PERS", "I-PERS", "O"]);
        assert_eq!(sequences[0].spans(), vec![Span::new(0, 1, "PERS")]);
        assert_eq!(sequences[1].spans(), vec![Span::new(1, 1, "LOC")]);
    }

    #[test]
    fn test_missing_tag_defaults_to_outside() {
        let sequences = parse_sequences("Porto\n");
        assert_eq!(sequences[0].tags, vec!["O"]);
        assert!(sequences[0].spans().is_empty());
    }

    #[test]
    fn test_extra_columns_ignored() {
        let sequences = parse_sequences("Porto\tB-LOC\tNOUN\n");
        assert_eq!(sequences[0].tags, vec!["B-LOC"]);
    }

    #[test]
    fn test_surrounding_and_repeated_blank_lines() {
        let text = "\n\n  \na\tO\n\n\n\t\nb\tO\n\n\n";
        let sequences = parse_sequences(text);
        assert_eq!(sequences.len(), 2);
        assert_eq!(sequences[0].tokens, vec!["a"]);
        assert_eq!(sequences[1].tokens, vec!["b"]);
    }

    #[test]
    fn test_whitespace_line_inside_sequence_is_a_token() {
        let sequences = parse_sequences("a\tO\n \nb\tB-LOC\n");
        assert_eq!(sequences.len(), 1);
        assert_eq!(sequences[0].tokens, vec!["a", "", "b"]);
        assert_eq!(sequences[0].tags, vec!["O", "O", "B-LOC"]);
        assert_eq!(sequences[0].spans(), vec![Span::new(2, 2, "LOC")]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = "Coimbra\tB-LOC\r\n\r\nRei\tO\r\n";
        let sequences = parse_sequences(text);
        assert_eq!(sequences.len(), 2);
        assert_eq!(sequences[0].tags, vec!["B-LOC"]);
        assert_eq!(sequences[1].tokens, vec!["Rei"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_sequences("").is_empty());
        assert!(parse_sequences("\n \n").is_empty());
    }
}
