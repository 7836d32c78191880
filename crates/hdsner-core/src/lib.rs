//! # hdsner Core
//!
//! Reshapes BIO-tagged token files into the JSON span format used for
//! span-based named entity recognition on historical document datasets.
//!
//! ## Quick Start
//!
//! ```rust
//! use hdsner_core::{decode_spans, parse_sequences, Span};
//!
//! let sequences = parse_sequences("Vasco\tB-PERS\nda\tI-PERS\nGama\tI-PERS\npartiu\tO\n");
//! assert_eq!(sequences[0].spans(), vec![Span::new(0, 2, "PERS")]);
//!
//! assert_eq!(decode_spans(["I-PERS", "B-PERS"]), vec![Span::new(1, 1, "PERS")]);
//! ```
pub mod convert;
pub mod error;
pub mod json;
pub mod meta;
pub mod reader;
pub mod record;
pub mod span;
pub mod tags;

// Re-export primary API
pub use convert::{convert_file, copy_source, write_records};
pub use error::{HdsnerError, Result};
pub use meta::DatasetMeta;
pub use reader::{parse_sequences, Sequence};
pub use record::{convert_str, LabeledSentence};
pub use span::{decode_spans, Span, SpanDecoder};
pub use tags::{Tag, TagPrefix};
