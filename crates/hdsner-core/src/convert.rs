//! # File Conversion
//!
//! Converts one BIO text file into a JSON array of [`LabeledSentence`]s.
//! The whole output is built in memory first, so a failed read never leaves
//! a partial output file behind.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{HdsnerError, Result};
use crate::json;
use crate::record::{convert_str, LabeledSentence};

/// Read `input`, convert it and write the JSON array to `output`.
///
/// Returns the number of records written. A missing `input` yields
/// [`HdsnerError::SourceNotFound`].
pub fn convert_file(input: &Path, output: &Path) -> Result<usize> {
    let text = fs::read_to_string(input).map_err(|e| HdsnerError::read(input, e))?;
    let records = convert_str(&text)?;
    write_records(&records, output)?;

    debug!(
        input = %input.display(),
        output = %output.display(),
        records = records.len(),
        "converted file"
    );
    Ok(records.len())
}

/// Copy a raw source file unchanged. A missing `input` yields
/// [`HdsnerError::SourceNotFound`] and creates nothing.
pub fn copy_source(input: &Path, output: &Path) -> Result<u64> {
    if !input.is_file() {
        return Err(HdsnerError::SourceNotFound(input.to_path_buf()));
    }
    fs::copy(input, output).map_err(|e| HdsnerError::io(output, e))
}

/// Serialize records as a single JSON array, ASCII-escaped with `, ` and
/// `: ` separators.
pub fn write_records(records: &[LabeledSentence], output: &Path) -> Result<()> {
    let json = json::to_ascii_string(records)?;
    fs::write(output, json).map_err(|e| HdsnerError::io(output, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_convert_file_writes_array() {
        let dir = TempDir::new("hdsner-convert").unwrap();
        let input = dir.path().join("train.txt");
        let output = dir.path().join("train.json");
        fs::write(&input, "Afonso\tB-PERS\nHenriques\tI-PERS\n\nem\tO\nGuimarães\tB-LOC\n")
            .unwrap();

        let count = convert_file(&input, &output).unwrap();
        assert_eq!(count, 2);

        let written: Vec<LabeledSentence> =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(written[0].labeled_entities, r#"[[0, 1, "PERS"]]"#);
        assert_eq!(written[1].labeled_entities, r#"[[1, 1, "LOC"]]"#);
        assert_eq!(written[1].sentence, r#"["em", "Guimar\u00e3es"]"#);
    }

    #[test]
    fn test_output_file_is_ascii_with_spaced_separators() {
        let dir = TempDir::new("hdsner-convert-bytes").unwrap();
        let input = dir.path().join("train.txt");
        let output = dir.path().join("train.json");
        fs::write(&input, "Évora\tB-LOC\n").unwrap();

        convert_file(&input, &output).unwrap();
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            r#"[{"sentence": "[\"\\u00c9vora\"]", "labeled entities": "[[0, 0, \"LOC\"]]"}]"#
        );
    }

    #[test]
    fn test_missing_source_writes_nothing() {
        let dir = TempDir::new("hdsner-missing").unwrap();
        let input = dir.path().join("val.txt");
        let output = dir.path().join("dev.json");

        let err = convert_file(&input, &output).unwrap_err();
        assert!(matches!(err, HdsnerError::SourceNotFound(ref p) if *p == input));
        assert!(!output.exists());
    }

    #[test]
    fn test_copy_source() {
        let dir = TempDir::new("hdsner-copy").unwrap();
        let input = dir.path().join("val.txt");
        let output = dir.path().join("dev.txt");
        fs::write(&input, "Sé\tB-LOC\n").unwrap();

        copy_source(&input, &output).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "Sé\tB-LOC\n");

        let missing = dir.path().join("test.txt");
        let err = copy_source(&missing, &dir.path().join("out.txt")).unwrap_err();
        assert!(err.is_not_found());
        assert!(!dir.path().join("out.txt").exists());
    }

    #[test]
    fn test_unwritable_output_reports_path() {
        let dir = TempDir::new("hdsner-unwritable").unwrap();
        let input = dir.path().join("test.txt");
        fs::write(&input, "a\tO\n").unwrap();
        let output = dir.path().join("no-such-dir").join("test.json");

        let err = convert_file(&input, &output).unwrap_err();
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("test.json"));
    }
}
