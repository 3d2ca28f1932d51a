//! Property-based tests using proptest.

use proptest::prelude::*;
use strscope::{analyze, detect_literal, inspect, inspect_with_options, InspectOptions};

proptest! {
    #[test]
    fn test_source_len_matches_utf16_length(content in "\\PC{0,500}") {
        let analysis = analyze(&content);
        let expected = content.encode_utf16().count();
        prop_assert_eq!(analysis.source_len, expected);
        prop_assert_eq!(analysis.descriptors.len(), expected);
    }

    #[test]
    fn test_descriptor_indexes_are_positions(content in "\\PC{0,200}") {
        let analysis = analyze(&content);
        for (i, d) in analysis.descriptors.iter().enumerate() {
            prop_assert_eq!(d.index, i);
        }
    }

    #[test]
    fn test_analysis_is_deterministic(content in "\\PC{0,200}") {
        prop_assert_eq!(analyze(&content), analyze(&content));
    }

    #[test]
    fn test_descriptor_fields_are_consistent(content in "\\PC{0,200}") {
        for d in &analyze(&content).descriptors {
            prop_assert!(!d.glyph.is_empty());
            prop_assert_eq!(&d.hex, &format!("{:X}", d.code_unit));
            prop_assert_eq!(d.is_ascii, d.code_unit <= 0x7F);
            prop_assert!(d.unicode_notation().starts_with("U+"));
        }
    }

    #[test]
    fn test_any_quoted_text_is_a_literal(inner in "\\PC{0,100}") {
        // Wrapping in double quotes always produces a detectable literal
        // whose extracted content is exactly the text that was wrapped.
        let quoted = format!("\"{}\"", inner);
        prop_assert_eq!(detect_literal(&quoted), Some(inner.as_str()));

        let report = inspect(&quoted);
        prop_assert!(report.literal);
        prop_assert_eq!(report.text, inner);
    }

    #[test]
    fn test_literal_flag_agrees_with_detection(content in "\\PC{0,200}") {
        let report = inspect(&content);
        prop_assert_eq!(report.literal, detect_literal(&content).is_some());
        prop_assert_eq!(
            report.analysis.source_len,
            report.text.encode_utf16().count()
        );
    }

    #[test]
    fn test_raw_inspection_keeps_selection(content in "\\PC{0,200}") {
        let options = InspectOptions::new().with_unwrap_literals(false);
        let report = inspect_with_options(&content, &options);
        prop_assert!(!report.literal);
        prop_assert_eq!(report.text, content);
    }
}
