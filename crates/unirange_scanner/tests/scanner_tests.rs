//! Scanner integration tests.
//!
//! Verifies entry extraction, the first-line rule and the malformed-line
//! policies.

use std::path::Path;
use unirange_diagnostics::{DataFile, GenError};
use unirange_options::MalformedLines;
use unirange_scanner::Scanner;

/// Helper: scan every entry of `text`, failing on the first error.
fn scan_all(text: &str, policy: MalformedLines) -> Result<Vec<u32>, GenError> {
    let file = DataFile::new(Path::new("cat.txt"), text);
    let scanner = Scanner::new(file).with_malformed_lines(policy);
    scanner.map(|entry| entry.map(|e| e.code_point)).collect()
}

// ============================================================================
// Well-formed input
// ============================================================================

#[test]
fn test_fileformat_info_listing() {
    let text = "U+0041\tLATIN CAPITAL LETTER A\tA\n\
                U+0042\tLATIN CAPITAL LETTER B\tB\n\
                U+0043\tLATIN CAPITAL LETTER C\tC\n\
                U+0061\tLATIN SMALL LETTER A\ta\n";
    let points = scan_all(text, MalformedLines::Fail).unwrap();
    assert_eq!(points, vec![0x41, 0x42, 0x43, 0x61]);
}

#[test]
fn test_bare_code_points() {
    let text: String = (0x30..=0x39).map(|cp| format!("U+{:04X}\n", cp)).collect();
    let points = scan_all(&text, MalformedLines::Fail).unwrap();
    assert_eq!(points, (0x30..=0x39).collect::<Vec<u32>>());
}

#[test]
fn test_supplementary_planes() {
    let text = "U+1D400 MATHEMATICAL BOLD CAPITAL A\nU+10FFFF x\n";
    let points = scan_all(text, MalformedLines::Fail).unwrap();
    assert_eq!(points, vec![0x1D400, 0x10FFFF]);
}

// ============================================================================
// First line and empty files
// ============================================================================

#[test]
fn test_empty_file_is_fatal() {
    let err = scan_all("", MalformedLines::Fail).unwrap_err();
    assert!(matches!(err, GenError::EmptyFile { .. }));
    assert_eq!(err.to_string(), "'cat.txt' contains no data lines");
}

#[test]
fn test_malformed_first_line_is_fatal() {
    let err = scan_all("Letter list\nU+0041 A\n", MalformedLines::Fail).unwrap_err();
    assert!(matches!(err, GenError::MalformedLine { line: 1, .. }));
}

#[test]
fn test_malformed_first_line_is_fatal_when_skipping() {
    let err = scan_all("\nU+0041 A\n", MalformedLines::Skip).unwrap_err();
    assert!(matches!(err, GenError::MalformedLine { line: 1, .. }));
}

// ============================================================================
// Later malformed lines
// ============================================================================

#[test]
fn test_malformed_later_line_fails_by_default() {
    let err = scan_all("U+0041 A\nU+0042 B\n\nU+0044 D\n", MalformedLines::Fail).unwrap_err();
    assert_eq!(err.line(), Some(3));
    assert_eq!(err.to_string(), "malformed data line 3 in 'cat.txt'");
}

#[test]
fn test_malformed_later_lines_are_skipped_with_warnings() {
    let file = DataFile::new(Path::new("cat.txt"), "U+0041 A\n-- gap --\nU+0042 B\n\n");
    let mut scanner = Scanner::new(file).with_malformed_lines(MalformedLines::Skip);
    let mut points = Vec::new();
    while let Some(entry) = scanner.next_entry().unwrap() {
        points.push(entry.code_point);
    }
    assert_eq!(points, vec![0x41, 0x42]);

    let warnings = scanner.take_warnings();
    let lines: Vec<usize> = warnings.iter().map(|w| w.line).collect();
    assert_eq!(lines, vec![2, 4]);
    assert!(scanner.take_warnings().is_empty());
}

#[test]
fn test_overflowing_digits_are_fatal_in_both_modes() {
    for policy in [MalformedLines::Fail, MalformedLines::Skip] {
        let err = scan_all("U+0041 A\nU+FFFFFFFFF X\n", policy).unwrap_err();
        assert!(matches!(err, GenError::CodePointOutOfRange { line: 2, .. }));
    }
}
