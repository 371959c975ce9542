//! unirange_diagnostics: Errors and warnings raised while generating tables.
//!
//! Every failure is a [`GenError`] variant carrying a stable diagnostic
//! code. Errors tied to a data line embed the file text and a labelled span
//! so the CLI can point at the offending line. Non-fatal findings, such as
//! a skipped malformed line, are reported as [`Warning`]s.

use miette::{Diagnostic, NamedSource, SourceSpan};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use unirange_core::{CodePoint, CompactError};
use unirange_options::ConfigError;

/// A data file being scanned: its path and full text.
#[derive(Debug, Clone, Copy)]
pub struct DataFile<'a> {
    pub path: &'a Path,
    pub text: &'a str,
}

impl<'a> DataFile<'a> {
    pub fn new(path: &'a Path, text: &'a str) -> Self {
        Self { path, text }
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.path.display().to_string(), self.text.to_string())
    }
}

/// Location of one line inside a [`DataFile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineLocation {
    /// 1-based line number.
    pub line: usize,
    /// Byte offset of the line start.
    pub offset: usize,
    /// Length of the line in bytes, excluding the terminator.
    pub len: usize,
}

impl LineLocation {
    pub fn new(line: usize, offset: usize, len: usize) -> Self {
        Self { line, offset, len }
    }

    fn span(&self) -> SourceSpan {
        (self.offset, self.len).into()
    }
}

/// A fatal generation error.
#[derive(Debug, Error, Diagnostic)]
pub enum GenError {
    #[error("failed to read '{}'", .path.display())]
    #[diagnostic(code(unirange::read))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write generated output")]
    #[diagnostic(code(unirange::write))]
    Write {
        #[source]
        source: io::Error,
    },

    #[error("failed to load config file '{}'", .path.display())]
    #[diagnostic(code(unirange::config))]
    Config {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },

    #[error("'{}' contains no data lines", .path.display())]
    #[diagnostic(
        code(unirange::empty_file),
        help("a data file needs at least one `U+XXXX` line")
    )]
    EmptyFile { path: PathBuf },

    #[error("no files matching '{pattern}' in '{}'", .dir.display())]
    #[diagnostic(code(unirange::no_data_files))]
    NoDataFiles { dir: PathBuf, pattern: String },

    #[error("cannot derive a category name from '{}'", .path.display())]
    #[diagnostic(code(unirange::category_name))]
    NoCategoryName { path: PathBuf },

    #[error(
        "categories '{}' and '{}' both generate the identifier '{identifier}'",
        .first.display(),
        .second.display()
    )]
    #[diagnostic(
        code(unirange::duplicate_category),
        help("rename one of the data files")
    )]
    DuplicateCategory {
        identifier: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("malformed data line {line} in '{}'", .path.display())]
    #[diagnostic(
        code(unirange::malformed_line),
        help("each line must start with `U+`, hex digits and whitespace, e.g. `U+0041 LATIN CAPITAL LETTER A`")
    )]
    MalformedLine {
        path: PathBuf,
        line: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("expected `U+<hex digits>`")]
        span: SourceSpan,
    },

    #[error("code point {value} on line {line} of '{}' is above U+{max:04X}", .path.display())]
    #[diagnostic(code(unirange::code_point_range))]
    CodePointOutOfRange {
        path: PathBuf,
        line: usize,
        value: String,
        max: CodePoint,
        #[source_code]
        src: NamedSource<String>,
        #[label("out of range")]
        span: SourceSpan,
    },

    #[error("line {line} of '{}' is out of order", .path.display())]
    #[diagnostic(code(unirange::out_of_order))]
    OutOfOrder {
        path: PathBuf,
        line: usize,
        #[source]
        source: CompactError,
        #[source_code]
        src: NamedSource<String>,
        #[label("smaller than the previous entry")]
        span: SourceSpan,
    },
}

impl GenError {
    pub fn read(path: &Path, source: io::Error) -> Self {
        GenError::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn malformed_line(file: &DataFile<'_>, at: LineLocation) -> Self {
        GenError::MalformedLine {
            path: file.path.to_path_buf(),
            line: at.line,
            src: file.named_source(),
            span: at.span(),
        }
    }

    pub fn out_of_range(
        file: &DataFile<'_>,
        at: LineLocation,
        value: &str,
        max: CodePoint,
    ) -> Self {
        GenError::CodePointOutOfRange {
            path: file.path.to_path_buf(),
            line: at.line,
            value: format!("U+{}", value.to_ascii_uppercase()),
            max,
            src: file.named_source(),
            span: at.span(),
        }
    }

    pub fn out_of_order(file: &DataFile<'_>, at: LineLocation, source: CompactError) -> Self {
        GenError::OutOfOrder {
            path: file.path.to_path_buf(),
            line: at.line,
            source,
            src: file.named_source(),
            span: at.span(),
        }
    }

    /// The data line this error points at, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            GenError::MalformedLine { line, .. }
            | GenError::CodePointOutOfRange { line, .. }
            | GenError::OutOfOrder { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// A non-fatal finding reported alongside generated output.
#[derive(Debug, Error, Diagnostic)]
#[error("skipped malformed line {line} in '{}'", .path.display())]
#[diagnostic(code(unirange::skipped_line), severity(Warning))]
pub struct Warning {
    pub path: PathBuf,
    pub line: usize,
    #[source_code]
    src: NamedSource<String>,
    #[label("not a `U+<hex>` entry")]
    span: SourceSpan,
}

impl Warning {
    pub fn skipped_line(file: &DataFile<'_>, at: LineLocation) -> Self {
        Warning {
            path: file.path.to_path_buf(),
            line: at.line,
            src: file.named_source(),
            span: at.span(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_line_message() {
        let text = "U+0041 A\nbogus\n";
        let file = DataFile::new(Path::new("data/lu.txt"), text);
        let err = GenError::malformed_line(&file, LineLocation::new(2, 9, 5));
        assert_eq!(err.to_string(), "malformed data line 2 in 'data/lu.txt'");
        assert_eq!(err.line(), Some(2));
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("unirange::malformed_line"));
    }

    #[test]
    fn test_out_of_range_message() {
        let text = "U+110000 X\n";
        let file = DataFile::new(Path::new("x.txt"), text);
        let err = GenError::out_of_range(&file, LineLocation::new(1, 0, 10), "110000", 0x10FFFF);
        assert_eq!(
            err.to_string(),
            "code point U+110000 on line 1 of 'x.txt' is above U+10FFFF"
        );
    }

    #[test]
    fn test_out_of_order_keeps_source() {
        let text = "U+0042 B\nU+0041 A\n";
        let file = DataFile::new(Path::new("x.txt"), text);
        let cause = CompactError::OutOfOrder {
            previous: 0x42,
            current: 0x41,
        };
        let err = GenError::out_of_order(&file, LineLocation::new(2, 9, 8), cause);
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source, Some(cause.to_string()));
    }

    #[test]
    fn test_warning_is_warning_severity() {
        let file = DataFile::new(Path::new("x.txt"), "U+0041 A\n\n");
        let warning = Warning::skipped_line(&file, LineLocation::new(2, 9, 0));
        assert_eq!(warning.severity(), Some(miette::Severity::Warning));
        assert_eq!(warning.to_string(), "skipped malformed line 2 in 'x.txt'");
    }

    #[test]
    fn test_duplicate_category_message() {
        let err = GenError::DuplicateCategory {
            identifier: "a_b".to_string(),
            first: PathBuf::from("d/a-b.txt"),
            second: PathBuf::from("d/a_b.txt"),
        };
        assert_eq!(
            err.to_string(),
            "categories 'd/a-b.txt' and 'd/a_b.txt' both generate the identifier 'a_b'"
        );
        assert_eq!(err.line(), None);
    }
}
