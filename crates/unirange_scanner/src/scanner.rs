//! The data file scanner.

use crate::line::{parse_line, LineMatch};
use unirange_core::CodePoint;
use unirange_diagnostics::{DataFile, GenError, LineLocation, Warning};
use unirange_options::{MalformedLines, DEFAULT_MAX_CODE_POINT};

/// One parsed data line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub code_point: CodePoint,
    pub at: LineLocation,
}

/// Scans a data file line by line.
///
/// The first line must be a valid entry, whatever the malformed-line
/// policy; an empty file is an error. Later malformed lines either abort
/// the scan or are skipped and recorded as warnings.
pub struct Scanner<'a> {
    file: DataFile<'a>,
    /// Byte offset of the next unread line.
    pos: usize,
    /// Number of lines read so far.
    line: usize,
    malformed_lines: MalformedLines,
    max_code_point: CodePoint,
    warnings: Vec<Warning>,
}

impl<'a> Scanner<'a> {
    pub fn new(file: DataFile<'a>) -> Self {
        Self {
            file,
            pos: 0,
            line: 0,
            malformed_lines: MalformedLines::Fail,
            max_code_point: DEFAULT_MAX_CODE_POINT,
            warnings: Vec::new(),
        }
    }

    pub fn with_malformed_lines(mut self, policy: MalformedLines) -> Self {
        self.malformed_lines = policy;
        self
    }

    pub fn with_max_code_point(mut self, max: CodePoint) -> Self {
        self.max_code_point = max;
        self
    }

    /// Warnings collected so far, leaving the scanner's list empty.
    pub fn take_warnings(&mut self) -> Vec<Warning> {
        std::mem::take(&mut self.warnings)
    }

    /// Read the next raw line, without its `\n` or `\r\n` terminator.
    fn next_line(&mut self) -> Option<(LineLocation, &'a str)> {
        let text = self.file.text;
        if self.pos >= text.len() {
            return None;
        }
        let rest = &text.as_bytes()[self.pos..];
        let end = match memchr::memchr(b'\n', rest) {
            Some(idx) => self.pos + idx,
            None => text.len(),
        };
        let mut content = &text[self.pos..end];
        if let Some(stripped) = content.strip_suffix('\r') {
            content = stripped;
        }
        self.line += 1;
        let at = LineLocation::new(self.line, self.pos, content.len());
        self.pos = end + 1;
        Some((at, content))
    }

    /// Scan the next entry. Returns `Ok(None)` at end of file.
    pub fn next_entry(&mut self) -> Result<Option<Entry>, GenError> {
        loop {
            let Some((at, content)) = self.next_line() else {
                if self.line == 0 {
                    return Err(GenError::EmptyFile {
                        path: self.file.path.to_path_buf(),
                    });
                }
                return Ok(None);
            };

            match parse_line(content) {
                LineMatch::CodePoint(cp) if cp <= self.max_code_point => {
                    return Ok(Some(Entry { code_point: cp, at }));
                }
                LineMatch::CodePoint(_) => {
                    let digits = content[2..].split(char::is_whitespace).next().unwrap_or("");
                    return Err(GenError::out_of_range(&self.file, at, digits, self.max_code_point));
                }
                LineMatch::Overflow(digits) => {
                    return Err(GenError::out_of_range(&self.file, at, digits, self.max_code_point));
                }
                LineMatch::Malformed => {
                    if at.line == 1 || self.malformed_lines == MalformedLines::Fail {
                        return Err(GenError::malformed_line(&self.file, at));
                    }
                    self.warnings.push(Warning::skipped_line(&self.file, at));
                }
            }
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Entry, GenError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_entry().transpose()
    }
}
