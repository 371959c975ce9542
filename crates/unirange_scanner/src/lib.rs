//! unirange_scanner: Reads `U+XXXX` entries from category data files.
//!
//! Each data line starts with `U+`, one or more hex digits, and then
//! whitespace (or the end of the line); everything after that is ignored:
//!
//! ```text
//! U+0041	LATIN CAPITAL LETTER A	A
//! U+0042	LATIN CAPITAL LETTER B	B
//! ```
//!
//! The scanner yields one [`Entry`] per line in file order, tracking line
//! numbers and byte offsets for diagnostics.

mod line;
mod scanner;

pub use line::{parse_line, LineMatch};
pub use scanner::{Entry, Scanner};
