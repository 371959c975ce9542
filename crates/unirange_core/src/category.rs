//! Named categories.
//!
//! A category pairs a name with its compacted intervals. The name is plain
//! data handed in by the caller; nothing here knows about file paths.

use crate::interval::IntervalList;

/// One category of code points, e.g. `lu` or `digit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// The category name as given by the caller.
    pub name: String,
    /// The category's intervals, ascending and maximal.
    pub intervals: IntervalList,
}

impl Category {
    pub fn new(name: impl Into<String>, intervals: IntervalList) -> Self {
        Self {
            name: name.into(),
            intervals,
        }
    }

    /// The identifier fragment used to build generated C names.
    pub fn identifier(&self) -> String {
        identifier_fragment(&self.name)
    }
}

/// Map a category name onto a C identifier fragment.
///
/// ASCII letters, digits and `_` are kept; every other character becomes
/// `_`. The fragment is always appended to a prefix, so a leading digit is
/// allowed.
pub fn identifier_fragment(name: &str) -> String {
    name.chars()
        .map(|ch| if ch.is_ascii_alphanumeric() || ch == '_' { ch } else { '_' })
        .collect()
}
