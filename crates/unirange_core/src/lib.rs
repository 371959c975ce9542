//! unirange_core: Core types for the unirange table generator.
//!
//! Provides code points, inclusive intervals, the run compactor that folds
//! an ascending code point sequence into maximal intervals, and named
//! categories used throughout the generation pipeline.

pub mod category;
pub mod interval;

// Re-export commonly used types
pub use category::Category;
pub use interval::{CodePoint, CompactError, Interval, IntervalList, RangeBuilder, MAX_UNICODE};
