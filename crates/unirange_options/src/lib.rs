//! unirange_options: Generator options and config file parsing.
//!
//! Options come from three layers: built-in defaults, an optional JSON
//! config file, and command-line flags. [`GeneratorOptions`] mirrors the
//! config file (every key optional, camelCase); [`GeneratorOptions::merge`]
//! layers one set over another and [`GeneratorOptions::resolve`] fills the
//! gaps with defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_FUNCTION_PREFIX: &str = "esch_unicode_is_range_";
pub const DEFAULT_TABLE_PREFIX: &str = "esch_unicode_range_";
pub const DEFAULT_CODE_POINT_TYPE: &str = "esch_unicode";
pub const DEFAULT_INCLUDE_HEADER: &str = "esch.h";
pub const DEFAULT_DATA_SOURCE: &str = "http://www.fileformat.info/info/unicode/category/index.htm";
pub const DEFAULT_FILE_PATTERN: &str = "*.txt";
pub const DEFAULT_MAX_CODE_POINT: u32 = 0x10FFFF;

/// How membership tests are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmitStrategy {
    /// An `if / else if` chain of inclusive bound comparisons.
    #[default]
    Chain,
    /// Parallel low/high bound arrays scanned by a loop.
    Table,
}

/// What to do with a data line after the first that does not match
/// `U+<hex><whitespace>`. A malformed first line is always fatal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedLines {
    #[default]
    Fail,
    Skip,
}

/// Generator options as they appear in a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GeneratorOptions {
    pub strategy: Option<EmitStrategy>,
    pub function_prefix: Option<String>,
    pub table_prefix: Option<String>,
    pub code_point_type: Option<String>,
    pub include_header: Option<String>,
    pub data_source: Option<String>,
    pub file_pattern: Option<String>,
    pub malformed_lines: Option<MalformedLines>,
    pub max_code_point: Option<u32>,
}

/// Fully resolved options; every setting has a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub strategy: EmitStrategy,
    pub function_prefix: String,
    pub table_prefix: String,
    pub code_point_type: String,
    pub include_header: String,
    pub data_source: String,
    pub file_pattern: String,
    pub malformed_lines: MalformedLines,
    pub max_code_point: u32,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        GeneratorOptions::default().resolve()
    }
}

impl GeneratorOptions {
    /// Layer `overrides` on top of `self`: any setting present in
    /// `overrides` wins.
    pub fn merge(self, overrides: GeneratorOptions) -> GeneratorOptions {
        GeneratorOptions {
            strategy: overrides.strategy.or(self.strategy),
            function_prefix: overrides.function_prefix.or(self.function_prefix),
            table_prefix: overrides.table_prefix.or(self.table_prefix),
            code_point_type: overrides.code_point_type.or(self.code_point_type),
            include_header: overrides.include_header.or(self.include_header),
            data_source: overrides.data_source.or(self.data_source),
            file_pattern: overrides.file_pattern.or(self.file_pattern),
            malformed_lines: overrides.malformed_lines.or(self.malformed_lines),
            max_code_point: overrides.max_code_point.or(self.max_code_point),
        }
    }

    /// Fill unset options with their defaults.
    pub fn resolve(self) -> ResolvedOptions {
        ResolvedOptions {
            strategy: self.strategy.unwrap_or_default(),
            function_prefix: self
                .function_prefix
                .unwrap_or_else(|| DEFAULT_FUNCTION_PREFIX.to_string()),
            table_prefix: self
                .table_prefix
                .unwrap_or_else(|| DEFAULT_TABLE_PREFIX.to_string()),
            code_point_type: self
                .code_point_type
                .unwrap_or_else(|| DEFAULT_CODE_POINT_TYPE.to_string()),
            include_header: self
                .include_header
                .unwrap_or_else(|| DEFAULT_INCLUDE_HEADER.to_string()),
            data_source: self
                .data_source
                .unwrap_or_else(|| DEFAULT_DATA_SOURCE.to_string()),
            file_pattern: self
                .file_pattern
                .unwrap_or_else(|| DEFAULT_FILE_PATTERN.to_string()),
            malformed_lines: self.malformed_lines.unwrap_or_default(),
            max_code_point: self.max_code_point.unwrap_or(DEFAULT_MAX_CODE_POINT),
        }
    }
}

/// Errors raised while loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a config file from a string.
pub fn parse_config(content: &str) -> Result<GeneratorOptions, serde_json::Error> {
    serde_json::from_str(content)
}

/// Parse a config file from a path.
pub fn parse_config_file(path: &Path) -> Result<GeneratorOptions, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let options = parse_config(&content)?;
    Ok(options)
}
