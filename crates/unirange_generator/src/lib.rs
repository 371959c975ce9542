//! unirange_generator: Generation orchestration.
//!
//! Resolves the input path into data files, then runs each file through
//! the pipeline scan -> compact -> emit and streams the result to a writer.
//! One file is finished and written before the next is opened, so output
//! for earlier files stays written when a later file fails.

mod discover;

pub use discover::{category_name, discover_data_files, matches_simple_glob};

use rustc_hash::FxHashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use unirange_core::{Category, RangeBuilder};
use unirange_diagnostics::{DataFile, GenError, Warning};
use unirange_emitter::{Emitter, EmitterOptions};
use unirange_options::ResolvedOptions;
use unirange_scanner::Scanner;

/// A category built from one data file, plus what scanning it reported.
#[derive(Debug)]
pub struct CompiledCategory {
    pub category: Category,
    /// Number of data lines accepted.
    pub entries: usize,
    pub warnings: Vec<Warning>,
}

/// Summary of one emitted category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub name: String,
    pub path: PathBuf,
    /// Data lines accepted.
    pub entries: usize,
    /// Distinct code points covered.
    pub code_points: u64,
    pub intervals: usize,
}

/// What a successful run produced.
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// Emitted categories, in output order.
    pub categories: Vec<CategorySummary>,
    pub warnings: Vec<Warning>,
}

/// Runs the generation pipeline with a fixed set of options.
pub struct Generator {
    options: ResolvedOptions,
    emitter: Emitter,
}

impl Generator {
    pub fn new(options: ResolvedOptions) -> Self {
        let emitter = Emitter::with_options(EmitterOptions::from_resolved(&options));
        Self { options, emitter }
    }

    /// Scan and compact one data file's text into a category named `name`.
    pub fn compile(
        &self,
        path: &Path,
        name: &str,
        text: &str,
    ) -> Result<CompiledCategory, GenError> {
        let file = DataFile::new(path, text);
        let mut scanner = Scanner::new(file)
            .with_malformed_lines(self.options.malformed_lines)
            .with_max_code_point(self.options.max_code_point);

        let mut builder = RangeBuilder::new();
        let mut entries = 0;
        while let Some(entry) = scanner.next_entry()? {
            builder
                .push(entry.code_point)
                .map_err(|e| GenError::out_of_order(&file, entry.at, e))?;
            entries += 1;
        }

        Ok(CompiledCategory {
            category: Category::new(name, builder.finish()),
            entries,
            warnings: scanner.take_warnings(),
        })
    }

    /// Generate code for `target` (a data file or a directory of them) and
    /// write it to `out`: the banner, then one block per category.
    pub fn generate<W: Write>(
        &self,
        target: &Path,
        out: &mut W,
    ) -> Result<GenerateReport, GenError> {
        let mut warnings = Vec::new();
        let categories = self.generate_with(target, out, |warning| warnings.push(warning))?;
        Ok(GenerateReport {
            categories,
            warnings,
        })
    }

    /// Like [`Generator::generate`], handing each file's warnings to
    /// `on_warning` once that file's code is written. Warnings for earlier
    /// files are delivered even when a later file fails.
    pub fn generate_with<W, F>(
        &self,
        target: &Path,
        out: &mut W,
        mut on_warning: F,
    ) -> Result<Vec<CategorySummary>, GenError>
    where
        W: Write,
        F: FnMut(Warning),
    {
        let files = discover_data_files(target, &self.options.file_pattern)?;
        let mut categories = Vec::new();
        let mut identifiers: FxHashMap<String, PathBuf> = FxHashMap::default();

        write_output(out, &self.emitter.banner())?;

        for path in files {
            let name = category_name(&path)?;
            let text = std::fs::read_to_string(&path).map_err(|e| GenError::read(&path, e))?;
            let compiled = self.compile(&path, &name, &text)?;

            let identifier = compiled.category.identifier();
            if let Some(first) = identifiers.get(&identifier) {
                return Err(GenError::DuplicateCategory {
                    identifier,
                    first: first.clone(),
                    second: path,
                });
            }

            write_output(out, &self.emitter.emit_category(&compiled.category))?;
            compiled.warnings.into_iter().for_each(&mut on_warning);

            let intervals = &compiled.category.intervals;
            categories.push(CategorySummary {
                name,
                path: path.clone(),
                entries: compiled.entries,
                code_points: intervals.code_point_count(),
                intervals: intervals.len(),
            });
            identifiers.insert(identifier, path);
        }

        out.flush().map_err(|source| GenError::Write { source })?;
        Ok(categories)
    }

    /// Like [`Generator::generate`], collecting the output in a string.
    pub fn generate_to_string(&self, target: &Path) -> Result<(String, GenerateReport), GenError> {
        let mut buf = Vec::new();
        let report = self.generate(target, &mut buf)?;
        let text = String::from_utf8_lossy(&buf).into_owned();
        Ok((text, report))
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(ResolvedOptions::default())
    }
}

fn write_output<W: Write>(out: &mut W, text: &str) -> Result<(), GenError> {
    out.write_all(text.as_bytes())
        .map_err(|source| GenError::Write { source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use unirange_core::Interval;
    use unirange_options::MalformedLines;

    #[test]
    fn test_compile_letter_example() {
        let generator = Generator::default();
        let compiled = generator
            .compile(Path::new("letter.txt"), "letter", "U+0041\nU+0042\nU+0043\nU+0061\n")
            .unwrap();
        assert_eq!(compiled.entries, 4);
        assert_eq!(
            compiled.category.intervals.as_slice(),
            &[Interval::new(0x41, 0x43), Interval::single(0x61)]
        );
        assert!(compiled.warnings.is_empty());
    }

    #[test]
    fn test_compile_reports_out_of_order_line() {
        let generator = Generator::default();
        let err = generator
            .compile(Path::new("x.txt"), "x", "U+0041 A\nU+0043 C\nU+0042 B\n")
            .unwrap_err();
        assert!(matches!(err, GenError::OutOfOrder { line: 3, .. }));
    }

    #[test]
    fn test_compile_with_skipped_lines() {
        let generator = Generator::new(ResolvedOptions {
            malformed_lines: MalformedLines::Skip,
            ..ResolvedOptions::default()
        });
        let compiled = generator
            .compile(Path::new("x.txt"), "x", "U+0041 A\n\nU+0042 B\n")
            .unwrap();
        assert_eq!(compiled.category.intervals.as_slice(), &[Interval::new(0x41, 0x42)]);
        assert_eq!(compiled.warnings.len(), 1);
        assert_eq!(compiled.warnings[0].line, 2);
    }
}
