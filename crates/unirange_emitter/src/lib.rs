//! unirange_emitter: C source output for category range tables.
//!
//! Turns a compacted [`Category`] into C code using one of two
//! interchangeable strategies:
//! 1. [`EmitStrategy::Chain`]: a function with an `if / else if` chain of
//!    inclusive bound checks, one per interval.
//! 2. [`EmitStrategy::Table`]: an `#include`, parallel low/high bound
//!    arrays, and a function scanning them linearly.
//!
//! Both return `1` when the code point lies in an interval and `0`
//! otherwise. Names are derived from the category's identifier so several
//! categories can share one compilation unit.

mod printer;

use printer::Printer;
use unirange_core::Category;
use unirange_options::ResolvedOptions;

pub use unirange_options::EmitStrategy;

/// Options controlling the shape of emitted code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitterOptions {
    /// Emission strategy.
    pub strategy: EmitStrategy,
    /// Prefix of every membership function name.
    pub function_prefix: String,
    /// Prefix of every bound array name (table strategy).
    pub table_prefix: String,
    /// C type of the function parameter and array elements.
    pub code_point_type: String,
    /// Header named by the table strategy's `#include`.
    pub include_header: String,
    /// Text of the banner's data-source line.
    pub data_source: String,
    /// Indentation string.
    pub indent_str: String,
    /// Newline string.
    pub new_line: String,
    /// Values per row in bound arrays.
    pub values_per_row: usize,
}

impl Default for EmitterOptions {
    fn default() -> Self {
        Self::from_resolved(&ResolvedOptions::default())
    }
}

impl EmitterOptions {
    pub fn from_resolved(options: &ResolvedOptions) -> Self {
        Self {
            strategy: options.strategy,
            function_prefix: options.function_prefix.clone(),
            table_prefix: options.table_prefix.clone(),
            code_point_type: options.code_point_type.clone(),
            include_header: options.include_header.clone(),
            data_source: options.data_source.clone(),
            indent_str: "    ".to_string(),
            new_line: "\n".to_string(),
            values_per_row: 8,
        }
    }

    /// Name of the membership function for `category`.
    pub fn function_name(&self, category: &Category) -> String {
        format!("{}{}", self.function_prefix, category.identifier())
    }

    /// Names of the low and high bound arrays for `category`.
    pub fn table_names(&self, category: &Category) -> (String, String) {
        let base = format!("{}{}", self.table_prefix, category.identifier());
        (format!("{}_low", base), format!("{}_high", base))
    }
}

/// Produces generated C text.
#[derive(Debug, Clone, Default)]
pub struct Emitter {
    pub options: EmitterOptions,
}

impl Emitter {
    pub fn new() -> Self {
        Self {
            options: EmitterOptions::default(),
        }
    }

    pub fn with_options(options: EmitterOptions) -> Self {
        Self { options }
    }

    /// The two-line "do not edit" banner that starts every output.
    pub fn banner(&self) -> String {
        let mut printer = Printer::new(&self.options);
        printer.print_banner();
        printer.finish()
    }

    /// Code for one category in the configured strategy.
    pub fn emit_category(&self, category: &Category) -> String {
        let mut printer = Printer::new(&self.options);
        match self.options.strategy {
            EmitStrategy::Chain => printer.print_chain(category),
            EmitStrategy::Table => printer.print_table(category),
        }
        printer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unirange_core::IntervalList;

    fn letter() -> Category {
        let intervals = IntervalList::from_code_points([0x41, 0x42, 0x43, 0x61]).unwrap();
        Category::new("letter", intervals)
    }

    fn table_emitter() -> Emitter {
        Emitter::with_options(EmitterOptions {
            strategy: EmitStrategy::Table,
            ..EmitterOptions::default()
        })
    }

    #[test]
    fn test_banner() {
        assert_eq!(
            Emitter::new().banner(),
            "/* DON'T MODIFY: The code below is automatically generated. */\n\
             /* Data source: http://www.fileformat.info/info/unicode/category/index.htm */\n"
        );
    }

    #[test]
    fn test_chain_output() {
        let code = Emitter::new().emit_category(&letter());
        let expected = "\
int
esch_unicode_is_range_letter(esch_unicode ch)
{
    if (ch >= 0x41 && ch <= 0x43) { return 1; }
    else if (ch >= 0x61 && ch <= 0x61) { return 1; }
    else { return 0; }
}
";
        assert_eq!(code, expected);
    }

    #[test]
    fn test_chain_single_interval() {
        let digits = IntervalList::from_code_points(0x30..=0x39).unwrap();
        let code = Emitter::new().emit_category(&Category::new("digit", digits));
        assert!(code.contains(
            "    if (ch >= 0x30 && ch <= 0x39) { return 1; }\n    else { return 0; }\n"
        ));
        assert!(!code.contains("else if"));
    }

    #[test]
    fn test_table_output() {
        let code = table_emitter().emit_category(&letter());
        let expected = "\
#include \"esch.h\"
static const esch_unicode esch_unicode_range_letter_low[2] = {
    0x41, 0x61,
};
static const esch_unicode esch_unicode_range_letter_high[2] = {
    0x43, 0x61,
};
int
esch_unicode_is_range_letter(esch_unicode ch)
{
    int i = 0;
    for (i = 0; i < 2; ++i) {
        if (ch >= esch_unicode_range_letter_low[i] && ch <= esch_unicode_range_letter_high[i]) { return 1; }
    }
    return 0;
}
";
        assert_eq!(code, expected);
    }

    #[test]
    fn test_table_rows_wrap() {
        let points: Vec<u32> = (0..10).map(|i| i * 2).collect();
        let category = Category::new("even", IntervalList::from_code_points(points).unwrap());
        let code = table_emitter().emit_category(&category);
        assert!(code.contains(
            "[10] = {\n    0x0, 0x2, 0x4, 0x6, 0x8, 0xa, 0xc, 0xe,\n    0x10, 0x12,\n};\n"
        ));
    }

    #[test]
    fn test_empty_category() {
        let empty = Category::new("none", IntervalList::new());
        let chain = Emitter::new().emit_category(&empty);
        assert!(chain.ends_with("{\n    return 0;\n}\n"));
        let table = table_emitter().emit_category(&empty);
        assert!(!table.contains("static const"));
        assert!(table.ends_with("{\n    return 0;\n}\n"));
    }

    #[test]
    fn test_names_follow_prefixes() {
        let emitter = Emitter::with_options(EmitterOptions {
            function_prefix: "rt_is_".to_string(),
            table_prefix: "rt_tab_".to_string(),
            ..EmitterOptions::default()
        });
        let category = Category::new("math-symbol", IntervalList::new());
        assert_eq!(emitter.options.function_name(&category), "rt_is_math_symbol");
        assert_eq!(
            emitter.options.table_names(&category),
            ("rt_tab_math_symbol_low".to_string(), "rt_tab_math_symbol_high".to_string())
        );
    }

    #[test]
    fn test_custom_type_and_header() {
        let emitter = Emitter::with_options(EmitterOptions {
            strategy: EmitStrategy::Table,
            code_point_type: "uint32_t".to_string(),
            include_header: "stdint.h".to_string(),
            ..EmitterOptions::default()
        });
        let code = emitter.emit_category(&letter());
        assert!(code.starts_with("#include \"stdint.h\"\nstatic const uint32_t "));
        assert!(code.contains("esch_unicode_is_range_letter(uint32_t ch)"));
    }

    #[test]
    fn test_emit_category_is_deterministic() {
        let digits = IntervalList::from_code_points(0x30..=0x39).unwrap();
        let category = Category::new("digit", digits);
        for emitter in [Emitter::new(), table_emitter()] {
            let first = emitter.emit_category(&category);
            assert_eq!(first, emitter.emit_category(&category));
        }
    }
}
