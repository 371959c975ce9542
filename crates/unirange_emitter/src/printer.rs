//! Text output for the generated C code.

use crate::EmitterOptions;
use unirange_core::{Category, CodePoint};

/// Writes generated C text for one banner or category.
pub(crate) struct Printer<'o> {
    output: String,
    indent_level: u32,
    options: &'o EmitterOptions,
}

impl<'o> Printer<'o> {
    pub(crate) fn new(options: &'o EmitterOptions) -> Self {
        Self {
            output: String::with_capacity(1024),
            indent_level: 0,
            options,
        }
    }

    pub(crate) fn finish(self) -> String {
        self.output
    }

    // ========================================================================
    // Banner
    // ========================================================================

    pub(crate) fn print_banner(&mut self) {
        self.write_line("/* DON'T MODIFY: The code below is automatically generated. */");
        let source = format!("/* Data source: {} */", self.options.data_source);
        self.write_line(&source);
    }

    // ========================================================================
    // Conditional chain
    // ========================================================================

    pub(crate) fn print_chain(&mut self, category: &Category) {
        self.print_signature(category);
        self.write_line("{");
        self.increase_indent();

        let intervals = category.intervals.as_slice();
        if intervals.is_empty() {
            self.write_line("return 0;");
        } else {
            for (i, iv) in intervals.iter().enumerate() {
                let keyword = if i == 0 { "if" } else { "else if" };
                let line = format!(
                    "{} (ch >= {} && ch <= {}) {{ return 1; }}",
                    keyword,
                    hex(iv.low),
                    hex(iv.high)
                );
                self.write_line(&line);
            }
            self.write_line("else { return 0; }");
        }

        self.decrease_indent();
        self.write_line("}");
    }

    // ========================================================================
    // Table lookup
    // ========================================================================

    pub(crate) fn print_table(&mut self, category: &Category) {
        let include = format!("#include \"{}\"", self.options.include_header);
        self.write_line(&include);

        let intervals = &category.intervals;
        let count = intervals.len();
        let (low_name, high_name) = self.options.table_names(category);

        if count > 0 {
            let lows: Vec<CodePoint> = intervals.lows().collect();
            let highs: Vec<CodePoint> = intervals.highs().collect();
            self.print_bound_array(&low_name, &lows);
            self.print_bound_array(&high_name, &highs);
        }

        self.print_signature(category);
        self.write_line("{");
        self.increase_indent();

        if count == 0 {
            self.write_line("return 0;");
        } else {
            self.write_line("int i = 0;");
            let head = format!("for (i = 0; i < {}; ++i) {{", count);
            self.write_line(&head);
            self.increase_indent();
            let test = format!(
                "if (ch >= {}[i] && ch <= {}[i]) {{ return 1; }}",
                low_name, high_name
            );
            self.write_line(&test);
            self.decrease_indent();
            self.write_line("}");
            self.write_line("return 0;");
        }

        self.decrease_indent();
        self.write_line("}");
    }

    fn print_bound_array(&mut self, name: &str, values: &[CodePoint]) {
        let head = format!(
            "static const {} {}[{}] = {{",
            self.options.code_point_type,
            name,
            values.len()
        );
        self.write_line(&head);
        self.increase_indent();
        let per_row = self.options.values_per_row.max(1);
        for row in values.chunks(per_row) {
            let cells: Vec<String> = row.iter().map(|&cp| format!("{},", hex(cp))).collect();
            self.write_line(&cells.join(" "));
        }
        self.decrease_indent();
        self.write_line("};");
    }

    // ========================================================================
    // Shared
    // ========================================================================

    fn print_signature(&mut self, category: &Category) {
        self.write_line("int");
        let signature = format!(
            "{}({} ch)",
            self.options.function_name(category),
            self.options.code_point_type
        );
        self.write_line(&signature);
    }

    fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    fn write_newline(&mut self) {
        self.output.push_str(&self.options.new_line);
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str(&self.options.indent_str);
        }
    }

    fn write_line(&mut self, s: &str) {
        self.write_indent();
        self.write(s);
        self.write_newline();
    }

    fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    fn decrease_indent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }
}

/// C hex literal, lowercase and unpadded (`0x41`).
fn hex(cp: CodePoint) -> String {
    format!("{:#x}", cp)
}
