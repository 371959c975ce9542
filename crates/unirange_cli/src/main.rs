//! unirange: Unicode category range table generator.
//!
//! Usage:
//!   unirange [options] <PATH>
//!
//! Reads `U+XXXX` category listings (one file, or every `*.txt` file in a
//! directory) and writes C range tables with membership-test functions to
//! standard output.

use clap::{Parser as ClapParser, ValueEnum};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;
use std::time::Instant;
use unirange_diagnostics::GenError;
use unirange_generator::{CategorySummary, Generator};
use unirange_options::{
    parse_config_file, EmitStrategy, GeneratorOptions, MalformedLines, ResolvedOptions,
};

#[derive(ClapParser, Debug)]
#[command(
    name = "unirange",
    version,
    about = "Generate C range tables from Unicode category listings"
)]
struct Cli {
    /// Data file, or directory of data files.
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// How membership tests are emitted.
    #[arg(short = 's', long, value_enum)]
    strategy: Option<StrategyArg>,

    /// JSON config file; command-line flags take precedence.
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Prefix of generated function names.
    #[arg(long, value_name = "PREFIX")]
    function_prefix: Option<String>,

    /// Prefix of generated bound array names.
    #[arg(long, value_name = "PREFIX")]
    table_prefix: Option<String>,

    /// C type used for code points.
    #[arg(long, value_name = "TYPE")]
    code_point_type: Option<String>,

    /// Header included by the table strategy.
    #[arg(long = "include", value_name = "HEADER")]
    include_header: Option<String>,

    /// Data source named in the banner.
    #[arg(long, value_name = "TEXT")]
    data_source: Option<String>,

    /// File name pattern for directory mode.
    #[arg(long, value_name = "GLOB")]
    pattern: Option<String>,

    /// Skip malformed data lines after the first, with a warning.
    #[arg(long)]
    lenient: bool,

    /// Print a summary of each category to stderr.
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Disable colored diagnostics.
    #[arg(long)]
    no_color: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// `if / else if` chain of bound checks.
    Chain,
    /// Low/high bound arrays and a lookup loop.
    Table,
}

impl From<StrategyArg> for EmitStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Chain => EmitStrategy::Chain,
            StrategyArg::Table => EmitStrategy::Table,
        }
    }
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn main() {
    let cli = Cli::parse();
    let use_color = !cli.no_color && atty_is_terminal();
    if !use_color {
        let hook = miette::set_hook(Box::new(|_| {
            Box::new(miette::MietteHandlerOpts::new().color(false).build())
        }));
        if let Err(e) = hook {
            eprintln!("warning: keeping the default diagnostic style: {}", e);
        }
    }

    let exit_code = run_generate(&cli, use_color);
    process::exit(exit_code);
}

fn run_generate(cli: &Cli, use_color: bool) -> i32 {
    let start = Instant::now();

    let options = match resolve_options(cli) {
        Ok(options) => options,
        Err(e) => {
            print_report(e);
            return 1;
        }
    };

    let generator = Generator::new(options);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let result = generator.generate_with(&cli.path, &mut out, |warning| {
        eprintln!("{:?}", miette::Report::new(warning));
    });

    match result {
        Ok(categories) => {
            if cli.verbose {
                print_summary(&categories, use_color);
                let count = categories.len();
                print_status(
                    &format!(
                        "Generated {} categor{} in {:.2}s.",
                        count,
                        if count == 1 { "y" } else { "ies" },
                        start.elapsed().as_secs_f64()
                    ),
                    use_color,
                );
            }
            0
        }
        Err(e) => {
            // Output for files finished before the failure stays written.
            if let Err(source) = out.flush() {
                print_report(GenError::Write { source });
            }
            print_report(e);
            if use_color {
                eprintln!("{}{}error{}: generation aborted", BOLD, RED, RESET);
            } else {
                eprintln!("error: generation aborted");
            }
            1
        }
    }
}

/// Merge defaults, the config file and command-line flags.
fn resolve_options(cli: &Cli) -> Result<ResolvedOptions, GenError> {
    let file_options = match cli.config {
        Some(ref path) => parse_config_file(path).map_err(|source| GenError::Config {
            path: path.clone(),
            source,
        })?,
        None => GeneratorOptions::default(),
    };

    let cli_options = GeneratorOptions {
        strategy: cli.strategy.map(EmitStrategy::from),
        function_prefix: cli.function_prefix.clone(),
        table_prefix: cli.table_prefix.clone(),
        code_point_type: cli.code_point_type.clone(),
        include_header: cli.include_header.clone(),
        data_source: cli.data_source.clone(),
        file_pattern: cli.pattern.clone(),
        malformed_lines: cli.lenient.then_some(MalformedLines::Skip),
        max_code_point: None,
    };

    Ok(file_options.merge(cli_options).resolve())
}

fn print_report(err: GenError) {
    eprintln!("{:?}", miette::Report::new(err));
}

fn print_summary(categories: &[CategorySummary], use_color: bool) {
    for summary in categories {
        print_status(
            &format!(
                "{}: {} code points in {} interval{}",
                summary.name,
                summary.code_points,
                summary.intervals,
                if summary.intervals == 1 { "" } else { "s" }
            ),
            use_color,
        );
    }
}

fn print_status(msg: &str, use_color: bool) {
    if use_color {
        eprintln!("{}{}{}", GRAY, msg, RESET);
    } else {
        eprintln!("{}", msg);
    }
}

fn atty_is_terminal() -> bool {
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        true
    }
}
