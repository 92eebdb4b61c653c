//! Command-line front end for chroma_convert
//!
//! Converts a color given in one of {RGB, HSV, CMY} and prints all
//! three representations. With `--space` and `--components` it runs
//! once and exits non-zero on invalid input; with no arguments it
//! prompts interactively and re-prompts until the input validates.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use chroma_convert::{convert, ColorSpace, ConversionResult};

/// Convert a color between the RGB, HSV and CMY representations
#[derive(Parser, Debug)]
#[command(name = "chroma_convert", version, about)]
struct Cli {
    /// Input color space (rgb, hsv or cmy); omit for interactive mode
    #[arg(short, long)]
    space: Option<ColorSpace>,

    /// The three components, in the order the space lists them
    #[arg(
        short = 'c',
        long = "components",
        num_args = 3,
        allow_negative_numbers = true
    )]
    components: Option<Vec<f32>>,

    /// Emit the result as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Decimal places used by the table output
    #[arg(long, default_value_t = 4)]
    precision: usize,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match (cli.space, cli.components) {
        (Some(space), Some(components)) => run_once(space, &components, cli.json, cli.precision),
        (None, None) => run_interactive(cli.json, cli.precision),
        _ => {
            eprintln!("Error: --space and --components must be given together");
            ExitCode::FAILURE
        }
    }
}

fn run_once(space: ColorSpace, components: &[f32], json: bool, precision: usize) -> ExitCode {
    let &[a, b, c] = components else {
        eprintln!("Error: expected exactly three components");
        return ExitCode::FAILURE;
    };
    debug!("argument mode: {space} [{a}, {b}, {c}]");

    match convert(space, [a, b, c]) {
        Ok(result) => print_result(&result, json, precision),
        Err(error) => {
            eprintln!("Conversion failed: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run_interactive(json: bool, precision: usize) -> ExitCode {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let space = loop {
        prompt("Color space (rgb, hsv, cmy): ");
        let Some(line) = read_line(&mut lines) else {
            return ExitCode::FAILURE;
        };
        match line.parse::<ColorSpace>() {
            Ok(space) => break space,
            Err(error) => eprintln!("{error}"),
        }
    };

    let [first, second, third] = space.component_names();
    let result = loop {
        prompt(&format!("Enter {first}, {second}, {third}: "));
        let Some(line) = read_line(&mut lines) else {
            return ExitCode::FAILURE;
        };
        let Some(components) = parse_components(&line) else {
            eprintln!("Enter exactly three numeric values separated by spaces.");
            continue;
        };
        match convert(space, components) {
            Ok(result) => break result,
            // Invalid ranges re-prompt rather than abort
            Err(error) => {
                eprintln!("Out of range:");
                for violation in error.violations() {
                    eprintln!("  {violation}");
                }
            }
        }
    };

    print_result(&result, json, precision)
}

fn prompt(message: &str) {
    print!("{message}");
    let _ = io::stdout().flush();
}

fn read_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<String> {
    match lines.next() {
        Some(Ok(line)) => Some(line),
        Some(Err(error)) => {
            eprintln!("Failed to read input: {error}");
            None
        }
        None => {
            eprintln!("No more input; aborting.");
            None
        }
    }
}

fn parse_components(line: &str) -> Option<[f32; 3]> {
    let mut parts = line.split_whitespace();
    let a = parts.next()?.parse().ok()?;
    let b = parts.next()?.parse().ok()?;
    let c = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some([a, b, c])
}

fn print_result(result: &ConversionResult, json: bool, precision: usize) -> ExitCode {
    if json {
        match serde_json::to_string_pretty(result) {
            Ok(encoded) => println!("{encoded}"),
            Err(error) => {
                eprintln!("Failed to encode result: {error}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        let p = precision;
        println!(
            "RGB  r = {:.p$}  g = {:.p$}  b = {:.p$}",
            result.rgb.r, result.rgb.g, result.rgb.b
        );
        println!(
            "HSV  h = {:.p$}  s = {:.p$}  v = {:.p$}",
            result.hsv.h, result.hsv.s, result.hsv.v
        );
        println!(
            "CMY  c = {:.p$}  m = {:.p$}  y = {:.p$}",
            result.cmy.c, result.cmy.m, result.cmy.y
        );
    }
    ExitCode::SUCCESS
}
