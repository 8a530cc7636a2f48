use std::{
    fs,
    io::{self, BufRead},
};

use calcpad::{
    error::CalcError,
    get_result,
    keypad::{Calculator, ERROR_DISPLAY, KEYPAD_LAYOUT},
};
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// calcpad evaluates calculator expressions such as `(1+2)*3` or `-2^2`.
///
/// Every result is printed the way the calculator display shows it; failed
/// calculations print `Error`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells calcpad to read expressions from a file, one per line.
    #[arg(short, long, conflicts_with = "keys")]
    file: bool,

    /// Treats the contents as whitespace-separated keypad labels, e.g.
    /// `"1 6 sqrt"`, and prints the final display.
    #[arg(short, long)]
    keys: bool,

    /// Prints the keypad layout and exits.
    #[arg(long)]
    layout: bool,

    /// Increases log verbosity. `RUST_LOG` takes precedence when set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// An expression, a file path with `--file`, or key labels with `--keys`.
    /// Expressions are read from standard input when omitted.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.layout {
        for row in KEYPAD_LAYOUT {
            println!("{}", row.map(|label| format!("{label:>5}")).join(""));
        }
        return;
    }

    match args.contents {
        Some(keys) if args.keys => run_keys(&keys),
        Some(path) if args.file => {
            let script = fs::read_to_string(&path).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                std::process::exit(1);
            });
            script.lines().for_each(run_expression);
        },
        Some(expression) => run_expression(&expression),
        None => {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) => run_expression(&line),
                    Err(e) => {
                        eprintln!("Failed to read standard input: {e}");
                        std::process::exit(1);
                    },
                }
            }
        },
    }
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}

fn run_expression(expression: &str) {
    if expression.trim().is_empty() {
        return;
    }

    match get_result(expression) {
        Ok(shown) => {
            debug!(expression, %shown, "evaluated");
            println!("{shown}");
        },
        Err(e) => {
            let position = match &e {
                CalcError::Syntax(parse) => Some(parse.position()),
                _ => None,
            };
            warn!(expression, ?position, error = %e, "calculation failed");
            println!("{ERROR_DISPLAY}");
        },
    }
}

fn run_keys(keys: &str) {
    let mut calculator = Calculator::new();

    for label in keys.split_whitespace() {
        if let Err(e) = calculator.press_label(label) {
            eprintln!("{e}");
            std::process::exit(2);
        }
    }

    println!("{}", calculator.display());
}
