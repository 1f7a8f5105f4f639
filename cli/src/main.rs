use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};

use clap::Parser;
use fstjson::{NumberOverflow, ParseOptions, Stats, Value};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fstjson", version, about = "Parse and validate JSON documents")]
struct Args {
    /// Input file path. Omit or use '-' to read from stdin.
    input: Option<String>,

    /// Print a summary of the parsed tree.
    #[arg(long)]
    stats: bool,

    /// Maximum container nesting (default: 512).
    #[arg(long, value_name = "number")]
    max_depth: Option<usize>,

    /// Reject numbers whose magnitude overflows to infinity.
    #[arg(long)]
    reject_overflow: bool,
}

impl Args {
    fn parse_options(&self) -> ParseOptions {
        let mut options = ParseOptions::new();
        if let Some(max_depth) = self.max_depth {
            options = options.with_max_depth(Some(max_depth));
        }
        if self.reject_overflow {
            options = options.with_number_overflow(NumberOverflow::Reject);
        }
        options
    }
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("ERROR  {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let input = read_input(args.input.as_deref())?;
    let options = args.parse_options();
    tracing::debug!(bytes = input.len(), ?options, "parsing input");

    let value = fstjson::from_slice_with_options(&input, &options)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "ok: {}", value.kind())?;
    if args.stats {
        write_stats(&mut out, &value)?;
    }
    Ok(())
}

fn read_input(input: Option<&str>) -> Result<Vec<u8>, Box<dyn Error>> {
    match input {
        None | Some("-") => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(fs::read(path)?),
    }
}

fn write_stats(out: &mut dyn Write, value: &Value) -> io::Result<()> {
    let stats = Stats::collect(value);
    writeln!(out, "values: {}", stats.values())?;
    writeln!(out, "  null: {}", stats.nulls)?;
    writeln!(out, "  bool: {}", stats.bools)?;
    writeln!(out, "  number: {}", stats.numbers)?;
    writeln!(out, "  string: {} ({} bytes)", stats.strings, stats.string_bytes)?;
    writeln!(out, "  array: {}", stats.arrays)?;
    writeln!(out, "  object: {} ({} members)", stats.objects, stats.members)?;
    writeln!(out, "max depth: {}", stats.max_depth)
}
