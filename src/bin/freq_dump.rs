use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tagcloud::io_utils::{io_cli_error, simple_cli_error, tagcloud_cli_error};
use tagcloud::{count_reader, rank, SeparatorSet};

/// Print every word of a text file with its count as CSV, most frequent first.
#[derive(Parser)]
struct Args {
    /// Input text file
    input: PathBuf,
    /// Skip words seen fewer than this many times
    #[arg(long, default_value_t = 1)]
    min_count: u64,
    /// Characters that separate words (replaces the default set)
    #[arg(long)]
    separators: Option<String>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let separators = match &args.separators {
        Some(spec) => SeparatorSet::from_chars(spec)
            .map_err(|e| tagcloud_cli_error("invalid separators", e))?,
        None => SeparatorSet::default(),
    };

    let file =
        File::open(&args.input).map_err(|e| io_cli_error("opening input file", &args.input, e))?;
    let map = count_reader(BufReader::new(file), &separators)
        .map_err(|e| tagcloud_cli_error("counting words", e))?;

    let mut wtr = csv::Writer::from_writer(io::stdout().lock());
    wtr.write_record(["word", "count"])
        .map_err(|e| simple_cli_error(&format!("writing csv: {e}")))?;
    for entry in rank(&map).into_iter().filter(|e| e.count >= args.min_count) {
        wtr.write_record([entry.word, entry.count.to_string().as_str()])
            .map_err(|e| simple_cli_error(&format!("writing csv: {e}")))?;
    }
    wtr.flush()
        .map_err(|e| simple_cli_error(&format!("writing csv: {e}")))?;
    Ok(())
}
