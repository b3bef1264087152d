use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tagcloud::io_utils::{io_cli_error, simple_cli_error, tagcloud_cli_error, CliError};
use tagcloud::{
    build_cloud, render_html, render_json, validate_count, Config, FontScale, SeparatorSet,
    TagCloud, DEFAULT_STYLESHEET, MAX_FONT, MIN_FONT,
};
use tracing::Level;

/// Generate an HTML tag cloud of the most frequent words in a text file.
///
/// Any of INPUT, OUTPUT or --count left out is asked for on stdin.
#[derive(Parser)]
#[command(name = "tagcloud")]
struct Args {
    /// Input text file
    input: Option<PathBuf>,
    /// Output file, `-` for stdout
    output: Option<PathBuf>,
    /// Number of words in the cloud
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    count: Option<i64>,
    /// Write JSON instead of HTML
    #[arg(long)]
    json: bool,
    /// Stylesheet linked from the HTML page
    #[arg(long, default_value = DEFAULT_STYLESHEET)]
    css: String,
    /// Characters that separate words (replaces the default set)
    #[arg(long)]
    separators: Option<String>,
    /// Smallest font size
    #[arg(long, default_value_t = MIN_FONT)]
    min_font: u32,
    /// Largest font size
    #[arg(long, default_value_t = MAX_FONT)]
    max_font: u32,
    /// Log pipeline details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn prompt<R: BufRead>(stdin: &mut R, message: &str) -> Result<String, CliError> {
    print!("{message}");
    io::stdout()
        .flush()
        .map_err(|e| io_cli_error("writing prompt", Path::new("<stdout>"), e))?;
    let mut line = String::new();
    let read = stdin
        .read_line(&mut line)
        .map_err(|e| io_cli_error("reading answer", Path::new("<stdin>"), e))?;
    let answer = line.trim();
    if read == 0 || answer.is_empty() {
        return Err(simple_cli_error(&format!(
            "No answer given to prompt: {}",
            message.trim_end()
        )));
    }
    Ok(answer.to_string())
}

fn write_cloud<W: Write>(args: &Args, cloud: &TagCloud, out: W) -> Result<(), CliError> {
    let res = if args.json {
        render_json(cloud, out)
    } else {
        render_html(cloud, &args.css, out)
    };
    res.map_err(|e| tagcloud_cli_error("writing tag cloud", e))
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let stdin = io::stdin();
    let mut stdin = stdin.lock();

    let input = match &args.input {
        Some(p) => p.clone(),
        None => PathBuf::from(prompt(
            &mut stdin,
            "Please Enter the name of the input file: ",
        )?),
    };
    let output = match &args.output {
        Some(p) => p.clone(),
        None => PathBuf::from(prompt(
            &mut stdin,
            "Please Enter the name of the output file: ",
        )?),
    };
    let requested = match args.count {
        Some(n) => n,
        None => prompt(
            &mut stdin,
            "Please enter a positive number of words to be generated in the tag cloud: ",
        )?
        .parse()
        .map_err(|_| simple_cli_error("Word count must be a whole number"))?,
    };

    let separators = match &args.separators {
        Some(spec) => SeparatorSet::from_chars(spec)
            .map_err(|e| tagcloud_cli_error("invalid separators", e))?,
        None => SeparatorSet::default(),
    };
    let config = Config {
        requested_count: validate_count(requested)
            .map_err(|e| tagcloud_cli_error("invalid word count", e))?,
        separators,
        font: FontScale::new(args.min_font, args.max_font)
            .map_err(|e| tagcloud_cli_error("invalid font range", e))?,
    };

    let file = File::open(&input).map_err(|e| io_cli_error("opening input file", &input, e))?;
    let label = input.display().to_string();
    let cloud = build_cloud(BufReader::new(file), &label, &config)
        .map_err(|e| tagcloud_cli_error("building tag cloud", e))?;

    if output == Path::new("-") {
        write_cloud(&args, &cloud, io::stdout().lock())?;
    } else {
        let file =
            File::create(&output).map_err(|e| io_cli_error("creating output file", &output, e))?;
        write_cloud(&args, &cloud, BufWriter::new(file))?;
    }
    Ok(())
}
