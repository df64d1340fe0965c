// ABOUTME: CLI for relocating content fragments into their slots in an HTML document.
// ABOUTME: Reads HTML from a file or stdin, writes the relocated document, optionally emits a JSON report.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use slotfill_relocate::{options, RelocationReport, Relocator};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "slotfill")]
#[command(about = "Move <content> fragments into their placeholder slots")]
struct Args {
    /// HTML file to process. Use "-" or omit to read stdin.
    #[arg()]
    input: Option<PathBuf>,

    /// Output file path (default: stdout). May equal the input path.
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Tag of the source fragment elements
    #[arg(long = "tag", default_value = options::DEFAULT_FRAGMENT_TAG)]
    tag: String,

    /// Attribute holding each fragment's key
    #[arg(long = "attr", default_value = options::DEFAULT_KEY_ATTRIBUTE)]
    attr: String,

    /// Prefix that turns a key into the slot's id
    #[arg(long = "prefix", default_value = options::DEFAULT_SLOT_PREFIX)]
    prefix: String,

    /// Print the relocation report as JSON to stderr
    #[arg(long = "report")]
    report: bool,

    /// Write the relocation report as JSON to a file
    #[arg(long = "report-file")]
    report_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn write_report(args: &Args, report: &RelocationReport) -> Result<()> {
    let json = report.to_json();
    if args.report {
        writeln!(io::stderr(), "{}", json).context("writing report to stderr")?;
    }
    if let Some(path) = &args.report_file {
        fs::write(path, &json).with_context(|| format!("writing report {}", path.display()))?;
    }
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let relocator = Relocator::builder()
        .fragment_tag(&args.tag)
        .key_attribute(&args.attr)
        .slot_prefix(&args.prefix)
        .build()?;

    let html = read_input(args.input.as_ref())?;
    let relocated = relocator.relocate_html(&html);

    match &args.output {
        Some(path) => fs::write(path, &relocated.html)
            .with_context(|| format!("writing {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(relocated.html.as_bytes())
                .context("writing stdout")?;
            stdout.flush().context("writing stdout")?;
        }
    }

    write_report(args, &relocated.report)
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(args.verbose))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(1)
        }
    }
}
