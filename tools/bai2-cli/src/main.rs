//! Command-line front end for the `bai2` crate.
//!
//! # Usage
//!
//! ```bash
//! # Check that a file reads and validates
//! bai2 parse -i statement.bai
//!
//! # Re-serialize, folding long records at 80 columns
//! bai2 print -i statement.bai --width 80 -o normalized.bai
//!
//! # JSON projection from stdin
//! cat statement.bai | bai2 format --pretty > statement.json
//! ```
//!
//! Diagnostics go to stderr and are filtered by `RUST_LOG`.

use std::fs::File;
use std::io::{Read, Write, stdin, stdout};
use std::path::PathBuf;

use anyhow::{Context, Result};
use bai2::{Bai2Writer, ReadOptions};
use clap::{Args, Parser, Subcommand};
use tracing::info;

/// Read, validate and rewrite BAI2 bank statement files.
#[derive(Parser, Debug)]
#[command(name = "bai2")]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Read and validate a file, then report what it contains.
    Parse(Io),

    /// Read a file and write it back as BAI2.
    Print {
        #[command(flatten)]
        io: Io,

        /// Fold records longer than this many columns into `88` lines.
        /// Defaults to the file header's physical record length; 0 disables folding.
        #[arg(long)]
        width: Option<usize>,
    },

    /// Read a file and write its JSON projection.
    Format {
        #[command(flatten)]
        io: Io,

        /// Indent the JSON output.
        #[arg(long)]
        pretty: bool,
    },
}

/// Input and output options shared by every subcommand.
#[derive(Args, Debug)]
struct Io {
    /// Input file path. If not specified, reads from stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file path. If not specified, writes to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Accept file headers whose version number is not 2.
    #[arg(long)]
    ignore_version: bool,
}

impl Io {
    fn options(&self) -> ReadOptions {
        ReadOptions { ignore_version: self.ignore_version }
    }

    fn open_input(&self) -> Result<Box<dyn Read>> {
        Ok(match &self.input {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open input file: {}", path.display()))?;
                Box::new(file)
            }
            None => Box::new(stdin().lock()),
        })
    }

    fn open_output(&self) -> Result<Box<dyn Write>> {
        Ok(match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(file)
            }
            None => Box::new(stdout().lock()),
        })
    }

    /// Reads and validates the input file.
    fn load(&self) -> Result<bai2::File> {
        let options = self.options();
        let file = bai2::read_with_options(self.open_input()?, options)
            .context("Failed to read BAI2 input")?;
        file.validate_with_options(&options).context("BAI2 input is invalid")?;
        Ok(file)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    match Cli::parse().command {
        Command::Parse(io) => parse(&io),
        Command::Print { io, width } => print(&io, width),
        Command::Format { io, pretty } => format(&io, pretty),
    }
}

fn parse(io: &Io) -> Result<()> {
    let file = io.load()?;
    let summary = Summary::of(&file);
    info!(groups = summary.groups, accounts = summary.accounts, "file validated");

    let mut output = io.open_output()?;
    writeln!(
        output,
        "Valid BAI2 file: {} group(s), {} account(s), {} detail(s)",
        summary.groups, summary.accounts, summary.details
    )
    .context("Failed to write output")?;
    Ok(())
}

fn print(io: &Io, width: Option<usize>) -> Result<()> {
    let file = io.load()?;

    let mut writer = Bai2Writer::new(io.open_output()?);
    if let Some(width) = width {
        writer = writer.with_width(width);
    }
    writer.write_file(&file).context("Failed to write BAI2 output")?;
    let records = writer.records_written();

    let mut output =
        writer.into_inner().map_err(|e| e.into_error()).context("Failed to flush output")?;
    writeln!(output).context("Failed to write output")?;

    eprintln!("Wrote {records} record(s)");
    Ok(())
}

fn format(io: &Io, pretty: bool) -> Result<()> {
    let file = io.load()?;

    let mut output = io.open_output()?;
    if pretty {
        serde_json::to_writer_pretty(&mut output, &file)
    } else {
        serde_json::to_writer(&mut output, &file)
    }
    .context("Failed to write JSON output")?;
    writeln!(output).context("Failed to write output")?;
    Ok(())
}

/// Envelope counts reported by `parse`.
#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    groups: usize,
    accounts: usize,
    details: usize,
}

impl Summary {
    fn of(file: &bai2::File) -> Self {
        let accounts = file.groups.iter().flat_map(|group| &group.accounts);
        Self {
            groups: file.groups.len(),
            accounts: accounts.clone().count(),
            details: accounts.map(|account| account.details.len()).sum(),
        }
    }
}
