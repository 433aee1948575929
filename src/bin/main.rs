use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use lox_scan::Reporter;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process,
};
use tracing::{debug, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const EX_USAGE: i32 = 64;
const EX_DATAERR: i32 = 65;
const EX_NOINPUT: i32 = 66;
const EX_IOERR: i32 = 74;

/// Print the tokens of a Lox script, or of each line typed at the prompt.
#[derive(Parser, Debug)]
#[command(name = "loxscan", version)]
struct Cli {
    /// Script to scan. Starts an interactive prompt when omitted.
    script: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace). Overrides RUST_LOG.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Disable colors in log output.
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { EX_USAGE } else { 0 };
            // logging is not set up yet and stderr is the only place left to complain
            let _ = e.print();
            process::exit(code);
        },
    };

    if let Err(e) = init_logging(cli.verbose, cli.no_color) {
        eprintln!("{:#}", e);
    }

    let result = match cli.script.as_deref() {
        Some(path) => run_file(path),
        None => run_prompt(),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(EX_IOERR);
        },
    }
}

fn init_logging(verbose: u8, no_color: bool) -> Result<()> {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .context("failed to initialize logging")
}

fn run_file(path: &Path) -> Result<i32> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Could not read {}: {}", path.display(), e);
            return Ok(EX_NOINPUT);
        },
    };
    let contents = String::from_utf8_lossy(&bytes);
    debug!(path = %path.display(), bytes = bytes.len(), "scanning file");

    let mut lox = Lox::new(io::stdout().lock(), io::stderr());
    let had_error = lox.run(&contents).context("could not write tokens")?;

    Ok(if had_error { EX_DATAERR } else { 0 })
}

fn run_prompt() -> Result<i32> {
    let mut rl = DefaultEditor::new().context("could not start the line editor")?;
    let mut lox = Lox::new(io::stdout(), io::stderr());

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                if let Err(e) = rl.add_history_entry(line.as_str()) {
                    warn!("could not record history: {}", e);
                }
                // each line gets a fresh reporter, so an error never outlives its line
                lox.run(&line).context("could not write tokens")?;
            },
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("could not read from the prompt"),
        }
    }

    Ok(0)
}

struct Lox<Out, ErrOut> {
    out: Out,
    err_out: ErrOut,
}

impl<Out: Write, ErrOut: Write> Lox<Out, ErrOut> {
    fn new(out: Out, err_out: ErrOut) -> Self {
        Self { out, err_out }
    }

    /// Scans `source` and prints its tokens. Returns whether any lexical
    /// error was reported.
    fn run(&mut self, source: &str) -> io::Result<bool> {
        let mut reporter = Reporter::new(&mut self.err_out);
        let tokens = lox_scan::scan(source, &mut reporter);

        for token in tokens.iter() {
            writeln!(self.out, "{}", token)?;
        }
        self.out.flush()?;

        Ok(reporter.had_error())
    }
}
