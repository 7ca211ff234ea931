//! Program to check that a list of services are reachable.
//!
//! Run providing the services to check as `name=url` pairs:
//!
//! ```text
//! cargo run -- api=http://localhost:8080/health db=postgres://localhost:5432
//! ```
//!
//! Run with diagnostic logs (written to the standard error):
//!
//! ```text
//! cargo run -- --log-level debug api=http://localhost:8080/health
//! ```
//!
//! Print the results as JSON:
//!
//! ```text
//! cargo run -- --json api=http://localhost:8080/health | jq
//! ```
use std::io::IsTerminal as _;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use crate::bootstrap::logging::{self, LogLevel};
use crate::cancellation::Cancellation;
use crate::console::printer::{Palette, Printer};
use crate::console::stdout::Console;
use crate::probe::Prober;
use crate::runner::{Format, Runner};
use crate::target::Target;
use crate::{signals, DEFAULT_TIMEOUT_SEC};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Services to check, as `name=url` pairs.
    targets: Vec<String>,

    /// Timeout in seconds for the TCP connection and for the HTTP request.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SEC)]
    timeout: u64,

    /// Verbosity of the diagnostic logs written to the standard error.
    #[arg(long, value_enum, default_value_t = LogLevel::Off)]
    log_level: LogLevel,

    /// Do not color the report.
    #[arg(long)]
    no_color: bool,

    /// Print the results as a JSON array instead of the text report.
    #[arg(long)]
    json: bool,
}

/// Runs the connectivity test with the command line arguments.
///
/// Returns the exit code for the process. It is a failure when no target was
/// given, when the HTTP client cannot be built, when any target is
/// unreachable, or when the run is cancelled. The error is reported as an
/// `Error: ...` line: on the standard output after the text report, on the
/// standard error in JSON format so the output stays a valid JSON document.
pub async fn run() -> ExitCode {
    let args = Args::parse();

    let console = Console::new();
    let palette = Palette::new(!args.no_color && std::io::stdout().is_terminal());

    if args.targets.is_empty() {
        print_usage(&console, palette);
        return ExitCode::FAILURE;
    }

    logging::setup(args.log_level);

    let format = if args.json { Format::Json } else { Format::Text };

    match check(&args, console, palette, format).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(&console, format, &err);
            ExitCode::FAILURE
        }
    }
}

async fn check(args: &Args, console: Console, palette: Palette, format: Format) -> Result<()> {
    let cancellation = Cancellation::new();
    let _listener = signals::cancel_on_shutdown(cancellation.clone(), console);

    let mut targets: Vec<Target> = args.targets.iter().map(String::as_str).map(Target::parse).collect();

    let prober = Prober::new(Duration::from_secs(args.timeout)).context("failed to build the HTTP client")?;

    Runner::new(&prober, &console, palette, format)
        .run(&mut targets, &cancellation)
        .await?;

    Ok(())
}

fn report_failure(printer: &impl Printer, format: Format, err: &anyhow::Error) {
    let message = format!("Error: {err:#}");

    match format {
        Format::Text => printer.println(&message),
        Format::Json => printer.eprintln(&message),
    }
}

fn print_usage(printer: &impl Printer, palette: Palette) {
    printer.println(&palette.cyan("apiconnector - API Connectivity Tester"));
    printer.println("");
    printer.println("Usage: apiconnector <service1> <service2> ...");
    printer.println("Format: name=http://url[:port]");
    printer.println("");
    printer.println("Examples:");
    printer.println("  apiconnector api=http://localhost:8080/health");
    printer.println("  apiconnector db=postgres://localhost:5432");
}
