//! docverify CLI entry point
//!
//! Validates uploaded onboarding documents and reports a verdict, risk score,
//! anomalies and recommendations for each.
//!
//! Exit codes:
//! - 0: every document is valid
//! - 1: one or more documents are invalid
//! - 3: runtime error (bad arguments, intake or configuration failure)

use clap::Parser;
use std::process::ExitCode;
use tracing::debug;

use docverify::checks;
use docverify::cli::args::{Cli, Command, ListArgs, ValidateArgs};
use docverify::cli::output::{format_rule_tables, get_formatter};
use docverify::intake::DocumentIntake;
use docverify::version::get_build_info;
use docverify::{DocVerifyError, DocumentType, DocumentValidator, RngSource, ValidationReport};

const EXIT_INVALID: u8 = 1;
const EXIT_RUNTIME_ERROR: u8 = 3;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_RUNTIME_ERROR)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(cli.verbose, cli.debug);

    let outcome = match cli.command {
        Command::Validate(args) => run_validate(&args),
        Command::List(args) => run_list(&args),
        Command::Version => {
            println!("{}", get_build_info());
            Ok(ExitCode::SUCCESS)
        }
    };

    match outcome {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_RUNTIME_ERROR)
        }
    }
}

/// Initialize tracing/logging based on CLI flags.
fn init_logging(verbose: bool, debug: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    debug!("Logging initialized at level: {}", level);
}

fn run_validate(args: &ValidateArgs) -> Result<ExitCode, DocVerifyError> {
    let config = args.effective_config()?;
    let form = args.intake_form()?;
    let intake = DocumentIntake::from_config(&config);

    let documents = intake.accept_all(&args.files, &form)?;

    let validator = DocumentValidator::default();
    let report: ValidationReport = match config.random_seed {
        Some(seed) => {
            debug!(seed, "using seeded random source");
            validator.validate_all(documents, &mut RngSource::seeded(seed))
        }
        None => validator.validate_all(documents, &mut RngSource::from_entropy()),
    };

    let formatter = get_formatter(config.format, config.color, args.quiet);
    println!("{}", formatter.format(&report)?);

    if report.has_invalid() {
        Ok(ExitCode::from(EXIT_INVALID))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn run_list(args: &ListArgs) -> Result<ExitCode, DocVerifyError> {
    let tables = match &args.document_type {
        Some(label) => match label.parse::<DocumentType>() {
            Ok(t) => vec![checks::rule_table(t)],
            Err(e) => {
                eprintln!("Error: {}", e);
                return Ok(ExitCode::from(EXIT_RUNTIME_ERROR));
            }
        },
        None => checks::all_rule_tables(),
    };

    print!("{}", format_rule_tables(&tables));
    Ok(ExitCode::SUCCESS)
}
