//! ledquote - CLI tool to price LED-wall quotes.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use ledquote_rs::{
    generate_recap, parse_catalog_file, parse_request_file, price_quote, validate_request,
    CoefficientSet, QuoteError,
};

/// Price LED-wall and display product quotes.
#[derive(Parser, Debug)]
#[command(name = "ledquote")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Quote request file (JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Coefficient record (JSON); defaults are used when missing or unreadable
    #[arg(short, long)]
    coefficients: Option<PathBuf>,

    /// Catalog file (JSON), enables leasing duration checks
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit the priced report as JSON instead of the text recap
    #[arg(long)]
    json: bool,

    /// Validate only, don't price
    #[arg(long)]
    validate: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            let code = e
                .downcast_ref::<QuoteError>()
                .map(|qe| qe.code_value())
                .unwrap_or(1);
            ExitCode::from(code.unsigned_abs().min(255) as u8)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    info!("Processing: {}", args.input.display());

    let request = parse_request_file(&args.input)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;

    info!(
        "Parsed {} wall line(s), {} other line(s)",
        request.wall_lines.len(),
        request.other_lines.len()
    );

    let catalog = match &args.catalog {
        Some(path) => Some(
            parse_catalog_file(path)
                .with_context(|| format!("Failed to parse {}", path.display()))?,
        ),
        None => None,
    };

    // Validate
    let validation = validate_request(&request, catalog.as_ref());

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed {
        anyhow::bail!("Validation failed");
    }

    // Validate-only mode
    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    let coeffs = match &args.coefficients {
        Some(path) => CoefficientSet::load_or_default(path),
        None => CoefficientSet::default(),
    };

    let report = price_quote(&request, &coeffs);

    let rendered = if args.json {
        serde_json::to_string_pretty(&report)?
    } else {
        generate_recap(&report)
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Generated: {}", path.display());
        }
        None => println!("{}", rendered),
    }

    info!(
        "Total HT {:.2} EUR, TTC {:.2} EUR",
        report.totals.total_ht, report.totals.total_ttc
    );

    Ok(())
}
