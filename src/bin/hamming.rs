use anyhow::{bail, Context, Result};
use clap::Parser;
use hamming::config::RunConfig;
use hamming::pipeline::{run_random, Injection};
use hamming::report::{write_report, DEFAULT_REPORT_PATH};
use hamming::HammingCode;
use log::info;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Encode a random information vector with a Hamming code, corrupt one bit and correct it.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Number of parity bits (m); prompted for when omitted
    #[clap(short = 'm', long, allow_hyphen_values = true)]
    parity_bits: Option<i64>,

    /// Where to write the report
    #[clap(short, long, default_value = DEFAULT_REPORT_PATH)]
    output: PathBuf,

    /// Seed for the random source, for reproducible runs
    #[clap(long)]
    seed: Option<u64>,

    /// Corrupt this 1-indexed position instead of a random one
    #[clap(long, conflicts_with = "no_error")]
    error_position: Option<usize>,

    /// Leave the codeword uncorrupted
    #[clap(long)]
    no_error: bool,
}

fn prompt_parity_bits() -> Result<i64> {
    print!("Enter the number of parity bits (m): ");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        bail!("no input for the number of parity bits");
    }
    line.trim()
        .parse()
        .with_context(|| format!("`{}` is not an integer", line.trim()))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let parity_bits = match cli.parity_bits {
        Some(parity_bits) => parity_bits,
        None => prompt_parity_bits()?,
    };
    let injection = match (cli.error_position, cli.no_error) {
        (Some(position), _) => Injection::At(position),
        (None, true) => Injection::Skip,
        (None, false) => Injection::Random,
    };
    let config = RunConfig {
        parity_bits,
        injection,
        seed: cli.seed,
        output: cli.output,
    };

    let params = config.validate().context("invalid run configuration")?;
    info!(
        "running Hamming({}, {}) code",
        params.length(),
        params.information_bits()
    );

    let code = HammingCode::from_parameters(params);
    let mut rng = config.rng();
    let record = run_random(&code, config.injection, &mut rng)?;

    write_report(&config.output, &record)
        .with_context(|| format!("failed to write report to {}", config.output.display()))?;

    println!("Result written to {}", config.output.display());
    Ok(())
}
